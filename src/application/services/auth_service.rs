//! Anonymous user identity backed by HMAC-signed cookies.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::repositories::Storage;
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// The user a request is acting as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: String,
    pub token: String,
    /// `true` when the request carried a valid signed cookie pair, `false`
    /// when the user was created for this request.
    pub authenticated: bool,
}

/// Service that signs user ids and resolves request identities.
///
/// The token stored next to the `user_id` cookie is
/// `hex(HMAC-SHA256(signing_secret, user_id))`. Without the secret a client
/// cannot mint a token for another user's id.
pub struct AuthService {
    storage: Arc<dyn Storage>,
    signing_secret: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `storage` - used to allocate new users
    /// - `signing_secret` - HMAC key; must match the value used when cookies were issued
    pub fn new(storage: Arc<dyn Storage>, signing_secret: impl Into<String>) -> Self {
        Self {
            storage,
            signing_secret: signing_secret.into(),
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length")
    }

    /// Signs a user id. Returns a 64-character lowercase hex-encoded MAC.
    pub fn sign(&self, user_id: &str) -> String {
        let mut mac = self.mac();
        mac.update(user_id.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Checks `token` against the signature of `user_id` in constant time.
    pub fn verify(&self, user_id: &str, token: &str) -> bool {
        let Ok(signature) = hex::decode(token) else {
            return false;
        };

        let mut mac = self.mac();
        mac.update(user_id.as_bytes());
        mac.verify_slice(&signature).is_ok()
    }

    /// Resolves the user for a request from its cookie values.
    ///
    /// A missing id or a token that does not verify yields a freshly created
    /// user with a new signature.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if a new user cannot be persisted.
    pub async fn identify(
        &self,
        user_id: Option<&str>,
        token: Option<&str>,
    ) -> Result<CurrentUser, AppError> {
        if let (Some(user_id), Some(token)) = (user_id, token)
            && self.verify(user_id, token)
        {
            return Ok(CurrentUser {
                user_id: user_id.to_string(),
                token: token.to_string(),
                authenticated: true,
            });
        }

        let user_id = self.storage.create_user().await?;
        tracing::debug!(%user_id, "Created user");

        Ok(CurrentUser {
            token: self.sign(&user_id),
            user_id,
            authenticated: false,
        })
    }
}
