//! Link shortening, expansion and listing service.

use std::sync::Arc;

use crate::domain::entities::{BatchInput, BatchOutput};
use crate::domain::errors::StorageError;
use crate::domain::repositories::Storage;
use crate::error::AppError;
use serde_json::json;

/// Result of a shortening request.
///
/// Both variants carry a usable short code; they only differ in whether the
/// link was stored by this call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    Created(String),
    Existing(String),
}

impl ShortenOutcome {
    pub fn short_code(&self) -> &str {
        match self {
            ShortenOutcome::Created(code) | ShortenOutcome::Existing(code) => code,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, ShortenOutcome::Created(_))
    }
}

/// A link owned by a user, with both URLs resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUrl {
    pub short_url: String,
    pub original_url: String,
}

/// Rejects URLs that cannot be stored or later sent back in a `Location`
/// header. The URL is otherwise kept byte for byte, since its code is a hash
/// of the exact input.
fn check_long_url(long_url: &str) -> Result<(), String> {
    if long_url.is_empty() {
        return Err("Please specify valid url in body".to_string());
    }
    if long_url.chars().any(char::is_control) {
        return Err("url must not contain control characters".to_string());
    }
    Ok(())
}

/// Service translating HTTP-level operations into storage calls.
///
/// Owns the public base URL used to turn short codes into absolute links.
pub struct LinkService {
    storage: Arc<dyn Storage>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(storage: Arc<dyn Storage>, base_url: impl Into<String>) -> Self {
        Self {
            storage,
            base_url: base_url.into(),
        }
    }

    /// Shortens `long_url`, optionally recording it for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or contains
    /// control characters.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn shorten(
        &self,
        long_url: &str,
        user_id: Option<String>,
    ) -> Result<ShortenOutcome, AppError> {
        check_long_url(long_url).map_err(|message| AppError::bad_request(message, json!({})))?;

        match self.storage.save_long_url(long_url, user_id).await {
            Ok(code) => Ok(ShortenOutcome::Created(code)),
            Err(StorageError::LinkAlreadyExists { short_code }) => {
                tracing::debug!(%short_code, "Link already exists");
                Ok(ShortenOutcome::Existing(short_code))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Resolves a short code to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn expand(&self, short_code: &str) -> Result<String, AppError> {
        self.storage
            .get_long_url(short_code)
            .await?
            .ok_or_else(|| AppError::not_found("Short url not found", json!({ "code": short_code })))
    }

    /// Lists the links saved by `user_id`, in save order.
    ///
    /// Codes whose link no longer exists are skipped. An unknown user yields
    /// an empty list.
    pub async fn user_urls(&self, user_id: &str) -> Result<Vec<UserUrl>, AppError> {
        let Some(codes) = self.storage.get_user_links(user_id).await? else {
            return Ok(Vec::new());
        };

        let mut urls = Vec::with_capacity(codes.len());
        for code in codes {
            if let Some(original_url) = self.storage.get_long_url(&code).await? {
                urls.push(UserUrl {
                    short_url: self.short_url(&code),
                    original_url,
                });
            }
        }

        Ok(urls)
    }

    /// Shortens every record and returns absolute short URLs in input order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any record has an empty URL or one
    /// with control characters; nothing is saved in that case.
    /// Returns [`AppError::Internal`] if storage fails part-way; records
    /// before the failure stay saved.
    pub async fn shorten_batch(
        &self,
        records: Vec<BatchInput>,
    ) -> Result<Vec<BatchOutput>, AppError> {
        for record in &records {
            check_long_url(&record.original_url).map_err(|message| {
                AppError::bad_request(message, json!({ "correlation_id": record.correlation_id }))
            })?;
        }

        let output = self.storage.save_batch(&records).await?;

        Ok(output
            .into_iter()
            .map(|item| BatchOutput {
                short_url: self.short_url(&item.short_url),
                correlation_id: item.correlation_id,
            })
            .collect())
    }

    /// Checks storage availability.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.storage.ping().await.map_err(AppError::from)
    }

    /// Constructs the absolute short URL for a code.
    pub fn short_url(&self, short_code: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            short_code.trim_start_matches('/')
        )
    }
}
