//! Anonymous user identity.

use uuid::Uuid;

/// An anonymous user, identified only by a random UUID.
///
/// Users are created on first contact without a valid signed cookie and are
/// never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
}

impl User {
    /// Allocates a fresh user with a v4 UUID in hyphenated text form.
    pub fn generate() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_uuid_v4() {
        let user = User::generate();
        let parsed = Uuid::parse_str(&user.id).unwrap();

        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(user.id.len(), 36);
    }

    #[test]
    fn test_generate_is_unique() {
        assert_ne!(User::generate(), User::generate());
    }
}
