//! User domain types.

use serde::{Deserialize, Serialize};

use cartwheel_core::{Email, UserId};

/// A registered user.
///
/// Placeholder shape for the future account store. The intended schema is a
/// `users` table with a unique index on `email`; nothing enforces that yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address (intended unique).
    pub email: Email,
    /// Password hash. Plaintext passwords are never stored.
    pub password_hash: String,
    /// Whether the account is active.
    pub is_active: bool,
}

impl User {
    /// Default activation state for newly registered users.
    pub const DEFAULT_ACTIVE: bool = true;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serde_shape() {
        let user = User {
            id: UserId::new(1),
            email: Email::parse("user@example.com").unwrap(),
            password_hash: "$argon2id$stub".to_string(),
            is_active: User::DEFAULT_ACTIVE,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["email"], "user@example.com");
        assert_eq!(json["is_active"], true);
    }
}
