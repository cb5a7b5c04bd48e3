//! Mock credential store
//!
//! Stands in for a real auth service: an opaque
//! `login(email, password)` check against seeded users. Passwords are
//! held as sha256 digests; nothing else about credential storage leaks
//! into the workflow. Token issuance is out of scope.

use sha2::{Digest, Sha256};
use shared::ServiceError;
use shared::models::User;

/// A seeded user with its password digest
#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password_sha256: String,
}

/// Credential store with seeded staff/admin accounts
#[derive(Debug)]
pub struct CredentialStore {
    users: Vec<StoredUser>,
}

fn digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

impl CredentialStore {
    /// Build a store from (user, plaintext password) pairs
    pub fn new(accounts: Vec<(User, &str)>) -> Self {
        let users = accounts
            .into_iter()
            .map(|(user, password)| StoredUser {
                user,
                password_sha256: digest(password),
            })
            .collect();
        Self { users }
    }

    /// Check credentials, returning the identity without any secrets
    pub fn login(&self, email: &str, password: &str) -> Result<User, ServiceError> {
        let candidate = digest(password);
        self.users
            .iter()
            .find(|stored| stored.user.email == email && stored.password_sha256 == candidate)
            .map(|stored| stored.user.clone())
            .ok_or(ServiceError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use shared::models::Role;

    #[test]
    fn valid_credentials_return_the_user() {
        let store = CredentialStore::new(seed::users());
        let user = store.login("staff@example.com", "password").unwrap();
        assert_eq!(user.role, Role::Staff);
        assert_eq!(user.name, "Staff Sam");
    }

    #[test]
    fn wrong_password_is_rejected() {
        let store = CredentialStore::new(seed::users());
        let err = store.login("staff@example.com", "letmein").unwrap_err();
        assert_eq!(err, ServiceError::InvalidCredentials);
    }

    #[test]
    fn unknown_email_is_rejected() {
        let store = CredentialStore::new(seed::users());
        assert!(store.login("nobody@example.com", "password").is_err());
    }
}
