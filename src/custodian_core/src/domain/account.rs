use secrecy::ExposeSecret;

use super::{email::Email, password::Password, storage_key::StorageKey};

/// A registered account as held by the document store.
#[derive(Debug, Clone)]
pub struct Account {
    email: Email,
    password: Password,
}

impl Account {
    pub fn new(email: Email, password: Password) -> Self {
        Self { email, password }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn storage_key(&self) -> StorageKey {
        StorageKey::from(&self.email)
    }

    /// Plaintext, case-sensitive equality against the stored password.
    pub fn password_matches(&self, candidate: &Password) -> bool {
        self.password.as_ref().expose_secret() == candidate.as_ref().expose_secret()
    }
}
