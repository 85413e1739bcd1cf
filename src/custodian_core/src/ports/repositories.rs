use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{account::Account, email::Email};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Store rejected write with status {0}")]
    Rejected(u16),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Rejected(a), Self::Rejected(b)) => a == b,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Result of reading an account.
///
/// A missing record and a failed read are the same thing to callers; stores
/// log the difference themselves.
#[derive(Debug, Clone)]
pub enum AccountLookup {
    Found(Account),
    NotFound,
}

impl AccountLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Persistence for accounts, addressed by the normalized email key.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn get(&self, email: &Email) -> AccountLookup;

    /// Writes `account` at the key for `email`, replacing whatever is there.
    async fn put(&self, email: &Email, account: Account) -> Result<(), AccountStoreError>;
}
