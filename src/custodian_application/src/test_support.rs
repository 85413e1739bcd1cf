use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use custodian_core::{
    Account, AccountLookup, AccountStore, AccountStoreError, Email, Password, StorageKey,
};
use secrecy::Secret;
use tokio::sync::RwLock;

// Mock account store for testing
#[derive(Clone, Default)]
pub struct MockAccountStore {
    pub accounts: Arc<RwLock<HashMap<StorageKey, Account>>>,
    pub unreachable: bool,
    pub reject_writes: bool,
    pub puts: Arc<AtomicUsize>,
}

impl MockAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn rejecting_writes() -> Self {
        Self {
            reject_writes: true,
            ..Self::default()
        }
    }

    pub async fn seed(&self, email: &str, password: &str) {
        let account = Account::new(email_of(email), password_of(password));
        self.accounts
            .write()
            .await
            .insert(account.storage_key(), account);
    }

    pub async fn stored_password(&self, email: &str) -> Option<String> {
        use secrecy::ExposeSecret;
        let accounts = self.accounts.read().await;
        accounts
            .get(&StorageKey::normalize(email))
            .map(|a| a.password().as_ref().expose_secret().clone())
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl AccountStore for MockAccountStore {
    async fn get(&self, email: &Email) -> AccountLookup {
        if self.unreachable {
            return AccountLookup::NotFound;
        }
        let accounts = self.accounts.read().await;
        match accounts.get(&StorageKey::from(email)) {
            Some(account) => AccountLookup::Found(account.clone()),
            None => AccountLookup::NotFound,
        }
    }

    async fn put(&self, email: &Email, account: Account) -> Result<(), AccountStoreError> {
        if self.unreachable || self.reject_writes {
            return Err(AccountStoreError::Rejected(503));
        }
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.accounts
            .write()
            .await
            .insert(StorageKey::from(email), account);
        Ok(())
    }
}

pub fn secret(raw: &str) -> Secret<String> {
    Secret::from(raw.to_string())
}

pub fn email_of(raw: &str) -> Email {
    Email::try_from(secret(raw)).unwrap()
}

pub fn password_of(raw: &str) -> Password {
    Password::try_from(secret(raw)).unwrap()
}
