use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use custodian_core::{Account, AccountLookup, AccountStore, AccountStoreError, Email, StorageKey};

/// In-process store with the same keying and overwrite rules as the
/// document store.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<StorageKey, Account>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn get(&self, email: &Email) -> AccountLookup {
        let accounts = self.accounts.read().await;
        accounts
            .get(&StorageKey::from(email))
            .cloned()
            .map_or(AccountLookup::NotFound, AccountLookup::Found)
    }

    async fn put(&self, email: &Email, account: Account) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        accounts.insert(StorageKey::from(email), account);
        Ok(())
    }
}
