use custodian_core::{
    Account, AccountLookup, AccountStore, AccountStoreError, Email, Password, StorageKey,
};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Account store backed by a JSON document service.
///
/// Each account lives at `{base_url}/users/{key}.json`, where `key` is the
/// normalized email. Every request carries the secret as the `auth` query
/// parameter.
#[derive(Clone)]
pub struct RestAccountStore {
    http_client: Client,
    base_url: String,
    auth_secret: Secret<String>,
}

impl RestAccountStore {
    pub fn new(base_url: String, auth_secret: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            auth_secret,
        }
    }

    fn document_url(&self, key: &StorageKey) -> Result<Url, DocumentError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| DocumentError::Url(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| DocumentError::Url(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .push(USERS_COLLECTION)
            .push(&format!("{key}.json"));

        url.query_pairs_mut()
            .append_pair(AUTH_QUERY_PARAM, self.auth_secret.expose_secret());

        Ok(url)
    }

    async fn fetch(&self, key: &StorageKey) -> Result<Option<StoredAccount>, DocumentError> {
        let url = self.document_url(key)?;

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| DocumentError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocumentError::Status(status.as_u16()));
        }

        // A path with no document reads back as JSON `null`.
        response
            .json::<Option<StoredAccount>>()
            .await
            .map_err(|e| DocumentError::Malformed(e.without_url()))
    }
}

#[async_trait::async_trait]
impl AccountStore for RestAccountStore {
    #[tracing::instrument(name = "Fetching account from document store", skip_all)]
    async fn get(&self, email: &Email) -> AccountLookup {
        let key = StorageKey::from(email);

        let stored = match self.fetch(&key).await {
            Ok(Some(stored)) => stored,
            Ok(None) => return AccountLookup::NotFound,
            Err(e) => {
                tracing::warn!(error = %e, "Account lookup failed, treating as not found");
                return AccountLookup::NotFound;
            }
        };

        match stored.into_account() {
            Ok(account) => AccountLookup::Found(account),
            Err(e) => {
                tracing::warn!(error = %e, "Stored account document is unusable, treating as not found");
                AccountLookup::NotFound
            }
        }
    }

    #[tracing::instrument(name = "Writing account to document store", skip_all)]
    async fn put(&self, email: &Email, account: Account) -> Result<(), AccountStoreError> {
        let key = StorageKey::from(email);
        let url = self
            .document_url(&key)
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        let document = AccountDocument {
            email: account.email().as_ref().expose_secret(),
            password: account.password().as_ref().expose_secret(),
        };

        let response = self
            .http_client
            .put(url)
            .json(&document)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!(error = %e, "Account write did not reach the store");
                AccountStoreError::UnexpectedError(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Store rejected account write");
            return Err(AccountStoreError::Rejected(status.as_u16()));
        }

        Ok(())
    }
}

const USERS_COLLECTION: &str = "users";
const AUTH_QUERY_PARAM: &str = "auth";

#[derive(Debug, Error)]
enum DocumentError {
    #[error("Invalid store URL: {0}")]
    Url(String),
    #[error("Request failed: {0}")]
    Transport(reqwest::Error),
    #[error("Store answered with status {0}")]
    Status(u16),
    #[error("Response is not an account document: {0}")]
    Malformed(reqwest::Error),
}

#[derive(Serialize, Debug)]
struct AccountDocument<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct StoredAccount {
    email: Secret<String>,
    password: Secret<String>,
}

impl StoredAccount {
    fn into_account(self) -> Result<Account, String> {
        let email = Email::try_from(self.email).map_err(|e| e.to_string())?;
        let password = Password::try_from(self.password).map_err(|e| e.to_string())?;
        Ok(Account::new(email, password))
    }
}
