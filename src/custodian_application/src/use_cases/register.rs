use custodian_core::{Account, AccountStore, AccountStoreError, Credentials, CredentialsError};
use secrecy::Secret;

use crate::account_service::AccountService;

/// What a registration attempt came to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created,
    MissingFields,
    InvalidEmail,
    PasswordTooShort,
    AlreadyExists,
}

impl From<CredentialsError> for RegisterOutcome {
    fn from(error: CredentialsError) -> Self {
        match error {
            CredentialsError::MissingFields => RegisterOutcome::MissingFields,
            CredentialsError::InvalidEmail => RegisterOutcome::InvalidEmail,
            CredentialsError::PasswordTooShort { .. } => RegisterOutcome::PasswordTooShort,
        }
    }
}

/// Error types specific to registration
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
}

impl<S> AccountService<S>
where
    S: AccountStore,
{
    /// Register a new account.
    ///
    /// Checks run in order and the first failure decides the outcome:
    /// presence of both fields, email shape, password length, existing record.
    ///
    /// # Returns
    /// The outcome, or `RegisterError` when the store refuses the write.
    #[tracing::instrument(name = "AccountService::register", skip_all)]
    pub async fn register(
        &self,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<RegisterOutcome, RegisterError> {
        let Credentials { email, password } = match Credentials::parse_new(email, password) {
            Ok(credentials) => credentials,
            Err(e) => {
                tracing::debug!(reason = %e, "Registration rejected");
                return Ok(e.into());
            }
        };

        if self.store.get(&email).await.is_found() {
            tracing::debug!("Account already exists");
            return Ok(RegisterOutcome::AlreadyExists);
        }

        // Nothing holds the key between the lookup and this write. Two signups
        // racing on one key both succeed and the later write is what remains.
        let account = Account::new(email.clone(), password);
        self.store.put(&email, account).await?;

        tracing::info!("Account created");
        Ok(RegisterOutcome::Created)
    }
}
