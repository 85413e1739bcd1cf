use custodian_core::{AccountLookup, AccountStore, Credentials, CredentialsError};
use secrecy::Secret;

use crate::account_service::AccountService;

/// What a login attempt came to.
///
/// An unknown email and a wrong password are both `InvalidCredentials`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    AuthSuccess,
    MissingFields,
    InvalidEmail,
    InvalidCredentials,
}

impl From<CredentialsError> for LoginOutcome {
    fn from(error: CredentialsError) -> Self {
        match error {
            CredentialsError::MissingFields => LoginOutcome::MissingFields,
            CredentialsError::InvalidEmail => LoginOutcome::InvalidEmail,
            // Login does not apply the length rule; a short password simply fails to match.
            CredentialsError::PasswordTooShort { .. } => LoginOutcome::InvalidCredentials,
        }
    }
}

impl<S> AccountService<S>
where
    S: AccountStore,
{
    /// Check an email/password pair against the stored account.
    #[tracing::instrument(name = "AccountService::authenticate", skip_all)]
    pub async fn authenticate(&self, email: Secret<String>, password: Secret<String>) -> LoginOutcome {
        let Credentials { email, password } = match Credentials::parse(email, password) {
            Ok(credentials) => credentials,
            Err(e) => {
                tracing::debug!(reason = %e, "Login rejected");
                return e.into();
            }
        };

        match self.store.get(&email).await {
            AccountLookup::Found(account) if account.password_matches(&password) => {
                tracing::info!("Login succeeded");
                LoginOutcome::AuthSuccess
            }
            AccountLookup::Found(_) | AccountLookup::NotFound => {
                tracing::info!("Login failed");
                LoginOutcome::InvalidCredentials
            }
        }
    }
}
