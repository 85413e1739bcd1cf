use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

use super::{
    email::{Email, EmailError},
    password::{Password, PasswordError},
};

/// Validation failures, in the order they are checked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Email and password are required")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },
}

impl From<EmailError> for CredentialsError {
    fn from(error: EmailError) -> Self {
        match error {
            EmailError::Empty => CredentialsError::MissingFields,
            EmailError::Invalid => CredentialsError::InvalidEmail,
        }
    }
}

impl From<PasswordError> for CredentialsError {
    fn from(error: PasswordError) -> Self {
        match error {
            PasswordError::Empty => CredentialsError::MissingFields,
            PasswordError::TooShort { min } => CredentialsError::PasswordTooShort { min },
        }
    }
}

/// An email/password pair that passed the presence and shape checks.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: Email,
    pub password: Password,
}

impl Credentials {
    /// Runs the checks shared by signup and login.
    ///
    /// Both fields are tested for presence before the email shape is looked
    /// at, so an empty password next to a malformed email is `MissingFields`.
    pub fn parse(email: Secret<String>, password: Secret<String>) -> Result<Self, CredentialsError> {
        if email.expose_secret().is_empty() || password.expose_secret().is_empty() {
            return Err(CredentialsError::MissingFields);
        }

        let email = Email::try_from(email)?;
        let password = Password::try_from(password)?;

        Ok(Self { email, password })
    }

    /// Like [`Credentials::parse`], followed by the new-account length rule.
    pub fn parse_new(
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<Self, CredentialsError> {
        let credentials = Self::parse(email, password)?;
        credentials.password.ensure_min_length()?;
        Ok(credentials)
    }
}
