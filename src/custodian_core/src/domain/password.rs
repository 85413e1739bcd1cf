use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password is required")]
    Empty,
    #[error("Password must be at least {min} characters long")]
    TooShort { min: usize },
}

/// A non-empty password, held verbatim.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Minimum length accepted for a new account.
    pub const MIN_LENGTH: usize = 6;

    /// Length in UTF-16 code units, so a character outside the BMP counts twice.
    pub fn len_utf16(&self) -> usize {
        self.0.expose_secret().encode_utf16().count()
    }

    /// Checks the length rule applied at registration.
    pub fn ensure_min_length(&self) -> Result<(), PasswordError> {
        if self.len_utf16() < Self::MIN_LENGTH {
            return Err(PasswordError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }
        Ok(())
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
