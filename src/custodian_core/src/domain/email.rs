use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

// One non-space, non-@ run, an @, then a run containing at least one dot.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email is required")]
    Empty,
    #[error("Invalid email format")]
    Invalid,
}

/// An email address that has passed the `local@domain.tld` shape check.
///
/// The address is kept exactly as supplied: no trimming, no case folding.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    /// Returns true when `candidate` has the `local@domain.tld` shape.
    pub fn is_well_formed(candidate: &str) -> bool {
        EMAIL_PATTERN.is_match(candidate)
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = EmailError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let raw = value.expose_secret();
        if raw.is_empty() {
            return Err(EmailError::Empty);
        }
        if !Self::is_well_formed(raw) {
            return Err(EmailError::Invalid);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
