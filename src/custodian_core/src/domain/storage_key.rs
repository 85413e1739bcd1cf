use std::fmt;

use secrecy::ExposeSecret;

use super::email::Email;

// Characters the document store refuses in a path segment.
const RESERVED: [char; 5] = ['.', '#', '$', '[', ']'];
const REPLACEMENT: char = '_';

/// Document key derived from an email address.
///
/// The mapping is lossy: `a.b@x.com` and `a_b@x_com` land on the same key.
/// Stores address records by this key only, so such emails share one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn normalize(raw: &str) -> Self {
        let key = raw
            .chars()
            .map(|c| if RESERVED.contains(&c) { REPLACEMENT } else { c })
            .collect();
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Email> for StorageKey {
    fn from(email: &Email) -> Self {
        Self::normalize(email.as_ref().expose_secret())
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
