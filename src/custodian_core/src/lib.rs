pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::Account,
    credentials::{Credentials, CredentialsError},
    email::{Email, EmailError},
    password::{Password, PasswordError},
    storage_key::StorageKey,
};

pub use ports::repositories::{AccountLookup, AccountStore, AccountStoreError};
