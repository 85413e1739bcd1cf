//! # Custodian - Account Registration Service Library
//!
//! This is a facade crate that re-exports all public APIs from the account service components.
//! Use this crate to get access to registration and login functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! custodian = { path = "../custodian" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Account`, `StorageKey`
//! - **Repository traits**: `AccountStore`
//! - **Service**: `AccountService` with `register` and `authenticate`
//! - **Adapters**: `RestAccountStore`, `HashMapAccountStore`, settings, axum routes
//! - **HTTP front**: `AccountApi` - router and standalone server

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod domain {
    pub use custodian_core::*;
}

// Re-export most commonly used core types at the root level
pub use custodian_core::{
    Account, Credentials, CredentialsError, Email, EmailError, Password, PasswordError, StorageKey,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use custodian_core::{AccountLookup, AccountStore, AccountStoreError};
}

// Re-export repository traits at root level
pub use custodian_core::{AccountLookup, AccountStore, AccountStoreError};

// ============================================================================
// Account Service (Application Layer)
// ============================================================================

pub use custodian_application::{AccountService, LoginOutcome, RegisterError, RegisterOutcome};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use custodian_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use custodian_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use custodian_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use custodian_adapters::{
    config::{AllowedOrigins, Settings},
    persistence::{HashMapAccountStore, RestAccountStore},
};

// ============================================================================
// Account API (Main Entry Point)
// ============================================================================

/// HTTP front for the account service
pub use custodian_service::{AccountApi, build_http_client, configure_account_store};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
