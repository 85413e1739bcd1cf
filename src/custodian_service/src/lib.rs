mod account_api;
mod helpers;
mod tracing;

pub use account_api::AccountApi;
pub use helpers::{build_http_client, configure_account_store, init_tracing};
