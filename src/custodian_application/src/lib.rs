pub mod account_service;
pub mod use_cases;

pub use account_service::AccountService;
pub use use_cases::{LoginOutcome, RegisterError, RegisterOutcome};

#[cfg(test)]
pub(crate) mod test_support;
