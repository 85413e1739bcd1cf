pub mod authenticate;
pub mod register;

// Re-export for convenience
pub use authenticate::LoginOutcome;
pub use register::{RegisterError, RegisterOutcome};
