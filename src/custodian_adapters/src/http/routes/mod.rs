pub mod error;
pub mod fallback;
pub mod login;
pub mod signup;

pub use error::{ApiError, ErrorResponse, MessageResponse};
pub use fallback::not_found;
pub use login::login;
pub use signup::{CredentialsRequest, signup};
