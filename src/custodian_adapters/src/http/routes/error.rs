use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use custodian_application::{LoginOutcome, RegisterError, RegisterOutcome};
use custodian_core::Password;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Email and password are required")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least {} characters long", Password::MIN_LENGTH)]
    PasswordTooShort,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not found")]
    RouteNotFound,

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            ApiError::MissingFields
            | ApiError::InvalidEmail
            | ApiError::PasswordTooShort
            | ApiError::UserAlreadyExists => (StatusCode::BAD_REQUEST, self.to_string()),

            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),

            ApiError::RouteNotFound => (StatusCode::NOT_FOUND, self.to_string()),

            ApiError::MalformedBody(_) | ApiError::UnexpectedError(_) => {
                tracing::error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("Internal server error"),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::AccountStoreError(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::MalformedBody(error.to_string())
    }
}

/// Splits a registration outcome into the success path and the error path.
pub fn registered(outcome: RegisterOutcome) -> Result<(), ApiError> {
    match outcome {
        RegisterOutcome::Created => Ok(()),
        RegisterOutcome::MissingFields => Err(ApiError::MissingFields),
        RegisterOutcome::InvalidEmail => Err(ApiError::InvalidEmail),
        RegisterOutcome::PasswordTooShort => Err(ApiError::PasswordTooShort),
        RegisterOutcome::AlreadyExists => Err(ApiError::UserAlreadyExists),
    }
}

/// Splits a login outcome into the success path and the error path.
pub fn authenticated(outcome: LoginOutcome) -> Result<(), ApiError> {
    match outcome {
        LoginOutcome::AuthSuccess => Ok(()),
        LoginOutcome::MissingFields => Err(ApiError::MissingFields),
        LoginOutcome::InvalidEmail => Err(ApiError::InvalidEmail),
        LoginOutcome::InvalidCredentials => Err(ApiError::InvalidCredentials),
    }
}
