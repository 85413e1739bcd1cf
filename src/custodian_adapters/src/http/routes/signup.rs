use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use custodian_application::AccountService;
use custodian_core::AccountStore;
use secrecy::Secret;
use serde::Deserialize;
use serde_json::Value;

use super::error::{ApiError, MessageResponse, registered};

/// Body accepted by `/signup` and `/login`.
///
/// Absent or `null` fields read as empty, which the service reports as
/// missing fields. So does a JSON value that is not an object, except
/// `null`, which is rejected as malformed.
#[derive(Default, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: Option<Secret<String>>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
}

impl CredentialsRequest {
    /// Parses a raw body. Content type is not checked.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Object(fields) => Ok(serde_json::from_value(Value::Object(fields))?),
            Value::Null => Err(ApiError::MalformedBody(String::from("body is null"))),
            // Arrays and scalars have no named fields.
            _ => Ok(Self::default()),
        }
    }

    pub fn into_parts(self) -> (Secret<String>, Secret<String>) {
        (
            self.email.unwrap_or_else(|| Secret::new(String::new())),
            self.password.unwrap_or_else(|| Secret::new(String::new())),
        )
    }
}

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup<S>(
    State(account_store): State<S>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
    S: AccountStore + Clone + 'static,
{
    let (email, password) = CredentialsRequest::from_body(&body)?.into_parts();

    let service = AccountService::new(account_store);
    registered(service.register(email, password).await?)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: String::from("User created successfully"),
        }),
    ))
}
