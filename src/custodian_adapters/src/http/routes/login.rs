use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use custodian_application::AccountService;
use custodian_core::AccountStore;

use super::error::{ApiError, MessageResponse, authenticated};
use super::signup::CredentialsRequest;

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<S>(
    State(account_store): State<S>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
    S: AccountStore + Clone + 'static,
{
    let (email, password) = CredentialsRequest::from_body(&body)?.into_parts();

    let service = AccountService::new(account_store);
    authenticated(service.authenticate(email, password).await)?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: String::from("Login successful"),
        }),
    ))
}
