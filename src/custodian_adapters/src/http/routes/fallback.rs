use super::error::ApiError;

/// Answers every path without a route.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
