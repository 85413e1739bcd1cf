use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header, request},
    routing::post,
};
use custodian_adapters::{
    config::{AllowedOrigins, REQUEST_ID_HEADER},
    http::routes::{login, not_found, signup},
};
use custodian_core::AccountStore;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::PropagateRequestIdLayer,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP front for account registration and login
pub struct AccountApi {
    router: Router,
}

impl AccountApi {
    /// Create a new AccountApi over the provided store
    ///
    /// # Arguments
    /// * `account_store` - Store for account documents (must be Clone)
    ///
    /// Each request clones the store handle and builds its own
    /// `AccountService`; nothing else is shared between requests.
    pub fn new<S>(account_store: S) -> Self
    where
        S: AccountStore + Clone + 'static,
    {
        let router = Router::new()
            .route("/signup", post(signup::<S>))
            .route("/login", post(login::<S>))
            .fallback(not_found)
            .with_state(account_store);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

        self.router = self
            .router
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            )
            .layer(PropagateRequestIdLayer::new(request_id.clone()))
            .layer(SetRequestHeaderLayer::if_not_present(
                request_id,
                |_req: &_| HeaderValue::from_str(&uuid::Uuid::new_v4().to_string()).ok(),
            ));
        self
    }

    /// Convert the AccountApi into a router that can be served or nested
    ///
    /// # Arguments
    /// * `allowed_origins` - CORS origins; `None` or an empty list allows any origin
    pub fn as_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        let allow_origin = match allowed_origins {
            Some(origins) if !origins.is_empty() => AllowOrigin::predicate(
                move |origin: &HeaderValue, _request_parts: &request::Parts| {
                    origins.contains(origin)
                },
            ),
            _ => AllowOrigin::from(Any),
        };

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .allow_origin(allow_origin);

        self.router = self.router.layer(cors);
        self.with_trace_layer().router
    }

    /// Run the account API as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_router(allowed_origins);

        ::tracing::info!("Account API listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
