use custodian_adapters::{
    config::{AllowedOrigins, test as test_config},
    persistence::HashMapAccountStore,
};
use custodian_core::AccountStore;
use custodian_service::AccountApi;
use serde_json::Value;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> (Self, HashMapAccountStore) {
        let store = HashMapAccountStore::new();
        let app = Self::with_store(store.clone(), None).await;
        (app, store)
    }

    pub async fn with_store<S>(store: S, allowed_origins: Option<AllowedOrigins>) -> Self
    where
        S: AccountStore + Clone + 'static,
    {
        let listener = tokio::net::TcpListener::bind(test_config::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let api = AccountApi::new(store);
        tokio::spawn(async move {
            api.run_standalone(listener, allowed_origins).await.unwrap();
        });

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn post_signup(&self, body: &Value) -> reqwest::Response {
        self.post_json("/signup", body).await
    }

    pub async fn post_login(&self, body: &Value) -> reqwest::Response {
        self.post_json("/login", body).await
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> reqwest::Response {
        self.http_client
            .post(format!("{}{}", self.address, path))
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub async fn error_message(response: reqwest::Response) -> String {
    let body: Value = response.json().await.expect("Response is not JSON");
    body["error"].as_str().unwrap_or_default().to_string()
}
