use std::net::TcpListener;

use custodian_adapters::config::{StoreSettings, test as test_config};
use custodian_adapters::persistence::RestAccountStore;
use custodian_service::build_http_client;
use secrecy::Secret;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::TestApp;

const SECRET: &str = test_config::store::AUTH_SECRET;

fn store_for(server: &MockServer) -> RestAccountStore {
    store_at(server.uri())
}

fn store_at(base_url: String) -> RestAccountStore {
    let settings = StoreSettings {
        base_url,
        auth_secret: Secret::from(SECRET.to_string()),
        timeout_in_millis: test_config::store::TIMEOUT_IN_MILLIS,
    };
    let http_client = build_http_client(&settings).unwrap();
    RestAccountStore::new(settings.base_url, settings.auth_secret, http_client)
}

#[tokio::test]
async fn signup_writes_through_to_document_store() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/a@b_com.json"))
        .and(query_param("auth", SECRET))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/a@b_com.json"))
        .and(query_param("auth", SECRET))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let app = TestApp::with_store(store_for(&server), None).await;
    let response = app
        .post_signup(&json!({ "email": "a@b.com", "password": "123456" }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn signup_returns_500_when_write_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let app = TestApp::with_store(store_for(&server), None).await;
    let response = app
        .post_signup(&json!({ "email": "a@b.com", "password": "123456" }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
}

#[tokio::test]
async fn login_against_stored_document() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/a@b_com.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "a@b.com",
            "password": "123456"
        })))
        .mount(&server)
        .await;

    let app = TestApp::with_store(store_for(&server), None).await;

    let ok = app
        .post_login(&json!({ "email": "a@b.com", "password": "123456" }))
        .await;
    let wrong = app
        .post_login(&json!({ "email": "a@b.com", "password": "1234567" }))
        .await;

    assert_eq!(ok.status().as_u16(), 200);
    assert_eq!(wrong.status().as_u16(), 401);
}

#[tokio::test]
async fn login_returns_401_when_store_is_down() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let app = TestApp::with_store(store_for(&server), None).await;
    let response = app
        .post_login(&json!({ "email": "a@b.com", "password": "123456" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn unreachable_store_fails_login_and_signup() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let app = TestApp::with_store(store_at(format!("http://{address}")), None).await;
    let body = json!({ "email": "a@b.com", "password": "123456" });

    assert_eq!(app.post_login(&body).await.status().as_u16(), 401);
    assert_eq!(app.post_signup(&body).await.status().as_u16(), 500);
}
