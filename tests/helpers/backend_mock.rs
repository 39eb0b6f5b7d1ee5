//! Mock OrbitView backend for testing
//!
//! This module provides a mock HTTP server that simulates the OrbitView REST
//! API. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use super::test_data::*;

const AUTH_SCHEME: &str = "JWT";
/// Matched after every more specific mock
const FALLBACK_PRIORITY: u8 = 10;

/// Mock backend server for testing
pub struct BackendMockServer {
    pub server: MockServer,
}

impl BackendMockServer {
    /// Start a new mock backend
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    fn bearer(token: &str) -> String {
        format!("{} {}", AUTH_SCHEME, token)
    }

    /// Token endpoint: `username`/`password` get a token, anything else a 401
    pub async fn mock_token_create(&self, username: &str, password: &str, access: &str) {
        Mock::given(method("POST"))
            .and(path("/auth/jwt/create/"))
            .and(wiremock::matchers::body_json(json!({
                "username": username,
                "password": password
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "access": access, "refresh": "refresh-token" })),
            )
            .mount(&self.server)
            .await;

        Mock::given(method("POST"))
            .and(path("/auth/jwt/create/"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "detail": "No active account found with the given credentials"
            })))
            .with_priority(FALLBACK_PRIORITY)
            .mount(&self.server)
            .await;
    }

    /// Current-user endpoint accepts only `token`
    pub async fn mock_current_user(&self, token: &str, user: Value) {
        Mock::given(method("GET"))
            .and(path("/api/users/me/"))
            .and(header("Authorization", Self::bearer(token).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(user))
            .mount(&self.server)
            .await;

        self.mock_unauthorized("GET", "/api/users/me/").await;
    }

    /// The current-user endpoint must not be called
    pub async fn expect_no_current_user_calls(&self) {
        Mock::given(method("GET"))
            .and(path("/api/users/me/"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_unauthorized(&self, http_method: &str, endpoint: &str) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "detail": "Given token not valid for any token type"
            })))
            .with_priority(FALLBACK_PRIORITY)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_register(&self, user: Value) {
        Mock::given(method("POST"))
            .and(path("/auth/users/"))
            .respond_with(ResponseTemplate::new(201).set_body_json(user))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_register_rejected(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path("/auth/users/"))
            .respond_with(ResponseTemplate::new(400).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Serve one page for each resource listing
    pub async fn mock_resources(&self, events: Vec<Value>, programs: Vec<Value>, competitions: Vec<Value>) {
        for (endpoint, results) in [
            ("/api/resources/events/", events),
            ("/api/resources/programs/", programs),
            ("/api/resources/competitions/", competitions),
        ] {
            Mock::given(method("GET"))
                .and(path(endpoint))
                .respond_with(ResponseTemplate::new(200).set_body_json(paginated_json(results)))
                .mount(&self.server)
                .await;
        }
    }

    /// Events listing that only answers when `category` is in the query
    pub async fn mock_events_for_category(&self, category: i64, events: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path("/api/resources/events/"))
            .and(query_param("category", category.to_string().as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(paginated_json(events)))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_listing_error(&self, endpoint: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "detail": "Backend unavailable" })))
            .mount(&self.server)
            .await;
    }

    /// Detail endpoint; unmatched detail paths answer 404
    pub async fn mock_resource_detail(&self, endpoint: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_categories(&self, body: Value) {
        Mock::given(method("GET"))
            .and(path("/api/resources/categories/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_profile(&self, token: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path("/api/profiles/me/"))
            .and(header("Authorization", Self::bearer(token).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;

        self.mock_unauthorized("GET", "/api/profiles/me/").await;
    }

    pub async fn mock_timeline_entry(&self, token: &str, id: i64, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/api/profiles/timeline/{}/", id)))
            .and(header("Authorization", Self::bearer(token).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_timeline_create(&self, token: &str, body: Value) {
        Mock::given(method("POST"))
            .and(path("/api/profiles/timeline/"))
            .and(header("Authorization", Self::bearer(token).as_str()))
            .respond_with(ResponseTemplate::new(201).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Create endpoint that must not be reached
    pub async fn expect_no_timeline_writes(&self) {
        Mock::given(method("POST"))
            .and(path("/api/profiles/timeline/"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_timeline_update(&self, token: &str, id: i64, body: Value) {
        Mock::given(method("PUT"))
            .and(path(format!("/api/profiles/timeline/{}/", id)))
            .and(header("Authorization", Self::bearer(token).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_timeline_delete(&self, token: &str, id: i64) {
        Mock::given(method("DELETE"))
            .and(path(format!("/api/profiles/timeline/{}/", id)))
            .and(header("Authorization", Self::bearer(token).as_str()))
            .respond_with(ResponseTemplate::new(204))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_timeline_missing(&self, id: i64) {
        Mock::given(path(format!("/api/profiles/timeline/{}/", id)))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Not found." })))
            .mount(&self.server)
            .await;
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }
}
