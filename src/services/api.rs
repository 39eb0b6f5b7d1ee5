//! Backend API client
//!
//! Thin wrapper over `reqwest` that joins paths onto the configured base URL,
//! attaches the authorization header when a token is supplied and turns
//! non-success responses into [`OrbitViewError::Api`].

use std::time::{Duration, Instant};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use crate::config::ApiConfig;
use crate::utils::errors::{OrbitViewError, Result};
use crate::utils::logging::log_api_request;

/// HTTP client for the OrbitView backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    auth_scheme: String,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("orbitview/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_scheme: config.auth_scheme.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path such as `/api/resources/events/`
    pub fn url(&self, path: &str) -> Result<url::Url> {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        Ok(url::Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
        token: Option<&str>,
    ) -> Result<T> {
        let request = self.request(Method::GET, path, token)?.query(query);
        let response = self.send(request, Method::GET, path).await?;
        Self::decode(response).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T> {
        let request = self.request(Method::POST, path, token)?.json(body);
        let response = self.send(request, Method::POST, path).await?;
        Self::decode(response).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T> {
        let request = self.request(Method::PUT, path, token)?.json(body);
        let response = self.send(request, Method::PUT, path).await?;
        Self::decode(response).await
    }

    /// DELETE; the backend answers 204 with no body
    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<()> {
        let request = self.request(Method::DELETE, path, token)?;
        self.send(request, Method::DELETE, path).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        let mut request = self.client.request(method, url);
        if let Some(token) = token {
            request = request.header(
                reqwest::header::AUTHORIZATION,
                format!("{} {}", self.auth_scheme, token),
            );
        }
        Ok(request)
    }

    async fn send(&self, request: RequestBuilder, method: Method, path: &str) -> Result<Response> {
        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status();
        log_api_request(
            method.as_str(),
            path,
            status.as_u16(),
            started.elapsed().as_millis() as u64,
        );

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|value| extract_error_message(&value))
            .unwrap_or_else(|| format!("API error: {}", status.as_u16()));

        debug!(path = path, status = status.as_u16(), message = %message, "Backend rejected request");
        Err(OrbitViewError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Pull a human readable message out of an error body.
///
/// Understands `{"detail": ..}`, `{"message": ..}` and field error maps such
/// as `{"password": ["This password is too common."]}`.
pub fn extract_error_message(body: &Value) -> Option<String> {
    let fields = body.as_object()?;

    for key in ["detail", "message", "error"] {
        if let Some(text) = fields.get(key).and_then(first_text) {
            return Some(text);
        }
    }

    let parts: Vec<String> = fields
        .iter()
        .filter_map(|(field, value)| {
            let text = first_text(value)?;
            if field == "non_field_errors" {
                Some(text)
            } else {
                Some(format!("{}: {}", field, text))
            }
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(base_url: &str) -> ApiClient {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn test_url_joining_keeps_base_path() {
        let api = client("https://example.com/backend/");
        assert_eq!(
            api.url("/api/resources/events/").unwrap().as_str(),
            "https://example.com/backend/api/resources/events/"
        );
        assert_eq!(
            api.url("auth/jwt/create/").unwrap().as_str(),
            "https://example.com/backend/auth/jwt/create/"
        );
    }

    #[test]
    fn test_extract_detail_message() {
        let body = json!({"detail": "Given token not valid for any token type"});
        assert_eq!(
            extract_error_message(&body).as_deref(),
            Some("Given token not valid for any token type")
        );
    }

    #[test]
    fn test_extract_field_errors() {
        let body = json!({
            "non_field_errors": ["Unable to log in with provided credentials."]
        });
        assert_eq!(
            extract_error_message(&body).as_deref(),
            Some("Unable to log in with provided credentials.")
        );

        let body = json!({"password": ["This password is too common."]});
        assert_eq!(
            extract_error_message(&body).as_deref(),
            Some("password: This password is too common.")
        );
    }

    #[test]
    fn test_extract_nothing_useful() {
        assert_eq!(extract_error_message(&json!({})), None);
        assert_eq!(extract_error_message(&json!("plain")), None);
    }
}
