//! HTTP API client for the travel-group endpoints.

use std::rc::Rc;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::Travelogue;

/// Remote operations the travelogue list depends on.
#[async_trait(?Send)]
pub trait TravelogueApi {
    async fn delete_travelogue(&self, id: i64) -> Result<(), ApiError>;
}

/// Shared handle to the API, provided to components through context.
#[derive(Clone)]
pub struct TravelogueApiHandle(Rc<dyn TravelogueApi>);

impl TravelogueApiHandle {
    pub fn new(api: impl TravelogueApi + 'static) -> Self {
        Self(Rc::new(api))
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(ApiClient::new().with_base_url(config.api_base_url.clone()))
    }

    pub fn api(&self) -> &dyn TravelogueApi {
        self.0.as_ref()
    }
}

/// HTTP client for the travel-group REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
        }
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    /// Send a request and return the body of a successful response.
    async fn send(&self, rb: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let resp = rb.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }
        Ok(text)
    }

    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let text = self.send(self.client.get(self.url(path))).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.client.delete(self.url(path))).await?;
        Ok(())
    }

    /// Travelogues posted to a travel group, in feed order.
    pub async fn list_travelogues(&self, group_id: i64) -> Result<Vec<Travelogue>, ApiError> {
        self.get_json(&format!("/api/travelgroups/{group_id}/travelogues"))
            .await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl TravelogueApi for ApiClient {
    async fn delete_travelogue(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/travelogues/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_without_base_url() {
        let client = ApiClient::new();
        assert_eq!(client.url("/api/travelogues/3"), "/api/travelogues/3");
        assert_eq!(client.url("api/travelogues/3"), "/api/travelogues/3");
    }

    #[test]
    fn base_url_is_joined_with_a_single_slash() {
        let client = ApiClient::new().with_base_url("https://trip.example.com/");
        assert_eq!(
            client.url("/api/travelgroups/1/travelogues"),
            "https://trip.example.com/api/travelgroups/1/travelogues"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        let client = ApiClient::new().with_base_url("https://trip.example.com");
        assert_eq!(
            client.url("http://other.example.com/x"),
            "http://other.example.com/x"
        );
    }
}
