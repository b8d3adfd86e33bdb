use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::errors::ApiError;

/// Typed HTTP client for the user resource endpoint.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from loaded configuration.
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        log::info!(
            "[ApiClient] Creating new API client with base URL: {}",
            config.base_url
        );

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a full URL for a resource path.
    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Execute a request and handle common errors.
    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::Status { status, body })
        }
    }

    // Public API methods

    /// GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] GET request to: {}", url);
        self.execute_request(self.client.get(&url)).await
    }

    /// POST request
    pub async fn post<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] POST request to: {}", url);
        self.execute_request(self.client.post(&url).json(body)).await
    }

    /// PUT request
    pub async fn put<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] PUT request to: {}", url);
        self.execute_request(self.client.put(&url).json(body)).await
    }

    /// DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] DELETE request to: {}", url);
        self.execute_request(self.client.delete(&url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_without_doubled_slashes() {
        let config = ClientConfig {
            base_url: "https://api.example.com/".to_string(),
            ..ClientConfig::default()
        };
        let client = ApiClient::new(&config);
        assert_eq!(client.build_url("/users"), "https://api.example.com/users");
        assert_eq!(client.build_url("users/5"), "https://api.example.com/users/5");
    }
}
