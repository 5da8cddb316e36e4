//! Cat API client.
//!
//! Low-level HTTP client that handles the API key header and raw requests.
//! Higher-level operations are implemented via traits on entity types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response};
use serde::Serialize;
use url::Url;

use crate::error::{GalleryError, Result};

const DEFAULT_API_URL: &str = "https://api.thecatapi.com/v1";
const USER_AGENT: &str = concat!("catgallery/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "x-api-key";

/// Low-level Cat API client.
///
/// Forwards a static API key on every request. Entity-specific operations
/// are implemented via the `Get` and `List` traits on model types.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use catgallery::GalleryClient;
///
/// # fn example() -> catgallery::Result<()> {
/// // Create from environment variables
/// let client = GalleryClient::from_env()?;
///
/// // Or configure manually
/// let client = GalleryClient::new("your-api-key", "https://api.thecatapi.com/v1")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GalleryClient {
    http: Client,
    base_url: Arc<Url>,
    api_key: String,
}

impl std::fmt::Debug for GalleryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl GalleryClient {
    /// Create a client from environment variables.
    ///
    /// Uses `CAT_API_KEY` for authentication and optionally `CAT_API_URL`
    /// for the base URL (defaults to `https://api.thecatapi.com/v1`).
    ///
    /// # Errors
    ///
    /// Returns an error if `CAT_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("CAT_API_KEY").map_err(|_| {
            GalleryError::ConfigMissing("CAT_API_KEY environment variable not set".to_string())
        })?;

        let base_url = env::var("CAT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&api_key, &base_url)
    }

    /// Create a new client with the provided API key and base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(api_key: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with / so relative joins keep the version segment
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(GalleryError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            api_key: api_key.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(GalleryError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a GET request with query parameters.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(query)
            .send()
            .await
            .map_err(GalleryError::HttpError)?;

        Self::check_response(response).await
    }

    /// Read a successful response body as untyped JSON.
    ///
    /// A body that is not JSON at all is reported as
    /// [`GalleryError::MalformedResponse`]; shape checks are left to the caller.
    pub(crate) async fn read_json(response: Response) -> Result<serde_json::Value> {
        let body = response.text().await.map_err(GalleryError::HttpError)?;
        serde_json::from_str(&body)
            .map_err(|e| GalleryError::MalformedResponse(format!("body is not JSON: {e}")))
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        tracing::debug!(status = status.as_u16(), %message, "upstream returned error status");
        Err(GalleryError::ApiError {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract error message from a failed response.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        // Try to parse as JSON and extract message field
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
                return err.to_string();
            }
        }

        if body.trim().is_empty() {
            format!("HTTP {status}")
        } else {
            body
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_debug() {
        let client = GalleryClient::new("secret-key", "https://api.thecatapi.com/v1").unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("GalleryClient"));
        assert!(debug.contains("base_url"));
        // API key should not be in debug output
        assert!(!debug.contains("secret-key"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = GalleryClient::new("key", "https://api.thecatapi.com/v1").unwrap();
        let client2 = GalleryClient::new("key", "https://api.thecatapi.com/v1/").unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
    }

    #[test]
    fn test_join_keeps_version_segment() {
        let client = GalleryClient::new("key", "https://api.thecatapi.com/v1").unwrap();
        let url = client.base_url().join("images/search").unwrap();
        assert_eq!(url.as_str(), "https://api.thecatapi.com/v1/images/search");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = GalleryClient::new("key", "not a url");
        assert!(matches!(result, Err(GalleryError::UrlError(_))));
    }
}
