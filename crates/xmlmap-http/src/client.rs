//! Reqwest-based XML client

use std::time::Duration;

use http::Method;
use reqwest::Client;
use tracing::debug;
use xmlmap_core::{Exchange, RequestParts, ResponseParts, XmlResponseSerializer};

use crate::error::XmlHttpError;

/// HTTP client that feeds terminal exchanges to an XML response serializer
///
/// # Example
///
/// ```ignore
/// use xmlmap_core::XmlResponseSerializer;
/// use xmlmap_http::XmlClient;
///
/// let client = XmlClient::new("http://localhost:8080");
/// let serializer = XmlResponseSerializer::mappable(None);
/// let user: User = client.get("/users/7", &serializer).await?;
/// ```
pub struct XmlClient {
    client: Client,
    base_url: String,
}

impl XmlClient {
    /// Create a new client with the given base URL
    ///
    /// The base URL should not include a trailing slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(600))
                .build()
                .unwrap(),
            base_url: base_url.into(),
        }
    }

    /// Create a new client with custom settings
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a GET request and serialize the outcome
    pub async fn get<T>(
        &self,
        path: &str,
        serializer: &XmlResponseSerializer<T>,
    ) -> Result<T, XmlHttpError> {
        self.request(Method::GET, path, serializer).await
    }

    /// Perform a HEAD request and serialize the outcome
    pub async fn head<T>(
        &self,
        path: &str,
        serializer: &XmlResponseSerializer<T>,
    ) -> Result<T, XmlHttpError> {
        self.request(Method::HEAD, path, serializer).await
    }

    /// Perform a request and serialize the terminal exchange
    ///
    /// A response received from the server becomes a completed exchange
    /// (status, headers, body bytes). A failure while sending or while
    /// reading the body becomes the exchange's transport error, which the
    /// serializer returns unchanged ahead of any body interpretation.
    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        serializer: &XmlResponseSerializer<T>,
    ) -> Result<T, XmlHttpError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let request = self.client.request(method.clone(), url.as_str()).build()?;
        let parts = RequestParts::new(method, url).with_headers(request.headers().clone());

        let exchange = match self.client.execute(request).await {
            Ok(response) => {
                let response_parts = ResponseParts::new(response.status())
                    .with_headers(response.headers().clone());
                match response.bytes().await {
                    Ok(bytes) => {
                        debug!(
                            "received {} with {} body bytes from {}",
                            response_parts.status,
                            bytes.len(),
                            parts.url
                        );
                        Exchange::completed(parts, response_parts, bytes.to_vec())
                    }
                    Err(error) => {
                        debug!("body read failed for {}: {}", parts.url, error);
                        Exchange {
                            request: Some(parts),
                            response: Some(response_parts),
                            body: None,
                            transport_error: Some(error.into()),
                        }
                    }
                }
            }
            Err(error) => {
                debug!("transport failed for {}: {}", parts.url, error);
                Exchange::failed(Some(parts), error)
            }
        };

        Ok(serializer.serialize(exchange)?)
    }
}

impl Default for XmlClient {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = XmlClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_default_client() {
        let client = XmlClient::default();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_custom_base_url() {
        let client = XmlClient::new("https://api.example.com");
        assert_eq!(client.base_url(), "https://api.example.com");
    }
}
