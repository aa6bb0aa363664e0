use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::SupportError;

/// Catalog host used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Environment variable consulted for the catalog host.
pub const BASE_URL_ENV: &str = "CATALOG_BASE_URL";

fn zero() -> Value {
    Value::from(0)
}

/// A cart as returned by `/carts/{id}`.
///
/// Scalar fields are kept as the catalog sent them.
#[derive(Debug, Clone, Deserialize)]
pub struct Cart {
    #[serde(default = "zero")]
    pub total: Value,
    #[serde(default)]
    pub products: Vec<Value>,
}

/// A product as returned by `/products/search`. Missing fields are null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogProduct {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub stock: Value,
    #[serde(default)]
    pub rating: Value,
}

/// Body of `/products/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub products: Vec<CatalogProduct>,
}

/// Errors that can occur during a catalog lookup.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The order id is not an integer
    #[error("invalid order id: {0:?}")]
    InvalidOrderId(String),
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The catalog answered with something other than 200
    #[error("{context} (HTTP {status})")]
    Status {
        context: &'static str,
        status: u16,
    },
    /// The body was not the JSON we expected
    #[error("Malformed response: {0}")]
    MalformedBody(String),
}

/// Read access to the remote product catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetches a cart by id.
    async fn fetch_cart(&self, cart_id: i64) -> Result<Cart, LookupError>;
    /// Runs a free-text product search.
    async fn search_products(&self, query: &str) -> Result<SearchResponse, LookupError>;
}

/// A catalog client over HTTP.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Returns the host this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn decode<T: DeserializeOwned>(
        response: Response,
        context: &'static str,
    ) -> Result<T, LookupError> {
        let status = response.status();
        if status != StatusCode::OK {
            return Err(LookupError::Status {
                context,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| LookupError::MalformedBody(e.to_string()))
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn fetch_cart(&self, cart_id: i64) -> Result<Cart, LookupError> {
        let url = format!("{}/carts/{}", self.base_url, cart_id);
        debug!(%url, "Fetching cart");

        let response = self.client.get(&url).send().await?;
        Self::decode(response, "Order not found").await
    }

    async fn search_products(&self, query: &str) -> Result<SearchResponse, LookupError> {
        let url = format!("{}/products/search", self.base_url);
        debug!(%url, query, "Searching products");

        let response = self.client.get(&url).query(&[("q", query)]).send().await?;
        Self::decode(response, "Search failed").await
    }
}

/// A builder for creating catalog clients.
#[derive(Debug, Default)]
pub struct CatalogClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl CatalogClientBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the catalog host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout. Requests have none by default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Creates the client.
    pub fn build(self) -> Result<CatalogClient, SupportError> {
        let base_url = self
            .base_url
            .or_else(|| std::env::var(BASE_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();

        Url::parse(&base_url)
            .map_err(|e| SupportError::Config(format!("invalid catalog URL {base_url:?}: {e}")))?;

        let mut client_builder = Client::builder();
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }
        let client = client_builder.build()?;

        Ok(CatalogClient { client, base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves one canned response on a local port and yields the request line it received.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (CatalogClient, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        let client = CatalogClientBuilder::new()
            .with_base_url(format!("http://{addr}"))
            .build()
            .unwrap();
        (client, server)
    }

    #[tokio::test]
    async fn test_fetch_cart_decodes_ok_body() {
        let (client, server) =
            serve_once("200 OK", r#"{"id": 7, "total": 1, "products": [{"id": 1}]}"#).await;

        let cart = client.fetch_cart(7).await.unwrap();

        assert_eq!(server.await.unwrap(), "GET /carts/7 HTTP/1.1");
        assert_eq!(cart.total, json!(1));
        assert_eq!(cart.products, vec![json!({ "id": 1 })]);
    }

    #[tokio::test]
    async fn test_fetch_cart_not_found() {
        let (client, server) = serve_once("404 Not Found", r#"{"message": "missing"}"#).await;

        let err = client.fetch_cart(7).await.unwrap_err();

        assert_eq!(server.await.unwrap(), "GET /carts/7 HTTP/1.1");
        assert!(matches!(
            err,
            LookupError::Status { context: "Order not found", status: 404 }
        ));
        assert_eq!(err.to_string(), "Order not found (HTTP 404)");
    }

    #[tokio::test]
    async fn test_only_200_counts_as_found() {
        let (client, server) = serve_once("201 Created", r#"{"total": 3}"#).await;

        let err = client.fetch_cart(3).await.unwrap_err();

        server.await.unwrap();
        assert!(matches!(err, LookupError::Status { status: 201, .. }));
    }

    #[tokio::test]
    async fn test_search_malformed_body() {
        let (client, server) = serve_once("200 OK", "not json").await;

        let err = client.search_products("red phone&x").await.unwrap_err();

        assert_eq!(
            server.await.unwrap(),
            "GET /products/search?q=red+phone%26x HTTP/1.1"
        );
        assert!(matches!(err, LookupError::MalformedBody(_)), "{err}");
        assert!(err.to_string().starts_with("Malformed response: "));
    }

    #[tokio::test]
    async fn test_search_failure_status() {
        let (client, server) = serve_once("500 Internal Server Error", "{}").await;

        let err = client.search_products("phone").await.unwrap_err();

        server.await.unwrap();
        assert_eq!(err.to_string(), "Search failed (HTTP 500)");
    }

    #[test]
    fn test_base_url_resolution_order() {
        // Only this test touches the variable, so set and clear happen in one place.
        unsafe { std::env::remove_var(BASE_URL_ENV) };
        let client = CatalogClientBuilder::new().build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);

        unsafe { std::env::set_var(BASE_URL_ENV, "http://catalog.internal:9000/") };
        let from_env = CatalogClientBuilder::new().build().unwrap();
        let explicit = CatalogClientBuilder::new()
            .with_base_url("http://localhost:8080")
            .build()
            .unwrap();
        unsafe { std::env::remove_var(BASE_URL_ENV) };

        assert_eq!(from_env.base_url(), "http://catalog.internal:9000");
        assert_eq!(explicit.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_builder_strips_trailing_slash() {
        let client = CatalogClientBuilder::new()
            .with_base_url("http://localhost:8080/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        let err = CatalogClientBuilder::new()
            .with_base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, SupportError::Config(_)));
    }

    #[test]
    fn test_cart_defaults_missing_fields() {
        let cart: Cart = serde_json::from_str(r#"{"id": 5}"#).unwrap();
        assert_eq!(cart.total, json!(0));
        assert!(cart.total.is_i64());
        assert!(cart.products.is_empty());
    }

    #[test]
    fn test_cart_keeps_catalog_values() {
        let cart: Cart = serde_json::from_str(r#"{"total": null, "products": []}"#).unwrap();
        assert!(cart.total.is_null());

        let cart: Cart = serde_json::from_str(r#"{"total": 12}"#).unwrap();
        assert_eq!(serde_json::to_string(&cart.total).unwrap(), "12");
    }

    #[test]
    fn test_search_product_fields_pass_through() {
        let body = r#"{"products": [{"id": 1, "title": "Phone", "price": 1, "rating": "n/a"}]}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let product = &response.products[0];

        assert_eq!(product.title, "Phone");
        assert_eq!(serde_json::to_string(&product.price).unwrap(), "1");
        assert_eq!(product.rating, "n/a");
        assert!(product.stock.is_null());
    }

    #[test]
    fn test_status_error_message() {
        let err = LookupError::Status {
            context: "Order not found",
            status: 404,
        };
        assert_eq!(err.to_string(), "Order not found (HTTP 404)");
    }
}
