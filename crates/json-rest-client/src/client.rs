//! HTTP client wrapper

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tracing::instrument;

use crate::error::HttpError;
use crate::request::{JsonRequest, QueryParams};
use crate::response::{decode_body, JsonArray, JsonObject, JsonShape, Response};
use crate::rest::RestClient;

/// Blocking JSON REST client backed by reqwest
///
/// Cloning is cheap and clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct DefaultHttpClient {
    inner: Client,
}

impl Default for DefaultHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultHttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Self {
        Self {
            inner: Client::new(),
        }
    }

    /// Create a new HTTP client builder
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Create a DefaultHttpClient from a reqwest blocking client
    pub fn from_reqwest(client: Client) -> Self {
        Self { inner: client }
    }

    /// Send `request` and decode the whole body into `T`.
    ///
    /// The response is consumed while reading the body, which hands the
    /// connection back to the pool on every path out of this function.
    fn execute<T: JsonShape>(&self, request: JsonRequest) -> Response<T> {
        let content_type = request.content_type();
        let mut builder = self.inner.request(request.method, request.url);

        if let Some(body) = request.body {
            if let Some(content_type) = content_type {
                builder = builder.header(CONTENT_TYPE, content_type);
            }
            builder = builder.body(body);
        }

        let response = builder.send().map_err(|e| {
            tracing::debug!("Http request failed: {}", e);
            HttpError::from(e)
        })?;
        let status = response.status();
        tracing::debug!("Http response status: {}", status);

        let body = response.bytes().map_err(HttpError::from)?;
        decode_body(&body)
    }
}

impl RestClient for DefaultHttpClient {
    #[instrument(skip(self))]
    fn fetch_one(&self, url: &str) -> Response<JsonObject> {
        self.execute(JsonRequest::new(Method::GET, url, None)?)
    }

    #[instrument(skip(self))]
    fn fetch_all(&self, url: &str) -> Response<JsonArray> {
        self.execute(JsonRequest::new(Method::GET, url, None)?)
    }

    #[instrument(skip(self, body))]
    fn create(
        &self,
        url: &str,
        params: Option<&QueryParams>,
        body: &JsonObject,
    ) -> Response<JsonObject> {
        self.execute(JsonRequest::with_json(Method::POST, url, params, body)?)
    }

    #[instrument(skip(self, body))]
    fn update(
        &self,
        url: &str,
        params: Option<&QueryParams>,
        body: &JsonObject,
    ) -> Response<JsonObject> {
        self.execute(JsonRequest::with_json(Method::PUT, url, params, body)?)
    }

    #[instrument(skip(self))]
    fn remove(&self, url: &str, params: Option<&QueryParams>) -> Response<JsonObject> {
        self.execute(JsonRequest::new(Method::DELETE, url, params)?)
    }
}

/// HTTP client builder for configuring proxy and TLS settings
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    accept_invalid_certs: bool,
    proxy: Option<ProxyConfig>,
}

#[derive(Debug)]
struct ProxyConfig {
    url: url::Url,
    matcher: Option<regex::Regex>,
}

impl HttpClientBuilder {
    /// Accept invalid TLS certificates
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Route every request through a proxy
    pub fn proxy(mut self, url: url::Url) -> Self {
        self.proxy = Some(ProxyConfig { url, matcher: None });
        self
    }

    /// Route requests whose host matches `pattern` through a proxy
    pub fn proxy_with_matcher(mut self, url: url::Url, pattern: &str) -> Response<Self> {
        let matcher = regex::Regex::new(pattern)
            .map_err(|e| HttpError::Proxy(format!("Invalid proxy pattern: {}", e)))?;
        self.proxy = Some(ProxyConfig {
            url,
            matcher: Some(matcher),
        });
        Ok(self)
    }

    /// Build the HTTP client
    pub fn build(self) -> Response<DefaultHttpClient> {
        let mut builder =
            Client::builder().danger_accept_invalid_certs(self.accept_invalid_certs);

        if let Some(proxy_config) = self.proxy {
            let proxy_url = proxy_config.url.to_string();
            let proxy = if let Some(matcher) = proxy_config.matcher {
                reqwest::Proxy::custom(move |url| {
                    if matcher.is_match(url.host_str().unwrap_or("")) {
                        Some(proxy_url.clone())
                    } else {
                        None
                    }
                })
            } else {
                reqwest::Proxy::all(&proxy_url).map_err(|e| HttpError::Proxy(e.to_string()))?
            };
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        Ok(DefaultHttpClient { inner: client })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let client = DefaultHttpClient::new();
        let _ = format!("{:?}", client);
    }

    #[test]
    fn test_client_default() {
        let client = DefaultHttpClient::default();
        let _ = format!("{:?}", client);
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_shareable<T: Send + Sync + Clone + 'static>() {}
        assert_shareable::<DefaultHttpClient>();
    }

    #[test]
    fn test_builder_build() {
        let result = HttpClientBuilder::default().build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_from_reqwest() {
        let client = DefaultHttpClient::from_reqwest(Client::new());
        let _ = format!("{:?}", client);
    }

    #[test]
    fn test_builder_accept_invalid_certs() {
        let result = DefaultHttpClient::builder()
            .danger_accept_invalid_certs(true)
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_proxy() {
        let proxy_url = url::Url::parse("http://localhost:8080").expect("Valid proxy URL");
        let result = HttpClientBuilder::default().proxy(proxy_url).build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_proxy_with_valid_matcher() {
        let proxy_url = url::Url::parse("http://localhost:8080").expect("Valid proxy URL");
        let builder = HttpClientBuilder::default()
            .proxy_with_matcher(proxy_url, r".*\.example\.com$")
            .expect("Valid matcher should succeed");

        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_builder_proxy_with_invalid_matcher() {
        let proxy_url = url::Url::parse("http://localhost:8080").expect("Valid proxy URL");
        // Unclosed bracket
        let result = HttpClientBuilder::default().proxy_with_matcher(proxy_url, r"[invalid");

        match result {
            Err(HttpError::Proxy(msg)) => assert!(msg.contains("Invalid proxy pattern")),
            _ => panic!("Expected HttpError::Proxy"),
        }
    }

    #[test]
    fn test_invalid_url_fails_before_sending() {
        let client = DefaultHttpClient::new();

        assert!(matches!(
            client.fetch_one("products/1"),
            Err(HttpError::InvalidUrl(_))
        ));
        assert!(matches!(
            client.remove("::", None),
            Err(HttpError::InvalidUrl(_))
        ));
    }
}
