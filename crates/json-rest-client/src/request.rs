//! HTTP request construction

use std::collections::HashMap;

use reqwest::Method;
use url::Url;

use crate::error::HttpError;
use crate::response::{JsonObject, Response};

pub(crate) const APPLICATION_JSON: &str = "application/json";

/// Query parameters appended to a request URL
pub type QueryParams = HashMap<String, String>;

/// Parse `url` and append every pair of `params` as a url-encoded query
/// component.
///
/// Pairs are added after any query already present. `None` and an empty map
/// leave the URL untouched.
pub fn build_url(url: &str, params: Option<&QueryParams>) -> Response<Url> {
    let mut url = Url::parse(url)?;

    if let Some(params) = params.filter(|params| !params.is_empty()) {
        url.query_pairs_mut().extend_pairs(params.iter());
    }

    Ok(url)
}

/// A fully described request, ready to hand to the transport
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct JsonRequest {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) body: Option<Vec<u8>>,
}

impl JsonRequest {
    /// Body-less request
    pub(crate) fn new(method: Method, url: &str, params: Option<&QueryParams>) -> Response<Self> {
        Ok(Self {
            method,
            url: build_url(url, params)?,
            body: None,
        })
    }

    /// Request carrying `body` encoded as JSON
    pub(crate) fn with_json(
        method: Method,
        url: &str,
        params: Option<&QueryParams>,
        body: &JsonObject,
    ) -> Response<Self> {
        let body = serde_json::to_vec(body).map_err(|e| HttpError::Encode(e.to_string()))?;
        Ok(Self {
            body: Some(body),
            ..Self::new(method, url, params)?
        })
    }

    /// Content type of the body, if any
    pub(crate) fn content_type(&self) -> Option<&'static str> {
        self.body.as_ref().map(|_| APPLICATION_JSON)
    }
}
