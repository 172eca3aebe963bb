//! REST client contract

use std::sync::Arc;

use crate::request::QueryParams;
use crate::response::{JsonArray, JsonObject, Response};

/// Blocking JSON-over-HTTP operations against a REST API.
///
/// Every call is an independent request/response exchange. Implementations
/// must be safe to share across threads.
pub trait RestClient: Send + Sync {
    /// GET `url`, expecting a JSON object
    fn fetch_one(&self, url: &str) -> Response<JsonObject>;

    /// GET `url`, expecting a JSON array
    fn fetch_all(&self, url: &str) -> Response<JsonArray>;

    /// POST `body` as JSON to `url` with `params` appended to the query
    fn create(
        &self,
        url: &str,
        params: Option<&QueryParams>,
        body: &JsonObject,
    ) -> Response<JsonObject>;

    /// PUT `body` as JSON to `url` with `params` appended to the query
    fn update(
        &self,
        url: &str,
        params: Option<&QueryParams>,
        body: &JsonObject,
    ) -> Response<JsonObject>;

    /// DELETE `url` with `params` appended to the query
    fn remove(&self, url: &str, params: Option<&QueryParams>) -> Response<JsonObject>;
}

impl<T: RestClient + ?Sized> RestClient for Arc<T> {
    fn fetch_one(&self, url: &str) -> Response<JsonObject> {
        (**self).fetch_one(url)
    }

    fn fetch_all(&self, url: &str) -> Response<JsonArray> {
        (**self).fetch_all(url)
    }

    fn create(
        &self,
        url: &str,
        params: Option<&QueryParams>,
        body: &JsonObject,
    ) -> Response<JsonObject> {
        (**self).create(url, params, body)
    }

    fn update(
        &self,
        url: &str,
        params: Option<&QueryParams>,
        body: &JsonObject,
    ) -> Response<JsonObject> {
        (**self).update(url, params, body)
    }

    fn remove(&self, url: &str, params: Option<&QueryParams>) -> Response<JsonObject> {
        (**self).remove(url, params)
    }
}
