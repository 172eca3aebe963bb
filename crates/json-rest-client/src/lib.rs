//! Blocking JSON client for REST APIs
//!
//! This crate wraps a blocking reqwest client and serde_json into five
//! operations: fetch one resource, fetch a list, create, update and remove.
//! Bodies travel as JSON and come back as generic [`JsonObject`] or
//! [`JsonArray`] values, which callers pattern-match to pull out their fields.
//!
//! HTTP status codes are not interpreted: whatever JSON the server sends back
//! is returned, as long as it is present, valid and of the expected shape.
//!
//! # Example
//!
//! ```no_run
//! use json_rest_client::{DefaultHttpClient, QueryParams, Response, RestClient};
//! use serde_json::json;
//!
//! fn example() -> Response<()> {
//!     let client = DefaultHttpClient::new();
//!
//!     let product = client.fetch_one("https://shop.example.com/wp-json/wc/v3/products/7")?;
//!     println!("name: {}", product["name"]);
//!
//!     let body = json!({"regular_price": "24.54"});
//!     let body = body.as_object().cloned().unwrap_or_default();
//!     client.update("https://shop.example.com/wp-json/wc/v3/products/7", None, &body)?;
//!
//!     let mut params = QueryParams::new();
//!     params.insert("force".to_string(), "true".to_string());
//!     client.remove("https://shop.example.com/wp-json/wc/v3/products/7", Some(&params))?;
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod request;
mod response;
mod rest;

pub use client::{DefaultHttpClient, HttpClientBuilder};
pub use error::{ErrorKind, HttpError};
pub use request::{build_url, QueryParams};
pub use response::{JsonArray, JsonKind, JsonObject, Response};
pub use rest::RestClient;
