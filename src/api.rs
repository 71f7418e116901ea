//! Thin HTTP layer over the dining REST backend.
//!
//! Components never build `gloo_net` requests directly; they describe a call
//! with a [`RequestDescriptor`] and hand it to whatever [`HttpClient`] the app
//! provided. The browser build uses [`FetchClient`]; tests swap in a mock.

use crate::config::ClientConfig;
use crate::error::ApiError;
use futures::future::LocalBoxFuture;
use gloo_net::http::{Request, RequestBuilder};
use leptos::logging::log;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Method, path, query params and optional JSON body of one call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub params: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            params: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((name.into(), value.to_string()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Path plus percent-encoded query string, used for logging and mocks.
    pub fn path_and_query(&self) -> String {
        if self.params.is_empty() {
            return self.url.clone();
        }
        let query = self
            .params
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.url, query)
    }
}

impl fmt::Display for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path_and_query())
    }
}

/// Anything that can execute a request. `Ok(None)` is an empty or `null` body.
pub trait HttpClient {
    fn send(&self, request: RequestDescriptor) -> LocalBoxFuture<'static, Result<Option<Value>, ApiError>>;
}

/// Browser `fetch` client.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    config: ClientConfig,
}

impl FetchClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn builder(&self, request: &RequestDescriptor) -> RequestBuilder {
        let url = self.config.url_for(&request.url);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        builder
            .query(request.params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .credentials(self.config.credentials.to_request_credentials())
    }
}

impl HttpClient for FetchClient {
    fn send(&self, request: RequestDescriptor) -> LocalBoxFuture<'static, Result<Option<Value>, ApiError>> {
        let builder = self.builder(&request);
        Box::pin(dispatch(builder, request))
    }
}

async fn dispatch(builder: RequestBuilder, request: RequestDescriptor) -> Result<Option<Value>, ApiError> {
    log!("[HTTP] {}", request);
    let response = match &request.body {
        Some(body) => builder
            .json(body)
            .map_err(|err| ApiError::Build(err.to_string()))?
            .send()
            .await?,
        None => builder.send().await?,
    };

    let status = response.status();
    let text = response.text().await?;
    if !response.ok() {
        return Err(ApiError::Status { status, body: text });
    }
    parse_body(&text)
}

/// Empty and `null` bodies become `None`; anything else must be JSON.
pub fn parse_body(text: &str) -> Result<Option<Value>, ApiError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    match serde_json::from_str::<Value>(text)? {
        Value::Null => Ok(None),
        value => Ok(Some(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_string_is_percent_encoded() {
        let request = RequestDescriptor::put("/api/reviews/moderate")
            .param("id", 3)
            .param("status", "APPROVED")
            .param("moderatorComments", "Looks good & tasty");

        assert_eq!(
            request.path_and_query(),
            "/api/reviews/moderate?id=3&status=APPROVED&moderatorComments=Looks%20good%20%26%20tasty"
        );
        assert_eq!(request.param_value("status"), Some("APPROVED"));
        assert_eq!(request.param_value("missing"), None);
        assert_eq!(
            request.to_string(),
            format!("PUT {}", request.path_and_query())
        );
    }

    #[test]
    fn bodies_without_content_are_none() {
        assert_eq!(parse_body("").unwrap(), None);
        assert_eq!(parse_body("  \n").unwrap(), None);
        assert_eq!(parse_body("null").unwrap(), None);
        assert_eq!(parse_body("[1,2]").unwrap(), Some(json!([1, 2])));
        assert!(matches!(parse_body("<html>"), Err(ApiError::Decode(_))));
    }
}
