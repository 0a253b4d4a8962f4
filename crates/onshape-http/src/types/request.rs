//! A fully specified API request, ready for the transport.

use bytes::Bytes;
use std::collections::BTreeMap;

/// One HTTP request against the platform, built from a per-operation
/// template. The transport resolves `path` against the configured base URL.
#[derive(Clone, Debug, Default)]
pub struct ApiRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: BTreeMap<String, String>,
    pub accept: Option<String>,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl ApiRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        ApiRequest {
            method: method.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body. Sets the content type unless one was given.
    pub fn with_json_body(mut self, body: &serde_json::Value) -> Self {
        self.body = Bytes::from(body.to_string());
        if self.content_type.is_none() {
            self.content_type = Some("application/json".to_string());
        }
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }
}
