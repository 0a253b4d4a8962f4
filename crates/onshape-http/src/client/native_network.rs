//! reqwest-backed transport.

use crate::client::config::ClientConfig;
use crate::error::{OnshapeError, Result};
use crate::traits::OnshapeNetwork;
use crate::types::{ApiRequest, ApiResponse};
use async_trait::async_trait;
use reqwest::Client;

/// Production [`OnshapeNetwork`]: resolves paths against the configured base
/// URL and signs every request with the API key pair via HTTP basic auth.
pub struct NativeNetwork {
    client: Client,
    base_url: String,
    access_key: Option<String>,
    secret_key: Option<String>,
}

impl NativeNetwork {
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| OnshapeError::Config(e.to_string()))?;
        Ok(NativeNetwork {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_key: config.access_key.clone(),
            secret_key: config.secret_key.clone(),
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl OnshapeNetwork for NativeNetwork {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let method = match request.method.to_uppercase().as_str() {
            "POST" => reqwest::Method::POST,
            "PUT" => reqwest::Method::PUT,
            "DELETE" => reqwest::Method::DELETE,
            _ => reqwest::Method::GET,
        };
        let url = format!("{}{}", self.base_url, request.path);

        let mut req_builder = self.client.request(method.clone(), &url);

        if let (Some(access), Some(secret)) = (&self.access_key, &self.secret_key) {
            req_builder = req_builder.basic_auth(access, Some(secret));
        }
        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }
        if let Some(accept) = &request.accept {
            req_builder = req_builder.header(reqwest::header::ACCEPT, accept);
        }
        for (k, v) in &request.headers {
            req_builder = req_builder.header(k, v);
        }
        if !request.body.is_empty() {
            let ct = request
                .content_type
                .as_deref()
                .unwrap_or("application/json");
            req_builder = req_builder.header(reqwest::header::CONTENT_TYPE, ct);
            req_builder = req_builder.body(request.body.clone());
        }

        tracing::debug!("[Onshape-Out] {} {}", method, url);

        let response = req_builder
            .send()
            .await
            .map_err(|e| OnshapeError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        let mut headers = std::collections::BTreeMap::new();
        for (k, v) in response.headers() {
            if let Ok(val) = v.to_str() {
                headers.insert(k.as_str().to_string(), val.to_string());
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| OnshapeError::Http(e.to_string()))?;

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
