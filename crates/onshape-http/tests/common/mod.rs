//! Scripted transport shared by the integration tests.

use async_trait::async_trait;
use onshape_http::traits::OnshapeNetwork;
use onshape_http::types::{ApiRequest, ApiResponse};
use onshape_http::{ClientConfig, OnshapeClient, OnshapeError};
use std::sync::{Arc, Mutex};

/// Replays a scripted sequence of responses and records every request.
pub struct MockNetwork {
    script: Mutex<Vec<ApiResponse>>,
    /// Keep replaying the last response once the script runs out.
    repeat_last: bool,
    seen: Mutex<Vec<ApiRequest>>,
}

impl MockNetwork {
    pub fn new(script: Vec<ApiResponse>) -> Arc<Self> {
        Arc::new(MockNetwork {
            script: Mutex::new(script),
            repeat_last: false,
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn looping(script: Vec<ApiResponse>) -> Arc<Self> {
        Arc::new(MockNetwork {
            script: Mutex::new(script),
            repeat_last: true,
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl OnshapeNetwork for MockNetwork {
    async fn execute(&self, request: ApiRequest) -> onshape_http::Result<ApiResponse> {
        self.seen.lock().unwrap().push(request);
        let mut script = self.script.lock().unwrap();
        if script.len() == 1 && self.repeat_last {
            return Ok(script[0].clone());
        }
        if script.is_empty() {
            return Err(OnshapeError::Http("mock script exhausted".to_string()));
        }
        Ok(script.remove(0))
    }
}

pub fn client_with(network: Arc<MockNetwork>, config: ClientConfig) -> OnshapeClient {
    let network: Arc<dyn OnshapeNetwork> = network;
    OnshapeClient::with_network(network, config)
}

pub fn json_response(status: u16, value: serde_json::Value) -> ApiResponse {
    ApiResponse::new(status, value.to_string())
}

/// Poll delays shortened so the deadline tests run in about a second.
pub fn fast_poll_config() -> ClientConfig {
    ClientConfig {
        poll_timeout_secs: 1,
        poll_initial_delay_ms: 50,
        poll_max_delay_ms: 100,
        ..ClientConfig::default()
    }
}
