//! The Onshape client facade.

use crate::client::config::ClientConfig;
use crate::client::native_network::NativeNetwork;
use crate::error::{OnshapeError, Result};
use crate::traits::OnshapeNetwork;
use crate::types::{ApiRequest, ApiResponse, ElementAddress};
use std::sync::Arc;

/// Client for the Onshape REST API.
///
/// Holds only the immutable configuration and the transport handle. Every
/// call reconstructs its view of remote state; nothing is cached across
/// calls.
#[derive(Clone)]
pub struct OnshapeClient {
    pub(crate) network: Arc<dyn OnshapeNetwork>,
    pub(crate) config: Arc<ClientConfig>,
}

impl OnshapeClient {
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let network = Arc::new(NativeNetwork::from_config(&config)?);
        Ok(OnshapeClient {
            network,
            config: Arc::new(config),
        })
    }

    /// Swap in a custom transport (tests, alternate executors).
    pub fn with_network(network: Arc<dyn OnshapeNetwork>, config: ClientConfig) -> Self {
        OnshapeClient {
            network,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Parse a document URL into a typed address.
    pub fn locate(&self, url: &str) -> Result<ElementAddress> {
        ElementAddress::parse(url)
    }

    /// Issue one request and require a 2xx response.
    pub(crate) async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let method = request.method.clone();
        let path = request.path.clone();
        let response = self.network.execute(request).await?;
        tracing::debug!("[Onshape] {} {} -> {}", method, path, response.status);
        if !response.is_success() {
            return Err(OnshapeError::Http(format!(
                "{} {} returned {}",
                method, path, response.status
            )));
        }
        Ok(response)
    }
}
