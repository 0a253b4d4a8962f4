//! Configuration for the Onshape client.

use crate::protocol::constants::DEFAULT_BASE_URL;

/// Immutable client configuration, injected at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Platform base URL.
    pub base_url: String,
    /// API access key (basic-auth user).
    pub access_key: Option<String>,
    /// API secret key (basic-auth password).
    pub secret_key: Option<String>,
    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Wall-clock budget for one translation poll loop, in seconds,
    /// measured from submission. On expiry the client abandons the job.
    pub poll_timeout_secs: u64,
    /// First inter-poll delay in milliseconds.
    pub poll_initial_delay_ms: u64,
    /// Upper bound on the inter-poll delay in milliseconds.
    pub poll_max_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_key: None,
            secret_key: None,
            request_timeout_ms: 30_000,
            poll_timeout_secs: 60,
            poll_initial_delay_ms: 500,
            poll_max_delay_ms: 3_000,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_keys(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Read base URL and API keys from `ONSHAPE_BASE_URL`,
    /// `ONSHAPE_ACCESS_KEY`, and `ONSHAPE_SECRET_KEY`.
    pub fn from_env() -> Self {
        let mut config = ClientConfig::default();
        if let Ok(base) = std::env::var("ONSHAPE_BASE_URL") {
            config.base_url = base;
        }
        config.access_key = std::env::var("ONSHAPE_ACCESS_KEY").ok();
        config.secret_key = std::env::var("ONSHAPE_SECRET_KEY").ok();
        config
    }
}
