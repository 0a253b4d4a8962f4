use crate::error::Result;
use crate::types::{ApiRequest, ApiResponse};
use async_trait::async_trait;

/// Abstraction for the authenticated request executor.
///
/// The client hands a fully specified [`ApiRequest`] to this capability and
/// gets back status, headers, and bytes. A transport-level failure is
/// reported as an error and is equivalent to an explicit failure response.
#[async_trait]
pub trait OnshapeNetwork: Send + Sync + 'static {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}
