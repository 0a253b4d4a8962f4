//! Error types for the Onshape client.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OnshapeError>;

/// Everything that can go wrong talking to the platform.
#[derive(Debug, Error)]
pub enum OnshapeError {
    /// The document URL does not have the
    /// `documents/{did}/{w|v|m}/{id}/e/{eid}` shape.
    #[error("malformed address: {0}")]
    MalformedAddress(String),

    /// No request template exists for the named operation.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The translation job could not be created.
    #[error("translation submit failed: {0}")]
    SubmitFailed(String),

    /// The poll deadline passed before the job reached DONE. The remote job
    /// may still complete; the client has abandoned it.
    #[error("translation poll timed out after {elapsed_secs}s")]
    PollTimeout { elapsed_secs: u64 },

    /// A finished job did not name its output or owning document.
    #[error("translation result resolve failed: {0}")]
    ResolveFailed(String),

    /// The exported bytes could not be retrieved.
    #[error("export fetch failed: {0}")]
    FetchFailed(String),

    #[error("no branch named '{0}' found")]
    BranchNotFound(String),

    #[error("multiple branches named '{0}' found")]
    BranchAmbiguous(String),

    /// Requested feature name is not in the snapshot.
    #[error("feature '{0}' not present in snapshot")]
    FeatureNotFound(String),

    /// Transport failure or non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response did not have the shape the protocol promises.
    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}
