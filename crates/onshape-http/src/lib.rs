//! Client for the Onshape cloud CAD platform's REST API.
//!
//! Addresses documents, workspaces, and elements; reads and mutates a part
//! studio's feature list; manages versions and branches; and exports
//! geometry. STL export is a single synchronous call; STEP export drives the
//! platform's asynchronous translation-job protocol (submit, poll, resolve
//! the external-data handle, fetch).
//!
//! All network traffic flows through the [`traits::OnshapeNetwork`]
//! capability, so the client can run against the production reqwest
//! transport or a scripted one in tests.

pub mod client;
pub mod error;
pub mod protocol;
pub mod traits;
pub mod types;

pub use client::{ClientConfig, OnshapeClient};
pub use error::{OnshapeError, Result};
pub use types::{ApiRequest, ApiResponse, ElementAddress, FeatureSnapshot, WvmKind};
