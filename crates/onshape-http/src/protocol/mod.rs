//! Request templates and wire constants for the Onshape REST API.

pub mod constants;
pub mod operations;
pub mod paths;

pub use operations::Operation;
pub use paths::ApiPath;
