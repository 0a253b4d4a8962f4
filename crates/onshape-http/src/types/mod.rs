pub mod address;
pub mod feature;
pub mod request;
pub mod response;
pub mod translation;
pub mod version;

pub use address::{ElementAddress, WvmKind};
pub use feature::{Feature, FeatureListResponse, FeatureSnapshot};
pub use request::ApiRequest;
pub use response::ApiResponse;
pub use translation::{JobState, TranslationJob};
pub use version::{DocumentVersion, Workspace};
