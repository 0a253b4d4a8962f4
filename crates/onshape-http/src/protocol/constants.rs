//! Protocol constants for the Onshape REST API.

/// Default platform base URL.
pub const DEFAULT_BASE_URL: &str = "https://cad.onshape.com";

/// Conventional name given to a document's working child branch.
pub const CHILD_BRANCH_NAME: &str = "child branch";

/// Fixed file name for the featurescript side channel.
pub const FEATURESCRIPT_FILE: &str = "featurescript.json";

/// Accept media types, by endpoint family.
pub mod accept {
    /// Standard JSON endpoints.
    pub const JSON: &str = "application/json;charset=UTF-8; qs=0.09";

    /// Translation submission (v2 payload shape).
    pub const TRANSLATION_JSON: &str = "application/vnd.onshape.v2+json;charset=UTF-8;qs=0.2";

    /// Byte downloads: STL bodies and external data.
    pub const OCTET_STREAM: &str = "application/vnd.onshape.v1+octet-stream";
}

/// Fixed body values the platform expects.
pub mod defaults {
    /// Export unit for translations.
    pub const TRANSLATION_UNIT: &str = "inch";

    /// Name given to copied workspaces.
    pub const COPY_NAME: &str = "newWorkSpace";
}
