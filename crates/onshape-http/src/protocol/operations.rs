//! Per-operation request templates.
//!
//! One builder per operation. Each returns a fully specified [`ApiRequest`];
//! the transport only has to resolve it against the base URL and sign it.
//! Paths are assembled segment by segment through [`ApiPath`] - identifiers
//! never pass through string templating.

use crate::error::{OnshapeError, Result};
use crate::protocol::constants::{accept, defaults};
use crate::protocol::paths::ApiPath;
use crate::types::{ApiRequest, ElementAddress};
use serde_json::json;

/// Every operation this client knows how to issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    CreateTranslation,
    PollTranslation,
    FetchExternalData,
    ExportStl,
    GetFeatures,
    DeleteFeature,
    GetFeatureScript,
    GetVersions,
    CreateVersion,
    ListWorkspaces,
    CreateBranch,
    CopyWorkspace,
}

const ALL_OPERATIONS: [Operation; 12] = [
    Operation::CreateTranslation,
    Operation::PollTranslation,
    Operation::FetchExternalData,
    Operation::ExportStl,
    Operation::GetFeatures,
    Operation::DeleteFeature,
    Operation::GetFeatureScript,
    Operation::GetVersions,
    Operation::CreateVersion,
    Operation::ListWorkspaces,
    Operation::CreateBranch,
    Operation::CopyWorkspace,
];

impl Operation {
    /// Stable kebab-case name, used in logs and name-based lookup.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateTranslation => "create-translation",
            Operation::PollTranslation => "poll-translation",
            Operation::FetchExternalData => "fetch-external-data",
            Operation::ExportStl => "export-stl",
            Operation::GetFeatures => "get-features",
            Operation::DeleteFeature => "delete-feature",
            Operation::GetFeatureScript => "get-featurescript",
            Operation::GetVersions => "get-versions",
            Operation::CreateVersion => "create-version",
            Operation::ListWorkspaces => "list-workspaces",
            Operation::CreateBranch => "create-branch",
            Operation::CopyWorkspace => "create-workspace-copy",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        ALL_OPERATIONS
            .iter()
            .copied()
            .find(|op| op.name() == name)
            .ok_or_else(|| OnshapeError::UnsupportedOperation(name.to_string()))
    }
}

fn partstudio_path(address: &ElementAddress) -> ApiPath {
    ApiPath::new()
        .push("api/partstudios/d")
        .push_id(&address.document_id)
        .push(address.wvm.token())
        .push_id(&address.wvm_id)
        .push("e")
        .push_id(&address.element_id)
}

/// `POST .../translations` - submit an asynchronous STEP translation job.
pub fn create_translation(address: &ElementAddress, destination_name: &str) -> ApiRequest {
    let path = partstudio_path(address).push("translations").build();
    ApiRequest::new("POST", path)
        .with_accept(accept::TRANSLATION_JSON)
        .with_json_body(&json!({
            "formatName": "STEP",
            "elementId": address.element_id,
            "storeInDocument": false,
            "destinationName": destination_name,
            "unit": defaults::TRANSLATION_UNIT,
        }))
}

/// `GET /api/v2/translations/{tid}` - read a job's current state.
pub fn poll_translation(translation_id: &str) -> ApiRequest {
    let path = ApiPath::new()
        .push("api/v2/translations")
        .push_id(translation_id)
        .build();
    ApiRequest::new("GET", path).with_accept(accept::JSON)
}

/// `GET .../externaldata/{xid}` - fetch a finished job's output bytes.
pub fn fetch_external_data(document_id: &str, external_data_id: &str) -> ApiRequest {
    let path = ApiPath::new()
        .push("api/documents/d")
        .push_id(document_id)
        .push("externaldata")
        .push_id(external_data_id)
        .build();
    ApiRequest::new("GET", path).with_accept(accept::OCTET_STREAM)
}

/// `GET .../stl` - synchronous single-call STL export. Unlike STEP there is
/// no job indirection; the response body is the file.
pub fn export_stl(address: &ElementAddress) -> ApiRequest {
    let path = partstudio_path(address).push("stl").build();
    ApiRequest::new("GET", path).with_accept(accept::OCTET_STREAM)
}

/// `GET .../features` - the studio's named feature list.
pub fn get_features(address: &ElementAddress) -> ApiRequest {
    let path = partstudio_path(address).push("features").build();
    ApiRequest::new("GET", path).with_accept(accept::JSON)
}

/// `DELETE .../features/featureid/{fid}` - remove one feature.
pub fn delete_feature(address: &ElementAddress, feature_id: &str) -> ApiRequest {
    let path = partstudio_path(address)
        .push("features/featureid")
        .push_id(feature_id)
        .build();
    ApiRequest::new("DELETE", path)
        .with_accept(accept::JSON)
        .with_json_body(&json!({ "feature": feature_id }))
}

/// `POST .../featurescript` - the studio's FeatureScript representation.
pub fn get_featurescript(address: &ElementAddress) -> ApiRequest {
    let path = partstudio_path(address).push("featurescript").build();
    ApiRequest::new("POST", path).with_accept(accept::JSON)
}

/// `GET .../versions` - the document's version list, newest first.
pub fn get_versions(address: &ElementAddress) -> ApiRequest {
    let path = ApiPath::new()
        .push("api/documents/d")
        .push_id(&address.document_id)
        .push("versions")
        .build();
    ApiRequest::new("GET", path).with_accept(accept::JSON)
}

/// `POST .../versions` - create a version on top of `parent_version_id`.
pub fn create_version(address: &ElementAddress, name: &str, parent_version_id: &str) -> ApiRequest {
    let path = ApiPath::new()
        .push("api/documents/d")
        .push_id(&address.document_id)
        .push("versions")
        .build();
    ApiRequest::new("POST", path)
        .with_accept(accept::JSON)
        .with_json_body(&json!({
            "documentId": address.document_id,
            "name": name,
            "readOnly": true,
            "isRelease": true,
            "versionId": parent_version_id,
        }))
}

/// `GET .../workspaces` - the document's workspace (branch) list.
pub fn list_workspaces(address: &ElementAddress) -> ApiRequest {
    let path = ApiPath::new()
        .push("api/documents/d")
        .push_id(&address.document_id)
        .push("workspaces")
        .build();
    ApiRequest::new("GET", path).with_accept(accept::JSON)
}

/// `POST .../workspaces` - branch the document off a parent revision.
pub fn create_branch(address: &ElementAddress, parent_id: &str, name: &str) -> ApiRequest {
    let path = ApiPath::new()
        .push("api/documents/d")
        .push_id(&address.document_id)
        .push("workspaces")
        .build();
    ApiRequest::new("POST", path)
        .with_accept(accept::JSON)
        .with_json_body(&json!({
            "parentWorkspaceId": parent_id,
            "name": name,
        }))
}

/// `POST .../workspaces/{wid}/copy` - copy the addressed workspace.
pub fn copy_workspace(address: &ElementAddress) -> ApiRequest {
    let path = ApiPath::new()
        .push("api/documents")
        .push_id(&address.document_id)
        .push("workspaces")
        .push_id(&address.wvm_id)
        .push("copy")
        .build();
    ApiRequest::new("POST", path)
        .with_accept(accept::JSON)
        .with_json_body(&json!({ "newName": defaults::COPY_NAME }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WvmKind;

    fn addr() -> ElementAddress {
        ElementAddress::new("D1", WvmKind::Workspace, "W1", "E1")
    }

    #[test]
    fn test_operation_name_round_trip() {
        for op in ALL_OPERATIONS {
            assert_eq!(Operation::from_name(op.name()).unwrap(), op);
        }
    }

    #[test]
    fn test_unknown_operation_name() {
        let err = Operation::from_name("explode-document").unwrap_err();
        assert!(matches!(err, OnshapeError::UnsupportedOperation(_)));
    }

    #[test]
    fn test_create_translation_template() {
        let req = create_translation(&addr(), "bracket");
        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/api/partstudios/d/D1/w/W1/e/E1/translations");
        assert_eq!(req.accept.as_deref(), Some(accept::TRANSLATION_JSON));

        let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
        assert_eq!(body["formatName"], "STEP");
        assert_eq!(body["elementId"], "E1");
        assert_eq!(body["storeInDocument"], false);
        assert_eq!(body["destinationName"], "bracket");
        assert_eq!(body["unit"], "inch");
    }

    #[test]
    fn test_context_token_follows_address() {
        let versioned = ElementAddress::new("D1", WvmKind::Version, "V1", "E1");
        let req = export_stl(&versioned);
        assert_eq!(req.path, "/api/partstudios/d/D1/v/V1/e/E1/stl");
        assert_eq!(req.accept.as_deref(), Some(accept::OCTET_STREAM));
    }

    #[test]
    fn test_poll_and_fetch_templates() {
        let poll = poll_translation("J1");
        assert_eq!(poll.method, "GET");
        assert_eq!(poll.path, "/api/v2/translations/J1");

        let fetch = fetch_external_data("D1", "X1");
        assert_eq!(fetch.path, "/api/documents/d/D1/externaldata/X1");
        assert_eq!(fetch.accept.as_deref(), Some(accept::OCTET_STREAM));
    }

    #[test]
    fn test_delete_feature_template() {
        let req = delete_feature(&addr(), "FID1");
        assert_eq!(req.method, "DELETE");
        assert_eq!(
            req.path,
            "/api/partstudios/d/D1/w/W1/e/E1/features/featureid/FID1"
        );
        let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
        assert_eq!(body["feature"], "FID1");
    }

    #[test]
    fn test_version_and_workspace_templates() {
        assert_eq!(get_versions(&addr()).path, "/api/documents/d/D1/versions");
        assert_eq!(
            list_workspaces(&addr()).path,
            "/api/documents/d/D1/workspaces"
        );

        let create = create_version(&addr(), "release", "V0");
        let body: serde_json::Value = serde_json::from_slice(&create.body).unwrap();
        assert_eq!(body["versionId"], "V0");
        assert_eq!(body["readOnly"], true);

        let branch = create_branch(&addr(), "V0", "child branch");
        let body: serde_json::Value = serde_json::from_slice(&branch.body).unwrap();
        assert_eq!(body["parentWorkspaceId"], "V0");
        assert_eq!(body["name"], "child branch");

        let copy = copy_workspace(&addr());
        assert_eq!(copy.path, "/api/documents/D1/workspaces/W1/copy");
    }

    #[test]
    fn test_awkward_ids_stay_intact() {
        // Ids embedding template-ish literals must not corrupt the path.
        let tricky = ElementAddress::new("didwid", WvmKind::Workspace, "wideid", "eidid");
        let req = get_features(&tricky);
        assert_eq!(
            req.path,
            "/api/partstudios/d/didwid/w/wideid/e/eidid/features"
        );
    }
}
