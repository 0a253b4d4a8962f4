//! Version and workspace view objects.

use serde::Deserialize;

/// One entry in a document's version list.
#[derive(Clone, Debug, Deserialize)]
pub struct DocumentVersion {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// ISO-8601 creation stamp. Present on list responses, used to validate
    /// the newest-first ordering assumption.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "parentId", default)]
    pub parent_version_id: Option<String>,
}

/// One entry in a document's workspace list.
#[derive(Clone, Debug, Deserialize)]
pub struct Workspace {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "parent", default)]
    pub parent_workspace_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_version_list() {
        let raw = serde_json::json!([
            {"id": "v2", "name": "release 2", "createdAt": "2024-06-02T10:00:00Z", "parentId": "v1"},
            {"id": "v1", "name": "release 1", "createdAt": "2024-06-01T10:00:00Z"}
        ]);
        let versions: Vec<DocumentVersion> = serde_json::from_value(raw).unwrap();
        assert_eq!(versions[0].id, "v2");
        assert_eq!(versions[0].parent_version_id.as_deref(), Some("v1"));
        assert!(versions[1].parent_version_id.is_none());
    }

    #[test]
    fn test_decode_workspace() {
        let raw = serde_json::json!({"id": "w1", "name": "Main"});
        let workspace: Workspace = serde_json::from_value(raw).unwrap();
        assert_eq!(workspace.id, "w1");
        assert_eq!(workspace.name, "Main");
        assert!(workspace.parent_workspace_id.is_none());
    }
}
