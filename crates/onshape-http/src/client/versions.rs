//! Versions, branches, and workspace copies.

use crate::error::{OnshapeError, Result};
use crate::protocol::operations;
use crate::types::{DocumentVersion, ElementAddress, Workspace, WvmKind};

use super::fetch::OnshapeClient;

impl OnshapeClient {
    /// Id of the document's latest version.
    ///
    /// The platform returns the version list newest-first. That ordering is
    /// a dependency of this client, not a documented contract, so it is
    /// validated against the `createdAt` stamps when they are present and a
    /// contradiction fails loudly instead of returning a wrong id.
    pub async fn get_latest_version_id(&self, address: &ElementAddress) -> Result<String> {
        let response = self.send(operations::get_versions(address)).await?;
        let versions: Vec<DocumentVersion> = response.json()?;
        latest_version(&versions).map(|v| v.id.clone())
    }

    /// Create a new version on top of the current latest. Returns the new
    /// version's id.
    pub async fn create_version(&self, address: &ElementAddress, name: &str) -> Result<String> {
        let parent_id = self.get_latest_version_id(address).await?;
        let request = operations::create_version(address, name, &parent_id);
        let response = self.send(request).await?;
        let created: DocumentVersion = response.json()?;
        Ok(created.id)
    }

    /// Branch the document off `parent_version_id`. Returns the new
    /// workspace id when the response names one.
    pub async fn create_branch(
        &self,
        address: &ElementAddress,
        parent_version_id: &str,
        name: &str,
    ) -> Result<Option<String>> {
        let request = operations::create_branch(address, parent_version_id, name);
        let response = self.send(request).await?;
        Ok(response.json::<Workspace>().ok().map(|w| w.id))
    }

    /// Find the single workspace named `name`, excluding the address's own
    /// workspace. Zero matches and multiple matches are both errors; the
    /// manager never guesses.
    pub async fn enumerate_branch(
        &self,
        address: &ElementAddress,
        name: &str,
    ) -> Result<ElementAddress> {
        let response = self.send(operations::list_workspaces(address)).await?;
        let workspaces: Vec<Workspace> = response.json()?;

        let mut matches = workspaces
            .into_iter()
            .filter(|w| w.name == name && w.id != address.wvm_id);
        let found = matches
            .next()
            .ok_or_else(|| OnshapeError::BranchNotFound(name.to_string()))?;
        if matches.next().is_some() {
            return Err(OnshapeError::BranchAmbiguous(name.to_string()));
        }
        Ok(address.with_workspace(found.id))
    }

    /// Copy the addressed workspace into a new document. `None` when the
    /// response does not say where the copy landed.
    pub async fn copy_workspace(
        &self,
        address: &ElementAddress,
    ) -> Result<Option<ElementAddress>> {
        let response = self.send(operations::copy_workspace(address)).await?;
        let value: serde_json::Value = response.json()?;

        let new_document_id = value.get("newDocumentId").and_then(|v| v.as_str());
        let new_workspace_id = value.get("newWorkspaceId").and_then(|v| v.as_str());
        match (new_document_id, new_workspace_id) {
            (Some(did), Some(wid)) => Ok(Some(ElementAddress::new(
                did,
                WvmKind::Workspace,
                wid,
                address.element_id.clone(),
            ))),
            _ => {
                tracing::warn!("[Onshape] workspace copy response missing new ids");
                Ok(None)
            }
        }
    }
}

/// First entry is authoritative-latest; verify when the stamps allow it.
/// ISO-8601 stamps compare lexicographically.
fn latest_version(versions: &[DocumentVersion]) -> Result<&DocumentVersion> {
    let first = versions
        .first()
        .ok_or_else(|| OnshapeError::Protocol("document has no versions".to_string()))?;

    if let Some(first_stamp) = &first.created_at {
        for other in &versions[1..] {
            if let Some(stamp) = &other.created_at {
                if stamp > first_stamp {
                    return Err(OnshapeError::Protocol(format!(
                        "version list not newest-first: {} ({}) is newer than {} ({})",
                        other.id, stamp, first.id, first_stamp
                    )));
                }
            }
        }
    }
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(id: &str, created_at: Option<&str>) -> DocumentVersion {
        DocumentVersion {
            id: id.to_string(),
            name: id.to_string(),
            created_at: created_at.map(|s| s.to_string()),
            parent_version_id: None,
        }
    }

    #[test]
    fn test_latest_is_first() {
        let versions = vec![
            version("v3", Some("2024-06-03T00:00:00Z")),
            version("v2", Some("2024-06-02T00:00:00Z")),
            version("v1", Some("2024-06-01T00:00:00Z")),
        ];
        assert_eq!(latest_version(&versions).unwrap().id, "v3");
    }

    #[test]
    fn test_ordering_violation_fails_loudly() {
        let versions = vec![
            version("v1", Some("2024-06-01T00:00:00Z")),
            version("v3", Some("2024-06-03T00:00:00Z")),
        ];
        assert!(matches!(
            latest_version(&versions).unwrap_err(),
            OnshapeError::Protocol(_)
        ));
    }

    #[test]
    fn test_missing_stamps_are_trusted() {
        let versions = vec![version("v2", None), version("v1", None)];
        assert_eq!(latest_version(&versions).unwrap().id, "v2");
    }

    #[test]
    fn test_empty_version_list() {
        assert!(matches!(
            latest_version(&[]).unwrap_err(),
            OnshapeError::Protocol(_)
        ));
    }
}
