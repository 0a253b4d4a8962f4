//! Typed addresses for Onshape documents.

use crate::error::{OnshapeError, Result};

/// Which revision context a document URL points into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WvmKind {
    Workspace,
    Version,
    Microversion,
}

impl WvmKind {
    /// The single-character path token used in document URLs and API paths.
    pub fn token(&self) -> &'static str {
        match self {
            WvmKind::Workspace => "w",
            WvmKind::Version => "v",
            WvmKind::Microversion => "m",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "w" => Some(WvmKind::Workspace),
            "v" => Some(WvmKind::Version),
            "m" => Some(WvmKind::Microversion),
            _ => None,
        }
    }
}

/// A parsed document URL: document, revision context, and element (tab).
///
/// Addresses are value objects. Parse once, pass around; nothing mutates an
/// address after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementAddress {
    pub document_id: String,
    pub wvm: WvmKind,
    pub wvm_id: String,
    pub element_id: String,
}

impl ElementAddress {
    pub fn new(
        document_id: impl Into<String>,
        wvm: WvmKind,
        wvm_id: impl Into<String>,
        element_id: impl Into<String>,
    ) -> Self {
        ElementAddress {
            document_id: document_id.into(),
            wvm,
            wvm_id: wvm_id.into(),
            element_id: element_id.into(),
        }
    }

    /// Parse a document URL of the form
    /// `https://cad.onshape.com/documents/{did}/{w|v|m}/{id}/e/{eid}`.
    pub fn parse(raw: &str) -> Result<Self> {
        let url = url::Url::parse(raw)
            .map_err(|e| OnshapeError::MalformedAddress(format!("{}: {}", raw, e)))?;
        let segments: Vec<&str> = url
            .path_segments()
            .ok_or_else(|| OnshapeError::MalformedAddress(raw.to_string()))?
            .filter(|s| !s.is_empty())
            .collect();

        let start = segments
            .iter()
            .position(|s| *s == "documents")
            .ok_or_else(|| OnshapeError::MalformedAddress(raw.to_string()))?;
        let rest = &segments[start + 1..];
        if rest.len() < 5 || rest[3] != "e" {
            return Err(OnshapeError::MalformedAddress(raw.to_string()));
        }
        let wvm = WvmKind::from_token(rest[1]).ok_or_else(|| {
            OnshapeError::MalformedAddress(format!(
                "unknown context token '{}' in {}",
                rest[1], raw
            ))
        })?;

        Ok(ElementAddress {
            document_id: rest[0].to_string(),
            wvm,
            wvm_id: rest[2].to_string(),
            element_id: rest[4].to_string(),
        })
    }

    /// Rebuild the canonical document URL against `base`.
    pub fn to_url(&self, base: &str) -> String {
        format!(
            "{}/documents/{}/{}/{}/e/{}",
            base.trim_end_matches('/'),
            self.document_id,
            self.wvm.token(),
            self.wvm_id,
            self.element_id
        )
    }

    /// The same element viewed through a different workspace. Used when
    /// branch enumeration or a workspace copy lands somewhere new.
    pub fn with_workspace(&self, workspace_id: impl Into<String>) -> Self {
        ElementAddress {
            document_id: self.document_id.clone(),
            wvm: WvmKind::Workspace,
            wvm_id: workspace_id.into(),
            element_id: self.element_id.clone(),
        }
    }
}
