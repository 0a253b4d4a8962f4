//! Read-only snapshot of a part studio's feature list.

use serde::Deserialize;

/// One named feature in a part studio.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feature {
    pub name: String,
    pub feature_type: String,
    pub id: String,
}

/// Insertion-ordered name → feature mapping, rebuilt from scratch on every
/// fetch. Remote list order is preserved. Names are only unique within one
/// snapshot; on a collision the later entry wins, matching how the platform
/// resolves duplicate names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureSnapshot {
    entries: Vec<Feature>,
}

impl FeatureSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, feature: Feature) {
        self.entries.push(feature);
    }

    /// Look up a feature by name. Scans from the back so the last entry with
    /// a given name wins.
    pub fn get(&self, name: &str) -> Option<&Feature> {
        self.entries.iter().rev().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Wire shape of the `/features` response - the subset this client reads.
#[derive(Debug, Deserialize)]
pub struct FeatureListResponse {
    #[serde(default)]
    pub features: Vec<FeatureEntry>,
}

#[derive(Debug, Deserialize)]
pub struct FeatureEntry {
    pub message: FeatureMessage,
}

#[derive(Debug, Deserialize)]
pub struct FeatureMessage {
    pub name: String,
    #[serde(rename = "featureType")]
    pub feature_type: String,
    #[serde(rename = "featureId")]
    pub feature_id: String,
}

impl From<FeatureListResponse> for FeatureSnapshot {
    fn from(list: FeatureListResponse) -> Self {
        let mut snapshot = FeatureSnapshot::new();
        for entry in list.features {
            snapshot.push(Feature {
                name: entry.message.name,
                feature_type: entry.message.feature_type,
                id: entry.message.feature_id,
            });
        }
        snapshot
    }
}
