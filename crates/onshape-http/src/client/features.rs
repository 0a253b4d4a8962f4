//! The feature list: snapshot reads and best-effort deletion.

use crate::error::{OnshapeError, Result};
use crate::protocol::constants::FEATURESCRIPT_FILE;
use crate::protocol::operations;
use crate::types::{ElementAddress, FeatureListResponse, FeatureSnapshot};

use super::fetch::OnshapeClient;

impl OnshapeClient {
    /// Fetch the studio's named feature list, rebuilding the snapshot from
    /// scratch. Remote order is preserved.
    pub async fn get_features(&self, address: &ElementAddress) -> Result<FeatureSnapshot> {
        let response = self.send(operations::get_features(address)).await?;
        let list: FeatureListResponse = response.json()?;
        Ok(FeatureSnapshot::from(list))
    }

    /// Delete `names` from the studio, best effort.
    ///
    /// Names missing from `snapshot` are logged and skipped without issuing
    /// a request; the batch keeps going. There is no transactionality: a
    /// transport failure partway leaves earlier deletions committed.
    /// Returns how many deletions were issued.
    pub async fn delete_features(
        &self,
        address: &ElementAddress,
        snapshot: &FeatureSnapshot,
        names: &[&str],
    ) -> Result<usize> {
        let mut deleted = 0;
        for name in names {
            let Some(feature) = snapshot.get(name) else {
                tracing::warn!(
                    "[Onshape] feature '{}' not in snapshot, skipping delete",
                    name
                );
                continue;
            };
            self.send(operations::delete_feature(address, &feature.id))
                .await?;
            deleted += 1;
        }
        Ok(deleted)
    }

    /// Delete one feature by name. Unlike the batch variant, a name missing
    /// from `snapshot` is a hard error.
    pub async fn delete_feature(
        &self,
        address: &ElementAddress,
        snapshot: &FeatureSnapshot,
        name: &str,
    ) -> Result<()> {
        let feature = snapshot
            .get(name)
            .ok_or_else(|| OnshapeError::FeatureNotFound(name.to_string()))?;
        self.send(operations::delete_feature(address, &feature.id))
            .await?;
        Ok(())
    }

    /// Fetch the studio's FeatureScript representation. The raw JSON
    /// response is also written to `featurescript.json` as a side channel.
    pub async fn get_feature_script(
        &self,
        address: &ElementAddress,
    ) -> Result<serde_json::Value> {
        let response = self.send(operations::get_featurescript(address)).await?;
        let value: serde_json::Value = response.json()?;
        tokio::fs::write(FEATURESCRIPT_FILE, &response.body)
            .await
            .map_err(|e| OnshapeError::Io(e.to_string()))?;
        Ok(value)
    }
}
