use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};
use crate::render::Renderer;

use super::{CalendarEngine, EngineSnapshot};

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for picker snapshots stored as regression fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> PickerResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PickerError::InvalidData(format!("failed to serialize picker snapshot v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    ///
    /// The restored month window must be a non-empty run of consecutive
    /// months, the same shape a live engine keeps.
    pub fn from_json_compat_str(input: &str) -> PickerResult<Self> {
        let snapshot = match serde_json::from_str::<EngineSnapshot>(input) {
            Ok(snapshot) => snapshot,
            Err(_) => {
                let payload: EngineSnapshotJsonContractV1 =
                    serde_json::from_str(input).map_err(|e| {
                        PickerError::InvalidData(format!("failed to parse picker snapshot: {e}"))
                    })?;
                if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
                    return Err(PickerError::InvalidData(format!(
                        "unsupported picker snapshot schema version: {}",
                        payload.schema_version
                    )));
                }
                payload.snapshot
            }
        };
        snapshot.validate_months()?;
        Ok(snapshot)
    }

    fn validate_months(&self) -> PickerResult<()> {
        let Some((first, rest)) = self.visible_months.split_first() else {
            return Err(PickerError::InvalidData(
                "picker snapshot has no visible months".to_owned(),
            ));
        };
        let mut previous = *first;
        for month in rest {
            if previous.checked_next() != Some(*month) {
                return Err(PickerError::InvalidData(format!(
                    "picker snapshot months jump from {previous} to {month}"
                )));
            }
            previous = *month;
        }
        if self.scrollable_month_multiple == 0 {
            return Err(PickerError::InvalidData(
                "picker snapshot scrollable month multiple must be >= 1".to_owned(),
            ));
        }
        Ok(())
    }
}

impl<R: Renderer> CalendarEngine<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> PickerResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
