use serde::{Deserialize, Serialize};

use crate::progress::error::StoreError;

/// Store key for the serialized [`ProgressState`].
pub const STATE_KEY: &str = "progress_state";

/// Current layout of the persisted record. Records without a `version`
/// field predate versioning and are migrated on load.
pub const SCHEMA_VERSION: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    pub version: u32,
    pub manual_offset: i64,
    #[serde(default)]
    pub celebrated: bool,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            manual_offset: 0,
            celebrated: false,
        }
    }
}

/// Unversioned record: `{ manualOffset, lastAutoDays, celebrated? }`.
/// `lastAutoDays` was a display cache and is dropped.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyState {
    #[serde(default)]
    manual_offset: i64,
    #[serde(default)]
    celebrated: bool,
}

/// How a stored payload was interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Current(ProgressState),
    Migrated(ProgressState),
}

#[cfg(test)]
impl Decoded {
    pub fn into_state(self) -> ProgressState {
        match self {
            Decoded::Current(s) | Decoded::Migrated(s) => s,
        }
    }
}

impl ProgressState {
    pub fn encode(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(raw: &str) -> Result<Decoded, StoreError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let obj = value
            .as_object()
            .ok_or_else(|| StoreError::Corrupt("expected a JSON object".to_string()))?;

        match obj.get("version") {
            None => {
                let legacy: LegacyState = serde_json::from_value(value)?;
                Ok(Decoded::Migrated(ProgressState {
                    version: SCHEMA_VERSION,
                    manual_offset: legacy.manual_offset,
                    celebrated: legacy.celebrated,
                }))
            }
            Some(v) => {
                let version = v
                    .as_u64()
                    .ok_or_else(|| StoreError::Corrupt("version is not an integer".to_string()))?;
                if version != SCHEMA_VERSION as u64 {
                    return Err(StoreError::UnsupportedVersion(version));
                }
                Ok(Decoded::Current(serde_json::from_value(value)?))
            }
        }
    }
}
