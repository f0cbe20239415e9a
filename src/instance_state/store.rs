//! InstanceState: the single in-memory bundle
//!
//! The bundle is stored as JSON text so that saving and restoring go through
//! the same serialize/deserialize boundary a platform bundle would, instead
//! of passing the live struct across.

use super::types::*;
use crate::game::Snapshot;
use serde_json::{Map, Value};

pub struct InstanceState {
    bundle: Option<String>,
}

impl InstanceState {
    pub fn new() -> Self {
        InstanceState { bundle: None }
    }

    /// Whether a bundle is waiting to be restored
    #[cfg(test)]
    pub fn has_saved_state(&self) -> bool {
        self.bundle.is_some()
    }

    /// Store a snapshot, replacing any earlier bundle
    pub fn save(&mut self, snapshot: &Snapshot) -> Result<(), InstanceStateError> {
        let mut bundle = Map::new();
        bundle.insert(SCORE_KEY.to_string(), Value::from(snapshot.score));
        bundle.insert(TIMER_KEY.to_string(), Value::from(snapshot.time_left_ms));
        bundle.insert(
            CAPTURED_AT_KEY.to_string(),
            Value::from(chrono::Local::now().to_rfc3339()),
        );

        let json = serde_json::to_string(&Value::Object(bundle))?;
        log::debug!("Saved instance state: {}", json);
        self.bundle = Some(json);

        Ok(())
    }

    /// Take the stored snapshot; a bundle is delivered at most once
    pub fn restore(&mut self) -> Result<Snapshot, InstanceStateError> {
        let json = self.bundle.take().ok_or(InstanceStateError::Missing)?;
        let bundle: Map<String, Value> = serde_json::from_str(&json)?;

        let score = read_i64(&bundle, SCORE_KEY)?;
        let score = i32::try_from(score).map_err(|_| {
            InstanceStateError::CorruptedData(format!("score out of range: {}", score))
        })?;
        let time_left_ms = read_i64(&bundle, TIMER_KEY)?;

        if score < 0 || time_left_ms < 0 {
            return Err(InstanceStateError::CorruptedData(format!(
                "negative values (score {}, time {} ms)",
                score, time_left_ms
            )));
        }

        if let Some(captured_at) = bundle.get(CAPTURED_AT_KEY).and_then(Value::as_str) {
            log::info!("Restoring instance state captured at {}", captured_at);
        }

        Ok(Snapshot {
            score,
            time_left_ms,
        })
    }

    #[cfg(test)]
    fn with_raw_bundle(json: &str) -> Self {
        InstanceState {
            bundle: Some(json.to_string()),
        }
    }
}

impl Default for InstanceState {
    fn default() -> Self {
        Self::new()
    }
}

fn read_i64(bundle: &Map<String, Value>, key: &'static str) -> Result<i64, InstanceStateError> {
    let value = bundle.get(key).ok_or(InstanceStateError::MissingKey(key))?;
    value
        .as_i64()
        .ok_or_else(|| InstanceStateError::CorruptedData(format!("{} is not an integer: {}", key, value)))
}
