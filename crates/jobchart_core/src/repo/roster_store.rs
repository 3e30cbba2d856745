//! Roster persistence under a fixed namespace key.
//!
//! # Responsibility
//! - Save, load and clear the `{third, second}` roster record.
//! - Recover from malformed stored JSON by reading empty rosters.
//!
//! # Invariants
//! - The record lives under [`ROSTER_STORAGE_KEY`] and nowhere else.
//! - A field that is not a JSON array reads as an empty roster.
//! - Number and boolean entries load as their text form; `null`, nested
//!   arrays and objects are dropped.

use crate::model::roster::{Grade, Roster, RosterPair};
use crate::repo::kv_store::{KeyValueStore, StoreResult};
use log::{info, warn};
use serde_json::{Map, Value};

/// Storage key of the persisted roster record.
pub const ROSTER_STORAGE_KEY: &str = "jobChartLists_v1";

/// Roster record store over any key-value medium.
pub struct RosterStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> RosterStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying key-value medium.
    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Overwrites the stored record with `rosters`.
    pub fn save(&self, rosters: &RosterPair) -> StoreResult<()> {
        let encoded = serde_json::to_string(rosters)?;
        self.store.set(ROSTER_STORAGE_KEY, &encoded)?;
        info!(
            "event=roster_save module=repo status=ok third={} second={}",
            rosters.third.len(),
            rosters.second.len()
        );
        Ok(())
    }

    /// Reads the stored record; absent or malformed data yields empty rosters.
    pub fn load(&self) -> StoreResult<RosterPair> {
        let Some(raw) = self.store.get(ROSTER_STORAGE_KEY)? else {
            info!("event=roster_load module=repo status=ok source=absent");
            return Ok(RosterPair::default());
        };

        match decode_roster_record(&raw) {
            Some(rosters) => {
                info!(
                    "event=roster_load module=repo status=ok source=stored third={} second={}",
                    rosters.third.len(),
                    rosters.second.len()
                );
                Ok(rosters)
            }
            None => {
                warn!(
                    "event=roster_load module=repo status=degraded source=malformed bytes={}",
                    raw.len()
                );
                Ok(RosterPair::default())
            }
        }
    }

    /// Deletes the stored record entirely.
    pub fn clear(&self) -> StoreResult<()> {
        self.store.remove(ROSTER_STORAGE_KEY)?;
        info!("event=roster_clear module=repo status=ok");
        Ok(())
    }
}

/// Decodes a stored record. `None` when `raw` is not a JSON object.
fn decode_roster_record(raw: &str) -> Option<RosterPair> {
    let Ok(Value::Object(record)) = serde_json::from_str::<Value>(raw) else {
        return None;
    };
    Some(RosterPair::new(
        roster_field(&record, Grade::Third),
        roster_field(&record, Grade::Second),
    ))
}

fn roster_field(record: &Map<String, Value>, grade: Grade) -> Roster {
    match record.get(grade.field_name()) {
        Some(Value::Array(items)) => Roster::from_names(items.iter().filter_map(stored_name)),
        _ => Roster::default(),
    }
}

fn stored_name(item: &Value) -> Option<String> {
    match item {
        Value::String(name) => Some(name.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
