//! JSON backup and restore of review progress.
//! Saves every schedule record to a file and loads them back into a store.

use crate::database::ReviewStore;
use crate::error::Result;
use crate::models::ScheduleRecord;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub records: Vec<ScheduleRecord>,
}

/// Writes all records in the store to a JSON file at the specified path.
/// Returns the number of records written.
pub fn export_progress_to_path(store: &ReviewStore, path: impl AsRef<Path>) -> Result<usize> {
    let snapshot = ProgressSnapshot {
        records: store.records()?,
    };
    let json_string = serde_json::to_string_pretty(&snapshot)?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(json_string.as_bytes())?;

    log::info!(
        "Exported {} records to '{}'",
        snapshot.records.len(),
        path.as_ref().display()
    );
    Ok(snapshot.records.len())
}

/// Loads records from a JSON backup and upserts them into the store.
///
/// The restore is all or nothing: unknown chord symbols fail deserialization,
/// intervals below 1 are rejected as corrupt, and the records are written in a
/// single transaction. Later entries for the same chord replace earlier ones.
pub fn import_progress(store: &ReviewStore, path: impl AsRef<Path>) -> Result<usize> {
    let mut file = File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let snapshot: ProgressSnapshot = serde_json::from_str(&contents)?;
    store.upsert_all(&snapshot.records)?;

    log::info!(
        "Imported {} records from '{}'",
        snapshot.records.len(),
        path.as_ref().display()
    );
    Ok(snapshot.records.len())
}
