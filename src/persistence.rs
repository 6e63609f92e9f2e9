// src/persistence.rs
use crate::core::types::{FullConfig, RecentSearch};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("temp file could not replace target: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Everything the client keeps across sessions: the user override layer
/// and the recent-search list. The default layer is re-fetched, never
/// snapshotted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub user_config: FullConfig,
    pub recent: Vec<RecentSearch>,
}

/// Writes the session snapshot atomically: serialize into a temp file in
/// the target directory, then rename over the destination.
pub fn save_session(state: &SessionState, path: &Path) -> Result<(), PersistenceError> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, state)?;
    temp_file.persist(path)?;
    Ok(())
}

pub fn load_session(path: &Path) -> Result<SessionState, PersistenceError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(bincode::deserialize_from(reader)?)
}

/// Reads a published-dictionary resource (JSON keyed by category). An
/// absent or malformed resource is an empty mapping, not an error.
pub fn load_default_config(path: &Path) -> FullConfig {
    match fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("ignoring malformed config {}: {e}", path.display());
            FullConfig::default()
        }),
        Err(_) => FullConfig::default(),
    }
}

/// Reads a JSON config snapshot for import. Unlike the default resource,
/// an unreadable import file is surfaced to the caller.
pub fn read_json_config(path: &Path) -> Result<FullConfig, PersistenceError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Writes a JSON config snapshot (pretty, stable key order), atomically.
pub fn write_json_config(config: &FullConfig, path: &Path) -> Result<(), PersistenceError> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    serde_json::to_writer_pretty(BufWriter::new(&temp_file), config)?;
    temp_file.persist(path)?;
    Ok(())
}
