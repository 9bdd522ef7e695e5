//! JSON file persistence for `EventData`.

use crate::store::EventData;
use std::fs;
use std::io;
use std::path::Path;

/// Failure reading or writing the data file.
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "Data file I/O error: {}", e),
            StoreError::Json(e) => write!(f, "Data file is not valid JSON: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

fn read(path: &Path) -> Result<EventData, StoreError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Load saved data. A missing or unreadable file yields a fresh event.
pub fn load(path: &Path) -> EventData {
    if !path.exists() {
        log::info!("No data file at {}, starting a new event", path.display());
        return EventData::default();
    }
    match read(path) {
        Ok(data) => {
            log::info!(
                "Loaded {} round-robin and {} knockout results from {}",
                data.round_robin.len(),
                data.knockout.len(),
                path.display()
            );
            data
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}", path.display(), e);
            EventData::default()
        }
    }
}

/// Write the whole event as pretty JSON.
pub fn save(path: &Path, data: &EventData) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    log::debug!("Saved event data to {}", path.display());
    Ok(())
}

/// Save `updated`, then make it the live event. On failure `current` is left untouched.
pub fn commit(path: &Path, current: &mut EventData, updated: EventData) -> Result<(), StoreError> {
    save(path, &updated)?;
    *current = updated;
    Ok(())
}

/// Delete the data file. Missing files are fine.
pub fn reset(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path) {
        Ok(()) => {
            log::info!("Removed data file {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
