/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Durable panel state: starred paths and configuration in a key-value store.
//!
//! Architecture:
//! - Stores are addressed through the [`SettingsStore`] trait; the default
//!   backend is a single-table redb database in the user config directory
//! - Starred items are persisted as stable paths (`{"paths": [...]}` JSON),
//!   never as live references
//! - Saving silently drops non-persistent items; loading silently skips
//!   paths that no longer resolve

pub mod types;

use std::path::PathBuf;

use log::{debug, warn};
use redb::{ReadableDatabase, ReadableTable};

use crate::item::{ItemProbe, ItemResolver};
use crate::panel::PanelConfig;
use crate::starred::StarredList;
use types::PersistedStarred;

const SETTINGS_TABLE: redb::TableDefinition<&str, &str> =
    redb::TableDefinition::new("settings");

/// Key for the persisted history capacity (integer, user-scoped).
pub const MAX_HISTORY_KEY: &str = "panel.max_history";
/// Key for the persisted starred blob (JSON string, user-scoped).
pub const STARRED_KEY: &str = "panel.starred";

/// Errors from the settings store.
#[derive(Debug)]
pub enum SettingsError {
    Io(String),
    Redb(String),
    Encode(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {e}"),
            SettingsError::Redb(e) => write!(f, "Redb error: {e}"),
            SettingsError::Encode(e) => write!(f, "Encode error: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Process-wide, user-scoped key-value store for panel settings.
///
/// Reads fail soft (missing key and unreadable store both come back as
/// `None`); writes surface their errors so lifecycle boundaries can report
/// a failed flush.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// Settings store backed by a single-table redb database.
pub struct RedbSettings {
    db: redb::Database,
}

impl RedbSettings {
    /// Open or create a settings database at the given directory.
    pub fn open(base_dir: PathBuf) -> Result<Self, SettingsError> {
        std::fs::create_dir_all(&base_dir)
            .map_err(|e| SettingsError::Io(format!("Failed to create dir: {e}")))?;

        let db = redb::Database::create(base_dir.join("settings.redb"))
            .map_err(|e| SettingsError::Redb(format!("{e}")))?;
        Ok(Self { db })
    }

    /// Default storage directory for panel settings.
    pub fn default_data_dir() -> PathBuf {
        let mut dir = dirs::config_dir().expect("No config directory available");
        dir.push("backtrail");
        dir
    }
}

impl SettingsStore for RedbSettings {
    fn get(&self, key: &str) -> Option<String> {
        let read_txn = match self.db.begin_read() {
            Ok(txn) => txn,
            Err(e) => {
                warn!("Failed to open settings read transaction: {e}");
                return None;
            }
        };
        // The table does not exist until the first write.
        let Ok(table) = read_txn.open_table(SETTINGS_TABLE) else {
            return None;
        };
        match table.get(key) {
            Ok(value) => value.map(|guard| guard.value().to_string()),
            Err(e) => {
                warn!("Failed to read settings key {key}: {e}");
                None
            }
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| SettingsError::Redb(format!("{e}")))?;
        {
            let mut table = write_txn
                .open_table(SETTINGS_TABLE)
                .map_err(|e| SettingsError::Redb(format!("{e}")))?;
            table
                .insert(key, value)
                .map_err(|e| SettingsError::Redb(format!("{e}")))?;
        }
        write_txn
            .commit()
            .map_err(|e| SettingsError::Redb(format!("{e}")))?;
        Ok(())
    }
}

/// Flush the starred list and configuration to the store.
///
/// Only persistent items make it to disk: ephemeral entries cannot be
/// resolved on reload, so they are dropped here without complaint.
pub fn save_panel_state(
    store: &mut dyn SettingsStore,
    starred: &StarredList,
    config: &PanelConfig,
    probe: &dyn ItemProbe,
    resolver: &dyn ItemResolver,
) -> Result<(), SettingsError> {
    let paths: Vec<String> = starred
        .iter()
        .filter(|&item| probe.is_persistent(item))
        .filter_map(|item| resolver.path_of(item))
        .collect();

    let blob = serde_json::to_string(&PersistedStarred { paths })
        .map_err(|e| SettingsError::Encode(format!("{e}")))?;
    store.put(STARRED_KEY, &blob)?;
    store.put(MAX_HISTORY_KEY, &config.max_history.to_string())?;
    Ok(())
}

/// Load the starred list and configuration from the store.
///
/// Absent keys yield defaults; a malformed blob or an unresolvable path is
/// stale external data, not an error, so loading never fails.
pub fn load_panel_state(
    store: &dyn SettingsStore,
    resolver: &dyn ItemResolver,
) -> (StarredList, PanelConfig) {
    let mut config = PanelConfig::default();
    if let Some(raw) = store.get(MAX_HISTORY_KEY) {
        match raw.parse::<usize>() {
            Ok(value) if value > 0 => config.max_history = value,
            _ => warn!("Ignoring invalid persisted max_history: {raw}"),
        }
    }

    let Some(blob) = store.get(STARRED_KEY) else {
        return (StarredList::new(), config);
    };
    let persisted: PersistedStarred = match serde_json::from_str(&blob) {
        Ok(persisted) => persisted,
        Err(e) => {
            warn!("Discarding malformed starred blob: {e}");
            return (StarredList::new(), config);
        }
    };

    let starred = StarredList::from_entries(persisted.paths.iter().filter_map(|path| {
        let resolved = resolver.resolve(path);
        if resolved.is_none() {
            debug!("Skipping unresolvable starred path: {path}");
        }
        resolved
    }));
    (starred, config)
}
