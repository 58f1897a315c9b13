/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! In-memory host doubles for tests and embedded harnesses.
//!
//! Compiled for unit tests and behind the `test-utils` feature for the
//! scenario suite and downstream harnesses.

use std::collections::HashMap;

use crate::item::{ItemId, ItemProbe, ItemResolver};
use crate::nav::SelectionHost;
use crate::persistence::{SettingsError, SettingsStore};

#[derive(Debug, Clone)]
struct CatalogEntry {
    /// Stable path for persistent items; `None` marks scene-local ones.
    path: Option<String>,
    alive: bool,
}

/// In-memory stand-in for the host's object catalog.
///
/// Items are either persistent (addressable by a stable path, survive
/// context teardown) or transient (alive until deleted, never
/// resolvable). Deletion keeps the tombstone so stale tokens keep
/// answering queries the way a real host would.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    entries: HashMap<ItemId, CatalogEntry>,
    by_path: HashMap<String, ItemId>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_persistent(&mut self, path: &str) -> ItemId {
        let item = ItemId::new();
        self.entries.insert(
            item,
            CatalogEntry {
                path: Some(path.to_string()),
                alive: true,
            },
        );
        self.by_path.insert(path.to_string(), item);
        item
    }

    pub fn add_transient(&mut self) -> ItemId {
        let item = ItemId::new();
        self.entries
            .insert(item, CatalogEntry { path: None, alive: true });
        item
    }

    pub fn delete(&mut self, item: ItemId) {
        if let Some(entry) = self.entries.get_mut(&item) {
            entry.alive = false;
        }
    }
}

impl ItemProbe for MemoryCatalog {
    fn is_alive(&self, item: ItemId) -> bool {
        self.entries.get(&item).is_some_and(|entry| entry.alive)
    }

    fn is_persistent(&self, item: ItemId) -> bool {
        self.entries
            .get(&item)
            .is_some_and(|entry| entry.alive && entry.path.is_some())
    }
}

impl ItemResolver for MemoryCatalog {
    fn path_of(&self, item: ItemId) -> Option<String> {
        let entry = self.entries.get(&item)?;
        if !entry.alive {
            return None;
        }
        entry.path.clone()
    }

    fn resolve(&self, path: &str) -> Option<ItemId> {
        let item = *self.by_path.get(path)?;
        self.is_alive(item).then_some(item)
    }
}

/// HashMap-backed settings store.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Selection host that records every side effect for assertions.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub activated: Vec<ItemId>,
    pub pinged: Vec<ItemId>,
}

impl SelectionHost for RecordingHost {
    fn set_active(&mut self, item: ItemId) {
        self.activated.push(item);
    }

    fn ping(&mut self, item: ItemId) {
        self.pinged.push(item);
    }
}
