/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Stable item identity and the host-facing item traits.
//!
//! The panel never holds live object references. Hosts hand out [`ItemId`]
//! tokens and answer liveness/persistence queries on demand, so a token may
//! go stale at any time without invalidating the stores that hold it.

use uuid::Uuid;

/// Stable identity token for an external item (asset, resource, object).
///
/// Identity is the token itself; the referenced object may be deleted at any
/// time. Liveness is queried through [`ItemProbe`], never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Host-side answers about an item's current state.
pub trait ItemProbe {
    /// Whether the token still resolves to a live object.
    fn is_alive(&self, item: ItemId) -> bool;

    /// Whether the item survives beyond the current scene/context.
    ///
    /// Scene-local and otherwise ephemeral objects report `false` and are
    /// never persisted or auto-starred.
    fn is_persistent(&self, item: ItemId) -> bool;
}

/// Maps stable path strings to live items and back.
///
/// Only the persistence layer uses this; in-memory stores work with
/// [`ItemId`] tokens exclusively.
pub trait ItemResolver {
    /// Stable path for a persistent item, `None` for ephemeral or dead ones.
    fn path_of(&self, item: ItemId) -> Option<String>;

    /// Resolve a stored path back to a live item. `None` means the item was
    /// deleted or moved since the path was recorded.
    fn resolve(&self, path: &str) -> Option<ItemId>;
}
