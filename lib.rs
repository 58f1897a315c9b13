/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Recent-selection trail and starred shelf for interactive tool panels.
//!
//! The crate is the state machine behind a "recents & starred" panel:
//! - `history`: deduplicated, bounded selection trail with a back/forward
//!   cursor and browser-style forward-branch truncation
//! - `starred`: user-ordered starred list
//! - `persistence`: starred paths + configuration in a key-value store
//! - `ingest`: external events (selection, drag-drop, context unload)
//!   applied to the stores
//! - `nav`: back/forward commands with self-triggered-echo suppression
//! - `panel`: the tool-lifetime coordinator tying the above together
//!
//! Widget layout, drag gesture detection, and the host's object lifetime
//! system stay on the host side, behind the `item` and `nav` traits.

pub mod history;
pub mod ingest;
pub mod item;
pub mod nav;
pub mod panel;
pub mod persistence;
pub mod starred;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use history::{SelectionHistory, StepDirection, DEFAULT_MAX_HISTORY};
pub use item::{ItemId, ItemProbe, ItemResolver};
pub use nav::{SelectionHost, SelfSelectGuard};
pub use panel::{CommandId, PanelConfig, PanelEvent, PanelFeed, RecallPanel};
pub use persistence::{RedbSettings, SettingsError, SettingsStore};
pub use starred::{StarredError, StarredList};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
