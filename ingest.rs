/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! External events applied to the stores.
//!
//! These functions are pure state mutation; event detection and delivery
//! live with the host. Keeping the two apart makes every ingestion rule
//! testable without a host environment.

use log::debug;

use crate::history::SelectionHistory;
use crate::item::{ItemId, ItemProbe};
use crate::nav::SelfSelectGuard;
use crate::starred::StarredList;

/// Apply a selection-changed notification.
///
/// A notification that was self-triggered by navigation consumes the guard
/// and is otherwise ignored; re-recording it would truncate the forward
/// branch the user is navigating through. Absent or dead items are ignored.
pub fn apply_selection_changed(
    history: &mut SelectionHistory,
    guard: &mut SelfSelectGuard,
    probe: &dyn ItemProbe,
    new_active: Option<ItemId>,
) {
    if guard.consume() {
        return;
    }
    let Some(item) = new_active else {
        return;
    };
    if !probe.is_alive(item) {
        return;
    }
    history.record(item);
}

/// Apply a committed drag-drop batch.
///
/// Each persistent dropped item lands at the front of the trail without
/// disturbing the forward branch (a drop is an explicit "new" action, not
/// a navigation), and is starred as a convenience if it was not already.
/// Ephemeral drops are rejected. Returns how many items were accepted.
pub fn apply_drop_commit(
    history: &mut SelectionHistory,
    starred: &mut StarredList,
    probe: &dyn ItemProbe,
    dropped: &[ItemId],
) -> usize {
    let mut accepted = 0;
    for &item in dropped {
        if !probe.is_persistent(item) {
            debug!("Rejecting ephemeral drop: {item}");
            continue;
        }
        history.insert_front(item);
        starred.add(item);
        accepted += 1;
    }
    accepted
}

/// Apply a context-unload signal: both stores drop entries that did not
/// survive the teardown. Returns true so callers request a redraw.
pub fn apply_context_unloaded(
    history: &mut SelectionHistory,
    starred: &mut StarredList,
    probe: &dyn ItemProbe,
) -> bool {
    history.prune_dead(probe);
    starred.prune(probe);
    true
}
