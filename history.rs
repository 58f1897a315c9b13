/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Recent-selection trail with browser-style back/forward navigation.
//!
//! Entries are ordered most-recent first and deduplicated by item token.
//! The cursor marks the entry the user is currently "at"; stepping back
//! moves toward older entries, stepping forward toward newer ones, and
//! recording a fresh selection while navigated back abandons the forward
//! branch, the way a browser does.

use std::collections::HashSet;

use crate::item::{ItemId, ItemProbe};

/// Default bound on the number of retained entries.
pub const DEFAULT_MAX_HISTORY: usize = 10;

/// Cursor movement direction for [`SelectionHistory::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Toward older entries (higher indices).
    Back,
    /// Toward more recent entries (lower indices).
    Forward,
}

/// Ordered, deduplicated, bounded selection trail plus navigation cursor.
///
/// Invariants, upheld by every mutation:
/// - no duplicate items
/// - `entries.len() <= max_size`
/// - `cursor < entries.len()` whenever the trail is non-empty, else 0
#[derive(Debug, Clone)]
pub struct SelectionHistory {
    /// Most-recent first.
    entries: Vec<ItemId>,

    /// Identity side-index for O(1) membership checks.
    present: HashSet<ItemId>,

    /// Index of the entry the user is currently at; 0 = most recent.
    cursor: usize,

    max_size: usize,
}

impl Default for SelectionHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

impl SelectionHistory {
    /// Create an empty trail bounded to `max_size` entries (minimum 1).
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            present: HashSet::new(),
            cursor: 0,
            max_size: max_size.max(1),
        }
    }

    /// Record a freshly selected item at the front of the trail.
    ///
    /// If the user had navigated back, everything more recent than the
    /// cursor is discarded first: selecting something new abandons the
    /// forward branch. Any previous occurrence of `item` is removed so the
    /// trail stays duplicate-free, then the tail is trimmed to capacity.
    pub fn record(&mut self, item: ItemId) {
        if self.cursor > 0 {
            self.truncate_forward();
        }
        self.remove_existing(item);
        self.entries.insert(0, item);
        self.present.insert(item);
        self.trim_to_capacity();
    }

    /// Insert an item at the front without touching the forward branch.
    ///
    /// Used for drag-drop ingestion, which is an explicit "new" action and
    /// must not behave like a navigation-triggered selection. The cursor
    /// keeps pointing at whatever entry was current before the insert.
    pub fn insert_front(&mut self, item: ItemId) {
        let current = self.current();
        self.remove_existing(item);
        self.entries.insert(0, item);
        self.present.insert(item);
        self.trim_to_capacity();
        self.cursor = current
            .and_then(|anchor| self.entries.iter().position(|&entry| entry == anchor))
            .unwrap_or(0);
    }

    /// Update the capacity bound, trimming tail entries that exceed it.
    /// Zero and unchanged values are ignored.
    pub fn set_capacity(&mut self, max_size: usize) {
        if max_size == 0 || max_size == self.max_size {
            return;
        }
        self.max_size = max_size;
        self.trim_to_capacity();
    }

    /// Remove every entry whose item no longer resolves to a live object.
    ///
    /// For each removed entry at an original index at or before the cursor
    /// (while the cursor is off the front), the cursor is pulled back one
    /// slot so it stays on a stable logical position. Idempotent.
    pub fn prune_dead(&mut self, probe: &dyn ItemProbe) {
        let cursor_before = self.cursor;
        let mut removed_up_to_cursor = 0usize;
        let mut kept = Vec::with_capacity(self.entries.len());
        for (index, item) in self.entries.drain(..).enumerate() {
            if probe.is_alive(item) {
                kept.push(item);
            } else {
                self.present.remove(&item);
                if index <= cursor_before {
                    removed_up_to_cursor += 1;
                }
            }
        }
        self.entries = kept;
        if cursor_before > 0 {
            self.cursor = cursor_before.saturating_sub(removed_up_to_cursor);
        }
        self.clamp_cursor();
    }

    /// Cheap per-render-tick filter: drop dead entries and keep the cursor
    /// in range. Unlike [`prune_dead`](Self::prune_dead) this does not try
    /// to preserve the cursor's logical position.
    pub fn sweep(&mut self, probe: &dyn ItemProbe) {
        if self.entries.iter().all(|&item| probe.is_alive(item)) {
            return;
        }
        let present = &mut self.present;
        self.entries.retain(|&item| {
            let alive = probe.is_alive(item);
            if !alive {
                present.remove(&item);
            }
            alive
        });
        self.clamp_cursor();
    }

    /// Move the cursor one step and return the item it lands on.
    ///
    /// Returns `None` when the trail is empty or the move would cross a
    /// boundary; in that case the cursor does not move.
    pub fn step(&mut self, direction: StepDirection) -> Option<ItemId> {
        match direction {
            StepDirection::Back => {
                if self.cursor + 1 < self.entries.len() {
                    self.cursor += 1;
                    self.current()
                } else {
                    None
                }
            }
            StepDirection::Forward => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.current()
                } else {
                    None
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.present.clear();
        self.cursor = 0;
    }

    /// Item under the cursor, if any.
    pub fn current(&self) -> Option<ItemId> {
        self.entries.get(self.cursor).copied()
    }

    pub fn can_step_back(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn can_step_forward(&self) -> bool {
        self.cursor > 0
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.present.contains(&item)
    }

    /// Entries in most-recent-first order.
    pub fn entries(&self) -> &[ItemId] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.max_size
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry more recent than the cursor and reset it to 0.
    fn truncate_forward(&mut self) {
        for dropped in self.entries.drain(..self.cursor) {
            self.present.remove(&dropped);
        }
        self.cursor = 0;
    }

    fn remove_existing(&mut self, item: ItemId) {
        if self.present.remove(&item)
            && let Some(position) = self.entries.iter().position(|&entry| entry == item)
        {
            self.entries.remove(position);
        }
    }

    fn trim_to_capacity(&mut self) {
        while self.entries.len() > self.max_size {
            if let Some(dropped) = self.entries.pop() {
                self.present.remove(&dropped);
            }
        }
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        if self.entries.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.entries.len() - 1);
        }
    }
}
