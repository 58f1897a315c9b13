/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Back/forward navigation against the selection trail.
//!
//! Navigating programmatically changes the host's active selection, which
//! echoes back through the selection-changed stream. [`SelfSelectGuard`]
//! marks that one echo so ingestion does not re-record it as a fresh
//! selection.

use log::debug;

use crate::history::{SelectionHistory, StepDirection};
use crate::item::ItemId;

/// Host-side selection subsystem: the settable active-selection property
/// and the highlight action.
pub trait SelectionHost {
    fn set_active(&mut self, item: ItemId);
    fn ping(&mut self, item: ItemId);
}

/// One-shot re-entrancy guard for programmatic selection changes.
///
/// Armed immediately before the panel sets the host selection, consumed by
/// the very next inbound selection notification. If the host coalesces or
/// drops that notification, the guard expires after one full frame tick so
/// it cannot leak into an unrelated later event.
#[derive(Debug, Default)]
pub struct SelfSelectGuard {
    armed: bool,
    /// True until the guard has survived one tick boundary.
    fresh: bool,
}

impl SelfSelectGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self) {
        self.armed = true;
        self.fresh = true;
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Take the guard if armed. Returns whether the caller's event was the
    /// expected self-triggered echo.
    pub fn consume(&mut self) -> bool {
        let was_armed = self.armed;
        self.armed = false;
        was_armed
    }

    /// Frame-tick boundary: a guard that was armed before the previous
    /// tick and never consumed is stale and gets dropped.
    pub fn expire_tick(&mut self) {
        if !self.armed {
            return;
        }
        if self.fresh {
            self.fresh = false;
        } else {
            self.armed = false;
            debug!("Expiring unconsumed selection guard");
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

/// Move the trail cursor and mirror the result into the host selection.
///
/// On a boundary no-op (or empty trail) there is no side effect and the
/// guard is disarmed immediately, since no notification will consume it.
pub fn step(
    history: &mut SelectionHistory,
    guard: &mut SelfSelectGuard,
    host: &mut dyn SelectionHost,
    direction: StepDirection,
) -> Option<ItemId> {
    guard.arm();
    match history.step(direction) {
        Some(item) => {
            host.set_active(item);
            host.ping(item);
            Some(item)
        }
        None => {
            guard.disarm();
            None
        }
    }
}
