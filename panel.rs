/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Tool-lifetime coordinator for the recall panel.
//!
//! [`RecallPanel`] owns the selection trail, the starred list, and the
//! navigation guard for as long as the tool is open. Hosts feed it events
//! through a [`PanelFeed`] and drive it once per frame with
//! [`pump`](RecallPanel::pump); rendering reads the stores but never
//! mutates them directly.

use crossbeam_channel::{Receiver, Sender};
use log::debug;

use crate::history::{SelectionHistory, StepDirection};
use crate::ingest;
use crate::item::{ItemId, ItemProbe, ItemResolver};
use crate::nav::{self, SelectionHost, SelfSelectGuard};
use crate::persistence::{self, SettingsError, SettingsStore};
use crate::starred::StarredList;

/// User-scoped panel configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    /// Bound on the number of retained trail entries.
    pub max_history: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { max_history: 10 }
    }
}

/// External events delivered on the panel's feed.
#[derive(Debug, Clone)]
pub enum PanelEvent {
    /// The host's active selection changed; `None` means deselected.
    SelectionChanged(Option<ItemId>),
    /// A drag gesture completed over the panel with these items.
    DropCommit(Vec<ItemId>),
    /// The current scene/session context was torn down.
    ContextUnloaded,
}

/// Sending half of the panel's event subscription.
///
/// Handed out by [`RecallPanel::subscribe`]; dropping every feed is the
/// disposal handle: no further events can arrive and nothing needs
/// explicit unregistration.
#[derive(Debug, Clone)]
pub struct PanelFeed {
    tx: Sender<PanelEvent>,
}

impl PanelFeed {
    pub fn send(&self, event: PanelEvent) {
        // A closed panel simply stops listening; senders never fail hard.
        let _ = self.tx.send(event);
    }

    pub fn selection_changed(&self, new_active: Option<ItemId>) {
        self.send(PanelEvent::SelectionChanged(new_active));
    }

    pub fn drop_commit(&self, items: Vec<ItemId>) {
        self.send(PanelEvent::DropCommit(items));
    }

    pub fn context_unloaded(&self) {
        self.send(PanelEvent::ContextUnloaded);
    }
}

/// Stable identifier for a panel command.
///
/// Commands dispatch against an explicit panel instance via
/// [`RecallPanel::invoke`]; there is no global window lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandId {
    NavigateBack,
    NavigateForward,
    StarActive,
    UnstarActive,
    ClearRecents,
}

impl CommandId {
    /// Display label for menus and the command palette.
    pub fn label(self) -> &'static str {
        match self {
            Self::NavigateBack => "Navigate Back",
            Self::NavigateForward => "Navigate Forward",
            Self::StarActive => "Star Active Item",
            Self::UnstarActive => "Unstar Active Item",
            Self::ClearRecents => "Clear Recents",
        }
    }
}

/// A command with its enabled state pre-resolved for the current panel.
#[derive(Debug, Clone, Copy)]
pub struct CommandEntry {
    pub id: CommandId,
    pub enabled: bool,
}

/// Return all panel commands with enabled/disabled state resolved.
///
/// Disabled commands are included so surfaces can grey them out rather
/// than hide them.
pub fn list_commands(panel: &RecallPanel) -> Vec<CommandEntry> {
    use CommandId::*;

    let active = panel.history.current();
    let active_starred = active.map(|item| panel.starred.contains(item));

    let all: &[(CommandId, bool)] = &[
        (NavigateBack, panel.history.can_step_back()),
        (NavigateForward, panel.history.can_step_forward()),
        (StarActive, active_starred == Some(false)),
        (UnstarActive, active_starred == Some(true)),
        (ClearRecents, !panel.history.is_empty()),
    ];

    all.iter()
        .map(|&(id, enabled)| CommandEntry { id, enabled })
        .collect()
}

/// The panel's in-memory state for one tool lifetime.
pub struct RecallPanel {
    history: SelectionHistory,
    starred: StarredList,
    guard: SelfSelectGuard,
    config: PanelConfig,
    events_tx: Sender<PanelEvent>,
    events_rx: Receiver<PanelEvent>,
    redraw_requested: bool,
}

impl RecallPanel {
    /// Create a panel with empty stores (no persisted state).
    pub fn new(config: PanelConfig) -> Self {
        let (events_tx, events_rx) = crossbeam_channel::unbounded();
        Self {
            history: SelectionHistory::new(config.max_history),
            starred: StarredList::new(),
            guard: SelfSelectGuard::new(),
            config,
            events_tx,
            events_rx,
            redraw_requested: false,
        }
    }

    /// Open a panel, restoring the starred list and configuration.
    pub fn open(store: &dyn SettingsStore, resolver: &dyn ItemResolver) -> Self {
        let (starred, config) = persistence::load_panel_state(store, resolver);
        debug!(
            "Opened recall panel: {} starred item(s), max_history {}",
            starred.len(),
            config.max_history
        );
        let mut panel = Self::new(config);
        panel.starred = starred;
        panel
    }

    /// Flush the starred list and configuration, consuming the panel.
    ///
    /// The trail is deliberately not persisted: it is session-scoped.
    pub fn close(
        self,
        store: &mut dyn SettingsStore,
        probe: &dyn ItemProbe,
        resolver: &dyn ItemResolver,
    ) -> Result<(), SettingsError> {
        persistence::save_panel_state(store, &self.starred, &self.config, probe, resolver)
    }

    /// Hand out an event feed. Clones share one queue; dropping all of
    /// them disposes the subscription.
    pub fn subscribe(&self) -> PanelFeed {
        PanelFeed {
            tx: self.events_tx.clone(),
        }
    }

    /// Once-per-frame drive: drain pending events in arrival order, age
    /// the navigation guard, and sweep dead entries out of both stores.
    pub fn pump(&mut self, probe: &dyn ItemProbe) {
        let pending: Vec<PanelEvent> = self.events_rx.try_iter().collect();
        for event in pending {
            self.apply_event(probe, event);
        }
        self.guard.expire_tick();
        self.history.sweep(probe);
        self.starred.sweep(probe);
    }

    fn apply_event(&mut self, probe: &dyn ItemProbe, event: PanelEvent) {
        match event {
            PanelEvent::SelectionChanged(new_active) => {
                ingest::apply_selection_changed(
                    &mut self.history,
                    &mut self.guard,
                    probe,
                    new_active,
                );
            }
            PanelEvent::DropCommit(items) => {
                ingest::apply_drop_commit(&mut self.history, &mut self.starred, probe, &items);
            }
            PanelEvent::ContextUnloaded => {
                if ingest::apply_context_unloaded(&mut self.history, &mut self.starred, probe) {
                    self.redraw_requested = true;
                }
            }
        }
    }

    /// Dispatch a command against this panel instance.
    pub fn invoke(&mut self, command: CommandId, host: &mut dyn SelectionHost) {
        match command {
            CommandId::NavigateBack => {
                nav::step(&mut self.history, &mut self.guard, host, StepDirection::Back);
            }
            CommandId::NavigateForward => {
                nav::step(
                    &mut self.history,
                    &mut self.guard,
                    host,
                    StepDirection::Forward,
                );
            }
            CommandId::StarActive => {
                if let Some(item) = self.history.current() {
                    self.starred.add(item);
                }
            }
            CommandId::UnstarActive => {
                if let Some(item) = self.history.current() {
                    self.starred.remove(item);
                }
            }
            CommandId::ClearRecents => self.history.clear(),
        }
    }

    /// Update the trail capacity; zero is ignored.
    pub fn set_max_history(&mut self, max_history: usize) {
        if max_history == 0 {
            return;
        }
        self.config.max_history = max_history;
        self.history.set_capacity(max_history);
    }

    /// True once per redraw request (reset on read, as render would do).
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn history(&self) -> &SelectionHistory {
        &self.history
    }

    pub fn starred(&self) -> &StarredList {
        &self.starred
    }

    /// Mutable starred access for direct UI operations (row reorder,
    /// unstar buttons).
    pub fn starred_mut(&mut self) -> &mut StarredList {
        &mut self.starred
    }

    pub fn config(&self) -> PanelConfig {
        self.config
    }
}
