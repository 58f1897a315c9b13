/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Wire types for the persisted panel state.
//!
//! Stored state never contains live item references, only stable paths
//! resolvable across sessions.

use serde::{Deserialize, Serialize};

/// Persisted form of the starred list: stable paths in user order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedStarred {
    pub paths: Vec<String>,
}
