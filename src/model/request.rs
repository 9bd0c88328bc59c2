// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Request sequencing for out-of-order responses.
//!
//! Network requests are never cancelled, so a slow response can arrive after
//! a newer one. Every request carries a sequence number issued by a
//! [`RequestTracker`], and the tracker decides on arrival whether the response
//! is still wanted.

use serde::{Deserialize, Serialize};

/// What to do with a response that is not for the latest request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum StalePolicy {
    /// Apply every response in arrival order, so a slow older response can
    /// replace a newer one.
    #[default]
    Accept,
    /// Drop responses superseded by a newer request.
    Discard,
}

#[derive(Debug, Default)]
pub(crate) struct RequestTracker {
    issued: u64,
    current: Option<u64>,
    outstanding: Option<u64>,
}

impl RequestTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Issues the sequence number for a new request, making it the only one
    /// whose response is current.
    pub(crate) fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.current = Some(self.issued);
        self.outstanding = Some(self.issued);
        self.issued
    }

    /// Marks any outstanding response as no longer wanted, without issuing a
    /// new request.
    pub(crate) fn invalidate(&mut self) {
        self.current = None;
    }

    /// Records the arrival of the response for `seq`, returning whether it
    /// should be applied under `policy`.
    pub(crate) fn complete(&mut self, seq: u64, policy: StalePolicy) -> bool {
        match policy {
            StalePolicy::Accept => {
                self.outstanding = None;
                true
            }
            StalePolicy::Discard => {
                if self.outstanding == Some(seq) {
                    self.outstanding = None;
                }
                self.current == Some(seq)
            }
        }
    }

    /// Whether the most recently issued request has not completed yet.
    pub(crate) fn is_pending(&self) -> bool {
        self.outstanding.is_some()
    }
}
