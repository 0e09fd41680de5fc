// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Outcome of the last user action on a screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActionStatus {
    /// Nothing running, nothing to report.
    #[default]
    Idle,
    /// A remote call is in flight.
    Loading,
    /// The last action succeeded.
    Success(String),
    /// The last action failed.
    Failed(String),
}

impl ActionStatus {
    /// Returns `true` while a call is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, ActionStatus::Loading)
    }

    /// The banner message, if the last action finished.
    pub fn message(&self) -> Option<&str> {
        match self {
            ActionStatus::Success(m) | ActionStatus::Failed(m) => Some(m),
            ActionStatus::Idle | ActionStatus::Loading => None,
        }
    }
}
