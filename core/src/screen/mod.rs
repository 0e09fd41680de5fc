// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Screen states. Each handler takes the state by value, awaits its remote calls, and
//! returns the next state with the outcome recorded in its [`crate::ActionStatus`].

mod form;
mod list;

pub use form::{EventForm, FormMode, Submission};
pub use list::{ListScreen, PendingAction, PendingKind};
