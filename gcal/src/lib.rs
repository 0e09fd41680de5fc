// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Google Calendar access: interactive OAuth sign-in and single event insertion.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

mod client;
mod config;
mod error;
mod oauth;
mod types;

pub use crate::client::{CalendarClient, PendingSignIn};
pub use crate::config::GoogleConfig;
pub use crate::error::GcalError;
pub use crate::oauth::{CALENDAR_SCOPE, consent_url, exchange_code, wait_for_callback};
pub use crate::types::{AccessToken, CalendarEvent, EventDateTime, InsertedEvent};
