// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the remote events API (`/events` CRUD over JSON).

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
mod http;
mod types;

pub use crate::client::EventsClient;
pub use crate::config::ApiConfig;
pub use crate::error::ApiError;
pub use crate::types::{Confirmation, RemoteEvent, Saved};
pub use reqwest::StatusCode;
