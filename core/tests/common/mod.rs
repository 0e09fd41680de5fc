// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides an in-memory repository, a recording calendar bridge and
//! test data factories.

mod fakes;
mod fixtures;

#[allow(unused_imports)]
pub use fakes::{Call, InMemoryRepository, Op, RecordingBridge};
#[allow(unused_imports)]
pub use fixtures::{standup_draft, test_event, today};
