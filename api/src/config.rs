// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Remote events API configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiConfig {
    /// Base URL of the events API, e.g. `http://localhost:3333`.
    pub base_url: String,
    /// Request timeout in seconds. The HTTP client's default (none) applies when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ApiConfig {
    /// Creates a configuration for the given base URL with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

fn default_user_agent() -> String {
    concat!("evdesk-api/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}
