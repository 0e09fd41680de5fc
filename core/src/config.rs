// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evdesk_api::ApiConfig;
use evdesk_gcal::GoogleConfig;

use crate::Error;

/// The name of the evdesk application.
pub const APP_NAME: &str = "evdesk";

/// Configuration for the evdesk application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Remote events API.
    pub api: ApiConfig,

    /// Google Calendar credentials. Only needed to push events to the calendar.
    #[serde(default)]
    pub google: Option<GoogleConfig>,
}

impl Config {
    /// Configuration for the events API at `base_url`, without calendar credentials.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig::new(base_url),
            google: None,
        }
    }

    /// The Google Calendar settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the `[google]` section is missing.
    pub fn google(&self) -> Result<&GoogleConfig, Error> {
        self.google.as_ref().ok_or_else(|| {
            Error::Config(
                "Google Calendar is not configured, add a [google] section with api_key and client_id"
                    .to_string(),
            )
        })
    }
}
