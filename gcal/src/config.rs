// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Google Calendar configuration.
///
/// The endpoint URLs default to Google's and are only overridden in tests.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct GoogleConfig {
    /// API key sent with every Calendar API call.
    pub api_key: String,
    /// OAuth client identifier.
    pub client_id: String,
    /// OAuth client secret. Desktop clients issued by Google carry one.
    #[serde(default)]
    pub client_secret: String,
    /// Target calendar.
    #[serde(default = "default_calendar_id")]
    pub calendar_id: String,
    /// IANA time zone the event wall-clock times are interpreted in.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    /// Local port receiving the OAuth redirect.
    #[serde(default = "default_redirect_port")]
    pub redirect_port: u16,
    /// OAuth consent endpoint.
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    /// OAuth token endpoint.
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// Calendar API v3 base URL.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl GoogleConfig {
    /// Creates a configuration with Google's endpoints and default settings.
    pub fn new(api_key: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client_id: client_id.into(),
            client_secret: String::new(),
            calendar_id: default_calendar_id(),
            time_zone: default_time_zone(),
            redirect_port: default_redirect_port(),
            auth_url: default_auth_url(),
            token_url: default_token_url(),
            api_base_url: default_api_base_url(),
        }
    }

    /// The loopback redirect URI registered for the OAuth client.
    pub fn redirect_uri(&self) -> String {
        format!("http://127.0.0.1:{}/callback", self.redirect_port)
    }
}

fn default_calendar_id() -> String {
    "primary".to_string()
}

fn default_time_zone() -> String {
    "America/Fortaleza".to_string()
}

const fn default_redirect_port() -> u16 {
    8085
}

fn default_auth_url() -> String {
    "https://accounts.google.com/o/oauth2/v2/auth".to_string()
}

fn default_token_url() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

fn default_api_base_url() -> String {
    "https://www.googleapis.com/calendar/v3".to_string()
}
