// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use reqwest::StatusCode;
use tokio::net::TcpListener;
use url::Url;

use crate::config::GoogleConfig;
use crate::error::GcalError;
use crate::oauth::{consent_url, exchange_code, wait_for_callback};
use crate::types::{AccessToken, CalendarEvent, InsertedEvent};

/// Google Calendar client.
///
/// Holds no session: each sign-in yields a fresh token that is used for one insertion.
#[derive(Debug, Clone)]
pub struct CalendarClient {
    http: reqwest::Client,
    config: GoogleConfig,
}

/// A sign-in waiting for the browser to come back on the loopback redirect.
#[derive(Debug)]
pub struct PendingSignIn {
    url: Url,
    state: String,
    listener: TcpListener,
}

impl PendingSignIn {
    /// The consent page the user signs in on.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl CalendarClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key or client id is missing, or HTTP client creation fails.
    pub fn new(config: GoogleConfig) -> Result<Self, GcalError> {
        if config.api_key.trim().is_empty() {
            return Err(GcalError::Config("Google API key is empty".to_string()));
        }
        if config.client_id.trim().is_empty() {
            return Err(GcalError::Config("Google client id is empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("evdesk-gcal/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &GoogleConfig {
        &self.config
    }

    /// Runs the interactive sign-in: opens the consent page in the browser, hands its URL
    /// to `notice` so the caller can show it, then waits for the loopback redirect and
    /// exchanges the code for a token.
    ///
    /// # Errors
    ///
    /// Returns [`GcalError::Auth`] when sign-in is denied or the exchange fails.
    pub async fn sign_in(&self, notice: impl FnOnce(&Url) + Send) -> Result<AccessToken, GcalError> {
        let pending = self.start_sign_in().await?;
        tracing::info!(url = %pending.url, "opening Google sign-in page");
        if let Err(e) = open::that(pending.url.as_str()) {
            tracing::debug!(error = %e, "could not open a browser");
        }
        notice(&pending.url);
        self.finish_sign_in(pending).await
    }

    /// Listens on the redirect port and builds the consent page URL with a fresh `state`.
    ///
    /// # Errors
    ///
    /// Returns [`GcalError::Auth`] when the redirect port cannot be bound.
    pub async fn start_sign_in(&self) -> Result<PendingSignIn, GcalError> {
        let state = uuid::Uuid::new_v4().simple().to_string();
        let url = consent_url(&self.config, &state)?;

        let listener = TcpListener::bind(("127.0.0.1", self.config.redirect_port))
            .await
            .map_err(|e| {
                GcalError::Auth(format!(
                    "cannot listen on port {} for the sign-in redirect: {e}",
                    self.config.redirect_port
                ))
            })?;

        Ok(PendingSignIn {
            url,
            state,
            listener,
        })
    }

    /// Waits for the browser redirect of `pending` and exchanges its code for a token.
    ///
    /// # Errors
    ///
    /// Returns [`GcalError::Auth`] when sign-in is denied or the exchange fails.
    pub async fn finish_sign_in(&self, pending: PendingSignIn) -> Result<AccessToken, GcalError> {
        let code = wait_for_callback(&pending.listener, &pending.state).await?;
        tracing::debug!("received authorization code, exchanging for a token");
        exchange_code(&self.http, &self.config, &code).await
    }

    /// Inserts one event into the configured calendar.
    ///
    /// # Errors
    ///
    /// Returns [`GcalError::Auth`] when the token is refused and [`GcalError::Api`] for any
    /// other error status.
    pub async fn insert_event(
        &self,
        token: &AccessToken,
        event: &CalendarEvent,
    ) -> Result<InsertedEvent, GcalError> {
        let url = self.events_url()?;
        tracing::debug!(%url, summary = %event.summary, "inserting calendar event");

        let resp = self
            .http
            .post(url)
            .bearer_auth(&token.access_token)
            .json(event)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json().await?);
        }

        let text = resp.text().await.unwrap_or_default();
        let message = api_error_message(&text);
        match status {
            StatusCode::UNAUTHORIZED => Err(GcalError::Auth(message)),
            _ => Err(GcalError::Api {
                status: status.as_u16(),
                message,
            }),
        }
    }

    fn events_url(&self) -> Result<Url, GcalError> {
        let mut url = Url::parse(&self.config.api_base_url)?;
        url.path_segments_mut()
            .map_err(|()| GcalError::Config("Calendar API base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push("calendars")
            .push(&self.config.calendar_id)
            .push("events");
        url.query_pairs_mut()
            .append_pair("key", &self.config.api_key);
        Ok(url)
    }
}

/// Google wraps errors as `{ "error": { "code": 403, "message": "..." } }`.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(serde_json::Value::as_str)
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_url_escapes_calendar_id() {
        let mut config = GoogleConfig::new("k3y", "client");
        config.calendar_id = "team@group.calendar.google.com".to_string();
        let client = CalendarClient::new(config).unwrap();

        let url = client.events_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/calendar/v3/calendars/team@group.calendar.google.com/events?key=k3y"
        );
    }

    #[test]
    fn missing_credentials_are_config_errors() {
        assert!(matches!(
            CalendarClient::new(GoogleConfig::new("", "client")),
            Err(GcalError::Config(_))
        ));
        assert!(matches!(
            CalendarClient::new(GoogleConfig::new("key", " ")),
            Err(GcalError::Config(_))
        ));
    }

    #[test]
    fn api_error_message_reads_google_envelope() {
        let body = r#"{"error":{"code":403,"message":"Calendar usage limits exceeded."}}"#;
        assert_eq!(api_error_message(body), "Calendar usage limits exceeded.");
        assert_eq!(api_error_message("plain"), "plain");
    }
}
