// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the remote events API.

use std::sync::Arc;

use reqwest::Method;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::{Confirmation, RemoteEvent, Saved, SavedBody};

/// Client issuing CRUD requests against the remote events API.
///
/// Every operation is a single request: no retry, no caching.
///
/// # Example
///
/// ```ignore
/// use evdesk_api::{ApiConfig, EventsClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EventsClient::new(ApiConfig::new("http://localhost:3333"))?;
/// for event in client.list_events().await? {
///     println!("{}: {}", event.id.unwrap_or_default(), event.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EventsClient {
    http: Arc<HttpClient>,
}

impl EventsClient {
    /// Creates a new events client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or HTTP client initialization fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Fetches every event in server order.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn list_events(&self) -> Result<Vec<RemoteEvent>, ApiError> {
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, "events"), "events")
            .await?;
        Ok(resp.json().await?)
    }

    /// Fetches one event.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the server reports 404.
    pub async fn get_event(&self, id: u64) -> Result<RemoteEvent, ApiError> {
        let path = event_path(id);
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &path), &path)
            .await?;
        Ok(resp.json().await?)
    }

    /// Creates an event. Any `id` on the payload is dropped; the server assigns one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when the server refuses the payload.
    pub async fn create_event(&self, event: &RemoteEvent) -> Result<Saved<RemoteEvent>, ApiError> {
        let payload = RemoteEvent {
            id: None,
            ..event.clone()
        };
        let resp = self
            .http
            .execute(
                self.http.build_request(Method::POST, "events").json(&payload),
                "events",
            )
            .await?;
        let body: SavedBody = resp.json().await?;
        Ok(body.into())
    }

    /// Replaces every field of an existing event.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] when the event carries no id, otherwise the same
    /// failure modes as [`EventsClient::create_event`] plus [`ApiError::NotFound`].
    pub async fn update_event(&self, event: &RemoteEvent) -> Result<Saved<RemoteEvent>, ApiError> {
        let id = event
            .id
            .ok_or_else(|| ApiError::Config("cannot update an event without id".to_string()))?;
        let path = event_path(id);
        let resp = self
            .http
            .execute(
                self.http.build_request(Method::PUT, &path).json(event),
                &path,
            )
            .await?;
        let body: SavedBody = resp.json().await?;
        Ok(body.into())
    }

    /// Deletes an event.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the server reports 404.
    pub async fn delete_event(&self, id: u64) -> Result<Confirmation, ApiError> {
        let path = event_path(id);
        let resp = self
            .http
            .execute(self.http.build_request(Method::DELETE, &path), &path)
            .await?;

        // 204 or an empty 200 carries no message
        let text = resp.text().await?;
        if text.trim().is_empty() {
            return Ok(Confirmation::default());
        }
        Ok(serde_json::from_str(&text).unwrap_or_else(|_| Confirmation {
            message: Some(text.trim().to_string()),
        }))
    }
}

fn event_path(id: u64) -> String {
    format!("events/{id}")
}
