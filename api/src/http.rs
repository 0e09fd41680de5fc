// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with status-code classification.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// HTTP client for events API operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or HTTP client creation fails.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::Config("events API base URL is empty".to_string()));
        }

        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// Joins a path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Builds a request for the given path.
    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, url, "events API request");
        self.client.request(method, url)
    }

    /// Executes a request and maps error statuses.
    ///
    /// `resource` names what the request refers to; it is used for [`ApiError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns a non-success status code.
    pub async fn execute(&self, req: RequestBuilder, resource: &str) -> Result<Response, ApiError> {
        let resp = req.send().await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let text = resp
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response".to_string());
        let message = error_message(&text, status);
        tracing::debug!(%status, message, "events API error response");

        match status {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(resource.to_string())),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(ApiError::Rejected { status, message })
            }
            _ => Err(ApiError::Server { status, message }),
        }
    }
}

/// Picks a human-readable message from an error body.
///
/// JSON bodies with a `message` or `error` string win; otherwise the raw text, or the
/// status reason phrase when the body is empty.
fn error_message(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(s) = value.get(key).and_then(serde_json::Value::as_str) {
                return s.to_string();
            }
        }
    }

    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        body.to_string()
    }
}
