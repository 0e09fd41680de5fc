// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use reqwest::StatusCode;

/// Events API client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport failure: connection refused, DNS, TLS, timeout.
    #[error("Network error: {0}")]
    Network(String),

    /// The server reported that the referenced resource does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The server rejected the payload (400 / 422).
    #[error("Rejected by server ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: StatusCode,
        /// Message extracted from the response body.
        message: String,
    },

    /// Any other non-success status.
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: StatusCode,
        /// Message extracted from the response body.
        message: String,
    },

    /// The body could not be decoded into the expected shape.
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::InvalidResponse(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidResponse(e.to_string())
    }
}
