// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Google Calendar errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum GcalError {
    /// Sign-in did not complete: denied consent, state mismatch, failed code exchange.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Transport failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The Calendar API answered with an error status.
    #[error("Calendar API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the response body.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local I/O failure while waiting for the OAuth redirect.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for GcalError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::InvalidResponse(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}

impl From<url::ParseError> for GcalError {
    fn from(e: url::ParseError) -> Self {
        Self::Config(format!("invalid URL: {e}"))
    }
}
