// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evdesk_api::ApiError;
use evdesk_gcal::GcalError;

use crate::FieldErrors;

/// Errors surfaced by screens and the [`crate::Desk`] facade.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The form input failed the local rules.
    #[error("{0}")]
    Invalid(FieldErrors),

    /// The server rejected the payload.
    #[error("{0}")]
    Validation(String),

    /// The server could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// The server failed or answered with something unexpected.
    #[error("Server error: {0}")]
    Server(String),

    /// The event does not exist on the server.
    #[error("Event not found: {0}")]
    NotFound(String),

    /// Calendar sign-in failed or the token was refused.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// A required setting is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<FieldErrors> for Error {
    fn from(errors: FieldErrors) -> Self {
        Self::Invalid(errors)
    }
}

impl From<ApiError> for Error {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Network(m) => Self::Network(m),
            ApiError::NotFound(resource) => Self::NotFound(resource),
            ApiError::Rejected { message, .. } => Self::Validation(message),
            ApiError::Server { status, message } => Self::Server(format!("{message} ({status})")),
            ApiError::InvalidResponse(m) => Self::Server(format!("invalid response: {m}")),
            ApiError::Config(m) => Self::Config(m),
            other => Self::Server(other.to_string()),
        }
    }
}

impl From<GcalError> for Error {
    fn from(e: GcalError) -> Self {
        match e {
            GcalError::Auth(m) => Self::Auth(m),
            GcalError::Http(m) => Self::Network(m),
            GcalError::Api { status, message } => {
                Self::Server(format!("Google Calendar: {message} ({status})"))
            }
            GcalError::Config(m) => Self::Config(m),
            GcalError::Io(e) => Self::Io(e),
            other => Self::Server(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use evdesk_api::StatusCode;

    use super::*;

    #[test]
    fn api_errors_map_to_taxonomy() {
        let e: Error = ApiError::Rejected {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "name taken".to_string(),
        }
        .into();
        assert!(matches!(e, Error::Validation(ref m) if m == "name taken"));

        let e: Error = ApiError::NotFound("events/7".to_string()).into();
        assert!(matches!(e, Error::NotFound(ref m) if m == "events/7"));

        let e: Error = ApiError::Server {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(e.to_string(), "Server error: boom (500 Internal Server Error)");

        let e: Error = ApiError::InvalidResponse("eof".to_string()).into();
        assert!(matches!(e, Error::Server(_)));
    }

    #[test]
    fn calendar_errors_map_to_taxonomy() {
        let e: Error = GcalError::Auth("access_denied".to_string()).into();
        assert_eq!(e.to_string(), "Authentication failed: access_denied");

        let e: Error = GcalError::Http("refused".to_string()).into();
        assert!(matches!(e, Error::Network(_)));

        let e: Error = GcalError::Api {
            status: 403,
            message: "Rate Limit Exceeded".to_string(),
        }
        .into();
        assert!(matches!(e, Error::Server(ref m) if m.contains("Rate Limit Exceeded")));
    }
}
