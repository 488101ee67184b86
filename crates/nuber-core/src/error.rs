//! Request failure taxonomy.
//!
//! Validation failures live in [`crate::phone`]. Everything here comes back
//! from a collaborator service. A cancelled identity-provider flow is not an
//! error and has no variant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categories of service failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestErrorKind {
    /// The server answered and reported a logical failure.
    ExternalRequestFailed,
    /// The request never produced a usable answer (network, timeout, HTTP status).
    TransportFailure,
    /// The session token could not be handed to session storage.
    SessionEstablishFailed,
}

impl fmt::Display for RequestErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestErrorKind::ExternalRequestFailed => write!(f, "external_request_failed"),
            RequestErrorKind::TransportFailure => write!(f, "transport_failure"),
            RequestErrorKind::SessionEstablishFailed => write!(f, "session_establish_failed"),
        }
    }
}

/// Failure of a collaborator request, with a message fit for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestError {
    pub kind: RequestErrorKind,
    pub message: String,
    /// Whether the transport considers the failure worth retrying.
    #[serde(default)]
    pub retryable: bool,
}

impl RequestError {
    pub fn new(kind: RequestErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable: false,
        }
    }

    /// Server-reported failure.
    pub fn external(message: impl Into<String>) -> Self {
        Self::new(RequestErrorKind::ExternalRequestFailed, message)
    }

    /// Network or infrastructure failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(RequestErrorKind::TransportFailure, message)
    }

    /// Network failure that may succeed on another attempt.
    pub fn retryable_transport(message: impl Into<String>) -> Self {
        Self {
            retryable: true,
            ..Self::transport(message)
        }
    }

    pub fn session_establish(message: impl Into<String>) -> Self {
        Self::new(RequestErrorKind::SessionEstablishFailed, message)
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RequestError {}

/// Result type for collaborator requests.
pub type RequestResult<T> = std::result::Result<T, RequestError>;
