//! Error types for fetching detection results.

use std::fmt;
use thiserror::Error;

/// Errors that can occur while fetching a new plate.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, refused, reset, timeout).
    #[error("Network error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status.
    #[error("Error: {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    /// The body did not match the expected JSON shape.
    #[error("Failed to parse plate response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification of a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Transport,
    HttpStatus,
    Decode,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetchErrorKind::Transport => "transport",
            FetchErrorKind::HttpStatus => "http_status",
            FetchErrorKind::Decode => "decode",
        };
        f.write_str(name)
    }
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport { .. } => FetchErrorKind::Transport,
            FetchError::HttpStatus { .. } => FetchErrorKind::HttpStatus,
            FetchError::Decode { .. } => FetchErrorKind::Decode,
        }
    }
}

/// Cloneable record of a failed fetch, kept in UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FetchErrorKind,
    /// Human-readable message shown in the error banner.
    pub message: String,
}

impl FetchFailure {
    pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<&FetchError> for FetchFailure {
    fn from(err: &FetchError) -> Self {
        let mut message = err.to_string();
        // reqwest's Display stops at the top level; the useful part
        // ("Connection refused", "dns error") sits at the bottom of the chain.
        if let FetchError::Transport { source } = err {
            if let Some(cause) = root_cause(source) {
                if !message.contains(&cause) {
                    message = format!("{message}: {cause}");
                }
            }
        }
        Self::new(err.kind(), message)
    }
}

/// Text of the innermost error below `err`, if it has any source at all.
fn root_cause(err: &(dyn std::error::Error + 'static)) -> Option<String> {
    let mut current = err.source()?;
    while let Some(next) = current.source() {
        current = next;
    }
    Some(current.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_includes_code_and_reason() {
        let err = FetchError::HttpStatus {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Error: 503 Service Unavailable");
        assert_eq!(err.kind(), FetchErrorKind::HttpStatus);
    }

    #[test]
    fn decode_failure_keeps_kind_and_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FetchError::Decode { source };
        let failure = FetchFailure::from(&err);
        assert_eq!(failure.kind, FetchErrorKind::Decode);
        assert!(failure.message.starts_with("Failed to parse plate response"));
    }

    #[derive(Debug, Error)]
    #[error("outer")]
    struct Outer(#[source] Middle);

    #[derive(Debug, Error)]
    #[error("middle")]
    struct Middle(#[source] std::io::Error);

    #[test]
    fn root_cause_walks_to_innermost_error() {
        let err = Outer(Middle(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        )));
        assert_eq!(root_cause(&err).as_deref(), Some("Connection refused"));
    }

    #[test]
    fn root_cause_is_none_without_source() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "plain");
        assert_eq!(root_cause(&err), None);
    }

    #[test]
    fn kind_display_is_snake_case() {
        assert_eq!(FetchErrorKind::HttpStatus.to_string(), "http_status");
    }
}
