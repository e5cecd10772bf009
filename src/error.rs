use serde::{Deserialize, Serialize};

/// Unified error type for Zone.ee API operations.
///
/// All variants are serializable for structured error reporting. HTTP 404
/// never appears here: the HTTP layer maps it to `Ok(None)` so that "no
/// records yet" flows through the success path (see the crate docs).
///
/// Every variant is fatal for the operation that produced it — the client
/// performs no retries and no partial rollback. The ACME orchestrator
/// driving the client decides what to do next.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ZoneError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API rejected the credentials (HTTP 401 or 403).
    InvalidCredentials {
        /// Original response body, if available.
        raw_message: Option<String>,
    },

    /// No suffix of the record name is a zone hosted by the account.
    ///
    /// Raised after the zone probe has exhausted every candidate suffix.
    ZoneNotFound {
        /// The record name that could not be placed in a zone.
        record_name: String,
    },

    /// The API answered with a non-success status other than 404.
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        raw_message: String,
    },

    /// Failed to parse the API response body.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },
}

impl ZoneError {
    /// Whether the error reflects expected behavior (bad input, missing
    /// resources) rather than a malfunction, for log leveling.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    /// **Keep this method in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. } | Self::ZoneNotFound { .. }
        )
    }
}

impl std::fmt::Display for ZoneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Invalid credentials: {msg}")
                } else {
                    write!(f, "Invalid credentials")
                }
            }
            Self::ZoneNotFound { record_name } => {
                write!(f, "No hosted zone found for '{record_name}'")
            }
            Self::ApiError {
                status,
                raw_message,
            } => {
                write!(f, "API error (HTTP {status}): {raw_message}")
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for ZoneError {}

/// Convenience type alias for `Result<T, ZoneError>`.
pub type Result<T> = std::result::Result<T, ZoneError>;
