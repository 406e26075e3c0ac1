use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error codes returned by Visionboard endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MissingAuthorization,
    InvalidAuthorization,
    InvalidInitData,
    NotFound,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingAuthorization => "MISSING_AUTHORIZATION",
            Self::InvalidAuthorization => "INVALID_AUTHORIZATION",
            Self::InvalidInitData => "INVALID_INIT_DATA",
            Self::NotFound => "NOT_FOUND",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// initData verification failures.
///
/// These are for server-side logs only. Every variant collapses to
/// [`ErrorCode::InvalidInitData`] before anything reaches the client, so an
/// attacker cannot tell a stale payload from a forged one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitDataError {
    #[error("initData is empty")]
    EmptyInput,

    #[error("initData could not be parsed: {0}")]
    ParseFailure(String),

    #[error("initData is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("initData expired ({age_secs}s old, limit {max_age_secs}s)")]
    Expired { age_secs: i64, max_age_secs: u64 },

    #[error("initData signature mismatch")]
    SignatureMismatch,
}

impl InitDataError {
    /// Short, stable label suitable for a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::ParseFailure(_) => "parse_failure",
            Self::MissingField(_) => "missing_field",
            Self::Expired { .. } => "expired",
            Self::SignatureMismatch => "signature_mismatch",
        }
    }

    /// The only code a client ever sees for a rejected credential.
    pub fn public_code(&self) -> ErrorCode {
        ErrorCode::InvalidInitData
    }
}
