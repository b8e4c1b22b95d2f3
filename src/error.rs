//! Common error type and the failure taxonomy shown to users.
use serde::Serialize;
use thiserror::Error;

/// Message used for the protocol failure (success status, unusable body).
pub const UNEXPECTED_RESPONSE: &str = "Unexpected server response";
/// Message used when a failure carries no text of its own.
pub const GENERIC_FAILURE: &str = "An unexpected error occurred";

#[derive(Error, Debug)]
pub enum AppError {
    /// Non-success status from the image-generation endpoint.
    #[error("{reason}")]
    GenImg { status: u16, reason: String },

    #[error("{}", UNEXPECTED_RESPONSE)]
    UnexpectedResponse,

    #[error("{0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The request never settled: its future was dropped or panicked.
    #[error("{}", GENERIC_FAILURE)]
    Interrupted,
}

pub type AppResult<T> = Result<T, AppError>;

/// What went wrong with a submission, independent of its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Transport,
    Protocol,
    Unknown,
}

impl AppError {
    pub fn kind(&self) -> FailureKind {
        match self {
            AppError::GenImg { .. } => FailureKind::Transport,
            AppError::UnexpectedResponse => FailureKind::Protocol,
            AppError::HttpClient(_) | AppError::Config(_) | AppError::Interrupted => FailureKind::Unknown,
        }
    }
}

/// A failed submission as stored in the flow and rendered in the banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionError {
    pub kind: FailureKind,
    pub message: String,
}

impl SubmissionError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        };
        SubmissionError { kind, message }
    }
}

impl From<AppError> for SubmissionError {
    fn from(err: AppError) -> Self {
        SubmissionError::new(err.kind(), err.to_string())
    }
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failure_uses_reason_phrase() {
        let err = AppError::GenImg { status: 500, reason: "Internal Server Error".into() };
        let sub = SubmissionError::from(err);
        assert_eq!(sub.kind, FailureKind::Transport);
        assert_eq!(sub.message, "Internal Server Error");
    }

    #[test]
    fn protocol_failure_has_fixed_message() {
        let sub = SubmissionError::from(AppError::UnexpectedResponse);
        assert_eq!(sub.kind, FailureKind::Protocol);
        assert_eq!(sub.message, UNEXPECTED_RESPONSE);
    }

    #[test]
    fn empty_message_falls_back_to_generic() {
        let err = AppError::GenImg { status: 599, reason: String::new() };
        let sub = SubmissionError::from(err);
        assert_eq!(sub.kind, FailureKind::Transport);
        assert_eq!(sub.message, GENERIC_FAILURE);

        let sub = SubmissionError::new(FailureKind::Unknown, "  ");
        assert_eq!(sub.message, GENERIC_FAILURE);
    }

    #[test]
    fn config_errors_are_unknown() {
        assert_eq!(AppError::Config("bad".into()).kind(), FailureKind::Unknown);
    }

    #[test]
    fn interrupted_request_is_unknown_with_generic_message() {
        let sub = SubmissionError::from(AppError::Interrupted);
        assert_eq!(sub.kind, FailureKind::Unknown);
        assert_eq!(sub.message, GENERIC_FAILURE);
    }
}
