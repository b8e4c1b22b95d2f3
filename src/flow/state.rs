//! Submission status and the ticket that identifies an in-flight request.
use serde::Serialize;
use uuid::Uuid;

use crate::error::SubmissionError;

/// Where the current submission stands. Loading and failure cannot coexist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success(String),
    Failure(SubmissionError),
}

impl Status {
    pub fn is_loading(&self) -> bool {
        matches!(self, Status::Loading)
    }

    pub fn error(&self) -> Option<&SubmissionError> {
        match self {
            Status::Failure(err) => Some(err),
            _ => None,
        }
    }
}

/// Handle for one submission, carrying the prompt as it was at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: Uuid,
    pub prompt: String,
}

impl Ticket {
    pub(crate) fn new(prompt: String) -> Self {
        Ticket { id: Uuid::new_v4(), prompt }
    }
}
