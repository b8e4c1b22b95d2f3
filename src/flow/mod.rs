//! Prompt submission flow: prompt text, last image, and submission status.
//!
//! The flow is a plain value. `begin_submit` and `settle` are the two state
//! transitions around the outbound request, so a caller that shares the flow
//! behind a lock never has to hold it while the request is pending.
pub mod state;

use crate::error::{AppError, AppResult, SubmissionError};
use crate::genimg::ImageGenerator;

pub use state::{Status, Ticket};

/// Result of asking the flow to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Prompt was empty; nothing happened.
    Skipped,
    /// A request was already in flight; nothing happened.
    Busy,
    /// The request ran and the flow now reflects its outcome.
    Settled,
}

#[derive(Debug, Clone, Default)]
pub struct PromptFlow {
    prompt: String,
    image: Option<String>,
    status: Status,
    in_flight: Option<Ticket>,
}

impl PromptFlow {
    pub fn new() -> Self {
        PromptFlow::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Last successfully generated image; survives later failures.
    pub fn image_reference(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error(&self) -> Option<&SubmissionError> {
        self.status.error()
    }

    pub fn on_text_change(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
    }

    pub fn can_submit(&self) -> bool {
        !self.prompt.is_empty() && self.in_flight.is_none()
    }

    /// Enter `Loading` and hand out a ticket, unless the prompt is empty or a
    /// request is already pending.
    pub fn begin_submit(&mut self) -> Option<Ticket> {
        if self.prompt.is_empty() {
            return None;
        }
        if let Some(pending) = &self.in_flight {
            tracing::debug!(submission = %pending.id, "Submission already in flight, ignoring");
            return None;
        }
        let ticket = Ticket::new(self.prompt.clone());
        tracing::info!(submission = %ticket.id, "Submitting prompt");
        self.status = Status::Loading;
        self.in_flight = Some(ticket.clone());
        Some(ticket)
    }

    /// Apply the outcome of `ticket`'s request. Returns false for a ticket
    /// that is not the pending one.
    pub fn settle(&mut self, ticket: &Ticket, outcome: AppResult<String>) -> bool {
        if self.in_flight.as_ref().map(|t| t.id) != Some(ticket.id) {
            tracing::warn!(submission = %ticket.id, "Ignoring settlement of unknown submission");
            return false;
        }
        self.in_flight = None;
        self.status = match outcome {
            Ok(url) => {
                tracing::info!(submission = %ticket.id, image = %url, "Submission succeeded");
                self.image = Some(url.clone());
                Status::Success(url)
            }
            Err(err) => {
                let err = SubmissionError::from(err);
                tracing::warn!(submission = %ticket.id, kind = ?err.kind, "Submission failed: {}", err);
                Status::Failure(err)
            }
        };
        true
    }

    /// Run one full submission against `generator`.
    pub async fn submit<G>(&mut self, generator: &G) -> SubmitOutcome
    where
        G: ImageGenerator + ?Sized,
    {
        if self.prompt.is_empty() {
            return SubmitOutcome::Skipped;
        }
        let Some(ticket) = self.begin_submit() else {
            return SubmitOutcome::Busy;
        };
        let prompt = ticket.prompt.clone();
        let mut pending = Pending { flow: self, ticket: Some(ticket) };
        let outcome = generator.generate(&prompt).await;
        pending.settle(outcome);
        SubmitOutcome::Settled
    }
}

/// Settles the flow as interrupted if the `submit` future is dropped before
/// the request returns.
struct Pending<'a> {
    flow: &'a mut PromptFlow,
    ticket: Option<Ticket>,
}

impl Pending<'_> {
    fn settle(&mut self, outcome: AppResult<String>) {
        if let Some(ticket) = self.ticket.take() {
            self.flow.settle(&ticket, outcome);
        }
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        if self.ticket.is_some() {
            tracing::warn!("Submission dropped before its request settled");
            self.settle(Err(AppError::Interrupted));
        }
    }
}
