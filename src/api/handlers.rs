//! Axum request handlers for the web UI.
use std::sync::{Arc, Weak};

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::api::routes::AppState;
use crate::error::{AppError, AppResult, SubmissionError};
use crate::flow::{Status, Ticket};
use crate::ui::{html, Screen};

#[derive(Debug, Deserialize)]
pub struct PromptForm {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub prompt: String,
    pub status: Status,
    pub image: Option<String>,
    pub loading: bool,
    pub error: Option<SubmissionError>,
    pub screen: Screen,
}

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let flow = state.session.read().await;
    Html(html::render_page(&Screen::from_flow(&flow)))
}

/// Take the form's text as the new prompt and start a submission.
///
/// The request runs on its own task; the session lock is only held to begin
/// and to settle.
pub async fn submit_prompt(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PromptForm>,
) -> Redirect {
    let ticket = {
        let mut flow = state.session.write().await;
        flow.on_text_change(form.value);
        flow.begin_submit()
    };

    if let Some(ticket) = ticket {
        let generator = Arc::clone(&state.generator);
        let session = Arc::downgrade(&state);
        let handle = tokio::spawn(async move {
            let prompt = ticket.prompt.clone();
            let pending = Unsettled { session, ticket: Some(ticket) };
            let outcome = generator.generate(&prompt).await;
            pending.settle(outcome).await;
        });
        state.track(handle);
    }

    Redirect::to("/")
}

/// Settles the session as interrupted if the request task panics or is
/// dropped before the generator returns.
struct Unsettled {
    session: Weak<AppState>,
    ticket: Option<Ticket>,
}

impl Unsettled {
    async fn settle(mut self, outcome: AppResult<String>) {
        if let Some(ticket) = self.ticket.take() {
            settle_session(self.session.clone(), ticket, outcome).await;
        }
    }
}

impl Drop for Unsettled {
    fn drop(&mut self) {
        let Some(ticket) = self.ticket.take() else {
            return;
        };
        tracing::warn!(submission = %ticket.id, "Request task ended before settlement");
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                runtime.spawn(settle_session(self.session.clone(), ticket, Err(AppError::Interrupted)));
            }
            Err(_) => tracing::debug!("No runtime left to settle interrupted submission"),
        }
    }
}

async fn settle_session(session: Weak<AppState>, ticket: Ticket, outcome: AppResult<String>) {
    match session.upgrade() {
        Some(state) => {
            state.session.write().await.settle(&ticket, outcome);
        }
        None => tracing::debug!(submission = %ticket.id, "Session gone before settlement"),
    }
}

pub async fn state(State(state): State<Arc<AppState>>) -> Json<SessionSnapshot> {
    let flow = state.session.read().await;
    Json(SessionSnapshot {
        prompt: flow.prompt().to_string(),
        status: flow.status().clone(),
        image: flow.image_reference().map(str::to_string),
        loading: flow.is_loading(),
        error: flow.error().cloned(),
        screen: Screen::from_flow(&flow),
    })
}
