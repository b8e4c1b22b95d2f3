//! Shared session state and router setup for the web UI.
use std::sync::{Arc, Mutex};

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::flow::PromptFlow;
use crate::genimg::ImageGenerator;

/// One browser session. Dropping it aborts a pending request.
pub struct AppState {
    pub session: RwLock<PromptFlow>,
    pub generator: Arc<dyn ImageGenerator>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl AppState {
    pub fn new(generator: Arc<dyn ImageGenerator>) -> Self {
        AppState {
            session: RwLock::new(PromptFlow::new()),
            generator,
            pending: Mutex::new(None),
        }
    }

    /// Remember the task running the current request.
    pub(crate) fn track(&self, handle: JoinHandle<()>) {
        let mut slot = match self.pending.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = Some(handle);
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        let handle = match self.pending.get_mut() {
            Ok(slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(handle) = handle {
            if !handle.is_finished() {
                tracing::info!("Session torn down, aborting pending image request");
                handle.abort();
            }
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/prompt", post(handlers::submit_prompt))
        .route("/state", get(handlers::state))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
