//! Chat form controller.
//!
//! Owns the four pieces of form state (query, response, error message,
//! loading flag) and drives one submit cycle at a time:
//! idle → loading → settled. State changes are published on a
//! [`tokio::sync::watch`] channel so front ends can re-render on change.

use std::sync::Arc;

use tokio::sync::watch;

use crate::backend::ChatBackend;

/// Shown when the query is blank.
pub const VALIDATION_MESSAGE: &str = "Please enter a question.";

/// Shown for every request failure; the cause is only logged.
pub const REQUEST_FAILURE_MESSAGE: &str = "Failed to fetch response.";

/// Used when a successful reply carries no answer.
pub const FALLBACK_RESPONSE: &str = "No response received.";

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl Phase {
    pub fn is_settled(self) -> bool {
        matches!(self, Phase::Success | Phase::Error)
    }
}

/// Snapshot of the form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    pub query: String,
    pub response: String,
    pub error_message: String,
    pub loading: bool,
    pub phase: Phase,
}

/// Result of one call to [`ChatFormController::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank query; no request was made.
    Rejected,
    /// Another submit was already in flight; nothing changed.
    Ignored,
    /// The backend answered.
    Answered,
    /// The request failed.
    Failed,
}

/// Form controller bound to one [`ChatBackend`].
pub struct ChatFormController {
    backend: Arc<dyn ChatBackend>,
    state: watch::Sender<ChatState>,
}

impl ChatFormController {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        let (state, _) = watch::channel(ChatState::default());
        Self { backend, state }
    }

    /// Current state.
    pub fn snapshot(&self) -> ChatState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ChatState> {
        self.state.subscribe()
    }

    /// Bind new input text. Editing a settled form returns it to idle.
    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.send_modify(|state| {
            state.query = query;
            if state.phase.is_settled() {
                state.phase = Phase::Idle;
            }
        });
    }

    /// Bind `query` and submit it.
    pub async fn submit_query(&self, query: impl Into<String>) -> SubmitOutcome {
        self.set_query(query);
        self.submit().await
    }

    /// Validate and submit the bound query.
    ///
    /// A submit made while another is in flight is ignored. The loading
    /// flag is reset on every exit path, including cancellation of the
    /// returned future.
    pub async fn submit(&self) -> SubmitOutcome {
        let mut outcome = None;
        let mut query = String::new();

        // Check and transition under one lock so racing submits cannot both start.
        self.state.send_if_modified(|state| {
            if state.loading {
                outcome = Some(SubmitOutcome::Ignored);
                return false;
            }

            if state.query.trim().is_empty() {
                state.error_message = VALIDATION_MESSAGE.to_string();
                state.response.clear();
                state.phase = Phase::Idle;
                outcome = Some(SubmitOutcome::Rejected);
                return true;
            }

            state.loading = true;
            state.phase = Phase::Loading;
            state.response.clear();
            state.error_message.clear();
            query = state.query.clone();
            true
        });

        if let Some(outcome) = outcome {
            if outcome == SubmitOutcome::Ignored {
                log::debug!("submit ignored: a request is already in flight");
            }
            return outcome;
        }

        let _loading = LoadingGuard { state: &self.state };

        match self.backend.send(&query).await {
            Ok(reply) => {
                let response = reply
                    .response
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| FALLBACK_RESPONSE.to_string());
                self.state.send_modify(|state| {
                    state.response = response;
                    state.phase = Phase::Success;
                });
                SubmitOutcome::Answered
            }
            Err(e) => {
                log::error!("chat request failed: {e}");
                self.state.send_modify(|state| {
                    state.error_message = REQUEST_FAILURE_MESSAGE.to_string();
                    state.phase = Phase::Error;
                });
                SubmitOutcome::Failed
            }
        }
    }
}

/// Clears the loading flag when the submit cycle ends, however it ends.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<ChatState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|state| {
            state.loading = false;
            // Cancelled before settling.
            if state.phase == Phase::Loading {
                state.phase = Phase::Idle;
            }
        });
    }
}
