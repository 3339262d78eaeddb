//! # wecredit_core
//!
//! Core chat form logic for the WeCredit Chat Bot.
//!
//! # Public API
//!
//! - [`controller::ChatFormController`] — owns the form state and the submit cycle
//! - [`backend::ChatBackend`] — seam over the outbound chat request
//! - [`backend::HttpChatBackend`] — `POST /chat` over reqwest
//! - [`config::ChatConfig`] — endpoint and timeout resolution
//! - [`view::FormView`] — render-ready projection of the form state

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod view;

pub use backend::{ChatBackend, ChatReply, HttpChatBackend};
pub use config::ChatConfig;
pub use controller::{ChatFormController, ChatState, Phase, SubmitOutcome};
pub use error::ChatError;
pub use view::FormView;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_matches_workspace_package() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
        assert!(version().split('.').count() >= 3);
    }
}
