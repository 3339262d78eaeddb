//! Render-ready projection of the form state.

use crate::controller::ChatState;

pub const TITLE: &str = "WeCredit Chat Bot";
pub const PLACEHOLDER: &str = "Enter your question here...";
pub const SEARCH_LABEL: &str = "Search";
pub const SEARCHING_LABEL: &str = "Searching...";

/// What a front end should draw for a given [`ChatState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub query: String,
    pub input_enabled: bool,
    pub button_enabled: bool,
    pub button_label: &'static str,
    pub error: Option<String>,
    pub response: Option<String>,
}

impl From<&ChatState> for FormView {
    fn from(state: &ChatState) -> Self {
        let non_empty = |text: &str| (!text.is_empty()).then(|| text.to_string());

        Self {
            title: TITLE,
            placeholder: PLACEHOLDER,
            query: state.query.clone(),
            input_enabled: !state.loading,
            button_enabled: !state.loading,
            button_label: if state.loading {
                SEARCHING_LABEL
            } else {
                SEARCH_LABEL
            },
            error: non_empty(&state.error_message),
            response: non_empty(&state.response),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Phase;

    #[test]
    fn idle_form_is_interactive_and_empty() {
        let view = FormView::from(&ChatState::default());
        assert!(view.input_enabled);
        assert!(view.button_enabled);
        assert_eq!(view.button_label, SEARCH_LABEL);
        assert_eq!(view.error, None);
        assert_eq!(view.response, None);
    }

    #[test]
    fn loading_form_is_disabled() {
        let state = ChatState {
            query: "hi".into(),
            loading: true,
            phase: Phase::Loading,
            ..Default::default()
        };
        let view = FormView::from(&state);
        assert!(!view.input_enabled);
        assert!(!view.button_enabled);
        assert_eq!(view.button_label, SEARCHING_LABEL);
    }

    #[test]
    fn settled_text_is_surfaced() {
        let state = ChatState {
            response: "Hello".into(),
            phase: Phase::Success,
            ..Default::default()
        };
        assert_eq!(FormView::from(&state).response.as_deref(), Some("Hello"));

        let state = ChatState {
            error_message: "Failed to fetch response.".into(),
            phase: Phase::Error,
            ..Default::default()
        };
        assert_eq!(
            FormView::from(&state).error.as_deref(),
            Some("Failed to fetch response.")
        );
    }
}
