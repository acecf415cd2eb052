use crate::fact::GENERIC_ERROR_MESSAGE;

use super::state::FactState;

pub const LOADING_MESSAGE: &str = "Loading...";

/// The one element shown in the body region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactView {
    Loading,
    Error,
    Fact(String),
}

impl FactView {
    pub fn from_state(state: &FactState) -> Self {
        match state {
            FactState::Loading { .. } => FactView::Loading,
            FactState::Failure { .. } => FactView::Error,
            FactState::Success { fact } => FactView::Fact(fact.as_str().to_string()),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            FactView::Loading => LOADING_MESSAGE,
            FactView::Error => GENERIC_ERROR_MESSAGE,
            FactView::Fact(text) => text,
        }
    }
}

/// The refresh button is disabled exactly while a request is outstanding.
pub fn button_enabled(state: &FactState) -> bool {
    !state.is_loading()
}
