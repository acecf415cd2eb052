//! State for the fact screen.

use crate::fact::{Fact, FetchError};
use crate::ui::mvi::UiState;

/// Status of the current or most recent fetch.
///
/// The last good fact survives a refresh or failure as `previous`, but only
/// `Success` ever shows a fact.
#[derive(Debug, Clone, PartialEq)]
pub enum FactState {
    /// Request outstanding.
    Loading { previous: Option<Fact> },

    /// Most recent request returned this fact.
    Success { fact: Fact },

    /// Most recent request failed.
    Failure {
        error: FetchError,
        previous: Option<Fact>,
    },
}

impl Default for FactState {
    /// Mount state: the first fetch starts immediately.
    fn default() -> Self {
        FactState::Loading { previous: None }
    }
}

impl UiState for FactState {}

impl FactState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Fact to display, present only in `Success`.
    pub fn visible_fact(&self) -> Option<&Fact> {
        match self {
            Self::Success { fact } => Some(fact),
            _ => None,
        }
    }

    /// Most recent fact held in memory, shown or not.
    pub fn last_fact(&self) -> Option<&Fact> {
        match self {
            Self::Success { fact } => Some(fact),
            Self::Loading { previous } | Self::Failure { previous, .. } => previous.as_ref(),
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failure { error, .. } => Some(error),
            _ => None,
        }
    }
}
