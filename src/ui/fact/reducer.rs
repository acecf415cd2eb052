//! Reducer for the fact screen.

use crate::ui::mvi::Reducer;

use super::intent::FactIntent;
use super::state::FactState;

/// Pure state transitions. Spawning the fetch and logging the outcome are
/// done by the caller around the dispatch.
pub struct FactReducer;

impl Reducer for FactReducer {
    type State = FactState;
    type Intent = FactIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FactIntent::Refresh => match state {
                FactState::Loading { .. } => state,
                FactState::Success { fact } => FactState::Loading {
                    previous: Some(fact),
                },
                FactState::Failure { previous, .. } => FactState::Loading { previous },
            },

            FactIntent::Loaded { fact } => FactState::Success { fact },

            FactIntent::Failed { error } => {
                let previous = state.last_fact().cloned();
                FactState::Failure { error, previous }
            }
        }
    }
}
