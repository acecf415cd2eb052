//! Intents for the fact screen.

use crate::fact::{Fact, FetchError};
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the fact reducer.
#[derive(Debug)]
pub enum FactIntent {
    /// User asked for a new fact. Ignored while a request is outstanding.
    Refresh,

    /// The current request produced a fact.
    Loaded { fact: Fact },

    /// The current request failed.
    Failed { error: FetchError },
}

impl Intent for FactIntent {}
