//! Fact screen feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Tagged request state (Loading / Success / Failure)
//! - `intent.rs` - User and fetch events (Refresh, Loaded, Failed)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view.rs` - Which single element the body shows

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::FactIntent;
pub use reducer::FactReducer;
pub use state::FactState;
pub use view::{button_enabled, FactView, LOADING_MESSAGE};
