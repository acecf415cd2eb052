use crate::fact::{Fact, FetchError};
use crate::ui::fact::{button_enabled, FactIntent, FactReducer, FactState, FactView};
use crate::ui::mvi::Reducer;
use crate::ui::worker::FactWorker;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Display controller for the fact screen.
///
/// Owns the request state and is the only place it changes. Fetches are
/// started through the worker and their results come back through
/// `on_fetch_complete`, tagged with a generation so only the latest request
/// can land.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    fact: FactState,
    generation: u64,
    mounted: bool,
    worker: FactWorker,
}

impl App {
    pub fn new(worker: FactWorker) -> Self {
        Self {
            should_quit: false,
            size: None,
            fact: FactState::default(),
            generation: 0,
            mounted: false,
            worker,
        }
    }

    pub fn state(&self) -> &FactState {
        &self.fact
    }

    pub fn view(&self) -> FactView {
        FactView::from_state(&self.fact)
    }

    pub fn is_loading(&self) -> bool {
        self.fact.is_loading()
    }

    pub fn button_enabled(&self) -> bool {
        button_enabled(&self.fact)
    }

    /// Generation of the most recently started request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn transport_name(&self) -> &'static str {
        self.worker.client().transport_name()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// First render: enter Loading and start the initial fetch.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.dispatch(FactIntent::Refresh);
        self.start_fetch();
    }

    /// Teardown: abort the in-flight request and make any queued result stale.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.worker.cancel();
        self.generation += 1;
    }

    /// Handle the refresh button. Returns whether a request was issued.
    ///
    /// The button is disabled while Loading, so this is a no-op then.
    pub fn request_refresh(&mut self) -> bool {
        if !self.mounted || !self.button_enabled() {
            tracing::debug!("Refresh ignored while a request is outstanding");
            return false;
        }
        self.dispatch(FactIntent::Refresh);
        self.start_fetch();
        true
    }

    /// Apply a fetch outcome. Returns false if the result was stale and dropped.
    pub fn on_fetch_complete(&mut self, generation: u64, result: Result<Fact, FetchError>) -> bool {
        if !self.mounted || generation != self.generation || !self.fact.is_loading() {
            tracing::debug!(
                generation,
                current = self.generation,
                "Discarding stale fetch result"
            );
            return false;
        }

        match result {
            Ok(fact) => {
                tracing::info!("Set fact: {}", fact);
                self.dispatch(FactIntent::Loaded { fact });
            }
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    kind = error.error_type(),
                    "Failed fetching fact"
                );
                self.dispatch(FactIntent::Failed { error });
            }
        }
        true
    }

    fn start_fetch(&mut self) {
        self.generation += 1;
        self.worker.spawn(self.generation);
    }

    fn dispatch(&mut self, intent: FactIntent) {
        dispatch_mvi!(self, fact, FactReducer, intent);
    }
}
