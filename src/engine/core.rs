use std::sync::Arc;

use poll_promise::Promise;
use tokio::runtime::Handle;

use crate::data::DashboardApi;
use crate::domain::Selection;

use super::messages::{DashboardEvent, FetchCommand, FetchOutcome};
use super::state::DashboardState;
use super::worker;

struct PendingFetch {
    command: FetchCommand,
    promise: Promise<FetchOutcome>,
}

/// Owns the dashboard state and the fetches in flight for it.
///
/// All state changes happen on the caller's thread inside [`update`](Self::update),
/// [`mount`](Self::mount) and [`select`](Self::select); workers only produce events.
pub struct DashboardEngine {
    state: DashboardState,
    api: Arc<dyn DashboardApi>,
    runtime: Handle,
    in_flight: Vec<PendingFetch>,
    /// Total fetches dispatched since construction
    dispatched: usize,
}

impl DashboardEngine {
    pub fn new(api: Arc<dyn DashboardApi>, runtime: Handle, selection: Selection) -> Self {
        Self {
            state: DashboardState::new(selection),
            api,
            runtime,
            in_flight: Vec::new(),
            dispatched: 0,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Issues the initial price, KPI and historic fetches. Later calls do nothing.
    pub fn mount(&mut self) {
        self.apply(DashboardEvent::Mounted);
    }

    /// Moves the historic window. Fetches only when the selection actually changed.
    pub fn select(&mut self, selection: Selection) {
        self.apply(DashboardEvent::SelectionChanged(selection));
    }

    /// THE FRAME TICK.
    /// Applies every finished fetch in dispatch order.
    /// Returns TRUE while fetches are still in flight, so the UI keeps polling.
    pub fn update(&mut self) -> bool {
        let pending = std::mem::take(&mut self.in_flight);
        let mut finished = Vec::new();

        for fetch in pending {
            match fetch.promise.try_take() {
                Ok(outcome) => finished.push(outcome),
                Err(promise) => self.in_flight.push(PendingFetch {
                    command: fetch.command,
                    promise,
                }),
            }
        }

        for outcome in finished {
            log::debug!(
                "Fetch {:?} finished in {}ms",
                outcome.command,
                outcome.elapsed.as_millis()
            );
            self.apply(outcome.event);
        }

        !self.in_flight.is_empty()
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    pub fn dispatched_count(&self) -> usize {
        self.dispatched
    }

    fn apply(&mut self, event: DashboardEvent) {
        for command in self.state.apply(event) {
            self.dispatch(command);
        }
    }

    fn dispatch(&mut self, command: FetchCommand) {
        log::info!("Requesting {:?} from {}", command, self.api.name());
        let promise = worker::spawn_fetch(self.api.clone(), self.runtime.clone(), command);
        self.in_flight.push(PendingFetch { command, promise });
        self.dispatched += 1;
    }
}
