use std::sync::Arc;
use std::time::Instant;

use poll_promise::Promise;
use tokio::runtime::Handle;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::DashboardApi;

use super::messages::{DashboardEvent, FetchCommand, FetchOutcome};

/// Runs one fetch against `api` and packages the result as a state event.
pub async fn run_fetch(api: &dyn DashboardApi, command: FetchCommand) -> FetchOutcome {
    let start = Instant::now();

    let result = match command {
        FetchCommand::Price => api.fetch_price().await.map(DashboardEvent::PriceReceived),
        FetchCommand::Kpis => api.fetch_kpis().await.map(DashboardEvent::KpisReceived),
        FetchCommand::Historic(selection) => api
            .fetch_historic(selection)
            .await
            .map(|series| DashboardEvent::HistoricReceived {
                requested: selection,
                series,
            }),
    };

    let event = result.unwrap_or_else(|error| DashboardEvent::FetchFailed { command, error });
    let elapsed = start.elapsed();

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_fetch_timings {
        log::info!("[fetch] {:?} via {} in {}ms", command, api.name(), elapsed.as_millis());
    }

    FetchOutcome {
        command,
        event,
        elapsed,
    }
}

/// Spawns `command` on its own thread, driving the async client on `runtime`.
/// The UI polls the returned promise once per frame.
pub fn spawn_fetch(
    api: Arc<dyn DashboardApi>,
    runtime: Handle,
    command: FetchCommand,
) -> Promise<FetchOutcome> {
    let thread_name = format!("fetch_{:?}", command.kind()).to_lowercase();
    Promise::spawn_thread(thread_name, move || {
        runtime.block_on(run_fetch(api.as_ref(), command))
    })
}
