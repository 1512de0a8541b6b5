use std::time::Duration;

use crate::data::ApiError;
use crate::domain::{HistoricSeries, KpiSummary, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKind {
    Price,
    Kpis,
    Historic,
}

/// A request the state machine wants sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchCommand {
    Price,
    Kpis,
    /// Tagged with the selection active when the request was issued.
    Historic(Selection),
}

impl FetchCommand {
    pub fn kind(&self) -> FetchKind {
        match self {
            FetchCommand::Price => FetchKind::Price,
            FetchCommand::Kpis => FetchKind::Kpis,
            FetchCommand::Historic(_) => FetchKind::Historic,
        }
    }
}

/// Every transition of the dashboard state.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// The view came up. Issues the initial fetches.
    Mounted,
    PriceReceived(f64),
    KpisReceived(Option<KpiSummary>),
    HistoricReceived {
        requested: Selection,
        series: Option<HistoricSeries>,
    },
    SelectionChanged(Selection),
    FetchFailed {
        command: FetchCommand,
        error: ApiError,
    },
}

/// The result returned by a fetch worker
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub command: FetchCommand,
    pub event: DashboardEvent,
    pub elapsed: Duration,
}
