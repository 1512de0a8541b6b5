use crate::domain::{HistoricSeries, KpiSummary, Selection};

use super::messages::{DashboardEvent, FetchCommand};

/// Everything the dashboard displays.
///
/// Fields are only written by [`DashboardState::apply`]. Each fetcher owns a
/// disjoint slice of the state, so results can land in any order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// Spot price formatted to two decimals, `None` until the first success.
    pub current_price: Option<String>,
    pub kpis: KpiSummary,
    /// `None` until the first non-null historic response.
    pub historic: Option<HistoricSeries>,
    pub selection: Selection,
    mounted: bool,
}

impl DashboardState {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            ..Default::default()
        }
    }

    /// Applies one event and returns the fetches it calls for.
    pub fn apply(&mut self, event: DashboardEvent) -> Vec<FetchCommand> {
        match event {
            DashboardEvent::Mounted => {
                if self.mounted {
                    return Vec::new();
                }
                self.mounted = true;
                vec![
                    FetchCommand::Price,
                    FetchCommand::Kpis,
                    FetchCommand::Historic(self.selection),
                ]
            }
            DashboardEvent::PriceReceived(price) => {
                self.current_price = Some(format!("{price:.2}"));
                Vec::new()
            }
            DashboardEvent::KpisReceived(Some(kpis)) => {
                self.kpis = kpis;
                Vec::new()
            }
            DashboardEvent::KpisReceived(None) => Vec::new(),
            DashboardEvent::HistoricReceived { requested, series } => {
                if requested != self.selection {
                    log::debug!(
                        "Discarding historic data for {requested}; selection is now {}",
                        self.selection
                    );
                    return Vec::new();
                }
                if let Some(series) = series {
                    self.historic = Some(series);
                }
                Vec::new()
            }
            DashboardEvent::SelectionChanged(selection) => {
                if selection == self.selection {
                    return Vec::new();
                }
                self.selection = selection;
                if self.mounted {
                    vec![FetchCommand::Historic(selection)]
                } else {
                    // The mount fetch will pick up the new selection
                    Vec::new()
                }
            }
            DashboardEvent::FetchFailed { command, error } => {
                log::error!("Fetch {:?} failed: {}", command, error);
                Vec::new()
            }
        }
    }
}
