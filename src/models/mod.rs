// View models: pure projections of dashboard state that the UI draws.
// Nothing here touches egui, so every layout rule is testable headless.

pub mod dashboard_view;

// Re-export key types for convenience
pub use dashboard_view::{BarRange, DashboardView, KpiField, KpiLine, LineSeries};
