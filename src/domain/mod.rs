// Domain types and value objects
pub mod historic;
pub mod kpi;
pub mod scalar;
pub mod selection;

// Re-export commonly used types
pub use historic::{HistoricPoint, HistoricSeries};
pub use kpi::{KpiSummary, KpiValue};
pub use selection::{Month, Selection, SelectionError, Year};
