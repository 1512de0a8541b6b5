//! Configuration module for the dashboard.

pub mod api;
pub mod plot;
pub mod selection;

mod debug; // Private: files use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use api::{API, ApiConfig};
pub use plot::PLOT_CONFIG;
pub use selection::SELECTION;
