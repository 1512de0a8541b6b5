// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use data::{ApiError, DashboardApi, HttpDashboardApi};
pub use domain::{Month, Selection, Year};
pub use engine::{DashboardEngine, DashboardState};
pub use ui::BitcoinDashboardApp;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use crate::config::{API, SELECTION};
use crate::domain::SelectionError;

// CLI argument parsing
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Origin of the statistics backend
    #[arg(long, default_value_t = API.default_base_url.to_string())]
    pub api_url: String,

    /// Initial year of the historic chart (2013-2023)
    #[arg(long, default_value_t = SELECTION.default_year, value_parser = clap::value_parser!(u16).range(i64::from(SELECTION.year_min)..=i64::from(SELECTION.year_max)))]
    pub year: u16,

    /// Initial month of the historic chart, as a two-digit code
    #[arg(long, default_value = SELECTION.default_month, value_parser = parse_month)]
    pub month: Month,

    /// Give up on a request after this many seconds (default: wait forever)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    pub fn initial_selection(&self) -> Result<Selection, SelectionError> {
        Ok(Selection::new(Year::new(self.year)?, self.month))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .or(API.default_timeout_secs)
            .map(Duration::from_secs)
    }
}

fn parse_month(s: &str) -> Result<Month, String> {
    Month::parse_code(s).map_err(|e| e.to_string())
}

/// Builds the engine for `cli` on top of `runtime`.
pub fn build_engine(cli: &Cli, runtime: tokio::runtime::Handle) -> anyhow::Result<DashboardEngine> {
    let selection = cli.initial_selection()?;
    let api = HttpDashboardApi::new(cli.api_url.clone(), cli.timeout())
        .context("Failed to build HTTP client")?;
    Ok(DashboardEngine::new(Arc::new(api), runtime, selection))
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext, engine: DashboardEngine) -> Box<dyn eframe::App> {
    Box::new(BitcoinDashboardApp::new(cc, engine))
}
