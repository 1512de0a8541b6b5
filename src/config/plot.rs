//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Fixed Y domain of the monthly line chart. Data outside it is clipped visually.
    pub line_y_domain: (f64, f64),
    /// Fixed Y domain of the min/max bar chart.
    pub bar_y_domain: (f64, f64),
    pub chart_width: f32,
    pub chart_height: f32,
    pub line_color: Color32,
    pub line_width: f32,
    pub bar_min_color: Color32,
    pub bar_max_color: Color32,
    /// Width of each bar in x-axis units
    pub bar_width: f64,
    /// Category label under the bar pair
    pub bar_category_label: &'static str,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    line_y_domain: (28_300.0, 30_001.0),
    bar_y_domain: (0.0, 30_000.0),
    chart_width: 600.0,
    chart_height: 300.0,
    line_color: Color32::from_rgb(136, 132, 216), // Lavender
    line_width: 2.0,
    bar_min_color: Color32::from_rgb(130, 202, 157), // Mint
    bar_max_color: Color32::from_rgb(136, 132, 216), // Lavender
    bar_width: 0.35,
    bar_category_label: "Price Range",
};
