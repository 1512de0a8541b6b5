/// Every user-facing string in the window.
pub struct UiText {
    pub window_title: &'static str,
    pub dashboard_title: &'static str,
    pub current_price: &'static str,
    pub average_price: &'static str,
    pub max_price: &'static str,
    pub min_price: &'static str,
    pub volatility: &'static str,
    pub currency_suffix: &'static str,
    pub line_chart_heading: &'static str,
    pub line_legend: &'static str,
    pub bar_chart_heading: &'static str,
    pub bar_min_legend: &'static str,
    pub bar_max_legend: &'static str,
    pub year_label: &'static str,
    pub month_label: &'static str,
    pub status_selection: &'static str,
    pub status_in_flight: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "Bitcoin Dashboard",
    dashboard_title: "Bitcoin Dashboard",
    current_price: "Current Price",
    average_price: "Overall Average Price",
    max_price: "Historic Maximum Price",
    min_price: "Historic Minimum Price",
    volatility: "Overall Volatility",
    currency_suffix: "$",
    line_chart_heading: "Average Bitcoin price",
    line_legend: "price",
    bar_chart_heading: "Maximum and Minimum Price (2022)",
    bar_min_legend: "min",
    bar_max_legend: "max",
    year_label: "Year:",
    month_label: "Month:",
    status_selection: "Showing",
    status_in_flight: "Requests in flight",
};
