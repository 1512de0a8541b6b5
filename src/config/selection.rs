//! Bounds and defaults for the year/month selectors.

pub struct SelectionConfig {
    /// First year offered by the year selector (inclusive)
    pub year_min: u16,
    /// Last year offered by the year selector (inclusive)
    pub year_max: u16,
    pub default_year: u16,
    pub default_month: &'static str,
}

pub const SELECTION: SelectionConfig = SelectionConfig {
    year_min: 2013,
    year_max: 2023,
    default_year: 2022,
    default_month: "05",
};
