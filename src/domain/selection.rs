use std::fmt;
use std::str::FromStr;

use strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

use crate::config::SELECTION;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Year {0} is outside the supported range {min}-{max}", min = SELECTION.year_min, max = SELECTION.year_max)]
    YearOutOfRange(u16),
    #[error("Not a two-digit month code (01-12): {0:?}")]
    InvalidMonth(String),
}

/// Calendar month, serialized as the two-digit code the backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, AsRefStr, EnumString, IntoStaticStr)]
pub enum Month {
    #[strum(serialize = "01")]
    January,
    #[strum(serialize = "02")]
    February,
    #[strum(serialize = "03")]
    March,
    #[strum(serialize = "04")]
    April,
    #[strum(serialize = "05")]
    May,
    #[strum(serialize = "06")]
    June,
    #[strum(serialize = "07")]
    July,
    #[strum(serialize = "08")]
    August,
    #[strum(serialize = "09")]
    September,
    #[strum(serialize = "10")]
    October,
    #[strum(serialize = "11")]
    November,
    #[strum(serialize = "12")]
    December,
}

impl Month {
    /// Two-digit code, "01".."12".
    pub fn code(self) -> &'static str {
        self.into()
    }

    pub fn parse_code(code: &str) -> Result<Self, SelectionError> {
        Month::from_str(code).map_err(|_| SelectionError::InvalidMonth(code.to_string()))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// A year inside the fixed selector range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Year(u16);

impl Year {
    pub fn new(value: u16) -> Result<Self, SelectionError> {
        if (SELECTION.year_min..=SELECTION.year_max).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SelectionError::YearOutOfRange(value))
        }
    }

    /// Every selectable year, oldest first.
    pub fn all() -> impl Iterator<Item = Year> {
        (SELECTION.year_min..=SELECTION.year_max).map(Year)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// The (year, month) window the historic chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub year: Year,
    pub month: Month,
}

impl Selection {
    pub fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    pub fn with_year(self, year: Year) -> Self {
        Self { year, ..self }
    }

    pub fn with_month(self, month: Month) -> Self {
        Self { month, ..self }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            year: Year(SELECTION.default_year),
            month: Month::parse_code(SELECTION.default_month).unwrap_or(Month::May),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}
