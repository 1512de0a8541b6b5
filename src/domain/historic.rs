use serde::Deserialize;

use super::scalar::Scalar;

/// One day of the monthly series.
#[derive(Debug, Clone)]
pub struct HistoricPoint {
    pub year: String,
    pub month: String,
    pub day: String,
    /// `NaN` when the backend sent something that is not a number.
    pub price: f64,
}

// Prices compare bitwise so a NaN gap equals itself.
impl PartialEq for HistoricPoint {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year
            && self.month == other.month
            && self.day == other.day
            && self.price.to_bits() == other.price.to_bits()
    }
}

/// Wire shape of a historic row. Any field may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHistoricPoint {
    #[serde(default)]
    price: Option<Scalar>,
    #[serde(default)]
    year: Option<Scalar>,
    #[serde(default)]
    month: Option<Scalar>,
    #[serde(default)]
    day: Option<Scalar>,
}

impl From<RawHistoricPoint> for HistoricPoint {
    fn from(raw: RawHistoricPoint) -> Self {
        let text = |s: Option<Scalar>| s.map(Scalar::into_text).unwrap_or_default();
        Self {
            price: raw.price.as_ref().map_or(f64::NAN, Scalar::to_f64),
            year: text(raw.year),
            month: text(raw.month),
            day: text(raw.day),
        }
    }
}

/// A month of daily prices in the order the backend returned them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricSeries {
    points: Vec<HistoricPoint>,
}

impl HistoricSeries {
    pub fn new(points: Vec<HistoricPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[HistoricPoint] {
        &self.points
    }

}

impl FromIterator<RawHistoricPoint> for HistoricSeries {
    fn from_iter<I: IntoIterator<Item = RawHistoricPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(HistoricPoint::from).collect())
    }
}
