use serde::Deserialize;

use super::scalar::{Scalar, parse_lenient};

/// One statistic as the backend sent it.
///
/// `text` is kept verbatim for display; `numeric` is its reading as a number
/// when the text is numeric.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Scalar")]
pub struct KpiValue {
    text: String,
    numeric: Option<f64>,
}

impl KpiValue {
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let parsed = parse_lenient(&text);
        Self {
            numeric: parsed.is_finite().then_some(parsed),
            text,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.numeric
    }
}

impl From<Scalar> for KpiValue {
    fn from(scalar: Scalar) -> Self {
        KpiValue::from_text(scalar.into_text())
    }
}

/// Aggregate statistics over the stored price history.
///
/// Every field stays `None` until the backend supplies it. A field that is
/// missing or `null` in the response also stays `None`, so "not known yet" is
/// never confused with a real zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct KpiSummary {
    #[serde(default)]
    pub avg_price: Option<KpiValue>,
    #[serde(default)]
    pub max_price: Option<KpiValue>,
    #[serde(default)]
    pub min_price: Option<KpiValue>,
    #[serde(default)]
    pub volatility: Option<KpiValue>,
    /// Secondary maximum (the 2022 window on the reference backend)
    #[serde(default)]
    pub max_two: Option<KpiValue>,
    /// Secondary minimum (the 2022 window on the reference backend)
    #[serde(default)]
    pub min_two: Option<KpiValue>,
}

impl KpiSummary {
    /// Both secondary bounds, once both are known. Zero counts as known.
    pub fn secondary_range(&self) -> Option<(&KpiValue, &KpiValue)> {
        match (&self.min_two, &self.max_two) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_deserialize_from_numbers_and_strings() {
        let kpis: KpiSummary = serde_json::from_str(
            r#"{"avg_price": 16000.5, "max_price": "69000", "min_price": 3200,
                "volatility": "1500.25", "max_two": 25000, "min_two": "18000"}"#,
        )
        .unwrap();

        assert_eq!(kpis.avg_price.as_ref().map(KpiValue::as_str), Some("16000.5"));
        assert_eq!(kpis.max_price.as_ref().and_then(KpiValue::as_f64), Some(69000.0));
        assert_eq!(kpis.volatility.as_ref().map(KpiValue::as_str), Some("1500.25"));
        assert_eq!(kpis.min_two.as_ref().and_then(KpiValue::as_f64), Some(18000.0));
    }

    #[test]
    fn missing_and_null_fields_stay_unset() {
        let kpis: KpiSummary =
            serde_json::from_str(r#"{"avg_price": null, "max_price": 1}"#).unwrap();
        assert!(kpis.avg_price.is_none());
        assert!(kpis.min_price.is_none());
        assert!(kpis.max_price.is_some());
    }

    #[test]
    fn zero_is_a_present_secondary_bound() {
        let kpis = KpiSummary {
            min_two: Some(KpiValue::from_text("0")),
            max_two: Some(KpiValue::from_text("25000")),
            ..Default::default()
        };
        let (min, max) = kpis.secondary_range().unwrap();
        assert_eq!(min.as_f64(), Some(0.0));
        assert_eq!(max.as_f64(), Some(25000.0));
    }

    #[test]
    fn one_secondary_bound_is_not_a_range() {
        let kpis = KpiSummary {
            max_two: Some(KpiValue::from_text("25000")),
            ..Default::default()
        };
        assert!(kpis.secondary_range().is_none());
    }

    #[test]
    fn non_numeric_text_is_kept_but_has_no_reading() {
        let value = KpiValue::from_text("nan-ish");
        assert_eq!(value.as_str(), "nan-ish");
        assert_eq!(value.as_f64(), None);
    }
}
