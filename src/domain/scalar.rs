use serde::Deserialize;

/// A JSON leaf the statistics backend may send either as a number or as text.
///
/// The backend rounds in Python and then stringifies, so the same field can
/// arrive as `16000.5` or `"16000.5"` depending on the endpoint version.
/// Anything else (booleans, arrays, objects) lands in `Other` so one odd row
/// does not fail the whole response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl Scalar {
    /// The value as it appeared on the wire, without reformatting.
    pub fn into_text(self) -> String {
        match self {
            Scalar::Number(n) => n.to_string(),
            Scalar::Text(s) => s,
            Scalar::Other(v) => v.to_string(),
        }
    }

    /// Lenient numeric reading. Text that is not a number gives `NaN`.
    pub fn to_f64(&self) -> f64 {
        match self {
            Scalar::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Scalar::Text(s) => parse_lenient(s),
            Scalar::Other(_) => f64::NAN,
        }
    }
}

/// Parses surrounding-whitespace-tolerant decimal text, `NaN` on failure.
pub fn parse_lenient(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}
