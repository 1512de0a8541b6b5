//! Response body parsing for the three dashboard endpoints.
//!
//! Kept separate from the HTTP client so the body rules can be exercised
//! without a server.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::data::errors::ApiError;
use crate::domain::historic::{HistoricSeries, RawHistoricPoint};
use crate::domain::kpi::KpiSummary;

#[derive(Deserialize)]
struct PriceResponse {
    price: f64,
}

/// Parses `{ "price": number }`.
pub fn parse_price(endpoint: &str, body: &str) -> Result<f64, ApiError> {
    let value = parse_json(endpoint, body)?;
    let resp: PriceResponse = from_value(endpoint, value)?;
    Ok(resp.price)
}

/// Parses the statistics object. A `null` body means "nothing to show yet".
pub fn parse_kpis(endpoint: &str, body: &str) -> Result<Option<KpiSummary>, ApiError> {
    let value = parse_json(endpoint, body)?;
    if value.is_null() {
        return Ok(None);
    }
    from_value(endpoint, value).map(Some)
}

/// Parses the monthly series. A `null` body means "nothing to show".
pub fn parse_historic(endpoint: &str, body: &str) -> Result<Option<HistoricSeries>, ApiError> {
    let value = parse_json(endpoint, body)?;
    let rows: Option<Vec<RawHistoricPoint>> = from_value(endpoint, value)?;
    Ok(rows.map(|rows| rows.into_iter().collect()))
}

/// Decodes JSON and turns the backend's in-band `{"error": ...}` into an `Err`.
fn parse_json(endpoint: &str, body: &str) -> Result<Value, ApiError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ApiError::malformed(endpoint, format!("invalid JSON: {e}")))?;

    if let Some(message) = value.get("error") {
        let message = match message {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(ApiError::Upstream {
            endpoint: endpoint.to_string(),
            message,
        });
    }

    Ok(value)
}

fn from_value<T: DeserializeOwned>(endpoint: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::malformed(endpoint, e.to_string()))
}
