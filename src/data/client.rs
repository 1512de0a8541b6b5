use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::{API, ApiConfig};
use crate::data::errors::ApiError;
use crate::data::wire;
use crate::domain::{HistoricSeries, KpiSummary, Selection};

/// The three reads the dashboard makes against its statistics backend.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Human-readable name for log lines.
    fn name(&self) -> &str;

    /// Current spot price in USD.
    async fn fetch_price(&self) -> Result<f64, ApiError>;

    /// Aggregate statistics; `Ok(None)` when the backend has none.
    async fn fetch_kpis(&self) -> Result<Option<KpiSummary>, ApiError>;

    /// Daily prices for one month; `Ok(None)` when the backend returns `null`.
    async fn fetch_historic(
        &self,
        selection: Selection,
    ) -> Result<Option<HistoricSeries>, ApiError>;
}

/// `DashboardApi` over plain HTTP GETs.
pub struct HttpDashboardApi {
    client: Client,
    base_url: String,
}

impl HttpDashboardApi {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    pub fn historic_url(&self, selection: Selection) -> String {
        format!(
            "{}?year={}&month={}",
            ApiConfig::url(&self.base_url, API.endpoints.historic),
            selection.year,
            selection.month.code()
        )
    }

    /// GETs `url` and returns the body of a 2xx response.
    async fn get_body(&self, endpoint: &str, url: &str) -> Result<String, ApiError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    fn name(&self) -> &str {
        &self.base_url
    }

    async fn fetch_price(&self) -> Result<f64, ApiError> {
        let endpoint = API.endpoints.price;
        let url = ApiConfig::url(&self.base_url, endpoint);
        let body = self.get_body(endpoint, &url).await?;
        wire::parse_price(endpoint, &body)
    }

    async fn fetch_kpis(&self) -> Result<Option<KpiSummary>, ApiError> {
        let endpoint = API.endpoints.kpis;
        let url = ApiConfig::url(&self.base_url, endpoint);
        let body = self.get_body(endpoint, &url).await?;
        wire::parse_kpis(endpoint, &body)
    }

    async fn fetch_historic(
        &self,
        selection: Selection,
    ) -> Result<Option<HistoricSeries>, ApiError> {
        let endpoint = API.endpoints.historic;
        let url = self.historic_url(selection);
        let body = self.get_body(endpoint, &url).await?;
        wire::parse_historic(endpoint, &body)
    }
}
