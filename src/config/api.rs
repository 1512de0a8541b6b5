//! Backend API location and endpoint paths.

/// Endpoint paths, relative to the configured origin.
pub struct Endpoints {
    /// Current spot price: `{ "price": number }`
    pub price: &'static str,
    /// Aggregate statistics, or `null`
    pub kpis: &'static str,
    /// Daily series for one month, queried with `year` and `month`
    pub historic: &'static str,
}

/// The Master API Configuration Struct
pub struct ApiConfig {
    /// Origin used when no `--api-url` is given
    pub default_base_url: &'static str,
    pub endpoints: Endpoints,
    /// Request timeout in seconds. `None` means requests may hang indefinitely.
    pub default_timeout_secs: Option<u64>,
}

pub const API: ApiConfig = ApiConfig {
    default_base_url: "http://localhost:8000",
    endpoints: Endpoints {
        price: "/bitcoin-price",
        kpis: "/bitcoin-kpis",
        historic: "/get-historic",
    },
    default_timeout_secs: None,
};

impl ApiConfig {
    /// Joins an origin and an endpoint path without doubling the slash.
    pub fn url(base_url: &str, path: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), path)
    }
}
