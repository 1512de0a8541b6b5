use thiserror::Error;

/// Everything that can go wrong fetching from the statistics backend.
///
/// The dashboard treats every variant the same way (log and keep the previous
/// state); the split exists so the log line says what actually happened.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("Malformed response from {endpoint}: {message}")]
    Malformed { endpoint: String, message: String },

    /// The backend answered 200 with an `{"error": ...}` object.
    #[error("Backend error at {endpoint}: {message}")]
    Upstream { endpoint: String, message: String },
}

impl ApiError {
    pub fn malformed(endpoint: &str, message: impl Into<String>) -> Self {
        ApiError::Malformed {
            endpoint: endpoint.to_string(),
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if let (Some(status), Some(url)) = (e.status(), e.url()) {
            return ApiError::Status {
                endpoint: url.path().to_string(),
                status: status.as_u16(),
            };
        }
        ApiError::Network(e.to_string())
    }
}
