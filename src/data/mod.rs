// Backend access: HTTP client, wire parsing, and error types
pub mod client;
pub mod errors;
pub mod wire;

// Re-export commonly used types
pub use client::{DashboardApi, HttpDashboardApi};
pub use errors::ApiError;
