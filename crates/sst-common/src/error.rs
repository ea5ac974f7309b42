//! Error types shared across the dashboard services.

use thiserror::Error;

/// Result type alias using DashboardError.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Primary error type for dashboard operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    // === User input errors ===
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Colormap not found: {0}")]
    ColormapNotFound(String),

    // === Data errors ===
    #[error("Failed to read data: {0}")]
    DataReadError(String),

    #[error("Degenerate grid: {0}")]
    DegenerateGrid(String),

    // === Infrastructure errors ===
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl DashboardError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            DashboardError::MissingParameter(_)
            | DashboardError::InvalidParameter { .. }
            | DashboardError::ColormapNotFound(_) => 400,

            _ => 500,
        }
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::InternalError(format!("JSON error: {}", err))
    }
}
