//! Error response bodies.
//!
//! User-input errors are returned as a small JSON body the page shows in
//! place of the affected chart.

use serde::{Deserialize, Serialize};

/// A JSON exception body for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExceptionBody {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable description shown to the user.
    pub description: String,
}

impl ExceptionBody {
    pub fn new(code: &str, description: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            description: description.into(),
        }
    }

    /// A 400-class user input error.
    pub fn bad_request(description: impl Into<String>) -> Self {
        Self::new("InvalidParameterValue", description)
    }

    /// A 404-class lookup failure.
    pub fn not_found(description: impl Into<String>) -> Self {
        Self::new("NotFound", description)
    }

    /// A 500-class internal error.
    pub fn internal_error(description: impl Into<String>) -> Self {
        Self::new("InternalError", description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exception_body_serialization() {
        let body = ExceptionBody::bad_request("Colormap not found: Sunset");
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"code\":\"InvalidParameterValue\""));
        assert!(json.contains("Colormap not found: Sunset"));
    }
}
