//! Shared handler helpers.

use axum::{
    http::{header, StatusCode},
    response::Response,
};
use serde::Serialize;

use figure_protocol::ExceptionBody;

/// Serialize a value as a 200 JSON response.
pub fn json_response<T: Serialize>(value: &T) -> Response {
    match serde_json::to_string(value) {
        Ok(json) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "application/json")
            .body(json.into())
            .unwrap(),
        Err(e) => {
            tracing::error!("Failed to serialize response: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ExceptionBody::internal_error("Failed to serialize response"),
            )
        }
    }
}

/// Build a JSON error response.
pub fn error_response(status: StatusCode, exc: ExceptionBody) -> Response {
    let json = serde_json::to_string(&exc).unwrap_or_default();
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(json.into())
        .unwrap()
}

/// Parse an optional numeric query parameter, falling back to a default.
///
/// A present-but-unparsable value is a user error surfaced in place of the
/// affected chart, not a crash.
pub fn parse_f64(param: &str, raw: Option<&str>, default: f64) -> Result<f64, Response> {
    match raw {
        None => Ok(default),
        Some(s) if s.trim().is_empty() => Ok(default),
        Some(s) => s.trim().parse::<f64>().map_err(|_| {
            error_response(
                StatusCode::BAD_REQUEST,
                ExceptionBody::bad_request(format!("Parameter '{}' is not a number: '{}'", param, s)),
            )
        }),
    }
}

/// Parse a required numeric query parameter. Must be present and finite.
pub fn require_f64(param: &str, raw: Option<&str>) -> Result<f64, Response> {
    let missing = || {
        error_response(
            StatusCode::BAD_REQUEST,
            ExceptionBody::bad_request(format!("Missing required parameter: {}", param)),
        )
    };

    match raw {
        None => Err(missing()),
        Some(s) if s.trim().is_empty() => Err(missing()),
        Some(s) => {
            let value: f64 = s.trim().parse().map_err(|_| {
                error_response(
                    StatusCode::BAD_REQUEST,
                    ExceptionBody::bad_request(format!(
                        "Parameter '{}' is not a number: '{}'",
                        param, s
                    )),
                )
            })?;
            if !value.is_finite() {
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    ExceptionBody::bad_request(format!(
                        "Parameter '{}' must be finite, got {}",
                        param, value
                    )),
                ));
            }
            Ok(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_f64_defaults_when_absent() {
        assert_eq!(parse_f64("zmin", None, -0.05).unwrap(), -0.05);
        assert_eq!(parse_f64("zmin", Some(""), -0.05).unwrap(), -0.05);
    }

    #[test]
    fn test_parse_f64_accepts_numbers() {
        assert_eq!(parse_f64("zmax", Some("0.1"), 0.0).unwrap(), 0.1);
        assert_eq!(parse_f64("zmax", Some(" -3 "), 0.0).unwrap(), -3.0);
    }

    #[test]
    fn test_parse_f64_rejects_garbage() {
        let resp = parse_f64("zmin", Some("abc"), 0.0).unwrap_err();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_require_f64_rejects_missing() {
        let resp = require_f64("lon", None).unwrap_err();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(require_f64("lon", Some("  ")).is_err());
    }

    #[test]
    fn test_require_f64_rejects_non_finite() {
        assert!(require_f64("lat", Some("NaN")).is_err());
        assert!(require_f64("lat", Some("inf")).is_err());
        assert_eq!(require_f64("lat", Some("4.0")).unwrap(), 4.0);
    }
}
