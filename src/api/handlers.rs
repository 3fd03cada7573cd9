//! HTTP request handlers.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::Uri,
    Json,
};

use crate::api::types::*;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Welcome page listing the available endpoints.
///
/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message and endpoint directory", body = HomeResponse)
    ),
    tag = "meta"
)]
pub async fn home(State(state): State<AppState>) -> Json<HomeResponse> {
    let endpoints = BTreeMap::from([
        ("/".to_string(), "Welcome page".to_string()),
        ("/info".to_string(), "Application information".to_string()),
        ("/health".to_string(), "Health check".to_string()),
        (
            "/calc/{a}/{b}".to_string(),
            "Calculator (adds two integers)".to_string(),
        ),
    ]);

    Json(HomeResponse {
        message: format!("Welcome to {}!", state.meta.name),
        endpoints,
    })
}

/// Application metadata.
///
/// GET /info
#[utoipa::path(
    get,
    path = "/info",
    responses(
        (status = 200, description = "Application metadata", body = InfoResponse)
    ),
    tag = "meta"
)]
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        app_name: state.meta.name.to_string(),
        version: state.meta.version.to_string(),
        description: state.meta.description.to_string(),
        author: state.meta.author.to_string(),
    })
}

/// Liveness probe for orchestration and monitoring.
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.meta.name.to_string(),
        version: state.meta.version.to_string(),
    })
}

/// Add two integers taken from the path.
///
/// GET /calc/{a}/{b}
///
/// Segments are extracted as raw strings: a segment that does not parse as
/// an i64 means the route did not match, which is reported as 404 rather
/// than 400.
#[utoipa::path(
    get,
    path = "/calc/{a}/{b}",
    params(
        ("a" = i64, Path, description = "First addend"),
        ("b" = i64, Path, description = "Second addend")
    ),
    responses(
        (status = 200, description = "Sum of the two operands", body = CalcResponse),
        (status = 404, description = "Operand is not a valid integer")
    ),
    tag = "calc"
)]
pub async fn calc(Path((a, b)): Path<(String, String)>) -> ApiResult<Json<CalcResponse>> {
    let a: i64 = parse_operand(&a)?;
    let b: i64 = parse_operand(&b)?;

    tracing::debug!(a, b, "Computing addition");

    Ok(Json(CalcResponse {
        operation: "addition".to_string(),
        a,
        b,
        result: a + b,
    }))
}

/// Parse a path segment as an i64 operand.
fn parse_operand(segment: &str) -> ApiResult<i64> {
    segment
        .parse()
        .map_err(|_| ApiError::NotFound(format!("No route matches operand '{segment}'")))
}

/// Fallback for any request that matches no route.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route matches {}", uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operand_accepts_signed_integers() {
        assert_eq!(parse_operand("2").unwrap(), 2);
        assert_eq!(parse_operand("-5").unwrap(), -5);
        assert_eq!(parse_operand("0").unwrap(), 0);
        assert_eq!(
            parse_operand("9223372036854775807").unwrap(),
            i64::MAX
        );
    }

    #[test]
    fn test_parse_operand_rejects_non_integers() {
        assert!(matches!(parse_operand("abc"), Err(ApiError::NotFound(_))));
        assert!(matches!(parse_operand("1.5"), Err(ApiError::NotFound(_))));
        assert!(matches!(parse_operand(""), Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_calc_adds_operands() {
        let Json(body) = calc(Path(("2".to_string(), "3".to_string())))
            .await
            .unwrap();
        assert_eq!(body.operation, "addition");
        assert_eq!(body.a, 2);
        assert_eq!(body.b, 3);
        assert_eq!(body.result, 5);
    }

    #[tokio::test]
    async fn test_calc_handles_negative_operands() {
        let Json(body) = calc(Path(("-5".to_string(), "10".to_string())))
            .await
            .unwrap();
        assert_eq!(body.result, 5);
    }
}
