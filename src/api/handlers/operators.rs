//! Operator handlers: paginated listing and lookup by id.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{OperatorDto, OperatorListParams};
use crate::api::extract::ValidatedQuery;
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `GET /operators` — List operators with pagination and an optional
/// `active` filter.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for out-of-range parameters, or a
/// store-level [`ApiError`] otherwise.
#[utoipa::path(
    get,
    path = "/operators",
    tag = "Operators",
    summary = "List operators",
    description = "Returns the [skip, skip + limit) window of operators ordered by id ascending. Filters combine with AND; a combination matching no rows yields an empty list.",
    params(OperatorListParams),
    responses(
        (status = 200, description = "Ordered operator page", body = Vec<OperatorDto>),
        (status = 422, description = "Invalid parameter", body = ErrorResponse),
        (status = 503, description = "Backing store unavailable", body = ErrorResponse),
    )
)]
pub async fn list_operators(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<OperatorListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let (filter, page) = params.into_query()?;
    let operators = state.directory.list_operators(&filter, page).await?;
    let body: Vec<OperatorDto> = operators.into_iter().map(OperatorDto::from).collect();
    Ok(Json(body))
}

/// `GET /operators/{id}` — Get one operator by id.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if no operator has that id.
#[utoipa::path(
    get,
    path = "/operators/{id}",
    tag = "Operators",
    summary = "Get operator by id",
    description = "Returns exactly one operator, or 404 when the id matches no row. A miss here is distinct from an empty listing.",
    params(
        ("id" = i32, Path, description = "Operator identifier"),
    ),
    responses(
        (status = 200, description = "The operator", body = OperatorDto),
        (status = 404, description = "Operator not found", body = ErrorResponse),
        (status = 503, description = "Backing store unavailable", body = ErrorResponse),
    )
)]
pub async fn get_operator(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let operator = state.directory.get_operator(id).await?;
    Ok(Json(OperatorDto::from(operator)))
}

/// Operator routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/operators", get(list_operators))
        .route("/operators/{id}", get(get_operator))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::api::test_util;

    async fn error_code(uri: &str) -> (StatusCode, Option<i64>) {
        let app = test_util::router();
        let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
            panic!("request build failed");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("router call failed");
        };
        let status = response.status();
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let Ok(value) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
            panic!("body is not JSON");
        };
        let code = value.pointer("/error/code").and_then(serde_json::Value::as_i64);
        (status, code)
    }

    #[tokio::test]
    async fn zero_limit_is_rejected_with_422() {
        let (status, code) = error_code("/operators?limit=0").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, Some(1001));
    }

    #[tokio::test]
    async fn oversized_limit_is_rejected_with_422() {
        let (status, code) = error_code("/operators?limit=1001").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, Some(1001));
    }

    #[tokio::test]
    async fn non_numeric_skip_is_rejected_with_422() {
        let (status, code) = error_code("/operators?skip=abc").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, Some(1001));
    }

    #[tokio::test]
    async fn non_boolean_active_is_rejected_with_422() {
        let (status, code) = error_code("/operators?active=maybe").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, Some(1001));
    }
}
