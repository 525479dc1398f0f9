//! Call handlers: paginated listing and lookup by id.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CallDto, CallListParams};
use crate::api::extract::ValidatedQuery;
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `GET /calls` — List calls with pagination and optional
/// `operator_id` / `transcription_status` filters.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for out-of-range parameters, or a
/// store-level [`ApiError`] otherwise.
#[utoipa::path(
    get,
    path = "/calls",
    tag = "Calls",
    summary = "List calls",
    description = "Returns the [skip, skip + limit) window of calls ordered by id ascending. Filters combine with AND; an operator id or status code matching no rows yields an empty list, not an error.",
    params(CallListParams),
    responses(
        (status = 200, description = "Ordered call page", body = Vec<CallDto>),
        (status = 422, description = "Invalid parameter", body = ErrorResponse),
        (status = 503, description = "Backing store unavailable", body = ErrorResponse),
    )
)]
pub async fn list_calls(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<CallListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let (filter, page) = params.into_query()?;
    let calls = state.directory.list_calls(&filter, page).await?;
    let body: Vec<CallDto> = calls.into_iter().map(CallDto::from).collect();
    Ok(Json(body))
}

/// `GET /calls/{id}` — Get one call by id.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if no call has that id.
#[utoipa::path(
    get,
    path = "/calls/{id}",
    tag = "Calls",
    summary = "Get call by id",
    description = "Returns exactly one call record, or 404 when the id matches no row.",
    params(
        ("id" = i64, Path, description = "Call identifier"),
    ),
    responses(
        (status = 200, description = "The call record", body = CallDto),
        (status = 404, description = "Call not found", body = ErrorResponse),
        (status = 503, description = "Backing store unavailable", body = ErrorResponse),
    )
)]
pub async fn get_call(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let call = state.directory.get_call(id).await?;
    Ok(Json(CallDto::from(call)))
}

/// Call routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/calls", get(list_calls))
        .route("/calls/{id}", get(get_call))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::api::test_util;

    async fn status_for(uri: &str) -> StatusCode {
        let app = test_util::router();
        let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
            panic!("request build failed");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("router call failed");
        };
        response.status()
    }

    #[tokio::test]
    async fn oversized_limit_is_rejected_with_422() {
        assert_eq!(
            status_for("/calls?limit=5000").await,
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn negative_skip_is_rejected_with_422() {
        assert_eq!(
            status_for("/calls?skip=-1").await,
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn non_numeric_operator_id_is_rejected_with_422() {
        assert_eq!(
            status_for("/calls?operator_id=xyz").await,
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
