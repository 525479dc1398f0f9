//! Department handlers: the root listing.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::DepartmentDto;
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `GET /` — List all departments.
///
/// Unpaginated and unfiltered: the department set is expected to be
/// small and static.
///
/// # Errors
///
/// Returns [`ApiError`] when the backing store is unavailable.
#[utoipa::path(
    get,
    path = "/",
    tag = "Departments",
    summary = "List all departments",
    description = "Returns every department as {id, name}, ordered by id ascending. No pagination: the department set is expected to be small and static.",
    responses(
        (status = 200, description = "Ordered department list", body = Vec<DepartmentDto>),
        (status = 503, description = "Backing store unavailable", body = ErrorResponse),
    )
)]
pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let departments = state.directory.list_departments().await?;
    let body: Vec<DepartmentDto> = departments.into_iter().map(DepartmentDto::from).collect();
    Ok(Json(body))
}

/// Department routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_departments))
}
