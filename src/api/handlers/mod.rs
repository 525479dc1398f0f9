//! REST endpoint handlers organized by resource.

pub mod calls;
pub mod departments;
pub mod operators;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(departments::routes())
        .merge(operators::routes())
        .merge(calls::routes())
}
