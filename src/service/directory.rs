//! Directory query service.
//!
//! Translates a validated parameter set into a bounded, deterministic
//! result set for one entity type, or a single record by identifier.
//! Not-found semantics live here: a single-record miss is a 404-class
//! condition, distinct from an empty listing.

use crate::domain::{CallFilter, OperatorFilter, Page};
use crate::error::ApiError;
use crate::persistence::PgStore;
use crate::persistence::models::{Call, Department, Operator};

/// Read-only query service over departments, operators and calls.
///
/// Stateless apart from the store handle; requests are handled
/// independently and make no cross-request consistency guarantee. A
/// listing call and a subsequent lookup are not transactionally linked.
#[derive(Debug, Clone)]
pub struct DirectoryService {
    store: PgStore,
}

impl DirectoryService {
    /// Creates a new `DirectoryService`.
    #[must_use]
    pub fn new(store: PgStore) -> Self {
        Self { store }
    }

    /// Lists all departments ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on store failure.
    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        let departments = self.store.list_departments().await?;
        tracing::debug!(count = departments.len(), "listed departments");
        Ok(departments)
    }

    /// Lists one page of operators matching the filter, ordered by id.
    ///
    /// A filter combination matching no rows yields an empty page, never
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on store failure.
    pub async fn list_operators(
        &self,
        filter: &OperatorFilter,
        page: Page,
    ) -> Result<Vec<Operator>, ApiError> {
        let operators = self.store.list_operators(filter, page).await?;
        tracing::debug!(
            count = operators.len(),
            skip = page.skip(),
            limit = page.limit(),
            "listed operators"
        );
        Ok(operators)
    }

    /// Returns the operator with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no row matches, or another
    /// [`ApiError`] on store failure.
    pub async fn get_operator(&self, id: i32) -> Result<Operator, ApiError> {
        self.store
            .get_operator(id)
            .await?
            .ok_or(ApiError::NotFound {
                resource: "operator",
                id: i64::from(id),
            })
    }

    /// Lists one page of calls matching the filter, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on store failure.
    pub async fn list_calls(
        &self,
        filter: &CallFilter,
        page: Page,
    ) -> Result<Vec<Call>, ApiError> {
        let calls = self.store.list_calls(filter, page).await?;
        tracing::debug!(
            count = calls.len(),
            skip = page.skip(),
            limit = page.limit(),
            "listed calls"
        );
        Ok(calls)
    }

    /// Returns the call with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no row matches, or another
    /// [`ApiError`] on store failure.
    pub async fn get_call(&self, id: i64) -> Result<Call, ApiError> {
        self.store.get_call(id).await?.ok_or(ApiError::NotFound {
            resource: "call",
            id,
        })
    }
}
