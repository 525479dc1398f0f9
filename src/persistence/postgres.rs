//! Read-only PostgreSQL queries for the directory entities.
//!
//! Every listing is ordered by primary identifier ascending so that
//! `[skip, skip + limit)` windows are internally consistent between
//! calls. Filters bind as plain equalities; a value that matches no row
//! produces an empty result set.
//!
//! Each query runs under a bounded wait (`tokio::time::timeout`). If a
//! caller disconnects mid-query the dropped future releases its
//! connection back to the pool; no leak on cancellation.

use std::future::Future;
use std::time::Duration;

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::{CallFilter, Filter, OperatorFilter, Page};
use crate::error::ApiError;
use crate::persistence::models::{Call, Department, Operator};

/// PostgreSQL-backed store over the external call-center schema.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgStore {
    /// Creates a store over the given pool with a per-query time bound.
    #[must_use]
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Runs one query future under the configured time bound.
    async fn bounded<T, F>(&self, query: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(result) => result.map_err(ApiError::from),
            Err(_elapsed) => Err(ApiError::QueryTimeout),
        }
    }

    /// Returns every department ordered by id.
    ///
    /// Unpaginated on purpose: the department set is expected to be
    /// small and static.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on pool saturation, store failure or query
    /// timeout.
    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        let mut query = departments_query();
        self.bounded(query.build_query_as::<Department>().fetch_all(&self.pool))
            .await
    }

    /// Returns one page of operators matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on pool saturation, store failure or query
    /// timeout.
    pub async fn list_operators(
        &self,
        filter: &OperatorFilter,
        page: Page,
    ) -> Result<Vec<Operator>, ApiError> {
        let mut query = operators_query(filter, page);
        self.bounded(query.build_query_as::<Operator>().fetch_all(&self.pool))
            .await
    }

    /// Looks up a single operator by id. `None` means no such row.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on pool saturation, store failure or query
    /// timeout.
    pub async fn get_operator(&self, id: i32) -> Result<Option<Operator>, ApiError> {
        let query = sqlx::query_as::<_, Operator>(
            "SELECT id, name, last_name, email, active, department_id, photo \
             FROM operators WHERE id = $1",
        )
        .bind(id);
        self.bounded(query.fetch_optional(&self.pool)).await
    }

    /// Returns one page of calls matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on pool saturation, store failure or query
    /// timeout.
    pub async fn list_calls(
        &self,
        filter: &CallFilter,
        page: Page,
    ) -> Result<Vec<Call>, ApiError> {
        let mut query = calls_query(filter, page);
        self.bounded(query.build_query_as::<Call>().fetch_all(&self.pool))
            .await
    }

    /// Looks up a single call by id. `None` means no such row.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on pool saturation, store failure or query
    /// timeout.
    pub async fn get_call(&self, id: i64) -> Result<Option<Call>, ApiError> {
        let query = sqlx::query_as::<_, Call>(
            "SELECT id, operator_id, phone_number, started_at, duration_secs, \
             transcription_status FROM calls WHERE id = $1",
        )
        .bind(id);
        self.bounded(query.fetch_optional(&self.pool)).await
    }
}

// ── Query composition ───────────────────────────────────────────────────

fn departments_query() -> QueryBuilder<'static, Postgres> {
    QueryBuilder::new("SELECT id, name FROM departments ORDER BY id ASC")
}

fn operators_query(filter: &OperatorFilter, page: Page) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(
        "SELECT id, name, last_name, email, active, department_id, photo FROM operators",
    );
    if let Filter::Equals(active) = filter.active {
        builder.push(" WHERE active = ").push_bind(active);
    }
    push_window(&mut builder, page);
    builder
}

fn calls_query(filter: &CallFilter, page: Page) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(
        "SELECT id, operator_id, phone_number, started_at, duration_secs, \
         transcription_status FROM calls",
    );
    let mut clause = " WHERE ";
    if let Filter::Equals(operator_id) = filter.operator_id {
        builder.push(clause).push("operator_id = ").push_bind(operator_id);
        clause = " AND ";
    }
    if let Filter::Equals(ref status) = filter.transcription_status {
        builder
            .push(clause)
            .push("transcription_status = ")
            .push_bind(status.clone());
    }
    push_window(&mut builder, page);
    builder
}

fn push_window(builder: &mut QueryBuilder<'static, Postgres>, page: Page) {
    builder
        .push(" ORDER BY id ASC OFFSET ")
        .push_bind(page.skip())
        .push(" LIMIT ")
        .push_bind(page.limit());
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn make_page() -> Page {
        let Ok(page) = Page::new(Some(5), Some(20)) else {
            panic!("valid page");
        };
        page
    }

    #[test]
    fn unfiltered_operators_query_has_no_where_clause() {
        let sql = operators_query(&OperatorFilter::default(), make_page()).into_sql();
        assert!(!sql.contains("WHERE"));
        assert!(sql.contains("ORDER BY id ASC OFFSET $1 LIMIT $2"));
    }

    #[test]
    fn active_filter_binds_before_the_window() {
        let filter = OperatorFilter {
            active: Filter::Equals(true),
        };
        let sql = operators_query(&filter, make_page()).into_sql();
        assert!(sql.contains("WHERE active = $1"));
        assert!(sql.contains("ORDER BY id ASC OFFSET $2 LIMIT $3"));
    }

    #[test]
    fn call_filters_compose_with_and() {
        let filter = CallFilter {
            operator_id: Filter::Equals(7),
            transcription_status: Filter::Equals("pending".to_string()),
        };
        let sql = calls_query(&filter, make_page()).into_sql();
        assert!(sql.contains("WHERE operator_id = $1 AND transcription_status = $2"));
        assert!(sql.contains("ORDER BY id ASC OFFSET $3 LIMIT $4"));
    }

    #[test]
    fn single_call_filter_has_no_dangling_and() {
        let filter = CallFilter {
            operator_id: Filter::Any,
            transcription_status: Filter::Equals("completed".to_string()),
        };
        let sql = calls_query(&filter, make_page()).into_sql();
        assert!(sql.contains("WHERE transcription_status = $1"));
        assert!(!sql.contains("AND"));
    }

    #[test]
    fn departments_query_is_ordered_and_unpaginated() {
        let sql = departments_query().into_sql();
        assert_eq!(sql, "SELECT id, name FROM departments ORDER BY id ASC");
    }
}
