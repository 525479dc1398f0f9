//! Validated pagination window.
//!
//! A [`Page`] is the `[skip, skip + limit)` slice of a result set that is
//! deterministically ordered by primary identifier ascending. Pagination
//! without a stable order is a correctness bug, not an optimization
//! detail, so ordering lives in the store and the window lives here.

use crate::error::ApiError;

/// Default page size when `limit` is omitted.
pub const DEFAULT_LIMIT: i64 = 10;

/// Hard upper bound on `limit`. Values above it are rejected rather than
/// silently capped, so callers learn about the bound instead of getting
/// truncated pages.
pub const MAX_LIMIT: i64 = 1000;

/// A validated `[skip, skip + limit)` pagination window.
///
/// Constructed only through [`Page::new`], which enforces `skip >= 0`
/// and `1 <= limit <= MAX_LIMIT` before any query is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    skip: i64,
    limit: i64,
}

impl Page {
    /// Builds a window from raw `skip`/`limit` values, applying defaults
    /// for omitted parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] naming the offending field when
    /// `skip` is negative or `limit` is outside `1..=MAX_LIMIT`.
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Result<Self, ApiError> {
        let skip = skip.unwrap_or(0);
        if skip < 0 {
            return Err(ApiError::Validation {
                field: "skip".to_string(),
                message: "must be greater than or equal to 0".to_string(),
            });
        }

        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(ApiError::Validation {
                field: "limit".to_string(),
                message: format!("must be between 1 and {MAX_LIMIT}"),
            });
        }

        Ok(Self { skip, limit })
    }

    /// Number of leading rows to skip.
    #[must_use]
    pub const fn skip(&self) -> i64 {
        self.skip
    }

    /// Maximum number of rows to return.
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn omitted_parameters_use_defaults() {
        let Ok(page) = Page::new(None, None) else {
            panic!("defaults must validate");
        };
        assert_eq!(page.skip(), 0);
        assert_eq!(page.limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn explicit_values_are_kept() {
        let Ok(page) = Page::new(Some(40), Some(20)) else {
            panic!("valid window rejected");
        };
        assert_eq!(page.skip(), 40);
        assert_eq!(page.limit(), 20);
    }

    #[test]
    fn negative_skip_is_rejected() {
        let Err(err) = Page::new(Some(-1), None) else {
            panic!("negative skip must be rejected");
        };
        let ApiError::Validation { field, .. } = err else {
            panic!("expected validation error");
        };
        assert_eq!(field, "skip");
    }

    #[test]
    fn zero_limit_is_rejected() {
        assert!(Page::new(None, Some(0)).is_err());
    }

    #[test]
    fn limit_above_maximum_is_rejected() {
        let Err(err) = Page::new(None, Some(MAX_LIMIT + 1)) else {
            panic!("oversized limit must be rejected");
        };
        let ApiError::Validation { field, .. } = err else {
            panic!("expected validation error");
        };
        assert_eq!(field, "limit");
    }

    #[test]
    fn limit_at_maximum_is_accepted() {
        assert!(Page::new(None, Some(MAX_LIMIT)).is_ok());
    }
}
