//! Discriminated optional filters for listing queries.
//!
//! A filter that was omitted and a filter explicitly set to a false/zero
//! value must never be confused, so filters are an explicit two-state
//! value rather than a nullable primitive. All supplied filters combine
//! with logical AND; a value that matches no row yields an empty result
//! set, never an error.

/// An optional equality constraint on a listing query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter<T> {
    /// No constraint: the column may hold any value, including NULL.
    #[default]
    Any,
    /// Only rows whose column equals the given value.
    Equals(T),
}

impl<T> Filter<T> {
    /// Whether this filter constrains the query at all.
    #[must_use]
    pub const fn is_constrained(&self) -> bool {
        matches!(self, Self::Equals(_))
    }
}

impl<T> From<Option<T>> for Filter<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Any, Self::Equals)
    }
}

/// Filters accepted by the operator listing.
#[derive(Debug, Clone, Default)]
pub struct OperatorFilter {
    /// Constrain on the `active` flag.
    pub active: Filter<bool>,
}

/// Filters accepted by the call listing.
#[derive(Debug, Clone, Default)]
pub struct CallFilter {
    /// Constrain on the owning operator.
    pub operator_id: Filter<i32>,
    /// Constrain on the transcription status code. The value set is owned
    /// by the external schema; an unrecognized code simply matches nothing.
    pub transcription_status: Filter<String>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn omitted_filter_is_unconstrained() {
        let filter: Filter<bool> = Filter::from(None);
        assert_eq!(filter, Filter::Any);
        assert!(!filter.is_constrained());
    }

    #[test]
    fn explicit_false_is_not_omitted() {
        let filter = Filter::from(Some(false));
        assert_eq!(filter, Filter::Equals(false));
        assert!(filter.is_constrained());
    }

    #[test]
    fn default_call_filter_constrains_nothing() {
        let filter = CallFilter::default();
        assert!(!filter.operator_id.is_constrained());
        assert!(!filter.transcription_status.is_constrained());
    }
}
