//! Operator listing parameters and response DTO.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Filter, OperatorFilter, Page};
use crate::error::ApiError;
use crate::persistence::models::Operator;

/// Query parameters accepted by `GET /operators`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OperatorListParams {
    /// Rows to skip. Defaults to 0; must be >= 0.
    pub skip: Option<i64>,
    /// Page size. Defaults to 10; must be between 1 and 1000.
    pub limit: Option<i64>,
    /// Only operators with this `active` flag. Omit for no constraint;
    /// `active=false` is a real constraint, not an omission.
    pub active: Option<bool>,
}

impl OperatorListParams {
    /// Validates the raw parameters into a filter and a pagination
    /// window.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] naming the offending field when
    /// `skip` or `limit` is out of range.
    pub fn into_query(self) -> Result<(OperatorFilter, Page), ApiError> {
        let page = Page::new(self.skip, self.limit)?;
        let filter = OperatorFilter {
            active: Filter::from(self.active),
        };
        Ok((filter, page))
    }
}

/// An operator as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OperatorDto {
    /// Stable operator identifier.
    pub id: i32,
    /// First name.
    pub name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Whether the operator currently takes calls.
    pub active: Option<bool>,
    /// Owning department identifier, if assigned.
    pub department_id: Option<i32>,
    /// Profile photo URL.
    pub photo: Option<String>,
}

impl From<Operator> for OperatorDto {
    fn from(row: Operator) -> Self {
        Self {
            id: row.id,
            name: row.name,
            last_name: row.last_name,
            email: row.email,
            active: row.active,
            department_id: row.department_id,
            photo: row.photo,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn omitted_parameters_validate_to_defaults() {
        let params = OperatorListParams {
            skip: None,
            limit: None,
            active: None,
        };
        let Ok((filter, page)) = params.into_query() else {
            panic!("defaults must validate");
        };
        assert_eq!(page.skip(), 0);
        assert_eq!(page.limit(), 10);
        assert!(!filter.active.is_constrained());
    }

    #[test]
    fn explicit_false_active_constrains_the_filter() {
        let params = OperatorListParams {
            skip: None,
            limit: None,
            active: Some(false),
        };
        let Ok((filter, _)) = params.into_query() else {
            panic!("valid params rejected");
        };
        assert_eq!(filter.active, Filter::Equals(false));
    }

    #[test]
    fn out_of_range_limit_is_rejected_before_any_query() {
        let params = OperatorListParams {
            skip: None,
            limit: Some(5000),
            active: None,
        };
        assert!(params.into_query().is_err());
    }
}
