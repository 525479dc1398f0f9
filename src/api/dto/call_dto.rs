//! Call listing parameters and response DTO.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{CallFilter, Filter, Page};
use crate::error::ApiError;
use crate::persistence::models::Call;

/// Query parameters accepted by `GET /calls`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallListParams {
    /// Rows to skip. Defaults to 0; must be >= 0.
    pub skip: Option<i64>,
    /// Page size. Defaults to 10; must be between 1 and 1000.
    pub limit: Option<i64>,
    /// Only calls handled by this operator. An id referencing no
    /// operator yields an empty page, not an error.
    pub operator_id: Option<i32>,
    /// Only calls with this transcription status code. Unrecognized
    /// codes yield an empty page, not an error.
    pub transcription_status: Option<String>,
}

impl CallListParams {
    /// Validates the raw parameters into a filter and a pagination
    /// window.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] naming the offending field when
    /// `skip` or `limit` is out of range.
    pub fn into_query(self) -> Result<(CallFilter, Page), ApiError> {
        let page = Page::new(self.skip, self.limit)?;
        let filter = CallFilter {
            operator_id: Filter::from(self.operator_id),
            transcription_status: Filter::from(self.transcription_status),
        };
        Ok((filter, page))
    }
}

/// A call record as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CallDto {
    /// Stable call identifier.
    pub id: i64,
    /// Operator who handled the call, if any.
    pub operator_id: Option<i32>,
    /// Caller phone number.
    pub phone_number: String,
    /// When the call started.
    pub started_at: DateTime<Utc>,
    /// Call duration in seconds.
    pub duration_secs: i32,
    /// Transcription pipeline status code.
    pub transcription_status: Option<String>,
}

impl From<Call> for CallDto {
    fn from(row: Call) -> Self {
        Self {
            id: row.id,
            operator_id: row.operator_id,
            phone_number: row.phone_number,
            started_at: row.started_at,
            duration_secs: row.duration_secs,
            transcription_status: row.transcription_status,
        }
    }
}
