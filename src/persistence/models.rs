//! Row types for the three directory entities.
//!
//! These mirror the external schema, which is owned and mutated
//! exclusively by upstream processes. Nullability follows the schema,
//! not what would be convenient here.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `departments` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Department {
    /// Stable department identifier.
    pub id: i32,
    /// Department name.
    pub name: String,
}

/// A row from the `operators` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Operator {
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
    /// Owning department, if assigned. Opaque foreign key; not enforced
    /// by this layer.
    pub department_id: Option<i32>,
    /// Profile photo URL.
    pub photo: Option<String>,
}

/// A row from the `calls` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Call {
    /// Stable call identifier.
    pub id: i64,
    /// Operator who handled the call. May dangle if the operator row was
    /// removed upstream; tolerated, never resolved here.
    pub operator_id: Option<i32>,
    /// Caller phone number.
    pub phone_number: String,
    /// When the call started.
    pub started_at: DateTime<Utc>,
    /// Call duration in seconds.
    pub duration_secs: i32,
    /// Transcription pipeline status code (e.g. `"pending"`,
    /// `"completed"`, `"failed"`). The value set is owned by the
    /// external schema.
    pub transcription_status: Option<String>,
}
