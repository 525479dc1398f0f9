//! Data Transfer Objects for REST request/response serialization.
//!
//! Each listing endpoint has an explicit parameter struct enumerating
//! every accepted parameter, its type and its default; parameters are
//! validated into domain values before any query is built. List
//! responses are plain JSON arrays: no total count or "has more" flag
//! is computed, a deliberate trade-off to avoid doubling store load
//! with count queries.

pub mod call_dto;
pub mod department_dto;
pub mod operator_dto;

pub use call_dto::*;
pub use department_dto::*;
pub use operator_dto::*;
