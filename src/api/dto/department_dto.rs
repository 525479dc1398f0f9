//! Department response DTO.

use serde::Serialize;
use utoipa::ToSchema;

use crate::persistence::models::Department;

/// A department as returned by the root listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DepartmentDto {
    /// Stable department identifier.
    pub id: i32,
    /// Department name.
    pub name: String,
}

impl From<Department> for DepartmentDto {
    fn from(row: Department) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}
