use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::department::Department;

/// An employee record as held in the store and returned on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Opaque server-generated token, immutable after creation.
    #[schema(example = "1736932371000k3j9x2m1")]
    pub id: String,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = 30)]
    pub age: u32,
    pub is_active: bool,
    pub department: Department,
    #[schema(example = 75000)]
    pub salary: u64,
    /// ISO-8601 timestamp with millisecond precision.
    #[schema(example = "2023-01-15T10:00:00.000Z")]
    pub hire_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "https://example.com/avatar/123.jpg")]
    pub image: Option<String>,
}

/// Projection returned by the list endpoint.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub id: String,
    pub name: String,
    pub department: Department,
    pub age: u32,
}

impl From<&Employee> for EmployeeSummary {
    fn from(employee: &Employee) -> Self {
        EmployeeSummary {
            id: employee.id.clone(),
            name: employee.name.clone(),
            department: employee.department,
            age: employee.age,
        }
    }
}
