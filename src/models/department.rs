use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed set of departments an employee can belong to. Parsing from the
/// wire string fails for anything outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    Hr,
}

impl Department {
    pub const ALL: [Department; 4] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Hr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "engineering",
            Department::Marketing => "marketing",
            Department::Sales => "sales",
            Department::Hr => "hr",
        }
    }
}
