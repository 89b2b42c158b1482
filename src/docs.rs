use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::handlers::{actions, department, employee, MessageResponse};
use crate::models::department::Department;
use crate::models::employee::{Employee, EmployeeSummary};

/// OpenAPI description of the whole HTTP surface, served at /openapi.json
/// and rendered by Swagger UI under /docs/.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Staff Directory API",
        description = "In-memory CRUD API for employee and department records"
    ),
    paths(
        employee::list_employees,
        employee::get_employee,
        employee::create_employee,
        employee::update_employee,
        employee::delete_employee,
        department::list_departments,
        department::create_department,
        department::delete_department,
        actions::run_action,
        actions::seed_employees,
    ),
    components(schemas(
        Employee,
        EmployeeSummary,
        Department,
        employee::NewEmployee,
        employee::UpdateEmployee,
        employee::ListEmployeesResponse,
        department::ListDepartmentsResponse,
        actions::Action,
        actions::ActionRequest,
        actions::ActionResponse,
        actions::SeedResponse,
        MessageResponse,
        ErrorResponse,
    )),
    tags(
        (name = "employees", description = "Employee CRUD"),
        (name = "departments", description = "Department names"),
        (name = "actions", description = "Bulk seed and clear operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/employees",
            "/employees/{id}",
            "/departments",
            "/departments/{name}",
            "/actions",
            "/seed",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
        assert!(doc.components.is_some());
    }
}
