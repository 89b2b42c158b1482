use actix_web::{web, HttpResponse};
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::errors::{ApiError, ErrorResponse};
use crate::handlers::MessageResponse;
use crate::models::department::Department;
use crate::models::employee::{Employee, EmployeeSummary};
use crate::store::AppState;
use crate::utils::{id, time, validation};

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[schema(example = "John Doe")]
    pub name: String,
    #[validate(range(min = 18, max = 100))]
    #[schema(example = 30)]
    pub age: u32,
    pub is_active: bool,
    pub department: Department,
    #[schema(example = 75000)]
    pub salary: u64,
    /// Defaults to the current time when omitted.
    #[validate(custom = "validate_hire_date")]
    #[schema(example = "2023-01-15T10:00:00.000Z")]
    pub hire_date: Option<String>,
    #[validate(url)]
    pub image: Option<String>,
}

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployee {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(range(min = 18, max = 100))]
    pub age: Option<u32>,
    pub is_active: Option<bool>,
    pub department: Option<Department>,
    pub salary: Option<u64>,
    #[validate(custom = "validate_hire_date")]
    pub hire_date: Option<String>,
    #[validate(url)]
    pub image: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ListEmployeesResponse {
    pub data: Vec<EmployeeSummary>,
    #[schema(example = 5)]
    pub count: usize,
}

fn validate_hire_date(value: &str) -> Result<(), validator::ValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("hireDate must be an ISO-8601 timestamp"))
}

#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees as summaries, with a count", body = ListEmployeesResponse),
    ),
    tag = "employees"
)]
pub async fn list_employees(state: web::Data<AppState>) -> HttpResponse {
    let employees = state.employees();
    let data: Vec<EmployeeSummary> = employees.iter().map(EmployeeSummary::from).collect();
    HttpResponse::Ok().json(ListEmployeesResponse {
        count: data.len(),
        data,
    })
}

#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(("id" = String, Path, description = "Employee id")),
    responses(
        (status = 200, description = "The full employee record", body = Employee),
        (status = 404, description = "Unknown id", body = ErrorResponse),
    ),
    tag = "employees"
)]
pub async fn get_employee(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employees = state.employees();
    let employee = employees
        .find(&id)
        .ok_or_else(|| ApiError::NotFound("Employee not found".to_string()))?;
    Ok(HttpResponse::Ok().json(employee))
}

#[utoipa::path(
    post,
    path = "/employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Created employee with generated id", body = Employee),
        (status = 400, description = "Malformed body or invalid field", body = ErrorResponse),
    ),
    tag = "employees"
)]
pub async fn create_employee(
    state: web::Data<AppState>,
    body: web::Json<NewEmployee>,
) -> Result<HttpResponse, ApiError> {
    validation::validate_payload(&*body)?;
    let body = body.into_inner();

    let employee = Employee {
        id: id::generate_id(),
        name: body.name,
        age: body.age,
        is_active: body.is_active,
        department: body.department,
        salary: body.salary,
        hire_date: body.hire_date.unwrap_or_else(time::now_iso),
        image: body.image,
    };

    state.employees().insert(employee.clone());
    Ok(HttpResponse::Created().json(employee))
}

#[utoipa::path(
    put,
    path = "/employees/{id}",
    params(("id" = String, Path, description = "Employee id")),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Record after the shallow merge", body = Employee),
        (status = 400, description = "Malformed body or invalid field", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
    ),
    tag = "employees"
)]
pub async fn update_employee(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<UpdateEmployee>,
) -> Result<HttpResponse, ApiError> {
    validation::validate_payload(&*body)?;
    let updates = body.into_inner();

    let mut employees = state.employees();
    let index = employees
        .position(&id)
        .ok_or_else(|| ApiError::NotFound("Employee not found".to_string()))?;

    // Shallow merge: only the provided fields overwrite, id stays put.
    let mut employee = employees.get(index).clone();
    if let Some(name) = updates.name {
        employee.name = name;
    }
    if let Some(age) = updates.age {
        employee.age = age;
    }
    if let Some(is_active) = updates.is_active {
        employee.is_active = is_active;
    }
    if let Some(department) = updates.department {
        employee.department = department;
    }
    if let Some(salary) = updates.salary {
        employee.salary = salary;
    }
    if let Some(hire_date) = updates.hire_date {
        employee.hire_date = hire_date;
    }
    if let Some(image) = updates.image {
        employee.image = Some(image);
    }

    employees.replace(index, employee.clone());
    Ok(HttpResponse::Ok().json(employee))
}

#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(("id" = String, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Confirmation message", body = MessageResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
    ),
    tag = "employees"
)]
pub async fn delete_employee(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let mut employees = state.employees();
    let index = employees
        .position(&id)
        .ok_or_else(|| ApiError::NotFound("Employee not found".to_string()))?;
    employees.remove(index);
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Employee deleted successfully".to_string(),
    }))
}
