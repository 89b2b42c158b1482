use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::{ApiError, ErrorResponse};
use crate::handlers::MessageResponse;
use crate::store::AppState;

#[derive(Serialize, ToSchema)]
pub struct ListDepartmentsResponse {
    pub data: Vec<String>,
    #[schema(example = 4)]
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/departments",
    responses(
        (status = 200, description = "All department names with a count", body = ListDepartmentsResponse),
    ),
    tag = "departments"
)]
pub async fn list_departments(state: web::Data<AppState>) -> HttpResponse {
    let departments = state.departments();
    HttpResponse::Ok().json(ListDepartmentsResponse {
        data: departments.names().to_vec(),
        count: departments.len(),
    })
}

#[utoipa::path(
    post,
    path = "/departments",
    request_body(content = String, description = "Department name as a bare JSON string"),
    responses(
        (status = 201, description = "The created name echoed back", body = String),
        (status = 400, description = "Empty or duplicate name", body = ErrorResponse),
    ),
    tag = "departments"
)]
pub async fn create_department(
    state: web::Data<AppState>,
    name: web::Json<String>,
) -> Result<HttpResponse, ApiError> {
    let name = name.into_inner();
    if name.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Department name must not be empty".to_string(),
        ));
    }

    let mut departments = state.departments();
    if departments.contains(&name) {
        return Err(ApiError::BadRequest("Department already exists".to_string()));
    }

    departments.insert(name.clone());
    Ok(HttpResponse::Created().json(name))
}

#[utoipa::path(
    delete,
    path = "/departments/{name}",
    params(("name" = String, Path, description = "Department name")),
    responses(
        (status = 200, description = "Confirmation message", body = MessageResponse),
        (status = 404, description = "Unknown name", body = ErrorResponse),
    ),
    tag = "departments"
)]
pub async fn delete_department(
    state: web::Data<AppState>,
    name: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let mut departments = state.departments();
    let index = departments
        .position(&name)
        .ok_or_else(|| ApiError::NotFound("Department not found".to_string()))?;
    departments.remove(index);
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Department deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use serde_json::Value;

    use crate::handlers;
    use crate::store::AppState;

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.clone())
                    .app_data(handlers::json_config())
                    .configure(handlers::configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn list_starts_with_default_departments() {
        let state = web::Data::new(AppState::new());
        let app = test_app!(state);

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/departments").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["count"], 4);
        assert_eq!(body["data"][0], "Engineering");
        assert_eq!(body["data"][3], "HR");
    }

    #[actix_web::test]
    async fn create_appends_and_rejects_duplicates() {
        let state = web::Data::new(AppState::new());
        let app = test_app!(state);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/departments")
                .set_json("Design")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 201);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, "Design");
        assert_eq!(state.departments().len(), 5);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/departments")
                .set_json("Design")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Department already exists");
    }

    #[actix_web::test]
    async fn create_rejects_empty_name() {
        let state = web::Data::new(AppState::new());
        let app = test_app!(state);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/departments")
                .set_json("  ")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn delete_removes_one_name_and_unknown_is_404() {
        let state = web::Data::new(AppState::new());
        let app = test_app!(state);

        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri("/departments/Sales")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Department deleted successfully");
        assert_eq!(state.departments().len(), 3);

        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri("/departments/Sales")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 404);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Department not found");
    }
}
