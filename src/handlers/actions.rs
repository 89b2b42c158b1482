use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::errors::{ApiError, ErrorResponse};
use crate::models::employee::Employee;
use crate::store::AppState;
use crate::utils::{seed, validation};

const DEFAULT_SEED_COUNT: u32 = 10;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Seed,
    Clear,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct ActionRequest {
    pub action: Action,
    /// Number of employees to seed; only meaningful with `seed`.
    #[validate(range(min = 1, max = 100))]
    #[schema(example = 10)]
    pub count: Option<u32>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    #[schema(example = "Seeded database with 10 employees")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<Vec<Employee>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_count: Option<usize>,
}

#[derive(Serialize, ToSchema)]
pub struct SeedResponse {
    #[schema(example = "Seeded database with 10 employees")]
    pub message: String,
    pub employees: Vec<Employee>,
}

#[derive(Deserialize, Validate, IntoParams)]
pub struct SeedQuery {
    /// Number of employees to generate (default 10).
    #[validate(range(min = 1, max = 100))]
    pub count: Option<u32>,
}

#[utoipa::path(
    post,
    path = "/actions",
    request_body = ActionRequest,
    responses(
        (status = 200, description = "Action completed", body = ActionResponse),
        (status = 400, description = "Unknown action or out-of-range count", body = ErrorResponse),
    ),
    tag = "actions"
)]
pub async fn run_action(
    state: web::Data<AppState>,
    body: web::Json<ActionRequest>,
) -> Result<HttpResponse, ApiError> {
    validation::validate_payload(&*body)?;
    let request = body.into_inner();

    match request.action {
        Action::Seed => {
            let count = request.count.unwrap_or(DEFAULT_SEED_COUNT);
            let batch = seed::random_employees(count);
            // Single lock acquisition keeps the batch append atomic.
            state.employees().extend(batch.clone());
            Ok(HttpResponse::Ok().json(ActionResponse {
                message: format!("Seeded database with {} employees", count),
                employees: Some(batch),
                deleted_count: None,
            }))
        }
        Action::Clear => {
            let deleted_count = state.employees().clear();
            Ok(HttpResponse::Ok().json(ActionResponse {
                message: "Deleted all employees from database".to_string(),
                employees: None,
                deleted_count: Some(deleted_count),
            }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/seed",
    params(SeedQuery),
    responses(
        (status = 200, description = "Generated employees", body = SeedResponse),
        (status = 400, description = "Out-of-range count", body = ErrorResponse),
    ),
    tag = "actions"
)]
pub async fn seed_employees(
    state: web::Data<AppState>,
    query: web::Query<SeedQuery>,
) -> Result<HttpResponse, ApiError> {
    validation::validate_payload(&*query)?;
    let count = query.count.unwrap_or(DEFAULT_SEED_COUNT);

    let batch = seed::random_employees(count);
    state.employees().extend(batch.clone());
    Ok(HttpResponse::Ok().json(SeedResponse {
        message: format!("Seeded database with {} employees", count),
        employees: batch,
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    use crate::handlers;
    use crate::store::AppState;

    const DEPARTMENTS: [&str; 4] = ["engineering", "marketing", "sales", "hr"];

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.clone())
                    .app_data(handlers::json_config())
                    .app_data(handlers::query_config())
                    .configure(handlers::configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn seed_action_grows_store_by_count() {
        let state = web::Data::new(AppState::new());
        let app = test_app!(state);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/actions")
                .set_json(json!({ "action": "seed", "count": 5 }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Seeded database with 5 employees");
        let generated = body["employees"].as_array().unwrap();
        assert_eq!(generated.len(), 5);
        for employee in generated {
            let age = employee["age"].as_u64().unwrap();
            assert!((18..=65).contains(&age));
            let department = employee["department"].as_str().unwrap();
            assert!(DEPARTMENTS.contains(&department));
        }
        assert_eq!(state.employees().len(), 5);
    }

    #[actix_web::test]
    async fn seed_action_defaults_to_ten() {
        let state = web::Data::new(AppState::new());
        let app = test_app!(state);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/actions")
                .set_json(json!({ "action": "seed" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);
        assert_eq!(state.employees().len(), 10);
    }

    #[actix_web::test]
    async fn clear_action_reports_previous_size() {
        let state = web::Data::new(AppState::new());
        let app = test_app!(state);

        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/actions")
                .set_json(json!({ "action": "seed", "count": 3 }))
                .to_request(),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/actions")
                .set_json(json!({ "action": "clear" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["deletedCount"], 3);
        assert!(body.get("employees").is_none());
        assert_eq!(state.employees().len(), 0);
    }

    #[actix_web::test]
    async fn unknown_action_and_bad_count_are_400() {
        let state = web::Data::new(AppState::new());
        let app = test_app!(state);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/actions")
                .set_json(json!({ "action": "drop" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/actions")
                .set_json(json!({ "action": "seed", "count": 0 }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 400);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/actions")
                .set_json(json!({ "action": "seed", "count": 101 }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 400);
        assert_eq!(state.employees().len(), 0);
    }

    #[actix_web::test]
    async fn seed_endpoint_reads_count_from_query() {
        let state = web::Data::new(AppState::new());
        let app = test_app!(state);

        let resp = test::call_service(
            &app,
            test::TestRequest::post().uri("/seed?count=4").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Seeded database with 4 employees");
        assert_eq!(body["employees"].as_array().unwrap().len(), 4);
        assert_eq!(state.employees().len(), 4);

        let resp = test::call_service(
            &app,
            test::TestRequest::post().uri("/seed?count=500").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 400);
    }
}
