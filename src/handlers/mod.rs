pub mod actions;
pub mod department;
pub mod employee;

use actix_web::web;
use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::ApiError;

/// Plain confirmation body returned by the delete endpoints.
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Employee deleted successfully")]
    pub message: String,
}

/// Maps JSON body decode failures to the `{"error": ...}` shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _| ApiError::BadRequest(err.to_string()).into())
}

/// Same treatment for query string decode failures.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _| ApiError::BadRequest(err.to_string()).into())
}

/// Business routes; the docs routes are registered separately in `main`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/employees")
            .route(web::get().to(employee::list_employees))
            .route(web::post().to(employee::create_employee)),
    )
    .service(
        web::resource("/employees/{id}")
            .route(web::get().to(employee::get_employee))
            .route(web::put().to(employee::update_employee))
            .route(web::delete().to(employee::delete_employee)),
    )
    .service(
        web::resource("/departments")
            .route(web::get().to(department::list_departments))
            .route(web::post().to(department::create_department)),
    )
    .service(
        web::resource("/departments/{name}")
            .route(web::delete().to(department::delete_department)),
    )
    .service(web::resource("/actions").route(web::post().to(actions::run_action)))
    .service(web::resource("/seed").route(web::post().to(actions::seed_employees)));
}
