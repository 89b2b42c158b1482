mod docs;
mod errors;
mod handlers;
mod models;
mod store;
mod utils;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::store::AppState;

async fn index() -> HttpResponse {
    HttpResponse::Ok().body("CRUD API - Employees endpoint available at /employees")
}

async fn docs_redirect() -> HttpResponse {
    HttpResponse::Found()
        .insert_header(("Location", "/docs/"))
        .finish()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8080);

    // Built once so every worker shares the same stores.
    let state = web::Data::new(AppState::new());

    info!("Starting server at 127.0.0.1:{}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(handlers::json_config())
            .app_data(handlers::query_config())
            .wrap(Logger::default())
            .route("/", web::get().to(index))
            .configure(handlers::configure)
            .service(SwaggerUi::new("/docs/{_:.*}").url("/openapi.json", ApiDoc::openapi()))
            .route("/docs", web::get().to(docs_redirect))
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
