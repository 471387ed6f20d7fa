use actix_web::{middleware, web, App, HttpServer};

use koperasi_rapat::errors::AppError;
use koperasi_rapat::handlers;
use koperasi_rapat::models::meeting::MeetingStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let bind_addr = match std::env::var("BIND_ADDR") {
        Ok(val) => val,
        Err(_) => {
            log::warn!("No BIND_ADDR set — defaulting to 127.0.0.1:8080");
            "127.0.0.1:8080".to_string()
        }
    };

    // Single shared store; all handlers go through it.
    let store = web::Data::new(MeetingStore::new());

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            // Malformed/structurally invalid JSON degrades to the validation
            // classification instead of actix's default error body.
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::Validation(format!("Permintaan tidak valid: {err}")).into()
            }))
            .service(web::scope("/api").configure(handlers::meeting_handlers::configure))
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                actix_web::HttpResponse::NotFound().json(serde_json::json!({
                    "success": false,
                    "error": "Rute tidak ditemukan",
                }))
            }))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
