pub mod crud;
pub mod forms;
pub mod lifecycle;
pub mod voting;

use actix_web::web;

/// Configure /meetings routes (mounted under /api).
///
/// `/vote` is registered BEFORE `/{id}` so the literal segment wins the
/// routing match.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/meetings")
            .route("", web::get().to(crud::list))
            .route("", web::post().to(crud::create))
            .route("/vote", web::post().to(voting::submit_vote))
            .route("/{id}", web::get().to(crud::read))
            .route("/{id}", web::put().to(crud::update))
            .route("/{id}/attendance", web::post().to(lifecycle::record_attendance))
            .route("/{id}/close", web::post().to(lifecycle::close))
            .route(
                "/{id}/agenda/{item_id}/results",
                web::get().to(voting::vote_results),
            ),
    );
}
