/// Lifecycle mutation handlers: attendance recording and closing.

use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::handlers::responses::ApiResponse;
use crate::models::meeting::{lifecycle, MeetingStore};

use super::forms::AttendanceForm;

// ---------------------------------------------------------------------------
// POST — record attendance
// ---------------------------------------------------------------------------

/// POST /api/meetings/{id}/attendance — union member ids into the attendee
/// list. Idempotent; ids are not checked against the member directory.
pub async fn record_attendance(
    store: web::Data<MeetingStore>,
    path: web::Path<String>,
    form: web::Json<AttendanceForm>,
) -> Result<HttpResponse, AppError> {
    let meeting = lifecycle::record_attendance(&store, &path.into_inner(), &form.member_ids)?;
    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        meeting,
        "Kehadiran berhasil dicatat",
    )))
}

// ---------------------------------------------------------------------------
// POST — close meeting
// ---------------------------------------------------------------------------

/// POST /api/meetings/{id}/close — finalize the meeting. Closing does not
/// wait for outstanding votes; a second close is rejected.
pub async fn close(
    store: web::Data<MeetingStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let meeting = lifecycle::close(&store, &id)?;
    log::info!("Meeting {id} closed");
    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        meeting,
        "Rapat berhasil ditutup",
    )))
}
