/// Meeting CRUD handlers: list, create, read, update.

use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::handlers::responses::ApiResponse;
use crate::models::meeting::{lifecycle, queries, MeetingStatus, MeetingStore, NewMeeting, UpdateMeeting};

use super::forms::MeetingFilter;

// ---------------------------------------------------------------------------
// GET — list meetings
// ---------------------------------------------------------------------------

/// GET /api/meetings — list meetings, optional `status` filter, newest
/// meeting date first.
pub async fn list(
    store: web::Data<MeetingStore>,
    query: web::Query<MeetingFilter>,
) -> Result<HttpResponse, AppError> {
    let status = query
        .status
        .as_deref()
        .map(|s| s.parse::<MeetingStatus>())
        .transpose()?;

    let meetings = queries::find_by_status(&store, status);
    Ok(HttpResponse::Ok().json(ApiResponse::ok(meetings)))
}

// ---------------------------------------------------------------------------
// POST — create meeting
// ---------------------------------------------------------------------------

/// POST /api/meetings — create a meeting in `scheduled` status.
pub async fn create(
    store: web::Data<MeetingStore>,
    body: web::Json<NewMeeting>,
) -> Result<HttpResponse, AppError> {
    let input = body.into_inner();

    let mut errors = Vec::new();
    if input.title.trim().is_empty() {
        errors.push("Judul rapat wajib diisi".to_string());
    }
    for (i, item) in input.agenda_items.iter().enumerate() {
        if item.title.trim().is_empty() {
            errors.push(format!("Judul agenda ke-{} wajib diisi", i + 1));
        }
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let created = store.create(input);
    log::info!(
        "Meeting {} created with {} agenda item(s)",
        created.id,
        created.agenda_items.len()
    );

    Ok(HttpResponse::Created().json(ApiResponse::with_message(created, "Rapat berhasil dibuat")))
}

// ---------------------------------------------------------------------------
// GET — read single meeting
// ---------------------------------------------------------------------------

/// GET /api/meetings/{id} — fetch one meeting by id.
pub async fn read(
    store: web::Data<MeetingStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let meeting = store.get(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(meeting)))
}

// ---------------------------------------------------------------------------
// PUT — update meeting
// ---------------------------------------------------------------------------

/// PUT /api/meetings/{id} — merge partial fields into the meeting.
///
/// Completed meetings reject edits; a provided status must move the
/// lifecycle forward.
pub async fn update(
    store: web::Data<MeetingStore>,
    path: web::Path<String>,
    body: web::Json<UpdateMeeting>,
) -> Result<HttpResponse, AppError> {
    let updated = lifecycle::update(&store, &path.into_inner(), body.into_inner())?;
    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        updated,
        "Rapat berhasil diperbarui",
    )))
}
