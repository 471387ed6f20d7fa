/// Voting handlers: ballot submission and tally lookup.

use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::handlers::responses::ApiResponse;
use crate::models::meeting::{queries, voting, MeetingStore, Vote};

// ---------------------------------------------------------------------------
// POST — submit vote
// ---------------------------------------------------------------------------

/// POST /api/meetings/vote — cast one ballot against an agenda item.
/// Returns the updated tally. A member's first accepted ballot is final.
pub async fn submit_vote(
    store: web::Data<MeetingStore>,
    body: web::Json<Vote>,
) -> Result<HttpResponse, AppError> {
    let vote = body.into_inner();
    let results = voting::submit_vote(&store, &vote)?;
    log::debug!(
        "Vote recorded: meeting={} item={} member={}",
        vote.meeting_id,
        vote.agenda_item_id,
        vote.member_id
    );
    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        results,
        "Suara berhasil disimpan",
    )))
}

// ---------------------------------------------------------------------------
// GET — vote results
// ---------------------------------------------------------------------------

/// GET /api/meetings/{id}/agenda/{item_id}/results — tally snapshot for one
/// agenda item. Items that never take a vote report not-found, not zeros.
pub async fn vote_results(
    store: web::Data<MeetingStore>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (meeting_id, item_id) = path.into_inner();
    let results = queries::vote_results(&store, &meeting_id, &item_id)?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(results)))
}
