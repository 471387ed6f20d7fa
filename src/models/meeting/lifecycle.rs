//! Meeting lifecycle: field updates, attendance recording, and closing.
//!
//! Status moves strictly forward through `scheduled` → `ongoing` →
//! `completed`; once completed a meeting is read-only.

use chrono::Utc;

use crate::errors::AppError;

use super::store::MeetingStore;
use super::types::{Meeting, MeetingStatus, UpdateMeeting};

fn meeting_finalized() -> AppError {
    AppError::InvalidState("Rapat yang sudah selesai tidak dapat diubah".to_string())
}

/// Merge the provided fields into the meeting and refresh `updated_at`.
///
/// Rejected for completed meetings. A provided status may only advance the
/// lifecycle; regressions are rejected. A provided agenda sequence is
/// re-materialized with fresh `agenda-{n}` ids, the same path `create` uses.
pub fn update(store: &MeetingStore, id: &str, fields: UpdateMeeting) -> Result<Meeting, AppError> {
    store.update_meeting(id, |meeting| {
        if meeting.status == MeetingStatus::Completed {
            return Err(meeting_finalized());
        }
        if let Some(status) = fields.status {
            if status < meeting.status {
                return Err(AppError::InvalidState(format!(
                    "Status rapat tidak dapat dikembalikan dari {} ke {}",
                    meeting.status, status
                )));
            }
            meeting.status = status;
        }
        if let Some(title) = fields.title {
            meeting.title = title;
        }
        if let Some(date) = fields.date {
            meeting.date = date;
        }
        if let Some(location) = fields.location {
            meeting.location = location;
        }
        if let Some(items) = fields.agenda_items {
            meeting.agenda_items = items
                .into_iter()
                .enumerate()
                .map(|(i, item)| item.materialize(i + 1))
                .collect();
        }
        meeting.updated_at = Utc::now();
        Ok(meeting.clone())
    })
}

/// Union `member_ids` into the attendee list.
///
/// Idempotent: re-recording an attendee is a no-op. Member ids are taken
/// as-is; identity checks live with the caller.
pub fn record_attendance(
    store: &MeetingStore,
    id: &str,
    member_ids: &[String],
) -> Result<Meeting, AppError> {
    store.update_meeting(id, |meeting| {
        if meeting.status == MeetingStatus::Completed {
            return Err(meeting_finalized());
        }
        for member_id in member_ids {
            if !meeting.attendees.contains(member_id) {
                meeting.attendees.push(member_id.clone());
            }
        }
        meeting.updated_at = Utc::now();
        Ok(meeting.clone())
    })
}

/// Finalize the meeting.
///
/// Closing is unconditional apart from the already-closed gate; it does not
/// require every agenda vote to have been cast. Terminal: a completed
/// meeting cannot be closed again.
pub fn close(store: &MeetingStore, id: &str) -> Result<Meeting, AppError> {
    store.update_meeting(id, |meeting| {
        if meeting.status == MeetingStatus::Completed {
            return Err(AppError::InvalidState("Rapat sudah ditutup".to_string()));
        }
        meeting.status = MeetingStatus::Completed;
        meeting.updated_at = Utc::now();
        Ok(meeting.clone())
    })
}
