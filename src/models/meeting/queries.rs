//! Read-only queries over the meeting store.

use crate::errors::AppError;

use super::store::MeetingStore;
use super::types::{Meeting, MeetingStatus, VoteResults};

/// All meetings, optionally restricted to one status, ordered by meeting
/// date DESCENDING (most recent first) regardless of insertion order.
pub fn find_by_status(store: &MeetingStore, status: Option<MeetingStatus>) -> Vec<Meeting> {
    let mut meetings = store.list();
    if let Some(status) = status {
        meetings.retain(|m| m.status == status);
    }
    meetings.sort_by(|a, b| b.date.cmp(&a.date));
    meetings
}

/// Tally snapshot for one agenda item.
///
/// An item without a tally (it never takes a vote, or arrived through an
/// agenda update uninitialized and received no ballots) reports not-found
/// rather than an all-zero result.
pub fn vote_results(
    store: &MeetingStore,
    meeting_id: &str,
    agenda_item_id: &str,
) -> Result<VoteResults, AppError> {
    let meeting = store.get(meeting_id)?;
    let item = meeting
        .agenda_item(agenda_item_id)
        .ok_or_else(AppError::agenda_item_not_found)?;
    item.vote_results
        .clone()
        .ok_or_else(AppError::vote_results_not_found)
}
