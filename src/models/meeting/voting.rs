//! Voting engine: validates and folds one ballot into an agenda item tally.

use chrono::Utc;

use crate::errors::AppError;

use super::store::MeetingStore;
use super::types::{MeetingStatus, Vote, VoteResults};

/// Validate and record a single ballot, returning the updated tally.
///
/// Gates, in order: meeting exists, meeting not completed, agenda item
/// exists, item takes a vote, member has not voted yet. A member's first
/// accepted ballot is final for that item; there is no revision path.
///
/// The tally is initialized lazily if absent — agenda materialization seeds
/// it for votable items, but an item can arrive through a full-agenda update
/// without one.
pub fn submit_vote(store: &MeetingStore, vote: &Vote) -> Result<VoteResults, AppError> {
    store.update_meeting(&vote.meeting_id, |meeting| {
        if meeting.status == MeetingStatus::Completed {
            return Err(AppError::InvalidState(
                "Voting tidak dapat dilakukan pada rapat yang sudah selesai".to_string(),
            ));
        }

        let item = meeting
            .agenda_item_mut(&vote.agenda_item_id)
            .ok_or_else(AppError::agenda_item_not_found)?;

        if !item.requires_vote {
            return Err(AppError::Validation(
                "Agenda ini tidak memerlukan voting".to_string(),
            ));
        }

        let results = item.vote_results.get_or_insert_with(VoteResults::default);
        if results.has_voted(&vote.member_id) {
            return Err(AppError::DuplicateVote(
                "Anda sudah memberikan suara untuk agenda ini".to_string(),
            ));
        }

        results.record(vote.choice, &vote.member_id);
        let snapshot = results.clone();
        meeting.updated_at = Utc::now();
        Ok(snapshot)
    })
}
