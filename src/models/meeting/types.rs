use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Meeting lifecycle status.
///
/// Variant order is the lifecycle order (`scheduled` → `ongoing` →
/// `completed`), so forward-only transition checks are an `Ord` comparison.
/// `completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Scheduled,
    Ongoing,
    Completed,
}

impl MeetingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingStatus::Scheduled => "scheduled",
            MeetingStatus::Ongoing => "ongoing",
            MeetingStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeetingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(MeetingStatus::Scheduled),
            "ongoing" => Ok(MeetingStatus::Ongoing),
            "completed" => Ok(MeetingStatus::Completed),
            other => Err(AppError::Validation(format!(
                "Status rapat tidak valid: {other}"
            ))),
        }
    }
}

/// One of the three ballot options for a votable agenda item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Approve,
    Reject,
    Abstain,
}

/// Running tally for one agenda item.
///
/// Invariant: `approve + reject + abstain == voters.len()` and `voters`
/// holds no duplicate member ids. `record` maintains both by bumping exactly
/// one counter and appending exactly one voter per accepted ballot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteResults {
    pub approve: u32,
    pub reject: u32,
    pub abstain: u32,
    pub voters: Vec<String>,
}

impl VoteResults {
    pub fn has_voted(&self, member_id: &str) -> bool {
        self.voters.iter().any(|v| v == member_id)
    }

    /// Fold one ballot in. Callers must have checked `has_voted` first.
    pub fn record(&mut self, choice: VoteChoice, member_id: &str) {
        match choice {
            VoteChoice::Approve => self.approve += 1,
            VoteChoice::Reject => self.reject += 1,
            VoteChoice::Abstain => self.abstain += 1,
        }
        self.voters.push(member_id.to_string());
    }

    pub fn total(&self) -> u32 {
        self.approve + self.reject + self.abstain
    }
}

/// A discrete topic within a meeting, optionally requiring a vote.
///
/// `vote_results` is set at materialization time: zeroed iff the item takes
/// a vote, absent otherwise. Absent results serialize as an omitted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub requires_vote: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_results: Option<VoteResults>,
}

/// A governance meeting with its agenda and attendance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub status: MeetingStatus,
    pub attendees: Vec<String>,
    pub agenda_items: Vec<AgendaItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Meeting {
    pub fn agenda_item(&self, item_id: &str) -> Option<&AgendaItem> {
        self.agenda_items.iter().find(|item| item.id == item_id)
    }

    pub fn agenda_item_mut(&mut self, item_id: &str) -> Option<&mut AgendaItem> {
        self.agenda_items.iter_mut().find(|item| item.id == item_id)
    }
}

/// Agenda item input; the store assigns ids when the agenda is materialized.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAgendaItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub requires_vote: bool,
}

impl NewAgendaItem {
    /// Materialize at a 1-based agenda position: id `agenda-{n}`, tally
    /// zeroed iff the item takes a vote.
    pub fn materialize(self, position: usize) -> AgendaItem {
        AgendaItem {
            id: format!("agenda-{position}"),
            title: self.title,
            description: self.description,
            requires_vote: self.requires_vote,
            vote_results: self.requires_vote.then(VoteResults::default),
        }
    }
}

/// Input for creating a meeting.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMeeting {
    pub title: String,
    pub date: DateTime<Utc>,
    pub location: String,
    #[serde(default)]
    pub agenda_items: Vec<NewAgendaItem>,
}

/// Partial meeting update; absent fields keep their current values.
///
/// A provided status may only move forward in the lifecycle. A provided
/// agenda sequence replaces the existing one wholesale and is materialized
/// the same way `create` does it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeeting {
    pub title: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub status: Option<MeetingStatus>,
    pub agenda_items: Option<Vec<NewAgendaItem>>,
}

/// A single ballot. Transient: folded into `VoteResults` and never stored,
/// so there is no per-vote audit trail beyond membership in `voters`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub meeting_id: String,
    pub agenda_item_id: String,
    pub member_id: String,
    pub choice: VoteChoice,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}
