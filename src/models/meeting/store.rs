use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use crate::errors::AppError;

use super::types::{Meeting, MeetingStatus, NewMeeting};

/// Authoritative in-memory meeting table, keyed by meeting id.
///
/// A single `RwLock` over the table serializes all mutations, which is what
/// keeps per-meeting writes (attendance, votes, transitions) free of lost
/// updates. The model layer never holds the lock across I/O, so critical
/// sections stay bounded. Reads hand out clones; callers never alias live
/// store state.
pub struct MeetingStore {
    inner: RwLock<Inner>,
}

struct Inner {
    meetings: HashMap<String, Meeting>,
    next_id: u64,
}

impl Default for MeetingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MeetingStore {
    pub fn new() -> Self {
        MeetingStore {
            inner: RwLock::new(Inner {
                meetings: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Insert a new meeting.
    ///
    /// Assigns the next sequential id, sets status `scheduled` with empty
    /// attendees, materializes agenda items with `agenda-{n}` ids in input
    /// order, and stamps both timestamps with the current time.
    pub fn create(&self, input: NewMeeting) -> Meeting {
        let mut inner = self.inner.write().expect("meeting store lock poisoned");
        let id = inner.next_id.to_string();
        inner.next_id += 1;

        let now = Utc::now();
        let meeting = Meeting {
            id: id.clone(),
            title: input.title,
            date: input.date,
            location: input.location,
            status: MeetingStatus::Scheduled,
            attendees: Vec::new(),
            agenda_items: input
                .agenda_items
                .into_iter()
                .enumerate()
                .map(|(i, item)| item.materialize(i + 1))
                .collect(),
            created_at: now,
            updated_at: now,
        };
        inner.meetings.insert(id, meeting.clone());
        meeting
    }

    pub fn get(&self, id: &str) -> Result<Meeting, AppError> {
        self.inner
            .read()
            .expect("meeting store lock poisoned")
            .meetings
            .get(id)
            .cloned()
            .ok_or_else(AppError::meeting_not_found)
    }

    /// All meetings, unordered; ordering belongs to the query layer.
    pub fn list(&self) -> Vec<Meeting> {
        self.inner
            .read()
            .expect("meeting store lock poisoned")
            .meetings
            .values()
            .cloned()
            .collect()
    }

    /// Full-record replacement. Fails if the id is unknown.
    pub fn replace(&self, id: &str, updated: Meeting) -> Result<Meeting, AppError> {
        let mut inner = self.inner.write().expect("meeting store lock poisoned");
        match inner.meetings.get_mut(id) {
            Some(slot) => {
                *slot = updated.clone();
                Ok(updated)
            }
            None => Err(AppError::meeting_not_found()),
        }
    }

    /// Scoped mutation entry point: runs `mutate` on the live record under
    /// the write lock, so the closure observes and updates the meeting
    /// atomically with respect to every other writer. An `Err` from the
    /// closure leaves whatever it already wrote in place; mutation paths
    /// validate before touching the record.
    pub fn update_meeting<T>(
        &self,
        id: &str,
        mutate: impl FnOnce(&mut Meeting) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut inner = self.inner.write().expect("meeting store lock poisoned");
        let meeting = inner
            .meetings
            .get_mut(id)
            .ok_or_else(AppError::meeting_not_found)?;
        mutate(meeting)
    }
}
