use chrono::{DateTime, TimeZone, Utc};
use koperasi_rapat::models::meeting::{NewAgendaItem, NewMeeting, Vote, VoteChoice};

/// Meeting date helper: 10:00 UTC on the given day.
pub fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap()
}

/// A meeting with one informative item (agenda-1) and one votable item
/// (agenda-2).
pub fn sample_meeting(title: &str, y: i32, m: u32, d: u32) -> NewMeeting {
    NewMeeting {
        title: title.to_string(),
        date: date(y, m, d),
        location: "Aula Koperasi".to_string(),
        agenda_items: vec![
            NewAgendaItem {
                title: "Laporan Keuangan".to_string(),
                description: "Presentasi laporan keuangan".to_string(),
                requires_vote: false,
            },
            NewAgendaItem {
                title: "Persetujuan Anggaran".to_string(),
                description: "Voting untuk menyetujui anggaran".to_string(),
                requires_vote: true,
            },
        ],
    }
}

#[allow(dead_code)]
pub fn ballot(meeting_id: &str, item_id: &str, member_id: &str, choice: VoteChoice) -> Vote {
    Vote {
        meeting_id: meeting_id.to_string(),
        agenda_item_id: item_id.to_string(),
        member_id: member_id.to_string(),
        choice,
        timestamp: Some(Utc::now()),
    }
}
