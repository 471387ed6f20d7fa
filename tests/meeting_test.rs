use koperasi_rapat::errors::AppError;
use koperasi_rapat::models::meeting::{
    lifecycle, queries, MeetingStatus, MeetingStore, NewAgendaItem, UpdateMeeting,
};

mod common;
use common::{date, sample_meeting};

// --- Store ---

#[test]
fn test_create_assigns_sequential_ids_and_defaults() {
    let store = MeetingStore::new();

    let first = store.create(sample_meeting("Rapat Anggota Tahunan", 2024, 12, 15));
    let second = store.create(sample_meeting("Rapat Koordinasi", 2024, 11, 25));

    assert_eq!(first.id, "1");
    assert_eq!(second.id, "2");
    assert_eq!(first.status, MeetingStatus::Scheduled);
    assert!(first.attendees.is_empty());
    assert_eq!(first.created_at, first.updated_at);

    // Agenda ids are agenda-{n}, 1-based, in input order.
    assert_eq!(first.agenda_items[0].id, "agenda-1");
    assert_eq!(first.agenda_items[1].id, "agenda-2");

    // Tally is seeded iff the item takes a vote.
    assert!(first.agenda_items[0].vote_results.is_none());
    let results = first.agenda_items[1]
        .vote_results
        .as_ref()
        .expect("votable item should have a zeroed tally");
    assert_eq!(results.total(), 0);
    assert!(results.voters.is_empty());
}

#[test]
fn test_get_not_found() {
    let store = MeetingStore::new();
    let err = store.get("999").unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn test_replace_unknown_id() {
    let store = MeetingStore::new();
    let meeting = store.create(sample_meeting("Rapat", 2024, 12, 1));
    let err = store.replace("999", meeting).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn test_replace_swaps_full_record() {
    let store = MeetingStore::new();
    let mut meeting = store.create(sample_meeting("Rapat", 2024, 12, 1));
    meeting.title = "Rapat Direvisi".to_string();

    store.replace("1", meeting).expect("replace");
    assert_eq!(store.get("1").unwrap().title, "Rapat Direvisi");
}

// --- Lifecycle: update ---

#[test]
fn test_update_merges_fields() {
    let store = MeetingStore::new();
    let created = store.create(sample_meeting("Rapat", 2024, 12, 1));

    let updated = lifecycle::update(
        &store,
        "1",
        UpdateMeeting {
            title: Some("Rapat Evaluasi".to_string()),
            location: Some("Ruang Rapat Koperasi".to_string()),
            ..Default::default()
        },
    )
    .expect("update");

    assert_eq!(updated.title, "Rapat Evaluasi");
    assert_eq!(updated.location, "Ruang Rapat Koperasi");
    // Unspecified fields keep their values.
    assert_eq!(updated.date, created.date);
    assert_eq!(updated.status, MeetingStatus::Scheduled);
    assert!(updated.updated_at >= created.updated_at);
}

#[test]
fn test_update_unknown_id_not_found() {
    let store = MeetingStore::new();
    let err = lifecycle::update(&store, "999", UpdateMeeting::default()).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn test_update_status_forward_only() {
    let store = MeetingStore::new();
    store.create(sample_meeting("Rapat", 2024, 12, 1));

    let updated = lifecycle::update(
        &store,
        "1",
        UpdateMeeting {
            status: Some(MeetingStatus::Ongoing),
            ..Default::default()
        },
    )
    .expect("forward transition");
    assert_eq!(updated.status, MeetingStatus::Ongoing);

    // Regression is rejected and leaves the status untouched.
    let err = lifecycle::update(
        &store,
        "1",
        UpdateMeeting {
            status: Some(MeetingStatus::Scheduled),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
    assert_eq!(store.get("1").unwrap().status, MeetingStatus::Ongoing);
}

#[test]
fn test_update_status_forward_jump_allowed() {
    let store = MeetingStore::new();
    store.create(sample_meeting("Rapat", 2024, 12, 1));

    let updated = lifecycle::update(
        &store,
        "1",
        UpdateMeeting {
            status: Some(MeetingStatus::Completed),
            ..Default::default()
        },
    )
    .expect("scheduled -> completed is forward");
    assert_eq!(updated.status, MeetingStatus::Completed);
}

#[test]
fn test_update_rejected_after_close() {
    let store = MeetingStore::new();
    store.create(sample_meeting("Rapat", 2024, 12, 1));
    lifecycle::close(&store, "1").expect("close");

    let err = lifecycle::update(
        &store,
        "1",
        UpdateMeeting {
            title: Some("Terlambat".to_string()),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
}

#[test]
fn test_update_rematerializes_agenda() {
    let store = MeetingStore::new();
    store.create(sample_meeting("Rapat", 2024, 12, 1));

    let updated = lifecycle::update(
        &store,
        "1",
        UpdateMeeting {
            agenda_items: Some(vec![
                NewAgendaItem {
                    title: "Pemilihan Pengurus".to_string(),
                    description: "Voting pengurus baru".to_string(),
                    requires_vote: true,
                },
                NewAgendaItem {
                    title: "Penutupan".to_string(),
                    description: String::new(),
                    requires_vote: false,
                },
            ]),
            ..Default::default()
        },
    )
    .expect("update agenda");

    assert_eq!(updated.agenda_items.len(), 2);
    assert_eq!(updated.agenda_items[0].id, "agenda-1");
    assert_eq!(updated.agenda_items[1].id, "agenda-2");
    assert!(updated.agenda_items[0].vote_results.is_some());
    assert!(updated.agenda_items[1].vote_results.is_none());
}

// --- Lifecycle: attendance ---

#[test]
fn test_record_attendance_is_idempotent() {
    let store = MeetingStore::new();
    store.create(sample_meeting("Rapat", 2024, 12, 1));

    let ids = vec!["1".to_string(), "2".to_string()];
    lifecycle::record_attendance(&store, "1", &ids).expect("first recording");
    let meeting = lifecycle::record_attendance(&store, "1", &ids).expect("second recording");
    assert_eq!(meeting.attendees, vec!["1", "2"]);

    // Overlapping set only adds the new id.
    let more = vec!["2".to_string(), "3".to_string()];
    let meeting = lifecycle::record_attendance(&store, "1", &more).expect("third recording");
    assert_eq!(meeting.attendees, vec!["1", "2", "3"]);
}

#[test]
fn test_record_attendance_rejected_after_close() {
    let store = MeetingStore::new();
    store.create(sample_meeting("Rapat", 2024, 12, 1));
    lifecycle::close(&store, "1").expect("close");

    let err = lifecycle::record_attendance(&store, "1", &["1".to_string()]).unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
}

// --- Lifecycle: close ---

#[test]
fn test_close_is_terminal() {
    let store = MeetingStore::new();
    store.create(sample_meeting("Rapat", 2024, 12, 1));

    let closed = lifecycle::close(&store, "1").expect("first close");
    assert_eq!(closed.status, MeetingStatus::Completed);

    let err = lifecycle::close(&store, "1").unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
}

#[test]
fn test_close_unknown_id_not_found() {
    let store = MeetingStore::new();
    let err = lifecycle::close(&store, "999").unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn test_close_does_not_wait_for_votes() {
    let store = MeetingStore::new();
    // The votable item has received no ballots; closing still succeeds.
    store.create(sample_meeting("Rapat", 2024, 12, 1));
    let closed = lifecycle::close(&store, "1").expect("close without votes");
    assert_eq!(closed.status, MeetingStatus::Completed);
}

// --- Queries ---

#[test]
fn test_find_by_status_sorts_date_descending() {
    let store = MeetingStore::new();
    // Inserted out of date order on purpose.
    store.create(sample_meeting("Oktober", 2024, 10, 20));
    store.create(sample_meeting("Desember", 2024, 12, 15));
    store.create(sample_meeting("November", 2024, 11, 25));

    let all = queries::find_by_status(&store, None);
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].date, date(2024, 12, 15));
    assert_eq!(all[1].date, date(2024, 11, 25));
    assert_eq!(all[2].date, date(2024, 10, 20));
}

#[test]
fn test_find_by_status_filters_and_keeps_ordering() {
    let store = MeetingStore::new();
    store.create(sample_meeting("A", 2024, 10, 20));
    store.create(sample_meeting("B", 2024, 12, 15));
    store.create(sample_meeting("C", 2024, 11, 25));
    lifecycle::close(&store, "1").expect("close A");
    lifecycle::close(&store, "2").expect("close B");

    let completed = queries::find_by_status(&store, Some(MeetingStatus::Completed));
    assert_eq!(completed.len(), 2);
    assert_eq!(completed[0].title, "B");
    assert_eq!(completed[1].title, "A");

    let scheduled = queries::find_by_status(&store, Some(MeetingStatus::Scheduled));
    assert_eq!(scheduled.len(), 1);
    assert_eq!(scheduled[0].title, "C");

    let ongoing = queries::find_by_status(&store, Some(MeetingStatus::Ongoing));
    assert!(ongoing.is_empty());
}
