/// Form/query structures for the meeting API.
///
/// Centralizes deserialize structs so handler files stay focused on
/// request flow.

#[derive(Debug, serde::Deserialize)]
pub struct MeetingFilter {
    pub status: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceForm {
    pub member_ids: Vec<String>,
}
