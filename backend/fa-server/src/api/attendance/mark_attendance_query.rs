use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MarkAttendanceQuery {
    /// present, absent or late
    pub status: String,

    /// Class session UUID
    pub session_id: String,
}
