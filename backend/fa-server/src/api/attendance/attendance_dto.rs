use fa_core::{AttendanceRecord, AttendanceStatus};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct AttendanceDto {
    pub id: Uuid,
    pub student_id: Uuid,
    pub class_session_id: Uuid,
    pub status: AttendanceStatus,
    /// Match score when marked from photos, null when marked by hand
    pub recognized_confidence: Option<f32>,
    pub marked_at: DateTime<Utc>,
}

impl From<AttendanceRecord> for AttendanceDto {
    fn from(r: AttendanceRecord) -> Self {
        Self {
            id: r.id,
            student_id: r.student_id,
            class_session_id: r.class_session_id,
            status: r.status,
            recognized_confidence: r.recognized_confidence,
            marked_at: r.marked_at,
        }
    }
}
