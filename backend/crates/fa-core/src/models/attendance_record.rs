use crate::AttendanceStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Attendance of one student at one session. Unique per (student, session).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub student_id: Uuid,
    pub class_session_id: Uuid,
    pub status: AttendanceStatus,
    /// Match score when marked by recognition; None for manual entries
    pub recognized_confidence: Option<f32>,
    pub marked_at: DateTime<Utc>,
}

impl AttendanceRecord {
    pub fn manual(student_id: Uuid, class_session_id: Uuid, status: AttendanceStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id,
            class_session_id,
            status,
            recognized_confidence: None,
            marked_at: Utc::now(),
        }
    }

    pub fn recognized(student_id: Uuid, class_session_id: Uuid, confidence: f32) -> Self {
        Self {
            recognized_confidence: Some(confidence),
            ..Self::manual(student_id, class_session_id, AttendanceStatus::Present)
        }
    }

    pub fn present(&self) -> bool {
        self.status.is_attended()
    }
}
