use fa_core::{ClassSession, SessionStatus};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct SessionDto {
    pub id: Uuid,
    pub class_id: Uuid,
    pub session_date: NaiveDate,
    pub status: SessionStatus,
    pub attendance_marked: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ClassSession> for SessionDto {
    fn from(s: ClassSession) -> Self {
        Self {
            id: s.id,
            class_id: s.class_id,
            session_date: s.session_date,
            status: s.status,
            attendance_marked: s.attendance_marked,
            created_at: s.created_at,
        }
    }
}
