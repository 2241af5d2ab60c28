use crate::SessionStatus;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One meeting of a class on a given date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: Uuid,
    pub class_id: Uuid,
    pub session_date: NaiveDate,
    pub status: SessionStatus,
    /// Set once attendance has been taken by recognition
    pub attendance_marked: bool,
    pub created_at: DateTime<Utc>,
}

impl ClassSession {
    pub fn new(class_id: Uuid, session_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            class_id,
            session_date,
            status: SessionStatus::Scheduled,
            attendance_marked: false,
            created_at: Utc::now(),
        }
    }

    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.status == SessionStatus::Scheduled && self.session_date >= today
    }
}
