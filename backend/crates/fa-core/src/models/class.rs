use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub id: Uuid,
    pub class_name: String,
    pub teacher_id: String,
    /// Roster: internal ids of enrolled students
    pub student_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Class {
    pub fn new(class_name: String, teacher_id: String, student_ids: Vec<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            class_name,
            teacher_id,
            student_ids,
            created_at: Utc::now(),
        }
    }
}
