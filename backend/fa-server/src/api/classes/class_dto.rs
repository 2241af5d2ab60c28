use fa_core::Class;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ClassDto {
    pub id: Uuid,
    pub class_name: String,
    pub teacher_id: String,
    pub student_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Class> for ClassDto {
    fn from(c: Class) -> Self {
        Self {
            id: c.id,
            class_name: c.class_name,
            teacher_id: c.teacher_id,
            student_ids: c.student_ids,
            created_at: c.created_at,
        }
    }
}
