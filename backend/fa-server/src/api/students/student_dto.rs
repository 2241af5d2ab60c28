use fa_core::Student;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct StudentDto {
    pub id: Uuid,
    pub student_id: String,
    pub name: String,
    pub email: Option<String>,
    pub class_id: Option<String>,
    pub class_name: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Student> for StudentDto {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            student_id: s.student_id,
            name: s.name,
            email: s.email,
            class_id: s.class_id,
            class_name: s.class_name,
            photo_url: s.photo_url,
            created_at: s.created_at,
        }
    }
}
