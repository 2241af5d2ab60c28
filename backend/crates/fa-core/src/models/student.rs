use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A student enrolled in the system.
///
/// `student_id` is the institution's own code (e.g. "S-1042"); `id` is ours.
/// Both are accepted wherever a student is looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub student_id: String,
    pub name: String,
    pub email: Option<String>,
    pub class_id: Option<String>,
    pub class_name: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Student {
    pub fn new(student_id: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id,
            name,
            email: None,
            class_id: None,
            class_name: None,
            photo_url: None,
            created_at: Utc::now(),
        }
    }
}
