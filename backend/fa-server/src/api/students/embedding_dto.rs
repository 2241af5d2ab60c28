use fa_core::StudentEmbedding;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Enrolment summary; the vector itself is not echoed back
#[derive(Debug, Serialize)]
pub struct EmbeddingDto {
    pub id: Uuid,
    pub student_id: Uuid,
    pub version: i32,
    pub dimension: usize,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<StudentEmbedding> for EmbeddingDto {
    fn from(e: StudentEmbedding) -> Self {
        Self {
            id: e.id,
            student_id: e.student_id,
            version: e.version,
            dimension: e.embedding.len(),
            photo_url: e.photo_url,
            created_at: e.created_at,
        }
    }
}
