use fa_core::{RecognitionLog, RecognizedFace};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct RecognitionLogDto {
    pub id: Uuid,
    pub detections: Vec<RecognizedFace>,
    pub uploaded_by: Uuid,
    pub class_id: Option<Uuid>,
    pub session_id: Option<Uuid>,
    pub timestamp: DateTime<Utc>,
}

impl From<RecognitionLog> for RecognitionLogDto {
    fn from(l: RecognitionLog) -> Self {
        Self {
            id: l.id,
            detections: l.detections,
            uploaded_by: l.uploaded_by,
            class_id: l.class_id,
            session_id: l.session_id,
            timestamp: l.timestamp,
        }
    }
}
