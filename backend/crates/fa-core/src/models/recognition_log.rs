use crate::RecognizedFace;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Audit entry written each time attendance is taken from photos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionLog {
    pub id: Uuid,
    pub detections: Vec<RecognizedFace>,
    pub uploaded_by: Uuid,
    pub class_id: Option<Uuid>,
    pub session_id: Option<Uuid>,
    pub timestamp: DateTime<Utc>,
}

impl RecognitionLog {
    pub fn new(
        detections: Vec<RecognizedFace>,
        uploaded_by: Uuid,
        class_id: Option<Uuid>,
        session_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            detections,
            uploaded_by,
            class_id,
            session_id,
            timestamp: Utc::now(),
        }
    }
}
