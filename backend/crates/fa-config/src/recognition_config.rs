use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.5;
pub const DEFAULT_FACE_DETECTION_THRESHOLD: f32 = 0.5;
pub const DEFAULT_NMS_IOU_THRESHOLD: f32 = 0.45;
pub const DEFAULT_EMBEDDING_DIM: usize = 512;

/// Thresholds for turning detector output into attendance.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    /// Minimum cosine similarity for a face to count as a student
    pub match_threshold: f32,
    /// Detections below this confidence are dropped before NMS
    pub face_detection_threshold: f32,
    pub nms_iou_threshold: f32,
    /// Required embedding length; 0 accepts any length
    pub embedding_dim: usize,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            face_detection_threshold: DEFAULT_FACE_DETECTION_THRESHOLD,
            nms_iou_threshold: DEFAULT_NMS_IOU_THRESHOLD,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
        }
    }
}

impl RecognitionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(-1.0..=1.0).contains(&self.match_threshold) {
            return Err(ConfigError::recognition(format!(
                "recognition.match_threshold must be between -1.0 and 1.0, got {}",
                self.match_threshold
            )));
        }

        for (name, value) in [
            ("face_detection_threshold", self.face_detection_threshold),
            ("nms_iou_threshold", self.nms_iou_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::recognition(format!(
                    "recognition.{name} must be between 0.0 and 1.0, got {value}"
                )));
            }
        }

        Ok(())
    }
}
