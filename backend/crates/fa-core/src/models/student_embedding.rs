use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference face embedding for a student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentEmbedding {
    pub id: Uuid,
    pub student_id: Uuid,
    pub embedding: Vec<f32>,
    pub version: i32,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl StudentEmbedding {
    pub fn new(student_id: Uuid, embedding: Vec<f32>, photo_url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id,
            embedding,
            version: 1,
            photo_url,
            created_at: Utc::now(),
        }
    }

    /// Reject vectors the matcher could not compare meaningfully
    #[track_caller]
    pub fn validate_vector(embedding: &[f32], expected_dim: usize) -> CoreErrorResult<()> {
        if embedding.is_empty() {
            return Err(CoreError::Embedding {
                message: "embedding cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if expected_dim > 0 && embedding.len() != expected_dim {
            return Err(CoreError::Embedding {
                message: format!(
                    "embedding has {} dimensions, expected {}",
                    embedding.len(),
                    expected_dim
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if embedding.iter().any(|v| !v.is_finite()) {
            return Err(CoreError::Embedding {
                message: "embedding contains non-finite values".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
