use crate::{FaceDetection, RecognizedFace, StudentEmbedding, cosine_similarity};

use uuid::Uuid;

/// Outcome of comparing one face against every enrolled embedding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    /// Best-scoring student, or None when the best score is under threshold
    pub student_id: Option<Uuid>,
    pub score: f32,
}

/// Nearest-neighbour matcher over the enrolled embeddings
pub struct EmbeddingMatcher<'a> {
    enrolled: &'a [StudentEmbedding],
    threshold: f32,
}

impl<'a> EmbeddingMatcher<'a> {
    pub fn new(enrolled: &'a [StudentEmbedding], threshold: f32) -> Self {
        Self {
            enrolled,
            threshold,
        }
    }

    pub fn best_match(&self, embedding: &[f32]) -> MatchResult {
        let mut best_id = None;
        let mut best_score = 0.0f32;

        for candidate in self.enrolled {
            if candidate.embedding.len() != embedding.len() {
                continue;
            }
            let score = cosine_similarity(embedding, &candidate.embedding);
            if score > best_score {
                best_score = score;
                best_id = Some(candidate.student_id);
            }
        }

        if best_score < self.threshold {
            return MatchResult {
                student_id: None,
                score: best_score,
            };
        }

        MatchResult {
            student_id: best_id,
            score: best_score,
        }
    }

    pub fn recognize(&self, detections: &[FaceDetection]) -> Vec<RecognizedFace> {
        detections
            .iter()
            .map(|d| {
                let m = self.best_match(&d.embedding);
                RecognizedFace {
                    bbox: d.bbox,
                    detection_confidence: d.detection_confidence,
                    match_confidence: m.score,
                    student_id: m.student_id,
                }
            })
            .collect()
    }
}
