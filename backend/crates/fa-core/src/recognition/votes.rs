use crate::RecognizedFace;

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

/// Recognition results aggregated across every photo of a session
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecognitionTally {
    /// Matched students, most-seen first
    pub detected_students: Vec<Uuid>,
    pub vote_counts: HashMap<Uuid, u32>,
    /// Highest match score seen per student
    pub best_scores: HashMap<Uuid, f32>,
    pub all_detections: Vec<RecognizedFace>,
}

/// Count how often each student was matched over all images.
///
/// Ties on vote count are ordered by student id so the result is stable.
pub fn tally_votes(per_image: Vec<Vec<RecognizedFace>>) -> RecognitionTally {
    let mut tally = RecognitionTally::default();

    for faces in per_image {
        for face in faces {
            if let Some(student_id) = face.student_id {
                *tally.vote_counts.entry(student_id).or_insert(0) += 1;
                let best = tally.best_scores.entry(student_id).or_insert(0.0);
                if face.match_confidence > *best {
                    *best = face.match_confidence;
                }
            }
            tally.all_detections.push(face);
        }
    }

    let mut ranked: Vec<(Uuid, u32)> = tally.vote_counts.iter().map(|(k, v)| (*k, *v)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tally.detected_students = ranked.into_iter().map(|(id, _)| id).collect();

    tally
}
