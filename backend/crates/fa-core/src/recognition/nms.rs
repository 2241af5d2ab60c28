use crate::FaceDetection;

/// Greedy non-maximum suppression.
///
/// Detections under `score_threshold` are dropped first. The survivors are
/// visited in descending confidence order and a box is kept unless it
/// overlaps an already-kept box by more than `iou_threshold`.
pub fn apply_nms(
    detections: Vec<FaceDetection>,
    score_threshold: f32,
    iou_threshold: f32,
) -> Vec<FaceDetection> {
    let mut candidates: Vec<FaceDetection> = detections
        .into_iter()
        .filter(|d| d.detection_confidence >= score_threshold)
        .collect();

    candidates.sort_by(|a, b| b.detection_confidence.total_cmp(&a.detection_confidence));

    let mut kept: Vec<FaceDetection> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let suppressed = kept
            .iter()
            .any(|k| k.bbox.iou(&candidate.bbox) > iou_threshold);
        if !suppressed {
            kept.push(candidate);
        }
    }

    kept
}
