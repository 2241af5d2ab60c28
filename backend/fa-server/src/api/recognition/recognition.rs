//! Attendance from classroom photos
//!
//! Clients run face detection and embedding themselves and post the raw
//! detections. Each photo is de-duplicated with NMS, every face is matched
//! against the enrolled embeddings, and matches are tallied across photos.
//! Detected students are marked present, the rest of the roster absent.

use crate::{
    ApiError, ApiResult, AppState, AttendanceSummary, DetectedStudentDto, TakeAttendanceRequest,
    TakeAttendanceResponse, TeacherOrAdmin, api::class_sessions::class_sessions::find_session,
};

use fa_core::{
    AttendanceRecord, AttendanceStatus, EmbeddingMatcher, RecognitionLog, apply_nms, tally_votes,
};
use fa_db::{AttendanceRepository, ClassRepository, EmbeddingRepository};

use std::collections::HashSet;

use axum::{Json, extract::State};
use log::{info, warn};

pub const NO_IMAGES: &str = "At least one image is required.";

/// POST /recognition/take-attendance
pub async fn take_attendance(
    State(state): State<AppState>,
    TeacherOrAdmin(ctx): TeacherOrAdmin,
    Json(req): Json<TakeAttendanceRequest>,
) -> ApiResult<Json<TakeAttendanceResponse>> {
    if req.images.is_empty() {
        return Err(ApiError::bad_request(NO_IMAGES));
    }

    let session = find_session(&state, &req.class_session_id).await?;

    let enrolled = EmbeddingRepository::new(state.pool.clone())
        .find_all()
        .await?;
    if enrolled.is_empty() {
        warn!("No enrolled embeddings; every face will be unmatched");
    }

    let config = &state.recognition;
    let matcher = EmbeddingMatcher::new(&enrolled, config.match_threshold);

    let per_image = req
        .images
        .into_iter()
        .map(|detections| {
            let kept = apply_nms(
                detections,
                config.face_detection_threshold,
                config.nms_iou_threshold,
            );
            matcher.recognize(&kept)
        })
        .collect::<Vec<_>>();
    let image_count = per_image.len();

    let tally = tally_votes(per_image);

    let mut records = Vec::with_capacity(tally.detected_students.len());
    let mut detected_students = Vec::with_capacity(tally.detected_students.len());

    for student_id in &tally.detected_students {
        let confidence = tally.best_scores.get(student_id).copied().unwrap_or(0.0);
        records.push(AttendanceRecord::recognized(
            *student_id,
            session.id,
            confidence,
        ));

        detected_students.push(DetectedStudentDto {
            student_id: *student_id,
            votes: tally.vote_counts.get(student_id).copied().unwrap_or(0),
            confidence,
        });
    }

    let detected: HashSet<_> = tally.detected_students.iter().copied().collect();
    let roster = ClassRepository::new(state.pool.clone())
        .roster(session.class_id)
        .await?;

    let mut absent = 0;
    for student_id in roster.into_iter().filter(|id| !detected.contains(id)) {
        records.push(AttendanceRecord::manual(
            student_id,
            session.id,
            AttendanceStatus::Absent,
        ));
        absent += 1;
    }

    let log = RecognitionLog::new(
        tally.all_detections,
        ctx.user_id,
        Some(session.class_id),
        Some(session.id),
    );

    AttendanceRepository::new(state.pool.clone())
        .record_recognition(session.id, &records, &log)
        .await?;

    info!(
        "Session {}: {} photo(s), {} present, {} absent",
        session.id,
        image_count,
        detected_students.len(),
        absent
    );

    Ok(Json(TakeAttendanceResponse {
        attendance_summary: AttendanceSummary {
            present: detected_students.len(),
            absent,
            session_id: session.id,
        },
        detected_students,
    }))
}
