//! Manual attendance and attendance history handlers

use crate::{
    ApiResult, AppState, AttendanceDto, MarkAttendanceQuery, TeacherOrAdmin,
    api::{class_sessions::class_sessions::find_session, students::students::find_student},
};

use fa_core::{AttendanceRecord, AttendanceStatus};
use fa_db::AttendanceRepository;

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use log::info;

/// POST /attendance/{student_id}?status&session_id
///
/// Manual override; replaces whatever was recorded for this student and session.
pub async fn mark_attendance(
    State(state): State<AppState>,
    TeacherOrAdmin(ctx): TeacherOrAdmin,
    Path(student_key): Path<String>,
    Query(query): Query<MarkAttendanceQuery>,
) -> ApiResult<Json<AttendanceDto>> {
    let status = AttendanceStatus::from_str(&query.status)?;
    let student = find_student(&state, &student_key).await?;
    let session = find_session(&state, &query.session_id).await?;

    let record = AttendanceRecord::manual(student.id, session.id, status);
    let stored = AttendanceRepository::new(state.pool.clone())
        .upsert(&record)
        .await?;

    info!(
        "{} marked {} {} for session {}",
        ctx.user_id, student.student_id, status, session.id
    );

    Ok(Json(stored.into()))
}

/// GET /attendance/student/{id}
pub async fn student_attendance(
    State(state): State<AppState>,
    _staff: TeacherOrAdmin,
    Path(student_key): Path<String>,
) -> ApiResult<Json<Vec<AttendanceDto>>> {
    let student = find_student(&state, &student_key).await?;

    let records = AttendanceRepository::new(state.pool.clone())
        .find_by_student(student.id)
        .await?;

    Ok(Json(records.into_iter().map(AttendanceDto::from).collect()))
}

/// GET /attendance/session/{id}
pub async fn session_attendance(
    State(state): State<AppState>,
    _staff: TeacherOrAdmin,
    Path(session_id): Path<String>,
) -> ApiResult<Json<Vec<AttendanceDto>>> {
    let session = find_session(&state, &session_id).await?;

    let records = AttendanceRepository::new(state.pool.clone())
        .find_by_session(session.id)
        .await?;

    Ok(Json(records.into_iter().map(AttendanceDto::from).collect()))
}
