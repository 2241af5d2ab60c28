//! Recognition audit log handlers; all lists are newest first

use crate::{ApiResult, AppState, RecognitionLogDto, TeacherOrAdmin};

use fa_core::RecognitionLog;
use fa_db::RecognitionLogRepository;

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// GET /recognition-logs/
pub async fn list_logs(
    State(state): State<AppState>,
    _staff: TeacherOrAdmin,
) -> ApiResult<Json<Vec<RecognitionLogDto>>> {
    let logs = RecognitionLogRepository::new(state.pool.clone())
        .find_all()
        .await?;
    Ok(to_dtos(logs))
}

/// GET /recognition-logs/class/{id}
pub async fn logs_by_class(
    State(state): State<AppState>,
    _staff: TeacherOrAdmin,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<RecognitionLogDto>>> {
    let class_id = Uuid::parse_str(&id)?;
    let logs = RecognitionLogRepository::new(state.pool.clone())
        .find_by_class(class_id)
        .await?;
    Ok(to_dtos(logs))
}

/// GET /recognition-logs/session/{id}
pub async fn logs_by_session(
    State(state): State<AppState>,
    _staff: TeacherOrAdmin,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<RecognitionLogDto>>> {
    let session_id = Uuid::parse_str(&id)?;
    let logs = RecognitionLogRepository::new(state.pool.clone())
        .find_by_session(session_id)
        .await?;
    Ok(to_dtos(logs))
}

fn to_dtos(logs: Vec<RecognitionLog>) -> Json<Vec<RecognitionLogDto>> {
    Json(logs.into_iter().map(RecognitionLogDto::from).collect())
}
