//! Class session REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CreateSessionRequest, CurrentUser, DeleteResponse,
    ListSessionsQuery, SessionDto, UpdateSessionRequest,
};

use fa_core::{ClassSession, SessionStatus};
use fa_db::{ClassRepository, ClassSessionRepository};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use log::info;
use uuid::Uuid;

pub const SESSION_NOT_FOUND: &str = "Class session not found";

/// POST /class-sessions/
pub async fn create_session(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(req): Json<CreateSessionRequest>,
) -> ApiResult<Json<SessionDto>> {
    let class_id = Uuid::parse_str(&req.class_id)?;
    let session_date = parse_date(&req.session_date)?;

    if ClassRepository::new(state.pool.clone())
        .find_by_id(class_id)
        .await?
        .is_none()
    {
        return Err(ApiError::not_found(crate::api::classes::classes::CLASS_NOT_FOUND));
    }

    let mut session = ClassSession::new(class_id, session_date);
    if let Some(ref status) = req.status {
        session.status = SessionStatus::from_str(status)?;
    }

    ClassSessionRepository::new(state.pool.clone())
        .create(&session)
        .await?;

    info!(
        "Scheduled session {} for class {} on {}",
        session.id, class_id, session_date
    );

    Ok(Json(session.into()))
}

/// GET /class-sessions/?class_id
pub async fn list_sessions(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<ListSessionsQuery>,
) -> ApiResult<Json<Vec<SessionDto>>> {
    let repo = ClassSessionRepository::new(state.pool.clone());

    let sessions = match query.class_id {
        Some(ref id) => repo.find_by_class(Uuid::parse_str(id)?).await?,
        None => repo.find_all().await?,
    };

    Ok(Json(sessions.into_iter().map(SessionDto::from).collect()))
}

/// GET /class-sessions/{id}
pub async fn get_session(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<SessionDto>> {
    let session = find_session(&state, &id).await?;
    Ok(Json(session.into()))
}

/// PUT /class-sessions/{id}
///
/// Only the fields present in the body change.
pub async fn update_session(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateSessionRequest>,
) -> ApiResult<Json<SessionDto>> {
    let mut session = find_session(&state, &id).await?;

    if let Some(ref date) = req.session_date {
        session.session_date = parse_date(date)?;
    }
    if let Some(ref status) = req.status {
        session.status = SessionStatus::from_str(status)?;
    }
    if let Some(marked) = req.attendance_marked {
        session.attendance_marked = marked;
    }

    if !ClassSessionRepository::new(state.pool.clone())
        .update(&session)
        .await?
    {
        return Err(ApiError::not_found(SESSION_NOT_FOUND));
    }

    Ok(Json(session.into()))
}

/// DELETE /class-sessions/{id}
pub async fn delete_session(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let session_id = Uuid::parse_str(&id)?;

    if !ClassSessionRepository::new(state.pool.clone())
        .delete(session_id)
        .await?
    {
        return Err(ApiError::not_found(SESSION_NOT_FOUND));
    }

    info!("Deleted session {}", session_id);

    Ok(Json(DeleteResponse::new("Class session deleted successfully")))
}

pub(crate) async fn find_session(state: &AppState, id: &str) -> ApiResult<ClassSession> {
    let session_id = Uuid::parse_str(id)?;

    ClassSessionRepository::new(state.pool.clone())
        .find_by_id(session_id)
        .await?
        .ok_or_else(|| ApiError::not_found(SESSION_NOT_FOUND))
}

#[track_caller]
fn parse_date(value: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::validation("session_date must be a YYYY-MM-DD date"))
}
