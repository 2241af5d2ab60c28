//! Class REST API handlers

use crate::{ApiError, ApiResult, AppState, ClassDto, ClassRequest, CurrentUser, DeleteResponse};

use fa_core::Class;
use fa_db::ClassRepository;

use axum::{
    Json,
    extract::{Path, State},
};
use log::info;
use uuid::Uuid;

pub const CLASS_NOT_FOUND: &str = "Class not found";

/// POST /classes/
///
/// The caller becomes the class's teacher.
pub async fn create_class(
    State(state): State<AppState>,
    CurrentUser(ctx): CurrentUser,
    Json(req): Json<ClassRequest>,
) -> ApiResult<Json<ClassDto>> {
    let (class_name, student_ids) = parse_request(req)?;

    let class = Class::new(class_name, ctx.user_id.to_string(), student_ids);
    ClassRepository::new(state.pool.clone())
        .create(&class)
        .await?;

    info!("Created class {} ({})", class.class_name, class.id);

    Ok(Json(class.into()))
}

/// GET /classes/
pub async fn list_classes(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<Vec<ClassDto>>> {
    let classes = ClassRepository::new(state.pool.clone()).find_all().await?;
    Ok(Json(classes.into_iter().map(ClassDto::from).collect()))
}

/// GET /classes/{id}
pub async fn get_class(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ClassDto>> {
    let class_id = Uuid::parse_str(&id)?;

    let class = ClassRepository::new(state.pool.clone())
        .find_by_id(class_id)
        .await?
        .ok_or_else(|| ApiError::not_found(CLASS_NOT_FOUND))?;

    Ok(Json(class.into()))
}

/// PUT /classes/{id}
pub async fn update_class(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<ClassRequest>,
) -> ApiResult<Json<ClassDto>> {
    let class_id = Uuid::parse_str(&id)?;
    let (class_name, student_ids) = parse_request(req)?;

    let repo = ClassRepository::new(state.pool.clone());
    let mut class = repo
        .find_by_id(class_id)
        .await?
        .ok_or_else(|| ApiError::not_found(CLASS_NOT_FOUND))?;

    class.class_name = class_name;
    class.student_ids = student_ids;

    if !repo.update(&class).await? {
        return Err(ApiError::not_found(CLASS_NOT_FOUND));
    }

    Ok(Json(class.into()))
}

/// DELETE /classes/{id}
pub async fn delete_class(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let class_id = Uuid::parse_str(&id)?;

    if !ClassRepository::new(state.pool.clone())
        .delete(class_id)
        .await?
    {
        return Err(ApiError::not_found(CLASS_NOT_FOUND));
    }

    info!("Deleted class {}", class_id);

    Ok(Json(DeleteResponse::new("Class deleted successfully")))
}

fn parse_request(req: ClassRequest) -> ApiResult<(String, Vec<Uuid>)> {
    let class_name = req.class_name.trim().to_string();
    if class_name.is_empty() {
        return Err(ApiError::validation("class_name cannot be empty"));
    }

    let student_ids = req
        .student_ids
        .iter()
        .map(|id| Uuid::parse_str(id))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((class_name, student_ids))
}
