//! Student REST API handlers
//!
//! Students are addressed by internal UUID or by their external student code.

use crate::{
    ApiError, ApiResult, AppState, CreateStudentRequest, CurrentUser, DeleteResponse,
    EmbeddingDto, EnrollEmbeddingRequest, ListStudentsQuery, StudentDto,
};

use fa_core::{Student, StudentEmbedding};
use fa_db::{EmbeddingRepository, StudentRepository};

use axum::{
    Json,
    extract::{Path, Query, State},
};
use log::info;

pub const STUDENT_NOT_FOUND: &str = "Student not found";

/// POST /students/
pub async fn create_student(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(req): Json<CreateStudentRequest>,
) -> ApiResult<Json<StudentDto>> {
    let code = req.student_id.trim();
    if code.is_empty() {
        return Err(ApiError::validation("student_id cannot be empty"));
    }
    if req.name.trim().is_empty() {
        return Err(ApiError::validation("name cannot be empty"));
    }

    let repo = StudentRepository::new(state.pool.clone());
    if repo.find_by_code(code).await?.is_some() {
        return Err(ApiError::bad_request("Student ID already exists"));
    }

    let mut student = Student::new(code.to_string(), req.name.trim().to_string());
    student.email = req.email;
    student.class_id = req.class_id;
    student.class_name = req.class_name;
    student.photo_url = req.photo_url;

    repo.create(&student).await?;
    info!("Created student {} ({})", student.student_id, student.id);

    Ok(Json(student.into()))
}

/// GET /students/?skip&limit
pub async fn list_students(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<ListStudentsQuery>,
) -> ApiResult<Json<Vec<StudentDto>>> {
    let (skip, limit) = query.bounds();

    let repo = StudentRepository::new(state.pool.clone());
    let students = repo.find_all(skip, limit).await?;

    Ok(Json(students.into_iter().map(StudentDto::from).collect()))
}

/// GET /students/{id}
pub async fn get_student(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(key): Path<String>,
) -> ApiResult<Json<StudentDto>> {
    let student = find_student(&state, &key).await?;
    Ok(Json(student.into()))
}

/// DELETE /students/{id}
///
/// Embeddings, attendance and roster entries go with the student.
pub async fn delete_student(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(key): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let student = find_student(&state, &key).await?;

    let repo = StudentRepository::new(state.pool.clone());
    if !repo.delete(student.id).await? {
        return Err(ApiError::not_found(STUDENT_NOT_FOUND));
    }

    info!("Deleted student {} ({})", student.student_id, student.id);

    Ok(Json(DeleteResponse::new("Student deleted successfully")))
}

/// POST /students/{id}/embeddings
///
/// Replaces any previous embedding and bumps its version.
pub async fn enroll_embedding(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(key): Path<String>,
    Json(req): Json<EnrollEmbeddingRequest>,
) -> ApiResult<Json<EmbeddingDto>> {
    StudentEmbedding::validate_vector(&req.embedding, state.recognition.embedding_dim)?;

    let student = find_student(&state, &key).await?;

    let embedding = StudentEmbedding::new(student.id, req.embedding, req.photo_url);
    let stored = EmbeddingRepository::new(state.pool.clone())
        .replace(&embedding)
        .await?;

    if let Some(ref url) = stored.photo_url {
        StudentRepository::new(state.pool.clone())
            .set_photo_url(student.id, Some(url))
            .await?;
    }

    info!(
        "Enrolled embedding v{} for student {}",
        stored.version, student.student_id
    );

    Ok(Json(stored.into()))
}

/// Look up by UUID or student code, 404 when neither matches
pub(crate) async fn find_student(state: &AppState, key: &str) -> ApiResult<Student> {
    StudentRepository::new(state.pool.clone())
        .find_by_key(key)
        .await?
        .ok_or_else(|| ApiError::not_found(STUDENT_NOT_FOUND))
}
