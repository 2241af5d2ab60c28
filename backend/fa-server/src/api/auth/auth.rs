//! Registration, login and identity handlers

use crate::{
    ApiError, ApiResult, AppState, CurrentUser, LoginRequest, LoginResponse, MeResponse,
    RegisterRequest, UserDto,
};

use fa_auth::{hash_password, verify_password};
use fa_core::{Role, User};
use fa_db::{DbError, UserRepository};

use std::str::FromStr;

use axum::{Json, extract::State};
use log::info;
use tokio::task::spawn_blocking;

pub const EMAIL_TAKEN: &str = "Email already registered";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// POST /auth/register
///
/// Create an account. Self-registration as admin is refused.
/// Argon2 runs on the blocking pool, off the async workers.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<UserDto>> {
    User::validate_registration(&req.name, &req.email, &req.password)?;

    let role = match req.role.as_deref() {
        None => Role::Teacher,
        Some(value) => Role::from_str(value)?,
    };
    if role == Role::Admin {
        return Err(ApiError::bad_request("Cannot self-register as admin"));
    }

    let repo = UserRepository::new(state.pool.clone());
    if repo.email_exists(&req.email).await? {
        return Err(ApiError::bad_request(EMAIL_TAKEN));
    }

    let password = req.password;
    let password_hash = spawn_blocking(move || hash_password(&password)).await??;
    let user = User::new(req.name.trim().to_string(), &req.email, password_hash, role);

    match repo.create(&user).await {
        Ok(()) => {}
        // Lost a race with a concurrent registration
        Err(DbError::Conflict { .. }) => return Err(ApiError::bad_request(EMAIL_TAKEN)),
        Err(e) => return Err(e.into()),
    }

    info!("Registered {} as {}", user.email, user.role);

    Ok(Json(user.into()))
}

/// POST /auth/login
///
/// Unknown email and wrong password produce the same response.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let email = User::normalize_email(&req.email);
    state.login_limiter.check(&email)?;

    let repo = UserRepository::new(state.pool.clone());
    let Some(user) = repo.find_by_email(&email).await? else {
        return Err(ApiError::bad_request(INVALID_CREDENTIALS));
    };

    let (password, stored_hash) = (req.password, user.password_hash.clone());
    if !spawn_blocking(move || verify_password(&password, &stored_hash)).await?? {
        return Err(ApiError::bad_request(INVALID_CREDENTIALS));
    }

    let access_token = state.jwt_issuer.issue(user.id, user.role)?;
    info!("User {} logged in", user.id);

    Ok(Json(LoginResponse {
        access_token,
        token_type: "bearer",
        user: user.into(),
    }))
}

/// GET /auth/me
pub async fn me(CurrentUser(ctx): CurrentUser) -> Json<MeResponse> {
    Json(MeResponse {
        user_id: ctx.user_id,
        role: ctx.role,
    })
}
