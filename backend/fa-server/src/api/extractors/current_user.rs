//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use fa_auth::AuthContext;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Caller identity taken from a valid `Authorization: Bearer` token.
///
/// A missing header rejects with 401 "Not authenticated"; any other token
/// problem rejects with 401 "Invalid or expired token".
pub struct CurrentUser(pub AuthContext);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = match parts.headers.get(AUTHORIZATION) {
                Some(value) => Some(value.to_str().map_err(|_| {
                    ApiError::unauthorized(crate::api::error::INVALID_TOKEN)
                })?),
                None => None,
            };

            let claims = state.jwt_validator.validate_header(header)?;
            let context = AuthContext::from_claims(&claims)?;

            log::debug!("Authenticated {} as {}", context.user_id, context.role);

            Ok(CurrentUser(context))
        }
    }
}
