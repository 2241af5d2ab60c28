use crate::{ApiError, AppState, CurrentUser};

use fa_auth::AuthContext;
use fa_core::Role;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

const STAFF_ROLES: [Role; 2] = [Role::Teacher, Role::Admin];

/// Authenticated caller whose role is teacher or admin; others get 403
pub struct TeacherOrAdmin(pub AuthContext);

impl FromRequestParts<AppState> for TeacherOrAdmin {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let CurrentUser(context) = CurrentUser::from_request_parts(parts, state).await?;
            context.require_role(&STAFF_ROLES)?;
            Ok(TeacherOrAdmin(context))
        }
    }
}
