use crate::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Always "bearer"
    pub token_type: &'static str,
    pub user: UserDto,
}
