use fa_core::{Role, User};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Account as exposed to clients; the password hash never leaves the server
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
            created_at: u.created_at,
        }
    }
}
