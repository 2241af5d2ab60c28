use crate::{Result as DbErrorResult, columns};

use fa_core::User;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (id, name, email, password_hash, role, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, email, password_hash, role, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_user).transpose()
    }

    /// Lookup is case-insensitive; emails are stored normalized
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, email, password_hash, role, created_at
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(User::normalize_email(email))
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_user).transpose()
    }

    pub async fn email_exists(&self, email: &str) -> DbErrorResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(User::normalize_email(email))
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}

fn map_user(r: &SqliteRow) -> DbErrorResult<User> {
    Ok(User {
        id: columns::uuid(r, "id")?,
        name: r.try_get("name")?,
        email: r.try_get("email")?,
        password_hash: r.try_get("password_hash")?,
        role: columns::parsed(r, "role")?,
        created_at: columns::timestamp(r, "created_at")?,
    })
}
