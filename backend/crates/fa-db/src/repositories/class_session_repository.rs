use crate::{Result as DbErrorResult, columns};

use fa_core::{ClassSession, SessionStatus};

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use uuid::Uuid;

const SELECT_SESSION: &str = r#"
    SELECT id, class_id, session_date, status, attendance_marked, created_at
    FROM class_sessions
"#;

pub struct ClassSessionRepository {
    pool: SqlitePool,
}

impl ClassSessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fails with `DbError::ForeignKey` when the class does not exist
    pub async fn create(&self, session: &ClassSession) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO class_sessions (
                                            id, class_id, session_date, status,
                                            attendance_marked, created_at
                                            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(session.id.to_string())
        .bind(session.class_id.to_string())
        .bind(columns::format_date(session.session_date))
        .bind(session.status.as_str())
        .bind(session.attendance_marked)
        .bind(session.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<ClassSession>> {
        let row = sqlx::query(&format!("{SELECT_SESSION} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_session).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<ClassSession>> {
        let rows = sqlx::query(&format!(
            "{SELECT_SESSION} ORDER BY session_date DESC, created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_session).collect()
    }

    pub async fn find_by_class(&self, class_id: Uuid) -> DbErrorResult<Vec<ClassSession>> {
        let rows = sqlx::query(&format!(
            "{SELECT_SESSION} WHERE class_id = ? ORDER BY session_date DESC, created_at DESC"
        ))
        .bind(class_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_session).collect()
    }

    /// Scheduled sessions on or after `today`, soonest first
    pub async fn find_upcoming(
        &self,
        today: NaiveDate,
        limit: i64,
    ) -> DbErrorResult<Vec<ClassSession>> {
        let rows = sqlx::query(&format!(
            "{SELECT_SESSION} WHERE status = ? AND session_date >= ? \
             ORDER BY session_date ASC, created_at ASC LIMIT ?"
        ))
        .bind(SessionStatus::Scheduled.as_str())
        .bind(columns::format_date(today))
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_session).collect()
    }

    pub async fn update(&self, session: &ClassSession) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE class_sessions
                SET class_id = ?, session_date = ?, status = ?, attendance_marked = ?
                WHERE id = ?
            "#,
        )
        .bind(session.class_id.to_string())
        .bind(columns::format_date(session.session_date))
        .bind(session.status.as_str())
        .bind(session.attendance_marked)
        .bind(session.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn mark_attendance_taken(&self, id: Uuid) -> DbErrorResult<()> {
        let mut conn = self.pool.acquire().await?;
        set_attendance_marked(&mut *conn, id).await
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM class_sessions WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM class_sessions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

pub(crate) async fn set_attendance_marked(
    conn: &mut SqliteConnection,
    id: Uuid,
) -> DbErrorResult<()> {
    sqlx::query("UPDATE class_sessions SET attendance_marked = 1 WHERE id = ?")
        .bind(id.to_string())
        .execute(&mut *conn)
        .await?;

    Ok(())
}

fn map_session(r: &SqliteRow) -> DbErrorResult<ClassSession> {
    Ok(ClassSession {
        id: columns::uuid(r, "id")?,
        class_id: columns::uuid(r, "class_id")?,
        session_date: columns::date(r, "session_date")?,
        status: columns::parsed(r, "status")?,
        attendance_marked: r.try_get("attendance_marked")?,
        created_at: columns::timestamp(r, "created_at")?,
    })
}
