use crate::{Result as DbErrorResult, columns};

use fa_core::RecognitionLog;

use sqlx::{SqliteConnection, SqlitePool};
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

const SELECT_LOG: &str = r#"
    SELECT id, detections, uploaded_by, class_id, session_id, timestamp
    FROM recognition_logs
"#;

const NEWEST_FIRST: &str = "ORDER BY timestamp DESC, rowid DESC";

pub struct RecognitionLogRepository {
    pool: SqlitePool,
}

impl RecognitionLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, log: &RecognitionLog) -> DbErrorResult<()> {
        let mut conn = self.pool.acquire().await?;
        insert_log(&mut *conn, log).await
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<RecognitionLog>> {
        let rows = sqlx::query(&format!("{SELECT_LOG} {NEWEST_FIRST}"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_log).collect()
    }

    pub async fn find_by_class(&self, class_id: Uuid) -> DbErrorResult<Vec<RecognitionLog>> {
        let rows = sqlx::query(&format!("{SELECT_LOG} WHERE class_id = ? {NEWEST_FIRST}"))
            .bind(class_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_log).collect()
    }

    pub async fn find_by_session(&self, session_id: Uuid) -> DbErrorResult<Vec<RecognitionLog>> {
        let rows = sqlx::query(&format!("{SELECT_LOG} WHERE session_id = ? {NEWEST_FIRST}"))
            .bind(session_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_log).collect()
    }
}

pub(crate) async fn insert_log(
    conn: &mut SqliteConnection,
    log: &RecognitionLog,
) -> DbErrorResult<()> {
    let detections = columns::to_json(&log.detections, "detections")?;

    sqlx::query(
        r#"
            INSERT INTO recognition_logs (id, detections, uploaded_by, class_id, session_id, timestamp)
            VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(log.id.to_string())
    .bind(detections)
    .bind(log.uploaded_by.to_string())
    .bind(log.class_id.map(|id| id.to_string()))
    .bind(log.session_id.map(|id| id.to_string()))
    .bind(log.timestamp.timestamp_millis())
    .execute(&mut *conn)
    .await?;

    Ok(())
}

fn map_log(r: &SqliteRow) -> DbErrorResult<RecognitionLog> {
    Ok(RecognitionLog {
        id: columns::uuid(r, "id")?,
        detections: columns::json(r, "detections")?,
        uploaded_by: columns::uuid(r, "uploaded_by")?,
        class_id: columns::opt_uuid(r, "class_id")?,
        session_id: columns::opt_uuid(r, "session_id")?,
        timestamp: columns::timestamp(r, "timestamp")?,
    })
}
