use crate::{Result as DbErrorResult, columns};

use crate::repositories::{
    class_session_repository::set_attendance_marked, recognition_log_repository::insert_log,
};

use fa_core::{AttendanceRecord, RecognitionLog};

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use uuid::Uuid;

/// An attendance record with the date of the session it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct DatedAttendance {
    pub session_date: NaiveDate,
    pub record: AttendanceRecord,
}

pub struct AttendanceRepository {
    pool: SqlitePool,
}

impl AttendanceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or overwrite the record for (student, session) and return the stored row.
    ///
    /// The row keeps its original id on overwrite.
    pub async fn upsert(&self, record: &AttendanceRecord) -> DbErrorResult<AttendanceRecord> {
        let mut conn = self.pool.acquire().await?;
        write_record(&mut *conn, record).await?;

        let row = sqlx::query(
            r#"
                SELECT id, student_id, class_session_id, status, recognized_confidence, marked_at
                FROM attendance
                WHERE student_id = ? AND class_session_id = ?
            "#,
        )
        .bind(record.student_id.to_string())
        .bind(record.class_session_id.to_string())
        .fetch_one(&mut *conn)
        .await?;

        map_record(&row)
    }

    /// Write a recognition run in one transaction and flag the session as
    /// taken. Nothing is stored if any statement fails.
    pub async fn record_recognition(
        &self,
        session_id: Uuid,
        records: &[AttendanceRecord],
        log: &RecognitionLog,
    ) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        for record in records {
            write_record(&mut *tx, record).await?;
        }
        set_attendance_marked(&mut *tx, session_id).await?;
        insert_log(&mut *tx, log).await?;

        tx.commit().await?;

        Ok(())
    }

    pub async fn find_by_student(&self, student_id: Uuid) -> DbErrorResult<Vec<AttendanceRecord>> {
        let rows = sqlx::query(
            r#"
                SELECT id, student_id, class_session_id, status, recognized_confidence, marked_at
                FROM attendance
                WHERE student_id = ?
                ORDER BY marked_at DESC
            "#,
        )
        .bind(student_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_record).collect()
    }

    pub async fn find_by_session(&self, session_id: Uuid) -> DbErrorResult<Vec<AttendanceRecord>> {
        let rows = sqlx::query(
            r#"
                SELECT id, student_id, class_session_id, status, recognized_confidence, marked_at
                FROM attendance
                WHERE class_session_id = ?
                ORDER BY marked_at ASC
            "#,
        )
        .bind(session_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_record).collect()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<AttendanceRecord>> {
        let rows = sqlx::query(
            r#"
                SELECT id, student_id, class_session_id, status, recognized_confidence, marked_at
                FROM attendance
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_record).collect()
    }

    /// Records of sessions dated within `[from, to]`, inclusive
    pub async fn find_between_dates(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DbErrorResult<Vec<DatedAttendance>> {
        let rows = sqlx::query(
            r#"
                SELECT a.id, a.student_id, a.class_session_id, a.status,
                       a.recognized_confidence, a.marked_at, s.session_date
                FROM attendance a
                JOIN class_sessions s ON s.id = a.class_session_id
                WHERE s.session_date >= ? AND s.session_date <= ?
                ORDER BY s.session_date ASC
            "#,
        )
        .bind(columns::format_date(from))
        .bind(columns::format_date(to))
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|r| -> DbErrorResult<DatedAttendance> {
                Ok(DatedAttendance {
                    session_date: columns::date(r, "session_date")?,
                    record: map_record(r)?,
                })
            })
            .collect()
    }
}

/// Insert or overwrite the (student, session) row; the row keeps its original id
async fn write_record(
    conn: &mut SqliteConnection,
    record: &AttendanceRecord,
) -> DbErrorResult<()> {
    sqlx::query(
        r#"
            INSERT INTO attendance (
                                    id, student_id, class_session_id, status,
                                    recognized_confidence, marked_at
                                    ) VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT (student_id, class_session_id) DO UPDATE SET
                status = excluded.status,
                recognized_confidence = excluded.recognized_confidence,
                marked_at = excluded.marked_at
        "#,
    )
    .bind(record.id.to_string())
    .bind(record.student_id.to_string())
    .bind(record.class_session_id.to_string())
    .bind(record.status.as_str())
    .bind(record.recognized_confidence)
    .bind(record.marked_at.timestamp_millis())
    .execute(&mut *conn)
    .await?;

    Ok(())
}

fn map_record(r: &SqliteRow) -> DbErrorResult<AttendanceRecord> {
    Ok(AttendanceRecord {
        id: columns::uuid(r, "id")?,
        student_id: columns::uuid(r, "student_id")?,
        class_session_id: columns::uuid(r, "class_session_id")?,
        status: columns::parsed(r, "status")?,
        recognized_confidence: r.try_get("recognized_confidence")?,
        marked_at: columns::timestamp(r, "marked_at")?,
    })
}
