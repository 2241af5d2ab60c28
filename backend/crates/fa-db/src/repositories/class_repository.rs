use crate::{Result as DbErrorResult, columns};

use fa_core::Class;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

pub struct ClassRepository {
    pool: SqlitePool,
}

impl ClassRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the class and its roster atomically.
    /// Unknown student ids fail with `DbError::ForeignKey`.
    pub async fn create(&self, class: &Class) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
                INSERT INTO classes (id, class_name, teacher_id, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(class.id.to_string())
        .bind(&class.class_name)
        .bind(&class.teacher_id)
        .bind(class.created_at.timestamp_millis())
        .execute(&mut *tx)
        .await?;

        insert_roster(&mut tx, class.id, &class.student_ids).await?;

        tx.commit().await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Class>> {
        let row = sqlx::query(
            r#"
                SELECT id, class_name, teacher_id, created_at
                FROM classes
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => {
                let mut class = map_class(&r)?;
                class.student_ids = self.roster(class.id).await?;
                Ok(Some(class))
            }
            None => Ok(None),
        }
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Class>> {
        let rows = sqlx::query(
            r#"
                SELECT id, class_name, teacher_id, created_at
                FROM classes
                ORDER BY created_at ASC, rowid ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut classes = Vec::with_capacity(rows.len());
        for r in &rows {
            let mut class = map_class(r)?;
            class.student_ids = self.roster(class.id).await?;
            classes.push(class);
        }

        Ok(classes)
    }

    /// Replace name, teacher and roster. Returns false when the class is unknown.
    pub async fn update(&self, class: &Class) -> DbErrorResult<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
                UPDATE classes
                SET class_name = ?, teacher_id = ?
                WHERE id = ?
            "#,
        )
        .bind(&class.class_name)
        .bind(&class.teacher_id)
        .bind(class.id.to_string())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query("DELETE FROM class_students WHERE class_id = ?")
            .bind(class.id.to_string())
            .execute(&mut *tx)
            .await?;

        insert_roster(&mut tx, class.id, &class.student_ids).await?;

        tx.commit().await?;

        Ok(true)
    }

    /// Sessions (and their attendance) go with the class
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM classes WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn roster(&self, class_id: Uuid) -> DbErrorResult<Vec<Uuid>> {
        let rows = sqlx::query(
            r#"
                SELECT student_id
                FROM class_students
                WHERE class_id = ?
                ORDER BY position ASC
            "#,
        )
        .bind(class_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|r| columns::uuid(r, "student_id"))
            .collect()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM classes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

async fn insert_roster(
    tx: &mut Transaction<'_, Sqlite>,
    class_id: Uuid,
    student_ids: &[Uuid],
) -> DbErrorResult<()> {
    let class_id = class_id.to_string();

    for (position, student_id) in student_ids.iter().enumerate() {
        sqlx::query(
            r#"
                INSERT OR IGNORE INTO class_students (class_id, student_id, position)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(&class_id)
        .bind(student_id.to_string())
        .bind(position as i64)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

fn map_class(r: &SqliteRow) -> DbErrorResult<Class> {
    Ok(Class {
        id: columns::uuid(r, "id")?,
        class_name: r.try_get("class_name")?,
        teacher_id: r.try_get("teacher_id")?,
        student_ids: Vec::new(),
        created_at: columns::timestamp(r, "created_at")?,
    })
}
