use crate::{Result as DbErrorResult, columns};

use fa_core::Student;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const SELECT_STUDENT: &str = r#"
    SELECT id, student_id, name, email, class_id, class_name, photo_url, created_at
    FROM students
"#;

pub struct StudentRepository {
    pool: SqlitePool,
}

impl StudentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fails with `DbError::Conflict` when `student_id` is already taken
    pub async fn create(&self, student: &Student) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO students (
                                      id, student_id, name, email,
                                      class_id, class_name, photo_url, created_at
                                      ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(student.id.to_string())
        .bind(&student.student_id)
        .bind(&student.name)
        .bind(&student.email)
        .bind(&student.class_id)
        .bind(&student.class_name)
        .bind(&student.photo_url)
        .bind(student.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_all(&self, skip: i64, limit: i64) -> DbErrorResult<Vec<Student>> {
        let rows = sqlx::query(&format!(
            "{SELECT_STUDENT} ORDER BY created_at ASC, rowid ASC LIMIT ? OFFSET ?"
        ))
        .bind(limit.max(0))
        .bind(skip.max(0))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_student).collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Student>> {
        let row = sqlx::query(&format!("{SELECT_STUDENT} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_student).transpose()
    }

    pub async fn find_by_code(&self, code: &str) -> DbErrorResult<Option<Student>> {
        let row = sqlx::query(&format!("{SELECT_STUDENT} WHERE student_id = ?"))
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_student).transpose()
    }

    /// Resolve a path key that is either our UUID or the institution's code
    pub async fn find_by_key(&self, key: &str) -> DbErrorResult<Option<Student>> {
        if let Ok(id) = Uuid::parse_str(key)
            && let Some(student) = self.find_by_id(id).await?
        {
            return Ok(Some(student));
        }

        self.find_by_code(key).await
    }

    pub async fn set_photo_url(&self, id: Uuid, photo_url: Option<&str>) -> DbErrorResult<()> {
        sqlx::query("UPDATE students SET photo_url = ? WHERE id = ?")
            .bind(photo_url)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Remove the student; embeddings, attendance and roster rows cascade.
    /// Returns false when nothing was deleted.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn map_student(r: &SqliteRow) -> DbErrorResult<Student> {
    Ok(Student {
        id: columns::uuid(r, "id")?,
        student_id: r.try_get("student_id")?,
        name: r.try_get("name")?,
        email: r.try_get("email")?,
        class_id: r.try_get("class_id")?,
        class_name: r.try_get("class_name")?,
        photo_url: r.try_get("photo_url")?,
        created_at: columns::timestamp(r, "created_at")?,
    })
}
