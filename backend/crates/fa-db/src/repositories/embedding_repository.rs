use crate::{Result as DbErrorResult, columns};

use fa_core::StudentEmbedding;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct EmbeddingRepository {
    pool: SqlitePool,
}

impl EmbeddingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store `embedding` as the student's current reference vector.
    ///
    /// An existing vector is replaced and its version bumped; the stored
    /// row (with the effective version) is returned.
    pub async fn replace(&self, embedding: &StudentEmbedding) -> DbErrorResult<StudentEmbedding> {
        let vector = columns::to_json(&embedding.embedding, "embedding")?;

        sqlx::query(
            r#"
                INSERT INTO student_embeddings (
                                                id, student_id, embedding, version,
                                                photo_url, created_at
                                                ) VALUES (?, ?, ?, ?, ?, ?)
                ON CONFLICT (student_id) DO UPDATE SET
                    embedding = excluded.embedding,
                    version = student_embeddings.version + 1,
                    photo_url = excluded.photo_url,
                    created_at = excluded.created_at
            "#,
        )
        .bind(embedding.id.to_string())
        .bind(embedding.student_id.to_string())
        .bind(vector)
        .bind(embedding.version)
        .bind(&embedding.photo_url)
        .bind(embedding.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        let row = sqlx::query(
            r#"
                SELECT id, student_id, embedding, version, photo_url, created_at
                FROM student_embeddings
                WHERE student_id = ?
            "#,
        )
        .bind(embedding.student_id.to_string())
        .fetch_one(&self.pool)
        .await?;

        map_embedding(&row)
    }

    pub async fn find_by_student(&self, student_id: Uuid) -> DbErrorResult<Option<StudentEmbedding>> {
        let row = sqlx::query(
            r#"
                SELECT id, student_id, embedding, version, photo_url, created_at
                FROM student_embeddings
                WHERE student_id = ?
            "#,
        )
        .bind(student_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_embedding).transpose()
    }

    /// Every enrolled vector; read once per recognition request
    pub async fn find_all(&self) -> DbErrorResult<Vec<StudentEmbedding>> {
        let rows = sqlx::query(
            r#"
                SELECT id, student_id, embedding, version, photo_url, created_at
                FROM student_embeddings
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_embedding).collect()
    }
}

fn map_embedding(r: &SqliteRow) -> DbErrorResult<StudentEmbedding> {
    Ok(StudentEmbedding {
        id: columns::uuid(r, "id")?,
        student_id: columns::uuid(r, "student_id")?,
        embedding: columns::json(r, "embedding")?,
        version: r.try_get("version")?,
        photo_url: r.try_get("photo_url")?,
        created_at: columns::timestamp(r, "created_at")?,
    })
}
