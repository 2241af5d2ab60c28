use fa_db::MIGRATOR;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Fresh migrated in-memory database with foreign keys enforced.
///
/// One connection only: every `:memory:` connection is its own database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(":memory:")
                .foreign_keys(true),
        )
        .await
        .expect("in-memory sqlite should open");

    MIGRATOR
        .run(&pool)
        .await
        .expect("schema migrations should apply");

    pool
}
