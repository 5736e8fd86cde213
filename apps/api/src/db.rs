use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// Creates a SQLite connection pool, creating the database file if it does not exist.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Opening SQLite database at {database_url}");

    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid DATABASE_URL '{database_url}'"))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Creates the `resumes` table if it is missing.
///
/// Tables created before `leadership_experience` was persisted are upgraded in place;
/// their existing rows read back an empty string for that column.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS resumes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL,
            education TEXT NOT NULL,
            work_experience TEXT NOT NULL,
            leadership_experience TEXT NOT NULL DEFAULT '',
            skills TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    let has_leadership: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM pragma_table_info('resumes') WHERE name = 'leadership_experience'",
    )
    .fetch_one(pool)
    .await?;

    if has_leadership == 0 {
        sqlx::query(
            "ALTER TABLE resumes ADD COLUMN leadership_experience TEXT NOT NULL DEFAULT ''",
        )
        .execute(pool)
        .await?;
        info!("Added leadership_experience column to existing resumes table");
    }

    Ok(())
}

#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    // One connection: every new connection to `sqlite::memory:` is a fresh database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    init_schema(&pool).await.unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let pool = memory_pool().await;
        init_schema(&pool).await.unwrap();
        init_schema(&pool).await.unwrap();

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'resumes'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(tables, 1);
    }

    #[tokio::test]
    async fn test_legacy_table_gains_leadership_column() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query(
            r#"
            CREATE TABLE resumes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                email TEXT,
                phone TEXT,
                education TEXT,
                work_experience TEXT,
                skills TEXT
            )
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO resumes (name, email, phone, education, work_experience, skills) \
             VALUES ('Old Row', 'a@b.io', 'Not found', '', '', '')",
        )
        .execute(&pool)
        .await
        .unwrap();

        init_schema(&pool).await.unwrap();

        let leadership: String =
            sqlx::query_scalar("SELECT leadership_experience FROM resumes WHERE name = 'Old Row'")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(leadership, "");
    }
}
