use async_trait::async_trait;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;

use crate::models::resume::{ResumeRecord, ResumeRow, StoredResume};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Insert-only persistence for parsed résumés.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Inserts a new row and returns its generated id.
    async fn store(&self, record: &ResumeRecord) -> Result<i64, StorageError>;

    /// Every stored row, in insertion order.
    async fn list_all(&self) -> Result<Vec<StoredResume>, StorageError>;
}

/// `ResumeStore` over the `resumes` table. The schema must already exist (`db::init_schema`).
#[derive(Clone)]
pub struct SqliteResumeStore {
    pool: SqlitePool,
}

impl SqliteResumeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for SqliteResumeStore {
    async fn store(&self, record: &ResumeRecord) -> Result<i64, StorageError> {
        let id = sqlx::query(
            r#"
            INSERT INTO resumes
                (name, email, phone, education, work_experience, leadership_experience, skills)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.education)
        .bind(&record.work_experience)
        .bind(&record.leadership_experience)
        .bind(&record.skills)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        info!("Stored resume {id} for '{}'", record.name);
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<StoredResume>, StorageError> {
        let rows = sqlx::query_as::<_, ResumeRow>(
            r#"
            SELECT id, name, email, phone, education, work_experience,
                   leadership_experience, skills
            FROM resumes
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StoredResume::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_pool;
    use crate::parser::parse_resume;

    #[tokio::test]
    async fn test_store_then_list_round_trips() {
        let store = SqliteResumeStore::new(memory_pool().await);
        let record = parse_resume(
            "John Doe\njohn@example.com\n555-123-4567\nEDUCATION\nBS CS\nLEADERSHIP EXPERIENCE\nClub president",
        );

        let id = store.store(&record).await.unwrap();
        let all = store.list_all().await.unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].record, record);
        assert_eq!(all[0].record.leadership_experience, "Club president");
    }

    #[tokio::test]
    async fn test_ids_increase_in_insertion_order() {
        let store = SqliteResumeStore::new(memory_pool().await);
        let first = ResumeRecord {
            name: "First".to_string(),
            ..ResumeRecord::default()
        };
        let second = ResumeRecord {
            name: "Second".to_string(),
            ..ResumeRecord::default()
        };

        let first_id = store.store(&first).await.unwrap();
        let second_id = store.store(&second).await.unwrap();
        assert!(second_id > first_id);

        let names: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.record.name)
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_storing_same_record_twice_creates_two_rows() {
        let store = SqliteResumeStore::new(memory_pool().await);
        let record = ResumeRecord::default();
        let a = store.store(&record).await.unwrap();
        let b = store.store(&record).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_closed_pool_is_storage_error() {
        let pool = memory_pool().await;
        pool.close().await;
        let store = SqliteResumeStore::new(pool);
        let err = store.store(&ResumeRecord::default()).await.unwrap_err();
        assert!(matches!(err, StorageError::Database(_)));
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let store = SqliteResumeStore::new(memory_pool().await);
        assert!(store.list_all().await.unwrap().is_empty());
    }
}
