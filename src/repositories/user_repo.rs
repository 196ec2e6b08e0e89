use async_trait::async_trait;
use chrono::Utc;

use super::UserRepository;
use crate::db::DbPool;
use crate::error::{StorageError, StorageResult};
use crate::models::from_row::{query_all, query_one_or_default};
use crate::models::User;

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: DbPool,
}

impl SqliteUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &User) -> StorageResult<User> {
        let pool = self.pool.clone();
        let user = user.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let now = Utc::now();
            conn.execute(
                "INSERT INTO users (name, email, password, created_at, updated_at)
                 VALUES (?, ?, ?, ?, ?)",
                rusqlite::params![user.name, user.email, user.password, now, now],
            )?;
            let id = conn.last_insert_rowid();
            tracing::debug!("Inserted user {}", id);
            Ok(query_one_or_default(&conn, "SELECT * FROM users WHERE id = ?", [id])?)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }

    async fn get_by_id(&self, id: i64) -> StorageResult<User> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            Ok(query_one_or_default(&conn, "SELECT * FROM users WHERE id = ?", [id])?)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }

    async fn get_by_email(&self, email: &str) -> StorageResult<User> {
        let pool = self.pool.clone();
        let email = email.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            Ok(query_one_or_default(&conn, "SELECT * FROM users WHERE email = ?", [&email])?)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }

    async fn get_all(&self) -> StorageResult<Vec<User>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            Ok(query_all(&conn, "SELECT * FROM users ORDER BY id", [])?)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }

    async fn update(&self, user: &User) -> StorageResult<()> {
        let pool = self.pool.clone();
        let user = user.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute(
                "UPDATE users SET name = ?, email = ?, password = ?, updated_at = ? WHERE id = ?",
                rusqlite::params![user.name, user.email, user.password, Utc::now(), user.id],
            )?;
            tracing::debug!("Updated {} user row(s) for id {}", rows, user.id);
            Ok(())
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute("DELETE FROM users WHERE id = ?", [id])?;
            tracing::debug!("Deleted {} user row(s) for id {}", rows, id);
            Ok(())
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }
}
