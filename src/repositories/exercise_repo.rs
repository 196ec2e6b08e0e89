use async_trait::async_trait;
use chrono::Utc;

use super::ExerciseRepository;
use crate::db::DbPool;
use crate::error::{StorageError, StorageResult};
use crate::models::from_row::{query_all, query_one_or_default};
use crate::models::Exercise;

#[derive(Clone)]
pub struct SqliteExerciseRepository {
    pool: DbPool,
}

impl SqliteExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExerciseRepository for SqliteExerciseRepository {
    async fn create(&self, exercise: &Exercise) -> StorageResult<Exercise> {
        let pool = self.pool.clone();
        let exercise = exercise.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let now = Utc::now();
            conn.execute(
                "INSERT INTO exercises (name, muscle_group, equipment_type, notes, created_at, updated_at)
                 VALUES (?, ?, ?, ?, ?, ?)",
                rusqlite::params![
                    exercise.name,
                    exercise.muscle_group,
                    exercise.equipment_type,
                    exercise.notes,
                    now,
                    now
                ],
            )?;
            let id = conn.last_insert_rowid();
            tracing::debug!("Inserted exercise {}", id);
            Ok(query_one_or_default(
                &conn,
                "SELECT * FROM exercises WHERE id = ?",
                [id],
            )?)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }

    async fn get_by_id(&self, id: i64) -> StorageResult<Exercise> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            Ok(query_one_or_default(
                &conn,
                "SELECT * FROM exercises WHERE id = ?",
                [id],
            )?)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }

    async fn get_all(&self) -> StorageResult<Vec<Exercise>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            Ok(query_all(&conn, "SELECT * FROM exercises ORDER BY id", [])?)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }

    async fn get_by_muscle_group(&self, muscle_group: &str) -> StorageResult<Vec<Exercise>> {
        let pool = self.pool.clone();
        let muscle_group = muscle_group.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            Ok(query_all(
                &conn,
                "SELECT * FROM exercises WHERE muscle_group = ? ORDER BY id",
                [&muscle_group],
            )?)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }

    async fn update(&self, exercise: &Exercise) -> StorageResult<()> {
        let pool = self.pool.clone();
        let exercise = exercise.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute(
                "UPDATE exercises
                 SET name = ?, muscle_group = ?, equipment_type = ?, notes = ?, updated_at = ?
                 WHERE id = ?",
                rusqlite::params![
                    exercise.name,
                    exercise.muscle_group,
                    exercise.equipment_type,
                    exercise.notes,
                    Utc::now(),
                    exercise.id
                ],
            )?;
            tracing::debug!("Updated {} exercise row(s) for id {}", rows, exercise.id);
            Ok(())
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute("DELETE FROM exercises WHERE id = ?", [id])?;
            tracing::debug!("Deleted {} exercise row(s) for id {}", rows, id);
            Ok(())
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }
}
