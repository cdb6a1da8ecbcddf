use rusqlite::ErrorCode;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{Exercise, FromSqliteRow};

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Exercise>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM exercises")?;
            let exercises = stmt
                .query_map([], Exercise::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Insert a new exercise. The UNIQUE constraint on `name` is the only
    /// guard against duplicates; a violation is surfaced as a conflict.
    pub async fn create(&self, name: &str) -> Result<Exercise> {
        let pool = self.pool.clone();
        let name = name.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let result = conn.execute("INSERT INTO exercises (name) VALUES (?)", [&name]);
            match result {
                Ok(_) => Ok(Exercise {
                    id: conn.last_insert_rowid(),
                    name,
                }),
                Err(rusqlite::Error::SqliteFailure(e, msg))
                    if e.code == ErrorCode::ConstraintViolation =>
                {
                    Err(AppError::Conflict(msg.unwrap_or_else(|| {
                        format!("exercise '{}' already exists", name)
                    })))
                }
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Delete by id, cascading to the exercise's measurements. Returns the
    /// number of exercise rows removed (0 when the id does not exist).
    pub async fn delete(&self, id: i64) -> Result<usize> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute("DELETE FROM exercises WHERE id = ?", [id])?;
            Ok(rows)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
