use std::collections::{BTreeMap, HashMap};

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{ChartSeries, FromSqliteRow, MeasurementWithExercise};

#[derive(Clone)]
pub struct MeasurementRepository {
    pool: DbPool,
}

impl MeasurementRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// All measurements joined with their exercise name, newest date first,
    /// ties broken by exercise name.
    pub async fn find_all_with_exercise(&self) -> Result<Vec<MeasurementWithExercise>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT m.id, e.name AS exercise, m.date, m.value
                 FROM measurements m
                 JOIN exercises e ON m.exercise_id = e.id
                 ORDER BY m.date DESC, e.name ASC",
            )?;
            let measurements = stmt
                .query_map([], MeasurementWithExercise::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(measurements)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Insert one measurement per entry with a non-empty value, all sharing
    /// the same date. The batch is deliberately non-atomic: a row that fails
    /// (unparseable id or value, missing exercise) is logged and skipped, and
    /// the rest of the batch still goes in. Returns the number of rows that
    /// made it.
    pub async fn insert_batch(&self, date: &str, entries: HashMap<String, String>) -> Result<usize> {
        let pool = self.pool.clone();
        let date = date.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn
                .prepare("INSERT INTO measurements (exercise_id, date, value) VALUES (?, ?, ?)")?;

            let mut inserted = 0;
            for (exercise_id, raw_value) in &entries {
                if raw_value.is_empty() {
                    continue;
                }
                let exercise_id_num: i64 = match exercise_id.parse() {
                    Ok(id) => id,
                    Err(_) => {
                        tracing::error!(
                            exercise_id = %exercise_id,
                            "Error inserting measurement: exercise id is not an integer"
                        );
                        continue;
                    }
                };
                let value: f64 = match raw_value.trim().parse() {
                    Ok(v) => v,
                    Err(_) => {
                        tracing::error!(
                            exercise_id = %exercise_id,
                            value = %raw_value,
                            "Error inserting measurement: value is not a number"
                        );
                        continue;
                    }
                };
                match stmt.execute(rusqlite::params![exercise_id_num, date, value]) {
                    Ok(_) => inserted += 1,
                    Err(e) => {
                        tracing::error!(
                            exercise_id = %exercise_id,
                            error = %e,
                            "Error inserting measurement"
                        );
                    }
                }
            }
            Ok(inserted)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Delete one measurement by id. Returns the number of rows removed
    /// (0 when the id does not exist).
    pub async fn delete(&self, id: i64) -> Result<usize> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute("DELETE FROM measurements WHERE id = ?", [id])?;
            Ok(rows)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// One series per exercise name, with parallel dates/values sequences in
    /// ascending date order (name breaks ties). Grouping by name is safe
    /// while the UNIQUE constraint on exercises.name holds.
    pub async fn chart_data(&self) -> Result<BTreeMap<String, ChartSeries>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT e.name AS exercise, m.date, m.value
                 FROM measurements m
                 JOIN exercises e ON m.exercise_id = e.id
                 ORDER BY m.date ASC, e.name ASC",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok((
                    row.get::<_, String>("exercise")?,
                    row.get::<_, String>("date")?,
                    row.get::<_, f64>("value")?,
                ))
            })?;

            let mut series: BTreeMap<String, ChartSeries> = BTreeMap::new();
            for row in rows {
                let (exercise, date, value) = row?;
                let entry = series.entry(exercise).or_default();
                entry.dates.push(date);
                entry.values.push(value);
            }
            Ok(series)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
