use std::collections::HashMap;

use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

/// A measurement row joined with the name of its exercise, as returned by
/// the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementWithExercise {
    pub id: i64,
    pub exercise: String,
    pub date: String,
    pub value: f64,
}

impl FromSqliteRow for MeasurementWithExercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            exercise: row.get("exercise")?,
            date: row.get("date")?,
            value: row.get("value")?,
        })
    }
}

/// Batch measurement submission: one shared date plus raw values keyed by
/// exercise id. JSON object keys are always strings, so ids arrive as
/// strings and are parsed at insert time.
#[derive(Debug, Deserialize)]
pub struct CreateMeasurements {
    pub date: String,
    pub data: HashMap<String, String>,
}

/// Parallel dates/values sequences for one exercise's time-series line.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartSeries {
    pub dates: Vec<String>,
    pub values: Vec<f64>,
}
