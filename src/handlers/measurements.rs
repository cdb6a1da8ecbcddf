use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::Result;
use crate::models::{CreateMeasurements, MeasurementWithExercise};
use crate::repositories::MeasurementRepository;

use super::Deleted;

#[derive(Clone)]
pub struct MeasurementsState {
    pub measurement_repo: MeasurementRepository,
}

#[derive(Serialize)]
pub struct Inserted {
    pub inserted: usize,
}

pub async fn list(
    State(state): State<MeasurementsState>,
) -> Result<Json<Vec<MeasurementWithExercise>>> {
    let measurements = state.measurement_repo.find_all_with_exercise().await?;
    Ok(Json(measurements))
}

/// Batch insert. Always reports success with the count of rows that went in;
/// per-row failures are only visible in the server log.
pub async fn create(
    State(state): State<MeasurementsState>,
    Json(payload): Json<CreateMeasurements>,
) -> Result<Json<Inserted>> {
    let inserted = state
        .measurement_repo
        .insert_batch(&payload.date, payload.data)
        .await?;
    Ok(Json(Inserted { inserted }))
}

pub async fn delete(
    State(state): State<MeasurementsState>,
    Path(id): Path<i64>,
) -> Result<Json<Deleted>> {
    let deleted = state.measurement_repo.delete(id).await?;
    Ok(Json(Deleted { deleted }))
}
