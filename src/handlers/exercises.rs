use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{AppError, Result};
use crate::models::{CreateExercise, Exercise};
use crate::repositories::ExerciseRepository;

use super::Deleted;

#[derive(Clone)]
pub struct ExercisesState {
    pub exercise_repo: ExerciseRepository,
}

pub async fn list(State(state): State<ExercisesState>) -> Result<Json<Vec<Exercise>>> {
    let exercises = state.exercise_repo.find_all().await?;
    Ok(Json(exercises))
}

pub async fn create(
    State(state): State<ExercisesState>,
    Json(payload): Json<CreateExercise>,
) -> Result<Json<Exercise>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("exercise name is required".to_string()));
    }

    let exercise = state.exercise_repo.create(&payload.name).await?;
    Ok(Json(exercise))
}

pub async fn delete(
    State(state): State<ExercisesState>,
    Path(id): Path<i64>,
) -> Result<Json<Deleted>> {
    let deleted = state.exercise_repo.delete(id).await?;
    Ok(Json(Deleted { deleted }))
}
