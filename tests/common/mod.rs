use axum::Router;

use gymtrack::db::{create_memory_pool, DbPool};
use gymtrack::migrations::run_migrations_for_tests;
use gymtrack::models::Exercise;
use gymtrack::repositories::{ExerciseRepository, MeasurementRepository};

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    use gymtrack::handlers::{chart, exercises, measurements};

    let exercise_repo = ExerciseRepository::new(pool.clone());
    let measurement_repo = MeasurementRepository::new(pool.clone());

    let exercises_state = exercises::ExercisesState {
        exercise_repo: exercise_repo.clone(),
    };
    let measurements_state = measurements::MeasurementsState {
        measurement_repo: measurement_repo.clone(),
    };
    let chart_state = chart::ChartState {
        measurement_repo: measurement_repo.clone(),
    };

    gymtrack::routes::create_router(exercises_state, measurements_state, chart_state, "static")
}

// Test data creation helpers

#[allow(dead_code)]
pub async fn create_test_exercise(pool: &DbPool, name: &str) -> Exercise {
    let exercise_repo = ExerciseRepository::new(pool.clone());
    exercise_repo.create(name).await.unwrap()
}

#[allow(dead_code)]
pub fn insert_test_measurement(pool: &DbPool, exercise_id: i64, date: &str, value: f64) -> i64 {
    let conn = pool.get().unwrap();
    conn.execute(
        "INSERT INTO measurements (exercise_id, date, value) VALUES (?, ?, ?)",
        rusqlite::params![exercise_id, date, value],
    )
    .unwrap();
    conn.last_insert_rowid()
}
