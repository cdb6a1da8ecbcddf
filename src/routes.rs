use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers::{chart, exercises, health, measurements};

pub fn create_router(
    exercises_state: exercises::ExercisesState,
    measurements_state: measurements::MeasurementsState,
    chart_state: chart::ChartState,
    static_dir: &str,
) -> Router {
    let api = Router::new()
        // Exercise routes
        .route("/exercises", get(exercises::list).post(exercises::create))
        .route("/exercises/{id}", delete(exercises::delete))
        .with_state(exercises_state)
        // Measurement routes
        .route("/data", get(measurements::list).post(measurements::create))
        .route("/data/{id}", delete(measurements::delete))
        .with_state(measurements_state)
        // Chart aggregation
        .route("/chart-data", get(chart::chart_data))
        .with_state(chart_state)
        // Health check
        .route("/health", get(health::health_check));

    Router::new()
        .nest("/api", api)
        // The front end is static files, outside the API contract.
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
