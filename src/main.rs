use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gymtrack::config::Config;
use gymtrack::handlers::{chart, exercises, measurements};
use gymtrack::repositories::{ExerciseRepository, MeasurementRepository};
use gymtrack::{db, migrations, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gymtrack=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Connecting to database: {}", config.database_url);

    // Create database pool
    let pool = db::create_pool(&config.database_url)?;

    // Run migrations
    migrations::run_migrations(&pool)?;

    // Create repositories
    let exercise_repo = ExerciseRepository::new(pool.clone());
    let measurement_repo = MeasurementRepository::new(pool.clone());

    // Create handler states
    let exercises_state = exercises::ExercisesState {
        exercise_repo: exercise_repo.clone(),
    };
    let measurements_state = measurements::MeasurementsState {
        measurement_repo: measurement_repo.clone(),
    };
    let chart_state = chart::ChartState {
        measurement_repo: measurement_repo.clone(),
    };

    // Build router
    let app = routes::create_router(
        exercises_state,
        measurements_state,
        chart_state,
        &config.static_dir,
    );

    // Start server
    let addr = config.server_addr();
    tracing::info!("Starting server at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
