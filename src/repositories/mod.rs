pub mod exercise_repo;
pub mod measurement_repo;

pub use exercise_repo::ExerciseRepository;
pub use measurement_repo::MeasurementRepository;
