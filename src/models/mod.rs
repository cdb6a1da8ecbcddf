pub mod exercise;
pub mod from_row;
pub mod measurement;

pub use exercise::{CreateExercise, Exercise};
pub use from_row::FromSqliteRow;
pub use measurement::{ChartSeries, CreateMeasurements, MeasurementWithExercise};
