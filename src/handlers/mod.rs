pub mod chart;
pub mod exercises;
pub mod health;
pub mod measurements;

use serde::Serialize;

/// Row-count body returned by the delete endpoints. A count of 0 means the
/// id did not exist, which is not an error.
#[derive(Serialize)]
pub struct Deleted {
    pub deleted: usize,
}
