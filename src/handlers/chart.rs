use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::ChartSeries;
use crate::repositories::MeasurementRepository;

#[derive(Clone)]
pub struct ChartState {
    pub measurement_repo: MeasurementRepository,
}

pub async fn chart_data(
    State(state): State<ChartState>,
) -> Result<Json<BTreeMap<String, ChartSeries>>> {
    let series = state.measurement_repo.chart_data().await?;
    Ok(Json(series))
}
