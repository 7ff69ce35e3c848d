//! Chart Routes
//!
//! Individual chart artifacts for shells that render one panel at a time.
//!
//! - GET /api/v1/choropleth?year=&theme= - Plotly map figure
//! - GET /api/v1/heatmap?theme= - Vega-Lite heatmap spec
//! - GET /api/v1/ranking?year= - Ranked table with column spec

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::SelectionParams;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::charts::{ChoroplethFigure, HeatmapSpec, RankingTable};

/// GET /api/v1/choropleth
pub async fn choropleth(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
) -> ApiResult<Json<ChoroplethFigure>> {
    let selection = state.selection(params.year, params.theme);
    let figure = state.dashboard.choropleth(&selection.year, &selection.theme)?;
    Ok(Json(figure))
}

/// GET /api/v1/heatmap
pub async fn heatmap(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
) -> ApiResult<Json<HeatmapSpec>> {
    let selection = state.selection(params.year, params.theme);
    let spec = state.dashboard.heatmap(&selection.theme)?;
    Ok(Json(spec))
}

/// GET /api/v1/ranking
pub async fn ranking(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
) -> ApiResult<Json<RankingTable>> {
    let selection = state.selection(params.year, params.theme);
    let table = state.dashboard.ranking(&selection.year)?;
    Ok(Json(table))
}
