//! Dashboard Routes
//!
//! The page shell and the endpoints it drives.
//!
//! - GET / - Dashboard page
//! - GET /api/v1/options - Selector options and defaults
//! - GET /api/v1/dashboard?year=&theme= - Full render for one selection

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{OptionsResponse, SelectionParams, ThemeOption};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::charts::ColorTheme;
use crate::dashboard::DashboardView;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(INDEX_HTML.replace("{{TITLE}}", &escape_html(&state.settings.title)))
}

/// GET /api/v1/options
pub async fn options(State(state): State<Arc<AppState>>) -> Json<OptionsResponse> {
    let themes = state
        .settings
        .themes
        .iter()
        .filter_map(|name| name.parse::<ColorTheme>().ok())
        .map(|theme| ThemeOption {
            value: theme.name().to_string(),
            label: theme.label(),
        })
        .collect();

    Json(OptionsResponse {
        title: state.settings.title.clone(),
        years: state.settings.years.clone(),
        themes,
        default_year: state.settings.default_year.clone(),
        default_theme: state.settings.default_theme.to_lowercase(),
    })
}

/// GET /api/v1/dashboard
///
/// One render cycle: map, ranking table, heatmap and about panel.
pub async fn render(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
) -> ApiResult<Json<DashboardView>> {
    let selection = state.selection(params.year, params.theme);
    let view = state.dashboard.render(&selection)?;
    Ok(Json(view))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
