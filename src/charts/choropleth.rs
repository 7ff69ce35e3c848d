//! Choropleth map builder
//!
//! Assembles a Plotly figure (`data` + `layout`) of U.S. states colored by
//! poverty rate. Rows without a postal code are passed through as `null`
//! locations; the renderer skips them.

use serde::Serialize;

use super::theme::ColorTheme;
use crate::data::{DashboardError, DashboardResult, YearProjection, POVERTY_RATE};

/// Map height in pixels
pub const MAP_HEIGHT: u32 = 350;

/// Color bar title
pub const COLORBAR_TITLE: &str = "Poverty Rate (%)";

const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";
const DARK_FONT_COLOR: &str = "#f2f5fa";

/// A renderable Plotly choropleth figure
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChoroplethFigure {
    pub data: Vec<ChoroplethTrace>,
    pub layout: MapLayout,
}

/// Single choropleth trace keyed by postal code
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChoroplethTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub locations: Vec<Option<String>>,
    pub locationmode: &'static str,
    pub z: Vec<f64>,
    pub text: Vec<String>,
    pub colorscale: Vec<(f64, &'static str)>,
    pub colorbar: ColorBar,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Title {
    pub text: String,
}

/// Fixed map presentation: transparent background, no margins, fixed height
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapLayout {
    pub geo: Geo,
    pub font: Font,
    pub plot_bgcolor: &'static str,
    pub paper_bgcolor: &'static str,
    pub margin: Margin,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Geo {
    pub scope: &'static str,
    pub bgcolor: &'static str,
    pub lakecolor: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Font {
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl ChoroplethFigure {
    /// Postal codes the renderer will actually draw, with their values
    pub fn plotted_codes(&self) -> Vec<(&str, f64)> {
        self.data
            .iter()
            .flat_map(|trace| {
                trace
                    .locations
                    .iter()
                    .zip(&trace.z)
                    .filter_map(|(code, value)| code.as_deref().map(|c| (c, *value)))
            })
            .collect()
    }
}

/// Build the state choropleth for a year projection
///
/// `color_column` must name the numeric column of the projection;
/// `theme` is matched case-insensitively.
pub fn build(
    projection: &YearProjection,
    color_column: &str,
    theme: &str,
) -> DashboardResult<ChoroplethFigure> {
    let theme: ColorTheme = theme.parse()?;

    if !projection.has_column(color_column) {
        return Err(DashboardError::configuration(format!(
            "choropleth color column {:?} not in projection",
            color_column
        )));
    }
    if color_column != POVERTY_RATE {
        return Err(DashboardError::configuration(format!(
            "choropleth color column {:?} is not numeric",
            color_column
        )));
    }

    let rows = projection.rows();

    let trace = ChoroplethTrace {
        kind: "choropleth",
        locations: rows.iter().map(|r| r.code.clone()).collect(),
        locationmode: "USA-states",
        z: rows.iter().map(|r| r.poverty_rate).collect(),
        text: rows.iter().map(|r| r.state.clone()).collect(),
        colorscale: theme.colorscale(),
        colorbar: ColorBar {
            title: Title {
                text: COLORBAR_TITLE.to_string(),
            },
        },
        hovertemplate: format!("%{{text}}<br>{}: %{{z:.1f}}<extra></extra>", COLORBAR_TITLE),
    };

    tracing::debug!(
        year = projection.year(),
        theme = %theme,
        states = rows.len(),
        "Built choropleth"
    );

    Ok(ChoroplethFigure {
        data: vec![trace],
        layout: MapLayout {
            geo: Geo {
                scope: "usa",
                bgcolor: TRANSPARENT,
                lakecolor: TRANSPARENT,
            },
            font: Font {
                color: DARK_FONT_COLOR,
            },
            plot_bgcolor: TRANSPARENT,
            paper_bgcolor: TRANSPARENT,
            margin: Margin { l: 0, r: 0, t: 0, b: 0 },
            height: MAP_HEIGHT,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{augment, project, RawPovertyTable, StateCodeMap, StateRecord};

    fn projection() -> YearProjection {
        let raw = RawPovertyTable::from_records(
            vec!["2013".into(), "2023".into()],
            vec![
                StateRecord::new("Texas", vec![13.6, 14.2]),
                StateRecord::new("Ruritania", vec![21.0, 22.0]),
                StateRecord::new("Maine", vec![11.2, 10.1]),
            ],
        )
        .unwrap();
        project(&augment(&raw, StateCodeMap::global()), "2023").unwrap()
    }

    #[test]
    fn test_build_map() {
        let figure = build(&projection(), POVERTY_RATE, "viridis").unwrap();
        let trace = &figure.data[0];

        assert_eq!(trace.locationmode, "USA-states");
        assert_eq!(trace.z, vec![14.2, 22.0, 10.1]);
        assert_eq!(trace.colorscale, ColorTheme::Viridis.colorscale());
        assert_eq!(figure.layout.height, MAP_HEIGHT);
        assert_eq!(figure.layout.margin, Margin { l: 0, r: 0, t: 0, b: 0 });
        assert_eq!(figure.layout.paper_bgcolor, "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn test_unmapped_state_is_not_plotted() {
        let figure = build(&projection(), POVERTY_RATE, "blues").unwrap();

        assert_eq!(figure.plotted_codes(), vec![("TX", 14.2), ("ME", 10.1)]);

        let json = serde_json::to_value(&figure).unwrap();
        assert!(json["data"][0]["locations"][1].is_null());
        assert_eq!(json["data"][0]["type"], "choropleth");
        assert_eq!(json["layout"]["geo"]["scope"], "usa");
    }

    #[test]
    fn test_theme_case_folded() {
        let upper = build(&projection(), POVERTY_RATE, "VIRIDIS").unwrap();
        let lower = build(&projection(), POVERTY_RATE, "viridis").unwrap();

        assert_eq!(upper, lower);
    }

    #[test]
    fn test_unknown_theme() {
        let result = build(&projection(), POVERTY_RATE, "sepia");
        assert!(matches!(result, Err(DashboardError::Configuration(_))));
    }

    #[test]
    fn test_bad_color_column() {
        let result = build(&projection(), "Median Income", "blues");
        assert!(matches!(result, Err(DashboardError::Configuration(_))));

        let result = build(&projection(), "State", "blues");
        assert!(matches!(result, Err(DashboardError::Configuration(_))));
    }
}
