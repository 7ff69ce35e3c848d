//! Year × state heatmap builder
//!
//! Produces a Vega-Lite spec: one rect per (year, state) cell, colored by
//! poverty rate, with thin black cell borders and no legend.

use serde::Serialize;

use super::theme::ColorTheme;
use crate::data::{DashboardError, DashboardResult, LongFormRow, LongFormTable};

/// Vega-Lite schema the spec is written against
pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Chart width in pixels
pub const HEATMAP_WIDTH: u32 = 900;

/// A renderable Vega-Lite heatmap specification
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeatmapSpec {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub data: InlineData,
    pub mark: Mark,
    pub encoding: Encoding,
    pub width: u32,
    pub config: ChartConfig,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InlineData {
    pub values: Vec<LongFormRow>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Encoding {
    pub y: PositionChannel,
    pub x: PositionChannel,
    pub color: ColorChannel,
    pub stroke: ValueChannel<&'static str>,
    pub stroke_width: ValueChannel<f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PositionChannel {
    pub field: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub axis: Axis,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub title: String,
    pub title_font_size: u32,
    pub title_padding: u32,
    pub title_font_weight: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_angle: Option<i32>,
}

impl Axis {
    fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            title_font_size: 18,
            title_padding: 15,
            title_font_weight: 900,
            label_angle: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColorChannel {
    pub field: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Serialized as `null`, which hides the legend
    pub legend: (),
    pub scale: Scale,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Scale {
    pub scheme: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValueChannel<T> {
    pub value: T,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartConfig {
    pub axis: AxisConfig,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    pub label_font_size: u32,
    pub title_font_size: u32,
}

/// Build the heatmap from the long-format table
///
/// `y_field` and `x_field` are encoded as ordinal axes, `color_field` as a
/// quantitative color under `theme`. Every field must be a column of the
/// long-format table.
pub fn build(
    table: &LongFormTable,
    y_field: &str,
    x_field: &str,
    color_field: &str,
    theme: &str,
) -> DashboardResult<HeatmapSpec> {
    for field in [y_field, x_field, color_field] {
        if !table.has_column(field) {
            return Err(DashboardError::configuration(format!(
                "heatmap field {:?} not in table (columns: {})",
                field,
                LongFormTable::COLUMNS.join(", ")
            )));
        }
    }

    let theme: ColorTheme = theme.parse()?;

    tracing::debug!(
        cells = table.len(),
        theme = %theme,
        "Built heatmap"
    );

    Ok(HeatmapSpec {
        schema: VEGA_LITE_SCHEMA,
        data: InlineData {
            values: table.rows().to_vec(),
        },
        mark: Mark { kind: "rect" },
        encoding: Encoding {
            y: PositionChannel {
                field: y_field.to_string(),
                kind: "ordinal",
                axis: Axis {
                    label_angle: Some(0),
                    ..Axis::titled(y_field)
                },
            },
            x: PositionChannel {
                field: x_field.to_string(),
                kind: "ordinal",
                axis: Axis::titled(x_field),
            },
            color: ColorChannel {
                field: color_field.to_string(),
                kind: "quantitative",
                legend: (),
                scale: Scale {
                    scheme: theme.name(),
                },
            },
            stroke: ValueChannel { value: "black" },
            stroke_width: ValueChannel { value: 0.25 },
        },
        width: HEATMAP_WIDTH,
        config: ChartConfig {
            axis: AxisConfig {
                label_font_size: 12,
                title_font_size: 12,
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{augment, to_long_form, RawPovertyTable, StateCodeMap, StateRecord};
    use crate::data::{POVERTY_RATE, STATE, YEAR};

    fn long_form() -> LongFormTable {
        let raw = RawPovertyTable::from_records(
            vec!["2003".into(), "2013".into(), "2023".into()],
            vec![
                StateRecord::new("Texas", vec![14.0, 13.6, 14.2]),
                StateRecord::new("Maine", vec![11.0, 11.2, 10.1]),
            ],
        )
        .unwrap();
        to_long_form(&augment(&raw, StateCodeMap::global()))
    }

    #[test]
    fn test_build_heatmap_spec() {
        let spec = build(&long_form(), YEAR, STATE, POVERTY_RATE, "magma").unwrap();
        let json = serde_json::to_value(&spec).unwrap();

        assert_eq!(json["mark"]["type"], "rect");
        assert_eq!(json["encoding"]["y"]["field"], "Year");
        assert_eq!(json["encoding"]["y"]["type"], "ordinal");
        assert_eq!(json["encoding"]["y"]["axis"]["labelAngle"], 0);
        assert!(json["encoding"]["x"]["axis"].get("labelAngle").is_none());
        assert_eq!(json["encoding"]["x"]["axis"]["titleFontWeight"], 900);
        assert_eq!(json["encoding"]["color"]["type"], "quantitative");
        assert!(json["encoding"]["color"]["legend"].is_null());
        assert_eq!(json["encoding"]["color"]["scale"]["scheme"], "magma");
        assert_eq!(json["encoding"]["stroke"]["value"], "black");
        assert_eq!(json["encoding"]["strokeWidth"]["value"], 0.25);
        assert_eq!(json["width"], 900);
        assert_eq!(json["config"]["axis"]["labelFontSize"], 12);
        assert_eq!(json["data"]["values"].as_array().map(Vec::len), Some(6));
        assert_eq!(json["data"]["values"][0]["Poverty Rate"], 14.0);
    }

    #[test]
    fn test_theme_lowercased() {
        let spec = build(&long_form(), YEAR, STATE, POVERTY_RATE, "Inferno").unwrap();
        assert_eq!(spec.encoding.color.scale.scheme, "inferno");
    }

    #[test]
    fn test_missing_field() {
        let result = build(&long_form(), "Decade", STATE, POVERTY_RATE, "blues");
        assert!(matches!(result, Err(DashboardError::Configuration(_))));

        let result = build(&long_form(), YEAR, "Code", POVERTY_RATE, "blues");
        assert!(matches!(result, Err(DashboardError::Configuration(_))));
    }

    #[test]
    fn test_unknown_theme() {
        let result = build(&long_form(), YEAR, STATE, POVERTY_RATE, "pastel");
        assert!(matches!(result, Err(DashboardError::Configuration(_))));
    }
}
