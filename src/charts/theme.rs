//! Continuous color themes
//!
//! Theme names are matched case-insensitively. Each theme carries the
//! lowercase scheme name used by the heatmap renderer and an explicit list
//! of color stops used by the map renderer.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::data::DashboardError;

/// A selectable continuous color scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    Blues,
    Cividis,
    Greens,
    Inferno,
    Magma,
    Plasma,
    Reds,
    Rainbow,
    Turbo,
    Viridis,
}

impl ColorTheme {
    /// All themes in selector order
    pub fn all() -> &'static [ColorTheme] {
        &[
            ColorTheme::Blues,
            ColorTheme::Cividis,
            ColorTheme::Greens,
            ColorTheme::Inferno,
            ColorTheme::Magma,
            ColorTheme::Plasma,
            ColorTheme::Reds,
            ColorTheme::Rainbow,
            ColorTheme::Turbo,
            ColorTheme::Viridis,
        ]
    }

    /// Lowercase scheme name
    pub fn name(&self) -> &'static str {
        match self {
            ColorTheme::Blues => "blues",
            ColorTheme::Cividis => "cividis",
            ColorTheme::Greens => "greens",
            ColorTheme::Inferno => "inferno",
            ColorTheme::Magma => "magma",
            ColorTheme::Plasma => "plasma",
            ColorTheme::Reds => "reds",
            ColorTheme::Rainbow => "rainbow",
            ColorTheme::Turbo => "turbo",
            ColorTheme::Viridis => "viridis",
        }
    }

    /// Display label for selectors ("Viridis")
    pub fn label(&self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }

    /// Color stops from low to high
    pub fn stops(&self) -> &'static [&'static str] {
        match self {
            ColorTheme::Blues => &[
                "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5",
                "#08519c", "#08306b",
            ],
            ColorTheme::Cividis => &[
                "#00224e", "#123570", "#3b496c", "#575d6d", "#707173", "#8a8678", "#a59c74",
                "#c3b369", "#e1cc55", "#fee838",
            ],
            ColorTheme::Greens => &[
                "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45",
                "#006d2c", "#00441b",
            ],
            ColorTheme::Inferno => &[
                "#000004", "#1b0c41", "#4a0c6b", "#781c6d", "#a52c60", "#cf4446", "#ed6925",
                "#fb9b06", "#f7d13d", "#fcffa4",
            ],
            ColorTheme::Magma => &[
                "#000004", "#180f3d", "#440f76", "#721f81", "#9e2f7f", "#cd4071", "#f1605d",
                "#fd9668", "#feca8d", "#fcfdbf",
            ],
            ColorTheme::Plasma => &[
                "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953",
                "#fb9f3a", "#fdca26", "#f0f921",
            ],
            ColorTheme::Reds => &[
                "#fff5f0", "#fee0d2", "#fcbba1", "#fc9272", "#fb6a4a", "#ef3b2c", "#cb181d",
                "#a50f15", "#67000d",
            ],
            ColorTheme::Rainbow => &[
                "#96005a", "#0000c8", "#0019ff", "#0098ff", "#2cff96", "#97ff00", "#ffea00",
                "#ff6f00", "#ff0000",
            ],
            ColorTheme::Turbo => &[
                "#30123b", "#4662d7", "#36aaf9", "#1ae4b6", "#72fe5e", "#c8ef34", "#faba39",
                "#f66b19", "#ca2a04", "#7a0403",
            ],
            ColorTheme::Viridis => &[
                "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779",
                "#6ece58", "#b5de2b", "#fde725",
            ],
        }
    }

    /// Stops as evenly spaced (position, color) pairs in [0, 1]
    pub fn colorscale(&self) -> Vec<(f64, &'static str)> {
        let stops = self.stops();
        let last = (stops.len() - 1) as f64;
        stops
            .iter()
            .enumerate()
            .map(|(i, color)| (i as f64 / last, *color))
            .collect()
    }
}

impl std::fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ColorTheme {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        ColorTheme::all()
            .iter()
            .copied()
            .find(|t| t.name() == lowered)
            .ok_or_else(|| {
                DashboardError::configuration(format!("unknown color theme: {:?}", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("viridis".parse::<ColorTheme>().unwrap(), ColorTheme::Viridis);
        assert_eq!("VIRIDIS".parse::<ColorTheme>().unwrap(), ColorTheme::Viridis);
        assert_eq!("Blues".parse::<ColorTheme>().unwrap(), ColorTheme::Blues);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "sunset".parse::<ColorTheme>().unwrap_err();
        assert!(matches!(err, DashboardError::Configuration(_)));
    }

    #[test]
    fn test_names_round_trip() {
        assert_eq!(ColorTheme::all().len(), 10);
        for theme in ColorTheme::all() {
            assert_eq!(theme.name().parse::<ColorTheme>().unwrap(), *theme);
        }
    }

    #[test]
    fn test_colorscale_spans_unit_interval() {
        for theme in ColorTheme::all() {
            let scale = theme.colorscale();
            assert!(scale.len() >= 2);
            assert_eq!(scale.first().map(|s| s.0), Some(0.0));
            assert_eq!(scale.last().map(|s| s.0), Some(1.0));
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(ColorTheme::Cividis.label(), "Cividis");
    }
}
