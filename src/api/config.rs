use serde::{Deserialize, Serialize};

use crate::core::ViewAngles;
use crate::error::{PlotError, PlotResult};

use super::artists::{DEFAULT_LINE_WIDTH_PX, DEFAULT_MARKER_RADIUS_PX};
use super::legend::LegendPlacement;

pub const TRAJECTORY_PLOT_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Render configuration for `plot_3d_trajectory`.
///
/// Serializable so hosts can persist plot setups; every field beyond the
/// figure size and legend switch has a default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPlotConfig {
    /// Figure width in inches.
    pub width: f64,
    /// Figure height in inches.
    pub height: f64,
    pub show_legend: bool,
    #[serde(default = "default_dpi")]
    pub dpi: f64,
    #[serde(default)]
    pub view: ViewAngles,
    #[serde(default)]
    pub legend: LegendPlacement,
    #[serde(default = "default_line_width_px")]
    pub line_width_px: f64,
    #[serde(default = "default_marker_radius_px")]
    pub marker_radius_px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPlotConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: TrajectoryPlotConfig,
}

impl TrajectoryPlotConfig {
    #[must_use]
    pub fn new(width: f64, height: f64, show_legend: bool) -> Self {
        Self {
            width,
            height,
            show_legend,
            dpi: default_dpi(),
            view: ViewAngles::default(),
            legend: LegendPlacement::default(),
            line_width_px: default_line_width_px(),
            marker_radius_px: default_marker_radius_px(),
        }
    }

    #[must_use]
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    #[must_use]
    pub fn with_view(mut self, view: ViewAngles) -> Self {
        self.view = view;
        self
    }

    #[must_use]
    pub fn with_legend_placement(mut self, legend: LegendPlacement) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_line_width_px(mut self, line_width_px: f64) -> Self {
        self.line_width_px = line_width_px;
        self
    }

    #[must_use]
    pub fn with_marker_radius_px(mut self, marker_radius_px: f64) -> Self {
        self.marker_radius_px = marker_radius_px;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(PlotError::InvalidData(
                "figure size must be finite".to_owned(),
            ));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(PlotError::InvalidData(
                "figure size must be > 0".to_owned(),
            ));
        }
        if !self.dpi.is_finite() || self.dpi <= 0.0 {
            return Err(PlotError::InvalidData(
                "dpi must be finite and > 0".to_owned(),
            ));
        }
        if !self.line_width_px.is_finite() || self.line_width_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        if !self.marker_radius_px.is_finite() || self.marker_radius_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        self.view.validate()?;
        self.legend.validate()
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        let payload = TrajectoryPlotConfigJsonContractV1 {
            schema_version: TRAJECTORY_PLOT_CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize plot config contract v1: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned contract payload.
    ///
    /// Input with a `schema_version` key is read as a contract payload.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidData(format!("failed to parse plot config json: {e}"))
        })?;
        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                PlotError::InvalidData(format!("failed to parse plot config json: {e}"))
            });
        }

        let payload: TrajectoryPlotConfigJsonContractV1 =
            serde_json::from_value(value).map_err(|e| {
                PlotError::InvalidData(format!("failed to parse plot config json payload: {e}"))
            })?;
        if payload.schema_version != TRAJECTORY_PLOT_CONFIG_JSON_SCHEMA_V1 {
            return Err(PlotError::InvalidData(format!(
                "unsupported plot config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}

fn default_dpi() -> f64 {
    100.0
}

fn default_line_width_px() -> f64 {
    DEFAULT_LINE_WIDTH_PX
}

fn default_marker_radius_px() -> f64 {
    DEFAULT_MARKER_RADIUS_PX
}
