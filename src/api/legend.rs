use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Where a legend sits relative to its axes.
///
/// The anchor is given in axes-fraction coordinates (`0..1` spans the axes
/// box, `y` grows upward) and names the legend's center-right point. The
/// default anchor sits outside the right edge of the axes, which is why
/// `subplot_right` shrinks the axes area to leave room for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendPlacement {
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub subplot_right: f64,
    pub font_size_pt: f64,
}

impl LegendPlacement {
    pub fn validate(self) -> PlotResult<()> {
        if !self.anchor_x.is_finite() || !self.anchor_y.is_finite() {
            return Err(PlotError::InvalidData(
                "legend anchor must be finite".to_owned(),
            ));
        }
        if !self.subplot_right.is_finite() || self.subplot_right <= 0.0 || self.subplot_right > 1.0
        {
            return Err(PlotError::InvalidData(
                "legend subplot right must be in (0, 1]".to_owned(),
            ));
        }
        if !self.font_size_pt.is_finite() || self.font_size_pt <= 0.0 {
            return Err(PlotError::InvalidData(
                "legend font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for LegendPlacement {
    fn default() -> Self {
        Self {
            anchor_x: 1.325,
            anchor_y: 0.5,
            subplot_right: 0.7,
            font_size_pt: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendEntryKind {
    Line,
    Marker,
}

/// One labeled artist as listed by a legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    pub kind: LegendEntryKind,
}
