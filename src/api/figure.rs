use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PixelRect, Viewport};
use crate::error::{PlotError, PlotResult};

use super::Axes3D;

/// Fractions of the figure occupied by the axes area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubplotParams {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl SubplotParams {
    pub fn validate(self) -> PlotResult<()> {
        for (name, value) in [
            ("left", self.left),
            ("right", self.right),
            ("bottom", self.bottom),
            ("top", self.top),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "subplot `{name}` must be finite and in [0, 1]"
                )));
            }
        }
        if self.left >= self.right {
            return Err(PlotError::InvalidData(
                "subplot left must be < right".to_owned(),
            ));
        }
        if self.bottom >= self.top {
            return Err(PlotError::InvalidData(
                "subplot bottom must be < top".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for SubplotParams {
    fn default() -> Self {
        Self {
            left: 0.125,
            right: 0.9,
            bottom: 0.11,
            top: 0.88,
        }
    }
}

/// A figure holding one 3D axes.
///
/// Size is given in inches and converted to pixels with `dpi`.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    width_in: f64,
    height_in: f64,
    dpi: f64,
    subplot: SubplotParams,
    axes: Axes3D,
}

impl Figure {
    pub fn new(width_in: f64, height_in: f64, dpi: f64) -> PlotResult<Self> {
        if !dpi.is_finite() || dpi <= 0.0 {
            return Err(PlotError::InvalidData(
                "figure dpi must be finite and > 0".to_owned(),
            ));
        }
        if !width_in.is_finite() || !height_in.is_finite() || width_in <= 0.0 || height_in <= 0.0
        {
            return Err(PlotError::InvalidData(format!(
                "figure size must be finite and > 0, got {width_in}x{height_in}"
            )));
        }
        let max_pixels = f64::from(u32::MAX);
        if (width_in * dpi).round() > max_pixels || (height_in * dpi).round() > max_pixels {
            return Err(PlotError::InvalidData(format!(
                "figure size {width_in}x{height_in} at {dpi} dpi exceeds {max_pixels} pixels"
            )));
        }

        let figure = Self {
            width_in,
            height_in,
            dpi,
            subplot: SubplotParams::default(),
            axes: Axes3D::new(),
        };
        figure.viewport().ensure_valid()?;
        debug!(
            width_in,
            height_in,
            dpi,
            width_px = figure.viewport().width,
            height_px = figure.viewport().height,
            "create figure"
        );
        Ok(figure)
    }

    #[must_use]
    pub fn size_inches(&self) -> (f64, f64) {
        (self.width_in, self.height_in)
    }

    #[must_use]
    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    /// Pixel size of the figure.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            to_pixels(self.width_in * self.dpi),
            to_pixels(self.height_in * self.dpi),
        )
    }

    #[must_use]
    pub fn subplot_params(&self) -> SubplotParams {
        self.subplot
    }

    pub fn subplots_adjust(&mut self, params: SubplotParams) -> PlotResult<()> {
        params.validate()?;
        self.subplot = params;
        Ok(())
    }

    /// Moves only the right boundary of the axes area.
    pub fn subplots_adjust_right(&mut self, right: f64) -> PlotResult<()> {
        self.subplots_adjust(SubplotParams {
            right,
            ..self.subplot
        })
    }

    /// Pixel rectangle of the axes area.
    #[must_use]
    pub fn axes_rect(&self) -> PixelRect {
        let viewport = self.viewport();
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        PixelRect::new(
            self.subplot.left * width,
            (1.0 - self.subplot.top) * height,
            (self.subplot.right - self.subplot.left) * width,
            (self.subplot.top - self.subplot.bottom) * height,
        )
    }

    /// Converts a size in points into pixels at this figure's dpi.
    #[must_use]
    pub fn points_to_pixels(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }

    #[must_use]
    pub fn axes(&self) -> &Axes3D {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut Axes3D {
        &mut self.axes
    }
}

fn to_pixels(value: f64) -> u32 {
    value.round() as u32
}
