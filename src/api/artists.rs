use smallvec::SmallVec;

use crate::core::Point3;
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, ColorSpec};

pub const DEFAULT_LINE_WIDTH_PX: f64 = 1.5;
pub const DEFAULT_MARKER_RADIUS_PX: f64 = 3.5;

/// Connected polyline through 3D points.
///
/// The requested `ColorSpec` is resolved once on creation; `color()` returns
/// the resolved value that is actually drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Line3D {
    points: Vec<Point3>,
    color: Color,
    width_px: f64,
    label: Option<String>,
}

impl Line3D {
    pub fn new(points: Vec<Point3>, color: &ColorSpec) -> PlotResult<Self> {
        if points.is_empty() {
            return Err(PlotError::InvalidData(
                "line needs at least one point".to_owned(),
            ));
        }
        Ok(Self {
            points,
            color: color.resolve()?,
            width_px: DEFAULT_LINE_WIDTH_PX,
            label: None,
        })
    }

    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn width_px(&self) -> f64 {
        self.width_px
    }

    pub fn set_width_px(&mut self, width_px: f64) -> PlotResult<()> {
        if !width_px.is_finite() || width_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        self.width_px = width_px;
        Ok(())
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }
}

/// Set of circular markers in 3D.
///
/// Trajectory plots place a single end-point marker per entity, so the point
/// storage is inline for that case.
#[derive(Debug, Clone, PartialEq)]
pub struct Scatter3D {
    points: SmallVec<[Point3; 1]>,
    color: Color,
    radius_px: f64,
    label: Option<String>,
}

impl Scatter3D {
    pub fn new(points: impl IntoIterator<Item = Point3>, color: &ColorSpec) -> PlotResult<Self> {
        let points: SmallVec<[Point3; 1]> = points.into_iter().collect();
        if points.is_empty() {
            return Err(PlotError::InvalidData(
                "scatter needs at least one point".to_owned(),
            ));
        }
        Ok(Self {
            points,
            color: color.resolve()?,
            radius_px: DEFAULT_MARKER_RADIUS_PX,
            label: None,
        })
    }

    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn radius_px(&self) -> f64 {
        self.radius_px
    }

    pub fn set_radius_px(&mut self, radius_px: f64) -> PlotResult<()> {
        if !radius_px.is_finite() || radius_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        self.radius_px = radius_px;
        Ok(())
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }
}
