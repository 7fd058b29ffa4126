use crate::core::{AxisLimits, Point3, ViewAngles, data_extent};
use crate::error::{PlotError, PlotResult};
use crate::render::ColorSpec;

use super::artists::{Line3D, Scatter3D};
use super::legend::{LegendEntry, LegendEntryKind, LegendPlacement};

/// Fallback limits for an axes without data.
pub const EMPTY_AXIS_LIMITS: AxisLimits = AxisLimits::new(0.0, 1.0);

/// Fraction of the value an axis with zero data extent is widened by.
const DEGENERATE_EXPANDER: f64 = 0.05;

/// A 3D plotting area with its artists and display state.
///
/// Limits follow the data until they are set explicitly; once set through
/// `set_xlim3d` and friends they stay fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct Axes3D {
    labels: [String; 3],
    limits: [Option<AxisLimits>; 3],
    view: ViewAngles,
    lines: Vec<Line3D>,
    scatters: Vec<Scatter3D>,
    legend: Option<LegendPlacement>,
}

impl Default for Axes3D {
    fn default() -> Self {
        Self::new()
    }
}

impl Axes3D {
    #[must_use]
    pub fn new() -> Self {
        Self {
            labels: [String::new(), String::new(), String::new()],
            limits: [None; 3],
            view: ViewAngles::default(),
            lines: Vec::new(),
            scatters: Vec::new(),
            legend: None,
        }
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.labels[0] = label.into();
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.labels[1] = label.into();
    }

    pub fn set_zlabel(&mut self, label: impl Into<String>) {
        self.labels[2] = label.into();
    }

    /// Axis titles in x, y, z order.
    #[must_use]
    pub fn labels(&self) -> [&str; 3] {
        [&self.labels[0], &self.labels[1], &self.labels[2]]
    }

    #[must_use]
    pub fn view(&self) -> ViewAngles {
        self.view
    }

    pub fn set_view(&mut self, view: ViewAngles) -> PlotResult<()> {
        view.validate()?;
        self.view = view;
        Ok(())
    }

    #[must_use]
    pub fn xlim3d(&self) -> AxisLimits {
        self.limits()[0]
    }

    #[must_use]
    pub fn ylim3d(&self) -> AxisLimits {
        self.limits()[1]
    }

    #[must_use]
    pub fn zlim3d(&self) -> AxisLimits {
        self.limits()[2]
    }

    pub fn set_xlim3d(&mut self, limits: impl Into<AxisLimits>) {
        self.limits[0] = Some(limits.into());
    }

    pub fn set_ylim3d(&mut self, limits: impl Into<AxisLimits>) {
        self.limits[1] = Some(limits.into());
    }

    pub fn set_zlim3d(&mut self, limits: impl Into<AxisLimits>) {
        self.limits[2] = Some(limits.into());
    }

    /// Current limits of all three axes.
    ///
    /// Axes without explicit limits use the artists' data extent. A
    /// zero-width extent is widened around its value and an axes without data
    /// falls back to `EMPTY_AXIS_LIMITS`.
    #[must_use]
    pub fn limits(&self) -> [AxisLimits; 3] {
        let extent = self.data_extent();
        let mut limits = [EMPTY_AXIS_LIMITS; 3];
        for (axis, resolved) in limits.iter_mut().enumerate() {
            *resolved = match (self.limits[axis], extent) {
                (Some(explicit), _) => explicit,
                (None, Some(extent)) => autoscaled(extent[axis]),
                (None, None) => EMPTY_AXIS_LIMITS,
            };
        }
        limits
    }

    /// Data extent of all artists, ignoring non-finite points.
    #[must_use]
    pub fn data_extent(&self) -> Option<[AxisLimits; 3]> {
        let line_points = self.lines.iter().flat_map(|line| line.points());
        let scatter_points = self.scatters.iter().flat_map(|scatter| scatter.points());
        data_extent(line_points.chain(scatter_points).copied())
    }

    /// Adds a polyline and returns it for further styling.
    pub fn plot(&mut self, points: Vec<Point3>, color: &ColorSpec) -> PlotResult<&mut Line3D> {
        let line = Line3D::new(points, color)?;
        self.lines.push(line);
        let index = self.lines.len() - 1;
        Ok(&mut self.lines[index])
    }

    /// Adds markers at `points` and returns them for further styling.
    pub fn scatter(
        &mut self,
        points: impl IntoIterator<Item = Point3>,
        color: &ColorSpec,
    ) -> PlotResult<&mut Scatter3D> {
        let scatter = Scatter3D::new(points, color)?;
        self.scatters.push(scatter);
        let index = self.scatters.len() - 1;
        Ok(&mut self.scatters[index])
    }

    #[must_use]
    pub fn lines(&self) -> &[Line3D] {
        &self.lines
    }

    #[must_use]
    pub fn scatters(&self) -> &[Scatter3D] {
        &self.scatters
    }

    /// Enables the legend with the given placement.
    pub fn legend(&mut self, placement: LegendPlacement) -> PlotResult<()> {
        placement.validate()?;
        self.legend = Some(placement);
        Ok(())
    }

    #[must_use]
    pub fn legend_placement(&self) -> Option<LegendPlacement> {
        self.legend
    }

    /// Labeled artists in legend order: lines first, then markers.
    #[must_use]
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        let lines = self.lines.iter().filter_map(|line| {
            line.label().map(|label| LegendEntry {
                label: label.to_owned(),
                color: line.color(),
                kind: LegendEntryKind::Line,
            })
        });
        let markers = self.scatters.iter().filter_map(|scatter| {
            scatter.label().map(|label| LegendEntry {
                label: label.to_owned(),
                color: scatter.color(),
                kind: LegendEntryKind::Marker,
            })
        });
        lines.chain(markers).collect()
    }

    pub(super) fn ensure_renderable_limits(&self) -> PlotResult<[AxisLimits; 3]> {
        let limits = self.limits();
        for (axis, limit) in ["x", "y", "z"].into_iter().zip(limits) {
            if !limit.is_finite() || limit.min == limit.max {
                return Err(PlotError::InvalidData(format!(
                    "{axis} limits must be finite and non-empty, got ({}, {})",
                    limit.min, limit.max
                )));
            }
        }
        Ok(limits)
    }
}

fn autoscaled(extent: AxisLimits) -> AxisLimits {
    if extent.min != extent.max {
        return extent;
    }
    let half_width = if extent.min == 0.0 {
        DEGENERATE_EXPANDER
    } else {
        DEGENERATE_EXPANDER * extent.min.abs()
    };
    AxisLimits::around(extent.min, half_width)
}
