use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::axis_limits::AxisLimits;
use crate::core::scale::LinearScale;
use crate::core::types::{PixelRect, Point3};
use crate::error::{PlotError, PlotResult};

/// Camera orientation of a 3D axes, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewAngles {
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
}

impl ViewAngles {
    #[must_use]
    pub const fn new(elevation_deg: f64, azimuth_deg: f64) -> Self {
        Self {
            elevation_deg,
            azimuth_deg,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.elevation_deg.is_finite() || !self.azimuth_deg.is_finite() {
            return Err(PlotError::InvalidData(
                "view angles must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for ViewAngles {
    fn default() -> Self {
        Self::new(30.0, -60.0)
    }
}

/// Orthographic projection of a limited 3D data box into a pixel rectangle.
///
/// Each axis is first normalized into `[-0.5, 0.5]` with its limits, so the
/// displayed box is always a cube on screen. Equal data ranges are what make
/// it an equal-scale cube in data space too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewProjection {
    scales: [LinearScale; 3],
    right: [f64; 3],
    up: [f64; 3],
    pixels_per_unit: f64,
    origin_x: f64,
    origin_y: f64,
}

impl ViewProjection {
    pub fn new(view: ViewAngles, limits: [AxisLimits; 3], rect: PixelRect) -> PlotResult<Self> {
        view.validate()?;
        if !(rect.width > 0.0 && rect.height > 0.0) {
            return Err(PlotError::InvalidData(
                "projection rect must have positive size".to_owned(),
            ));
        }

        let scales = [
            LinearScale::from_limits(limits[0])?,
            LinearScale::from_limits(limits[1])?,
            LinearScale::from_limits(limits[2])?,
        ];

        let (sin_az, cos_az) = view.azimuth_deg.to_radians().sin_cos();
        let (sin_el, cos_el) = view.elevation_deg.to_radians().sin_cos();
        let right = [-sin_az, cos_az, 0.0];
        let up = [-sin_el * cos_az, -sin_el * sin_az, cos_el];

        // The projected cube is point-symmetric, so its extent is twice the
        // largest corner offset along each screen axis.
        let mut half_width: f64 = 0.0;
        let mut half_height: f64 = 0.0;
        for corner in unit_cube_corners() {
            half_width = half_width.max(dot(corner, right).abs());
            half_height = half_height.max(dot(corner, up).abs());
        }
        if half_width <= 0.0 || half_height <= 0.0 {
            return Err(PlotError::InvalidData(
                "projected axes box is degenerate".to_owned(),
            ));
        }

        let pixels_per_unit =
            (rect.width / (2.0 * half_width)).min(rect.height / (2.0 * half_height));
        let (origin_x, origin_y) = rect.center();

        Ok(Self {
            scales,
            right,
            up,
            pixels_per_unit,
            origin_x,
            origin_y,
        })
    }

    /// Projects one data-space point to pixel coordinates (y grows downward).
    pub fn project(&self, point: Point3) -> PlotResult<(f64, f64)> {
        let unit = [
            self.scales[0].to_unit_centered(point.x)?,
            self.scales[1].to_unit_centered(point.y)?,
            self.scales[2].to_unit_centered(point.z)?,
        ];
        Ok(self.project_unit(unit))
    }

    /// Projects a point already expressed in the centered unit cube.
    #[must_use]
    pub fn project_unit(&self, unit: [f64; 3]) -> (f64, f64) {
        let screen_x = dot(unit, self.right);
        let screen_y = dot(unit, self.up);
        (
            self.origin_x + screen_x * self.pixels_per_unit,
            self.origin_y - screen_y * self.pixels_per_unit,
        )
    }

    /// Projects a point series; points with a non-finite coordinate map to
    /// `None` so callers can leave a gap there.
    pub fn project_many(&self, points: &[Point3]) -> PlotResult<Vec<Option<(f64, f64)>>> {
        #[cfg(feature = "parallel-projection")]
        {
            let projected: Vec<PlotResult<Option<(f64, f64)>>> = points
                .par_iter()
                .map(|point| self.project_if_finite(*point))
                .collect();
            projected.into_iter().collect()
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            points
                .iter()
                .map(|point| self.project_if_finite(*point))
                .collect()
        }
    }

    fn project_if_finite(&self, point: Point3) -> PlotResult<Option<(f64, f64)>> {
        if point.is_finite() {
            self.project(point).map(Some)
        } else {
            Ok(None)
        }
    }

    /// The 12 edges of the axes box as pairs of projected corners.
    #[must_use]
    pub fn box_edges(&self) -> Vec<((f64, f64), (f64, f64))> {
        let corners = unit_cube_corners();
        let mut edges = Vec::with_capacity(12);
        for (i, a) in corners.iter().enumerate() {
            for b in &corners[i + 1..] {
                let differing = a.iter().zip(b).filter(|(p, q)| p != q).count();
                if differing == 1 {
                    edges.push((self.project_unit(*a), self.project_unit(*b)));
                }
            }
        }
        edges
    }
}

fn unit_cube_corners() -> [[f64; 3]; 8] {
    let mut corners = [[0.0; 3]; 8];
    for (index, corner) in corners.iter_mut().enumerate() {
        for (axis, value) in corner.iter_mut().enumerate() {
            *value = if index & (1 << axis) == 0 { -0.5 } else { 0.5 };
        }
    }
    corners
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}
