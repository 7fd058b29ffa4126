use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::Point3;

/// Displayed `(min, max)` range of one spatial axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub min: f64,
    pub max: f64,
}

impl AxisLimits {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Absolute span, independent of orientation.
    #[must_use]
    pub fn range(self) -> f64 {
        (self.max - self.min).abs()
    }

    #[must_use]
    pub fn center(self) -> f64 {
        (self.min + self.max) / 2.0
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Limits of `[center - radius, center + radius]`.
    #[must_use]
    pub fn around(center: f64, radius: f64) -> Self {
        Self::new(center - radius, center + radius)
    }
}

impl From<(f64, f64)> for AxisLimits {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

impl From<AxisLimits> for (f64, f64) {
    fn from(limits: AxisLimits) -> Self {
        (limits.min, limits.max)
    }
}

/// Per-axis extent of `points`.
///
/// Points with a non-finite coordinate are skipped; `None` when no finite
/// point remains.
#[must_use]
pub fn data_extent(points: impl IntoIterator<Item = Point3>) -> Option<[AxisLimits; 3]> {
    let mut extent: Option<[AxisLimits; 3]> = None;
    for point in points.into_iter().filter(|point| point.is_finite()) {
        let coords = [point.x, point.y, point.z];
        match extent.as_mut() {
            Some(limits) => {
                for (axis, value) in limits.iter_mut().zip(coords) {
                    axis.min = axis.min.min(value);
                    axis.max = axis.max.max(value);
                }
            }
            None => extent = Some(coords.map(|value| AxisLimits::new(value, value))),
        }
    }
    extent
}

/// Half of the largest span among the three axes.
///
/// The bounding box of an equalized plot is a sphere in the infinity norm,
/// so this is its radius. A NaN span wins the comparison and propagates.
#[must_use]
pub fn plot_radius(x: AxisLimits, y: AxisLimits, z: AxisLimits) -> f64 {
    let widest = [x.range(), y.range(), z.range()]
        .into_iter()
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |range| range.0);
    0.5 * widest
}

/// Returns limits with identical spans on all three axes.
///
/// Each axis keeps its own center and receives the half-width of the widest
/// input axis. Inputs are not validated.
#[must_use]
pub fn equalize(
    x: AxisLimits,
    y: AxisLimits,
    z: AxisLimits,
) -> (AxisLimits, AxisLimits, AxisLimits) {
    let radius = plot_radius(x, y, z);
    (
        AxisLimits::around(x.center(), radius),
        AxisLimits::around(y.center(), radius),
        AxisLimits::around(z.center(), radius),
    )
}
