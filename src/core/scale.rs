use crate::core::axis_limits::AxisLimits;
use crate::error::{PlotError, PlotResult};

/// Affine map from one axis' data domain onto the unit interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> PlotResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(PlotError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    pub fn from_limits(limits: AxisLimits) -> PlotResult<Self> {
        Self::new(limits.min, limits.max)
    }

    /// Maps `domain_start` to `0.0` and `domain_end` to `1.0`.
    pub fn normalize(self, value: f64) -> PlotResult<f64> {
        if !value.is_finite() {
            return Err(PlotError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        Ok((value - self.domain_start) / span)
    }

    /// Maps the domain onto `[-0.5, 0.5]`, the unit cube used by projection.
    pub fn to_unit_centered(self, value: f64) -> PlotResult<f64> {
        Ok(self.normalize(value)? - 0.5)
    }
}
