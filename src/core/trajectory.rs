use serde::Serialize;

use crate::core::types::Point3;
use crate::error::{PlotError, PlotResult};

/// Number of spatial coordinates per position.
pub const SPATIAL_DIMS: usize = 3;

/// Positions of several entities over time.
///
/// Indexed as `[time_step, entity, dimension]` with `dimension` in `0..3`
/// mapping to x, y, z. Storage is row-major, so the three coordinates of one
/// entity at one step are contiguous.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryTensor {
    steps: usize,
    entities: usize,
    data: Vec<f64>,
}

impl TrajectoryTensor {
    /// Builds a tensor from an explicit shape and flat row-major data.
    ///
    /// Fails with `ShapeMismatch` when the shape is not 3-dimensional, when
    /// the last dimension is not 3, or when `data` does not fill the shape.
    pub fn from_shape_vec(shape: &[usize], data: Vec<f64>) -> PlotResult<Self> {
        let &[steps, entities, dims] = shape else {
            return Err(PlotError::ShapeMismatch {
                expected: "3-dimensional shape (steps, entities, 3)".to_owned(),
                actual: format!("{}-dimensional shape {shape:?}", shape.len()),
            });
        };
        if dims != SPATIAL_DIMS {
            return Err(PlotError::ShapeMismatch {
                expected: format!("last dimension of {SPATIAL_DIMS}"),
                actual: format!("last dimension of {dims}"),
            });
        }
        if steps == 0 {
            return Err(PlotError::ShapeMismatch {
                expected: "at least one time step".to_owned(),
                actual: format!("shape {shape:?}"),
            });
        }

        let Some(expected_len) = steps
            .checked_mul(entities)
            .and_then(|len| len.checked_mul(SPATIAL_DIMS))
        else {
            return Err(PlotError::ShapeMismatch {
                expected: "a shape whose element count fits in usize".to_owned(),
                actual: format!("shape {shape:?}"),
            });
        };
        if data.len() != expected_len {
            return Err(PlotError::ShapeMismatch {
                expected: format!("{expected_len} values for shape {shape:?}"),
                actual: format!("{} values", data.len()),
            });
        }

        Ok(Self {
            steps,
            entities,
            data,
        })
    }

    /// Builds a tensor from per-step entity positions.
    ///
    /// Every step must list the same number of entities.
    pub fn from_steps(steps: &[Vec<[f64; 3]>]) -> PlotResult<Self> {
        let entities = steps.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(steps.len() * entities * SPATIAL_DIMS);
        for (step, positions) in steps.iter().enumerate() {
            if positions.len() != entities {
                return Err(PlotError::ShapeMismatch {
                    expected: format!("{entities} entities per step"),
                    actual: format!("{} entities at step {step}", positions.len()),
                });
            }
            for position in positions {
                data.extend_from_slice(position);
            }
        }
        Self::from_shape_vec(&[steps.len(), entities, SPATIAL_DIMS], data)
    }

    #[must_use]
    pub fn shape(&self) -> [usize; 3] {
        [self.steps, self.entities, SPATIAL_DIMS]
    }

    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[must_use]
    pub fn entities(&self) -> usize {
        self.entities
    }

    /// Position of `entity` at `step`.
    pub fn position(&self, step: usize, entity: usize) -> PlotResult<Point3> {
        if step >= self.steps {
            return Err(PlotError::IndexOutOfRange {
                what: "time step",
                index: step,
                len: self.steps,
            });
        }
        if entity >= self.entities {
            return Err(PlotError::IndexOutOfRange {
                what: "entity",
                index: entity,
                len: self.entities,
            });
        }
        let offset = (step * self.entities + entity) * SPATIAL_DIMS;
        Ok(Point3::new(
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ))
    }

    /// Full time series of one entity.
    pub fn entity_path(&self, entity: usize) -> PlotResult<Vec<Point3>> {
        (0..self.steps)
            .map(|step| self.position(step, entity))
            .collect()
    }

    /// Position of `entity` at the last time step.
    pub fn final_position(&self, entity: usize) -> PlotResult<Point3> {
        self.position(self.steps - 1, entity)
    }
}
