pub mod axis_limits;
pub mod projection;
pub mod scale;
pub mod trajectory;
pub mod types;

pub use axis_limits::{AxisLimits, data_extent, equalize, plot_radius};
pub use projection::{ViewAngles, ViewProjection};
pub use scale::LinearScale;
pub use trajectory::{SPATIAL_DIMS, TrajectoryTensor};
pub use types::{PixelRect, Point3, Viewport};
