mod artists;
mod axes3d;
mod config;
mod equalize;
mod figure;
mod legend;
mod render_frame_builder;
mod trajectory;

pub use artists::{DEFAULT_LINE_WIDTH_PX, DEFAULT_MARKER_RADIUS_PX, Line3D, Scatter3D};
pub use axes3d::{Axes3D, EMPTY_AXIS_LIMITS};
pub use config::{
    TRAJECTORY_PLOT_CONFIG_JSON_SCHEMA_V1, TrajectoryPlotConfig,
    TrajectoryPlotConfigJsonContractV1,
};
pub use equalize::equalize_3d_axes;
pub use figure::{Figure, SubplotParams};
pub use legend::{LegendEntry, LegendEntryKind, LegendPlacement};
pub use trajectory::{build_trajectory_figure, plot_3d_trajectory};
