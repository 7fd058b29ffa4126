//! trajplot: 3D trajectory plots with equal-scale axes.
//!
//! The crate keeps a small explicit-handle figure model (`Figure`, `Axes3D`,
//! line and scatter artists), flattens it into a backend-agnostic
//! `RenderFrame`, and hands that frame to a `Renderer` (headless, Cairo
//! offscreen, or a GTK4 window).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{
    Axes3D, Figure, TrajectoryPlotConfig, build_trajectory_figure, equalize_3d_axes,
    plot_3d_trajectory,
};
pub use crate::core::{AxisLimits, TrajectoryTensor, equalize};
pub use error::{PlotError, PlotResult};
