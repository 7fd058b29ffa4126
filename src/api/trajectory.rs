use tracing::{debug, trace};

use crate::core::TrajectoryTensor;
use crate::error::{PlotError, PlotResult};
use crate::render::{ColorSpec, Renderer};

use super::{Figure, TrajectoryPlotConfig, equalize_3d_axes};

/// Builds the figure drawn by `plot_3d_trajectory` without displaying it.
///
/// For every entity the full path becomes a line in `colors[i]`, and the last
/// position gets a marker labeled `labels[i]`. The marker reuses the line's
/// resolved color rather than re-resolving `colors[i]`. Axes are equalized
/// afterwards, and the legend is placed outside the right edge when enabled.
///
/// `labels` and `colors` shorter than the entity count fail with
/// `IndexOutOfRange`; extra entries are ignored.
pub fn build_trajectory_figure<S: AsRef<str>>(
    trajectory: &TrajectoryTensor,
    labels: &[S],
    colors: &[ColorSpec],
    config: &TrajectoryPlotConfig,
) -> PlotResult<Figure> {
    config.validate()?;

    let mut figure = Figure::new(config.width, config.height, config.dpi)?;
    let axes = figure.axes_mut();
    axes.set_view(config.view)?;
    axes.set_xlabel("x");
    axes.set_ylabel("y");
    axes.set_zlabel("z");

    let entities = trajectory.entities();
    debug!(
        steps = trajectory.steps(),
        entities,
        show_legend = config.show_legend,
        "plot 3d trajectory"
    );

    for entity in 0..entities {
        let color = colors.get(entity).ok_or(PlotError::IndexOutOfRange {
            what: "color",
            index: entity,
            len: colors.len(),
        })?;
        let path = trajectory.entity_path(entity)?;
        let line = axes.plot(path, color)?;
        line.set_width_px(config.line_width_px)?;
        let rendered = ColorSpec::from(line.color());

        let label = labels.get(entity).ok_or(PlotError::IndexOutOfRange {
            what: "label",
            index: entity,
            len: labels.len(),
        })?;
        let marker = axes.scatter([trajectory.final_position(entity)?], &rendered)?;
        marker.set_radius_px(config.marker_radius_px)?;
        marker.set_label(label.as_ref());
        trace!(entity, label = label.as_ref(), color = %color, "added trajectory");
    }

    equalize_3d_axes(axes);

    if config.show_legend {
        axes.legend(config.legend)?;
        figure.subplots_adjust_right(config.legend.subplot_right)?;
    }

    Ok(figure)
}

/// Draws one line per entity with an end-point marker and hands the figure
/// to `renderer`.
///
/// Errors from figure construction and from the renderer propagate as-is.
pub fn plot_3d_trajectory<R: Renderer, S: AsRef<str>>(
    renderer: &mut R,
    trajectory: &TrajectoryTensor,
    labels: &[S],
    colors: &[ColorSpec],
    config: &TrajectoryPlotConfig,
) -> PlotResult<()> {
    let figure = build_trajectory_figure(trajectory, labels, colors, config)?;
    let frame = figure.build_render_frame()?;
    renderer.render(&frame)?;
    debug!(
        lines = frame.lines.len(),
        circles = frame.circles.len(),
        "displayed trajectory figure"
    );
    Ok(())
}
