use tracing::trace;

use crate::core::{PixelRect, ViewProjection};
use crate::error::PlotResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::legend::{LegendEntry, LegendEntryKind, LegendPlacement};
use super::{Axes3D, Figure};

const AXES_BOX_COLOR: Color = Color::rgb(0.5, 0.5, 0.5);
const AXES_BOX_WIDTH_PX: f64 = 0.8;
const TEXT_COLOR: Color = Color::BLACK;
const AXIS_TITLE_FONT_PT: f64 = 10.0;
/// Distance of axis titles from the axes box, in unit-cube lengths.
const AXIS_TITLE_OFFSET: f64 = 0.18;

const LEGEND_FILL: Color = Color::rgba(1.0, 1.0, 1.0, 0.8);
const LEGEND_BORDER: Color = Color::rgb(0.8, 0.8, 0.8);
const LEGEND_ROW_HEIGHT_EM: f64 = 1.4;
const LEGEND_PADDING_EM: f64 = 0.5;
const LEGEND_HANDLE_WIDTH_EM: f64 = 2.0;
const LEGEND_LINE_HANDLE_WIDTH_PX: f64 = 1.5;
/// Approximate glyph advance used to size the legend box.
const LEGEND_CHAR_WIDTH_EM: f64 = 0.6;

impl Figure {
    /// Flattens the figure into backend-agnostic draw primitives.
    ///
    /// Contents: the 12 projected edges of the axes box, the three axis
    /// titles, the segments of every line, one circle per scatter point and,
    /// when enabled, the legend box with one handle and one text per entry.
    /// Non-finite data points are not drawn; a line is split where one occurs.
    pub fn build_render_frame(&self) -> PlotResult<RenderFrame> {
        let axes = self.axes();
        let axes_rect = self.axes_rect();
        let limits = axes.ensure_renderable_limits()?;
        let projection = ViewProjection::new(axes.view(), limits, axes_rect)?;

        let mut frame = RenderFrame::new(self.viewport().ensure_valid()?);
        push_axes_box(&mut frame, &projection);
        push_axis_titles(&mut frame, &projection, axes, self.points_to_pixels(AXIS_TITLE_FONT_PT));

        for line in axes.lines() {
            let projected = projection.project_many(line.points())?;
            for segment in projected.windows(2) {
                // A non-finite point breaks the polyline.
                let (Some((x1, y1)), Some((x2, y2))) = (segment[0], segment[1]) else {
                    continue;
                };
                frame
                    .lines
                    .push(LinePrimitive::new(x1, y1, x2, y2, line.width_px(), line.color()));
            }
        }

        for scatter in axes.scatters() {
            for (x, y) in projection.project_many(scatter.points())?.into_iter().flatten() {
                frame.circles.push(CirclePrimitive::new(
                    x,
                    y,
                    scatter.radius_px(),
                    scatter.color(),
                ));
            }
        }

        if let Some(placement) = axes.legend_placement() {
            let entries = axes.legend_entries();
            if !entries.is_empty() {
                push_legend(self, &mut frame, axes_rect, placement, &entries);
            }
        }

        trace!(
            lines = frame.lines.len(),
            circles = frame.circles.len(),
            texts = frame.texts.len(),
            "built figure render frame"
        );
        Ok(frame)
    }
}

fn push_axes_box(frame: &mut RenderFrame, projection: &ViewProjection) {
    for ((x1, y1), (x2, y2)) in projection.box_edges() {
        frame.lines.push(LinePrimitive::new(
            x1,
            y1,
            x2,
            y2,
            AXES_BOX_WIDTH_PX,
            AXES_BOX_COLOR,
        ));
    }
}

fn push_axis_titles(
    frame: &mut RenderFrame,
    projection: &ViewProjection,
    axes: &Axes3D,
    font_size_px: f64,
) {
    let outside = 0.5 + AXIS_TITLE_OFFSET;
    // Each title sits beside the middle of one lower edge parallel to its axis.
    let anchors = [
        [0.0, -outside, -0.5],
        [outside, 0.0, -0.5],
        [-outside, -outside, 0.0],
    ];
    for (title, anchor) in axes.labels().into_iter().zip(anchors) {
        if title.is_empty() {
            continue;
        }
        let (x, y) = projection.project_unit(anchor);
        frame.texts.push(TextPrimitive::new(
            title,
            x,
            y,
            font_size_px,
            TEXT_COLOR,
            TextHAlign::Center,
        ));
    }
}

fn push_legend(
    figure: &Figure,
    frame: &mut RenderFrame,
    axes_rect: PixelRect,
    placement: LegendPlacement,
    entries: &[LegendEntry],
) {
    let em = figure.points_to_pixels(placement.font_size_pt);
    let padding = LEGEND_PADDING_EM * em;
    let row_height = LEGEND_ROW_HEIGHT_EM * em;
    let handle_width = LEGEND_HANDLE_WIDTH_EM * em;
    let widest_label = entries
        .iter()
        .map(|entry| entry.label.chars().count())
        .max()
        .unwrap_or(0);

    let box_width =
        padding * 3.0 + handle_width + widest_label as f64 * LEGEND_CHAR_WIDTH_EM * em;
    let box_height = padding * 2.0 + row_height * entries.len() as f64;

    // Anchor is the center-right point of the legend in axes fractions.
    let anchor_x = axes_rect.x + placement.anchor_x * axes_rect.width;
    let anchor_y = axes_rect.bottom() - placement.anchor_y * axes_rect.height;
    let left = anchor_x - box_width;
    let top = anchor_y - box_height / 2.0;

    frame.rects.push(
        RectPrimitive::new(left, top, box_width, box_height, LEGEND_FILL)
            .with_border(1.0, LEGEND_BORDER)
            .with_corner_radius(0.2 * em),
    );

    for (row, entry) in entries.iter().enumerate() {
        let center_y = top + padding + row_height * (row as f64 + 0.5);
        let handle_left = left + padding;
        match entry.kind {
            LegendEntryKind::Marker => frame.circles.push(CirclePrimitive::new(
                handle_left + handle_width / 2.0,
                center_y,
                0.3 * em,
                entry.color,
            )),
            LegendEntryKind::Line => frame.lines.push(LinePrimitive::new(
                handle_left,
                center_y,
                handle_left + handle_width,
                center_y,
                LEGEND_LINE_HANDLE_WIDTH_PX,
                entry.color,
            )),
        }
        frame.texts.push(TextPrimitive::new(
            entry.label.as_str(),
            handle_left + handle_width + padding,
            center_y,
            em,
            TEXT_COLOR,
            TextHAlign::Left,
        ));
    }
}
