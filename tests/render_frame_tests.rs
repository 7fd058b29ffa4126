use approx::assert_relative_eq;
use trajplot::api::{Figure, LegendPlacement};
use trajplot::core::{AxisLimits, PixelRect, Point3, ViewAngles, ViewProjection};
use trajplot::render::{ColorSpec, NullRenderer, Renderer};

#[test]
fn figure_viewport_follows_size_and_dpi() {
    let figure = Figure::new(6.4, 4.8, 100.0).expect("figure");
    let viewport = figure.viewport();
    assert_eq!((viewport.width, viewport.height), (640, 480));

    let rect = figure.axes_rect();
    assert_relative_eq!(rect.x, 80.0, epsilon = 1e-9);
    assert_relative_eq!(rect.right(), 576.0, epsilon = 1e-9);
}

#[test]
fn tiny_figure_rounds_to_invalid_viewport() {
    let err = Figure::new(0.001, 1.0, 100.0).expect_err("rounds to zero pixels");
    assert!(matches!(err, trajplot::PlotError::InvalidViewport { .. }));
}

#[test]
fn figure_beyond_pixel_range_is_rejected() {
    let err = Figure::new(1.0e9, 1.0, 100.0).expect_err("width exceeds u32 pixels");
    assert!(matches!(err, trajplot::PlotError::InvalidData(_)));
}

#[test]
fn subplots_adjust_right_rejects_crossing_left() {
    let mut figure = Figure::new(4.0, 4.0, 100.0).expect("figure");
    assert!(figure.subplots_adjust_right(0.1).is_err());
    figure.subplots_adjust_right(0.7).expect("valid right");
    assert_relative_eq!(figure.axes_rect().right(), 280.0, epsilon = 1e-9);
}

#[test]
fn axes_center_projects_to_axes_rect_center() {
    let rect = PixelRect::new(50.0, 20.0, 300.0, 200.0);
    let projection = ViewProjection::new(
        ViewAngles::default(),
        [
            AxisLimits::new(-1.0, 3.0),
            AxisLimits::new(10.0, 14.0),
            AxisLimits::new(0.0, 4.0),
        ],
        rect,
    )
    .expect("projection");

    let (x, y) = projection
        .project(Point3::new(1.0, 12.0, 2.0))
        .expect("center");
    let (cx, cy) = rect.center();
    assert_relative_eq!(x, cx, epsilon = 1e-9);
    assert_relative_eq!(y, cy, epsilon = 1e-9);
}

#[test]
fn projected_axes_box_stays_inside_axes_rect() {
    let figure = Figure::new(6.0, 4.0, 100.0).expect("figure");
    let frame = figure.build_render_frame().expect("frame");
    let rect = figure.axes_rect();

    assert_eq!(frame.lines.len(), 12);
    for line in &frame.lines {
        for (x, y) in [(line.x1, line.y1), (line.x2, line.y2)] {
            assert!(x >= rect.x - 1e-9 && x <= rect.right() + 1e-9);
            assert!(y >= rect.y - 1e-9 && y <= rect.bottom() + 1e-9);
        }
    }
}

#[test]
fn single_point_line_emits_no_segments() {
    let mut figure = Figure::new(4.0, 4.0, 100.0).expect("figure");
    figure
        .axes_mut()
        .plot(vec![Point3::new(1.0, 1.0, 1.0)], &ColorSpec::from("b"))
        .expect("line");

    let frame = figure.build_render_frame().expect("frame");
    assert_eq!(frame.lines.len(), 12);
}

#[test]
fn labeled_lines_get_line_handles_in_legend() {
    let mut figure = Figure::new(4.0, 4.0, 100.0).expect("figure");
    let axes = figure.axes_mut();
    let line = axes
        .plot(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)],
            &ColorSpec::from("m"),
        )
        .expect("line");
    line.set_label("path");
    axes.legend(LegendPlacement::default()).expect("legend");

    let frame = figure.build_render_frame().expect("frame");
    // box edges, one segment, one legend handle
    assert_eq!(frame.lines.len(), 12 + 1 + 1);
    assert_eq!(frame.rects.len(), 1);
    assert!(frame.texts.iter().any(|text| text.text == "path"));
}

#[test]
fn explicit_degenerate_limits_fail_to_render() {
    let mut figure = Figure::new(4.0, 4.0, 100.0).expect("figure");
    figure.axes_mut().set_zlim3d((2.0, 2.0));
    assert!(figure.build_render_frame().is_err());
}

#[test]
fn null_renderer_validates_frames() {
    let figure = Figure::new(4.0, 3.0, 80.0).expect("figure");
    let mut frame = figure.build_render_frame().expect("frame");
    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("valid frame");
    assert_eq!(renderer.frames_rendered, 1);

    frame.lines[0].stroke_width = 0.0;
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 1);
}
