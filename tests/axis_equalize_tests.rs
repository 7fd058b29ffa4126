use approx::assert_relative_eq;
use trajplot::api::{Axes3D, equalize_3d_axes};
use trajplot::core::{AxisLimits, Point3, data_extent, equalize, plot_radius};
use trajplot::render::ColorSpec;

#[test]
fn equalize_widens_narrow_axes_around_their_centers() {
    let (x, y, z) = equalize(
        AxisLimits::new(0.0, 10.0),
        AxisLimits::new(-2.0, 2.0),
        AxisLimits::new(5.0, 5.0),
    );

    assert_eq!(x, AxisLimits::new(0.0, 10.0));
    assert_eq!(y, AxisLimits::new(-5.0, 5.0));
    assert_eq!(z, AxisLimits::new(0.0, 10.0));
}

#[test]
fn equalize_keeps_already_equal_limits() {
    let cube = (
        AxisLimits::new(-1.0, 1.0),
        AxisLimits::new(3.0, 5.0),
        AxisLimits::new(10.0, 12.0),
    );
    assert_eq!(equalize(cube.0, cube.1, cube.2), cube);
}

#[test]
fn reversed_limits_are_rebuilt_in_ascending_order() {
    let (x, _, _) = equalize(
        AxisLimits::new(4.0, 0.0),
        AxisLimits::new(0.0, 1.0),
        AxisLimits::new(0.0, 1.0),
    );
    assert_eq!(x, AxisLimits::new(0.0, 4.0));
}

#[test]
fn infinite_limits_propagate_without_error() {
    let (x, y, _) = equalize(
        AxisLimits::new(0.0, f64::INFINITY),
        AxisLimits::new(0.0, 1.0),
        AxisLimits::new(0.0, 1.0),
    );
    assert!(!x.is_finite());
    assert!(!y.is_finite());
}

#[test]
fn plot_radius_is_half_the_widest_range() {
    let radius = plot_radius(
        AxisLimits::new(-3.0, 1.0),
        AxisLimits::new(0.0, 7.0),
        AxisLimits::new(2.0, 2.5),
    );
    assert_relative_eq!(radius, 3.5);
}

#[test]
fn equalize_3d_axes_writes_limits_back_in_place() {
    let mut axes = Axes3D::new();
    axes.set_xlim3d((0.0, 10.0));
    axes.set_ylim3d((-2.0, 2.0));
    axes.set_zlim3d((5.0, 5.0));

    equalize_3d_axes(&mut axes);

    assert_eq!(axes.xlim3d(), AxisLimits::new(0.0, 10.0));
    assert_eq!(axes.ylim3d(), AxisLimits::new(-5.0, 5.0));
    assert_eq!(axes.zlim3d(), AxisLimits::new(0.0, 10.0));
}

#[test]
fn equalize_3d_axes_uses_autoscaled_data_limits() {
    let mut axes = Axes3D::new();
    axes.plot(
        vec![Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 1.0, 2.0)],
        &ColorSpec::from("k"),
    )
    .expect("line");

    equalize_3d_axes(&mut axes);

    assert_eq!(axes.xlim3d(), AxisLimits::new(0.0, 4.0));
    assert_eq!(axes.ylim3d(), AxisLimits::new(-1.5, 2.5));
    assert_eq!(axes.zlim3d(), AxisLimits::new(-1.0, 3.0));
}

#[test]
fn equalize_3d_axes_on_empty_axes_keeps_unit_cube() {
    let mut axes = Axes3D::new();
    equalize_3d_axes(&mut axes);
    for limits in axes.limits() {
        assert_eq!(limits, AxisLimits::new(0.0, 1.0));
    }
}

#[test]
fn flat_small_scale_data_keeps_its_scale() {
    let mut axes = Axes3D::new();
    axes.plot(
        vec![
            Point3::new(0.0, 0.0, 1.0e-3),
            Point3::new(2.0e-3, 1.0e-3, 1.0e-3),
        ],
        &ColorSpec::from("k"),
    )
    .expect("line");

    assert_relative_eq!(axes.zlim3d().range(), 1.0e-4, epsilon = 1e-15);

    equalize_3d_axes(&mut axes);

    assert_relative_eq!(axes.xlim3d().range(), 2.0e-3, epsilon = 1e-15);
    assert_relative_eq!(axes.zlim3d().min, 0.0, epsilon = 1e-15);
    assert_relative_eq!(axes.zlim3d().max, 2.0e-3, epsilon = 1e-15);
}

#[test]
fn flat_data_at_zero_widens_to_a_small_fixed_range() {
    let mut axes = Axes3D::new();
    axes.plot(
        vec![Point3::new(-1.0, 0.0, 0.0), Point3::new(1.0, 2.0, 0.0)],
        &ColorSpec::from("k"),
    )
    .expect("line");

    assert_eq!(axes.zlim3d(), AxisLimits::new(-0.05, 0.05));
}

#[test]
fn data_extent_skips_non_finite_points() {
    let extent = data_extent([
        Point3::new(1.0, -2.0, 3.0),
        Point3::new(f64::NAN, 100.0, 100.0),
        Point3::new(-1.0, 2.0, f64::INFINITY),
        Point3::new(0.0, 4.0, 5.0),
    ])
    .expect("finite points exist");

    assert_eq!(
        extent,
        [
            AxisLimits::new(0.0, 1.0),
            AxisLimits::new(-2.0, 4.0),
            AxisLimits::new(3.0, 5.0),
        ]
    );
    assert_eq!(data_extent([Point3::new(f64::NAN, 0.0, 0.0)]), None);
    assert_eq!(data_extent(Vec::<Point3>::new()), None);
}
