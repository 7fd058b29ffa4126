use trajplot::PlotError;
use trajplot::core::{Point3, TrajectoryTensor};

#[test]
fn rejects_non_three_dimensional_shapes() {
    let err = TrajectoryTensor::from_shape_vec(&[4, 3], vec![0.0; 12])
        .expect_err("2-d shape must fail");
    assert!(matches!(err, PlotError::ShapeMismatch { .. }));

    let err = TrajectoryTensor::from_shape_vec(&[2, 1, 1, 3], vec![0.0; 6])
        .expect_err("4-d shape must fail");
    assert!(matches!(err, PlotError::ShapeMismatch { .. }));
}

#[test]
fn rejects_last_dimension_other_than_three() {
    let err = TrajectoryTensor::from_shape_vec(&[5, 2, 2], vec![0.0; 20])
        .expect_err("planar positions must fail");
    assert!(matches!(err, PlotError::ShapeMismatch { .. }));
}

#[test]
fn rejects_data_that_does_not_fill_the_shape() {
    let err = TrajectoryTensor::from_shape_vec(&[5, 2, 3], vec![0.0; 29])
        .expect_err("short data must fail");
    assert!(matches!(err, PlotError::ShapeMismatch { .. }));
}

#[test]
fn rejects_tensor_without_time_steps() {
    let err = TrajectoryTensor::from_shape_vec(&[0, 2, 3], Vec::new())
        .expect_err("no final position without steps");
    assert!(matches!(err, PlotError::ShapeMismatch { .. }));
}

#[test]
fn from_steps_rejects_ragged_entity_counts() {
    let err = TrajectoryTensor::from_steps(&[
        vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
        vec![[0.0, 0.0, 0.0]],
    ])
    .expect_err("ragged steps must fail");
    assert!(matches!(err, PlotError::ShapeMismatch { .. }));
}

#[test]
fn entity_path_follows_time_order() {
    let tensor = TrajectoryTensor::from_steps(&[
        vec![[0.0, 0.0, 0.0], [10.0, 0.0, 0.0]],
        vec![[1.0, 0.0, 0.0], [10.0, 1.0, 0.0]],
        vec![[2.0, 0.0, 0.0], [10.0, 2.0, 0.0]],
    ])
    .expect("tensor");

    assert_eq!(tensor.shape(), [3, 2, 3]);
    assert_eq!(
        tensor.entity_path(1).expect("path"),
        vec![
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(10.0, 1.0, 0.0),
            Point3::new(10.0, 2.0, 0.0),
        ]
    );
    assert_eq!(
        tensor.final_position(0).expect("final"),
        Point3::new(2.0, 0.0, 0.0)
    );
}

#[test]
fn out_of_range_entity_is_an_index_error() {
    let tensor = TrajectoryTensor::from_shape_vec(&[1, 1, 3], vec![1.0, 2.0, 3.0]).expect("tensor");
    let err = tensor.entity_path(1).expect_err("entity 1 does not exist");
    assert!(matches!(
        err,
        PlotError::IndexOutOfRange {
            what: "entity",
            index: 1,
            len: 1
        }
    ));
}

#[test]
fn shape_whose_element_count_overflows_is_a_shape_error() {
    let err = TrajectoryTensor::from_shape_vec(&[1 << 62, 4, 3], Vec::new())
        .expect_err("element count overflows usize");
    assert!(matches!(err, PlotError::ShapeMismatch { .. }));

    let err = TrajectoryTensor::from_shape_vec(&[usize::MAX, usize::MAX, 3], vec![0.0; 3])
        .expect_err("element count overflows usize");
    assert!(matches!(err, PlotError::ShapeMismatch { .. }));
}

#[test]
fn tensor_without_entities_has_no_paths() {
    let tensor = TrajectoryTensor::from_shape_vec(&[3, 0, 3], Vec::new()).expect("tensor");
    assert_eq!(tensor.entities(), 0);
    assert_eq!(tensor.shape(), [3, 0, 3]);
    assert!(tensor.final_position(0).is_err());
}
