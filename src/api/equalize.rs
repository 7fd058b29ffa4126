use tracing::debug;

use crate::core::equalize;

use super::Axes3D;

/// Gives the three axes of `axes` the same span, in place.
///
/// Reads the current limits, equalizes them around each axis' own center and
/// writes them back as explicit limits.
pub fn equalize_3d_axes(axes: &mut Axes3D) {
    let [x, y, z] = axes.limits();
    let (x, y, z) = equalize(x, y, z);
    debug!(
        x_min = x.min,
        x_max = x.max,
        y_min = y.min,
        y_max = y.max,
        z_min = z.min,
        z_max = z.max,
        "equalized 3d axes"
    );
    axes.set_xlim3d(x);
    axes.set_ylim3d(y);
    axes.set_zlim3d(z);
}
