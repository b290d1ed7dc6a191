pub mod arc_2d;
pub mod distance_3d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Default tolerance for point coincidence on boundary curves.
///
/// Curve evaluation by a CAD host introduces rounding, so picked points and
/// junctions are compared within this distance rather than exactly.
pub const TOLERANCE: f64 = 1e-9;

/// Returns whether two points coincide within `tolerance`.
#[must_use]
pub fn points_almost_equal(a: &Point3, b: &Point3, tolerance: f64) -> bool {
    (a - b).norm() <= tolerance
}

/// Returns `point` moved vertically onto the plane `z = elevation`.
#[must_use]
pub fn with_elevation(point: &Point3, elevation: f64) -> Point3 {
    Point3::new(point.x, point.y, elevation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn almost_equal_within_tolerance() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0 + 1e-12, 2.0, 3.0 - 1e-12);
        assert!(points_almost_equal(&a, &b, TOLERANCE));
    }

    #[test]
    fn almost_equal_rejects_distant_points() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0, 2.0, 3.001);
        assert!(!points_almost_equal(&a, &b, TOLERANCE));
    }

    #[test]
    fn with_elevation_keeps_plan_position() {
        let p = with_elevation(&Point3::new(4.0, -2.0, 7.5), 0.25);
        assert!((p.x - 4.0).abs() < f64::EPSILON);
        assert!((p.y + 2.0).abs() < f64::EPSILON);
        assert!((p.z - 0.25).abs() < f64::EPSILON);
    }
}
