use super::{Point3, TOLERANCE};

/// Closest point on a bounded segment.
#[derive(Debug, Clone, Copy)]
pub struct SegmentProjection {
    /// Closest point on the segment.
    pub point: Point3,
    /// Parameter of `point` along the segment, in `[0, 1]`.
    pub t: f64,
    /// Distance from the query point to `point`.
    pub distance: f64,
}

/// Projects `p` onto the segment from `a` to `b`, clamping to its ends.
#[must_use]
pub fn project_point_on_segment(p: &Point3, a: &Point3, b: &Point3) -> SegmentProjection {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return SegmentProjection {
            point: *a,
            t: 0.0,
            distance: (p - a).norm(),
        };
    }

    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    let point = a + d * t;
    SegmentProjection {
        point,
        t,
        distance: (p - point).norm(),
    }
}

/// Closest pair of points between two bounded segments.
#[derive(Debug, Clone, Copy)]
pub struct SegmentPairApproach {
    /// Parameter on the first segment, in `[0, 1]`.
    pub s: f64,
    /// Parameter on the second segment, in `[0, 1]`.
    pub t: f64,
    /// Closest point on the first segment.
    pub on_first: Point3,
    /// Closest point on the second segment.
    pub on_second: Point3,
    /// Distance between the two closest points.
    pub distance: f64,
}

/// Finds the closest points between segments `p1 → q1` and `p2 → q2`.
///
/// Parallel segments resolve to the first segment's start clamped against
/// the second, so the returned pair is one of possibly many minimizers.
#[must_use]
pub fn segment_segment_closest(
    p1: &Point3,
    q1: &Point3,
    p2: &Point3,
    q2: &Point3,
) -> SegmentPairApproach {
    let d1 = q1 - p1;
    let d2 = q2 - p2;
    let r = p1 - p2;
    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);
    let eps = TOLERANCE * TOLERANCE;

    let (s, t) = if a <= eps && e <= eps {
        (0.0, 0.0)
    } else if a <= eps {
        (0.0, (f / e).clamp(0.0, 1.0))
    } else {
        let c = d1.dot(&r);
        if e <= eps {
            ((-c / a).clamp(0.0, 1.0), 0.0)
        } else {
            let b = d1.dot(&d2);
            let denom = a * e - b * b;
            let s = if denom > eps {
                ((b * f - c * e) / denom).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let t = (b * s + f) / e;
            if t < 0.0 {
                ((-c / a).clamp(0.0, 1.0), 0.0)
            } else if t > 1.0 {
                (((b - c) / a).clamp(0.0, 1.0), 1.0)
            } else {
                (s, t)
            }
        }
    };

    let on_first = p1 + d1 * s;
    let on_second = p2 + d2 * t;
    SegmentPairApproach {
        s,
        t,
        on_first,
        on_second,
        distance: (on_first - on_second).norm(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    // ── project_point_on_segment ──

    #[test]
    fn projection_perpendicular_foot() {
        let r = project_point_on_segment(&p(1.0, 1.0, 0.0), &p(0.0, 0.0, 0.0), &p(2.0, 0.0, 0.0));
        assert!((r.point.x - 1.0).abs() < TOL, "x={}", r.point.x);
        assert!((r.t - 0.5).abs() < TOL, "t={}", r.t);
        assert!((r.distance - 1.0).abs() < TOL, "d={}", r.distance);
    }

    #[test]
    fn projection_clamps_before_start() {
        let r = project_point_on_segment(&p(-1.0, 0.0, 0.0), &p(0.0, 0.0, 0.0), &p(2.0, 0.0, 0.0));
        assert!(r.point.x.abs() < TOL);
        assert!(r.t.abs() < TOL);
        assert!((r.distance - 1.0).abs() < TOL);
    }

    #[test]
    fn projection_onto_degenerate_segment() {
        let r = project_point_on_segment(&p(3.0, 4.0, 0.0), &p(0.0, 0.0, 0.0), &p(0.0, 0.0, 0.0));
        assert!((r.distance - 5.0).abs() < TOL, "d={}", r.distance);
    }

    // ── segment_segment_closest ──

    #[test]
    fn crossing_segments_meet() {
        let r = segment_segment_closest(
            &p(0.0, 0.0, 0.0),
            &p(2.0, 2.0, 0.0),
            &p(0.0, 2.0, 0.0),
            &p(2.0, 0.0, 0.0),
        );
        assert!(r.distance < TOL, "d={}", r.distance);
        assert!((r.s - 0.5).abs() < TOL);
        assert!((r.t - 0.5).abs() < TOL);
    }

    #[test]
    fn corner_touch_has_zero_distance() {
        let r = segment_segment_closest(
            &p(0.0, 0.0, 0.0),
            &p(10.0, 0.0, 0.0),
            &p(10.0, 10.0, 0.0),
            &p(10.0, 0.0, 0.0),
        );
        assert!(r.distance < TOL, "d={}", r.distance);
        assert!((r.on_first.x - 10.0).abs() < TOL);
    }

    #[test]
    fn skew_segments_keep_vertical_gap() {
        let r = segment_segment_closest(
            &p(0.0, 0.0, 0.0),
            &p(2.0, 0.0, 0.0),
            &p(1.0, -1.0, 3.0),
            &p(1.0, 1.0, 3.0),
        );
        assert!((r.distance - 3.0).abs() < TOL, "d={}", r.distance);
    }

    #[test]
    fn parallel_separated_segments() {
        let r = segment_segment_closest(
            &p(0.0, 0.0, 0.0),
            &p(2.0, 0.0, 0.0),
            &p(0.0, 1.0, 0.0),
            &p(2.0, 1.0, 0.0),
        );
        assert!((r.distance - 1.0).abs() < TOL, "d={}", r.distance);
    }
}
