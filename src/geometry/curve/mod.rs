mod arc;
mod line;

pub use arc::ArcSegment;
pub use line::LineSegment;

use crate::math::Point3;

/// Result of projecting a point onto a bounded curve.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// The closest point on the curve.
    pub point: Point3,
    /// Normalized parameter of `point`, `0` at the start and `1` at the end.
    pub parameter: f64,
    /// Distance from the query point to `point`.
    pub distance: f64,
}

impl Projection {
    /// Returns whether the projected point is the query point itself, i.e. the
    /// query point lies on the curve within `tolerance`.
    #[must_use]
    pub fn coincides(&self, tolerance: f64) -> bool {
        self.distance <= tolerance
    }
}

/// How two bounded curves relate as point sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveRelation {
    /// The curves share no point.
    Disjoint,
    /// The curves meet at one or more points, or overlap partially.
    Overlap,
    /// The first curve lies entirely within the second.
    Subset,
    /// The first curve contains the second.
    Superset,
    /// The curves are the same point set.
    Equal,
}

/// A bounded curve usable as a room boundary segment.
///
/// Implementors need only the endpoint, length, and projection capabilities;
/// [`relate`](Curve::relate) has an endpoint-based default.
pub trait Curve {
    /// Returns the first endpoint.
    fn start(&self) -> Point3;

    /// Returns the second endpoint.
    fn end(&self) -> Point3;

    /// Evaluates the curve at normalized parameter `t` in `[0, 1]`.
    fn point_at(&self, t: f64) -> Point3;

    /// Returns the curve length.
    fn length(&self) -> f64;

    /// Finds the closest point on the curve to `point`.
    fn project(&self, point: &Point3) -> Projection;

    /// Classifies how this curve relates to `other`.
    fn relate(&self, other: &Self, tolerance: f64) -> CurveRelation {
        relate_by_endpoints(self, other, tolerance)
    }
}

/// Classifies two curves from their endpoints and midpoints.
///
/// Curves that touch only through their interiors (a proper crossing) are
/// reported as [`CurveRelation::Disjoint`]; implementors that can detect
/// crossings refine this.
pub fn relate_by_endpoints<A, B>(a: &A, b: &B, tolerance: f64) -> CurveRelation
where
    A: Curve + ?Sized,
    B: Curve + ?Sized,
{
    let on_a = |p: Point3| a.project(&p).coincides(tolerance);
    let on_b = |p: Point3| b.project(&p).coincides(tolerance);

    let (b_start_on_a, b_end_on_a) = (on_a(b.start()), on_a(b.end()));
    let (a_start_on_b, a_end_on_b) = (on_b(a.start()), on_b(a.end()));

    let b_within_a = b_start_on_a && b_end_on_a && on_a(b.point_at(0.5));
    let a_within_b = a_start_on_b && a_end_on_b && on_b(a.point_at(0.5));

    match (a_within_b, b_within_a) {
        (true, true) => {
            if (a.length() - b.length()).abs() <= tolerance {
                CurveRelation::Equal
            } else {
                CurveRelation::Overlap
            }
        }
        (true, false) => CurveRelation::Subset,
        (false, true) => CurveRelation::Superset,
        (false, false) => {
            if b_start_on_a || b_end_on_a || a_start_on_b || a_end_on_b {
                CurveRelation::Overlap
            } else {
                CurveRelation::Disjoint
            }
        }
    }
}

/// Returns the pair of endpoints, one from each curve, that lie closest
/// together. The first element belongs to `a`, the second to `b`.
pub fn closest_endpoints<A, B>(a: &A, b: &B) -> (Point3, Point3)
where
    A: Curve + ?Sized,
    B: Curve + ?Sized,
{
    let candidates = [
        (a.start(), b.start()),
        (a.start(), b.end()),
        (a.end(), b.start()),
        (a.end(), b.end()),
    ];
    let mut best = candidates[0];
    let mut best_dist = (best.0 - best.1).norm();
    for pair in &candidates[1..] {
        let d = (pair.0 - pair.1).norm();
        if d < best_dist {
            best_dist = d;
            best = *pair;
        }
    }
    best
}

/// The concrete curve kinds a room boundary is made of.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentCurve {
    /// A straight wall segment.
    Line(LineSegment),
    /// A curved wall segment.
    Arc(ArcSegment),
}

impl From<LineSegment> for SegmentCurve {
    fn from(line: LineSegment) -> Self {
        Self::Line(line)
    }
}

impl From<ArcSegment> for SegmentCurve {
    fn from(arc: ArcSegment) -> Self {
        Self::Arc(arc)
    }
}

impl Curve for SegmentCurve {
    fn start(&self) -> Point3 {
        match self {
            Self::Line(line) => line.start(),
            Self::Arc(arc) => arc.start(),
        }
    }

    fn end(&self) -> Point3 {
        match self {
            Self::Line(line) => line.end(),
            Self::Arc(arc) => arc.end(),
        }
    }

    fn point_at(&self, t: f64) -> Point3 {
        match self {
            Self::Line(line) => line.point_at(t),
            Self::Arc(arc) => arc.point_at(t),
        }
    }

    fn length(&self) -> f64 {
        match self {
            Self::Line(line) => line.length(),
            Self::Arc(arc) => arc.length(),
        }
    }

    fn project(&self, point: &Point3) -> Projection {
        match self {
            Self::Line(line) => line.project(point),
            Self::Arc(arc) => arc.project(point),
        }
    }

    fn relate(&self, other: &Self, tolerance: f64) -> CurveRelation {
        match (self, other) {
            (Self::Line(a), Self::Line(b)) => a.relate(b, tolerance),
            _ => relate_by_endpoints(self, other, tolerance),
        }
    }
}
