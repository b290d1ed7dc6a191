use crate::math::Point3;

/// Bulge-encoded polyline vertex for mixed line/arc walls.
///
/// `bulge = tan(sweep_angle / 4)`:
/// - `0` = straight wall to next vertex
/// - `> 0` = counter-clockwise arc to next vertex
/// - `< 0` = clockwise arc to next vertex
/// - `|bulge| = 1` = semicircle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlineVertex {
    pub x: f64,
    pub y: f64,
    pub bulge: f64,
}

impl PlineVertex {
    /// Creates a new vertex with the given coordinates and bulge.
    #[must_use]
    pub fn new(x: f64, y: f64, bulge: f64) -> Self {
        Self { x, y, bulge }
    }

    /// Creates a line vertex (bulge = 0).
    #[must_use]
    pub fn line(x: f64, y: f64) -> Self {
        Self { x, y, bulge: 0.0 }
    }
}

/// A plan-view polyline with mixed straight and circular-arc segments.
///
/// Each segment between consecutive vertices is either a line (bulge=0)
/// or a circular arc (bulge≠0). For closed polylines, the last vertex
/// connects back to the first.
#[derive(Debug, Clone)]
pub struct Pline {
    pub vertices: Vec<PlineVertex>,
    pub closed: bool,
}

impl Pline {
    /// Creates a `Pline` from `Point3` vertices with all-zero bulges (line segments only).
    #[must_use]
    pub fn from_points(points: &[Point3], closed: bool) -> Self {
        let vertices = points
            .iter()
            .map(|p| PlineVertex::line(p.x, p.y))
            .collect();
        Self { vertices, closed }
    }

    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.vertices.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Iterates over segments as `(from, to)` vertex pairs; the bulge of
    /// `from` shapes the segment.
    pub fn segments(&self) -> impl Iterator<Item = (PlineVertex, PlineVertex)> + '_ {
        let n = self.vertices.len();
        (0..self.segment_count()).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}
