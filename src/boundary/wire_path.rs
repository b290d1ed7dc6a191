use crate::math::Point3;

/// Ordered vertices of a wire routed along a room boundary.
///
/// The first and last points are the picked endpoints; everything in
/// between is a boundary junction.
#[derive(Debug, Clone, PartialEq)]
pub struct WirePath {
    points: Vec<Point3>,
}

impl WirePath {
    pub(crate) fn new(start: Point3, intermediate: Vec<Point3>, end: Point3) -> Self {
        let mut points = Vec::with_capacity(intermediate.len() + 2);
        points.push(start);
        points.extend(intermediate);
        points.push(end);
        Self { points }
    }

    /// Returns all vertices, start and end included.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the junction vertices between the endpoints.
    #[must_use]
    pub fn intermediate(&self) -> &[Point3] {
        &self.points[1..self.points.len() - 1]
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.points[0]
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.points[self.points.len() - 1]
    }

    /// Returns the length of the polyline through all vertices.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }

    /// Consumes the path, returning its vertices.
    #[must_use]
    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}
