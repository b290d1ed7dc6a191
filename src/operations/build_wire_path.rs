use tracing::debug;

use crate::boundary::{BoundarySegment, WirePath};
use crate::error::{Endpoint, Result, RoutingError};
use crate::geometry::curve::closest_endpoints;
use crate::geometry::{Curve, SegmentCurve};
use crate::math::{with_elevation, Point3, TOLERANCE};

use super::{LocateSegment, OrderedBoundary};

/// Elevation given to the intermediate vertices of a wire path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VertexElevation {
    /// Use the start pick's `z`.
    #[default]
    StartPoint,
    /// Use the room's reference elevation.
    RoomLevel,
}

/// Parameters controlling wire routing.
#[derive(Debug, Clone, Copy)]
pub struct RoutingOptions {
    /// Distance within which points and junctions are considered coincident.
    pub tolerance: f64,
    /// Elevation of the intermediate vertices.
    pub vertex_elevation: VertexElevation,
}

impl Default for RoutingOptions {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
            vertex_elevation: VertexElevation::default(),
        }
    }
}

impl RoutingOptions {
    /// Sets the coincidence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the elevation policy for intermediate vertices.
    #[must_use]
    pub fn with_vertex_elevation(mut self, vertex_elevation: VertexElevation) -> Self {
        self.vertex_elevation = vertex_elevation;
        self
    }
}

/// Builds the wire path between two picks on the primary boundary loop.
///
/// The path walks the junctions between the two located segments along the
/// shorter index span and keeps the picks themselves, unflattened, as its
/// first and last vertices.
pub struct BuildWirePath<'a, C = SegmentCurve> {
    boundary: &'a OrderedBoundary<C>,
    start: Point3,
    end: Point3,
    room_elevation: f64,
    options: RoutingOptions,
}

impl<'a, C: Curve> BuildWirePath<'a, C> {
    /// Creates a new `BuildWirePath` operation.
    ///
    /// `room_elevation` is the `z` of the room's boundary plane; picks are
    /// dropped onto it before being located, so any height on a wall face
    /// matches.
    #[must_use]
    pub fn new(
        boundary: &'a OrderedBoundary<C>,
        start: Point3,
        end: Point3,
        room_elevation: f64,
    ) -> Self {
        Self {
            boundary,
            start,
            end,
            room_elevation,
            options: RoutingOptions::default(),
        }
    }

    /// Replaces the routing options.
    #[must_use]
    pub fn with_options(mut self, options: RoutingOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the operation, returning the wire path.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::UnboundRoom`] if the boundary has no loops and
    /// [`RoutingError::PointNotOnBoundary`] if either pick is not on the
    /// primary loop.
    pub fn execute(&self) -> Result<WirePath> {
        let primary = self
            .boundary
            .boundary()
            .primary()
            .ok_or(RoutingError::UnboundRoom)?;
        let segments = &primary.segments;

        let start_index = self.locate(segments, Endpoint::Start, &self.start)?;
        let end_index = self.locate(segments, Endpoint::End, &self.end)?;

        let z = match self.options.vertex_elevation {
            VertexElevation::StartPoint => self.start.z,
            VertexElevation::RoomLevel => self.room_elevation,
        };

        let lo = start_index.min(end_index);
        let hi = start_index.max(end_index);
        let mut intermediate: Vec<Point3> = (lo..hi)
            .map(|k| {
                let (_, junction) = closest_endpoints(&segments[k].curve, &segments[k + 1].curve);
                with_elevation(&junction, z)
            })
            .collect();
        if start_index > end_index {
            intermediate.reverse();
        }

        debug!(
            start_index,
            end_index,
            vertices = intermediate.len(),
            "wire path built"
        );
        Ok(WirePath::new(self.start, intermediate, self.end))
    }

    fn locate(
        &self,
        segments: &[BoundarySegment<C>],
        endpoint: Endpoint,
        point: &Point3,
    ) -> Result<usize> {
        let flat = with_elevation(point, self.room_elevation);
        LocateSegment::new(segments, flat)
            .with_tolerance(self.options.tolerance)
            .execute()
            .ok_or_else(|| {
                RoutingError::PointNotOnBoundary {
                    endpoint,
                    point: *point,
                }
                .into()
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::boundary::{BoundaryLoop, RoomBoundary};
    use crate::error::WallRouteError;
    use crate::geometry::{LineSegment, Pline, PlineVertex};
    use crate::model::ElementId;
    use crate::operations::OrderBoundary;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    /// Bottom, right, top, left walls of a 10 × 10 room at elevation 0.
    fn rectangle() -> OrderedBoundary {
        let pline = Pline::from_points(
            &[
                p(0.0, 0.0, 0.0),
                p(10.0, 0.0, 0.0),
                p(10.0, 10.0, 0.0),
                p(0.0, 10.0, 0.0),
            ],
            true,
        );
        let lp = BoundaryLoop::from_pline(&pline, 0.0, &[ElementId::default(); 4]).unwrap();
        OrderBoundary::new(&RoomBoundary::new(vec![lp])).execute()
    }

    fn assert_points_eq(actual: &[Point3], expected: &[Point3]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert_relative_eq!(*a, *e, epsilon = 1e-9);
        }
    }

    #[test]
    fn bottom_to_top_walks_the_right_wall() {
        let boundary = rectangle();
        let start = p(5.0, 0.0, 1.2);
        let end = p(5.0, 10.0, 1.2);
        let path = BuildWirePath::new(&boundary, start, end, 0.0).execute().unwrap();

        assert_points_eq(
            path.points(),
            &[start, p(10.0, 0.0, 1.2), p(10.0, 10.0, 1.2), end],
        );
        assert_eq!(path.intermediate().len(), 2);
    }

    #[test]
    fn same_segment_goes_straight() {
        let boundary = rectangle();
        let start = p(10.0, 2.0, 0.5);
        let end = p(10.0, 8.0, 0.5);
        let path = BuildWirePath::new(&boundary, start, end, 0.0).execute().unwrap();
        assert_points_eq(path.points(), &[start, end]);
    }

    #[test]
    fn neighbouring_segments_share_one_corner() {
        let boundary = rectangle();
        let start = p(3.0, 0.0, 0.0);
        let end = p(10.0, 7.0, 0.0);
        let path = BuildWirePath::new(&boundary, start, end, 0.0).execute().unwrap();
        assert_points_eq(path.points(), &[start, p(10.0, 0.0, 0.0), end]);
    }

    #[test]
    fn descending_indices_reverse_the_corners() {
        let boundary = rectangle();
        let start = p(0.0, 5.0, 0.0);
        let end = p(5.0, 0.0, 0.0);
        let path = BuildWirePath::new(&boundary, start, end, 0.0).execute().unwrap();
        // Left (3) back to bottom (0): top-left, top-right, bottom-right.
        assert_points_eq(
            path.points(),
            &[
                start,
                p(0.0, 10.0, 0.0),
                p(10.0, 10.0, 0.0),
                p(10.0, 0.0, 0.0),
                end,
            ],
        );
    }

    #[test]
    fn picks_high_on_the_wall_still_locate() {
        let boundary = rectangle();
        let start = p(5.0, 0.0, 2.7);
        let end = p(10.0, 5.0, 0.3);
        let path = BuildWirePath::new(&boundary, start, end, 0.0).execute().unwrap();

        // Intermediate vertices take the start's height, the end keeps its own.
        assert_points_eq(path.points(), &[start, p(10.0, 0.0, 2.7), end]);
    }

    #[test]
    fn room_level_elevation_flattens_intermediates() {
        let boundary = rectangle();
        let start = p(5.0, 0.0, 2.7);
        let end = p(5.0, 10.0, 0.3);
        let options = RoutingOptions::default().with_vertex_elevation(VertexElevation::RoomLevel);
        let path = BuildWirePath::new(&boundary, start, end, 0.0)
            .with_options(options)
            .execute()
            .unwrap();
        assert_points_eq(
            path.points(),
            &[start, p(10.0, 0.0, 0.0), p(10.0, 10.0, 0.0), end],
        );
    }

    #[test]
    fn raised_room_locates_picks_on_its_own_plane() {
        let pline = Pline::from_points(
            &[p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(4.0, 4.0, 0.0)],
            true,
        );
        let lp = BoundaryLoop::from_pline(&pline, 3.0, &[ElementId::default(); 3]).unwrap();
        let boundary = OrderBoundary::new(&RoomBoundary::new(vec![lp])).execute();

        let start = p(2.0, 0.0, 4.5);
        let end = p(4.0, 2.0, 4.5);
        let path = BuildWirePath::new(&boundary, start, end, 3.0).execute().unwrap();
        assert_points_eq(path.points(), &[start, p(4.0, 0.0, 4.5), end]);
    }

    #[test]
    fn reversed_winding_uses_true_junctions() {
        let seg = |a: Point3, b: Point3| {
            BoundarySegment::new(
                SegmentCurve::from(LineSegment::new(a, b).unwrap()),
                ElementId::default(),
            )
        };
        // Right and top walls are wound against the others.
        let lp = BoundaryLoop::new(vec![
            seg(p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0)),
            seg(p(10.0, 10.0, 0.0), p(10.0, 0.0, 0.0)),
            seg(p(0.0, 10.0, 0.0), p(10.0, 10.0, 0.0)),
            seg(p(0.0, 10.0, 0.0), p(0.0, 0.0, 0.0)),
        ]);
        let boundary = OrderBoundary::new(&RoomBoundary::new(vec![lp])).execute();

        let start = p(5.0, 0.0, 0.0);
        let end = p(0.0, 5.0, 0.0);
        let path = BuildWirePath::new(&boundary, start, end, 0.0).execute().unwrap();
        assert_points_eq(
            path.points(),
            &[
                start,
                p(10.0, 0.0, 0.0),
                p(10.0, 10.0, 0.0),
                p(0.0, 10.0, 0.0),
                end,
            ],
        );
    }

    #[test]
    fn curved_wall_corner_is_a_junction() {
        let pline = Pline {
            vertices: vec![
                PlineVertex::line(0.0, 0.0),
                PlineVertex::new(10.0, 0.0, 0.5),
                PlineVertex::line(10.0, 10.0),
                PlineVertex::line(0.0, 10.0),
            ],
            closed: true,
        };
        let lp = BoundaryLoop::from_pline(&pline, 0.0, &[ElementId::default(); 4]).unwrap();
        let boundary = OrderBoundary::new(&RoomBoundary::new(vec![lp])).execute();

        let start = p(5.0, 0.0, 0.0);
        let end = p(5.0, 10.0, 0.0);
        let path = BuildWirePath::new(&boundary, start, end, 0.0).execute().unwrap();
        assert_points_eq(
            path.points(),
            &[start, p(10.0, 0.0, 0.0), p(10.0, 10.0, 0.0), end],
        );
    }

    #[test]
    fn unbound_room_is_rejected() {
        let unbound: RoomBoundary = RoomBoundary::unbound();
        let boundary = OrderBoundary::new(&unbound).execute();
        let err = BuildWirePath::new(&boundary, p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), 0.0)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            WallRouteError::Routing(RoutingError::UnboundRoom)
        ));
    }

    #[test]
    fn pick_off_the_boundary_is_rejected() {
        let boundary = rectangle();
        let err = BuildWirePath::new(&boundary, p(5.0, 0.0, 0.0), p(5.0, 5.0, 1.0), 0.0)
            .execute()
            .unwrap_err();
        match err {
            WallRouteError::Routing(RoutingError::PointNotOnBoundary { endpoint, point }) => {
                assert_eq!(endpoint, Endpoint::End);
                assert_relative_eq!(point, p(5.0, 5.0, 1.0));
            }
            other => panic!("expected PointNotOnBoundary, got {other:?}"),
        }
    }

    #[test]
    fn start_is_checked_first() {
        let boundary = rectangle();
        let err = BuildWirePath::new(&boundary, p(-1.0, -1.0, 0.0), p(5.0, 5.0, 0.0), 0.0)
            .execute()
            .unwrap_err();
        assert!(err.to_string().starts_with("start point"), "{err}");
    }

    fn boundary_pick() -> impl Strategy<Value = Point3> {
        // A point on one of the four walls at an arbitrary height.
        (0usize..4, 0.0f64..=10.0, 0.0f64..3.0).prop_map(|(wall, s, z)| match wall {
            0 => p(s, 0.0, z),
            1 => p(10.0, s, z),
            2 => p(s, 10.0, z),
            _ => p(0.0, s, z),
        })
    }

    proptest! {
        #[test]
        fn building_twice_gives_the_same_path(a in boundary_pick(), b in boundary_pick()) {
            let boundary = rectangle();
            let first = BuildWirePath::new(&boundary, a, b, 0.0).execute().unwrap();
            let second = BuildWirePath::new(&boundary, a, b, 0.0).execute().unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn swapping_picks_reverses_the_path(a in boundary_pick(), b in boundary_pick()) {
            let boundary = rectangle();
            let options = RoutingOptions::default().with_vertex_elevation(VertexElevation::RoomLevel);
            let forward = BuildWirePath::new(&boundary, a, b, 0.0).with_options(options).execute().unwrap();
            let backward = BuildWirePath::new(&boundary, b, a, 0.0).with_options(options).execute().unwrap();

            let mut reversed = backward.into_points();
            reversed.reverse();
            prop_assert_eq!(forward.points(), reversed.as_slice());
        }

        #[test]
        fn one_vertex_per_crossed_junction(a in boundary_pick(), b in boundary_pick()) {
            let boundary = rectangle();
            let segments = &boundary.loops()[0].segments;
            let ia = LocateSegment::new(segments, with_elevation(&a, 0.0)).execute().unwrap();
            let ib = LocateSegment::new(segments, with_elevation(&b, 0.0)).execute().unwrap();

            let path = BuildWirePath::new(&boundary, a, b, 0.0).execute().unwrap();
            prop_assert_eq!(path.intermediate().len(), ia.abs_diff(ib));
        }
    }
}
