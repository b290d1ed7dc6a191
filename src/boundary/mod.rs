mod boundary_loop;
mod segment;
mod wire_path;

pub use boundary_loop::BoundaryLoop;
pub use segment::BoundarySegment;
pub use wire_path::WirePath;

use crate::geometry::SegmentCurve;

/// The boundary loops of one room, as reported by the host.
///
/// Loop 0 is the primary (outer) loop; further loops outline interior
/// obstructions. A room without loops is not spatially bound, which is a
/// valid state.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomBoundary<C = SegmentCurve> {
    pub loops: Vec<BoundaryLoop<C>>,
}

impl<C> RoomBoundary<C> {
    /// Creates a boundary from its loops.
    #[must_use]
    pub fn new(loops: Vec<BoundaryLoop<C>>) -> Self {
        Self { loops }
    }

    /// Creates the boundary of a room that is not enclosed.
    #[must_use]
    pub fn unbound() -> Self {
        Self { loops: Vec::new() }
    }

    /// Returns whether the room has no boundary loops.
    #[must_use]
    pub fn is_unbound(&self) -> bool {
        self.loops.is_empty()
    }

    /// Returns the primary loop, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&BoundaryLoop<C>> {
        self.loops.first()
    }

    /// Iterates over every segment of every loop.
    pub fn segments(&self) -> impl Iterator<Item = &BoundarySegment<C>> {
        self.loops.iter().flat_map(|lp| lp.segments.iter())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Pline;
    use crate::math::Point3;
    use crate::model::ElementId;

    #[test]
    fn unbound_room_has_no_primary_loop() {
        let boundary: RoomBoundary = RoomBoundary::unbound();
        assert!(boundary.is_unbound());
        assert!(boundary.primary().is_none());
        assert_eq!(boundary.segments().count(), 0);
    }

    #[test]
    fn segments_span_all_loops() {
        let square = |x: f64| {
            Pline::from_points(
                &[
                    Point3::new(x, 0.0, 0.0),
                    Point3::new(x + 1.0, 0.0, 0.0),
                    Point3::new(x + 1.0, 1.0, 0.0),
                    Point3::new(x, 1.0, 0.0),
                ],
                true,
            )
        };
        let ids = [ElementId::default(); 4];
        let boundary = RoomBoundary::new(vec![
            BoundaryLoop::from_pline(&square(0.0), 0.0, &ids).unwrap(),
            BoundaryLoop::from_pline(&square(5.0), 0.0, &ids).unwrap(),
        ]);
        assert!(!boundary.is_unbound());
        assert_eq!(boundary.primary().unwrap().len(), 4);
        assert_eq!(boundary.segments().count(), 8);
    }
}
