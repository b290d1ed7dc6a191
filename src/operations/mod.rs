mod build_wire_path;
mod locate_segment;
mod order_boundary;
pub mod query;
mod route_room_wire;

pub use build_wire_path::{BuildWirePath, RoutingOptions, VertexElevation};
pub use locate_segment::LocateSegment;
pub use order_boundary::{AmbiguousOrdering, OrderBoundary, OrderedBoundary};
pub use route_room_wire::RouteRoomWire;

use crate::boundary::{RoomBoundary, WirePath};
use crate::error::Result;
use crate::geometry::Curve;
use crate::math::Point3;

/// Orders every loop of `boundary` so consecutive segments touch.
///
/// Shorthand for `OrderBoundary::new(boundary).execute()`.
#[must_use]
pub fn order_boundary_loops<C: Curve + Clone>(boundary: &RoomBoundary<C>) -> OrderedBoundary<C> {
    OrderBoundary::new(boundary).execute()
}

/// Builds the wall-following path between two picks with default options.
///
/// Shorthand for `BuildWirePath::new(..).execute()`.
///
/// # Errors
///
/// Returns an error if the room is unbound or a pick is not on the primary
/// boundary loop.
pub fn build_wire_path<C: Curve>(
    ordered: &OrderedBoundary<C>,
    start: Point3,
    end: Point3,
    room_elevation: f64,
) -> Result<WirePath> {
    BuildWirePath::new(ordered, start, end, room_elevation).execute()
}
