use crate::boundary::WirePath;
use crate::error::Result;
use crate::math::Point3;
use crate::model::{BuildingModel, RoomId};

use super::{BuildWirePath, OrderBoundary, RoutingOptions};

/// Routes a wire between two picks on the walls of one room.
///
/// Reads the room's boundary snapshot and elevation from the model, orders
/// the boundary, and builds the path. Both picks must already be known to
/// belong to this room.
pub struct RouteRoomWire {
    room: RoomId,
    start: Point3,
    end: Point3,
    options: RoutingOptions,
}

impl RouteRoomWire {
    /// Creates a new `RouteRoomWire` operation.
    #[must_use]
    pub fn new(room: RoomId, start: Point3, end: Point3) -> Self {
        Self {
            room,
            start,
            end,
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
    /// Returns an error if the room is not in the model, the room is unbound,
    /// or a pick is not on the room's primary boundary loop.
    pub fn execute(&self, model: &BuildingModel) -> Result<WirePath> {
        let room = model.room(self.room)?;
        let ordered = OrderBoundary::new(&room.boundary)
            .with_tolerance(self.options.tolerance)
            .execute();
        BuildWirePath::new(&ordered, self.start, self.end, room.elevation())
            .with_options(self.options)
            .execute()
    }
}
