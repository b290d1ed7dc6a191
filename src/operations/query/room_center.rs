use crate::error::Result;
use crate::math::{with_elevation, Point3};
use crate::model::{BuildingModel, RoomId};

/// Computes a room's center: the middle of its bounding box in plan, at
/// the room's own elevation.
pub struct RoomCenter {
    room: RoomId,
}

impl RoomCenter {
    /// Creates a new `RoomCenter` query.
    #[must_use]
    pub fn new(room: RoomId) -> Self {
        Self { room }
    }

    /// Executes the query, returning the center point.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is not in the model.
    pub fn execute(&self, model: &BuildingModel) -> Result<Point3> {
        let room = model.room(self.room)?;
        Ok(with_elevation(&room.bounds.center(), room.elevation()))
    }
}
