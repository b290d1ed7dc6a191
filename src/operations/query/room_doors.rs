use std::collections::HashSet;

use tracing::debug;

use crate::error::Result;
use crate::model::{BuildingModel, DoorId, ElementId, RoomId};

/// Finds the doors that open from or into a room on the room's level.
pub struct RoomDoors {
    room: RoomId,
}

impl RoomDoors {
    /// Creates a new `RoomDoors` query.
    #[must_use]
    pub fn new(room: RoomId) -> Self {
        Self { room }
    }

    /// Executes the query, returning matching doors.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is not in the model.
    pub fn execute(&self, model: &BuildingModel) -> Result<Vec<DoorId>> {
        let room = model.room(self.room)?;
        Ok(model
            .doors()
            .filter(|(_, door)| door.level == room.level && door.connects(self.room))
            .map(|(id, _)| id)
            .collect())
    }
}

/// Keeps the doors hosted by a wall that bounds the room.
pub struct BoundingDoors {
    room: RoomId,
    doors: Vec<DoorId>,
}

impl BoundingDoors {
    /// Creates a new `BoundingDoors` query over the candidate `doors`.
    #[must_use]
    pub fn new(room: RoomId, doors: Vec<DoorId>) -> Self {
        Self { room, doors }
    }

    /// Executes the query, returning the candidates in their given order.
    ///
    /// # Errors
    ///
    /// Returns an error if the room or a candidate door is not in the model.
    pub fn execute(&self, model: &BuildingModel) -> Result<Vec<DoorId>> {
        let room = model.room(self.room)?;
        let bounding: HashSet<ElementId> = room.boundary.segments().map(|s| s.element).collect();

        let mut kept = Vec::new();
        for &id in &self.doors {
            let door = model.door(id)?;
            if bounding.contains(&door.host) {
                debug!(?id, "door on a bounding wall");
                kept.push(id);
            }
        }
        Ok(kept)
    }
}
