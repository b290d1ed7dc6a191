use super::level::LevelId;
use super::room::RoomId;
use super::wall::ElementId;

slotmap::new_key_type! {
    /// Unique identifier for a door in the building model.
    pub struct DoorId;
}

/// A door hosted by a wall, connecting up to two rooms.
#[derive(Debug, Clone)]
pub struct DoorData {
    pub level: LevelId,
    /// The wall the door is cut into.
    pub host: ElementId,
    pub from_room: Option<RoomId>,
    pub to_room: Option<RoomId>,
}

impl DoorData {
    /// Creates a new door.
    #[must_use]
    pub fn new(
        level: LevelId,
        host: ElementId,
        from_room: Option<RoomId>,
        to_room: Option<RoomId>,
    ) -> Self {
        Self {
            level,
            host,
            from_room,
            to_room,
        }
    }

    /// Returns whether the door opens from or into `room`.
    #[must_use]
    pub fn connects(&self, room: RoomId) -> bool {
        self.from_room == Some(room) || self.to_room == Some(room)
    }
}
