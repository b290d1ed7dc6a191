pub mod door;
pub mod level;
pub mod room;
pub mod wall;

pub use door::{DoorData, DoorId};
pub use level::{LevelData, LevelId};
pub use room::{Aabb, RoomData, RoomId};
pub use wall::{ElementId, WallData};

use crate::error::ModelError;
use slotmap::SlotMap;

/// Snapshot of the building elements routing needs: levels, rooms,
/// bounding walls, and doors.
///
/// Elements reference each other via typed IDs (generational indices).
/// The host fills a model per request; nothing here is cached between
/// requests.
#[derive(Debug, Default)]
pub struct BuildingModel {
    levels: SlotMap<LevelId, LevelData>,
    rooms: SlotMap<RoomId, RoomData>,
    walls: SlotMap<ElementId, WallData>,
    doors: SlotMap<DoorId, DoorData>,
}

impl BuildingModel {
    /// Creates a new, empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Levels ---

    /// Inserts a level and returns its ID.
    pub fn add_level(&mut self, data: LevelData) -> LevelId {
        self.levels.insert(data)
    }

    /// Returns a reference to the level data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the level is not in the model.
    pub fn level(&self, id: LevelId) -> Result<&LevelData, ModelError> {
        self.levels
            .get(id)
            .ok_or(ModelError::EntityNotFound("level"))
    }

    // --- Rooms ---

    /// Inserts a room and returns its ID.
    pub fn add_room(&mut self, data: RoomData) -> RoomId {
        self.rooms.insert(data)
    }

    /// Returns a reference to the room data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is not in the model.
    pub fn room(&self, id: RoomId) -> Result<&RoomData, ModelError> {
        self.rooms.get(id).ok_or(ModelError::EntityNotFound("room"))
    }

    // --- Walls ---

    /// Inserts a bounding wall and returns its ID.
    pub fn add_wall(&mut self, data: WallData) -> ElementId {
        self.walls.insert(data)
    }

    /// Returns a reference to the wall data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not in the model.
    pub fn wall(&self, id: ElementId) -> Result<&WallData, ModelError> {
        self.walls.get(id).ok_or(ModelError::EntityNotFound("wall"))
    }

    // --- Doors ---

    /// Inserts a door and returns its ID.
    pub fn add_door(&mut self, data: DoorData) -> DoorId {
        self.doors.insert(data)
    }

    /// Returns a reference to the door data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the door is not in the model.
    pub fn door(&self, id: DoorId) -> Result<&DoorData, ModelError> {
        self.doors.get(id).ok_or(ModelError::EntityNotFound("door"))
    }

    /// Iterates over all doors.
    pub fn doors(&self) -> impl Iterator<Item = (DoorId, &DoorData)> {
        self.doors.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::boundary::RoomBoundary;
    use crate::math::Point3;

    #[test]
    fn lookups_return_inserted_data() {
        let mut model = BuildingModel::new();
        let level = model.add_level(LevelData::new("Level 1", 0.0));
        let wall = model.add_wall(WallData::new("Basic Wall", level));
        let room = model.add_room(RoomData::new(
            "Kitchen",
            level,
            Point3::new(2.0, 2.0, 0.0),
            Aabb::new(Point3::origin(), Point3::new(4.0, 4.0, 3.0)),
            RoomBoundary::unbound(),
        ));
        let door = model.add_door(DoorData::new(level, wall, Some(room), None));

        assert_eq!(model.level(level).unwrap().name, "Level 1");
        assert_eq!(model.wall(wall).unwrap().level, level);
        assert_eq!(model.room(room).unwrap().name, "Kitchen");
        assert_eq!(model.door(door).unwrap().host, wall);
        assert_eq!(model.doors().count(), 1);
    }

    #[test]
    fn missing_room_is_reported() {
        let model = BuildingModel::new();
        let err = model.room(RoomId::default()).unwrap_err();
        assert!(matches!(err, ModelError::EntityNotFound("room")));
    }
}
