use crate::boundary::RoomBoundary;
use crate::math::Point3;

use super::level::LevelId;

slotmap::new_key_type! {
    /// Unique identifier for a room in the building model.
    pub struct RoomId;
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates a bounding box from its corners.
    #[must_use]
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Returns the box center.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }
}

/// A room with its boundary snapshot.
#[derive(Debug, Clone)]
pub struct RoomData {
    pub name: String,
    pub level: LevelId,
    /// Placement point; its `z` is the room's reference elevation.
    pub location: Point3,
    /// Extent of the room element.
    pub bounds: Aabb,
    pub boundary: RoomBoundary,
}

impl RoomData {
    /// Creates a new room.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        level: LevelId,
        location: Point3,
        bounds: Aabb,
        boundary: RoomBoundary,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            location,
            bounds,
            boundary,
        }
    }

    /// Returns the room's reference elevation.
    #[must_use]
    pub fn elevation(&self) -> f64 {
        self.location.z
    }
}
