use super::level::LevelId;

slotmap::new_key_type! {
    /// Unique identifier for a bounding element (wall or room separator).
    ///
    /// Boundary segments carry this ID to map back to the element that
    /// produced them.
    pub struct ElementId;
}

/// A wall that bounds one or more rooms.
#[derive(Debug, Clone)]
pub struct WallData {
    /// Wall type name, e.g. `"Generic - 200mm"`.
    pub type_name: String,
    pub level: LevelId,
}

impl WallData {
    /// Creates a new wall.
    #[must_use]
    pub fn new(type_name: impl Into<String>, level: LevelId) -> Self {
        Self {
            type_name: type_name.into(),
            level,
        }
    }
}
