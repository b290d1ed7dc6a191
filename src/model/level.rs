slotmap::new_key_type! {
    /// Unique identifier for a level in the building model.
    pub struct LevelId;
}

/// A building storey.
#[derive(Debug, Clone)]
pub struct LevelData {
    pub name: String,
    /// Elevation of the level's floor.
    pub elevation: f64,
}

impl LevelData {
    /// Creates a new level.
    #[must_use]
    pub fn new(name: impl Into<String>, elevation: f64) -> Self {
        Self {
            name: name.into(),
            elevation,
        }
    }
}
