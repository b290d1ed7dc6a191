mod perimeter;
mod room_center;
mod room_doors;

pub use perimeter::Perimeter;
pub use room_center::RoomCenter;
pub use room_doors::{BoundingDoors, RoomDoors};
