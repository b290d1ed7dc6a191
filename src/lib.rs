pub mod boundary;
pub mod error;
pub mod geometry;
pub mod math;
pub mod model;
pub mod operations;

pub use error::{Result, WallRouteError};
pub use operations::{build_wire_path, order_boundary_loops};
