use std::fmt;

use thiserror::Error;

use crate::math::Point3;

/// Top-level error type for wall routing.
#[derive(Debug, Error)]
pub enum WallRouteError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Routing(#[from] RoutingError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Errors related to geometric construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Which of the two picked points a routing error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Errors that reject a routing request.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("room has no boundary loops")]
    UnboundRoom,

    #[error("{endpoint} point ({}, {}, {}) is not on the room boundary", point.x, point.y, point.z)]
    PointNotOnBoundary { endpoint: Endpoint, point: Point3 },
}

/// Errors related to the building model arena.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),
}

/// Convenience type alias for results using [`WallRouteError`].
pub type Result<T> = std::result::Result<T, WallRouteError>;
