pub mod curve;
pub mod pline;

pub use curve::{ArcSegment, Curve, CurveRelation, LineSegment, Projection, SegmentCurve};
pub use pline::{Pline, PlineVertex};
