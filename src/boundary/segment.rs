use crate::geometry::SegmentCurve;
use crate::model::ElementId;

/// One curve of a room boundary, tagged with the element that bounds it.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundarySegment<C = SegmentCurve> {
    /// The boundary curve. Its winding is not normalized.
    pub curve: C,
    /// The wall or separation element this segment belongs to.
    pub element: ElementId,
}

impl<C> BoundarySegment<C> {
    /// Creates a new boundary segment.
    #[must_use]
    pub fn new(curve: C, element: ElementId) -> Self {
        Self { curve, element }
    }
}
