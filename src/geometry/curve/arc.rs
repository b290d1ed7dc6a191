use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::arc_2d::{angle_to_arc_param, PlanarArc};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, Projection};

/// A bounded circular arc in 3D space.
///
/// Defined by a center, radius, normal axis, and a reference direction
/// for the zero-angle. The arc sweeps counter-clockwise around the normal
/// from `start_angle` to `end_angle` (in radians).
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    center: Point3,
    radius: f64,
    normal: Vector3,
    ref_dir: Vector3,
    start_angle: f64,
    end_angle: f64,
}

impl ArcSegment {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius (must be positive)
    /// * `normal` - Normal vector defining the arc plane
    /// * `ref_dir` - Reference direction for angle = 0 (must be perpendicular to normal)
    /// * `start_angle` - Start angle in radians
    /// * `end_angle` - End angle in radians, greater than `start_angle` by at most a full turn
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive, the normal or reference
    /// direction is zero-length, the two are not perpendicular, or the sweep
    /// is empty or exceeds a full turn.
    pub fn new(
        center: Point3,
        radius: f64,
        normal: Vector3,
        ref_dir: Vector3,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }

        let normal_len = normal.norm();
        if normal_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / normal_len;

        let ref_len = ref_dir.norm();
        if ref_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let ref_dir = ref_dir / ref_len;

        if normal.dot(&ref_dir).abs() > TOLERANCE {
            return Err(GeometryError::Degenerate(
                "reference direction must be perpendicular to normal".into(),
            )
            .into());
        }

        let sweep = end_angle - start_angle;
        if sweep < TOLERANCE || sweep > TAU + TOLERANCE {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "sweep",
                value: sweep,
                min: 0.0,
                max: TAU,
            }
            .into());
        }

        Ok(Self {
            center,
            radius,
            normal,
            ref_dir,
            start_angle,
            end_angle,
        })
    }

    /// Lifts a planar arc onto the horizontal plane at `elevation`.
    ///
    /// Clockwise arcs are expressed with a downward normal so the stored sweep
    /// stays positive while the endpoints keep their order.
    ///
    /// # Errors
    ///
    /// Returns an error if the planar arc is degenerate.
    pub fn from_planar(arc: &PlanarArc, elevation: f64) -> Result<Self> {
        let center = Point3::new(arc.cx, arc.cy, elevation);
        if arc.sweep >= 0.0 {
            Self::new(
                center,
                arc.radius,
                Vector3::z(),
                Vector3::x(),
                arc.start_angle,
                arc.start_angle + arc.sweep,
            )
        } else {
            // Around -Z the binormal is -Y, so plan angles flip sign.
            Self::new(
                center,
                arc.radius,
                -Vector3::z(),
                Vector3::x(),
                -arc.start_angle,
                -arc.start_angle - arc.sweep,
            )
        }
    }

    fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Second in-plane axis, perpendicular to both normal and `ref_dir`.
    fn binormal(&self) -> Vector3 {
        self.normal.cross(&self.ref_dir)
    }

    fn evaluate(&self, angle: f64) -> Point3 {
        self.center
            + self.ref_dir * (self.radius * angle.cos())
            + self.binormal() * (self.radius * angle.sin())
    }
}

impl Curve for ArcSegment {
    fn start(&self) -> Point3 {
        self.evaluate(self.start_angle)
    }

    fn end(&self) -> Point3 {
        self.evaluate(self.end_angle)
    }

    fn point_at(&self, t: f64) -> Point3 {
        self.evaluate(self.start_angle + self.sweep() * t)
    }

    fn length(&self) -> f64 {
        self.radius * self.sweep()
    }

    fn project(&self, point: &Point3) -> Projection {
        let to_point = point - self.center;
        let x = to_point.dot(&self.ref_dir);
        let y = to_point.dot(&self.binormal());

        let parameter = if x.hypot(y) < TOLERANCE {
            // Every arc point is equidistant from the center.
            Some(0.0)
        } else {
            angle_to_arc_param(y.atan2(x), self.start_angle, self.sweep())
        };

        let (point_on_arc, parameter) = match parameter {
            Some(t) => (self.point_at(t), t),
            None => {
                let (start, end) = (self.start(), self.end());
                if (point - start).norm() <= (point - end).norm() {
                    (start, 0.0)
                } else {
                    (end, 1.0)
                }
            }
        };

        Projection {
            point: point_on_arc,
            parameter,
            distance: (point - point_on_arc).norm(),
        }
    }
}
