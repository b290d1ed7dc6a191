/// Planar arc/bulge math used when boundary loops are described as bulge
/// polylines.
///
/// Bulge convention: `bulge = tan(sweep_angle / 4)`.
/// - `bulge = 0`: straight wall
/// - `bulge > 0`: counter-clockwise arc
/// - `bulge < 0`: clockwise arc
/// - `|bulge| = 1`: semicircle
use std::f64::consts::TAU;

/// Center-radius-angle form of a planar arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarArc {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    /// Angle of the arc start, measured counter-clockwise from +X.
    pub start_angle: f64,
    /// Signed sweep; negative sweeps run clockwise.
    pub sweep: f64,
}

/// Converts a bulge-defined arc segment to center-radius-angle form.
///
/// Returns `None` for zero-length chords and for straight (zero-bulge) segments.
#[must_use]
pub fn arc_from_bulge(x0: f64, y0: f64, x1: f64, y1: f64, bulge: f64) -> Option<PlanarArc> {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let chord_len = (dx * dx + dy * dy).sqrt();

    if chord_len < 1e-12 || bulge.abs() < 1e-12 {
        return None;
    }

    // Signed distance from chord midpoint to center, in half-chord units.
    let sagitta_ratio = (1.0 - bulge * bulge) / (2.0 * bulge);
    let mx = (x0 + x1) * 0.5;
    let my = (y0 + y1) * 0.5;

    // Left normal of the chord.
    let nx = -dy / chord_len;
    let ny = dx / chord_len;

    let cx = mx + sagitta_ratio * (chord_len * 0.5) * nx;
    let cy = my + sagitta_ratio * (chord_len * 0.5) * ny;

    // r = d*(1+b²)/(4*|b|)
    let radius = (chord_len * 0.5) * (1.0 + bulge * bulge) / (2.0 * bulge.abs());
    let start_angle = (y0 - cy).atan2(x0 - cx);
    let sweep = 4.0 * bulge.atan();

    Some(PlanarArc {
        cx,
        cy,
        radius,
        start_angle,
        sweep,
    })
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(arc: &PlanarArc, t: f64) -> (f64, f64) {
    let angle = arc.start_angle + arc.sweep * t;
    (
        arc.cx + arc.radius * angle.cos(),
        arc.cy + arc.radius * angle.sin(),
    )
}

/// Converts an absolute angle to an arc parameter `t` in `[0, 1]`.
///
/// Returns `None` if the angle is not within the arc's angular range.
#[must_use]
pub fn angle_to_arc_param(angle: f64, start_angle: f64, sweep: f64) -> Option<f64> {
    let eps = 1e-8;
    if sweep.abs() < 1e-12 {
        return None;
    }

    // Offset from the start in the sweep direction, with the start itself at 0.
    let raw = (angle - start_angle).rem_euclid(TAU);
    let delta = if sweep > 0.0 {
        if raw > TAU - eps {
            raw - TAU
        } else {
            raw
        }
    } else {
        let cw = raw - TAU;
        if cw < -TAU + eps {
            cw + TAU
        } else {
            cw
        }
    };

    let t = delta / sweep;
    if t >= -eps && t <= 1.0 + eps {
        Some(t.clamp(0.0, 1.0))
    } else {
        None
    }
}
