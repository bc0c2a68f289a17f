//! Triangle measurements from three clicked points.
//!
//! - `measure_triangle`: collinearity test, vertex angles via clamped `acos`,
//!   angle-sum check, Euclidean side lengths.
//! - `angle_at`: interior angle at one vertex (None for a zero-length edge).

use tracing::trace;

use crate::cfg::{is_interior_angle, SolveCfg, STRAIGHT};
use crate::types::{Angles, Point, Reason, Sides};

/// Angles and sides of a valid point triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointTriangle {
    pub angles: Angles,
    pub sides: Sides,
}

/// Twice the signed area of triangle `(p, q, r)`; positive when counterclockwise.
#[inline]
pub fn signed_area2(p: Point, q: Point, r: Point) -> f64 {
    let u = q - p;
    let v = r - p;
    u.x * v.y - u.y * v.x
}

/// Angle at `p` (degrees) between rays `p→q` and `p→r`.
pub fn angle_at(p: Point, q: Point, r: Point) -> Option<f64> {
    let u = q - p;
    let v = r - p;
    let denom = u.norm() * v.norm();
    if denom == 0.0 {
        return None;
    }
    // rounding can push the ratio just outside [-1, 1]
    let cos = (u.dot(&v) / denom).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Validate the triple `[A, B, C]` and measure it.
///
/// Errors (all `BadValue` tier): `Collinear`, `InvalidPointAngles`, `AngleSum`.
pub fn measure_triangle(pts: [Point; 3], cfg: &SolveCfg) -> Result<PointTriangle, Reason> {
    let [pa, pb, pc] = pts;
    let area2 = signed_area2(pa, pb, pc).abs();
    if area2 < cfg.collinear_area2 {
        trace!(area2, "collinear");
        return Err(Reason::Collinear);
    }

    let sides = Sides([(pc - pb).norm(), (pc - pa).norm(), (pb - pa).norm()]);

    let angles = [
        angle_at(pa, pb, pc),
        angle_at(pb, pa, pc),
        angle_at(pc, pa, pb),
    ];
    let mut out = [0.0; 3];
    for (slot, a) in out.iter_mut().zip(angles) {
        match a {
            Some(deg) if is_interior_angle(deg) => *slot = deg,
            _ => return Err(Reason::InvalidPointAngles),
        }
    }
    let angles = Angles(out);

    let sum = angles.sum();
    if (sum - STRAIGHT).abs() > cfg.point_sum_eps {
        trace!(sum, "point angle sum off");
        return Err(Reason::AngleSum);
    }
    Ok(PointTriangle { angles, sides })
}
