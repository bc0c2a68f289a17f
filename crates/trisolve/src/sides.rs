//! Side lengths from a complete angle triple and one known side (law of sines).
//!
//! Only the first present side in the order `a, b, c` is honored; any further
//! sides are ignored without cross-validation.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::{Angles, Inputs, Reason, Sides, Vertex};

/// Non-failing side outcome.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SideOutcome {
    Resolved(Sides),
    /// No side given; the sides stay unknown.
    Missing(Reason),
}

/// First vertex (priority `a, b, c`) whose opposite side is present.
pub fn given_side(inputs: &Inputs) -> Option<(Vertex, f64)> {
    Vertex::ALL
        .into_iter()
        .find_map(|v| inputs.side(v).map(|s| (v, s)))
}

/// Scale `angles` by the single honored side length.
///
/// `Err` carries the `BadValue` reason (`NonPositiveSide`, `SideScale`).
pub fn resolve_sides(inputs: &Inputs, angles: &Angles) -> Result<SideOutcome, Reason> {
    let Some((vertex, side)) = given_side(inputs) else {
        return Ok(SideOutcome::Missing(Reason::NeedSide));
    };
    if side <= 0.0 {
        return Err(Reason::NonPositiveSide);
    }
    let sines = angles.radians().map(f64::sin);
    let k = side / sines[vertex.index()];
    if !k.is_finite() {
        trace!(%vertex, side, "scale factor not finite");
        return Err(Reason::SideScale);
    }
    let mut sides = sines.map(|s| k * s);
    // report the given side verbatim rather than k·sin(X)
    sides[vertex.index()] = side;
    Ok(SideOutcome::Resolved(Sides(sides)))
}
