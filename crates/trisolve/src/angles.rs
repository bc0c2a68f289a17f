//! Angle normalization: interior/exterior reconciliation and triple completion.
//!
//! Per vertex (A, B, C in order)
//! 1. Interior and exterior both given → they must sum to 180 within `angle_eps`.
//! 2. Working value: interior, else `180 - exterior`, else unknown.
//! 3. A resolved value must lie in the open interval (0, 180).
//!
//! Aggregate
//! - 0 or 1 known → partial (`NeedTwoAngles`).
//! - 2 known → third is `180 - sum`, must itself be a valid angle.
//! - 3 known → sum must be 180 within `angle_eps`.
//!
//! The per-vertex checks run for all three vertices before any completion, so
//! a contradictory vertex never feeds the derived third angle.

use tracing::trace;

use crate::cfg::{approx_eq, is_interior_angle, SolveCfg, STRAIGHT};
use crate::types::{AngleSet, Angles, Inputs, Reason, Vertex};

/// Successful normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Normalized {
    Complete(Angles),
    /// Not enough angles to complete the triple; `known` holds what resolved.
    Partial { known: AngleSet, reason: Reason },
}

impl Normalized {
    pub fn complete(&self) -> Option<Angles> {
        match self {
            Normalized::Complete(a) => Some(*a),
            Normalized::Partial { .. } => None,
        }
    }
}

/// Resolve the working interior angle at one vertex.
fn resolve_vertex(inputs: &Inputs, v: Vertex, cfg: &SolveCfg) -> Result<Option<f64>, Reason> {
    let interior = inputs.interior(v);
    let exterior = inputs.exterior(v);
    if let (Some(i), Some(e)) = (interior, exterior) {
        if !approx_eq(i + e, STRAIGHT, cfg.angle_eps) {
            return Err(Reason::InteriorExteriorMismatch(v));
        }
    }
    let value = interior.or_else(|| exterior.map(|e| STRAIGHT - e));
    match value {
        Some(deg) if !is_interior_angle(deg) => Err(Reason::InvalidAngle(v)),
        other => Ok(other),
    }
}

/// Normalize the six angle inputs into a (possibly partial) interior triple.
///
/// `Err` carries the `BadValue` reason.
pub fn normalize_angles(inputs: &Inputs, cfg: &SolveCfg) -> Result<Normalized, Reason> {
    let mut set = AngleSet::default();
    for v in Vertex::ALL {
        set.set(v, resolve_vertex(inputs, v, cfg)?);
    }

    match set.known_count() {
        0 | 1 => Ok(Normalized::Partial {
            known: set,
            reason: Reason::NeedTwoAngles,
        }),
        2 => {
            let missing = STRAIGHT - set.known_sum();
            if missing <= 0.0 || missing >= STRAIGHT {
                trace!(missing, "derived third angle out of range");
                return Err(Reason::NotATriangle);
            }
            for v in Vertex::ALL {
                if set.get(v).is_none() {
                    set.set(v, Some(missing));
                }
            }
            set.complete().map(Normalized::Complete).ok_or(Reason::NotATriangle)
        }
        _ => {
            let sum = set.known_sum();
            if !approx_eq(sum, STRAIGHT, cfg.angle_eps) {
                trace!(sum, "angle sum off");
                return Err(Reason::AngleSum);
            }
            set.complete().map(Normalized::Complete).ok_or(Reason::AngleSum)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldKey;

    fn norm(inputs: Inputs) -> Result<Normalized, Reason> {
        normalize_angles(&inputs, &SolveCfg::default())
    }

    #[test]
    fn two_angles_complete_the_third() {
        let n = norm(Inputs::new().with(FieldKey::A, 60.0).with(FieldKey::B, 60.0)).unwrap();
        assert_eq!(n, Normalized::Complete(Angles([60.0, 60.0, 60.0])));
    }

    #[test]
    fn exterior_stands_in_for_interior() {
        let n = norm(Inputs::new().with(FieldKey::Aext, 120.0).with(FieldKey::C, 30.0)).unwrap();
        assert_eq!(n, Normalized::Complete(Angles([60.0, 90.0, 30.0])));
    }

    #[test]
    fn interior_wins_over_consistent_exterior() {
        // 100.3 + 79.5 = 179.8, inside EPS; interior value is kept as given
        let n = norm(
            Inputs::new()
                .with(FieldKey::A, 100.3)
                .with(FieldKey::Aext, 79.5)
                .with(FieldKey::B, 40.0),
        )
        .unwrap();
        let full = n.complete().unwrap();
        assert_eq!(full.get(Vertex::A), 100.3);
    }

    #[test]
    fn interior_exterior_mismatch_names_vertex() {
        let err = norm(Inputs::new().with(FieldKey::A, 100.0).with(FieldKey::Aext, 70.0))
            .unwrap_err();
        assert_eq!(err, Reason::InteriorExteriorMismatch(Vertex::A));
    }

    #[test]
    fn mismatch_checked_before_completion() {
        // B is inconsistent; A and C alone would complete fine.
        let err = norm(
            Inputs::new()
                .with(FieldKey::A, 50.0)
                .with(FieldKey::C, 60.0)
                .with(FieldKey::B, 70.0)
                .with(FieldKey::Bext, 100.0),
        )
        .unwrap_err();
        assert_eq!(err, Reason::InteriorExteriorMismatch(Vertex::B));
    }

    #[test]
    fn out_of_range_angles_rejected() {
        assert_eq!(
            norm(Inputs::new().with(FieldKey::B, 0.0)).unwrap_err(),
            Reason::InvalidAngle(Vertex::B)
        );
        assert_eq!(
            norm(Inputs::new().with(FieldKey::Cext, 180.0)).unwrap_err(),
            Reason::InvalidAngle(Vertex::C)
        );
        assert_eq!(
            norm(Inputs::new().with(FieldKey::A, 200.0)).unwrap_err(),
            Reason::InvalidAngle(Vertex::A)
        );
    }

    #[test]
    fn fewer_than_two_is_partial() {
        let n = norm(Inputs::new().with(FieldKey::Bext, 150.0)).unwrap();
        match n {
            Normalized::Partial { known, reason } => {
                assert_eq!(reason, Reason::NeedTwoAngles);
                assert_eq!(known.get(Vertex::B), Some(30.0));
                assert_eq!(known.known_count(), 1);
            }
            other => panic!("expected partial, got {:?}", other),
        }
        assert!(matches!(norm(Inputs::new()), Ok(Normalized::Partial { .. })));
    }

    #[test]
    fn two_angles_too_large() {
        let err = norm(Inputs::new().with(FieldKey::A, 100.0).with(FieldKey::B, 80.0)).unwrap_err();
        assert_eq!(err, Reason::NotATriangle);
    }

    #[test]
    fn three_angles_sum_tolerance() {
        assert!(norm(
            Inputs::new()
                .with(FieldKey::A, 60.2)
                .with(FieldKey::B, 60.2)
                .with(FieldKey::C, 60.0)
        )
        .is_ok());
        assert_eq!(
            norm(
                Inputs::new()
                    .with(FieldKey::A, 60.0)
                    .with(FieldKey::B, 60.0)
                    .with(FieldKey::C, 61.0)
            )
            .unwrap_err(),
            Reason::AngleSum
        );
    }
}
