//! Solve entry point.
//!
//! `solve(&Snapshot)` is a pure function of its input: the same snapshot always
//! yields a bit-identical `SolveResult`.
//!
//! Code cross-refs: `points::measure_triangle`, `angles::normalize_angles`,
//! `sides::resolve_sides`, `classify::{classify_point_path, classify_angle_path}`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::angles::{normalize_angles, Normalized};
use crate::cfg::SolveCfg;
use crate::classify::{classify_angle_path, classify_point_path, AnglePath, SolveResult};
use crate::points::measure_triangle;
use crate::sides::resolve_sides;
use crate::types::{Inputs, Point, Reason};

/// Input surface currently in use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Draw,
    Angles,
}

/// Input snapshot taken at the moment of a solve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "data", rename_all = "lowercase")]
pub enum Snapshot {
    Draw(Vec<Point>),
    Angles(Inputs),
}

impl Snapshot {
    pub fn mode(&self) -> Mode {
        match self {
            Snapshot::Draw(_) => Mode::Draw,
            Snapshot::Angles(_) => Mode::Angles,
        }
    }
}

/// Solve with the default tolerances.
pub fn solve(snapshot: &Snapshot) -> SolveResult {
    solve_with(&SolveCfg::default(), snapshot)
}

pub fn solve_with(cfg: &SolveCfg, snapshot: &Snapshot) -> SolveResult {
    let result = match snapshot {
        Snapshot::Draw(points) => solve_points(points, cfg),
        Snapshot::Angles(inputs) => solve_angles(inputs, cfg),
    };
    debug!(
        mode = ?snapshot.mode(),
        status = %result.status,
        reason = ?result.status_reason,
        "solved"
    );
    result
}

/// Point path. Fewer than three points is `NA`; extra points are ignored.
pub fn solve_points(points: &[Point], cfg: &SolveCfg) -> SolveResult {
    match points {
        [a, b, c, ..] => classify_point_path(measure_triangle([*a, *b, *c], cfg)),
        _ => SolveResult::all_na(Reason::WaitingForPoints),
    }
}

/// Angle/side path.
pub fn solve_angles(inputs: &Inputs, cfg: &SolveCfg) -> SolveResult {
    classify_angle_path(angle_path(inputs, cfg))
}

fn angle_path(inputs: &Inputs, cfg: &SolveCfg) -> Result<AnglePath, Reason> {
    Ok(match normalize_angles(inputs, cfg)? {
        Normalized::Partial { known, reason } => AnglePath::Partial { known, reason },
        Normalized::Complete(angles) => AnglePath::Complete {
            angles,
            sides: resolve_sides(inputs, &angles)?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Status;
    use nalgebra::vector;

    #[test]
    fn fewer_than_three_points_waits() {
        let r = solve(&Snapshot::Draw(vec![vector![0.0, 0.0], vector![1.0, 1.0]]));
        assert_eq!(r.status, Status::Na);
        assert_eq!(r.status_reason, Some(Reason::WaitingForPoints));
        let r = solve(&Snapshot::Draw(Vec::new()));
        assert_eq!(r.status, Status::Na);
    }

    #[test]
    fn extra_points_are_ignored() {
        let three = vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 3.0]];
        let mut four = three.clone();
        four.push(vector![100.0, 100.0]);
        assert_eq!(solve(&Snapshot::Draw(three)), solve(&Snapshot::Draw(four)));
    }

    #[test]
    fn custom_tolerance_changes_verdict() {
        let inputs = Inputs::new()
            .with(crate::FieldKey::A, 60.0)
            .with(crate::FieldKey::B, 60.0)
            .with(crate::FieldKey::C, 61.0);
        let snap = Snapshot::Angles(inputs);
        assert_eq!(solve(&snap).status, Status::BadValue);
        let loose = SolveCfg {
            angle_eps: 2.0,
            ..SolveCfg::default()
        };
        assert_eq!(solve_with(&loose, &snap).status, Status::Ok);
    }

    #[test]
    fn snapshot_json_is_tagged_by_mode() {
        let snap = Snapshot::Draw(vec![vector![1.0, 2.0]]);
        let v = serde_json::to_value(&snap).unwrap();
        assert_eq!(v["mode"], "draw");
        assert_eq!(v["data"][0][0], 1.0);
        let back: Snapshot = serde_json::from_value(v).unwrap();
        assert_eq!(back, snap);
    }
}
