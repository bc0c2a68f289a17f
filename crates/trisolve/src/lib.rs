//! Triangle solving and validation.
//!
//! Two input paths share one result shape:
//! - three clicked points → `points::measure_triangle`;
//! - partial angles and at most one honored side → `angles::normalize_angles`
//!   then `sides::resolve_sides`.
//!
//! Both end in `classify`, which produces a `SolveResult` of nine tagged fields
//! (`value | bad | na`). `history` keeps the last recorded attempt and
//! `session` ties inputs, results and history into one controller.

pub mod angles;
pub mod cfg;
pub mod classify;
pub mod history;
pub mod points;
pub mod preview;
pub mod sample;
pub mod session;
pub mod sides;
pub mod solve;
pub mod text;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{SolveCfg, ANGLE_EPS, COLLINEAR_AREA2, POINT_SUM_EPS};
pub use classify::{FieldResult, SolveResult, Status};
pub use history::{HistoryAttempt, HistoryState, HistoryStore, Replay};
pub use session::Session;
pub use solve::{solve, solve_with, Mode, Snapshot};
pub use types::{AngleSet, Angles, FieldKey, Inputs, Point, Reason, Sides, Vertex};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::preview::Scene;
    pub use crate::text::{format_value, parse_number, Cell};
    pub use crate::{
        solve, AngleSet, Angles, FieldKey, FieldResult, HistoryState, Inputs, Mode, Point,
        Reason, Session, Snapshot, SolveCfg, SolveResult, Status, Vertex,
    };
    pub use nalgebra::Vector2 as Vec2;
}
