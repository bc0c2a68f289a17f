//! Tolerance defaults for triangle solving.
//!
//! Policy
//! - Defaults are fixed constants and independent of canvas scale or angle
//!   magnitude. `SolveCfg` exists so tests and experiments can vary them
//!   without touching call sites; normal callers use `SolveCfg::default()`.

/// Interior/exterior consistency and angle-sum tolerance (degrees).
pub const ANGLE_EPS: f64 = 0.5;
/// Angle-sum tolerance for triangles derived from clicked points (degrees).
pub const POINT_SUM_EPS: f64 = 1.5;
/// Minimum |twice signed area| for a point triple to count as non-collinear.
/// Units match the input coordinate space.
pub const COLLINEAR_AREA2: f64 = 1e-2;

/// Straight angle; interior + exterior at one vertex, and the angle sum.
pub(crate) const STRAIGHT: f64 = 180.0;

/// Solver configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveCfg {
    pub angle_eps: f64,
    pub point_sum_eps: f64,
    pub collinear_area2: f64,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            angle_eps: ANGLE_EPS,
            point_sum_eps: POINT_SUM_EPS,
            collinear_area2: COLLINEAR_AREA2,
        }
    }
}

/// `|a - b| <= tol`.
#[inline]
pub(crate) fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Open interval `(0, 180)`; rejects non-finite values.
#[inline]
pub(crate) fn is_interior_angle(deg: f64) -> bool {
    deg.is_finite() && deg > 0.0 && deg < STRAIGHT
}
