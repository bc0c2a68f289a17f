//! Reproducible random triangles (point triples and angle triples).
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//! draw `k` of a stream can be regenerated without drawing `0..k`.
//!
//! Code cross-refs: `points::measure_triangle`, `angles::normalize_angles`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::STRAIGHT;
use crate::points::signed_area2;
use crate::types::{Angles, Point};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    fn rng(&self) -> StdRng {
        // splitmix-style mixing keeps neighbouring indices decorrelated
        let mut z = self
            .seed
            .wrapping_add(self.index.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        StdRng::seed_from_u64(z ^ (z >> 31))
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Points are drawn in `[0, extent]²`.
    pub extent: f64,
    /// Smallest accepted angle (degrees), for both samplers.
    pub min_angle: f64,
    /// Point triples with |twice area| below this are redrawn.
    pub min_area2: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            extent: 500.0,
            min_angle: 1.0,
            min_area2: 1.0,
        }
    }
}

/// Interior-angle triple with every angle `>= cfg.min_angle`, summing to 180.
pub fn draw_angles(token: ReplayToken, cfg: &SampleCfg) -> Angles {
    let mut rng = token.rng();
    let lo = cfg.min_angle.clamp(0.0, 59.0);
    // a in [lo, 180 - 2 lo], b in [lo, 180 - a - lo]
    let a = rng.gen_range(lo..=STRAIGHT - 2.0 * lo);
    let b = rng.gen_range(lo..=STRAIGHT - a - lo);
    Angles([a, b, STRAIGHT - a - b])
}

/// Redraws allowed before `draw_points` gives up on a config.
pub const MAX_POINT_DRAWS: usize = 64;

/// Non-degenerate point triple in `[0, extent]²`.
///
/// None if `MAX_POINT_DRAWS` triples all fall below `min_area2` (e.g. an
/// extent too small for the requested area) or the extent is not usable.
pub fn draw_points(token: ReplayToken, cfg: &SampleCfg) -> Option<[Point; 3]> {
    if !cfg.extent.is_finite() || cfg.extent < 0.0 {
        return None;
    }
    let mut rng = token.rng();
    let pt = |rng: &mut StdRng| {
        Point::new(
            rng.gen_range(0.0..=cfg.extent),
            rng.gen_range(0.0..=cfg.extent),
        )
    };
    (0..MAX_POINT_DRAWS).find_map(|_| {
        let tri = [pt(&mut rng), pt(&mut rng), pt(&mut rng)];
        (signed_area2(tri[0], tri[1], tri[2]).abs() >= cfg.min_area2).then_some(tri)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::SolveCfg;
    use crate::points::measure_triangle;

    #[test]
    fn tokens_replay_identically() {
        let cfg = SampleCfg::default();
        let t = ReplayToken::new(7, 3);
        assert_eq!(draw_points(t, &cfg), draw_points(t, &cfg));
        assert_eq!(draw_angles(t, &cfg), draw_angles(t, &cfg));
        assert_ne!(draw_angles(t, &cfg), draw_angles(ReplayToken::new(7, 4), &cfg));
    }

    #[test]
    fn sampled_angles_are_valid() {
        let cfg = SampleCfg::default();
        for i in 0..200 {
            let a = draw_angles(ReplayToken::new(11, i), &cfg);
            assert!((a.sum() - 180.0).abs() < 1e-9);
            assert!(a.0.iter().all(|&x| x >= cfg.min_angle - 1e-9 && x < 180.0));
        }
    }

    #[test]
    fn sampled_points_measure() {
        let cfg = SampleCfg::default();
        for i in 0..200 {
            let pts = draw_points(ReplayToken::new(42, i), &cfg).unwrap();
            let t = measure_triangle(pts, &SolveCfg::default()).unwrap();
            assert!((t.angles.sum() - 180.0).abs() < 1e-6);
        }
    }

    #[test]
    fn impossible_point_config_gives_up() {
        let cfg = SampleCfg {
            extent: 0.0,
            ..SampleCfg::default()
        };
        assert_eq!(draw_points(ReplayToken::new(1, 0), &cfg), None);
        let cfg = SampleCfg {
            extent: 0.5,
            min_area2: 1.0,
            ..SampleCfg::default()
        };
        assert_eq!(draw_points(ReplayToken::new(1, 0), &cfg), None);
        let cfg = SampleCfg {
            extent: f64::NAN,
            ..SampleCfg::default()
        };
        assert_eq!(draw_points(ReplayToken::new(1, 0), &cfg), None);
    }
}
