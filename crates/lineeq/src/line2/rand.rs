//! Random lines in 2D (replay tokens).
//!
//! Purpose
//! - Deterministic sampler for lines used by property tests and benchmarks.
//!   Every draw is reproducible from its `(seed, index)` token.
//!
//! Model
//! - Two points are drawn uniformly in `bounds × bounds`. With probability
//!   `p_axis_aligned` the second point copies one coordinate of the first,
//!   giving a vertical or horizontal line (each half the time).
//! - Oblique draws redraw each coordinate until it differs from the first
//!   point (bounded; see `draw_other`), so the line is never accidentally
//!   axis-aligned.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::LineEquation;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SamplerCfg {
    /// Coordinate range `[lo, hi)` for both axes.
    ///
    /// A non-finite `lo` becomes `0`. A `hi` that is non-finite, not above `lo`,
    /// or too close to `lo` to give distinct samples falls back to
    /// `[lo, lo + max(|lo|, 1))`. Magnitudes are capped at `f64::MAX / 4`.
    pub bounds: (f64, f64),
    /// Probability that a draw is vertical or horizontal. Clamped to [0, 1]; NaN means 0.
    pub p_axis_aligned: f64,
}

impl Default for SamplerCfg {
    fn default() -> Self {
        Self {
            bounds: (-10.0, 10.0),
            p_axis_aligned: 0.2,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Redraws before `draw_other` settles on a fixed value.
const MAX_REDRAWS: usize = 16;
/// Cap on coordinate magnitudes so `hi - lo` stays finite.
const COORD_LIMIT: f64 = f64::MAX / 4.0;

/// Usable sampling range for `bounds` (see `SamplerCfg::bounds`).
fn sample_range((lo, hi): (f64, f64)) -> (f64, f64) {
    let lo = if lo.is_finite() {
        lo.clamp(-COORD_LIMIT, COORD_LIMIT)
    } else {
        0.0
    };
    let width = lo.abs().max(1.0);
    if hi.is_finite() {
        let hi = hi.min(COORD_LIMIT);
        if hi - lo >= width * 1e-9 {
            return (lo, hi);
        }
    }
    (lo, lo + width)
}

/// A value in `[lo, hi)` different from `avoid`.
fn draw_other(rng: &mut StdRng, lo: f64, hi: f64, avoid: f64) -> f64 {
    for _ in 0..MAX_REDRAWS {
        let v = rng.gen_range(lo..hi);
        if v != avoid {
            return v;
        }
    }
    if avoid == lo {
        lo + (hi - lo) / 2.0
    } else {
        lo
    }
}

/// Draw one line and the two distinct points it was built from.
pub fn draw_line(cfg: SamplerCfg, tok: ReplayToken) -> (LineEquation, [Vector2<f64>; 2]) {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = sample_range(cfg.bounds);

    let p1 = Vector2::new(rng.gen_range(lo..hi), rng.gen_range(lo..hi));
    let p_axis = if cfg.p_axis_aligned.is_nan() {
        0.0
    } else {
        cfg.p_axis_aligned.clamp(0.0, 1.0)
    };
    let p2 = if rng.gen_bool(p_axis) {
        if rng.gen_bool(0.5) {
            Vector2::new(p1.x, draw_other(&mut rng, lo, hi, p1.y))
        } else {
            Vector2::new(draw_other(&mut rng, lo, hi, p1.x), p1.y)
        }
    } else {
        Vector2::new(
            draw_other(&mut rng, lo, hi, p1.x),
            draw_other(&mut rng, lo, hi, p1.y),
        )
    };
    (LineEquation::from_points(p1, p2), [p1, p2])
}

/// `n` consecutive draws for `seed` (indices `0..n`).
pub fn draw_lines(cfg: SamplerCfg, seed: u64, n: usize) -> Vec<(LineEquation, [Vector2<f64>; 2])> {
    (0..n as u64)
        .map(|index| draw_line(cfg, ReplayToken { seed, index }))
        .collect()
}
