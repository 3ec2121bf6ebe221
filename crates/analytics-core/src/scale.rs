// File: crates/analytics-core/src/scale.rs
// Summary: Value-to-pixel mappers (index X, value Y, angular, bar length).
// Notes:
// - Degenerate input (empty, all-zero, single point) is defused here and only
//   here: the value range is floored at 1 and the index span at 1.

use std::f64::consts::TAU;

use crate::series::sanitize_quantity;

/// `max(values..., 1)`; the floor every value axis starts from.
pub fn max_or_one<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().filter(|v| v.is_finite()).fold(1.0, f64::max)
}

#[inline]
fn floor_one(max_value: f64) -> f64 {
    if max_value.is_finite() { max_value.max(1.0) } else { 1.0 }
}

/// X pixel of sample `i` out of `n`, spread between the paddings.
#[inline]
pub fn linear_x(i: usize, n: usize, width: f64, padding: f64) -> f64 {
    let span = n.saturating_sub(1).max(1) as f64;
    padding + i as f64 * (width - 2.0 * padding) / span
}

/// Y pixel of `value`, with 0 on the baseline (`height - padding`).
#[inline]
pub fn linear_y(value: f64, max_value: f64, height: f64, padding: f64) -> f64 {
    height - padding - (value / floor_one(max_value)) * (height - 2.0 * padding)
}

/// Fraction of a full turn to radians.
#[inline]
pub fn angular(cumulative_fraction: f64) -> f64 {
    cumulative_fraction * TAU
}

/// Horizontal bar length; never negative.
#[inline]
pub fn bar_length(value: f64, max_value: f64, width: f64, fixed_margin: f64) -> f64 {
    ((width - fixed_margin) * (value / floor_one(max_value))).max(0.0)
}

/// `[start, end)` angle pairs for a run of quantities, in order.
/// Total is floored at 1, so an all-zero run collapses to empty wedges at 0.
pub fn wedge_angles(quantities: &[f64]) -> Vec<(f64, f64)> {
    let total = floor_one(quantities.iter().copied().map(sanitize_quantity).sum());
    let mut acc = 0.0;
    quantities
        .iter()
        .map(|&q| {
            let start = angular(acc / total);
            acc += sanitize_quantity(q);
            (start, angular(acc / total))
        })
        .collect()
}

/// Index scale for a fixed sample count.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub n: usize,
    pub width: f64,
    pub padding: f64,
}

impl IndexScale {
    pub fn new(n: usize, width: f64, padding: f64) -> Self {
        Self { n, width, padding }
    }
    #[inline]
    pub fn to_px(&self, i: usize) -> f64 {
        linear_x(i, self.n, self.width, self.padding)
    }
}

/// Value scale from 0 to a floored maximum.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub max_value: f64,
    pub height: f64,
    pub padding: f64,
}

impl ValueScale {
    pub fn new(max_value: f64, height: f64, padding: f64) -> Self {
        Self { max_value: floor_one(max_value), height, padding }
    }
    /// Scale fitted to `values`.
    pub fn fitted<I: IntoIterator<Item = f64>>(values: I, height: f64, padding: f64) -> Self {
        Self::new(max_or_one(values), height, padding)
    }
    #[inline]
    pub fn to_px(&self, value: f64) -> f64 {
        linear_y(value, self.max_value, self.height, self.padding)
    }
}
