// File: crates/analytics-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets reduction for polyline points.

use crate::geometry::Point;

#[inline]
fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    ((a.x - c.x) * (b.y - a.y) - (a.x - b.x) * (c.y - a.y)).abs()
}

fn centroid(points: &[Point]) -> Point {
    let n = points.len().max(1) as f64;
    let (sx, sy) = points.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

/// Reduce `points` to at most `threshold` while keeping the visual shape.
/// First and last points always survive; short inputs come back unchanged.
pub fn lttb(points: &[Point], threshold: usize) -> Vec<Point> {
    let n = points.len();
    if threshold >= n || n <= 2 {
        return points.to_vec();
    }
    match threshold {
        0 => return Vec::new(),
        1 => return vec![points[0]],
        2 => return vec![points[0], points[n - 1]],
        _ => {}
    }

    // interior points split into threshold-2 buckets
    let buckets = threshold - 2;
    let width = (n - 2) as f64 / buckets as f64;
    let bounds = |b: usize| -> (usize, usize) {
        let lo = 1 + (b as f64 * width).floor() as usize;
        let hi = (1 + ((b + 1) as f64 * width).floor() as usize).min(n - 1);
        (lo, hi.max(lo + 1))
    };

    let mut out = Vec::with_capacity(threshold);
    out.push(points[0]);
    let mut prev = points[0];
    for b in 0..buckets {
        let (lo, hi) = bounds(b);
        let next = if b + 1 < buckets {
            let (nlo, nhi) = bounds(b + 1);
            centroid(&points[nlo..nhi])
        } else {
            points[n - 1]
        };
        let best = points[lo..hi]
            .iter()
            .copied()
            .max_by(|p, q| triangle_area(prev, *p, next).total_cmp(&triangle_area(prev, *q, next)))
            .unwrap_or(points[lo]);
        out.push(best);
        prev = best;
    }
    out.push(points[n - 1]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave(n: usize) -> Vec<Point> {
        (0..n).map(|i| Point::new(i as f64, (i as f64 * 0.3).sin() * 10.0)).collect()
    }

    #[test]
    fn keeps_endpoints_and_bound() {
        let pts = wave(500);
        let out = lttb(&pts, 50);
        assert_eq!(out.len(), 50);
        assert_eq!(out[0], pts[0]);
        assert_eq!(out[49], pts[499]);
        assert!(out.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn short_inputs_pass_through() {
        let pts = wave(5);
        assert_eq!(lttb(&pts, 10), pts);
        assert_eq!(lttb(&pts, 2), vec![pts[0], pts[4]]);
        assert!(lttb(&pts, 0).is_empty());
    }
}
