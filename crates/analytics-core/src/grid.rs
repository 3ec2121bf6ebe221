// File: crates/analytics-core/src/grid.rs
// Summary: Tick layout helpers.

/// `steps` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Format a quantity without a trailing `.0` when it is whole.
pub fn format_quantity(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
