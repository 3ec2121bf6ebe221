// File: crates/analytics-core/src/summary.rs
// Summary: Scalar tiles shown next to the charts.

use serde::{Deserialize, Serialize};

use crate::records::TaskRecord;
use crate::series::sanitize_quantity;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// Whole percent of tasks completed; 0 when there are no tasks.
    pub completion_rate: u32,
    /// Mean rating over completed, rated tasks.
    pub average_rating: Option<f64>,
    pub total_material_quantity: f64,
    pub employee_count: usize,
}

impl Summary {
    pub fn from_tasks<'a, I>(tasks: I, employee_count: usize) -> Self
    where
        I: IntoIterator<Item = &'a TaskRecord>,
    {
        let mut s = Summary { employee_count, ..Summary::default() };
        let (mut rating_sum, mut rated) = (0.0, 0usize);
        for t in tasks {
            s.total_tasks += 1;
            s.total_material_quantity += t.materials_used.iter().map(|u| sanitize_quantity(u.quantity)).sum::<f64>();
            if !t.completed {
                continue;
            }
            s.completed_tasks += 1;
            if let Some(r) = t.rating.filter(|r| r.is_finite()) {
                rating_sum += r;
                rated += 1;
            }
        }
        if s.total_tasks > 0 {
            s.completion_rate = (s.completed_tasks as f64 / s.total_tasks as f64 * 100.0).round() as u32;
        }
        if rated > 0 {
            s.average_rating = Some(rating_sum / rated as f64);
        }
        s
    }
}
