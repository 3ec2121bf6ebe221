// File: crates/demo/src/export.rs
// Summary: CSV export of the aggregated series for spreadsheet users.

use std::path::{Path, PathBuf};

use analytics_core::DashboardFrame;
use anyhow::{Context, Result};
use serde::Serialize;

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    log::debug!("exported {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Write trend, category and attendance series; returns the written paths.
pub fn write_series(dir: &Path, frame: &DashboardFrame) -> Result<Vec<PathBuf>> {
    let trend = dir.join("trend.csv");
    let categories = dir.join("categories.csv");
    let attendance = dir.join("attendance.csv");
    write_csv(&trend, &frame.trend)?;
    write_csv(&categories, &frame.categories)?;
    write_csv(&attendance, &frame.attendance)?;
    Ok(vec![trend, categories, attendance])
}
