// File: crates/analytics-core/src/filter.rs
// Summary: Stable record filter keeping only records dated inside a time window.

use crate::records::Dated;
use crate::window::TimeWindow;

/// Keep records whose date parses and lies in `[window.start, window.end]`.
/// Records with a missing or unparsable date are dropped without a trace.
/// Output order matches input order.
pub fn filter_by_window<'a, T: Dated>(records: &'a [T], window: &TimeWindow) -> Vec<&'a T> {
    let kept: Vec<&T> = records
        .iter()
        .filter(|r| r.calendar_date().is_some_and(|d| window.contains(d)))
        .collect();
    log::trace!(
        "window {} [{}..={}]: kept {} of {} records",
        window.tag,
        window.start,
        window.end,
        kept.len(),
        records.len()
    );
    kept
}
