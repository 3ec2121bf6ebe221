// File: crates/analytics-core/src/dashboard.rs
// Summary: One render pass from raw records to every series, primitive list and summary tile.

use chrono::NaiveDate;
use serde::Serialize;

use crate::aggregate::{attendance_series, category_totals, trend_series};
use crate::chart::{bar_chart, line_chart, pie_chart, stacked_bar_chart, ChartOptions};
use crate::filter::filter_by_window;
use crate::geometry::Primitive;
use crate::records::{Employee, Material, TaskRecord};
use crate::series::{AttendanceSample, CategoryQuantity, DatedValue};
use crate::summary::Summary;
use crate::window::{resolve_window, TimeWindow, WindowTag};

/// Everything the host hands over for one pass.
#[derive(Clone, Copy, Debug)]
pub struct DashboardInput<'a> {
    pub tasks: &'a [TaskRecord],
    pub employees: &'a [Employee],
    pub materials: &'a [Material],
    pub tag: WindowTag,
    pub today: NaiveDate,
}

/// Output of one pass. Nothing here is reused by the next pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardFrame {
    pub window: TimeWindow,
    pub trend: Vec<DatedValue>,
    pub categories: Vec<CategoryQuantity>,
    pub attendance: Vec<AttendanceSample>,
    pub summary: Summary,
    pub line: Vec<Primitive>,
    pub pie: Vec<Primitive>,
    pub bars: Vec<Primitive>,
    pub attendance_bars: Vec<Primitive>,
}

impl DashboardFrame {
    /// Total primitives across all four charts.
    pub fn primitive_count(&self) -> usize {
        self.line.len() + self.pie.len() + self.bars.len() + self.attendance_bars.len()
    }
}

pub struct Dashboard;

impl Dashboard {
    /// Resolve the window, filter, aggregate and build geometry for all charts.
    pub fn render(input: &DashboardInput<'_>, opts: &ChartOptions) -> DashboardFrame {
        let window = resolve_window(input.tag, input.today);
        let in_window = filter_by_window(input.tasks, &window);

        let trend = trend_series(in_window.iter().copied());
        let categories = category_totals(in_window.iter().copied(), input.materials);
        let attendance = attendance_series(input.employees.len(), input.today);
        let summary = Summary::from_tasks(in_window.iter().copied(), input.employees.len());

        let frame = DashboardFrame {
            line: line_chart(&trend, opts),
            pie: pie_chart(&categories, opts),
            bars: bar_chart(&categories, opts),
            attendance_bars: stacked_bar_chart(&attendance, opts),
            window,
            trend,
            categories,
            attendance,
            summary,
        };
        log::debug!(
            "{} window {}..={}: {}/{} tasks, {} trend points, {} categories, {} primitives at width {}",
            window.tag,
            window.start,
            window.end,
            in_window.len(),
            input.tasks.len(),
            frame.trend.len(),
            frame.categories.len(),
            frame.primitive_count(),
            opts.viewport.width
        );
        frame
    }
}
