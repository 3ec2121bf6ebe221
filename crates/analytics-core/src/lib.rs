// File: crates/analytics-core/src/lib.rs
// Summary: Core library entry point; window filtering, aggregation and chart geometry for the shift board.

pub mod aggregate;
pub mod chart;
pub mod dashboard;
pub mod downsample;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod grid;
pub mod records;
pub mod scale;
pub mod series;
pub mod summary;
pub mod theme;
pub mod types;
pub mod window;

pub use aggregate::{attendance_series, category_totals, trend_series, CategoryLookup, RawIds};
pub use chart::{bar_chart, bar_chart_height, line_chart, pie_chart, stacked_bar_chart, ChartOptions};
pub use dashboard::{Dashboard, DashboardFrame, DashboardInput};
pub use error::AnalyticsError;
pub use filter::filter_by_window;
pub use geometry::{Anchor, Color, Point, Primitive, WedgeArc};
pub use records::{parse_calendar_date, Dated, Employee, Material, MaterialUsage, TaskRecord};
pub use series::{AttendanceSample, CategoryQuantity, DatedValue};
pub use summary::Summary;
pub use theme::Theme;
pub use types::Viewport;
pub use window::{resolve_window, TimeWindow, WindowTag};
