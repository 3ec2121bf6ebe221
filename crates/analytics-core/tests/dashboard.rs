// File: crates/analytics-core/tests/dashboard.rs
// Purpose: Full render pass from raw records to series, primitives and summary.

use analytics_core::{
    ChartOptions, Dashboard, DashboardInput, Employee, Material, Primitive, TaskRecord, Viewport, WindowTag,
};
use chrono::NaiveDate;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn crew(n: usize) -> Vec<Employee> {
    (0..n)
        .map(|i| Employee { id: format!("e{i}"), name: format!("Worker {i}"), department: "Ops".into() })
        .collect()
}

#[test]
fn week_window_keeps_only_this_weeks_rating() {
    let tasks = vec![
        TaskRecord::new("t1", "Open store").on("2024-06-03").completed_with(Some(4.0)),
        TaskRecord::new("t2", "Close store").on("2024-06-10").completed_with(Some(2.0)),
    ];
    let input = DashboardInput {
        tasks: &tasks,
        employees: &[],
        materials: &[],
        tag: WindowTag::Week,
        today: ymd(2024, 6, 10),
    };
    let frame = Dashboard::render(&input, &ChartOptions::default());

    assert_eq!(frame.window.start, ymd(2024, 6, 9));
    assert_eq!(frame.trend.len(), 1);
    assert_eq!(frame.trend[0].value, 2.0);
    assert_eq!(frame.summary.total_tasks, 1);
}

#[test]
fn full_pass_builds_every_chart() {
    let tasks = vec![
        TaskRecord::new("t1", "Clean").on("2024-06-10").completed_with(Some(5.0)).using("m1", 3.0),
        TaskRecord::new("t2", "Stock").on("2024-06-10").completed_with(Some(3.0)).using("m2", 2.0).using("m1", 5.0),
        TaskRecord::new("t3", "Audit").on("garbage").completed_with(Some(1.0)).using("m2", 100.0),
        TaskRecord::new("t4", "Count").on("2024-06-09"),
    ];
    let materials = vec![Material::new("m1", "Detergent")];
    let employees = crew(3);
    let input = DashboardInput {
        tasks: &tasks,
        employees: &employees,
        materials: &materials,
        tag: WindowTag::Month,
        today: ymd(2024, 6, 10),
    };
    let frame = Dashboard::render(&input, &ChartOptions::default());

    assert_eq!(frame.trend.len(), 2);
    let cats: Vec<(&str, f64)> = frame.categories.iter().map(|c| (c.category.as_str(), c.quantity)).collect();
    assert_eq!(cats, vec![("Detergent", 8.0), ("m2", 2.0)]);
    assert_eq!(frame.attendance.len(), 7);
    assert!(frame.attendance.iter().all(|a| a.present == 3));

    assert_eq!(frame.line.len(), 3);
    assert_eq!(frame.pie.len(), 6);
    assert_eq!(frame.bars.len(), 6);
    assert_eq!(frame.attendance_bars.len(), 3 + 7 * 3);
    assert_eq!(frame.summary.completion_rate, 67);
    assert_eq!(frame.summary.average_rating, Some(4.0));

    for p in frame.line.iter().chain(&frame.pie).chain(&frame.bars).chain(&frame.attendance_bars) {
        assert!(p.is_finite(), "non-finite primitive {p:?}");
    }
}

#[test]
fn layout_report_recomputes_from_scratch() {
    let tasks = vec![TaskRecord::new("t1", "Clean").on("2024-06-10").completed_with(Some(5.0)).using("m1", 3.0)];
    let employees = crew(2);
    let input = DashboardInput {
        tasks: &tasks,
        employees: &employees,
        materials: &[],
        tag: WindowTag::Day,
        today: ymd(2024, 6, 10),
    };

    // host has not measured the surface yet
    let pending = ChartOptions::default().with_viewport(Viewport::default().with_width(0.0));
    let frame = Dashboard::render(&input, &pending);
    assert_eq!(frame.primitive_count(), 0);
    assert_eq!(frame.trend.len(), 1);

    let narrow = Dashboard::render(&input, &ChartOptions::default().with_viewport(Viewport::new(200.0, 150.0, 20.0)));
    let wide = Dashboard::render(&input, &ChartOptions::default().with_viewport(Viewport::new(800.0, 150.0, 20.0)));
    let axis_end = |prims: &[Primitive]| match prims.first() {
        Some(Primitive::Line { x2, .. }) => *x2,
        other => panic!("expected axis line, got {other:?}"),
    };
    assert_eq!(axis_end(&narrow.line), 180.0);
    assert_eq!(axis_end(&wide.line), 780.0);
    assert_eq!(narrow.trend, wide.trend);
}

#[test]
fn frame_serializes_for_hosts() {
    let tasks = vec![TaskRecord::new("t1", "Clean").on("2024-06-10").completed_with(Some(5.0)).using("m1", 3.0)];
    let input = DashboardInput {
        tasks: &tasks,
        employees: &[],
        materials: &[],
        tag: WindowTag::Week,
        today: ymd(2024, 6, 10),
    };
    let frame = Dashboard::render(&input, &ChartOptions::default());
    let json = serde_json::to_value(&frame).unwrap();
    assert_eq!(json["window"]["tag"], "week");
    assert_eq!(json["pie"][0]["kind"], "wedge");
    assert_eq!(json["categories"][0]["quantity"], 3.0);
}
