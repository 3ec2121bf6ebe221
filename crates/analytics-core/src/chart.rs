// File: crates/analytics-core/src/chart.rs
// Summary: Geometry builders turning aggregated series into primitives for each chart type.

use crate::downsample::lttb;
use crate::geometry::{Anchor, Point, Primitive, WedgeArc};
use crate::grid::{format_quantity, linspace};
use crate::scale::{bar_length, max_or_one, wedge_angles, IndexScale, ValueScale};
use crate::series::{sanitize_quantity, AttendanceSample, CategoryQuantity, DatedValue};
use crate::theme::Theme;
use crate::types::Viewport;

/// Top offset of the first bar row.
pub const BAR_ROW_OFFSET: f64 = 20.0;
/// Vertical distance between bar rows.
pub const BAR_ROW_STRIDE: f64 = 36.0;
/// Thickness of one bar.
pub const BAR_HEIGHT: f64 = 24.0;

#[derive(Clone, Debug)]
pub struct ChartOptions {
    pub viewport: Viewport,
    pub theme: Theme,
    /// Donut hole as a fraction of the pie radius; 0 draws a full pie.
    pub inner_ratio: f64,
    /// Space reserved left of the bars for category names.
    pub bar_label_gutter: f64,
    /// Width subtracted from the viewport before scaling bar lengths.
    pub bar_fixed_margin: f64,
    /// Reduce the trend polyline to one vertex per plot column when it has more samples.
    pub thin_dense_trend: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            theme: Theme::default(),
            inner_ratio: 0.0,
            bar_label_gutter: 100.0,
            bar_fixed_margin: 150.0,
            thin_dense_trend: false,
        }
    }
}

impl ChartOptions {
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }
}

/// Height a host should reserve for a bar chart of `rows` categories.
pub fn bar_chart_height(rows: usize) -> f64 {
    BAR_ROW_OFFSET + BAR_ROW_STRIDE * rows as f64
}

/// Axes plus one polyline through the samples, in order.
/// Every sample gets a vertex unless `thin_dense_trend` is set.
pub fn line_chart(series: &[DatedValue], opts: &ChartOptions) -> Vec<Primitive> {
    let viewport = &opts.viewport;
    if !viewport.is_ready() || series.is_empty() {
        return Vec::new();
    }
    let Viewport { width, height, padding } = *viewport;
    let xs = IndexScale::new(series.len(), width, padding);
    let ys = ValueScale::fitted(series.iter().map(|s| s.value), height, padding);

    let mut points: Vec<Point> = series
        .iter()
        .enumerate()
        .map(|(i, s)| Point::new(xs.to_px(i), ys.to_px(s.value)))
        .collect();
    if opts.thin_dense_trend {
        let columns = (viewport.plot_width().floor() as usize).max(2);
        if points.len() > columns {
            points = lttb(&points, columns);
        }
    }

    let baseline = viewport.baseline();
    vec![
        Primitive::Line { x1: padding, y1: baseline, x2: width - padding, y2: baseline },
        Primitive::Line { x1: padding, y1: padding, x2: padding, y2: baseline },
        Primitive::Polyline { points },
    ]
}

/// One wedge and two labels per category.
pub fn pie_chart(series: &[CategoryQuantity], opts: &ChartOptions) -> Vec<Primitive> {
    let viewport = &opts.viewport;
    if !viewport.is_ready() || series.is_empty() {
        return Vec::new();
    }
    let cx = viewport.width * 0.5;
    let cy = viewport.height * 0.5;
    let radius = (viewport.width.min(viewport.height) * 0.5 - viewport.padding).max(0.0);
    let inner = radius * opts.inner_ratio.clamp(0.0, 0.9);
    let quantities: Vec<f64> = series.iter().map(|c| sanitize_quantity(c.quantity)).collect();
    let total = max_or_one([quantities.iter().sum::<f64>()]);

    let mut out = Vec::with_capacity(series.len() * 3);
    let wedges = series.iter().zip(&quantities).zip(wedge_angles(&quantities));
    for (i, ((cat, &quantity), (start, end))) in wedges.enumerate() {
        let arc = WedgeArc::new(cx, cy, radius, inner, start, end);
        let mid = arc.mid_angle();
        let name_at = Point::polar(cx, cy, radius * 0.8, mid);
        let value_at = Point::polar(cx, cy, radius * 0.55, mid);
        let percent = (quantity / total * 100.0).round();

        out.push(Primitive::Wedge { arc, fill: opts.theme.palette_color(i) });
        out.push(Primitive::label(name_at.x, name_at.y, cat.category.clone(), Anchor::Middle));
        out.push(Primitive::label(
            value_at.x,
            value_at.y,
            format!("{} ({}%)", format_quantity(quantity), percent as i64),
            Anchor::Middle,
        ));
    }
    out
}

/// One row per category: bar, name on the left, value past the bar end.
///
/// The value label is anchored at its start so it reads rightwards from just
/// past the bar end; it stays clear of the bar however long the bar is.
pub fn bar_chart(series: &[CategoryQuantity], opts: &ChartOptions) -> Vec<Primitive> {
    let viewport = &opts.viewport;
    if !viewport.is_ready() || series.is_empty() {
        return Vec::new();
    }
    let max_value = max_or_one(series.iter().map(|c| sanitize_quantity(c.quantity)));
    let x0 = opts.bar_label_gutter;

    let mut out = Vec::with_capacity(series.len() * 3);
    for (i, cat) in series.iter().enumerate() {
        let y = BAR_ROW_OFFSET + BAR_ROW_STRIDE * i as f64;
        let quantity = sanitize_quantity(cat.quantity);
        let len = bar_length(quantity, max_value, viewport.width, opts.bar_fixed_margin);
        let text_y = y + BAR_HEIGHT * 0.5 + 4.0;

        out.push(Primitive::Rect { x: x0, y, w: len, h: BAR_HEIGHT, fill: opts.theme.bar });
        out.push(Primitive::label(4.0, text_y, cat.category.clone(), Anchor::Start));
        out.push(Primitive::label(x0 + len + 6.0, text_y, format_quantity(quantity), Anchor::Start));
    }
    out
}

/// Absent stacked under present, per day, with a three-tick value axis.
pub fn stacked_bar_chart(series: &[AttendanceSample], opts: &ChartOptions) -> Vec<Primitive> {
    let viewport = &opts.viewport;
    if !viewport.is_ready() || series.is_empty() {
        return Vec::new();
    }
    let Viewport { height, padding, .. } = *viewport;
    let ys = ValueScale::fitted(series.iter().map(|s| f64::from(s.total())), height, padding);
    let baseline = viewport.baseline();
    let slot = viewport.plot_width() / series.len() as f64;
    let bar_w = slot * 0.6;

    let mut out = Vec::with_capacity(series.len() * 3 + 3);
    for tick in linspace(0.0, ys.max_value, 3) {
        let tick = tick.round();
        out.push(Primitive::label(padding - 6.0, ys.to_px(tick) + 4.0, format_quantity(tick), Anchor::End));
    }
    for (i, s) in series.iter().enumerate() {
        let x = padding + slot * i as f64 + (slot - bar_w) * 0.5;
        let y_total = ys.to_px(f64::from(s.total()));
        let y_absent = ys.to_px(f64::from(s.absent));

        out.push(Primitive::Rect { x, y: y_absent, w: bar_w, h: baseline - y_absent, fill: opts.theme.absent });
        out.push(Primitive::Rect { x, y: y_total, w: bar_w, h: y_absent - y_total, fill: opts.theme.present });
        out.push(Primitive::label(x + bar_w * 0.5, baseline + 16.0, s.date.format("%m/%d").to_string(), Anchor::Middle));
    }
    out
}
