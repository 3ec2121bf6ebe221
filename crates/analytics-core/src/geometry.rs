// File: crates/analytics-core/src/geometry.rs
// Summary: Renderer-agnostic drawing primitives produced by the chart builders.

use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `angle` radians on a circle; 0 is twelve o'clock, growing clockwise
    /// in screen space (y down).
    pub fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> Self {
        Self::new(cx + radius * angle.sin(), cy - radius * angle.cos())
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Horizontal text alignment relative to the label position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Pie or donut slice.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WedgeArc {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    /// 0 for a plain pie slice.
    pub inner_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// 1 when the slice spans more than half a turn.
    pub large_arc: u8,
}

impl WedgeArc {
    pub fn new(cx: f64, cy: f64, radius: f64, inner_radius: f64, start_angle: f64, end_angle: f64) -> Self {
        let large_arc = u8::from(end_angle - start_angle > PI);
        Self { cx, cy, radius, inner_radius, start_angle, end_angle, large_arc }
    }

    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) * 0.5
    }

    pub fn is_finite(&self) -> bool {
        [self.cx, self.cy, self.radius, self.inner_radius, self.start_angle, self.end_angle]
            .iter()
            .all(|v| v.is_finite())
    }

    /// SVG path data for the slice. A full turn is drawn as two half arcs,
    /// since a single arc with equal endpoints renders nothing.
    pub fn svg_path(&self) -> String {
        let mut d = String::new();
        if self.sweep() <= 0.0 || self.radius <= 0.0 {
            let _ = write!(d, "M{:.2},{:.2}Z", self.cx, self.cy);
            return d;
        }
        let (r, ri) = (self.radius, self.inner_radius.clamp(0.0, self.radius));
        let at = |radius: f64, angle: f64| Point::polar(self.cx, self.cy, radius, angle);

        if self.sweep() >= TAU - 1e-9 {
            ring(&mut d, at(r, self.start_angle), at(r, self.start_angle + PI), r, 1);
            if ri > 0.0 {
                ring(&mut d, at(ri, self.start_angle), at(ri, self.start_angle + PI), ri, 0);
            }
            return d;
        }

        let p0 = at(r, self.start_angle);
        let p1 = at(r, self.end_angle);
        if ri > 0.0 {
            let q0 = at(ri, self.start_angle);
            let q1 = at(ri, self.end_angle);
            let _ = write!(
                d,
                "M{:.2},{:.2}A{r:.2},{r:.2} 0 {la} 1 {:.2},{:.2}L{:.2},{:.2}A{ri:.2},{ri:.2} 0 {la} 0 {:.2},{:.2}Z",
                p0.x, p0.y, p1.x, p1.y, q1.x, q1.y, q0.x, q0.y,
                la = self.large_arc,
            );
        } else {
            let _ = write!(
                d,
                "M{:.2},{:.2}L{:.2},{:.2}A{r:.2},{r:.2} 0 {la} 1 {:.2},{:.2}Z",
                self.cx, self.cy, p0.x, p0.y, p1.x, p1.y,
                la = self.large_arc,
            );
        }
        d
    }
}

fn ring(d: &mut String, from: Point, half: Point, r: f64, sweep: u8) {
    let _ = write!(
        d,
        "M{:.2},{:.2}A{r:.2},{r:.2} 0 1 {sweep} {:.2},{:.2}A{r:.2},{r:.2} 0 1 {sweep} {:.2},{:.2}Z",
        from.x, from.y, half.x, half.y, from.x, from.y,
    );
}

/// One drawing instruction. Builders return these; a renderer adapter draws them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Primitive {
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Polyline { points: Vec<Point> },
    Wedge { arc: WedgeArc, fill: Color },
    Rect { x: f64, y: f64, w: f64, h: f64, fill: Color },
    Label { x: f64, y: f64, text: String, anchor: Anchor },
}

impl Primitive {
    pub fn label(x: f64, y: f64, text: impl Into<String>, anchor: Anchor) -> Self {
        Primitive::Label { x, y, text: text.into(), anchor }
    }

    /// True when every coordinate is a real number.
    pub fn is_finite(&self) -> bool {
        match self {
            Primitive::Line { x1, y1, x2, y2 } => [x1, y1, x2, y2].iter().all(|v| v.is_finite()),
            Primitive::Polyline { points } => points.iter().all(Point::is_finite),
            Primitive::Wedge { arc, .. } => arc.is_finite(),
            Primitive::Rect { x, y, w, h, .. } => [x, y, w, h].iter().all(|v| v.is_finite()),
            Primitive::Label { x, y, .. } => x.is_finite() && y.is_finite(),
        }
    }
}
