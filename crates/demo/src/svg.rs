// File: crates/demo/src/svg.rs
// Summary: Minimal SVG renderer adapter for analytics primitives.

use std::fmt::Write as _;

use analytics_core::{Primitive, Theme};

/// Title band drawn above every panel.
const TITLE_HEIGHT: f64 = 28.0;

pub struct Panel<'a> {
    pub title: &'a str,
    pub primitives: &'a [Primitive],
    pub height: f64,
}

impl<'a> Panel<'a> {
    pub fn new(title: &'a str, primitives: &'a [Primitive], height: f64) -> Self {
        Self { title, primitives, height }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

/// Stack panels vertically into one SVG document.
pub fn render_board(panels: &[Panel<'_>], width: f64, theme: &Theme) -> String {
    let total_h: f64 = panels.iter().map(|p| p.height + TITLE_HEIGHT).sum();
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{total_h:.0}" viewBox="0 0 {width:.0} {total_h:.0}">"#
    );
    let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, theme.background.to_hex());

    let mut top = 0.0;
    for panel in panels {
        let _ = writeln!(
            out,
            r#"<text x="8" y="{:.1}" font-size="14" font-weight="bold" fill="{}">{}</text>"#,
            top + 19.0,
            theme.axis_label.to_hex(),
            escape(panel.title)
        );
        let _ = writeln!(out, r#"<g transform="translate(0,{:.1})">"#, top + TITLE_HEIGHT);
        for p in panel.primitives {
            write_primitive(&mut out, p, theme);
        }
        out.push_str("</g>\n");
        top += panel.height + TITLE_HEIGHT;
    }
    out.push_str("</svg>\n");
    out
}

fn write_primitive(out: &mut String, p: &Primitive, theme: &Theme) {
    let _ = match p {
        Primitive::Line { x1, y1, x2, y2 } => writeln!(
            out,
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{}" stroke-width="1.5"/>"#,
            theme.axis_line.to_hex()
        ),
        Primitive::Polyline { points } => {
            let pts = points.iter().map(|pt| format!("{:.2},{:.2}", pt.x, pt.y)).collect::<Vec<_>>().join(" ");
            writeln!(
                out,
                r#"<polyline points="{pts}" fill="none" stroke="{}" stroke-width="2"/>"#,
                theme.line_stroke.to_hex()
            )
        }
        Primitive::Wedge { arc, fill } => writeln!(
            out,
            r#"<path d="{}" fill="{}" fill-opacity="{:.2}" stroke="{}" stroke-width="1"/>"#,
            arc.svg_path(),
            fill.to_hex(),
            fill.opacity(),
            theme.background.to_hex()
        ),
        Primitive::Rect { x, y, w, h, fill } => writeln!(
            out,
            r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{}" fill-opacity="{:.2}"/>"#,
            fill.to_hex(),
            fill.opacity()
        ),
        Primitive::Label { x, y, text, anchor } => writeln!(
            out,
            r#"<text x="{x:.2}" y="{y:.2}" text-anchor="{}" font-size="11" fill="{}">{}</text>"#,
            anchor.as_str(),
            theme.axis_label.to_hex(),
            escape(text)
        ),
    };
}
