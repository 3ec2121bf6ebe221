// File: crates/analytics-core/src/theme.rs
// Summary: Light/Dark theming and the ordered category palette.

use std::str::FromStr;

use crate::error::AnalyticsError;
use crate::geometry::Color;

const CATEGORY_PALETTE: [Color; 8] = [
    Color::from_rgb(0x4e, 0x79, 0xa7), // blue
    Color::from_rgb(0xf2, 0x8e, 0x2b), // orange
    Color::from_rgb(0xe1, 0x57, 0x59), // red
    Color::from_rgb(0x76, 0xb7, 0xb2), // teal
    Color::from_rgb(0x59, 0xa1, 0x4f), // green
    Color::from_rgb(0xed, 0xc9, 0x48), // yellow
    Color::from_rgb(0xb0, 0x7a, 0xa1), // purple
    Color::from_rgb(0xff, 0x9d, 0xa7), // pink
];

const HIGH_CONTRAST_PALETTE: [Color; 6] = [
    Color::from_rgb(0x00, 0xff, 0xff),
    Color::from_rgb(0xff, 0xff, 0x00),
    Color::from_rgb(0xff, 0x00, 0xff),
    Color::from_rgb(0x00, 0xff, 0x00),
    Color::from_rgb(0xff, 0x80, 0x00),
    Color::from_rgb(0xff, 0xff, 0xff),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub line_stroke: Color,
    pub bar: Color,
    pub present: Color,
    pub absent: Color,
    /// Wedge fills, assigned by position modulo length.
    pub palette: &'static [Color],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_rgb(250, 250, 252),
            axis_line: Color::from_rgb(60, 60, 70),
            axis_label: Color::from_rgb(20, 20, 30),
            line_stroke: Color::from_rgb(32, 120, 200),
            bar: Color::from_rgb(40, 120, 200),
            present: Color::from_rgb(20, 160, 90),
            absent: Color::from_rgb(200, 60, 60),
            palette: &CATEGORY_PALETTE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            axis_line: Color::from_rgb(180, 180, 190),
            axis_label: Color::from_rgb(235, 235, 245),
            line_stroke: Color::from_rgb(64, 160, 255),
            bar: Color::from_rgb(96, 156, 255),
            present: Color::from_rgb(40, 200, 120),
            absent: Color::from_rgb(220, 80, 80),
            palette: &CATEGORY_PALETTE,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_rgb(0x00, 0x00, 0x00),
            axis_line: Color::from_rgb(0xff, 0xff, 0xff),
            axis_label: Color::from_rgb(0xff, 0xff, 0xff),
            line_stroke: Color::from_rgb(0x00, 0xff, 0xff),
            bar: Color::from_rgb(0x00, 0xaa, 0xff),
            present: Color::from_rgb(0x00, 0xff, 0x00),
            absent: Color::from_rgb(0xff, 0x00, 0x00),
            palette: &HIGH_CONTRAST_PALETTE,
        }
    }

    /// Fill for the category at position `i`.
    pub fn palette_color(&self, i: usize) -> Color {
        if self.palette.is_empty() {
            return self.bar;
        }
        self.palette[i % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

impl FromStr for Theme {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        presets()
            .into_iter()
            .find(|t| t.name.eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AnalyticsError::UnknownTheme(s.to_string()))
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_parse_by_name() {
        assert_eq!("Dark".parse::<Theme>().unwrap().name, "dark");
        assert_eq!(
            "neon".parse::<Theme>().unwrap_err(),
            AnalyticsError::UnknownTheme("neon".into())
        );
    }

    #[test]
    fn palette_cycles_by_position() {
        let t = Theme::light();
        assert_eq!(t.palette_color(0), t.palette_color(t.palette.len()));
        let bare = Theme { palette: &[], ..Theme::light() };
        assert_eq!(bare.palette_color(3), bare.bar);
    }
}
