// File: crates/trace-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub line_stroke: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            tick_label: skia::Color::from_argb(255, 20, 20, 30),
            line_stroke: skia::Color::from_argb(255, 32, 120, 200),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            tick_label: skia::Color::from_argb(255, 235, 235, 245),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
