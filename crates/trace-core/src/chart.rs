// File: crates/trace-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::axis::Axis;
use crate::encode::{self, ImageFormat};
use crate::error::RenderError;
use crate::scale::LinearScale;
use crate::series::Series;
use crate::theme::Theme;
use crate::ticks::{format_tick, ticks};
use crate::types::{Insets, PlotRect, HEIGHT, WIDTH};

const X_TICK_COUNT: usize = 9;
const Y_TICK_COUNT: usize = 6;
const TICK_LEN: f32 = 5.0;
const TICK_FONT_SIZE: f32 = 13.0;

pub struct PlotOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Master switch for tick label text. Snapshot tests turn this off to
    /// keep renders independent of the platform font set; per-axis
    /// suppression lives on `Axis::tick_labels`.
    pub draw_tick_labels: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_tick_labels: true,
        }
    }
}

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit axis ranges to the data. X spans the data exactly; Y is padded
    /// by `pad_frac` of its span on each side. Empty or non-finite extents
    /// fall back to unit ranges, zero spans are widened so every later
    /// transform stays finite.
    pub fn autoscale_axes(&mut self, pad_frac: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &self.series {
            for &(x, y) in s.points() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            x_min = 0.0;
            x_max = 1.0;
            y_min = 0.0;
            y_max = 1.0;
        }
        if (x_max - x_min).abs() < 1e-9 {
            x_max = x_min + 1.0;
        }
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }
        let pad = (y_max - y_min) * pad_frac;
        self.x_axis.min = x_min;
        self.x_axis.max = x_max;
        self.y_axis.min = y_min - pad;
        self.y_axis.max = y_max + pad;
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &PlotOptions) {
        canvas.clear(opts.theme.background);

        let plot = PlotRect::from_surface(opts.width, opts.height, &opts.insets);
        draw_axes(canvas, plot, &self.x_axis, &self.y_axis, opts);

        for s in &self.series {
            draw_line_series(canvas, plot, &self.x_axis, &self.y_axis, s, &opts.theme);
        }
    }

    /// Render into an RGBA8 buffer. Returns (pixels, width, height, row stride).
    pub fn render_to_rgba8(
        &self,
        opts: &PlotOptions,
    ) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let mut surface = raster_surface(opts)?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Premul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::Surface { width: opts.width, height: opts.height });
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    /// Render and encode to PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &PlotOptions) -> Result<Vec<u8>, RenderError> {
        self.render_raster_bytes(opts, ImageFormat::Png)
    }

    fn render_raster_bytes(
        &self,
        opts: &PlotOptions,
        format: ImageFormat,
    ) -> Result<Vec<u8>, RenderError> {
        let mut surface = raster_surface(opts)?;
        self.draw(surface.canvas(), opts);
        let image = surface.image_snapshot();
        encode::encode_image(&image, format)
    }

    fn render_svg_bytes(&self, opts: &PlotOptions) -> Vec<u8> {
        let bounds = skia::Rect::from_iwh(opts.width, opts.height);
        let mut canvas = skia::svg::Canvas::new(bounds, None);
        self.draw(&mut canvas, opts);
        let data = canvas.end();
        data.as_bytes().to_vec()
    }

    /// Serialize the chart to `path`, choosing the encoder from the file
    /// extension. An existing file is overwritten without confirmation; a
    /// missing parent directory surfaces as the underlying I/O error.
    pub fn render_to_file(
        &self,
        opts: &PlotOptions,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)?;
        let bytes = if format.is_raster() {
            self.render_raster_bytes(opts, format)?
        } else {
            self.render_svg_bytes(opts)
        };
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn raster_surface(opts: &PlotOptions) -> Result<skia::Surface, RenderError> {
    skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or(RenderError::Surface { width: opts.width, height: opts.height })
}

fn draw_axes(canvas: &skia::Canvas, plot: PlotRect, x_axis: &Axis, y_axis: &Axis, opts: &PlotOptions) {
    let theme = &opts.theme;
    let (l, t, r, b) = (
        plot.left as f32,
        plot.top as f32,
        plot.right as f32,
        plot.bottom as f32,
    );

    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X axis along the bottom, Y axis along the left.
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    let mut label_paint = skia::Paint::default();
    label_paint.set_color(theme.tick_label);
    label_paint.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(TICK_FONT_SIZE);

    let xs = LinearScale::new(x_axis.min, x_axis.max, l, r);
    for v in ticks(x_axis.min, x_axis.max, X_TICK_COUNT) {
        let x = xs.to_px(v);
        canvas.draw_line((x, b), (x, b + TICK_LEN), &tick_paint);
        if opts.draw_tick_labels && x_axis.tick_labels {
            let text = format_tick(v);
            let (advance, _) = font.measure_str(&text, Some(&label_paint));
            canvas.draw_str(
                text.as_str(),
                (x - advance * 0.5, b + TICK_LEN + TICK_FONT_SIZE + 2.0),
                &font,
                &label_paint,
            );
        }
    }

    let ys = LinearScale::new(y_axis.min, y_axis.max, b, t);
    for v in ticks(y_axis.min, y_axis.max, Y_TICK_COUNT) {
        let y = ys.to_px(v);
        canvas.draw_line((l - TICK_LEN, y), (l, y), &tick_paint);
        if opts.draw_tick_labels && y_axis.tick_labels {
            let text = format_tick(v);
            let (advance, _) = font.measure_str(&text, Some(&label_paint));
            canvas.draw_str(
                text.as_str(),
                (l - TICK_LEN - 4.0 - advance, y + TICK_FONT_SIZE * 0.35),
                &font,
                &label_paint,
            );
        }
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    plot: PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    theme: &Theme,
) {
    let data = series.points();
    if data.len() < 2 {
        return;
    }

    let xs = LinearScale::new(x_axis.min, x_axis.max, plot.left as f32, plot.right as f32);
    let ys = LinearScale::new(y_axis.min, y_axis.max, plot.bottom as f32, plot.top as f32);

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((xs.to_px(x0), ys.to_px(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((xs.to_px(x), ys.to_px(y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(theme.line_stroke);

    canvas.draw_path(&path, &stroke);
}
