// File: crates/pulsechart/src/chart.rs
// Summary: LiveChart state machine (updateChart + animation clock) and headless
//          Skia rendering to RGBA buffers / PNG.

use anyhow::Result;
use skia_safe as skia;

use crate::grid::{format_time_tick, format_value_tick, linspace};
use crate::marker::MarkerSet;
use crate::sample::{time_domain, value_domain, Sample};
use crate::scale::{TimeScale, ValueScale};
use crate::theme::Theme;
use crate::transition::AnimatedDomain;
use crate::types::{Insets, HEIGHT, TRANSITION_MS, WIDTH};

/// Render-time options. Geometry lives on the chart itself because the
/// update path needs scales before any render happens.
pub struct RenderOptions {
    pub theme: Theme,
    /// Disable to get platform-deterministic pixels (no font rasterization).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::dark(), draw_labels: true }
    }
}

/// The live chart: current dataset, animated axis domains, and the keyed
/// marker layer. One owned struct instead of module-level globals; all
/// animated values are evaluated against a caller-supplied `now` clock in
/// milliseconds, so nothing here blocks or schedules.
pub struct LiveChart {
    data: Vec<Sample>,
    time_dom: AnimatedDomain,
    value_dom: AnimatedDomain,
    markers: MarkerSet,
    has_data: bool,
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub transition_ms: f64,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl LiveChart {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            time_dom: AnimatedDomain::fixed(0.0, 1.0),
            value_dom: AnimatedDomain::fixed(0.0, 1.0),
            markers: MarkerSet::new(),
            has_data: false,
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            transition_ms: TRANSITION_MS,
            title: "Real-time Sensor Data".to_string(),
            x_label: "Time".to_string(),
            y_label: "Value".to_string(),
        }
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_transition_ms(mut self, ms: f64) -> Self {
        self.transition_ms = ms.max(0.0);
        self
    }

    /// Replace the dataset and re-target every animated layer.
    ///
    /// Non-finite values are skipped at ingest. For a non-empty dataset the
    /// time domain becomes `[min ts, max ts]` and the value domain
    /// `[0, max value]`; both animate over `transition_ms`. For an empty
    /// dataset the previous domain targets are kept and every marker exits.
    pub fn update_chart(&mut self, new_data: Vec<Sample>, now: f64) {
        self.data = new_data.into_iter().filter(Sample::is_finite).collect();

        if let (Some((t0, t1)), Some((v0, v1))) =
            (time_domain(&self.data), value_domain(&self.data))
        {
            if self.has_data {
                self.time_dom.retarget(now, t0, t1, self.transition_ms);
                self.value_dom.retarget(now, v0, v1, self.transition_ms);
            } else {
                // First dataset: snap, there is no previous frame to animate from.
                self.time_dom = AnimatedDomain::fixed(t0, t1);
                self.value_dom = AnimatedDomain::fixed(v0, v1);
                self.has_data = true;
            }
        }

        // Markers head for their final coordinates under the target domains.
        let (xs, ys) = self.scales(self.time_dom.target(), self.value_dom.target());
        self.markers
            .reconcile(&self.data, &xs, &ys, now, self.transition_ms);
    }

    /// Advance the animation clock: drop markers whose exit completed.
    /// Returns the number removed.
    pub fn tick(&mut self, now: f64) -> usize {
        self.markers.prune(now)
    }

    pub fn data(&self) -> &[Sample] {
        &self.data
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// Keys of markers that belong to the current dataset (exiting ones
    /// excluded), ascending.
    pub fn marker_keys(&self) -> Vec<i64> {
        self.markers.live_keys()
    }

    /// The `[min ts, max ts]` the time axis is heading toward.
    pub fn time_domain_target(&self) -> (f64, f64) {
        self.time_dom.target()
    }

    /// The `[0, max value]` the value axis is heading toward.
    pub fn value_domain_target(&self) -> (f64, f64) {
        self.value_dom.target()
    }

    /// Displayed (mid-animation) domains at `now`.
    pub fn domains_at(&self, now: f64) -> ((f64, f64), (f64, f64)) {
        (self.time_dom.value(now), self.value_dom.value(now))
    }

    fn plot_rect(&self) -> (f32, f32, f32, f32) {
        let l = self.insets.left as f32;
        let r = (self.width - self.insets.right as i32) as f32;
        let t = self.insets.top as f32;
        let b = (self.height - self.insets.bottom as i32) as f32;
        (l, t, r, b)
    }

    fn scales(&self, td: (f64, f64), vd: (f64, f64)) -> (TimeScale, ValueScale) {
        let (l, t, r, b) = self.plot_rect();
        (TimeScale::new(l, r, td.0, td.1), ValueScale::new(t, b, vd.0, vd.1))
    }

    // ---- rendering ----------------------------------------------------------

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, now: f64) {
        canvas.clear(opts.theme.background);

        let (l, t, r, b) = self.plot_rect();
        let (td, vd) = self.domains_at(now);
        let (xs, ys) = self.scales(td, vd);

        draw_grid(canvas, l, t, r, b, &opts.theme);
        draw_axes(canvas, l, t, r, b, &xs, &ys, &opts.theme, opts.draw_labels);
        draw_line_path(canvas, &self.data, &self.markers, &xs, &ys, now, &opts.theme);
        draw_markers(canvas, &self.markers, now, &opts.theme);

        if opts.draw_labels {
            draw_titles(canvas, self, &opts.theme);
        }
    }

    /// Render into a fresh RGBA8 buffer. Returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions, now: f64) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((self.width, self.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts, now);

        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = self.width as usize * 4;
        let mut pixels = vec![0u8; stride * self.height as usize];
        if !surface.canvas().read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, self.width, self.height, stride))
    }

    /// Render to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions, now: f64) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((self.width, self.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts, now);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render a frame at `now` to a PNG on disk.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        now: f64,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts, now)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

impl Default for LiveChart {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, l: f32, t: f32, r: f32, b: f32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for x in linspace(l as f64, r as f64, 10) {
        canvas.draw_line((x as f32, t), (x as f32, b), &paint);
    }
    // horizontals
    for y in linspace(t as f64, b as f64, 6) {
        canvas.draw_line((l, y as f32), (r, y as f32), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_axes(
    canvas: &skia::Canvas,
    l: f32,
    t: f32,
    r: f32,
    b: f32,
    xs: &TimeScale,
    ys: &ValueScale,
    theme: &Theme,
    draw_labels: bool,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    if !draw_labels {
        return;
    }

    let mut paint_text = skia::Paint::default();
    paint_text.set_color(theme.tick);
    let mut font = skia::Font::default();
    font.set_size(11.0);

    // 10 time ticks along the bottom, 5 value ticks up the left edge.
    for tick in linspace(xs.t0, xs.t1, 10) {
        let x = xs.to_px(tick);
        canvas.draw_line((x, b), (x, b + 4.0), &axis_paint);
        canvas.draw_str(&format_time_tick(tick), (x - 24.0, b + 16.0), &font, &paint_text);
    }
    for tick in linspace(ys.v0, ys.v1, 5) {
        let y = ys.to_px(tick);
        canvas.draw_line((l - 4.0, y), (l, y), &axis_paint);
        canvas.draw_str(&format_value_tick(tick), (l - 44.0, y + 4.0), &font, &paint_text);
    }
}

fn draw_line_path(
    canvas: &skia::Canvas,
    data: &[Sample],
    markers: &MarkerSet,
    xs: &TimeScale,
    ys: &ValueScale,
    now: f64,
    theme: &Theme,
) {
    if data.len() < 2 {
        return;
    }

    // Vertices follow the animated marker positions so the path and its
    // points stay glued together mid-transition.
    let pos = |s: &Sample| -> (f32, f32) {
        match markers.get(s.key()) {
            Some(m) => m.position(now),
            None => (xs.to_px(s.time_ms()), ys.to_px(s.value)),
        }
    };

    let mut path = skia::Path::new();
    path.move_to(pos(&data[0]));
    for s in data.iter().skip(1) {
        path.line_to(pos(s));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(theme.line_stroke);

    canvas.draw_path(&path, &stroke);
}

fn draw_markers(canvas: &skia::Canvas, markers: &MarkerSet, now: f64, theme: &Theme) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.marker_fill);

    for m in markers.iter() {
        let radius = m.radius(now);
        if radius <= 0.0 {
            continue;
        }
        canvas.draw_circle(m.position(now), radius, &fill);
    }
}

fn draw_titles(canvas: &skia::Canvas, chart: &LiveChart, theme: &Theme) {
    let mut paint_text = skia::Paint::default();
    paint_text.set_color(theme.axis_label);
    let mut font = skia::Font::default();
    font.set_size(14.0);

    let (l, t, _r, b) = chart.plot_rect();
    canvas.draw_str(&chart.title, (l, t - 6.0), &font, &paint_text);
    canvas.draw_str(
        &chart.x_label,
        (chart.width as f32 / 2.0, b + 28.0),
        &font,
        &paint_text,
    );

    // Rotated Y-axis label along the left margin.
    canvas.save();
    canvas.rotate(-90.0, None);
    canvas.draw_str(
        &chart.y_label,
        (-(chart.height as f32) / 2.0, l - 36.0),
        &font,
        &paint_text,
    );
    canvas.restore();
}
