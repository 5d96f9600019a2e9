// File: crates/demo/src/main.rs
// Summary: Demo replays a CSV sample feed (or a synthetic sine feed) through the
//          push seam and writes animation frames as PNGs.

use anyhow::{Context, Result};
use pulsechart::{theme, ChannelSource, LiveChart, RenderOptions, Sample, Session};
use std::path::{Path, PathBuf};

/// How many trailing samples the chart shows at once.
const WINDOW: usize = 20;
/// Frames rendered per dataset update (~60ms apart at a 500ms transition).
const FRAMES_PER_UPDATE: usize = 8;
const FRAME_STEP_MS: f64 = 62.5;

fn main() -> Result<()> {
    // Optional CSV path and theme name from CLI
    let csv_arg = std::env::args().nth(1);
    let theme_name = std::env::args().nth(2).unwrap_or_else(|| "dark".to_string());

    let samples = match csv_arg {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            let loaded = load_samples_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} samples from {}", loaded.len(), path.display());
            loaded
        }
        None => {
            println!("No CSV given; generating a synthetic sine feed");
            synthetic_feed(120)
        }
    };

    if samples.len() < 2 {
        anyhow::bail!("need at least 2 samples to animate");
    }

    let chart = LiveChart::new().with_title("Real-time Sensor Data");
    let (source, tx) = ChannelSource::new();
    let mut session = Session::start(chart, source).context("push source init failed")?;

    let mut opts = RenderOptions::default();
    opts.theme = theme::find(&theme_name);
    println!("Theme: {}", opts.theme.name);

    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir)?;

    // Sliding-window replay: each step pushes a full replacement dataset,
    // then we render a handful of in-flight frames before the next push.
    // Feeds shorter than the window still animate with what they have.
    let window_len = WINDOW.min(samples.len());
    let mut now = 0.0f64;
    let mut frame = 0usize;
    for end in window_len..=samples.len() {
        let window = samples[end - window_len..end].to_vec();
        tx.send(window).context("feed channel closed")?;
        session.pump(now)?;

        for _ in 0..FRAMES_PER_UPDATE {
            let out = out_dir.join(format!("frame_{frame:04}.png"));
            session.chart.render_to_png(&opts, now, &out)?;
            now += FRAME_STEP_MS;
            session.chart.tick(now);
            frame += 1;
        }
    }

    println!("Wrote {} frames to {}", frame, out_dir.display());
    Ok(())
}

/// Load `(timestamp_ms, value)` rows. Header row optional; bad rows are
/// reported and skipped.
fn load_samples_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parsed = (|| -> Option<Sample> {
            let ts: i64 = rec.get(0)?.trim().parse().ok()?;
            let value: f64 = rec.get(1)?.trim().parse().ok()?;
            Some(Sample::at_millis(ts, value))
        })();
        match parsed {
            Some(s) => out.push(s),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        println!("  (skipped {skipped} unparseable rows)");
    }
    Ok(out)
}

/// Deterministic stand-in feed: a sine wave with slow drift, one sample per
/// second.
fn synthetic_feed(n: usize) -> Vec<Sample> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            let value = 50.0 + 40.0 * (t / 7.0).sin() + 6.0 * (t / 1.9).cos();
            Sample::at_millis(i as i64 * 1000, value)
        })
        .collect()
}
