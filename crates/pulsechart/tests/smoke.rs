// File: crates/pulsechart/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use pulsechart::{LiveChart, RenderOptions, Sample};

#[test]
fn render_smoke_png() {
    let mut chart = LiveChart::new();
    chart.update_chart(
        vec![
            Sample::at_millis(0, 0.0),
            Sample::at_millis(1000, 2.0),
            Sample::at_millis(2000, 1.0),
            Sample::at_millis(3000, 3.5),
            Sample::at_millis(4000, 2.5),
        ],
        0.0,
    );

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, 1000.0, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts, 1000.0).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let mut chart = LiveChart::new();
    chart.update_chart(vec![Sample::at_millis(0, 0.0), Sample::at_millis(4000, 4.0)], 0.0);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts, 1000.0).expect("rgba render");
    assert_eq!(w, 800);
    assert_eq!(h, 600);
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    let a = px[3];
    assert_eq!(a, 255);
}

#[test]
fn render_empty_chart_does_not_fail() {
    let chart = LiveChart::new();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = chart.render_to_png_bytes(&opts, 0.0).expect("render bytes");
    assert!(!bytes.is_empty());
}
