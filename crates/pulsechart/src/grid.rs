// File: crates/pulsechart/src/grid.rs
// Summary: Tick layout and tick-label formatting helpers.

use chrono::{TimeZone, Utc};

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Format an epoch-millisecond tick as a clock-time label.
pub fn format_time_tick(ms: f64) -> String {
    let ms = if ms.is_finite() { ms as i64 } else { 0 };
    match Utc.timestamp_millis_opt(ms).single() {
        Some(ts) => ts.format("%H:%M:%S").to_string(),
        None => String::new(),
    }
}

/// Compact numeric label for a value tick.
pub fn format_value_tick(v: f64) -> String {
    if !v.is_finite() {
        return String::new();
    }
    if v.abs() >= 1000.0 || v == v.trunc() {
        format!("{:.0}", v)
    } else {
        format!("{:.2}", v)
    }
}
