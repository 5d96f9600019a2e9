// File: crates/pulsechart/src/sample.rs
// Summary: Timestamped sample model and domain scans over replacement datasets.

use chrono::{DateTime, TimeZone, Utc};

/// One timestamped measurement. Immutable once received; a dataset is the
/// full ordered sequence of these, replaced wholesale on every update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Construct from epoch milliseconds. Out-of-range millis saturate to
    /// the epoch rather than panicking.
    pub fn at_millis(ms: i64, value: f64) -> Self {
        let timestamp = Utc
            .timestamp_millis_opt(ms)
            .single()
            .unwrap_or_else(|| Utc.timestamp_millis_opt(0).single().unwrap_or_default());
        Self { timestamp, value }
    }

    /// Stable marker identity: the timestamp in epoch milliseconds.
    #[inline]
    pub fn key(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }

    /// Timestamp as f64 millis for scale math.
    #[inline]
    pub fn time_ms(&self) -> f64 {
        self.key() as f64
    }

    /// True when the value is usable for scale math.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

/// `[min, max]` over timestamps (millis). Input need not be sorted; this is
/// always a full min/max scan. None for empty input.
pub fn time_domain(samples: &[Sample]) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for s in samples {
        let t = s.time_ms();
        lo = lo.min(t);
        hi = hi.max(t);
    }
    if lo.is_finite() && hi.is_finite() {
        Some((lo, hi))
    } else {
        None
    }
}

/// `[0, max(value)]`: the lower bound is always zero so the series stays
/// anchored to a zero baseline, never auto-scaled to the data minimum.
pub fn value_domain(samples: &[Sample]) -> Option<(f64, f64)> {
    let mut hi = f64::NEG_INFINITY;
    for s in samples {
        hi = hi.max(s.value);
    }
    if hi.is_finite() {
        Some((0.0, hi))
    } else {
        None
    }
}
