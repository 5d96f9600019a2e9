// File: crates/pulsechart/src/marker.rs
// Summary: Keyed point-marker set with enter/update/exit reconciliation.

use std::collections::BTreeMap;

use crate::sample::Sample;
use crate::scale::{TimeScale, ValueScale};
use crate::transition::Tween;
use crate::types::MARKER_RADIUS;

/// One point marker, keyed by its sample's timestamp millis. Position and
/// radius animate independently; an exiting marker shrinks to radius 0 and
/// is pruned once the shrink completes.
#[derive(Clone, Copy, Debug)]
pub struct Marker {
    pub key: i64,
    pub value: f64,
    pub x: Tween,
    pub y: Tween,
    pub r: Tween,
    pub exiting: bool,
}

impl Marker {
    /// Animated center at `now`, in pixels.
    pub fn position(&self, now: f64) -> (f32, f32) {
        (self.x.value(now) as f32, self.y.value(now) as f32)
    }

    /// Animated radius at `now`, in pixels.
    pub fn radius(&self, now: f64) -> f32 {
        self.r.value(now) as f32
    }
}

/// The full marker layer. Reconciliation partitions the incoming dataset's
/// keys against the current set: new keys enter, shared keys update, keys
/// missing from the input exit.
#[derive(Clone, Debug, Default)]
pub struct MarkerSet {
    markers: BTreeMap<i64, Marker>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self { markers: BTreeMap::new() }
    }

    /// Reconcile against a replacement dataset. Scales must map to the
    /// *target* geometry: entered markers appear at their final coordinates,
    /// surviving markers glide toward theirs. Duplicate keys in `samples`
    /// collapse to the last occurrence, so the live key set never holds
    /// duplicates.
    pub fn reconcile(
        &mut self,
        samples: &[Sample],
        xs: &TimeScale,
        ys: &ValueScale,
        now: f64,
        duration_ms: f64,
    ) {
        let mut incoming: BTreeMap<i64, Sample> = BTreeMap::new();
        for s in samples {
            incoming.insert(s.key(), *s);
        }

        // Exit: present before, absent now.
        for (key, m) in self.markers.iter_mut() {
            if !incoming.contains_key(key) && !m.exiting {
                m.exiting = true;
                m.r.retarget(now, 0.0, duration_ms);
            }
        }

        for (key, s) in incoming {
            let tx = xs.to_px(s.time_ms()) as f64;
            let ty = ys.to_px(s.value) as f64;
            match self.markers.get_mut(&key) {
                Some(m) => {
                    // Update (or revive an exit still in flight).
                    if m.exiting {
                        m.exiting = false;
                        m.r.retarget(now, MARKER_RADIUS as f64, duration_ms);
                    }
                    m.value = s.value;
                    m.x.retarget(now, tx, duration_ms);
                    m.y.retarget(now, ty, duration_ms);
                }
                None => {
                    // Enter: final position, radius grown from 0.
                    let mut r = Tween::fixed(0.0);
                    r.retarget(now, MARKER_RADIUS as f64, duration_ms);
                    self.markers.insert(
                        key,
                        Marker {
                            key,
                            value: s.value,
                            x: Tween::fixed(tx),
                            y: Tween::fixed(ty),
                            r,
                            exiting: false,
                        },
                    );
                }
            }
        }
    }

    /// Drop exiting markers whose shrink has completed. Returns the number
    /// removed.
    pub fn prune(&mut self, now: f64) -> usize {
        let before = self.markers.len();
        self.markers.retain(|_, m| !(m.exiting && m.r.done(now)));
        before - self.markers.len()
    }

    /// Keys of live (non-exiting) markers, ascending.
    pub fn live_keys(&self) -> Vec<i64> {
        self.markers
            .values()
            .filter(|m| !m.exiting)
            .map(|m| m.key)
            .collect()
    }

    /// Look up a marker by key, exiting ones included.
    pub fn get(&self, key: i64) -> Option<&Marker> {
        self.markers.get(&key)
    }

    /// All markers in key order, exiting ones included (they still render
    /// while shrinking).
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    /// Total marker count, exiting ones included.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
