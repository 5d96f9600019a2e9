// File: crates/pulsechart/src/scale.rs
// Summary: Time (X) and Value (Y) scale transforms from data domains to the plot rect.

/// Logical X coordinate (epoch milliseconds).
pub type Logical = f64;
/// Value Y coordinate (measured quantity).
pub type Value = f64;

/// Horizontal time scale mapping a millisecond domain onto [left, right] pixels.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub left_px: f32,
    pub right_px: f32,
    pub t0: Logical,
    pub t1: Logical,
}

impl TimeScale {
    pub fn new(left_px: f32, right_px: f32, t0: Logical, t1: Logical) -> Self {
        let mut s = Self { left_px, right_px, t0, t1 };
        if (s.t1 - s.t0).abs() < 1e-9 {
            s.t1 = s.t0 + 1.0;
        }
        s
    }
    #[inline]
    pub fn to_px(&self, t: Logical) -> f32 {
        // Signed span: the constructor guarantees |span| >= epsilon, and an
        // inverted domain must keep mapping proportionally.
        let span = self.t1 - self.t0;
        self.left_px + ((t - self.t0) / span) as f32 * (self.right_px - self.left_px)
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> Logical {
        let span = self.t1 - self.t0;
        self.t0 + ((px - self.left_px) / (self.right_px - self.left_px)) as f64 * span
    }
}

/// Vertical value scale mapping [v0, v1] onto [bottom, top] pixels,
/// inverted so larger values land higher on screen.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub v0: Value,
    pub v1: Value,
}

impl ValueScale {
    pub fn new(top_px: f32, bottom_px: f32, v0: Value, v1: Value) -> Self {
        let mut s = Self { top_px, bottom_px, v0, v1 };
        if (s.v1 - s.v0).abs() < 1e-12 {
            s.v1 = s.v0 + 1.0;
        }
        s
    }
    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        // Signed span, as above: a zero-anchored domain over all-negative
        // data arrives inverted ([0, max] with max < 0) and still maps v1 to
        // the top edge.
        let span = self.v1 - self.v0;
        self.bottom_px - ((v - self.v0) / span) as f32 * (self.bottom_px - self.top_px)
    }
    #[inline]
    pub fn from_px(&self, py: f32) -> Value {
        let span = self.v1 - self.v0;
        self.v0 + ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64 * span
    }
}
