// File: crates/pulsechart/src/types.rs
// Summary: Shared types and constants (surface size, margins, animation defaults).

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 600;

/// Default transition duration in milliseconds for all animated properties.
pub const TRANSITION_MS: f64 = 500.0;

/// Target radius of a fully entered point marker, in pixels.
pub const MARKER_RADIUS: f32 = 5.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(50, 20, 20, 30)
    }
}
