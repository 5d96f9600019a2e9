// File: crates/pulsechart/src/lib.rs
// Summary: Core library entry point; exports public API for live chart updates and rendering.

pub mod chart;
pub mod grid;
pub mod marker;
pub mod sample;
pub mod scale;
pub mod source;
pub mod theme;
pub mod transition;
pub mod types;

pub use chart::{LiveChart, RenderOptions};
pub use marker::{Marker, MarkerSet};
pub use sample::{time_domain, value_domain, Sample};
pub use scale::{TimeScale, ValueScale};
pub use source::{ChannelSource, PushSource, Session, SourceError};
pub use theme::Theme;
pub use transition::{AnimatedDomain, Tween};
pub use types::{Insets, HEIGHT, MARKER_RADIUS, TRANSITION_MS, WIDTH};
