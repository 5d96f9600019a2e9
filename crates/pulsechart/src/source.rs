// File: crates/pulsechart/src/source.rs
// Summary: Push-source seam ("init" handshake + "data" polls) and session glue.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use thiserror::Error;

use crate::chart::LiveChart;
use crate::sample::Sample;

#[derive(Debug, Error)]
pub enum SourceError {
    /// The transport behind this source has gone away.
    #[error("push source disconnected")]
    Disconnected,
    /// `poll` was called before `start`.
    #[error("push source polled before start")]
    NotStarted,
}

/// A push-style feed of replacement datasets. The transport behind it
/// (connection lifecycle, reconnection, framing) is the collaborator's
/// business; this seam only sees the two events the chart cares about.
pub trait PushSource {
    /// One-time outbound "init" signal telling the source to begin sending.
    fn start(&mut self) -> Result<(), SourceError>;

    /// Non-blocking inbound "data" event: the next full replacement dataset,
    /// or None when nothing is pending.
    fn poll(&mut self) -> Result<Option<Vec<Sample>>, SourceError>;
}

/// In-process push source over an mpsc channel. The consuming side stays on
/// the single chart thread; whoever holds the sender plays transport.
pub struct ChannelSource {
    rx: Receiver<Vec<Sample>>,
    started: bool,
}

impl ChannelSource {
    /// Build the source plus the sender handle the feeding side keeps.
    pub fn new() -> (Self, Sender<Vec<Sample>>) {
        let (tx, rx) = mpsc::channel();
        (Self { rx, started: false }, tx)
    }
}

impl PushSource for ChannelSource {
    fn start(&mut self) -> Result<(), SourceError> {
        self.started = true;
        Ok(())
    }

    fn poll(&mut self) -> Result<Option<Vec<Sample>>, SourceError> {
        if !self.started {
            return Err(SourceError::NotStarted);
        }
        match self.rx.try_recv() {
            Ok(data) => Ok(Some(data)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(SourceError::Disconnected),
        }
    }
}

/// Wires a push source to a chart. `pump` runs on the caller's event loop:
/// it drains everything pending and applies each dataset in arrival order,
/// so a burst of updates simply re-targets the running transitions.
pub struct Session<S: PushSource> {
    pub chart: LiveChart,
    source: S,
}

impl<S: PushSource> Session<S> {
    /// Start the source (the "init" handshake) and wrap it with the chart.
    pub fn start(chart: LiveChart, mut source: S) -> Result<Self, SourceError> {
        source.start()?;
        Ok(Self { chart, source })
    }

    /// Drain pending datasets into the chart and advance its clock.
    /// Returns how many datasets were applied.
    pub fn pump(&mut self, now: f64) -> Result<usize, SourceError> {
        let mut applied = 0usize;
        while let Some(data) = self.source.poll()? {
            self.chart.update_chart(data, now);
            applied += 1;
        }
        self.chart.tick(now);
        Ok(applied)
    }
}
