// File: crates/pulsechart/tests/session.rs
// Purpose: Validate the push seam: init handshake, pump draining, disconnects.

use pulsechart::{ChannelSource, LiveChart, PushSource, Sample, Session, SourceError};

#[test]
fn poll_before_start_is_an_error() {
    let (mut source, _tx) = ChannelSource::new();
    assert!(matches!(source.poll(), Err(SourceError::NotStarted)));

    source.start().unwrap();
    assert!(matches!(source.poll(), Ok(None)));
}

#[test]
fn pump_applies_queued_datasets_in_order() {
    let (source, tx) = ChannelSource::new();
    let mut session = Session::start(LiveChart::new(), source).unwrap();

    tx.send(vec![Sample::at_millis(0, 5.0), Sample::at_millis(1, 10.0)]).unwrap();
    tx.send(vec![Sample::at_millis(1, 10.0), Sample::at_millis(2, 3.0)]).unwrap();

    // One pump drains the burst; the last dataset wins, as with any
    // transition re-target.
    let applied = session.pump(0.0).unwrap();
    assert_eq!(applied, 2);
    assert_eq!(session.chart.marker_keys(), vec![1, 2]);

    // Nothing pending: pump is a no-op.
    assert_eq!(session.pump(10.0).unwrap(), 0);
}

#[test]
fn disconnect_surfaces_as_error() {
    let (source, tx) = ChannelSource::new();
    let mut session = Session::start(LiveChart::new(), source).unwrap();

    drop(tx);
    assert!(matches!(session.pump(0.0), Err(SourceError::Disconnected)));
}

#[test]
fn pump_advances_the_exit_clock() {
    let (source, tx) = ChannelSource::new();
    let mut session = Session::start(LiveChart::new(), source).unwrap();

    tx.send(vec![Sample::at_millis(0, 1.0)]).unwrap();
    session.pump(0.0).unwrap();
    tx.send(Vec::new()).unwrap();
    session.pump(100.0).unwrap();
    assert_eq!(session.chart.markers().len(), 1);

    // A later pump with nothing queued still prunes finished exits.
    session.pump(1000.0).unwrap();
    assert!(session.chart.markers().is_empty());
}
