// File: crates/pulsechart/tests/domain.rs
// Purpose: Validate domain scans: zero-anchored value axis, min/max time axis.

use pulsechart::{time_domain, value_domain, LiveChart, Sample, ValueScale};

#[test]
fn time_domain_is_minmax_over_unsorted_input() {
    let samples = vec![
        Sample::at_millis(300, 1.0),
        Sample::at_millis(100, 2.0),
        Sample::at_millis(900, 3.0),
        Sample::at_millis(400, 4.0),
    ];
    assert_eq!(time_domain(&samples), Some((100.0, 900.0)));

    // Order of records must not matter.
    let mut reversed = samples.clone();
    reversed.reverse();
    assert_eq!(time_domain(&reversed), time_domain(&samples));
}

#[test]
fn value_domain_always_starts_at_zero() {
    let samples = vec![Sample::at_millis(0, 3.0), Sample::at_millis(1, 9.0)];
    assert_eq!(value_domain(&samples), Some((0.0, 9.0)));

    // Even when every value sits above zero the baseline stays anchored.
    let high = vec![Sample::at_millis(0, 100.0), Sample::at_millis(1, 150.0)];
    assert_eq!(value_domain(&high).unwrap().0, 0.0);

    // And all-negative data keeps the raw [0, max] rule.
    let negative = vec![Sample::at_millis(0, -5.0), Sample::at_millis(1, -2.0)];
    assert_eq!(value_domain(&negative), Some((0.0, -2.0)));
}

#[test]
fn inverted_value_domain_maps_proportionally() {
    // All-negative data yields the inverted domain [0, -2]: zero stays on
    // the bottom edge and the (negative) maximum lands on the top edge.
    let ys = ValueScale::new(20.0, 570.0, 0.0, -2.0);
    assert!((ys.to_px(0.0) - 570.0).abs() < 1e-3);
    assert!((ys.to_px(-2.0) - 20.0).abs() < 1e-3);
    assert!((ys.to_px(-1.0) - 295.0).abs() < 1e-3);
    // Round trip through the inverse stays on the same value.
    assert!((ys.from_px(ys.to_px(-1.5)) - (-1.5)).abs() < 1e-6);

    // Same through the chart: the marker holding the dataset maximum sits
    // on the plot's top edge once settled.
    let mut chart = LiveChart::new();
    chart.update_chart(vec![Sample::at_millis(0, -5.0), Sample::at_millis(1000, -2.0)], 0.0);
    let (_, y) = chart.markers().get(1000).unwrap().position(1000.0);
    assert!((y - 20.0).abs() < 1e-3, "domain max should map to the plot top, got y={y}");
}

#[test]
fn empty_input_has_no_domain() {
    assert_eq!(time_domain(&[]), None);
    assert_eq!(value_domain(&[]), None);
}

#[test]
fn single_sample_degenerate_domain() {
    let one = vec![Sample::at_millis(42, 7.0)];
    assert_eq!(time_domain(&one), Some((42.0, 42.0)));
    assert_eq!(value_domain(&one), Some((0.0, 7.0)));

    // The chart must still accept it without producing non-finite geometry.
    let mut chart = LiveChart::new();
    chart.update_chart(one, 0.0);
    let m = chart.markers().get(42).expect("marker");
    let (x, y) = m.position(1000.0);
    assert!(x.is_finite() && y.is_finite());
}

#[test]
fn chart_domains_follow_each_update() {
    let mut chart = LiveChart::new();
    chart.update_chart(vec![Sample::at_millis(0, 5.0), Sample::at_millis(1, 10.0)], 0.0);
    assert_eq!(chart.time_domain_target(), (0.0, 1.0));
    assert_eq!(chart.value_domain_target(), (0.0, 10.0));

    chart.update_chart(vec![Sample::at_millis(1, 10.0), Sample::at_millis(2, 3.0)], 100.0);
    assert_eq!(chart.time_domain_target(), (1.0, 2.0));
    assert_eq!(chart.value_domain_target(), (0.0, 10.0));
}
