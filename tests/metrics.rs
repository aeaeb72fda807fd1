#![cfg(feature = "metrics")]
//! Tests for `holeframe` metrics helpers.
//!
//! These tests verify that counters update as fragments are fed to an
//! assembly, using `metrics_util::debugging::DebuggingRecorder`.

use holeframe::{
    FRAGMENTS_PROCESSED,
    Fragment,
    FragmentHeader,
    MESSAGES_REASSEMBLED,
    PacketAssembly,
};
use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};

/// Creates a debugging recorder and snapshotter for metrics testing.
fn debugging_recorder_setup() -> (Snapshotter, DebuggingRecorder) {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    (snapshotter, recorder)
}

/// Counter name, `outcome` label and value for every counter recorded.
type Counters = Vec<(String, Option<String>, u64)>;

/// Take a single snapshot; snapshotting resets the recorded counters.
fn counters(snapshotter: &Snapshotter) -> Counters {
    snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .filter_map(|(k, _, _, v)| match v {
            DebugValue::Counter(c) => {
                let outcome = k
                    .key()
                    .labels()
                    .find(|l| l.key() == "outcome")
                    .map(|l| l.value().to_string());
                Some((k.key().name().to_string(), outcome, c))
            }
            _ => None,
        })
        .collect()
}

/// Sum the counters named `name`, optionally restricted to one `outcome` label.
fn counter_value(counters: &Counters, name: &str, outcome: Option<&str>) -> u64 {
    counters
        .iter()
        .filter(|(n, o, _)| {
            n == name && outcome.is_none_or(|expected| o.as_deref() == Some(expected))
        })
        .map(|(_, _, c)| c)
        .sum()
}

#[test]
fn applied_and_redundant_fragments_are_counted() {
    let (snapshotter, recorder) = debugging_recorder_setup();
    metrics::with_local_recorder(&recorder, || {
        let mut assembly =
            PacketAssembly::new(&Fragment::new(FragmentHeader::new(0, 4), &[1, 2]));
        assembly.update(&Fragment::new(FragmentHeader::new(0, 4), &[1, 2]));
        assembly.update(&Fragment::new(FragmentHeader::new(9, 4), &[1]));
    });

    let snapshot = counters(&snapshotter);
    assert_eq!(
        counter_value(&snapshot, FRAGMENTS_PROCESSED, Some("applied")),
        1
    );
    assert_eq!(
        counter_value(&snapshot, FRAGMENTS_PROCESSED, Some("redundant")),
        2
    );
    assert_eq!(counter_value(&snapshot, MESSAGES_REASSEMBLED, None), 0);
}

#[test]
fn completed_message_is_counted_once() {
    let (snapshotter, recorder) = debugging_recorder_setup();
    metrics::with_local_recorder(&recorder, || {
        let mut assembly =
            PacketAssembly::new(&Fragment::new(FragmentHeader::new(2, 4), &[3, 4]));
        assembly.update(&Fragment::new(FragmentHeader::new(0, 4), &[1, 2]));
        assembly.update(&Fragment::new(FragmentHeader::new(0, 4), &[1, 2, 3, 4]));
    });

    let snapshot = counters(&snapshotter);
    assert_eq!(counter_value(&snapshot, MESSAGES_REASSEMBLED, None), 1);
    assert_eq!(
        counter_value(&snapshot, FRAGMENTS_PROCESSED, Some("applied")),
        2
    );
    assert_eq!(
        counter_value(&snapshot, FRAGMENTS_PROCESSED, Some("redundant")),
        1
    );
}
