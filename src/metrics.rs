//! Metric helpers for `holeframe`.
//!
//! This module defines metric names and simple helper functions wrapping the
//! [`metrics`](https://docs.rs/metrics) crate. Without the `metrics` feature
//! the helpers do nothing.

#[cfg(feature = "metrics")]
use metrics::counter;

/// Name of the counter tracking fragments fed to an assembly.
pub const FRAGMENTS_PROCESSED: &str = "holeframe_fragments_total";
/// Name of the counter tracking messages that completed reassembly.
pub const MESSAGES_REASSEMBLED: &str = "holeframe_messages_reassembled_total";

/// What happened to a fragment fed to an assembly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentOutcome {
    /// The fragment filled at least one missing byte.
    Applied,
    /// The fragment covered nothing new or fell outside the message.
    Redundant,
}

impl FragmentOutcome {
    /// Label value recorded under the `outcome` key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FragmentOutcome::Applied => "applied",
            FragmentOutcome::Redundant => "redundant",
        }
    }
}

/// Record a processed fragment with its outcome.
pub fn inc_fragments(outcome: FragmentOutcome) {
    #[cfg(feature = "metrics")]
    counter!(FRAGMENTS_PROCESSED, "outcome" => outcome.as_str()).increment(1);
    #[cfg(not(feature = "metrics"))]
    let _ = outcome;
}

/// Record a completed message.
pub fn inc_reassembled() {
    #[cfg(feature = "metrics")]
    counter!(MESSAGES_REASSEMBLED).increment(1);
}
