//! Error and status types emitted by the fragmentation layer.
//!
//! Decoding has a single failure mode. Reassembly itself never fails; the
//! errors below only surface from the opt-in strict APIs that let callers
//! enforce resource and consistency bounds at their boundary.

use std::num::NonZeroUsize;

use thiserror::Error;

/// Completion state of a [`PacketAssembly`](crate::fragment::PacketAssembly).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssemblyStatus {
    /// At least one byte range of the message is still missing.
    Incomplete,
    /// Every byte of the message has been supplied.
    Complete,
}

/// Errors produced while parsing a raw fragment.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The input cannot hold a full fragment header.
    #[error("fragment too short: {len} bytes, header needs {}", super::FRAGMENT_HEADER_LEN)]
    TooShort { len: usize },
}

/// Errors produced by the strict reassembly entry points.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ReassemblyError {
    /// The declared message size exceeds the configured cap.
    #[error("message of {attempted} bytes exceeds reassembly cap of {limit} bytes")]
    MessageTooLarge {
        attempted: usize,
        limit: NonZeroUsize,
    },
    /// A fragment declared a different total size than the first fragment.
    #[error("fragment total size mismatch: expected {expected}, found {found}")]
    TotalSizeMismatch { expected: u32, found: u32 },
}

/// Errors produced while fragmenting outbound messages.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FragmentationError {
    /// The message exceeds the configured cap or the `u32` size field.
    #[error("message of {attempted} bytes exceeds fragmentation cap of {limit} bytes")]
    MessageTooLarge {
        attempted: usize,
        limit: NonZeroUsize,
    },
}
