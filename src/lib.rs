#![doc(html_root_url = "https://docs.rs/holeframe/latest")]
//! Public API for the `holeframe` library.
//!
//! This crate rebuilds logical messages from fragments that arrive out of
//! order, duplicated or overlapping. Each fragment starts with a fixed
//! 23-byte header giving its byte offset within the message and the
//! message's total size; a [`PacketAssembly`] tracks the byte ranges still
//! missing (the RFC 815 hole list) and reports completion once none remain.
//!
//! Transport I/O, timeouts and routing fragments to the right assembly are
//! the caller's concern.

pub mod byte_order;
pub mod fragment;
pub mod metrics;

pub use fragment::{
    AssemblyStatus,
    DecodeError,
    FRAGMENT_HEADER_LEN,
    Fragment,
    FragmentBatch,
    FragmentFrame,
    FragmentHeader,
    FragmentationConfig,
    FragmentationError,
    Fragmenter,
    Hole,
    PacketAssembly,
    PeerId,
    ReassemblyError,
    Sequence,
    decode_fragment,
    encode_fragment,
};
pub use crate::metrics::{FRAGMENTS_PROCESSED, FragmentOutcome, MESSAGES_REASSEMBLED};
