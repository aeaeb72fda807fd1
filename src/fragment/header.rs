//! Fixed-size fragment header and its wire layout.
//!
//! The header occupies the first [`FRAGMENT_HEADER_LEN`] bytes of every
//! fragment:
//!
//! ```text
//! 0        4            8          12          16         20     21        23
//! | offset | total size | local id | remote id | sequence | kind | reserved | payload..
//! ```
//!
//! All integers are big-endian. The two reserved bytes are written as zero
//! and ignored on read.

use super::{DecodeError, PeerId, Sequence};
use crate::byte_order::{read_network_u32_at, write_network_u32};

/// Number of bytes preceding the payload of every fragment.
pub const FRAGMENT_HEADER_LEN: usize = 23;

const OFFSET_AT: usize = 0;
const TOTAL_SIZE_AT: usize = 4;
const LOCAL_ID_AT: usize = 8;
const REMOTE_ID_AT: usize = 12;
const SEQUENCE_AT: usize = 16;
const KIND_AT: usize = 20;

/// Reassembly metadata carried by a single fragment.
///
/// Only `content_offset` and `content_total_size` matter to
/// [`PacketAssembly`](crate::fragment::PacketAssembly); the identifiers and
/// the kind tag are carried through for the caller's demultiplexing.
///
/// # Examples
///
/// ```
/// use holeframe::fragment::{FragmentHeader, PeerId, Sequence};
/// let header = FragmentHeader::new(2, 4)
///     .with_peers(PeerId::new(1), PeerId::new(2))
///     .with_sequence(Sequence::new(7));
/// assert_eq!(header.content_offset(), 2);
/// assert_eq!(header.content_total_size(), 4);
/// assert_eq!(header.sequence().get(), 7);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FragmentHeader {
    content_offset: u32,
    content_total_size: u32,
    local_id: PeerId,
    remote_id: PeerId,
    sequence: Sequence,
    kind: u8,
}

impl FragmentHeader {
    /// Create a header placing a payload at `content_offset` within a message
    /// of `content_total_size` bytes. Identifiers and kind start at zero.
    #[must_use]
    pub const fn new(content_offset: u32, content_total_size: u32) -> Self {
        Self {
            content_offset,
            content_total_size,
            local_id: PeerId::new(0),
            remote_id: PeerId::new(0),
            sequence: Sequence::new(0),
            kind: 0,
        }
    }

    /// Set the local and remote peer identifiers.
    #[must_use]
    pub const fn with_peers(mut self, local_id: PeerId, remote_id: PeerId) -> Self {
        self.local_id = local_id;
        self.remote_id = remote_id;
        self
    }

    /// Set the message sequence number.
    #[must_use]
    pub const fn with_sequence(mut self, sequence: Sequence) -> Self {
        self.sequence = sequence;
        self
    }

    /// Set the content kind tag.
    #[must_use]
    pub const fn with_kind(mut self, kind: u8) -> Self {
        self.kind = kind;
        self
    }

    /// Replace the content offset, keeping every other field.
    #[must_use]
    pub const fn with_offset(mut self, content_offset: u32) -> Self {
        self.content_offset = content_offset;
        self
    }

    /// Byte position of the payload within the reassembled message.
    #[must_use]
    pub const fn content_offset(&self) -> u32 { self.content_offset }

    /// Declared size of the reassembled message.
    #[must_use]
    pub const fn content_total_size(&self) -> u32 { self.content_total_size }

    /// Identifier of the sending side.
    #[must_use]
    pub const fn local_id(&self) -> PeerId { self.local_id }

    /// Identifier of the receiving side.
    #[must_use]
    pub const fn remote_id(&self) -> PeerId { self.remote_id }

    /// Sequence number shared by all fragments of the message.
    #[must_use]
    pub const fn sequence(&self) -> Sequence { self.sequence }

    /// Opaque content kind tag.
    #[must_use]
    pub const fn kind(&self) -> u8 { self.kind }

    /// Write the header in wire layout. Reserved bytes are zero.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; FRAGMENT_HEADER_LEN] {
        let mut out = [0_u8; FRAGMENT_HEADER_LEN];
        let fields = [
            (OFFSET_AT, self.content_offset),
            (TOTAL_SIZE_AT, self.content_total_size),
            (LOCAL_ID_AT, self.local_id.get()),
            (REMOTE_ID_AT, self.remote_id.get()),
            (SEQUENCE_AT, self.sequence.get()),
        ];
        for (at, value) in fields {
            if let Some(slot) = out.get_mut(at..at + 4) {
                slot.copy_from_slice(&write_network_u32(value));
            }
        }
        if let Some(slot) = out.get_mut(KIND_AT) {
            *slot = self.kind;
        }
        out
    }

    /// Parse the header from the start of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TooShort`] when fewer than
    /// [`FRAGMENT_HEADER_LEN`] bytes are available.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let too_short = || DecodeError::TooShort { len: bytes.len() };
        if bytes.len() < FRAGMENT_HEADER_LEN {
            return Err(too_short());
        }
        let field = |at| read_network_u32_at(bytes, at).ok_or_else(too_short);

        Ok(Self {
            content_offset: field(OFFSET_AT)?,
            content_total_size: field(TOTAL_SIZE_AT)?,
            local_id: PeerId::new(field(LOCAL_ID_AT)?),
            remote_id: PeerId::new(field(REMOTE_ID_AT)?),
            sequence: Sequence::new(field(SEQUENCE_AT)?),
            kind: *bytes.get(KIND_AT).ok_or_else(too_short)?,
        })
    }
}
