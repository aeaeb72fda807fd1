//! Outbound helper that splits logical messages into wire fragments.
//!
//! [`Fragmenter`] chunks a message into contiguous fragments of at most
//! [`FragmentationConfig::fragment_payload_cap`] bytes and stamps each with a
//! [`FragmentHeader`] carrying its offset, the message's total size and a
//! sequence number unique to the message. The receiving side rebuilds the
//! message with a [`PacketAssembly`](crate::fragment::PacketAssembly).

use std::sync::atomic::{AtomicU32, Ordering};

use bytes::Bytes;

use super::{
    Fragment,
    FragmentHeader,
    FragmentationConfig,
    FragmentationError,
    PeerId,
    Sequence,
    encode_fragment,
};

/// Splits logical messages into fragment-sized frames.
#[derive(Debug)]
pub struct Fragmenter {
    config: FragmentationConfig,
    next_sequence: AtomicU32,
}

impl Fragmenter {
    /// Create a fragmenter whose sequence numbers start at zero.
    #[must_use]
    pub const fn new(config: FragmentationConfig) -> Self {
        Self::with_starting_sequence(config, Sequence::new(0))
    }

    /// Create a fragmenter starting from a specific [`Sequence`].
    #[must_use]
    pub const fn with_starting_sequence(config: FragmentationConfig, start_at: Sequence) -> Self {
        Self {
            config,
            next_sequence: AtomicU32::new(start_at.get()),
        }
    }

    /// Return the configuration used to size fragments.
    #[must_use]
    pub const fn config(&self) -> &FragmentationConfig { &self.config }

    /// Generate and return the next [`Sequence`], wrapping after `u32::MAX`.
    #[must_use]
    pub fn next_sequence(&self) -> Sequence {
        Sequence::new(self.next_sequence.fetch_add(1, Ordering::Relaxed))
    }

    /// Split `payload` into fragments under a fresh sequence number.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    ///
    /// use holeframe::fragment::{FragmentationConfig, Fragmenter, PeerId};
    /// let config = FragmentationConfig {
    ///     fragment_payload_cap: NonZeroUsize::new(3).expect("non-zero"),
    ///     ..FragmentationConfig::default()
    /// };
    /// let fragmenter = Fragmenter::new(config);
    /// let batch = fragmenter
    ///     .fragment_bytes(PeerId::new(1), PeerId::new(2), 0, &b"abcdefgh"[..])
    ///     .expect("fits");
    /// assert_eq!(batch.len(), 3);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`FragmentationError::MessageTooLarge`] when the payload exceeds
    /// the configured message cap or cannot be described by a `u32` size.
    pub fn fragment_bytes(
        &self,
        local_id: PeerId,
        remote_id: PeerId,
        kind: u8,
        payload: impl Into<Bytes>,
    ) -> Result<FragmentBatch, FragmentationError> {
        let payload = payload.into();
        let limit = self.config.max_message_size;
        let total_size = u32::try_from(payload.len())
            .ok()
            .filter(|_| payload.len() <= limit.get())
            .ok_or(FragmentationError::MessageTooLarge {
                attempted: payload.len(),
                limit,
            })?;

        let sequence = self.next_sequence();
        let template = FragmentHeader::new(0, total_size)
            .with_peers(local_id, remote_id)
            .with_sequence(sequence)
            .with_kind(kind);
        Ok(FragmentBatch {
            sequence,
            fragments: self.build_fragments(template, &payload),
        })
    }

    fn build_fragments(&self, template: FragmentHeader, payload: &Bytes) -> Vec<FragmentFrame> {
        if payload.is_empty() {
            return vec![FragmentFrame::new(template, Bytes::new())];
        }

        let max = self.config.fragment_payload_cap.get();
        let total = payload.len();
        let mut fragments = Vec::with_capacity(total.div_ceil(max));
        let mut offset = 0_usize;

        while offset < total {
            let end = offset.saturating_add(max).min(total);
            // `total` fits in u32, so every offset below it does too.
            let wire_offset = u32::try_from(offset).unwrap_or(u32::MAX);
            fragments.push(FragmentFrame::new(
                template.with_offset(wire_offset),
                payload.slice(offset..end),
            ));
            offset = end;
        }

        fragments
    }
}

/// Header and payload for a single outbound fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentFrame {
    header: FragmentHeader,
    payload: Bytes,
}

impl FragmentFrame {
    /// Construct a new fragment frame.
    #[must_use]
    pub fn new(header: FragmentHeader, payload: Bytes) -> Self { Self { header, payload } }

    /// Return the fragment header.
    #[must_use]
    pub fn header(&self) -> &FragmentHeader { &self.header }

    /// Return the fragment payload bytes.
    #[must_use]
    pub fn payload(&self) -> &[u8] { &self.payload }

    /// Borrow the frame as a [`Fragment`] for local reassembly.
    #[must_use]
    pub fn as_fragment(&self) -> Fragment<'_> { Fragment::new(self.header, &self.payload) }

    /// Write the frame in wire layout.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> { encode_fragment(&self.header, &self.payload) }

    /// Consume the frame, returning its components.
    #[must_use]
    pub fn into_parts(self) -> (FragmentHeader, Bytes) { (self.header, self.payload) }
}

/// Collection of fragments produced for a single logical message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentBatch {
    sequence: Sequence,
    fragments: Vec<FragmentFrame>,
}

impl FragmentBatch {
    /// Return the [`Sequence`] shared by all fragments.
    #[must_use]
    pub const fn sequence(&self) -> Sequence { self.sequence }

    /// Return the fragments in offset order.
    #[must_use]
    pub fn fragments(&self) -> &[FragmentFrame] { self.fragments.as_slice() }

    /// Number of fragments in the batch.
    #[expect(
        clippy::len_without_is_empty,
        reason = "batches are guaranteed non-empty"
    )]
    #[must_use]
    pub fn len(&self) -> usize { self.fragments.len() }

    /// Whether the message required more than one fragment.
    #[must_use]
    pub fn is_fragmented(&self) -> bool { self.len() > 1 }

    /// Consume the batch, returning all fragments.
    #[must_use]
    pub fn into_fragments(self) -> Vec<FragmentFrame> { self.fragments }
}

impl IntoIterator for FragmentBatch {
    type Item = FragmentFrame;
    type IntoIter = std::vec::IntoIter<FragmentFrame>;

    fn into_iter(self) -> Self::IntoIter { self.fragments.into_iter() }
}
