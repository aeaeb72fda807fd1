//! Per-message reassembly buffer driven by a hole list.
//!
//! [`PacketAssembly`] is created from whichever fragment of a message arrives
//! first and sizes its buffer from that fragment's declared total. Later
//! fragments fill the buffer in any order; overlapping, duplicate and
//! out-of-range bytes are tolerated and silently ignored. The assembly is
//! ready once no hole remains.
//!
//! Routing fragments to the right assembly and evicting assemblies that
//! never complete are left to the caller.

use tracing::{debug, trace};

use super::{
    AssemblyStatus,
    Fragment,
    FragmentationConfig,
    Hole,
    ReassemblyError,
    hole::HoleList,
};
use crate::metrics::{self, FragmentOutcome};

/// Reassembly state for one logical message.
///
/// # Examples
///
/// ```
/// use holeframe::fragment::{Fragment, FragmentHeader, PacketAssembly};
/// let tail = [0xaa, 0xbb];
/// let head = [0xcc, 0xdd];
///
/// let mut assembly = PacketAssembly::new(&Fragment::new(FragmentHeader::new(2, 4), &tail));
/// assert!(!assembly.is_ready());
///
/// assembly.update(&Fragment::new(FragmentHeader::new(0, 4), &head));
/// assert!(assembly.is_ready());
/// assert_eq!(assembly.buffer(), &[0xcc, 0xdd, 0xaa, 0xbb]);
/// ```
#[derive(Clone, Debug)]
pub struct PacketAssembly {
    total_size: u32,
    buffer: Vec<u8>,
    holes: HoleList,
}

impl PacketAssembly {
    /// Start reassembling the message `first` belongs to.
    ///
    /// Allocates a zeroed buffer of `first.content_total_size()` bytes without
    /// any bound; use [`PacketAssembly::bounded`] when the size comes from an
    /// untrusted peer.
    #[must_use]
    pub fn new(first: &Fragment<'_>) -> Self {
        let total_size = first.content_total_size();
        let len = widen(total_size);
        let mut assembly = Self {
            total_size,
            buffer: vec![0; len],
            holes: HoleList::spanning(len),
        };
        assembly.apply(first);
        assembly
    }

    /// Like [`PacketAssembly::new`], but refuse to allocate more than
    /// `config.max_message_size` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ReassemblyError::MessageTooLarge`] when the declared total
    /// size exceeds the configured cap.
    pub fn bounded(
        first: &Fragment<'_>,
        config: &FragmentationConfig,
    ) -> Result<Self, ReassemblyError> {
        let attempted = widen(first.content_total_size());
        let limit = config.max_message_size;
        if attempted > limit.get() {
            return Err(ReassemblyError::MessageTooLarge { attempted, limit });
        }
        Ok(Self::new(first))
    }

    /// Feed another fragment of the same message.
    ///
    /// The fragment's declared total size is not checked against the buffer;
    /// see [`PacketAssembly::try_update`] for a strict variant. Fragments that
    /// cover no missing byte leave the assembly untouched.
    pub fn update(&mut self, fragment: &Fragment<'_>) { self.apply(fragment); }

    /// Feed a fragment after checking that it declares the same total size as
    /// the fragment that started the assembly.
    ///
    /// # Errors
    ///
    /// Returns [`ReassemblyError::TotalSizeMismatch`] and leaves the assembly
    /// unchanged when the declared sizes differ.
    pub fn try_update(
        &mut self,
        fragment: &Fragment<'_>,
    ) -> Result<AssemblyStatus, ReassemblyError> {
        let found = fragment.content_total_size();
        if found != self.total_size {
            return Err(ReassemblyError::TotalSizeMismatch {
                expected: self.total_size,
                found,
            });
        }
        self.apply(fragment);
        Ok(self.status())
    }

    /// Report whether every byte of the message has arrived.
    #[must_use]
    pub fn is_ready(&self) -> bool { self.holes.is_empty() }

    /// Return the completion state.
    #[must_use]
    pub fn status(&self) -> AssemblyStatus {
        if self.is_ready() {
            AssemblyStatus::Complete
        } else {
            AssemblyStatus::Incomplete
        }
    }

    /// Borrow the message buffer.
    ///
    /// Missing ranges read as zero until [`PacketAssembly::is_ready`] returns
    /// `true`.
    #[must_use]
    pub fn buffer(&self) -> &[u8] { self.buffer.as_slice() }

    /// Consume the assembly, returning the message buffer.
    #[must_use]
    pub fn into_buffer(self) -> Vec<u8> { self.buffer }

    /// Declared size of the message, taken from the first fragment.
    #[must_use]
    pub fn total_size(&self) -> usize { self.buffer.len() }

    /// Iterate over the missing byte ranges in ascending order.
    pub fn holes(&self) -> impl Iterator<Item = Hole> + '_ { self.holes.iter() }

    /// Number of disjoint missing ranges.
    #[must_use]
    pub fn hole_count(&self) -> usize { self.holes.len() }

    /// Number of bytes still missing.
    #[must_use]
    pub fn missing_bytes(&self) -> usize { self.holes.missing_bytes() }

    fn apply(&mut self, fragment: &Fragment<'_>) {
        let offset = fragment.content_offset();
        let payload = fragment.payload();
        let sequence = fragment.header().sequence();

        let Some((first, last)) = clip(offset, payload.len(), self.buffer.len()) else {
            debug!(
                %sequence,
                offset,
                len = payload.len(),
                total_size = self.total_size,
                "ignoring fragment outside message bounds"
            );
            metrics::inc_fragments(FragmentOutcome::Redundant);
            return;
        };

        if !self.holes.punch(first, last) {
            debug!(%sequence, offset, len = payload.len(), "ignoring redundant fragment");
            metrics::inc_fragments(FragmentOutcome::Redundant);
            return;
        }

        let span = last - first + 1;
        if span < payload.len() {
            debug!(
                %sequence,
                offset,
                dropped = payload.len() - span,
                "clipping fragment past end of message"
            );
        }
        if let (Some(dst), Some(src)) = (self.buffer.get_mut(first..=last), payload.get(..span)) {
            dst.copy_from_slice(src);
        }
        trace!(%sequence, first, last, holes = self.holes.len(), "applied fragment");
        metrics::inc_fragments(FragmentOutcome::Applied);

        if self.holes.is_empty() {
            debug!(%sequence, total_size = self.total_size, "message reassembled");
            metrics::inc_reassembled();
        }
    }
}

/// Inclusive buffer positions covered by `len` bytes at `offset`, cut to a
/// buffer of `total` bytes. `None` when nothing lands inside the buffer.
fn clip(offset: u32, len: usize, total: usize) -> Option<(usize, usize)> {
    let first = widen(offset);
    if len == 0 || first >= total {
        return None;
    }
    let end = first.saturating_add(len).min(total);
    Some((first, end - 1))
}

/// Wire sizes are `u32`; every supported target has at least 32-bit `usize`.
fn widen(value: u32) -> usize { usize::try_from(value).unwrap_or(usize::MAX) }
