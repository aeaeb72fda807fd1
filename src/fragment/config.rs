//! Configuration used by fragmentation and bounded reassembly.

use std::num::NonZeroUsize;

use super::FRAGMENT_HEADER_LEN;

/// Datagram size assumed by [`FragmentationConfig::default`], matching the
/// usual Ethernet MTU minus IP and UDP headers.
pub const DEFAULT_FRAME_BUDGET: usize = 1450;

/// Message size cap assumed by [`FragmentationConfig::default`].
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 64 * 1024;

/// Settings that bound fragment sizes and reassembly resource usage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FragmentationConfig {
    /// Maximum number of message bytes carried by a single fragment. The
    /// encoded fragment additionally carries the fixed header.
    pub fragment_payload_cap: NonZeroUsize,
    /// Hard cap on the declared size of a reassembled message.
    pub max_message_size: NonZeroUsize,
}

impl FragmentationConfig {
    /// Derive a configuration from the largest datagram the transport will
    /// carry.
    ///
    /// Returns `None` when the budget cannot fit the header and at least one
    /// payload byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    ///
    /// use holeframe::fragment::FragmentationConfig;
    /// let max = NonZeroUsize::new(4096).expect("non-zero");
    /// let config = FragmentationConfig::for_frame_budget(100, max).expect("budget fits");
    /// assert_eq!(config.fragment_payload_cap.get(), 77);
    /// assert!(FragmentationConfig::for_frame_budget(23, max).is_none());
    /// ```
    #[must_use]
    pub fn for_frame_budget(frame_budget: usize, max_message_size: NonZeroUsize) -> Option<Self> {
        let available = frame_budget.checked_sub(FRAGMENT_HEADER_LEN)?;
        Some(Self {
            fragment_payload_cap: NonZeroUsize::new(available)?,
            max_message_size,
        })
    }

    /// Size of the largest encoded fragment this configuration produces.
    #[must_use]
    pub fn encoded_fragment_ceiling(&self) -> usize {
        self.fragment_payload_cap.get() + FRAGMENT_HEADER_LEN
    }
}

impl Default for FragmentationConfig {
    fn default() -> Self {
        Self {
            fragment_payload_cap: NonZeroUsize::new(DEFAULT_FRAME_BUDGET - FRAGMENT_HEADER_LEN)
                .unwrap_or(NonZeroUsize::MIN),
            max_message_size: NonZeroUsize::new(DEFAULT_MAX_MESSAGE_SIZE)
                .unwrap_or(NonZeroUsize::MIN),
        }
    }
}
