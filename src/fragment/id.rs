use derive_more::{Display, From, Into};

/// Identifier of one endpoint of a fragmented exchange.
///
/// The reassembler never inspects peer identifiers; callers use them to route
/// fragments to the right [`PacketAssembly`](crate::fragment::PacketAssembly).
///
/// # Examples
///
/// ```
/// use holeframe::fragment::PeerId;
/// let id = PeerId::new(0xbadd_cafe);
/// assert_eq!(id.get(), 0xbadd_cafe);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, From, Into)]
#[display("{_0}")]
pub struct PeerId(u32);

impl PeerId {
    /// Create a new identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self { Self(value) }

    /// Return the inner numeric identifier.
    #[must_use]
    pub const fn get(self) -> u32 { self.0 }
}

/// Sequence number shared by every fragment of one logical message.
///
/// # Examples
///
/// ```
/// use holeframe::fragment::Sequence;
/// let sequence = Sequence::new(10);
/// assert_eq!(sequence.get(), 10);
/// assert_eq!(sequence.wrapping_next(), Sequence::new(11));
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into,
)]
#[display("{_0}")]
pub struct Sequence(u32);

impl Sequence {
    /// Construct a sequence number from a `u32` value.
    #[must_use]
    pub const fn new(value: u32) -> Self { Self(value) }

    /// Return the underlying numeric value.
    #[must_use]
    pub const fn get(self) -> u32 { self.0 }

    /// Advance the sequence, wrapping back to zero after `u32::MAX`.
    #[must_use]
    pub const fn wrapping_next(self) -> Self { Self(self.0.wrapping_add(1)) }
}
