//! Helpers for explicit network byte-order conversions.
//!
//! Every multi-byte field of the fragment header travels big-endian. These
//! helpers keep Clippy expectations scoped to the conversion points so the
//! header code can stay explicit about wire endianness.

/// Serialise a `u32` in network byte order (big-endian).
///
/// # Examples
///
/// ```
/// use holeframe::byte_order::write_network_u32;
///
/// assert_eq!(write_network_u32(0xdead_c0de), [0xde, 0xad, 0xc0, 0xde]);
/// ```
#[must_use]
pub fn write_network_u32(value: u32) -> [u8; 4] {
    #[expect(
        clippy::big_endian_bytes,
        reason = "Network byte order requires big-endian bytes."
    )]
    value.to_be_bytes()
}

/// Parse a network-order `u32` from its on-wire representation.
///
/// # Examples
///
/// ```
/// use holeframe::byte_order::read_network_u32;
///
/// assert_eq!(read_network_u32([0x00, 0x0f, 0xf1, 0xce]), 0x000f_f1ce);
/// ```
#[must_use]
pub fn read_network_u32(bytes: [u8; 4]) -> u32 {
    #[expect(
        clippy::big_endian_bytes,
        reason = "Network byte order requires big-endian bytes."
    )]
    u32::from_be_bytes(bytes)
}

/// Read the network-order `u32` starting at `at`, if four bytes are available.
#[must_use]
pub fn read_network_u32_at(bytes: &[u8], at: usize) -> Option<u32> {
    let window = bytes.get(at..at.checked_add(4)?)?;
    let array: [u8; 4] = window.try_into().ok()?;
    Some(read_network_u32(array))
}
