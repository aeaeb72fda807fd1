//! Parsing and writing of complete fragments.
//!
//! A fragment on the wire is a [`FragmentHeader`] followed by its payload.
//! The payload length is never encoded; it is whatever follows the header.

use super::{DecodeError, FRAGMENT_HEADER_LEN, FragmentHeader};

/// A decoded fragment borrowing its payload from the input buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fragment<'a> {
    header: FragmentHeader,
    payload: &'a [u8],
}

impl<'a> Fragment<'a> {
    /// Pair a header with its payload.
    #[must_use]
    pub const fn new(header: FragmentHeader, payload: &'a [u8]) -> Self { Self { header, payload } }

    /// Return the fragment header.
    #[must_use]
    pub const fn header(&self) -> &FragmentHeader { &self.header }

    /// Return the payload bytes.
    #[must_use]
    pub const fn payload(&self) -> &'a [u8] { self.payload }

    /// Shorthand for `header().content_offset()`.
    #[must_use]
    pub const fn content_offset(&self) -> u32 { self.header.content_offset() }

    /// Shorthand for `header().content_total_size()`.
    #[must_use]
    pub const fn content_total_size(&self) -> u32 { self.header.content_total_size() }

    /// Write the fragment in wire layout.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> { encode_fragment(&self.header, self.payload) }
}

/// Parse a raw fragment.
///
/// Everything after the header is returned as the payload, so an input of
/// exactly [`FRAGMENT_HEADER_LEN`] bytes yields an empty payload. No field is
/// validated; offsets and sizes are taken as found.
///
/// # Examples
///
/// ```
/// use holeframe::fragment::decode_fragment;
/// let mut raw = vec![0_u8; 23];
/// raw[7] = 4; // total size
/// raw.extend_from_slice(&[0xaa, 0xbb]);
/// let fragment = decode_fragment(&raw).expect("header present");
/// assert_eq!(fragment.content_total_size(), 4);
/// assert_eq!(fragment.payload(), &[0xaa, 0xbb]);
/// ```
///
/// # Errors
///
/// Returns [`DecodeError::TooShort`] when `bytes` is shorter than the header.
pub fn decode_fragment(bytes: &[u8]) -> Result<Fragment<'_>, DecodeError> {
    let header = FragmentHeader::from_bytes(bytes)?;
    let payload = bytes.get(FRAGMENT_HEADER_LEN..).unwrap_or_default();
    Ok(Fragment::new(header, payload))
}

/// Write `header` followed by `payload`.
///
/// # Examples
///
/// ```
/// use holeframe::fragment::{FragmentHeader, decode_fragment, encode_fragment};
/// let header = FragmentHeader::new(0, 2).with_kind(0x0a);
/// let raw = encode_fragment(&header, &[1, 2]);
/// let fragment = decode_fragment(&raw).expect("header present");
/// assert_eq!(*fragment.header(), header);
/// assert_eq!(fragment.payload(), &[1, 2]);
/// ```
#[must_use]
pub fn encode_fragment(header: &FragmentHeader, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(FRAGMENT_HEADER_LEN + payload.len());
    buf.extend_from_slice(&header.to_bytes());
    buf.extend_from_slice(payload);
    buf
}
