//! Ordered bookkeeping of the byte ranges a message is still missing.
//!
//! This is the hole descriptor list of RFC 815. A fresh list holds a single
//! hole spanning the whole message; every received range is punched out of
//! it, splitting a hole in two when the range lands in its middle.

use std::ops::RangeInclusive;

/// Inclusive range of buffer positions not yet covered by any fragment.
///
/// # Examples
///
/// ```
/// use holeframe::fragment::Hole;
/// let hole = Hole::new(0, 1).expect("first <= last");
/// assert_eq!(hole.len(), 2);
/// assert!(Hole::new(5, 3).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hole {
    first: usize,
    last: usize,
}

impl Hole {
    /// Create a hole spanning `first..=last`, or `None` when `first > last`.
    #[must_use]
    pub const fn new(first: usize, last: usize) -> Option<Self> {
        if first > last {
            return None;
        }
        Some(Self { first, last })
    }

    /// Callers keep `first <= last`.
    const fn between(first: usize, last: usize) -> Self { Self { first, last } }

    /// First missing position.
    #[must_use]
    pub const fn first(&self) -> usize { self.first }

    /// Last missing position, inclusive.
    #[must_use]
    pub const fn last(&self) -> usize { self.last }

    /// Number of missing bytes covered by the hole.
    #[expect(
        clippy::len_without_is_empty,
        reason = "holes always cover at least one byte"
    )]
    #[must_use]
    pub const fn len(&self) -> usize { self.last - self.first + 1 }

    /// Whether `first..=last` shares at least one position with the hole.
    #[must_use]
    pub const fn overlaps(&self, first: usize, last: usize) -> bool {
        !(first > self.last || last < self.first)
    }
}

impl From<Hole> for RangeInclusive<usize> {
    fn from(hole: Hole) -> Self { hole.first..=hole.last }
}

/// Holes sorted by `first`, pairwise disjoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct HoleList {
    holes: Vec<Hole>,
}

impl HoleList {
    /// A list missing every byte of a `total_size`-byte message.
    pub(crate) fn spanning(total_size: usize) -> Self {
        let holes = match total_size.checked_sub(1) {
            Some(last) => vec![Hole::between(0, last)],
            None => Vec::new(),
        };
        Self { holes }
    }

    pub(crate) fn is_empty(&self) -> bool { self.holes.is_empty() }

    pub(crate) fn len(&self) -> usize { self.holes.len() }

    pub(crate) fn iter(&self) -> impl Iterator<Item = Hole> + '_ { self.holes.iter().copied() }

    pub(crate) fn missing_bytes(&self) -> usize { self.holes.iter().map(Hole::len).sum() }

    /// Mark `first..=last` as received.
    ///
    /// Each overlapping hole is replaced by whatever part of it lies before
    /// and after the range. Returns `false` when no hole overlapped, meaning
    /// the range carried nothing new.
    pub(crate) fn punch(&mut self, first: usize, last: usize) -> bool {
        let mut filled_any = false;
        let mut index = 0;

        while let Some(&hole) = self.holes.get(index) {
            if hole.first > last {
                break;
            }
            if !hole.overlaps(first, last) {
                index += 1;
                continue;
            }

            filled_any = true;
            let before = (first > hole.first).then(|| Hole::between(hole.first, first - 1));
            let after = (last < hole.last).then(|| Hole::between(last + 1, hole.last));
            let kept = usize::from(before.is_some()) + usize::from(after.is_some());
            self.holes.splice(index..=index, before.into_iter().chain(after));
            index += kept;
        }

        filled_any
    }
}
