//! Strongly typed link identifier.
//!
//! `LinkId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! without ceremony.  The inner integer is `pub` to allow direct indexing
//! into per-link `Vec`s, but callers should prefer `.index()` for clarity.

use std::fmt;

/// Index of a link in the chain, lead-first (`LinkId(0)` is the lead link).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkId(pub u32);

impl LinkId {
    /// The lead link.
    pub const LEAD: LinkId = LinkId(0);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The next link towards the tail.
    #[inline(always)]
    pub fn next(self) -> LinkId {
        LinkId(self.0 + 1)
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkId({})", self.0)
    }
}

impl From<LinkId> for usize {
    #[inline(always)]
    fn from(id: LinkId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for LinkId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<LinkId, Self::Error> {
        u32::try_from(n).map(LinkId)
    }
}
