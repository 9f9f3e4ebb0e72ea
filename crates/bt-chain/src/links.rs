//! Per-link lengths.

use bt_core::LinkId;

use crate::{ChainError, ChainResult};

/// Fixed link lengths, indexed by `LinkId`, lead-first.
///
/// `len[i]` for `i > 0` is the separation between link `i-1` and link `i`.
/// `len[0]` is the lead link's own length; it is carried for exporters and
/// never used as an offset, because nothing precedes the lead.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkLengths {
    lengths: Vec<f64>,
}

impl LinkLengths {
    /// Validate and wrap explicit lengths.
    ///
    /// # Errors
    ///
    /// [`ChainError::Empty`] for an empty list; [`ChainError::InvalidLength`]
    /// for any non-finite or non-positive length.
    pub fn new(lengths: Vec<f64>) -> ChainResult<Self> {
        if lengths.is_empty() {
            return Err(ChainError::Empty);
        }
        for (i, &length) in lengths.iter().enumerate() {
            if !length.is_finite() || length <= 0.0 {
                return Err(ChainError::InvalidLength { link: LinkId(i as u32), length });
            }
        }
        Ok(Self { lengths })
    }

    /// A lead link of length `lead` followed by `num_links - 1` links of
    /// length `trailing`.
    pub fn lead_and_trailing(num_links: usize, lead: f64, trailing: f64) -> ChainResult<Self> {
        if num_links == 0 {
            return Err(ChainError::Empty);
        }
        let mut lengths = Vec::with_capacity(num_links);
        lengths.push(lead);
        lengths.resize(num_links, trailing);
        Self::new(lengths)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Always `false`: construction rejects empty chains.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    #[inline]
    pub fn get(&self, link: LinkId) -> f64 {
        self.lengths[link.index()]
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.lengths
    }

    /// Sum of the separations between consecutive links.
    pub fn span(&self) -> f64 {
        self.lengths[1..].iter().sum()
    }
}
