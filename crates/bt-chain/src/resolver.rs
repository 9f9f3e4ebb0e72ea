//! Lead position → full chain configuration.

use bt_core::{LinkId, Point2};

use crate::{ChainConfiguration, ChainError, ChainResult, LinkLengths};

/// Places every trailing link from the lead link's position.
///
/// Stateless apart from the immutable link lengths: `resolve` with the same
/// inputs always returns a bit-identical configuration.  The previous time
/// step's layout is never consulted.
#[derive(Clone, Debug)]
pub struct ChainResolver {
    lengths: LinkLengths,
}

impl ChainResolver {
    pub fn new(lengths: LinkLengths) -> Self {
        Self { lengths }
    }

    #[inline]
    pub fn lengths(&self) -> &LinkLengths {
        &self.lengths
    }

    #[inline]
    pub fn link_count(&self) -> usize {
        self.lengths.len()
    }

    /// Resolve the configuration at `time` with the lead link at `lead`.
    ///
    /// # Errors
    ///
    /// [`ChainError::UndefinedDirection`] if any link other than the last
    /// lands exactly on the origin.
    pub fn resolve(&self, time: f64, lead: Point2) -> ChainResult<ChainConfiguration> {
        let mut positions = Vec::with_capacity(self.lengths.len());
        self.resolve_into(time, lead, &mut positions)?;
        Ok(ChainConfiguration { time, positions })
    }

    /// Like [`resolve`][Self::resolve] but appends into a caller-owned buffer,
    /// so a run can lay every step out in one flat allocation.
    ///
    /// On error the buffer holds the links resolved so far.
    pub fn resolve_into(&self, time: f64, lead: Point2, out: &mut Vec<Point2>) -> ChainResult<()> {
        let lengths = self.lengths.as_slice();
        out.reserve(lengths.len());
        out.push(lead);

        let mut prev = lead;
        for (i, &length) in lengths.iter().enumerate().skip(1) {
            if prev.is_origin() {
                return Err(ChainError::UndefinedDirection {
                    time,
                    link: LinkId(i as u32 - 1),
                });
            }
            let next = prev.offset(length, prev.inward_angle());
            out.push(next);
            prev = next;
        }
        Ok(())
    }
}
