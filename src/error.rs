//! The structural self-check and its error type.

use thiserror::Error;

use crate::config::Config;
use crate::int::SparseIndex;
use crate::set::SparseSet;

/// A violated structural invariant, as found by [SparseSet::check].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckError {
    #[error("block at position {index} has offset {offset} which isn't aligned to the block span")]
    Misaligned { index: usize, offset: String },

    #[error("block at position {index} (offset {offset}) is empty — every non-header block must hold at least one element")]
    EmptyBlock { index: usize, offset: String },

    #[error(
        "offsets are not strictly increasing: block {index} has offset {offset}, \
         which is not greater than the previous block's offset {prev_offset}"
    )]
    OutOfOrder {
        index: usize,
        offset: String,
        prev_offset: String,
    },

    #[error("block at position {index} (offset {offset}) has next.prev pointing elsewhere, breaking the circular list")]
    BrokenLink { index: usize, offset: String },
}

impl<Idx: SparseIndex, C: Config> SparseSet<Idx, C> {
    /// Validates every invariant on the set: block offset alignment,
    /// non-emptiness, strictly increasing order, and link consistency.
    /// Returns the first violation found, or `Ok(())`.
    ///
    /// Intended for tests — ordinary operations on a well-formed set never
    /// produce a set that fails this check.
    pub fn check(&self) -> Result<(), CheckError> {
        let block_bits = C::block_bits() as i128;
        let mut cur = self.start();
        let mut prev_offset: Option<Idx> = None;
        let mut index = 0usize;
        while let Some(b) = self.block_ref(cur) {
            if b.offset.to_i128().rem_euclid(block_bits) != 0 {
                return Err(CheckError::Misaligned {
                    index,
                    offset: b.offset.to_string(),
                });
            }
            if b.is_empty() {
                return Err(CheckError::EmptyBlock {
                    index,
                    offset: b.offset.to_string(),
                });
            }
            if let Some(p) = prev_offset {
                if b.offset <= p {
                    return Err(CheckError::OutOfOrder {
                        index,
                        offset: b.offset.to_string(),
                        prev_offset: p.to_string(),
                    });
                }
            }

            let next = self.next_link(cur);
            if let Some(next_block) = self.block_ref(next) {
                if next_block.prev != cur {
                    return Err(CheckError::BrokenLink {
                        index,
                        offset: b.offset.to_string(),
                    });
                }
            } else if self.prev != cur {
                return Err(CheckError::BrokenLink {
                    index,
                    offset: b.offset.to_string(),
                });
            }

            prev_offset = Some(b.offset);
            cur = next;
            index += 1;
        }
        Ok(())
    }
}
