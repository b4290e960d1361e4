//! The [SparseSet] type and its point operations.

use std::marker::PhantomData;

use crate::arena::Arena;
use crate::block::{Block, Link};
use crate::config::Config;
use crate::configs::Default as DefaultConfig;
use crate::int::{offset_and_bit, SparseIndex};

/// A sparse set of signed integers, backed by a circular list of fixed-span
/// bit blocks.
///
/// `Idx` is the integer domain (`i64` by default); `C` fixes the block's
/// word width and span (256 bits of `u64` words by default, see
/// [crate::configs]).
///
/// `SparseSet::default()` (equivalently [SparseSet::new]) is always a
/// valid empty set — there is no separate construction step.
pub struct SparseSet<Idx: SparseIndex = i64, C: Config = DefaultConfig> {
    pub(crate) next: Link,
    pub(crate) prev: Link,
    pub(crate) blocks: Arena<Block<Idx, C>>,
    pub(crate) _marker: PhantomData<(Idx, C)>,
}

impl<Idx: SparseIndex, C: Config> Default for SparseSet<Idx, C> {
    fn default() -> Self {
        Self {
            next: Link::Header,
            prev: Link::Header,
            blocks: Arena::new(),
            _marker: PhantomData,
        }
    }
}

impl<Idx: SparseIndex, C: Config> Clone for SparseSet<Idx, C> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            prev: self.prev,
            blocks: self.blocks.clone(),
            _marker: PhantomData,
        }
    }
}

impl<Idx: SparseIndex, C: Config> SparseSet<Idx, C> {
    /// An empty set. Equivalent to `Self::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn block_bits(&self) -> usize {
        C::block_bits()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.start() == Link::Header
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        let mut total = 0;
        let mut cur = self.start();
        while let Some(b) = self.block_ref(cur) {
            total += b.len();
            cur = self.next_link(cur);
        }
        total
    }

    /// Smallest member, or `Idx::MAX` if empty.
    pub fn min(&self) -> Idx {
        match self.block_ref(self.start()) {
            None => Idx::MAX,
            Some(b) => b.peek_min(),
        }
    }

    /// Largest member, or `Idx::MIN` if empty.
    pub fn max(&self) -> Idx {
        match self.block_ref(self.last()) {
            None => Idx::MIN,
            Some(b) => b.max(),
        }
    }

    fn last(&self) -> Link {
        self.prev
    }

    /// Inserts `x`. Returns whether the set grew.
    pub fn insert(&mut self, x: Idx) -> bool {
        let (offset, bit) = offset_and_bit(x, self.block_bits());
        let mut cur = self.start();
        loop {
            match self.block_offset(cur) {
                Some(o) if o == offset => {
                    return self.block_mut(cur).unwrap().insert(bit);
                }
                Some(o) if o > offset => {
                    let link = self.insert_block_before(cur, offset);
                    self.block_mut(link).unwrap().insert(bit);
                    return true;
                }
                Some(_) => cur = self.next_link(cur),
                None => {
                    let link = self.insert_block_before(Link::Header, offset);
                    self.block_mut(link).unwrap().insert(bit);
                    return true;
                }
            }
        }
    }

    /// Removes `x`. Returns whether the set shrank.
    pub fn remove(&mut self, x: Idx) -> bool {
        let (offset, bit) = offset_and_bit(x, self.block_bits());
        let Some(link) = self.block_at(offset) else {
            return false;
        };
        let removed = self.block_mut(link).unwrap().remove(bit);
        if removed && self.block_ref(link).unwrap().is_empty() {
            self.remove_block(link);
        }
        removed
    }

    /// Whether `x` is a member.
    pub fn has(&self, x: Idx) -> bool {
        let (offset, bit) = offset_and_bit(x, self.block_bits());
        match self.block_at(offset) {
            Some(link) => self.block_ref(link).unwrap().has(bit),
            None => false,
        }
    }

    /// Empties the set.
    pub fn clear(&mut self) {
        self.blocks = Arena::new();
        self.next = Link::Header;
        self.prev = Link::Header;
    }

    /// Removes and returns the smallest member, or `None` if empty.
    ///
    /// `while let Some(x) = set.take_min() { ... }` drains the set in
    /// ascending order.
    pub fn take_min(&mut self) -> Option<Idx> {
        let link = self.start();
        if link == Link::Header {
            return None;
        }
        let value = self.block_mut(link).unwrap().min(true);
        if self.block_ref(link).unwrap().is_empty() {
            self.remove_block(link);
        }
        Some(value)
    }

    /// Overwrites `self` with a structural deep copy of `src`, reusing
    /// existing blocks where possible. No-op if `src` is `self`.
    pub fn copy_from(&mut self, src: &Self) {
        if std::ptr::eq(self, src) {
            return;
        }
        let mut dst_cur = self.start();
        let mut src_cur = src.start();
        loop {
            match src.block_ref(src_cur) {
                None => {
                    self.discard_tail(dst_cur);
                    break;
                }
                Some(src_block) => {
                    let offset = src_block.offset;
                    let bits = src_block.bits.clone();
                    match self.block_ref(dst_cur) {
                        Some(_) => {
                            let dst_block = self.block_mut(dst_cur).unwrap();
                            dst_block.offset = offset;
                            dst_block.bits = bits;
                            dst_cur = self.next_link(dst_cur);
                        }
                        None => {
                            let link = self.insert_block_before(Link::Header, offset);
                            self.block_mut(link).unwrap().bits = bits;
                            dst_cur = Link::Header;
                        }
                    }
                    src_cur = src.next_link(src_cur);
                }
            }
        }
    }
}

impl<Idx: SparseIndex, C: Config> FromIterator<Idx> for SparseSet<Idx, C> {
    fn from_iter<I: IntoIterator<Item = Idx>>(iter: I) -> Self {
        let mut set = Self::new();
        for x in iter {
            set.insert(x);
        }
        set
    }
}

impl<Idx: SparseIndex, C: Config> Extend<Idx> for SparseSet<Idx, C> {
    fn extend<I: IntoIterator<Item = Idx>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}
