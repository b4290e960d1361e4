//! List-walk primitives shared by the point operations ([crate::set]) and
//! the binary set operations ([crate::ops]).
//!
//! The header described in the design (offset zero, bits unused, embedded
//! by value in the set) is represented here by the `next`/`prev` fields
//! living directly on [SparseSet] rather than by a separate zeroed `Block`
//! — there is nothing else to check on it, so there is nothing else to
//! store. A [Link::Header] value stands in for "the address of the
//! header" from the pointer-based design: walking off the last data block
//! lands back on `Link::Header`, exactly like wrapping around a circular
//! list back to its sentinel.

use crate::block::{Block, Link};
use crate::config::Config;
use crate::int::SparseIndex;
use crate::set::SparseSet;

impl<Idx: SparseIndex, C: Config> SparseSet<Idx, C> {
    /// The first data block's link, or `Link::Header` if empty.
    #[inline]
    pub(crate) fn start(&self) -> Link {
        self.next
    }

    fn block(&self, link: Link) -> Option<&Block<Idx, C>> {
        match link {
            Link::Header => None,
            Link::Block(id) => Some(self.blocks.get(id)),
        }
    }

    fn next_of(&self, link: Link) -> Link {
        match link {
            Link::Header => self.next,
            Link::Block(id) => self.blocks.get(id).next,
        }
    }

    pub(crate) fn next_link(&self, link: Link) -> Link {
        self.next_of(link)
    }

    pub(crate) fn block_offset(&self, link: Link) -> Option<Idx> {
        self.block(link).map(|b| b.offset)
    }

    pub(crate) fn block_ref(&self, link: Link) -> Option<&Block<Idx, C>> {
        self.block(link)
    }

    pub(crate) fn block_mut(&mut self, link: Link) -> Option<&mut Block<Idx, C>> {
        match link {
            Link::Header => None,
            Link::Block(id) => Some(self.blocks.get_mut(id)),
        }
    }

    /// Walks forward from the first data block while `block.offset <= offset`;
    /// returns the block's link if its offset matches exactly.
    pub(crate) fn block_at(&self, offset: Idx) -> Option<Link> {
        let mut cur = self.start();
        loop {
            match self.block(cur) {
                None => return None,
                Some(b) if b.offset == offset => return Some(cur),
                Some(b) if b.offset > offset => return None,
                Some(_) => cur = self.next_of(cur),
            }
        }
    }

    /// Allocates a new block with the given offset, linked immediately
    /// before `next`. Returns its link.
    pub(crate) fn insert_block_before(&mut self, next: Link, offset: Idx) -> Link {
        let prev = match next {
            Link::Header => self.prev,
            Link::Block(id) => self.blocks.get(id).prev,
        };
        let mut block = Block::new(offset);
        block.prev = prev;
        block.next = next;
        let id = self.blocks.insert(block);
        let new_link = Link::Block(id);

        match prev {
            Link::Header => self.next = new_link,
            Link::Block(pid) => self.blocks.get_mut(pid).next = new_link,
        }
        match next {
            Link::Header => self.prev = new_link,
            Link::Block(nid) => self.blocks.get_mut(nid).prev = new_link,
        }
        new_link
    }

    /// Unlinks `link` (which must name a data block, not the header) from
    /// the list and releases its storage.
    pub(crate) fn remove_block(&mut self, link: Link) {
        let id = match link {
            Link::Header => panic!("cannot remove the header"),
            Link::Block(id) => id,
        };
        let (prev, next) = {
            let b = self.blocks.get(id);
            (b.prev, b.next)
        };
        match prev {
            Link::Header => self.next = next,
            Link::Block(pid) => self.blocks.get_mut(pid).next = next,
        }
        match next {
            Link::Header => self.prev = prev,
            Link::Block(nid) => self.blocks.get_mut(nid).prev = prev,
        }
        self.blocks.remove(id);
    }

    /// Terminates the list at `link`'s predecessor, dropping `link` and
    /// everything after it. No-op if `link` is already the header.
    pub(crate) fn discard_tail(&mut self, link: Link) {
        if link == Link::Header {
            return;
        }
        let prev = match self.block(link) {
            Some(b) => b.prev,
            None => unreachable!("link was checked non-header above"),
        };

        let mut cur = link;
        loop {
            let next = self.next_of(cur);
            let id = match cur {
                Link::Block(id) => id,
                Link::Header => unreachable!(),
            };
            self.blocks.remove(id);
            if next == Link::Header {
                break;
            }
            cur = next;
        }

        match prev {
            Link::Header => self.next = Link::Header,
            Link::Block(pid) => self.blocks.get_mut(pid).next = Link::Header,
        }
        self.prev = prev;
    }
}
