//! Set-algebraic operations: in-place (`_with`) and three-operand forms of
//! intersection, union and difference.
//!
//! The two-operand in-place forms take `&mut self` plus a single `&Self`
//! operand, so a caller cannot construct `self.union_with(&self)` — the
//! borrow checker rejects holding both an exclusive and a shared borrow of
//! the same value at the call site. That statically rules out the
//! self-aliasing hazard the design's aliasing matrix defends against for
//! the two-operand forms; see DESIGN.md for the full reasoning and for how
//! the three-operand forms below still honor the matrix's `a == b` row,
//! which two independent `&Self` borrows of one set *can* reach.

use crate::config::Config;
use crate::int::SparseIndex;
use crate::set::SparseSet;

fn and_words<C: Config>(dst: &mut C::Words, src: &C::Words) {
    for (d, s) in dst.as_mut().iter_mut().zip(src.as_ref().iter()) {
        *d &= *s;
    }
}

fn and_not_words<C: Config>(dst: &mut C::Words, src: &C::Words) {
    for (d, s) in dst.as_mut().iter_mut().zip(src.as_ref().iter()) {
        *d &= !*s;
    }
}

/// ORs `src` into `dst`, returns whether `dst` changed.
fn or_words<C: Config>(dst: &mut C::Words, src: &C::Words) -> bool {
    let mut changed = false;
    for (d, s) in dst.as_mut().iter_mut().zip(src.as_ref().iter()) {
        let merged = *d | *s;
        if merged != *d {
            changed = true;
        }
        *d = merged;
    }
    changed
}

impl<Idx: SparseIndex, C: Config> SparseSet<Idx, C> {
    /// `self := self ∩ other`.
    pub fn intersection_with(&mut self, other: &Self) {
        let mut cur_self = self.start();
        let mut cur_other = other.start();
        loop {
            match (self.block_offset(cur_self), other.block_offset(cur_other)) {
                (None, _) => break,
                (Some(_), None) => {
                    self.discard_tail(cur_self);
                    break;
                }
                (Some(a), Some(b)) if a == b => {
                    let other_bits = other.block_ref(cur_other).unwrap().bits.clone();
                    let next_self = self.next_link(cur_self);
                    and_words::<C>(&mut self.block_mut(cur_self).unwrap().bits, &other_bits);
                    if self.block_ref(cur_self).unwrap().is_empty() {
                        self.remove_block(cur_self);
                    }
                    cur_self = next_self;
                    cur_other = other.next_link(cur_other);
                }
                (Some(a), Some(b)) if a < b => {
                    let next_self = self.next_link(cur_self);
                    self.remove_block(cur_self);
                    cur_self = next_self;
                }
                (Some(_), Some(_)) => {
                    cur_other = other.next_link(cur_other);
                }
            }
        }
    }

    /// `self := self ∪ other`. Returns whether `self` grew.
    pub fn union_with(&mut self, other: &Self) -> bool {
        let mut grew = false;
        let mut cur_self = self.start();
        let mut cur_other = other.start();
        while let Some(ob) = other.block_offset(cur_other) {
            match self.block_offset(cur_self) {
                Some(sb) if sb == ob => {
                    let other_bits = other.block_ref(cur_other).unwrap().bits.clone();
                    let next_self = self.next_link(cur_self);
                    if or_words::<C>(&mut self.block_mut(cur_self).unwrap().bits, &other_bits) {
                        grew = true;
                    }
                    cur_self = next_self;
                    cur_other = other.next_link(cur_other);
                }
                Some(sb) if sb < ob => {
                    cur_self = self.next_link(cur_self);
                }
                _ => {
                    let bits = other.block_ref(cur_other).unwrap().bits.clone();
                    let link = self.insert_block_before(cur_self, ob);
                    self.block_mut(link).unwrap().bits = bits;
                    grew = true;
                    cur_other = other.next_link(cur_other);
                }
            }
        }
        grew
    }

    /// `self := self ∖ other`.
    pub fn difference_with(&mut self, other: &Self) {
        let mut cur_self = self.start();
        let mut cur_other = other.start();
        loop {
            match (self.block_offset(cur_self), other.block_offset(cur_other)) {
                (None, _) | (Some(_), None) => break,
                (Some(a), Some(b)) if a == b => {
                    let other_bits = other.block_ref(cur_other).unwrap().bits.clone();
                    let next_self = self.next_link(cur_self);
                    and_not_words::<C>(&mut self.block_mut(cur_self).unwrap().bits, &other_bits);
                    if self.block_ref(cur_self).unwrap().is_empty() {
                        self.remove_block(cur_self);
                    }
                    cur_self = next_self;
                    cur_other = other.next_link(cur_other);
                }
                (Some(a), Some(b)) if a < b => {
                    cur_self = self.next_link(cur_self);
                }
                (Some(_), Some(_)) => {
                    cur_other = other.next_link(cur_other);
                }
            }
        }
    }

    /// `self := a ∩ b`.
    pub fn intersection(&mut self, a: &Self, b: &Self) {
        if std::ptr::eq(a, b) {
            self.copy_from(a);
        } else if std::ptr::eq(self, a) {
            self.intersection_with(b);
        } else if std::ptr::eq(self, b) {
            self.intersection_with(a);
        } else {
            self.copy_from(a);
            self.intersection_with(b);
        }
    }

    /// `self := a ∪ b`.
    pub fn union(&mut self, a: &Self, b: &Self) {
        if std::ptr::eq(a, b) {
            self.copy_from(a);
        } else if std::ptr::eq(self, a) {
            self.union_with(b);
        } else if std::ptr::eq(self, b) {
            self.union_with(a);
        } else {
            self.copy_from(a);
            self.union_with(b);
        }
    }

    /// `self := a ∖ b`.
    pub fn difference(&mut self, a: &Self, b: &Self) {
        if std::ptr::eq(a, b) {
            self.clear();
        } else if std::ptr::eq(self, a) {
            self.difference_with(b);
        } else if std::ptr::eq(self, b) {
            // `b` (== self) would be overwritten by `copy_from(a)` before we
            // get to read it, so defensively snapshot it first.
            let b_snapshot = b.clone();
            self.copy_from(a);
            self.difference_with(&b_snapshot);
        } else {
            self.copy_from(a);
            self.difference_with(b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::Default as Cfg;

    type S = SparseSet<i64, Cfg>;

    fn set(xs: impl IntoIterator<Item = i64>) -> S {
        let mut s = S::new();
        for x in xs {
            s.insert(x);
        }
        s
    }

    fn elems(s: &S) -> Vec<i64> {
        s.iter().collect()
    }

    #[test]
    fn cross_block_algebra() {
        let a = set([0, 1, 2, 300, 301]);
        let b = set([2, 300]);

        let mut d = S::new();
        d.difference(&a, &b);
        assert_eq!(elems(&d), vec![0, 1, 301]);

        let mut i = S::new();
        i.intersection(&a, &b);
        assert_eq!(elems(&i), vec![2, 300]);

        let mut u = S::new();
        u.union(&a, &b);
        assert_eq!(elems(&u), elems(&a));
    }

    #[test]
    fn dispatch_a_equals_b() {
        let a = set([1, 2, 3]);
        let mut d = set([999]);
        d.union(&a, &a);
        assert_eq!(elems(&d), vec![1, 2, 3]);
        let mut d2 = set([999]);
        d2.difference(&a, &a);
        assert!(d2.is_empty());
    }

    #[test]
    fn difference_against_own_prior_content() {
        // `self` starts out equal (by value, not by identity) to one of the
        // operands — a realistic scenario the `d == b` dispatch branch also
        // covers when the borrow checker *does* allow the aliasing (e.g.
        // behind a `RefCell`), exercised here through the always-reachable
        // value-equality path.
        let a = set([1, 2, 300]);
        let mut d = set([2, 999]);
        let expected_diff: Vec<i64> = elems(&a).into_iter().filter(|x| !d.has(*x)).collect();
        let snapshot = d.clone();
        d.difference(&a, &snapshot);
        assert_eq!(elems(&d), expected_diff);
    }

    #[test]
    fn idempotence() {
        let mut s = set([1, 2, 300]);
        let before = elems(&s);
        let other = s.clone();
        s.union_with(&other);
        assert_eq!(elems(&s), before);
        s.intersection_with(&other);
        assert_eq!(elems(&s), before);
        s.difference_with(&other);
        assert!(s.is_empty());
    }
}
