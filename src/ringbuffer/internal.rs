use alloc::vec::Vec;

use super::{CircularRingBuffer, DEFAULT_SLOTS};
use crate::logic::{copy, CircularBuffer};
use crate::utils::*;

impl<T> CircularRingBuffer<T> {
    #[inline]
    pub(super) fn empty_slots(len: usize) -> Vec<Option<T>> {
        debug_assert!(len.is_power_of_two());
        (0..len).map(|_| None).collect()
    }

    #[inline]
    pub(super) fn mask(&self) -> usize {
        self.slots.len() - 1
    }

    #[inline]
    pub(super) fn increase(&self, index: usize) -> usize {
        wrap_add(index, 1, self.mask())
    }

    #[inline]
    pub(super) fn decrease(&self, index: usize) -> usize {
        wrap_sub(index, 1, self.mask())
    }

    /// Maps a logical index onto its slot.
    #[inline]
    pub(super) fn physical(&self, index: usize) -> usize {
        wrap_add(self.head, index, self.mask())
    }

    #[inline]
    fn is_contiguous(&self) -> bool {
        self.head <= self.tail
    }

    #[inline]
    pub(super) fn live(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            self.slots[self.physical(index)].as_ref()
        } else {
            None
        }
    }

    #[inline]
    pub(super) fn live_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            let at = self.physical(index);
            self.slots[at].as_mut()
        } else {
            None
        }
    }

    /// The live window as at most two runs of slots, front run first.
    pub(super) fn slot_slices(&self) -> (&[Option<T>], &[Option<T>]) {
        let (head, tail) = (self.head, self.tail);
        if self.is_contiguous() {
            (&self.slots[head..tail], &[])
        } else {
            let (left, right) = self.slots.split_at(head);
            (right, &left[..tail])
        }
    }

    pub(super) fn slot_slices_mut(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
        let (head, tail) = (self.head, self.tail);
        if self.is_contiguous() {
            (&mut self.slots[head..tail], &mut [])
        } else {
            let (left, right) = self.slots.split_at_mut(head);
            (right, &mut left[..tail])
        }
    }

    /// Doubles the storage once a write has used up the last free slot.
    ///
    /// `head == tail` right after a write means the buffer is full; the
    /// window is unrolled into the new storage starting at slot 0.
    pub(super) fn check_capacity(&mut self) {
        if self.head != self.tail {
            return;
        }
        let old_len = self.slots.len();
        let new_len = old_len.checked_mul(2).expect("capacity overflow");
        let mut slots = Self::empty_slots(new_len);
        copy::relocate(&mut self.slots, self.head, &mut slots);
        self.slots = slots;
        self.head = 0;
        self.tail = old_len;
        trace!("ring buffer grew from {} to {} slots", old_len, new_len);
    }

    /// Drops the storage and starts over with the default slot count.
    pub(super) fn release(&mut self) {
        let old_len = self.slots.len();
        self.slots = Self::empty_slots(DEFAULT_SLOTS);
        trace!("ring buffer released {} slots", old_len);
    }
}

impl<T> CircularBuffer for CircularRingBuffer<T> {
    type Item = T;

    #[inline]
    fn head(&self) -> usize {
        self.head
    }

    #[inline]
    fn mask(&self) -> usize {
        self.slots.len() - 1
    }

    #[inline]
    fn slots_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots
    }
}
