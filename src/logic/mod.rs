use crate::utils::wrap_add;

pub mod copy;
pub mod insert;
pub mod remove;

/// Slot-level view of a ring buffer, used by the shifting routines.
///
/// Indices passed to `shift` are logical (relative to `head`). Implementors
/// keep `head` fixed while a shift is in progress.
pub trait CircularBuffer {
    type Item;

    fn head(&self) -> usize;
    fn mask(&self) -> usize;
    fn slots_mut(&mut self) -> &mut [Option<Self::Item>];

    #[inline]
    fn physical(&self, index: usize) -> usize {
        wrap_add(self.head(), index, self.mask())
    }

    /// Moves the value at logical `src` into logical `dst`, leaving `src` empty.
    #[inline]
    fn shift(&mut self, dst: usize, src: usize) {
        let (dst, src) = (self.physical(dst), self.physical(src));
        let slots = self.slots_mut();
        slots[dst] = slots[src].take();
    }
}
