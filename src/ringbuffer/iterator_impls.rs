use core::fmt;
use core::iter::FusedIterator;
use core::mem;

use super::*;
use crate::logic::{insert, remove};

// Slots inside the live window always hold a value, so the `Option` layer
// is peeled off without loss.

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        match self.i1.next() {
            Some(slot) => slot.as_ref(),
            None => {
                mem::swap(&mut self.i1, &mut self.i2);
                self.i1.next().and_then(Option::as_ref)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.i1.len() + self.i2.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        match self.i2.next_back() {
            Some(slot) => slot.as_ref(),
            None => {
                mem::swap(&mut self.i1, &mut self.i2);
                self.i2.next_back().and_then(Option::as_ref)
            }
        }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            i1: self.i1.clone(),
            i2: self.i2.clone(),
        }
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.i1.as_slice()).field(&self.i2.as_slice()).finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        match self.i1.next() {
            Some(slot) => slot.as_mut(),
            None => {
                mem::swap(&mut self.i1, &mut self.i2);
                self.i1.next().and_then(Option::as_mut)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.i1.len() + self.i2.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        match self.i2.next_back() {
            Some(slot) => slot.as_mut(),
            None => {
                mem::swap(&mut self.i1, &mut self.i2);
                self.i2.next_back().and_then(Option::as_mut)
            }
        }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.remove_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.remove_last()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.next == self.next_back {
            return None;
        }
        let at = self.deque.physical(self.next);
        self.next += 1;
        self.deque.slots[at].take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.next_back - self.next;
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Drain<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.next == self.next_back {
            return None;
        }
        self.next_back -= 1;
        let at = self.deque.physical(self.next_back);
        self.deque.slots[at].take()
    }
}

impl<'a, T> ExactSizeIterator for Drain<'a, T> {}

impl<'a, T> FusedIterator for Drain<'a, T> {}

impl<'a, T> Drop for Drain<'a, T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}

        // H = head; s = drain start; a = after the drained range; T = original tail
        //
        //        H   s   a   T
        // [. . . o o x x o o . . .]
        //
        let (start, after, orig_len) = (self.start, self.after, self.orig_len);
        let source = &mut *self.deque;
        let removed = after - start;
        let front_len = start;
        let back_len = orig_len - after;

        // Restore the original tail value
        source.tail = source.physical(orig_len);
        if removed == 0 {
            return;
        }
        if front_len == 0 && back_len == 0 {
            source.head = 0;
            source.tail = 0;
        } else if back_len <= front_len {
            remove::shift_toward_head(source, after, orig_len, removed);
            source.tail = source.physical(orig_len - removed);
        } else {
            insert::shift_toward_tail(source, 0, front_len, removed);
            source.head = source.physical(removed);
        }
    }
}
