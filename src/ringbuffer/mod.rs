use alloc::vec::Vec;
use core::mem;
use core::slice;

use crate::error::{IndexOutOfRange, InvalidConstructionArgument};
use crate::logic::{insert, remove};
use crate::utils::*;
use crate::RangeArgument;

mod internal;
mod iterator_impls;
mod trait_impls;

/// Slot count of a freshly created buffer.
pub(crate) const DEFAULT_SLOTS: usize = 8;

/// A growable double-ended ring buffer.
///
/// `append`/`prepend` and `remove_first`/`remove_last` are amortized `O(1)`,
/// indexing is `O(1)`, and inserting or removing in the middle shifts the
/// elements after the given index.
///
/// The "default" usage of this type as a queue is to use `append` to add to
/// the queue, and `remove_first` to remove from the queue. `extend` pushes
/// onto the back in this manner, and iterating over `CircularRingBuffer` goes
/// front to back.
///
/// # Capacity
///
/// The backing storage always has a power-of-two number of slots, at least 8.
/// One slot is kept free, so `capacity()` is always `slots - 1`. Writing into
/// the last free slot doubles the storage.
pub struct CircularRingBuffer<T> {
    slots: Vec<Option<T>>,
    head: usize,
    tail: usize,
}

/// `CircularRingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    i1: slice::Iter<'a, Option<T>>,
    i2: slice::Iter<'a, Option<T>>,
}

/// `CircularRingBuffer` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    i1: slice::IterMut<'a, Option<T>>,
    i2: slice::IterMut<'a, Option<T>>,
}

/// A by-value `CircularRingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    inner: CircularRingBuffer<T>,
}

/// A draining `CircularRingBuffer` iterator
///
/// The drained range is removed even if the iterator is not consumed until
/// the end.
pub struct Drain<'a, T: 'a> {
    deque: &'a mut CircularRingBuffer<T>,
    // logical positions, relative to the unchanged head
    start: usize,
    after: usize,
    orig_len: usize,
    next: usize,
    next_back: usize,
}

impl<T> CircularRingBuffer<T> {
    /// Creates an empty `CircularRingBuffer` with the default 8 slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let buffer: CircularRingBuffer<usize> = CircularRingBuffer::new();
    /// assert_eq!(buffer.capacity(), 7);
    /// ```
    #[inline]
    pub fn new() -> Self {
        CircularRingBuffer {
            slots: Self::empty_slots(DEFAULT_SLOTS),
            head: 0,
            tail: 0,
        }
    }

    /// Creates an empty `CircularRingBuffer` that holds at least `capacity`
    /// elements before growing.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let buffer: CircularRingBuffer<u8> = CircularRingBuffer::with_capacity(10);
    /// assert_eq!(buffer.capacity(), 15);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        CircularRingBuffer {
            slots: Self::empty_slots(slots_for(capacity, DEFAULT_SLOTS)),
            head: 0,
            tail: 0,
        }
    }

    /// Creates a buffer holding `count` clones of `element`.
    ///
    /// Fails with `InvalidConstructionArgument` if `count` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let buffer = CircularRingBuffer::from_elem(3, "x").unwrap();
    /// assert_eq!(format!("{:?}", buffer), r#"["x", "x", "x"]"#);
    ///
    /// assert!(CircularRingBuffer::from_elem(-1, "x").is_err());
    /// ```
    pub fn from_elem(count: isize, element: T) -> Result<Self, InvalidConstructionArgument>
        where T: Clone
    {
        if count < 0 {
            return Err(InvalidConstructionArgument { count });
        }
        Ok(Self::repeat(element, count as usize))
    }

    /// Creates a buffer holding `count` clones of `element`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let buffer = CircularRingBuffer::repeat(0u8, 20);
    /// assert_eq!(buffer.len(), 20);
    /// ```
    pub fn repeat(element: T, count: usize) -> Self
        where T: Clone
    {
        let mut buffer = Self::new();
        buffer.extend(core::iter::repeat(element).take(count));
        buffer
    }

    /// Retrieves an element in the `CircularRingBuffer` by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer = CircularRingBuffer::new();
    /// buffer.append(3);
    /// buffer.append(4);
    /// buffer.append(5);
    /// assert_eq!(buffer.get(1), Ok(&4));
    /// assert!(buffer.get(3).is_err());
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        let len = self.len();
        self.live(index).ok_or_else(|| IndexOutOfRange::new(index, len))
    }

    /// Retrieves an element in the `CircularRingBuffer` mutably by index.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer = CircularRingBuffer::new();
    /// buffer.append(3);
    /// buffer.append(4);
    /// if let Ok(elem) = buffer.get_mut(1) {
    ///     *elem = 7;
    /// }
    ///
    /// assert_eq!(buffer[1], 7);
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        let len = self.len();
        self.live_mut(index).ok_or_else(|| IndexOutOfRange::new(index, len))
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// On failure the buffer is unchanged and `element` is handed back in
    /// the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer: CircularRingBuffer<_> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!(buffer.set(1, 9), Ok(2));
    /// assert_eq!(buffer.set(3, 4).unwrap_err().element, 4);
    /// assert_eq!(format!("{:?}", buffer), "[1, 9, 3]");
    /// ```
    pub fn set(&mut self, index: usize, element: T) -> Result<T, IndexOutOfRange<T>> {
        let len = self.len();
        match self.live_mut(index) {
            Some(slot) => Ok(mem::replace(slot, element)),
            None => Err(IndexOutOfRange::with_element(index, len, element)),
        }
    }

    /// Swaps elements at indices `i` and `j`.
    ///
    /// `i` and `j` may be equal. Fails without touching the buffer if there
    /// is no element with either index.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer: CircularRingBuffer<_> = vec![3, 4, 5].into_iter().collect();
    /// buffer.swap(0, 2).unwrap();
    /// assert_eq!(buffer[0], 5);
    /// assert_eq!(buffer[2], 3);
    /// ```
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), IndexOutOfRange> {
        let len = self.len();
        for &index in &[i, j] {
            if index >= len {
                return Err(IndexOutOfRange::new(index, len));
            }
        }
        let (ri, rj) = (self.physical(i), self.physical(j));
        self.slots.swap(ri, rj);
        Ok(())
    }

    /// Returns the number of elements the buffer holds before its storage
    /// has to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer = CircularRingBuffer::new();
    /// assert_eq!(buffer.capacity(), 7);
    /// buffer.extend(0..7);
    /// assert_eq!(buffer.capacity(), 7);
    /// buffer.append(7);
    /// assert_eq!(buffer.capacity(), 15);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer = CircularRingBuffer::new();
    /// buffer.append(5);
    /// buffer.append(3);
    /// buffer.prepend(4);
    /// let c: Vec<&i32> = buffer.iter().collect();
    /// assert_eq!(c, [&4, &5, &3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        let (i1, i2) = self.slot_slices();
        Iter {
            i1: i1.iter(),
            i2: i2.iter(),
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer: CircularRingBuffer<_> = vec![5, 3, 4].into_iter().collect();
    /// for num in buffer.iter_mut() {
    ///     *num -= 2;
    /// }
    /// assert_eq!(format!("{:?}", buffer), "[3, 1, 2]");
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        let (i1, i2) = self.slot_slices_mut();
        IterMut {
            i1: i1.iter_mut(),
            i2: i2.iter_mut(),
        }
    }

    /// Returns the number of elements in the `CircularRingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut v = CircularRingBuffer::new();
    /// assert_eq!(v.len(), 0);
    /// v.append(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        count(self.head, self.tail, self.mask())
    }

    /// Returns true if the buffer contains no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Create a draining iterator that removes the specified range in the
    /// `CircularRingBuffer` and yields the removed items.
    ///
    /// When the `Drain` is dropped, whichever side of the range is shorter is
    /// moved to close the gap.
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if
    /// the end point is greater than the length of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer: CircularRingBuffer<_> = vec![1, 2, 3].into_iter().collect();
    /// let drain1: Vec<_> = buffer.drain(2..).collect();
    /// assert_eq!(drain1, vec![3]);
    ///
    /// // A full range clears all contents
    /// let drain2: Vec<_> = buffer.drain(..).collect();
    /// assert_eq!(drain2, vec![1, 2]);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<T>
        where R: RangeArgument<usize>
    {
        let len = self.len();
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(len);
        assert!(start <= end, "drain lower bound was too large");
        assert!(end <= len, "drain upper bound was too large");

        // Until the drain is dropped the buffer only exposes the prefix, so
        // a leaked `Drain` leaves a consistent (shorter) buffer behind.
        self.tail = self.physical(start);

        Drain {
            deque: self,
            start,
            after: end,
            orig_len: len,
            next: start,
            next_back: end,
        }
    }

    /// Resets the buffer to the empty state, dropping every element.
    ///
    /// With `keep_capacity` the storage is kept and only the live slots are
    /// cleared; otherwise the storage is released and the buffer returns to
    /// its default slot count.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut v: CircularRingBuffer<_> = (0..20).collect();
    /// v.clear(true);
    /// assert!(v.is_empty());
    /// assert_eq!(v.capacity(), 31);
    ///
    /// v.clear(false);
    /// assert_eq!(v.capacity(), 7);
    /// ```
    pub fn clear(&mut self, keep_capacity: bool) {
        if keep_capacity {
            let (a, b) = self.slot_slices_mut();
            for slot in a.iter_mut().chain(b.iter_mut()) {
                *slot = None;
            }
        } else {
            self.release();
        }
        self.head = 0;
        self.tail = 0;
    }

    /// Returns `true` if the `CircularRingBuffer` contains an element equal
    /// to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let v: CircularRingBuffer<_> = vec![0, 1].into_iter().collect();
    /// assert_eq!(v.contains(&1), true);
    /// assert_eq!(v.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
        where T: PartialEq<T>
    {
        self.iter().any(|e| e == x)
    }

    /// Provides a reference to the front element, or `None` if the buffer is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer = CircularRingBuffer::new();
    /// assert_eq!(buffer.first(), None);
    /// buffer.append(1);
    /// buffer.append(2);
    /// assert_eq!(buffer.first(), Some(&1));
    /// ```
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.live(0)
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// buffer is empty.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.live_mut(0)
    }

    /// Provides a reference to the back element, or `None` if the buffer is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer = CircularRingBuffer::new();
    /// assert_eq!(buffer.last(), None);
    /// buffer.append(1);
    /// buffer.append(2);
    /// assert_eq!(buffer.last(), Some(&2));
    /// ```
    #[inline]
    pub fn last(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.decrease(self.tail)].as_ref()
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// buffer is empty.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let back = self.decrease(self.tail);
        self.slots[back].as_mut()
    }

    /// Adds an element to the front of the buffer, growing it if needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer = CircularRingBuffer::new();
    /// buffer.prepend(1);
    /// buffer.prepend(2);
    /// assert_eq!(buffer.first(), Some(&2));
    /// ```
    pub fn prepend(&mut self, element: T) {
        self.head = self.decrease(self.head);
        let head = self.head;
        self.slots[head] = Some(element);
        self.check_capacity();
    }

    /// Adds an element to the back of the buffer, growing it if needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer = CircularRingBuffer::new();
    /// buffer.append(1);
    /// buffer.append(3);
    /// assert_eq!(buffer.last(), Some(&3));
    /// ```
    pub fn append(&mut self, element: T) {
        let tail = self.tail;
        self.slots[tail] = Some(element);
        self.tail = self.increase(tail);
        self.check_capacity();
    }

    /// Removes an element from the front of the buffer.
    ///
    /// Returns the element, or `None` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer = CircularRingBuffer::new();
    /// buffer.append(1);
    /// buffer.append(2);
    ///
    /// assert_eq!(buffer.remove_first(), Some(1));
    /// assert_eq!(buffer.remove_first(), Some(2));
    /// assert_eq!(buffer.remove_first(), None);
    /// ```
    pub fn remove_first(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let head = self.head;
        self.head = self.increase(head);
        self.slots[head].take()
    }

    /// Removes an element from the back of the buffer.
    ///
    /// Returns the element, or `None` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer = CircularRingBuffer::new();
    /// assert_eq!(buffer.remove_last(), None);
    /// buffer.append(1);
    /// buffer.append(3);
    /// assert_eq!(buffer.remove_last(), Some(3));
    /// ```
    pub fn remove_last(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.tail = self.decrease(self.tail);
        let tail = self.tail;
        self.slots[tail].take()
    }

    /// Inserts an element at `index` within the buffer, shifting all elements
    /// with indices greater than or equal to `index` towards the back.
    ///
    /// `index == len()` appends. For `index > len()` the buffer is unchanged
    /// and `element` is handed back in the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer: CircularRingBuffer<_> = vec![10, 12].into_iter().collect();
    /// buffer.insert(1, 11).unwrap();
    /// assert_eq!(format!("{:?}", buffer), "[10, 11, 12]");
    /// assert!(buffer.insert(4, 13).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), IndexOutOfRange<T>> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfRange::with_element(index, len, element));
        }

        // The appended element reserves the extra slot (growing if needed),
        // then travels to `index` once the suffix has moved out of the way.
        self.append(element);
        let back = self.physical(len);
        let placeholder = self.slots[back].take();
        insert::shift_toward_tail(self, index, len, 1);
        let at = self.physical(index);
        self.slots[at] = placeholder;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting all elements
    /// after it towards the front.
    ///
    /// Fails without touching the buffer if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer: CircularRingBuffer<_> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!(buffer.remove_at(1), Ok(2));
    /// assert_eq!(buffer.get(1), Ok(&3));
    /// assert!(buffer.remove_at(2).is_err());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        let len = self.len();
        if index >= len {
            return Err(IndexOutOfRange::new(index, len));
        }

        let at = self.physical(index);
        let removed = self.slots[at].take();
        remove::shift_toward_head(self, index + 1, len, 1);
        // the vacated back slot is already empty; this only shrinks the window
        self.remove_last();
        removed.ok_or_else(|| IndexOutOfRange::new(index, len))
    }

    /// Shortens the buffer, keeping the first `len` elements and dropping
    /// the rest. Has no effect if `len` is not less than the current length.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer: CircularRingBuffer<_> = (0..5).collect();
    /// buffer.truncate(2);
    /// assert_eq!(format!("{:?}", buffer), "[0, 1]");
    /// ```
    pub fn truncate(&mut self, len: usize) {
        while self.len() > len {
            self.remove_last();
        }
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` such that `f(&e)` returns false.
    /// This method operates in place and preserves the order of the retained
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer = CircularRingBuffer::new();
    /// buffer.extend(1..5);
    /// buffer.retain(|&x| x % 2 == 0);
    ///
    /// let v: Vec<_> = buffer.into_iter().collect();
    /// assert_eq!(&v[..], &[2, 4]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
        where F: FnMut(&T) -> bool
    {
        let len = self.len();
        let mut del = 0;
        for i in 0..len {
            let keep = match self.live(i) {
                Some(elem) => f(elem),
                None => false,
            };
            if !keep {
                del += 1;
            } else if del > 0 {
                let (ri, rj) = (self.physical(i - del), self.physical(i));
                self.slots.swap(ri, rj);
            }
        }
        self.truncate(len - del);
    }

    /// Splits the buffer into two at the given index.
    ///
    /// Returns a newly allocated buffer holding `[at, len)`; `self` keeps
    /// `[0, at)`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer: CircularRingBuffer<_> = vec![1, 2, 3].into_iter().collect();
    /// let buf2 = buffer.split_off(1);
    /// assert_eq!(format!("{:?}", buffer), "[1]");
    /// assert_eq!(format!("{:?}", buf2), "[2, 3]");
    /// ```
    pub fn split_off(&mut self, at: usize) -> Self {
        let len = self.len();
        assert!(at <= len, "`at` out of bounds");

        let mut other = Self::with_capacity(len - at);
        other.extend(self.drain(at..));
        other
    }

    /// Moves all of `other`'s elements to the back of `self`, preserving
    /// their order and leaving `other` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer: CircularRingBuffer<_> = vec![1, 2, 3].into_iter().collect();
    /// let mut buf2: CircularRingBuffer<_> = vec![4, 5, 6].into_iter().collect();
    ///
    /// buffer.append_all(&mut buf2);
    /// assert_eq!(format!("{:?}", buffer), "[1, 2, 3, 4, 5, 6]");
    /// assert!(buf2.is_empty());
    /// ```
    pub fn append_all(&mut self, other: &mut Self) {
        for element in other.drain(..) {
            self.append(element);
        }
    }

    /// Moves all of `other`'s elements to the front of `self`, preserving
    /// their order and leaving `other` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_ringbuffer::CircularRingBuffer;
    ///
    /// let mut buffer: CircularRingBuffer<_> = vec![4, 5].into_iter().collect();
    /// let mut buf2: CircularRingBuffer<_> = vec![1, 2, 3].into_iter().collect();
    ///
    /// buffer.prepend_all(&mut buf2);
    /// assert_eq!(format!("{:?}", buffer), "[1, 2, 3, 4, 5]");
    /// assert!(buf2.is_empty());
    /// ```
    pub fn prepend_all(&mut self, other: &mut Self) {
        for element in other.drain(..).rev() {
            self.prepend(element);
        }
    }
}
