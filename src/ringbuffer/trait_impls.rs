use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;
use core::ops::{Index, IndexMut};

use super::*;

impl<T> Clone for CircularRingBuffer<T>
    where T: Clone
{
    fn clone(&self) -> Self {
        let mut other = Self::with_capacity(self.len());
        other.extend(self.iter().cloned());
        other
    }
}

impl<T> Default for CircularRingBuffer<T> {
    #[inline]
    fn default() -> Self {
        CircularRingBuffer::new()
    }
}

impl<T> PartialEq for CircularRingBuffer<T>
    where T: PartialEq
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for CircularRingBuffer<T> where T: Eq {}

impl<'a, T> PartialEq<&'a [T]> for CircularRingBuffer<T>
    where T: PartialEq
{
    fn eq(&self, other: &&'a [T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> PartialEq<Vec<T>> for CircularRingBuffer<T>
    where T: PartialEq
{
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == &other[..]
    }
}

impl<T> PartialOrd for CircularRingBuffer<T>
    where T: PartialOrd
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T> Ord for CircularRingBuffer<T>
    where T: Ord
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Hash for CircularRingBuffer<T>
    where T: Hash
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> Index<usize> for CircularRingBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(elt) => elt,
            Err(err) => panic!("index out of bounds: the len is {} but the index is {}",
                               err.len,
                               err.index),
        }
    }
}

impl<T> IndexMut<usize> for CircularRingBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(elt) => elt,
            Err(err) => panic!("index out of bounds: the len is {} but the index is {}",
                               err.len,
                               err.index),
        }
    }
}

impl<T> iter::FromIterator<T> for CircularRingBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut buffer = Self::with_capacity(iter.size_hint().0);
        buffer.extend(iter);
        buffer
    }
}

impl<T> From<Vec<T>> for CircularRingBuffer<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for CircularRingBuffer<T> {
    fn from(array: [T; N]) -> Self {
        IntoIterator::into_iter(array).collect()
    }
}

impl<T> IntoIterator for CircularRingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularRingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CircularRingBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Extend the `CircularRingBuffer` with an iterator, appending every item
/// and growing as needed.
impl<T> Extend<T> for CircularRingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.append(elt);
        }
    }
}

impl<'a, T> Extend<&'a T> for CircularRingBuffer<T>
    where T: Copy + 'a
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> fmt::Debug for CircularRingBuffer<T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// Renders the elements front to back as `[a, b, c]`.
impl<T> fmt::Display for CircularRingBuffer<T>
    where T: fmt::Display
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (i, elt) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elt, f)?;
        }
        f.write_str("]")
    }
}
