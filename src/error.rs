//! Error values returned by `CircularRingBuffer`.

#[cfg(feature = "std")]
use std::error::Error;
use core::fmt;

/// Error value indicating a logical index outside the valid range.
///
/// Operations that take an element by value (`set`, `insert`) hand it back
/// through `element` so a rejected call loses nothing.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct IndexOutOfRange<T = ()> {
    /// The rejected index.
    pub index: usize,
    /// Length of the buffer when the index was rejected.
    pub len: usize,
    /// The element that caused the error.
    pub element: T,
}

impl IndexOutOfRange {
    #[inline]
    pub(crate) fn new(index: usize, len: usize) -> Self {
        IndexOutOfRange { index, len, element: () }
    }
}

impl<T> IndexOutOfRange<T> {
    #[inline]
    pub(crate) fn with_element(index: usize, len: usize, element: T) -> Self {
        IndexOutOfRange { index, len, element }
    }

    /// Drops the carried element, keeping only the position information.
    pub fn simplify(self) -> IndexOutOfRange {
        IndexOutOfRange::new(self.index, self.len)
    }
}

const INDEXERROR: &str = "index out of range";

#[cfg(feature = "std")]
impl<T> Error for IndexOutOfRange<T> {}

impl<T> fmt::Display for IndexOutOfRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: the len is {} but the index is {}", INDEXERROR, self.len, self.index)
    }
}

impl<T> fmt::Debug for IndexOutOfRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IndexOutOfRange {{ index: {}, len: {} }}", self.index, self.len)
    }
}

/// Error value for a construction request that cannot be satisfied.
///
/// Raised by `CircularRingBuffer::from_elem` when the requested count is negative.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct InvalidConstructionArgument {
    /// The rejected count.
    pub count: isize,
}

const ARGERROR: &str = "invalid construction argument";

#[cfg(feature = "std")]
impl Error for InvalidConstructionArgument {}

impl fmt::Display for InvalidConstructionArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: count must not be negative, got {}", ARGERROR, self.count)
    }
}

impl fmt::Debug for InvalidConstructionArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", "InvalidConstructionArgument", self.count)
    }
}
