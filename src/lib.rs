//! A growable double-ended ring buffer.
//!
//! `CircularRingBuffer` keeps its elements in a power-of-two sized slot
//! array addressed by two wrapping cursors. It has `O(1)` amortized inserts
//! and removals at both ends of the container and `O(1)` indexing like a
//! vector. Inserting or removing at an arbitrary index moves the elements
//! behind it. The contained elements are not required to be copyable.
//!
//! # Feature Flags
//! The **circular-ringbuffer** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; without it the crate only needs `alloc`
//!
//!
//! - `serde`
//!   - Optional
//!   - Serialize as a sequence, deserialize by appending
//!
//! # Capacity
//!
//! The slot array starts with 8 slots and doubles whenever a write fills the
//! last free slot, so `capacity()` is always `slots - 1`. It never shrinks on
//! its own; `clear(false)` releases the storage.
//!
//! # Errors
//!
//! Bounds-checked operations (`get`, `get_mut`, `set`, `insert`, `remove_at`,
//! `swap`) return [`IndexOutOfRange`] and leave the buffer untouched.
//! `Index`/`IndexMut` panic instead. An empty buffer is reported through
//! `Option` by `first`, `last`, `remove_first` and `remove_last`.
//!
//! [`IndexOutOfRange`]: error/struct.IndexOutOfRange.html
//!
//! # Examples
//! ```
//! use circular_ringbuffer::CircularRingBuffer;
//!
//! let mut buffer = CircularRingBuffer::new();
//! buffer.append(1);
//! buffer.append(2);
//! buffer.append(3);
//!
//! buffer.insert(1, 9).unwrap();
//! assert_eq!(format!("{}", buffer), "[1, 9, 2, 3]");
//!
//! assert_eq!(buffer.remove_at(0), Ok(1));
//! assert_eq!(buffer.remove_first(), Some(9));
//! assert_eq!(format!("{}", buffer), "[2, 3]");
//! ```
//!
//! # Iterator
//! ```
//! use circular_ringbuffer::CircularRingBuffer;
//!
//! let mut buffer = CircularRingBuffer::new();
//! buffer.extend(0..5);
//!
//! let items: Vec<_> = buffer.into_iter().collect();
//! assert_eq!(items, vec![0, 1, 2, 3, 4]);
//! ```
//!
//! # From Iterator
//! ```
//! use circular_ringbuffer::{ring_buffer, CircularRingBuffer};
//!
//! let buffer: CircularRingBuffer<_> = vec![0, 1, 2, 3, 4].into_iter().collect();
//! let buffer2: CircularRingBuffer<_> = (0..5).collect();
//!
//! assert_eq!(buffer, buffer2);
//! assert_eq!(buffer, ring_buffer![0, 1, 2, 3, 4]);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

extern crate alloc;
#[macro_use]
extern crate log;
extern crate odds;
#[cfg(feature = "serde")]
extern crate serde;

#[macro_use]
mod macros;
pub mod error;
mod logic;
mod ringbuffer;
#[cfg(feature = "serde")]
mod serde_impl;
mod utils;

pub use odds::IndexRange as RangeArgument;

pub use error::{IndexOutOfRange, InvalidConstructionArgument};
pub use ringbuffer::{CircularRingBuffer, Drain, IntoIter, Iter, IterMut};
