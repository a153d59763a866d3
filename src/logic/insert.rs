use super::CircularBuffer;

/// Moves the logical range `start..end` toward the tail by `distance` slots.
///
/// Iterates from the tail end down so no element is overwritten before it
/// has moved. The `distance` slots past `end` must be empty.
///
/// ```text
///        H   s       e
///   [. . a b C D E F _ . .]      distance = 1
///
///        H     s       e
///   [. . a b _ C D E F . .]
/// ```
pub fn shift_toward_tail<B: CircularBuffer>(buffer: &mut B, start: usize, end: usize, distance: usize) {
    if distance == 0 {
        return;
    }
    for index in (start..end).rev() {
        buffer.shift(index + distance, index);
    }
}
