use super::CircularBuffer;

/// Moves the logical range `start..end` toward the head by `distance` slots.
///
/// Iterates upward from `start`, so the `distance` slots before `start` must
/// already be empty.
///
/// ```text
///        H       s     e
///   [. . a b _ _ C D E . .]      distance = 2
///
///        H   s     e
///   [. . a b C D E _ _ . .]
/// ```
pub fn shift_toward_head<B: CircularBuffer>(buffer: &mut B, start: usize, end: usize, distance: usize) {
    debug_assert!(distance <= start || start == end);
    if distance == 0 {
        return;
    }
    for index in start..end {
        buffer.shift(index - distance, index);
    }
}
