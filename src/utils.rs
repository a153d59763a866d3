use core::cmp;

// All helpers take `mask = slots - 1`, where `slots` is a power of two.

#[inline]
pub fn wrap_add(index: usize, addend: usize, mask: usize) -> usize {
    debug_assert!(addend <= mask + 1);
    index.wrapping_add(addend) & mask
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, mask: usize) -> usize {
    debug_assert!(subtrahend <= mask + 1);
    index.wrapping_sub(subtrahend) & mask
}

#[inline]
pub fn count(head: usize, tail: usize, mask: usize) -> usize {
    debug_assert!(head <= mask);
    debug_assert!(tail <= mask);
    tail.wrapping_sub(head) & mask
}

/// Smallest power-of-two slot count, at least `minimum`, that holds `len`
/// elements with one slot to spare.
#[inline]
pub fn slots_for(len: usize, minimum: usize) -> usize {
    let wanted = len.checked_add(1).expect("capacity overflow");
    cmp::max(wanted.next_power_of_two(), minimum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_sub_from_zero_lands_on_last_slot() {
        assert_eq!(wrap_sub(0, 1, 7), 7);
        assert_eq!(wrap_sub(3, 1, 7), 2);
    }

    #[test]
    fn wrap_add_past_end() {
        assert_eq!(wrap_add(7, 1, 7), 0);
        assert_eq!(wrap_add(6, 5, 15), 11);
    }

    #[test]
    fn count_across_wrap() {
        assert_eq!(count(0, 0, 7), 0);
        assert_eq!(count(2, 5, 7), 3);
        assert_eq!(count(6, 1, 7), 3);
    }

    #[test]
    fn slots_round_up() {
        assert_eq!(slots_for(0, 8), 8);
        assert_eq!(slots_for(7, 8), 8);
        assert_eq!(slots_for(8, 8), 16);
        assert_eq!(slots_for(100, 8), 128);
    }
}
