/// Moves every live slot of `src`, starting at physical `head` and wrapping
/// around, into `dst` from physical 0.
///
/// `src` must be completely full (the growth trigger) and `dst` at least as
/// long. After the move `src` holds only `None`.
///
/// ```text
///              H
///   src [e f g h a b c d]
///
///   dst [a b c d e f g h _ _ _ _ _ _ _ _]
/// ```
pub fn relocate<T>(src: &mut [Option<T>], head: usize, dst: &mut [Option<T>]) {
    debug_assert!(dst.len() >= src.len());
    let (wrapped, leading) = src.split_at_mut(head);
    for (to, from) in dst.iter_mut().zip(leading.iter_mut().chain(wrapped.iter_mut())) {
        *to = from.take();
    }
}

#[cfg(test)]
mod tests {
    use super::relocate;
    use alloc::vec::Vec;

    #[test]
    fn relocate_unwraps_window() {
        let mut src: Vec<Option<u8>> = vec![Some(5), Some(6), Some(1), Some(2), Some(3), Some(4)];
        let mut dst: Vec<Option<u8>> = (0..12).map(|_| None).collect();
        relocate(&mut src, 2, &mut dst);
        let moved: Vec<u8> = dst.iter().filter_map(|x| *x).collect();
        assert_eq!(moved, vec![1, 2, 3, 4, 5, 6]);
        assert!(dst[6..].iter().all(Option::is_none));
        assert!(src.iter().all(Option::is_none));
    }
}
