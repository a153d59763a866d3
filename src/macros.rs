/// Creates a [`CircularRingBuffer`] containing the arguments.
///
/// `ring_buffer!` mirrors `vec!`: either a list of elements, or an element
/// and a count, the element being cloned `count` times.
///
/// ```
/// use circular_ringbuffer::ring_buffer;
///
/// let buffer = ring_buffer![1, 2, 3];
/// assert_eq!(format!("{}", buffer), "[1, 2, 3]");
///
/// let buffer = ring_buffer!["x"; 2];
/// assert_eq!(buffer.len(), 2);
/// ```
///
/// [`CircularRingBuffer`]: struct.CircularRingBuffer.html
#[macro_export]
macro_rules! ring_buffer {
    () => (
        $crate::CircularRingBuffer::new()
    );
    ($elem:expr; $n:expr) => (
        $crate::CircularRingBuffer::repeat($elem, $n)
    );
    ($($x:expr),+ $(,)?) => ({
        let mut buffer = $crate::CircularRingBuffer::new();
        $( buffer.append($x); )+
        buffer
    });
}
