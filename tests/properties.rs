use std::collections::VecDeque;

use circular_ringbuffer::CircularRingBuffer;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Append(i32),
    Prepend(i32),
    RemoveFirst,
    RemoveLast,
    Insert(usize, i32),
    RemoveAt(usize),
    Set(usize, i32),
    Clear(bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Append),
        4 => any::<i32>().prop_map(Op::Prepend),
        2 => Just(Op::RemoveFirst),
        2 => Just(Op::RemoveLast),
        2 => (0..40usize, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => (0..40usize).prop_map(Op::RemoveAt),
        1 => (0..40usize, any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
        1 => any::<bool>().prop_map(Op::Clear),
    ]
}

fn same(buffer: &CircularRingBuffer<i32>, model: &VecDeque<i32>) -> bool {
    buffer.len() == model.len() && buffer.iter().eq(model.iter())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_matches_vecdeque(ops in prop::collection::vec(op(), 0..200)) {
        let mut buffer = CircularRingBuffer::new();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::Append(v) => {
                    buffer.append(v);
                    model.push_back(v);
                }
                Op::Prepend(v) => {
                    buffer.prepend(v);
                    model.push_front(v);
                }
                Op::RemoveFirst => {
                    prop_assert_eq!(buffer.remove_first(), model.pop_front());
                }
                Op::RemoveLast => {
                    prop_assert_eq!(buffer.remove_last(), model.pop_back());
                }
                Op::Insert(i, v) => {
                    let result = buffer.insert(i, v);
                    if i <= model.len() {
                        prop_assert!(result.is_ok());
                        model.insert(i, v);
                    } else {
                        prop_assert_eq!(result.unwrap_err().element, v);
                    }
                }
                Op::RemoveAt(i) => {
                    let result = buffer.remove_at(i);
                    match model.remove(i) {
                        Some(expected) => {
                            prop_assert_eq!(result, Ok(expected));
                        }
                        None => {
                            prop_assert!(result.is_err());
                        }
                    }
                }
                Op::Set(i, v) => {
                    let result = buffer.set(i, v);
                    match model.get_mut(i) {
                        Some(slot) => {
                            prop_assert_eq!(result, Ok(*slot));
                            *slot = v;
                        }
                        None => {
                            prop_assert!(result.is_err());
                        }
                    }
                }
                Op::Clear(keep_capacity) => {
                    buffer.clear(keep_capacity);
                    model.clear();
                }
            }
            prop_assert!(same(&buffer, &model));
            prop_assert!(buffer.len() <= buffer.capacity());
            prop_assert!((buffer.capacity() + 1).is_power_of_two());
        }
    }

    #[test]
    fn prop_appends_keep_order(values in prop::collection::vec(any::<u16>(), 0..300)) {
        let mut buffer = CircularRingBuffer::new();
        for &v in &values {
            buffer.append(v);
        }
        prop_assert_eq!(buffer.len(), values.len());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(buffer.get(i), Ok(v));
        }
    }

    #[test]
    fn prop_prepends_reverse_order(values in prop::collection::vec(any::<u16>(), 0..300)) {
        let mut buffer = CircularRingBuffer::new();
        for &v in &values {
            buffer.prepend(v);
        }
        let reversed: Vec<_> = values.iter().rev().cloned().collect();
        prop_assert_eq!(buffer, reversed);
    }

    #[test]
    fn prop_append_then_remove_last_round_trips(
        values in prop::collection::vec(any::<i32>(), 0..50),
        x in any::<i32>(),
    ) {
        let mut buffer: CircularRingBuffer<_> = values.iter().cloned().collect();
        let before = buffer.clone();
        buffer.append(x);
        prop_assert_eq!(buffer.remove_last(), Some(x));
        prop_assert_eq!(buffer, before);
    }

    #[test]
    fn prop_insert_then_remove_at_round_trips(
        values in prop::collection::vec(any::<i32>(), 0..50),
        at in any::<prop::sample::Index>(),
        x in any::<i32>(),
    ) {
        let mut buffer: CircularRingBuffer<_> = values.iter().cloned().collect();
        let before = buffer.clone();
        let at = at.index(values.len() + 1);
        buffer.insert(at, x).unwrap();
        prop_assert_eq!(buffer.remove_at(at), Ok(x));
        prop_assert_eq!(buffer, before);
    }

    #[test]
    fn prop_out_of_range_leaves_buffer_unchanged(
        values in prop::collection::vec(any::<i32>(), 0..50),
        past in 0..10usize,
    ) {
        let mut buffer: CircularRingBuffer<_> = values.iter().cloned().collect();
        let before = buffer.clone();
        let len = values.len();

        prop_assert!(buffer.get(len + past).is_err());
        prop_assert!(buffer.set(len + past, 0).is_err());
        prop_assert!(buffer.remove_at(len + past).is_err());
        prop_assert!(buffer.insert(len + past + 1, 0).is_err());
        prop_assert_eq!(buffer, before);
    }

    #[test]
    fn prop_equal_iff_same_appends(values in prop::collection::vec(any::<i8>(), 0..40), extra in any::<i8>()) {
        let a: CircularRingBuffer<_> = values.iter().cloned().collect();
        let mut b = CircularRingBuffer::new();
        for &v in &values {
            b.prepend(0);
            b.remove_first();
            b.append(v);
        }
        prop_assert_eq!(&a, &b);

        b.append(extra);
        prop_assert_ne!(&a, &b);
    }

    #[test]
    fn prop_clear_keeping_capacity_behaves_like_fresh(
        first in prop::collection::vec(any::<i32>(), 0..60),
        second in prop::collection::vec(any::<i32>(), 0..60),
    ) {
        let mut buffer: CircularRingBuffer<_> = first.iter().cloned().collect();
        let capacity = buffer.capacity();
        buffer.clear(true);
        prop_assert!(buffer.is_empty());
        prop_assert_eq!(buffer.capacity(), capacity);

        let mut fresh = CircularRingBuffer::with_capacity(capacity);
        for &v in &second {
            buffer.append(v);
            fresh.append(v);
        }
        prop_assert_eq!(buffer.capacity(), fresh.capacity());
        prop_assert_eq!(buffer, fresh);
    }
}
