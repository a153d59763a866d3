use core::cmp;
use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::CircularRingBuffer;

// Untrusted length hints never reserve more than this many slots up front.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for CircularRingBuffer<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        serializer.collect_seq(self)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for CircularRingBuffer<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        struct SeqVisitor<T> {
            marker: PhantomData<T>,
        }

        impl<'de, T> Visitor<'de> for SeqVisitor<T>
            where T: Deserialize<'de>
        {
            type Value = CircularRingBuffer<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence")
            }

            #[inline]
            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                where A: SeqAccess<'de>
            {
                let hint = cmp::min(seq.size_hint().unwrap_or(0), MAX_PREALLOC);
                let mut values = CircularRingBuffer::with_capacity(hint);

                while let Some(value) = seq.next_element()? {
                    values.append(value);
                }

                Ok(values)
            }
        }

        deserializer.deserialize_seq(SeqVisitor { marker: PhantomData })
    }

    fn deserialize_in_place<D>(deserializer: D, place: &mut Self) -> Result<(), D::Error>
        where D: Deserializer<'de>
    {
        struct SeqInPlaceVisitor<'a, T: 'a>(&'a mut CircularRingBuffer<T>);

        impl<'a, 'de, T> Visitor<'de> for SeqInPlaceVisitor<'a, T>
            where T: Deserialize<'de>
        {
            type Value = ();

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence")
            }

            #[inline]
            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                where A: SeqAccess<'de>
            {
                self.0.clear(true);

                while let Some(value) = seq.next_element()? {
                    self.0.append(value);
                }

                Ok(())
            }
        }

        deserializer.deserialize_seq(SeqInPlaceVisitor(place))
    }
}
