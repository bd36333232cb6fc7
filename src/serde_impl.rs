//! `serde` support, enabled with the `serde` feature
//!
//! A heap serializes as a plain sequence in heap order. Deserializing goes
//! through [`MinHeap::from_vec`], so input in any order yields a valid heap.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::min_heap::MinHeap;

impl<T: Serialize> Serialize for MinHeap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for MinHeap<T>
where
    T: Deserialize<'de> + PartialOrd,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(MinHeap::from_vec)
    }
}
