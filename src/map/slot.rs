//! Storage cell tagged by its key.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// One value of type `V` stored under key `K`.
///
/// The key is phantom; `Slot<K, V>` has the size and auto traits of `V`.
pub struct Slot<K, V> {
    value: V,
    key: PhantomData<fn() -> K>,
}

impl<K, V> Slot<K, V> {
    pub const fn new(value: V) -> Self {
        Slot { value, key: PhantomData }
    }

    pub const fn get(&self) -> &V {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn into_inner(self) -> V {
        self.value
    }
}

// Manual impls: none of these should require anything of K.
impl<K, V: Default> Default for Slot<K, V> {
    fn default() -> Self { Slot::new(V::default()) }
}

impl<K, V: Clone> Clone for Slot<K, V> {
    fn clone(&self) -> Self { Slot::new(self.value.clone()) }
}

impl<K, V: PartialEq> PartialEq for Slot<K, V> {
    fn eq(&self, other: &Self) -> bool { self.value == other.value }
}

impl<K, V: Eq> Eq for Slot<K, V> {}

impl<K, V: Hash> Hash for Slot<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.value.hash(state) }
}

impl<K, V: fmt::Debug> fmt::Debug for Slot<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
