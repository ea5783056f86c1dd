//! The heterogeneous map.

use core::any::Any;
use core::fmt;

use crate::key::Key;
use crate::primitives::Peano;
use super::construct::FromValues;
use super::iter::{Entries, Keys, ValueTypes, Values};
use super::select::{Contains, Select, Spec};

/// Value type stored under key `K` (at inferred position `I`) in spec `L`.
pub type ValueOf<L, K, I> = <L as Select<<K as Key>::Id, I>>::Value;

/// Fixed set of keys, one value of a per-key type under each.
///
/// `L` is a spec list built with `spec![K => V, ..]`. Storage is the list
/// itself: one field per key, no boxing, no side table. Static accessors
/// take the key as a type parameter followed by `_` for its inferred
/// position.
///
/// ```
/// use typed_events::prelude::*;
///
/// type Config = spec![key!("foo") => i32, key!("bar") => String];
///
/// let mut map = HMap::<Config>::new((42, String::from("x")));
/// assert_eq!(*map.get::<key!("foo"), _>(), 42);
///
/// map.set::<key!("bar"), _>("y");
/// assert_eq!(map.get::<key!("bar"), _>(), "y");
/// ```
///
/// Unknown keys are rejected at compile time:
///
/// ```compile_fail
/// use typed_events::prelude::*;
///
/// type Config = spec![key!("foo") => i32];
///
/// let map = HMap::<Config>::default();
/// let _ = map.get::<key!("qux"), _>();
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HMap<L> {
    slots: L,
}

impl<L: Spec> HMap<L> {
    /// Number of keys in the spec.
    pub const LEN: usize = L::LEN;

    /// Wrap an already built spec list.
    ///
    /// Fails to compile when two keys in `L` share a name.
    ///
    /// ```compile_fail
    /// use typed_events::prelude::*;
    ///
    /// let map = HMap::<spec![key!("a") => u8, key!("a") => u16]>::default();
    /// ```
    pub fn from_slots(slots: L) -> Self {
        const { assert!(L::DISTINCT, "duplicate key name in map spec") };
        HMap { slots }
    }

    /// Build from a tuple of values in declaration order.
    pub fn new<T>(values: T) -> Self
    where
        L: FromValues<T>,
    {
        Self::from_slots(L::from_values(values))
    }

    /// Whether `K` names a key of this map. Evaluated at compile time.
    pub const fn contains<K: Key>() -> bool
    where
        L: Contains<K>,
    {
        <L as Contains<K>>::VALUE
    }

    /// Position of `K` in the spec.
    pub const fn index_of<K: Key, I: Peano>() -> usize
    where
        L: Select<K::Id, I>,
    {
        <L as Select<K::Id, I>>::INDEX
    }

    pub const fn len(&self) -> usize {
        L::LEN
    }

    pub const fn is_empty(&self) -> bool {
        L::LEN == 0
    }

    // -------------------------------------------------------------------------
    // Static access
    // -------------------------------------------------------------------------

    #[inline]
    pub fn get<K: Key, I: Peano>(&self) -> &ValueOf<L, K, I>
    where
        L: Select<K::Id, I>,
    {
        self.slots.select()
    }

    #[inline]
    pub fn get_mut<K: Key, I: Peano>(&mut self) -> &mut ValueOf<L, K, I>
    where
        L: Select<K::Id, I>,
    {
        self.slots.select_mut()
    }

    /// Overwrite the value under `K` and return the stored value.
    ///
    /// ```compile_fail
    /// use typed_events::prelude::*;
    ///
    /// let mut map = HMap::<spec![key!("foo") => i32]>::default();
    /// map.set::<key!("qux"), _>(1);
    /// ```
    #[inline]
    pub fn set<K: Key, I: Peano>(&mut self, value: impl Into<ValueOf<L, K, I>>) -> &ValueOf<L, K, I>
    where
        L: Select<K::Id, I>,
    {
        let slot = self.slots.select_mut();
        *slot = value.into();
        slot
    }

    /// Overwrite the value under `K` and return the previous one.
    #[inline]
    pub fn replace<K: Key, I: Peano>(&mut self, value: impl Into<ValueOf<L, K, I>>) -> ValueOf<L, K, I>
    where
        L: Select<K::Id, I>,
    {
        core::mem::replace(self.slots.select_mut(), value.into())
    }

    /// Compound assignment: apply `op` to the value under `K` and `operand`,
    /// then return the stored value.
    ///
    /// ```
    /// use typed_events::prelude::*;
    ///
    /// let mut map = HMap::<spec![key!("log") => String]>::default();
    /// map.update::<key!("log"), _, _>(|log: &mut String, line: &str| log.push_str(line), "a");
    /// map.update::<key!("log"), _, _>(|log: &mut String, line: &str| log.push_str(line), "b");
    /// assert_eq!(map.get::<key!("log"), _>(), "ab");
    /// ```
    ///
    /// ```compile_fail
    /// use typed_events::prelude::*;
    ///
    /// let mut map = HMap::<spec![key!("log") => String]>::default();
    /// map.update::<key!("qux"), _, _>(|log: &mut String, line: &str| log.push_str(line), "a");
    /// ```
    #[inline]
    pub fn update<K: Key, I: Peano, O>(
        &mut self,
        op: impl FnOnce(&mut ValueOf<L, K, I>, O),
        operand: O,
    ) -> &ValueOf<L, K, I>
    where
        L: Select<K::Id, I>,
    {
        let slot = self.slots.select_mut();
        op(slot, operand);
        slot
    }

    // -------------------------------------------------------------------------
    // Runtime access
    // -------------------------------------------------------------------------

    /// Slot index of the key named `name`, scanning the spec.
    pub fn position(name: &str) -> Option<usize> {
        L::position(name)
    }

    pub fn get_dyn(&self, name: &str) -> Option<&dyn Any> {
        self.slots.value_at(L::position(name)?)
    }

    pub fn get_dyn_mut(&mut self, name: &str) -> Option<&mut dyn Any> {
        self.slots.value_at_mut(L::position(name)?)
    }

    /// Runtime lookup followed by a downcast; `None` when the name is
    /// unknown or `V` is not the stored type.
    pub fn get_dyn_as<V: Any>(&self, name: &str) -> Option<&V> {
        self.get_dyn(name)?.downcast_ref()
    }

    // -------------------------------------------------------------------------
    // Iteration
    // -------------------------------------------------------------------------

    pub fn keys(&self) -> Keys<L> {
        Keys::new()
    }

    pub fn value_types(&self) -> ValueTypes<L> {
        ValueTypes::new()
    }

    pub fn values(&self) -> Values<'_, L> {
        Values::new(&self.slots)
    }

    pub fn iter(&self) -> Entries<'_, L> {
        Entries::new(&self.slots)
    }

    // -------------------------------------------------------------------------
    // Decomposition
    // -------------------------------------------------------------------------

    pub const fn slots(&self) -> &L {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut L {
        &mut self.slots
    }

    pub fn into_slots(self) -> L {
        self.slots
    }
}

impl<L: Spec + Default> Default for HMap<L> {
    fn default() -> Self {
        Self::from_slots(L::default())
    }
}

impl<'a, L: Spec> IntoIterator for &'a HMap<L> {
    type Item = (&'static str, &'a dyn Any);
    type IntoIter = Entries<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Values carry no Debug bound, so only the shape is printed.
impl<L: Spec> fmt::Debug for HMap<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HMap ")?;
        f.debug_map().entries(self.keys().zip(self.value_types())).finish()
    }
}
