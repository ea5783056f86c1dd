//! Key resolution over spec lists.
//!
//! Provides `Select` (static lookup), `Contains` (static membership),
//! `Spec` (shape and positional access) and `Uniform` (runtime access to
//! lists whose slots all share one value type).

use core::any::{Any, type_name};

use crate::key::Key;
use crate::primitives::const_utils::str_eq;
use crate::primitives::{HCons, HNil, Peano, S, Z};
use super::slot::Slot;

// =============================================================================
// Select - static lookup
// =============================================================================

/// Resolve key `K` to its slot.
///
/// `K` is a key identity (`Key::Id`); `I` is the position of the key and
/// is always inferred: write `map.get::<K, _>()`. The compiler walks the list once per instantiation,
/// so the accessor is a plain field projection at run time.
#[diagnostic::on_unimplemented(
    message = "`{K}` is not a key of this map",
    label = "unknown key `{K}`",
    note = "Static access only accepts keys listed in the map's spec."
)]
pub trait Select<K, I: Peano> {
    type Value;

    /// Position of `K` in the spec.
    const INDEX: usize = I::VALUE;

    fn select(&self) -> &Self::Value;
    fn select_mut(&mut self) -> &mut Self::Value;
}

// Key found at the head
impl<K, V, T> Select<K, Z> for HCons<Slot<K, V>, T> {
    type Value = V;

    #[inline(always)]
    fn select(&self) -> &V {
        self.head.get()
    }

    #[inline(always)]
    fn select_mut(&mut self) -> &mut V {
        self.head.get_mut()
    }
}

// Key somewhere in the tail
impl<K, H, T, I> Select<K, S<I>> for HCons<H, T>
where
    I: Peano,
    T: Select<K, I>,
{
    type Value = T::Value;

    #[inline(always)]
    fn select(&self) -> &Self::Value {
        self.tail.select()
    }

    #[inline(always)]
    fn select_mut(&mut self) -> &mut Self::Value {
        self.tail.select_mut()
    }
}

// =============================================================================
// Contains - static membership
// =============================================================================

/// Does the spec contain a key named `K::NAME`?
///
/// Implemented for every key on every spec; the answer is the constant
/// `VALUE`, so it can drive `const { assert!(..) }` and folded branches.
pub trait Contains<K: Key> {
    const VALUE: bool;
}

impl<K: Key> Contains<K> for HNil {
    const VALUE: bool = false;
}

impl<K, H, V, T> Contains<K> for HCons<Slot<H, V>, T>
where
    K: Key,
    H: Key,
    T: Contains<K>,
{
    const VALUE: bool = str_eq(<K::Id as Key>::NAME, H::NAME) || <T as Contains<K>>::VALUE;
}

// =============================================================================
// Spec - shape of a map
// =============================================================================

/// A spec list: `HCons<Slot<K0, V0>, HCons<Slot<K1, V1>, .. HNil>>`, where
/// each `Ki` is a key identity.
///
/// Positional methods take a slot index in declaration order and return
/// `None` past the end.
pub trait Spec: Sized {
    /// Number of slots.
    const LEN: usize;

    /// Whether all key names are pairwise distinct.
    const DISTINCT: bool;

    fn name_at(index: usize) -> Option<&'static str>;

    fn type_name_at(index: usize) -> Option<&'static str>;

    /// Index of the slot named `name` (linear scan).
    fn position(name: &str) -> Option<usize>;

    fn value_at(&self, index: usize) -> Option<&dyn Any>;

    fn value_at_mut(&mut self, index: usize) -> Option<&mut dyn Any>;
}

impl Spec for HNil {
    const LEN: usize = 0;
    const DISTINCT: bool = true;

    fn name_at(_: usize) -> Option<&'static str> { None }
    fn type_name_at(_: usize) -> Option<&'static str> { None }
    fn position(_: &str) -> Option<usize> { None }
    fn value_at(&self, _: usize) -> Option<&dyn Any> { None }
    fn value_at_mut(&mut self, _: usize) -> Option<&mut dyn Any> { None }
}

impl<K, V, T> Spec for HCons<Slot<K, V>, T>
where
    K: Key,
    V: 'static,
    T: Spec + Contains<K>,
{
    const LEN: usize = T::LEN + 1;
    const DISTINCT: bool = !<T as Contains<K>>::VALUE && T::DISTINCT;

    fn name_at(index: usize) -> Option<&'static str> {
        match index {
            0 => Some(K::NAME),
            _ => T::name_at(index - 1),
        }
    }

    fn type_name_at(index: usize) -> Option<&'static str> {
        match index {
            0 => Some(type_name::<V>()),
            _ => T::type_name_at(index - 1),
        }
    }

    fn position(name: &str) -> Option<usize> {
        if K::NAME == name {
            Some(0)
        } else {
            T::position(name).map(|i| i + 1)
        }
    }

    fn value_at(&self, index: usize) -> Option<&dyn Any> {
        match index {
            0 => Some(self.head.get() as &dyn Any),
            _ => self.tail.value_at(index - 1),
        }
    }

    fn value_at_mut(&mut self, index: usize) -> Option<&mut dyn Any> {
        match index {
            0 => Some(self.head.get_mut() as &mut dyn Any),
            _ => self.tail.value_at_mut(index - 1),
        }
    }
}

// =============================================================================
// Uniform - runtime access to homogeneous specs
// =============================================================================

/// A spec whose slots all hold `V`.
///
/// Gives typed access by index without going through `Any`; the registry
/// resolves runtime event names to an index and lands here.
pub trait Uniform<V>: Spec {
    fn slot(&self, index: usize) -> Option<&V>;
    fn slot_mut(&mut self, index: usize) -> Option<&mut V>;
}

impl<V> Uniform<V> for HNil {
    fn slot(&self, _: usize) -> Option<&V> { None }
    fn slot_mut(&mut self, _: usize) -> Option<&mut V> { None }
}

impl<K, V, T> Uniform<V> for HCons<Slot<K, V>, T>
where
    K: Key,
    V: 'static,
    T: Uniform<V> + Contains<K>,
{
    fn slot(&self, index: usize) -> Option<&V> {
        match index {
            0 => Some(self.head.get()),
            _ => self.tail.slot(index - 1),
        }
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut V> {
        match index {
            0 => Some(self.head.get_mut()),
            _ => self.tail.slot_mut(index - 1),
        }
    }
}
