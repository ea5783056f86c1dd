//! Lazy iteration over a map's keys, value types and values.
//!
//! All iterators walk the spec in declaration order and yield exactly
//! `Spec::LEN` items; the i-th item of each describes the same slot.

use core::any::Any;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use super::select::Spec;

macro_rules! impl_exact_size {
    ($name:ident<$($lt:lifetime,)? $L:ident>) => {
        impl<$($lt,)? $L: Spec> ExactSizeIterator for $name<$($lt,)? $L> {}
        impl<$($lt,)? $L: Spec> FusedIterator for $name<$($lt,)? $L> {}
    };
}

/// Key names, as `&'static str`.
pub struct Keys<L> {
    index: usize,
    spec: PhantomData<fn() -> L>,
}

impl<L> Keys<L> {
    pub(crate) const fn new() -> Self {
        Keys { index: 0, spec: PhantomData }
    }
}

impl<L> Clone for Keys<L> {
    fn clone(&self) -> Self {
        Keys { index: self.index, spec: PhantomData }
    }
}

impl<L: Spec> Iterator for Keys<L> {
    type Item = &'static str;

    fn next(&mut self) -> Option<&'static str> {
        let name = L::name_at(self.index)?;
        self.index += 1;
        Some(name)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = L::LEN - self.index;
        (left, Some(left))
    }
}

impl_exact_size!(Keys<L>);

/// Value type names, as reported by `core::any::type_name`.
pub struct ValueTypes<L> {
    index: usize,
    spec: PhantomData<fn() -> L>,
}

impl<L> ValueTypes<L> {
    pub(crate) const fn new() -> Self {
        ValueTypes { index: 0, spec: PhantomData }
    }
}

impl<L> Clone for ValueTypes<L> {
    fn clone(&self) -> Self {
        ValueTypes { index: self.index, spec: PhantomData }
    }
}

impl<L: Spec> Iterator for ValueTypes<L> {
    type Item = &'static str;

    fn next(&mut self) -> Option<&'static str> {
        let name = L::type_name_at(self.index)?;
        self.index += 1;
        Some(name)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = L::LEN - self.index;
        (left, Some(left))
    }
}

impl_exact_size!(ValueTypes<L>);

/// Current values, as `&dyn Any`.
pub struct Values<'a, L> {
    slots: &'a L,
    index: usize,
}

impl<'a, L> Values<'a, L> {
    pub(crate) const fn new(slots: &'a L) -> Self {
        Values { slots, index: 0 }
    }
}

impl<L> Clone for Values<'_, L> {
    fn clone(&self) -> Self {
        Values { slots: self.slots, index: self.index }
    }
}

impl<'a, L: Spec> Iterator for Values<'a, L> {
    type Item = &'a dyn Any;

    fn next(&mut self) -> Option<&'a dyn Any> {
        let value = self.slots.value_at(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = L::LEN - self.index;
        (left, Some(left))
    }
}

impl_exact_size!(Values<'a, L>);

/// `(name, value)` pairs.
pub struct Entries<'a, L> {
    values: Values<'a, L>,
}

impl<'a, L> Entries<'a, L> {
    pub(crate) const fn new(slots: &'a L) -> Self {
        Entries { values: Values::new(slots) }
    }
}

impl<L> Clone for Entries<'_, L> {
    fn clone(&self) -> Self {
        Entries { values: self.values.clone() }
    }
}

impl<'a, L: Spec> Iterator for Entries<'a, L> {
    type Item = (&'static str, &'a dyn Any);

    fn next(&mut self) -> Option<Self::Item> {
        let name = L::name_at(self.values.index)?;
        let value = self.values.next()?;
        Some((name, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl_exact_size!(Entries<'a, L>);
