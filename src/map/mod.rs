//! # Layer 1: Heterogeneous Map
//!
//! A fixed list of `(key, value type)` pairs stored as one product value.
//!
//! - **Storage**: `Slot<K, V>` cells chained in an HList (`spec![..]`).
//! - **Resolution**: `Select` (static get/set), `Contains` (static membership),
//!   `Spec` (positional and runtime access), `Uniform` (typed runtime access
//!   when every slot has the same type).
//! - **Map**: `HMap<L>` wraps a spec list and exposes the operations.
//!
//! Key-to-slot resolution happens during type checking: each static call
//! site names its key as a type, the compiler infers the slot position and
//! the accessor monomorphizes to a field projection.

pub mod slot;
pub mod select;
pub mod construct;
pub mod iter;
pub mod hmap;

pub use slot::Slot;
pub use select::{Select, Contains, Spec, Uniform};
pub use construct::FromValues;
pub use iter::{Keys, ValueTypes, Values, Entries};
pub use hmap::{HMap, ValueOf};

// =============================================================================
// Macros
// =============================================================================

/// Build a spec list type: `spec![K0 => V0, K1 => V1]`.
///
/// Each slot is tagged with the key's canonical identity (`Key::Id`), so a
/// derived key and `key!` with the same name address the same slot.
///
/// ```
/// use typed_events::prelude::*;
///
/// #[derive(Key)]
/// struct Retries;
///
/// type Settings = spec![Retries => u8, key!("label") => &'static str];
/// assert_eq!(HMap::<Settings>::LEN, 2);
/// ```
#[macro_export]
macro_rules! spec {
    () => { $crate::primitives::HNil };
    ($key:ty => $value:ty $(, $tkey:ty => $tvalue:ty)* $(,)?) => {
        $crate::primitives::HCons<
            $crate::map::Slot< <$key as $crate::key::Key>::Id, $value>,
            $crate::spec![$($tkey => $tvalue),*]
        >
    };
}

/// Build an `HMap` value, inferring value types: `hmap! { K0 => expr, .. }`.
///
/// ```
/// use typed_events::prelude::*;
///
/// let map = hmap! { key!("width") => 640u32, key!("title") => "demo" };
/// assert_eq!(*map.get::<key!("width"), _>(), 640);
/// ```
#[macro_export]
macro_rules! hmap {
    (@slots) => { $crate::primitives::HNil };
    (@slots $key:ty => $value:expr $(, $tkey:ty => $tvalue:expr)*) => {
        $crate::primitives::HCons::new(
            $crate::map::Slot::< <$key as $crate::key::Key>::Id, _>::new($value),
            $crate::hmap!(@slots $($tkey => $tvalue),*)
        )
    };
    ($($key:ty => $value:expr),* $(,)?) => {
        $crate::map::HMap::from_slots($crate::hmap!(@slots $($key => $value),*))
    };
}
