#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library and hashed side tables
// - alloc: enables the event registry in no_std
// - tracing: structured logs from the registry

//! # typed-events
//!
//! Named-event dispatch with compile-time and run-time lookup over one
//! storage, built on a statically typed heterogeneous map.
//!
//! ## Architecture
//!
//! ### 1. Keys
//! A key is a zero-sized type carrying a name. `key!("foo")` turns a string
//! literal into a canonical type (the bytes are packed into const generic
//! words), so the same literal names the same type everywhere.
//! `#[derive(Key)]` turns a unit struct into a key whose identity is that
//! same canonical type: keys are equal exactly when their names are.
//!
//! ```text
//! "foo" -> Name<0x6f6f66, 0> -> Key::NAME == "foo"
//! ```
//!
//! ### 2. Resolution
//! A map's shape is a type-level list of `Slot<K, V>` cells. Static access
//! names the key as a type; the compiler infers its position (a Peano
//! index) and the accessor becomes a field projection. Unknown keys fail to
//! type check.
//!
//! ### 3. Dual dispatch
//! The registry stores one callback list per event in a map. A name-to-index
//! side table built at construction serves run-time lookups against the
//! same lists. `DynRegistry` covers event sets only known at run time.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - const string utils, Peano indices, HNil/HCons, Key + Name      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Heterogeneous Map                                       |
//! |  - Slot, Select/Contains/Spec/Uniform, HMap, iterators            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Event Registry                                          |
//! |  - Callbacks, NameIndex side table, Registry, DynRegistry         |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Features
//!
//! - **Zero-cost static lookup**: slot positions are resolved during type
//!   checking, once per call site
//! - **Compile-time membership**: `HMap::<L>::contains::<K>()` is a `const fn`
//! - **Shared storage**: static and name-based dispatch touch the same lists
//! - **Fail closed**: unknown static keys do not compile, unknown names
//!   return an error
//!
//! ## Quick Start
//!
//! ```
//! use typed_events::prelude::*;
//!
//! #[derive(Key)]
//! struct Resize;
//!
//! let mut events = Registry::<events![Resize, key!("close")]>::new();
//! events.on::<Resize, _>(|| println!("resized"));
//! events.on_dyn("close", || println!("closing")).unwrap();
//!
//! events.trigger::<Resize, _>();
//! events.trigger_dyn("close").unwrap();
//! ```

// Allow `::typed_events` to work inside the crate itself
extern crate self as typed_events;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;
pub mod key;

// =============================================================================
// Layer 1: Heterogeneous Map
// =============================================================================
pub mod map;

// =============================================================================
// Layer 2: Event Registry
// =============================================================================
#[cfg(feature = "alloc")]
pub mod error;

#[cfg(feature = "alloc")]
pub mod registry;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use key::{Key, Name, name_of};
pub use map::{HMap, Slot, Select, Contains, Spec, Uniform, ValueOf};
pub use primitives::{HNil, HCons, Peano, Z, S};

#[cfg(feature = "alloc")]
pub use error::{Error, Result};
#[cfg(feature = "alloc")]
pub use registry::{Registry, DynRegistry, Callbacks, Callback, NameIndex};

// Re-export proc-macros
pub use macros::{key, Key};

/// Common items for maps and registries.
pub mod prelude {
    pub use crate::key::Key;
    pub use crate::map::HMap;
    pub use crate::{spec, hmap};
    #[cfg(feature = "alloc")]
    pub use crate::registry::{Registry, DynRegistry, Callbacks};
    #[cfg(feature = "alloc")]
    pub use crate::events;
    pub use macros::{key, Key};
}
