//! # Layer 0: Primitives
//!
//! Basic building blocks for keys and maps:
//! - `const_utils.rs`: const string comparison and name packing.
//! - `index.rs`: Peano numbers marking slot positions.
//! - `hlist.rs`: heterogeneous list cells (`HNil`, `HCons`).

pub mod const_utils;
pub mod index;
pub mod hlist;

// Re-export key types at this level
pub use index::{Peano, Z, S};
pub use hlist::{HNil, HCons};
