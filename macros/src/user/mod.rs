//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Key)]` | on struct | Define a named key |

pub mod derive_key;

pub use derive_key::expand_derive_key;
