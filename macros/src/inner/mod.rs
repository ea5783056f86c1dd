//! Internal building blocks
//!
//! - name_key: string literal -> packed `Name<LO, HI>` type

pub mod name_key;
