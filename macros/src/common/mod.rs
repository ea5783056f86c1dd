// Common utilities shared between internal and user-facing macros
//
// This module contains:
// - parse_utils: attribute parsing and name helpers

mod parse_utils;

pub use parse_utils::*;
