//! Heterogeneous list cells.
//!
//! A spec is a right-nested chain of `HCons` cells ending in `HNil`. Each
//! cell owns its head by value, so the whole list is one product type with
//! no indirection.

/// Empty HList
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HNil;

/// HList cons cell
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

impl<H, T> HCons<H, T> {
    /// Prepend `head` to `tail`.
    pub const fn new(head: H, tail: T) -> Self {
        HCons { head, tail }
    }
}
