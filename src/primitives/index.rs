//! Peano numbers used as type-level slot indices.
//!
//! `Select<K, I>` is resolved by the compiler searching the spec list; the
//! index type `I` records where the search stopped and is always inferred.

use core::marker::PhantomData;

/// Peano number trait
pub trait Peano: 'static {
    /// The number as a constant.
    const VALUE: usize;
}

/// Zero (base case)
pub struct Z;
impl Peano for Z {
    const VALUE: usize = 0;
}

/// Successor (S<N> = N + 1)
pub struct S<N>(PhantomData<N>);
impl<N: Peano> Peano for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peano_values() {
        assert_eq!(Z::VALUE, 0);
        assert_eq!(<S<Z>>::VALUE, 1);
        assert_eq!(<S<S<S<Z>>>>::VALUE, 3);
    }
}
