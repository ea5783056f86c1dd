//! Runtime side table: event name to slot index.
//!
//! Built once from a fixed name list when a registry is constructed. It
//! stores indices only; callback storage is never duplicated. Static
//! registries index `&'static str` key names, [`DynRegistry`] owns its
//! names as `String`s.
//!
//! [`DynRegistry`]: super::DynRegistry

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::Hash;

#[cfg(feature = "std")]
use std::collections::HashMap;

/// Largest table searched by linear scan. Below this size a scan over
/// short names beats hashing the query.
pub const SCAN_LIMIT: usize = 16;

/// Lookup strategy chosen for a fixed name set.
#[derive(Debug, Clone)]
pub enum NameIndex<N = &'static str> {
    /// Names in slot order; the position is the index.
    Scan(Vec<N>),
    /// Names sorted for binary search, each with its slot index.
    Sorted(Vec<(N, usize)>),
    /// Hashed lookup.
    #[cfg(feature = "std")]
    Hashed(HashMap<N, usize>),
}

#[inline]
fn as_str<N: Borrow<str>>(name: &N) -> &str {
    <N as Borrow<str>>::borrow(name)
}

impl<N> NameIndex<N>
where
    N: Borrow<str> + Hash + Eq,
{
    /// Pick a strategy by size: scan up to [`SCAN_LIMIT`] names, otherwise
    /// hash (`std`) or binary search (`alloc` only).
    pub fn build<I>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        I::IntoIter: ExactSizeIterator,
    {
        let names = names.into_iter();
        if names.len() <= SCAN_LIMIT {
            return Self::scan(names);
        }

        #[cfg(feature = "std")]
        {
            Self::hashed(names)
        }

        #[cfg(not(feature = "std"))]
        {
            Self::sorted(names)
        }
    }

    pub fn scan(names: impl IntoIterator<Item = N>) -> Self {
        NameIndex::Scan(names.into_iter().collect())
    }

    pub fn sorted(names: impl IntoIterator<Item = N>) -> Self {
        let mut table: Vec<_> = names.into_iter().enumerate().map(|(i, name)| (name, i)).collect();
        table.sort_unstable_by(|a, b| as_str(&a.0).cmp(as_str(&b.0)));
        NameIndex::Sorted(table)
    }

    #[cfg(feature = "std")]
    pub fn hashed(names: impl IntoIterator<Item = N>) -> Self {
        NameIndex::Hashed(names.into_iter().enumerate().map(|(i, name)| (name, i)).collect())
    }

    /// Slot index for `name`, if it is part of the set.
    #[inline]
    pub fn get(&self, name: &str) -> Option<usize> {
        match self {
            NameIndex::Scan(names) => names.iter().position(|n| as_str(n) == name),
            NameIndex::Sorted(table) => table
                .binary_search_by(|(n, _)| as_str(n).cmp(name))
                .ok()
                .map(|i| table[i].1),
            #[cfg(feature = "std")]
            NameIndex::Hashed(map) => map.get(name).copied(),
        }
    }
}

impl<N> NameIndex<N> {
    pub fn len(&self) -> usize {
        match self {
            NameIndex::Scan(names) => names.len(),
            NameIndex::Sorted(table) => table.len(),
            #[cfg(feature = "std")]
            NameIndex::Hashed(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short label for logs.
    pub fn strategy(&self) -> &'static str {
        match self {
            NameIndex::Scan(_) => "scan",
            NameIndex::Sorted(_) => "sorted",
            #[cfg(feature = "std")]
            NameIndex::Hashed(_) => "hashed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    const NAMES: [&str; 4] = ["foo", "bar", "baz", "on_close"];

    fn many_names() -> Vec<&'static str> {
        const MANY: [&str; 20] = [
            "e00", "e01", "e02", "e03", "e04", "e05", "e06", "e07", "e08", "e09",
            "e10", "e11", "e12", "e13", "e14", "e15", "e16", "e17", "e18", "e19",
        ];
        MANY.to_vec()
    }

    fn assert_resolves(index: &NameIndex, names: &[&'static str]) {
        for (i, name) in names.iter().enumerate() {
            assert_eq!(index.get(name), Some(i), "{} via {}", name, index.strategy());
        }
        assert_eq!(index.get("qux"), None);
        assert_eq!(index.get(""), None);
        assert_eq!(index.len(), names.len());
    }

    #[test]
    fn test_scan() {
        assert_resolves(&NameIndex::scan(NAMES), &NAMES);
    }

    #[test]
    fn test_sorted() {
        assert_resolves(&NameIndex::sorted(NAMES), &NAMES);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_hashed() {
        assert_resolves(&NameIndex::hashed(NAMES), &NAMES);
    }

    #[test]
    fn test_build_small_uses_scan() {
        let index = NameIndex::build(NAMES);
        assert_eq!(index.strategy(), "scan");
        assert_resolves(&index, &NAMES);
    }

    #[test]
    fn test_build_large() {
        let names = many_names();
        let index = NameIndex::build(names.iter().copied());
        assert_ne!(index.strategy(), "scan");
        assert_resolves(&index, &names);
    }

    #[test]
    fn test_owned_names() {
        let owned: Vec<String> = many_names().into_iter().map(String::from).collect();
        let index = NameIndex::build(owned.clone());
        assert_ne!(index.strategy(), "scan");
        for (i, name) in owned.iter().enumerate() {
            assert_eq!(index.get(name), Some(i));
        }

        let sorted = NameIndex::sorted(owned.iter().cloned());
        assert_eq!(sorted.get("e07"), Some(7));
        assert_eq!(sorted.get("e20"), None);
    }

    #[test]
    fn test_empty() {
        let index = NameIndex::<&str>::build(core::iter::empty());
        assert!(index.is_empty());
        assert_eq!(index.get("foo"), None);
    }
}
