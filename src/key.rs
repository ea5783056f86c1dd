//! Key identities.
//!
//! A key is a zero-sized type carrying a name. Every key resolves to one
//! canonical [`Name`] type ([`Key::Id`]) spelling that name, and maps store
//! and match keys by that type. Two keys with the same name are therefore
//! the same key for every operation: static access, `contains` and runtime
//! lookup.

use core::marker::PhantomData;

use crate::primitives::const_utils::{self, MAX_NAME_LEN};

/// Key Trait
///
/// Implemented by `#[derive(Key)]` unit structs and by the string-literal
/// keys produced by `key!("...")`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a key",
    label = "expected a key type here",
    note = "Use `key!(\"name\")` or `#[derive(Key)]` on a unit struct."
)]
pub trait Key: 'static {
    /// Name used for runtime lookup, unique within one map.
    const NAME: &'static str;

    /// Canonical identity: `Name<LO, HI>` packing [`Key::NAME`].
    ///
    /// `key!` and `#[derive(Key)]` fill this in. A hand-written impl must
    /// use the `Name` type of its own `NAME`.
    type Id: Key;
}

/// Key named by a string literal of at most 32 bytes.
///
/// The name is packed into two words (`LO` holds bytes 0..16, `HI` bytes
/// 16..32), so equal literals produce the same type wherever they are
/// written. Spell it with `key!("foo")` rather than by hand.
pub struct Name<const LO: u128, const HI: u128>(PhantomData<()>);

impl<const LO: u128, const HI: u128> Name<LO, HI> {
    const BYTES: &'static [u8; MAX_NAME_LEN] = &const_utils::unpack_name(LO, HI);
}

impl<const LO: u128, const HI: u128> Key for Name<LO, HI> {
    const NAME: &'static str = const_utils::packed_str(Self::BYTES);
    type Id = Self;
}

impl<const LO: u128, const HI: u128> Default for Name<LO, HI> {
    fn default() -> Self { Name(PhantomData) }
}

impl<const LO: u128, const HI: u128> Clone for Name<LO, HI> {
    fn clone(&self) -> Self { *self }
}

impl<const LO: u128, const HI: u128> Copy for Name<LO, HI> {}

impl<const LO: u128, const HI: u128> core::fmt::Debug for Name<LO, HI> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "key!({:?})", Self::NAME)
    }
}

/// Name of a key, usable where a value is more convenient than a turbofish.
pub const fn name_of<K: Key>() -> &'static str {
    K::NAME
}
