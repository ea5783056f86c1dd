//! Procedural macros for typed-events keys
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `key!("name")` | type position | Canonical key type for a string literal |
//! | `#[derive(Key)]` | unit struct | Declare a named key type |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Key)]
//! #[key(name = "window.resize")]
//! struct Resize;
//!
//! type Events = events![Resize, key!("close")];
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

/// Turn a string literal into its canonical key type.
///
/// The UTF-8 bytes are packed into the two `u128` parameters of
/// `typed_events::Name`, so equal literals expand to the same type.
///
/// # Usage
/// ```ignore
/// type Foo = key!("foo");
/// map.get::<key!("foo"), _>();
/// ```
///
/// Names are limited to 32 bytes and may not contain NUL.
#[proc_macro]
pub fn key(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::name_key::NameKeyInput);
    inner::name_key::expand_name_key(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// #[derive(Key)] implements `typed_events::Key` for a unit struct.
///
/// The key name defaults to the struct name in snake case
/// (`OnClick` -> `"on_click"`). Override it with `#[key(name = "...")]` or
/// the short form `#[key("...")]`.
#[proc_macro_derive(Key, attributes(key))]
pub fn derive_key(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_key(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
