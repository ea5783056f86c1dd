//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use syn::{
    parse::{Parse, ParseStream},
    Attribute, Ident, LitStr, Token,
};

// =============================================================================
// `#[key(..)]` attribute
// =============================================================================

/// Arguments of `#[key(name = "...")]` or the short form `#[key("...")]`.
pub struct KeyAttr {
    pub name: LitStr,
}

impl Parse for KeyAttr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(LitStr) {
            return Ok(KeyAttr { name: input.parse()? });
        }

        let ident: Ident = input.parse()?;
        if ident != "name" {
            return Err(syn::Error::new(ident.span(), "expected `name = \"...\"`"));
        }
        input.parse::<Token![=]>()?;
        Ok(KeyAttr { name: input.parse()? })
    }
}

/// Find and parse the single `#[key(..)]` attribute, if any.
pub fn parse_key_attr(attrs: &[Attribute]) -> syn::Result<Option<KeyAttr>> {
    let mut found = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("key")) {
        if found.is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
        }
        found = Some(attr.parse_args::<KeyAttr>()?);
    }
    Ok(found)
}

// =============================================================================
// Naming
// =============================================================================

/// `OnClick` -> `on_click`, `HTTPRequest` -> `http_request`.
pub fn to_snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                None | Some('_') => false,
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) => p.is_uppercase() && next.is_some_and(|n| n.is_lowercase()),
            };
            if boundary {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("Foo"), "foo");
        assert_eq!(to_snake_case("OnClick"), "on_click");
        assert_eq!(to_snake_case("HTTPRequest"), "http_request");
        assert_eq!(to_snake_case("Level2Up"), "level2_up");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("Raw_Name"), "raw_name");
    }

    #[test]
    fn test_key_attr_forms() {
        let long: KeyAttr = syn::parse_quote!(name = "window.resize");
        assert_eq!(long.name.value(), "window.resize");

        let short: KeyAttr = syn::parse_quote!("close");
        assert_eq!(short.name.value(), "close");
    }

    #[test]
    fn test_key_attr_rejects_other_idents() {
        let result = syn::parse_str::<KeyAttr>("label = \"x\"");
        assert!(result.is_err());
    }
}
