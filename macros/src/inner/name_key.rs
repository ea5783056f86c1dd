use proc_macro2::{Literal, Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::LitStr;

/// Longest name that fits in the two packed words.
const MAX_NAME_LEN: usize = 32;

pub struct NameKeyInput {
    pub lit: LitStr,
}

impl Parse for NameKeyInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitStr = input.parse()?;
        // Allow a trailing comma, nothing else
        if input.peek(syn::Token![,]) {
            input.parse::<syn::Token![,]>()?;
        }
        Ok(NameKeyInput { lit })
    }
}

pub fn expand_name_key(input: NameKeyInput) -> syn::Result<TokenStream> {
    name_type(&input.lit.value(), input.lit.span())
}

/// `::typed_events::Name<LO, HI>` for `name`, or an error at `span` when
/// the name cannot be packed.
pub fn name_type(name: &str, span: Span) -> syn::Result<TokenStream> {
    let bytes = name.as_bytes();

    if bytes.len() > MAX_NAME_LEN {
        return Err(syn::Error::new(
            span,
            format!(
                "key name is {} bytes long; keys support at most {} bytes",
                bytes.len(),
                MAX_NAME_LEN
            ),
        ));
    }
    if bytes.contains(&0) {
        return Err(syn::Error::new(span, "key name may not contain NUL"));
    }

    let lo = Literal::u128_suffixed(pack_word(bytes, 0));
    let hi = Literal::u128_suffixed(pack_word(bytes, 16));

    Ok(quote! { ::typed_events::Name<#lo, #hi> })
}

/// Pack bytes [offset, offset+16) into a word, byte `i` at bits `i * 8`.
/// Must agree with `typed_events::primitives::const_utils::pack_bytes_u128`.
fn pack_word(bytes: &[u8], offset: usize) -> u128 {
    bytes
        .iter()
        .skip(offset)
        .take(16)
        .enumerate()
        .fold(0u128, |word, (i, b)| word | (u128::from(*b) << (i * 8)))
}
