use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::common::{parse_key_attr, to_snake_case};
use crate::inner::name_key::name_type;

/// #[derive(Key)] implements `Key` with a fixed name.
///
/// Keys are markers: only field-less structs and enums are accepted, and
/// generics are rejected since every key must be one concrete `'static`
/// type. The name is packed into the `Id` type the same way `key!` packs
/// literals, so it shares the 32-byte limit.
pub fn expand_derive_key(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(Key)] does not support generic types",
        ));
    }

    match &input.data {
        Data::Struct(data) if matches!(data.fields, Fields::Unit) => {}
        Data::Struct(data) if data.fields.is_empty() => {}
        Data::Enum(data) if data.variants.is_empty() => {}
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "#[derive(Key)] expects a unit struct or an empty enum",
            ));
        }
    }

    let (name, span) = match parse_key_attr(&input.attrs)? {
        Some(attr) => (attr.name.value(), attr.name.span()),
        None => (to_snake_case(&ident.to_string()), ident.span()),
    };
    let id = name_type(&name, span)?;

    Ok(quote! {
        impl ::typed_events::Key for #ident {
            const NAME: &'static str = #name;
            type Id = #id;
        }
    })
}
