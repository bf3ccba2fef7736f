//! `#[derive(MapEnum)]`: static member table plus `MapValue` for fieldless enums.

use crate::attribute_parser::{enum_repr_kind, parse_mapper_options};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields};

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "MapEnum cannot be derived for generic enums",
        ));
    }

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "MapEnum can only be derived for enums",
        ));
    };
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            input,
            "MapEnum requires at least one variant",
        ));
    }

    let (repr_kind, repr_type) = enum_repr_kind(&input.attrs)?;
    let repr = format_ident!("{}", repr_kind);
    let cast = format_ident!("{}", repr_type);
    let type_name = name.to_string();

    let mut variants = Vec::with_capacity(data.variants.len());
    let mut member_names = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "MapEnum only supports fieldless variants",
            ));
        }
        let options = parse_mapper_options(&variant.attrs)?;
        variants.push(&variant.ident);
        member_names.push(options.rename.unwrap_or_else(|| variant.ident.to_string()));
    }

    Ok(quote! {
        impl ::staffbook::mapping::MapEnum for #name {
            fn enum_info() -> &'static ::staffbook::mapping::EnumInfo {
                static INFO: ::staffbook::mapping::EnumInfo = ::staffbook::mapping::EnumInfo {
                    name: #type_name,
                    repr: ::staffbook::mapping::ValueKind::#repr,
                    variants: &[#((#member_names, #name::#variants as #cast as i128)),*],
                };
                &INFO
            }
        }

        impl ::staffbook::mapping::MapValue for #name {
            fn field_type() -> ::staffbook::mapping::FieldType {
                ::staffbook::mapping::FieldType::required(::staffbook::mapping::ValueKind::Enum(
                    <Self as ::staffbook::mapping::MapEnum>::enum_info(),
                ))
            }

            fn to_value(&self) -> ::staffbook::mapping::FieldValue {
                let discriminant = match self {
                    #(Self::#variants => #name::#variants as #cast as i128,)*
                };
                ::staffbook::mapping::FieldValue::Enum(::staffbook::mapping::EnumValue {
                    info: <Self as ::staffbook::mapping::MapEnum>::enum_info(),
                    discriminant,
                })
            }

            fn from_value(value: ::staffbook::mapping::FieldValue) -> ::std::option::Option<Self> {
                let ::staffbook::mapping::FieldValue::Enum(member) = value else {
                    return ::std::option::Option::None;
                };
                if member.info != <Self as ::staffbook::mapping::MapEnum>::enum_info() {
                    return ::std::option::Option::None;
                }
                #(
                    if member.discriminant == #name::#variants as #cast as i128 {
                        return ::std::option::Option::Some(Self::#variants);
                    }
                )*
                ::std::option::Option::None
            }
        }
    })
}
