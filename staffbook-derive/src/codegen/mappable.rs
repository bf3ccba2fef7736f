//! `#[derive(Mappable)]`: one `Field` accessor per named field.

use crate::attribute_parser::parse_mapper_options;
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields};

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Mappable cannot be derived for generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Mappable only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Mappable can only be derived for structs",
            ));
        }
    };

    let mut accessors = Vec::with_capacity(fields.len());
    for field in fields {
        let options = parse_mapper_options(&field.attrs)?;
        if options.skip {
            continue;
        }

        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let ty = &field.ty;
        let field_name = options
            .rename
            .unwrap_or_else(|| ident.unraw().to_string());

        let getter = if options.write_only {
            quote! { ::std::option::Option::None }
        } else {
            quote! {
                ::std::option::Option::Some(|source: &#name| {
                    ::staffbook::mapping::MapValue::to_value(&source.#ident)
                })
            }
        };

        let setter = if options.read_only {
            quote! { ::std::option::Option::None }
        } else {
            quote! {
                ::std::option::Option::Some(
                    |target: &mut #name, value: ::staffbook::mapping::FieldValue| {
                        match <#ty as ::staffbook::mapping::MapValue>::from_value(value) {
                            ::std::option::Option::Some(converted) => {
                                target.#ident = converted;
                                true
                            }
                            ::std::option::Option::None => false,
                        }
                    },
                )
            }
        };

        accessors.push(quote! {
            ::staffbook::mapping::Field::<#name>::new(
                #field_name,
                <#ty as ::staffbook::mapping::MapValue>::field_type(),
                #getter,
                #setter,
            )
        });
    }

    Ok(quote! {
        impl ::staffbook::mapping::Mappable for #name {
            fn fields() -> ::std::vec::Vec<::staffbook::mapping::Field<Self>> {
                ::std::vec![#(#accessors),*]
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_expands_accessor_per_field() {
        let input: DeriveInput = parse_quote! {
            struct EmployeePatch {
                name: Option<String>,
                #[mapper(skip)]
                internal: u8,
                #[mapper(rename = "email")]
                mail: Option<String>,
            }
        };
        let expanded = expand(&input).unwrap().to_string();
        assert!(expanded.contains("\"name\""));
        assert!(expanded.contains("\"email\""));
        assert!(!expanded.contains("internal"));
        assert!(!expanded.contains("\"mail\""));
    }

    #[test]
    fn test_read_only_field_has_no_setter() {
        let input: DeriveInput = parse_quote! {
            struct Entity {
                #[mapper(read_only)]
                id: i32,
            }
        };
        let expanded = expand(&input).unwrap().to_string();
        assert!(!expanded.contains("from_value"));
        assert!(expanded.contains("to_value"));
    }

    #[test]
    fn test_raw_identifiers_are_unescaped() {
        let input: DeriveInput = parse_quote! {
            struct Token {
                r#type: String,
            }
        };
        let expanded = expand(&input).unwrap().to_string();
        assert!(expanded.contains("\"type\""));
    }

    #[test]
    fn test_rejects_tuple_structs_and_enums() {
        let tuple: DeriveInput = parse_quote! { struct Pair(i32, i32); };
        assert!(expand(&tuple).is_err());

        let enumeration: DeriveInput = parse_quote! { enum Role { User } };
        assert!(expand(&enumeration).is_err());

        let generic: DeriveInput = parse_quote! { struct Wrapper<T> { inner: T } };
        assert!(expand(&generic).is_err());
    }
}
