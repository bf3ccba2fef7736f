use syn::parse::Parser;
use syn::{Lit, Meta, punctuated::Punctuated, token::Comma};

/// Options collected from `#[mapper(...)]` on a field or enum variant.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct MapperOptions {
    pub(crate) skip: bool,
    pub(crate) read_only: bool,
    pub(crate) write_only: bool,
    pub(crate) rename: Option<String>,
}

/// Parses every `#[mapper(...)]` attribute in `attrs`.
///
/// Accepted items: `skip`, `read_only`, `write_only`, `rename = "name"`.
pub(crate) fn parse_mapper_options(attrs: &[syn::Attribute]) -> syn::Result<MapperOptions> {
    let mut options = MapperOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("mapper") {
            continue;
        }
        let Meta::List(meta_list) = &attr.meta else {
            return Err(syn::Error::new_spanned(
                attr,
                "expected #[mapper(...)] with a list of options",
            ));
        };
        let metas = Punctuated::<Meta, Comma>::parse_terminated.parse2(meta_list.tokens.clone())?;

        for item in metas {
            match &item {
                Meta::Path(path) if path.is_ident("skip") => options.skip = true,
                Meta::Path(path) if path.is_ident("read_only") => options.read_only = true,
                Meta::Path(path) if path.is_ident("write_only") => options.write_only = true,
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    if let syn::Expr::Lit(expr_lit) = &nv.value
                        && let Lit::Str(s) = &expr_lit.lit
                    {
                        options.rename = Some(s.value());
                    } else {
                        return Err(syn::Error::new_spanned(
                            &nv.value,
                            "rename expects a string literal",
                        ));
                    }
                }
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "unknown mapper option, expected one of: skip, read_only, write_only, rename",
                    ));
                }
            }
        }
    }

    if options.read_only && options.write_only {
        return Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "a field cannot be both read_only and write_only; use skip instead",
        ));
    }

    Ok(options)
}

/// Integer representation named by `#[repr(...)]`.
///
/// Returns the `ValueKind` variant name and the integer type discriminants are
/// cast through. Without a repr the kind is `I32` and the cast goes through
/// `isize`, the compiler's default discriminant type.
pub(crate) fn enum_repr_kind(
    attrs: &[syn::Attribute],
) -> syn::Result<(&'static str, &'static str)> {
    let mut kind = ("I32", "isize");
    for attr in attrs {
        if !attr.path().is_ident("repr") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            let found = [
                ("i8", "I8"),
                ("i16", "I16"),
                ("i32", "I32"),
                ("i64", "I64"),
                ("u8", "U8"),
                ("u16", "U16"),
                ("u32", "U32"),
                ("u64", "U64"),
            ]
            .into_iter()
            .find(|(repr, _)| meta.path.is_ident(repr));
            match found {
                Some((repr, variant)) => {
                    kind = (variant, repr);
                    Ok(())
                }
                None if meta.path.is_ident("C") => Ok(()),
                None => Err(meta.error("MapEnum supports integer reprs up to 64 bits")),
            }
        })?;
    }
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_flags_and_rename() {
        let field: syn::Field = parse_quote! {
            #[mapper(read_only, rename = "IdEmployee")]
            pub id: i32
        };
        let options = parse_mapper_options(&field.attrs).unwrap();
        assert!(options.read_only);
        assert!(!options.skip);
        assert_eq!(options.rename.as_deref(), Some("IdEmployee"));
    }

    #[test]
    fn test_other_attributes_are_ignored() {
        let field: syn::Field = parse_quote! {
            #[sea_orm(primary_key)]
            #[serde(default)]
            pub id: i32
        };
        assert_eq!(
            parse_mapper_options(&field.attrs).unwrap(),
            MapperOptions::default()
        );
    }

    #[test]
    fn test_conflicting_flags_are_rejected() {
        let field: syn::Field = parse_quote! {
            #[mapper(read_only, write_only)]
            pub id: i32
        };
        assert!(parse_mapper_options(&field.attrs).is_err());
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let field: syn::Field = parse_quote! {
            #[mapper(ignore)]
            pub id: i32
        };
        let err = parse_mapper_options(&field.attrs).unwrap_err();
        assert!(err.to_string().contains("unknown mapper option"));
    }

    #[test]
    fn test_enum_repr_kind() {
        let input: syn::DeriveInput = parse_quote! {
            #[derive(Clone)]
            #[repr(u8)]
            enum Role { User, Admin }
        };
        assert_eq!(enum_repr_kind(&input.attrs).unwrap(), ("U8", "u8"));

        let plain: syn::DeriveInput = parse_quote! { enum Role { User } };
        assert_eq!(enum_repr_kind(&plain.attrs).unwrap(), ("I32", "isize"));

        let wide: syn::DeriveInput = parse_quote! {
            #[repr(u64)]
            enum Big { A = 0, B = 18446744073709551615 }
        };
        assert_eq!(enum_repr_kind(&wide.attrs).unwrap(), ("U64", "u64"));
    }
}
