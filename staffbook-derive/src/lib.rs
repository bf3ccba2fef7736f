//! Derive macros for `staffbook::mapping`.
//!
//! - `#[derive(Mappable)]` on a struct with named fields exposes every field to the
//!   mapper. Field options: `#[mapper(skip)]`, `#[mapper(read_only)]`,
//!   `#[mapper(write_only)]`, `#[mapper(rename = "name")]`.
//! - `#[derive(MapEnum)]` on a fieldless enum records its members and `#[repr]`
//!   so values can be converted from names and numeric codes.

mod attribute_parser;
mod codegen;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

#[proc_macro_derive(Mappable, attributes(mapper))]
pub fn derive_mappable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    codegen::mappable::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[proc_macro_derive(MapEnum, attributes(mapper))]
pub fn derive_map_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    codegen::map_enum::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
