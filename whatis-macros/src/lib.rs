//! `#[derive(Describe)]` for whatis.
//!
//! Generates a `Describe` impl that renders the type as a named leaf.
//! The namespace defaults to the module the type is defined in, with
//! `::` replaced by `.`.
//!
//! Attributes:
//! - `#[describe(namespace = "app.models")]` — fixed namespace
//! - `#[describe(name = "Item")]` — name other than the type's identifier
//! - `#[describe(crate = "::whatis_core")]` — path to the crate exporting
//!   `Describe` and `TypeDescriptor` (default `::whatis`)

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(describe), supports(struct_any, enum_any))]
struct DescribeArgs {
    ident: syn::Ident,
    generics: syn::Generics,
    #[darling(default)]
    namespace: Option<String>,
    #[darling(default)]
    name: Option<String>,
    #[darling(default, rename = "crate")]
    krate: Option<syn::Path>,
}

#[proc_macro_derive(Describe, attributes(describe))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match DescribeArgs::from_derive_input(&input) {
        Ok(args) => expand(args).into(),
        Err(err) => err.write_errors().into(),
    }
}

fn expand(args: DescribeArgs) -> TokenStream2 {
    let ident = &args.ident;
    let krate = args
        .krate
        .clone()
        .unwrap_or_else(|| syn::parse_quote!(::whatis));

    let namespace = match &args.namespace {
        Some(namespace) => quote!(#namespace),
        None => quote!(::std::module_path!().replace("::", ".")),
    };
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| ident.to_string());

    let (impl_generics, ty_generics, where_clause) = args.generics.split_for_impl();

    quote! {
        impl #impl_generics #krate::Describe for #ident #ty_generics #where_clause {
            fn type_descriptor() -> #krate::TypeDescriptor {
                #krate::TypeDescriptor::named(#namespace, #name)
            }
        }
    }
}
