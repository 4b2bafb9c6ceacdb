//! Node-related macros.
//!
//! This module contains:
//! - `#[derive(Node)]` - Derive macro implementing `Node` and `NodeKind`

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    DeriveInput, Ident, LitStr, Token, Type,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments of the `#[node(...)]` helper attribute.
#[derive(Default)]
pub(crate) struct NodeArgs {
    pub extends: Option<Type>,
    pub name: Option<String>,
}

impl Parse for NodeArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut extends = None;
        let mut name = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "extends" => {
                    let ty: Type = input.parse()?;
                    extends = Some(ty);
                }
                "name" => {
                    let lit: LitStr = input.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "node name must not be empty"));
                    }
                    name = Some(lit.value());
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(NodeArgs { extends, name })
    }
}

/// Implementation of `#[derive(Node)]`.
pub fn derive_node_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.generics,
            "Node cannot be derived for generic types: a node type has one static name",
        )
        .to_compile_error()
        .into();
    }

    let mut args = NodeArgs::default();
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("node")) {
        match attr.parse_args::<NodeArgs>() {
            Ok(parsed) => {
                args.extends = parsed.extends.or(args.extends);
                args.name = parsed.name.or(args.name);
            }
            Err(err) => return err.to_compile_error().into(),
        }
    }

    let type_name = args.name.unwrap_or_else(|| ident.to_string());
    let parent = match &args.extends {
        Some(parent) => quote! {
            ::core::option::Option::Some(<#parent as ::visita::NodeKind>::NODE_TYPE)
        },
        None => quote! { ::core::option::Option::None },
    };

    let expanded = quote! {
        impl ::visita::NodeKind for #ident {
            const NODE_TYPE: &'static ::visita::NodeType =
                &::visita::NodeType::new(#type_name, #parent);
        }

        impl ::visita::Node for #ident {
            fn node_type(&self) -> &'static ::visita::NodeType {
                <Self as ::visita::NodeKind>::NODE_TYPE
            }
        }
    };

    TokenStream::from(expanded)
}
