//! Visitor-related macros.
//!
//! This module contains:
//! - `#[visitor]` - Attribute macro turning an inherent impl block with
//!   `visit_*` methods and a `generic_visit` fallback into a `Visitor`

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    FnArg, ImplItem, ImplItemFn, ItemImpl, LitStr, ReturnType, Signature, Type, parse_macro_input,
    parse_quote,
};

const HANDLER_PREFIX: &str = "visit_";
const FALLBACK_HANDLER: &str = "generic_visit";

/// Shape of a handler or fallback method: `(&self, node)` or `(&self, node, args)`.
struct HandlerSig {
    args: Option<Type>,
}

impl HandlerSig {
    fn parse(sig: &Signature) -> syn::Result<Self> {
        if let Some(asyncness) = &sig.asyncness {
            return Err(syn::Error::new_spanned(
                asyncness,
                "visitor handlers must not be async",
            ));
        }
        if !sig.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &sig.generics,
                "visitor handlers must not be generic",
            ));
        }

        match sig.inputs.first() {
            Some(FnArg::Receiver(receiver))
                if receiver.reference.is_some() && receiver.mutability.is_none() => {}
            _ => {
                return Err(syn::Error::new_spanned(
                    &sig.ident,
                    "visitor handlers must take `&self`",
                ));
            }
        }

        match sig.inputs.len() {
            2 => Ok(HandlerSig { args: None }),
            3 => match sig.inputs.last() {
                Some(FnArg::Typed(pat_type)) => Ok(HandlerSig {
                    args: Some((*pat_type.ty).clone()),
                }),
                other => Err(syn::Error::new_spanned(
                    other,
                    "expected a typed argument after the node",
                )),
            },
            _ => Err(syn::Error::new_spanned(
                &sig.inputs,
                "expected `(&self, node: &dyn Node)` or `(&self, node: &dyn Node, args: A)`",
            )),
        }
    }
}

/// Implementation of the `#[visitor]` attribute macro.
pub fn visitor_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(Span::call_site(), "#[visitor] takes no arguments")
            .to_compile_error()
            .into();
    }

    let input = parse_macro_input!(item as ItemImpl);

    if let Some((_, path, _)) = &input.trait_ {
        return syn::Error::new_spanned(
            path,
            "#[visitor] must be applied to an inherent impl block",
        )
        .to_compile_error()
        .into();
    }

    let self_ty = &input.self_ty;
    let (impl_generics, _, where_clause) = input.generics.split_for_impl();

    let methods: Vec<&ImplItemFn> = input
        .items
        .iter()
        .filter_map(|item| match item {
            ImplItem::Fn(method) => Some(method),
            _ => None,
        })
        .collect();

    let Some(fallback) = methods
        .iter()
        .find(|method| method.sig.ident == FALLBACK_HANDLER)
    else {
        return syn::Error::new_spanned(
            self_ty,
            "visitor must define `generic_visit(&self, node: &dyn Node, args: A) -> R`",
        )
        .to_compile_error()
        .into();
    };

    let fallback_sig = match HandlerSig::parse(&fallback.sig) {
        Ok(sig) => sig,
        Err(err) => return err.to_compile_error().into(),
    };
    let args_ty: Type = fallback_sig.args.clone().unwrap_or_else(|| parse_quote!(()));
    let output_ty: Type = match &fallback.sig.output {
        ReturnType::Default => parse_quote!(()),
        ReturnType::Type(_, ty) => (**ty).clone(),
    };

    let fallback_call = if fallback_sig.args.is_some() {
        quote! { <#self_ty>::generic_visit(self, node, args) }
    } else {
        quote! {{
            let _ = args;
            <#self_ty>::generic_visit(self, node)
        }}
    };

    let mut arms = Vec::new();
    for method in &methods {
        let ident = &method.sig.ident;
        let name = ident.to_string();
        let Some(type_part) = name.strip_prefix(HANDLER_PREFIX) else {
            continue;
        };
        if type_part.is_empty() {
            continue;
        }
        if type_part.to_lowercase() != type_part {
            return syn::Error::new_spanned(
                ident,
                format!(
                    "handler names are lower-cased type names: rename to `{}{}`",
                    HANDLER_PREFIX,
                    type_part.to_lowercase()
                ),
            )
            .to_compile_error()
            .into();
        }

        let sig = match HandlerSig::parse(&method.sig) {
            Ok(sig) => sig,
            Err(err) => return err.to_compile_error().into(),
        };
        let call = if sig.args.is_some() {
            quote! { <#self_ty>::#ident(visitor, node, args) }
        } else {
            quote! {{
                let _ = args;
                <#self_ty>::#ident(visitor, node)
            }}
        };
        let name_lit = LitStr::new(&name, ident.span());

        arms.push(quote! {
            #name_lit => {
                let handler: ::visita::VisitFn<Self, #args_ty, #output_ty> =
                    |visitor, node, args| #call;
                ::core::option::Option::Some(handler)
            }
        });
    }

    let expanded = quote! {
        #input

        impl #impl_generics ::visita::Visitor<#args_ty, #output_ty> for #self_ty #where_clause {
            fn handler(
                &self,
                name: &str,
            ) -> ::core::option::Option<::visita::VisitFn<Self, #args_ty, #output_ty>> {
                match name {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn generic_visit(
                &self,
                node: &dyn ::visita::Node,
                args: #args_ty,
            ) -> #output_ty {
                #fallback_call
            }
        }
    };

    TokenStream::from(expanded)
}
