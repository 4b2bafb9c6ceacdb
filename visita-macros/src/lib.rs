//! Procedural macros for Visita.
//!
//! - `#[derive(Node)]` - implement `Node` and `NodeKind`, optionally with
//!   `#[node(extends = Parent, name = "Name")]`
//! - `#[visitor]` - build a `Visitor` from an inherent impl block

use proc_macro::TokenStream;

mod node;
mod visitor;

/// Derive macro for implementing the `Node` and `NodeKind` traits.
///
/// ```rust,ignore
/// #[derive(visita::Node)]
/// struct Animal;
///
/// #[derive(visita::Node)]
/// #[node(extends = Animal)]
/// struct Dog;
/// ```
#[proc_macro_derive(Node, attributes(node))]
pub fn derive_node(input: TokenStream) -> TokenStream {
    node::derive_node_impl(input)
}

/// Attribute macro for implementing `Visitor` from an inherent impl block.
///
/// Every `fn visit_<type>` becomes a handler for nodes whose chain contains
/// `<type>` (compared lower-cased). `generic_visit` is mandatory; the
/// argument and result types of the visitor are taken from its signature.
///
/// ```rust,ignore
/// struct Sounds;
///
/// #[visita::visitor]
/// impl Sounds {
///     fn visit_dog(&self, _node: &dyn Node) -> &'static str {
///         "bark"
///     }
///
///     fn generic_visit(&self, _node: &dyn Node) -> &'static str {
///         "generic"
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn visitor(attr: TokenStream, item: TokenStream) -> TokenStream {
    visitor::visitor_impl(attr, item)
}
