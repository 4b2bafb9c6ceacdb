//! # Visitor Dispatch
//!
//! A [`Visitor`] exposes a generic entry point, [`Visitor::visit`], plus a set
//! of type-specific handlers and one mandatory fallback,
//! [`Visitor::generic_visit`].
//!
//! # Resolution
//!
//! `visit` walks the node's type hierarchy chain from the most-derived type
//! out to `object`. For each type it derives the handler name
//! (`visit_<lower-cased type name>`) and asks the visitor for it. The first
//! match wins, so a handler for a subtype always beats one for an ancestor.
//! When nothing matches, `generic_visit` runs.
//!
//! The selected handler receives the node and the extra arguments exactly as
//! passed to `visit`, and its result is returned unchanged. Failures are the
//! handler's own business: a handler returning `Err` or panicking looks the
//! same to the caller as if the handler had been called directly.
//!
//! # Implementing
//!
//! `generic_visit` is a required trait method, so a visitor without a fallback
//! does not compile. Handlers are exposed through [`Visitor::handler`], usually
//! generated by the `#[visitor]` attribute macro:
//!
//! ```rust
//! use visita_core::{Node, NodeKind, NodeType, VisitFn, Visitor};
//!
//! struct Animal;
//! struct Dog;
//!
//! impl NodeKind for Animal {
//!     const NODE_TYPE: &'static NodeType = &NodeType::root("Animal");
//! }
//! impl Node for Animal {
//!     fn node_type(&self) -> &'static NodeType {
//!         Self::NODE_TYPE
//!     }
//! }
//! impl NodeKind for Dog {
//!     const NODE_TYPE: &'static NodeType = &NodeType::new("Dog", Some(Animal::NODE_TYPE));
//! }
//! impl Node for Dog {
//!     fn node_type(&self) -> &'static NodeType {
//!         Self::NODE_TYPE
//!     }
//! }
//!
//! struct Sounds;
//!
//! impl Sounds {
//!     fn visit_dog(&self, _node: &dyn Node, _args: ()) -> &'static str {
//!         "bark"
//!     }
//! }
//!
//! impl Visitor<(), &'static str> for Sounds {
//!     fn handler(&self, name: &str) -> Option<VisitFn<Self, (), &'static str>> {
//!         match name {
//!             "visit_dog" => Some(Sounds::visit_dog),
//!             _ => None,
//!         }
//!     }
//!
//!     fn generic_visit(&self, _node: &dyn Node, _args: ()) -> &'static str {
//!         "generic"
//!     }
//! }
//!
//! assert_eq!(Sounds.visit(&Dog, ()), "bark");
//! assert_eq!(Sounds.visit(&Animal, ()), "generic");
//! ```

use crate::{
    naming::FALLBACK_HANDLER,
    node::{Node, NodeType},
};
use std::fmt;

/// A type-specific handler on visitor `V`, taking extra arguments `A` and
/// producing `R`.
pub type VisitFn<V, A, R> = fn(&V, &dyn Node, A) -> R;

/// The outcome of handler resolution for one node type.
pub enum Dispatch<F> {
    /// A type-specific handler matched.
    Handler {
        /// The chain entry whose handler matched.
        matched: &'static NodeType,
        /// The handler itself.
        handler: F,
    },
    /// Nothing in the chain matched; the fallback runs.
    Fallback,
}

impl<F> Dispatch<F> {
    /// The chain entry that matched, `None` for the fallback.
    pub fn matched(&self) -> Option<&'static NodeType> {
        match self {
            Dispatch::Handler { matched, .. } => Some(*matched),
            Dispatch::Fallback => None,
        }
    }

    /// Whether resolution fell through to the fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Dispatch::Fallback)
    }

    /// Name of the operation that runs for this dispatch.
    pub fn handler_name(&self) -> String {
        match self {
            Dispatch::Handler { matched, .. } => matched.handler_name(),
            Dispatch::Fallback => FALLBACK_HANDLER.to_string(),
        }
    }

    /// Transform the handler, keeping the resolution.
    pub fn map<G>(self, f: impl FnOnce(F) -> G) -> Dispatch<G> {
        match self {
            Dispatch::Handler { matched, handler } => Dispatch::Handler {
                matched,
                handler: f(handler),
            },
            Dispatch::Fallback => Dispatch::Fallback,
        }
    }
}

impl<F> fmt::Debug for Dispatch<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatch::Handler { matched, .. } => f
                .debug_struct("Handler")
                .field("matched", &matched.name())
                .finish_non_exhaustive(),
            Dispatch::Fallback => f.write_str("Fallback"),
        }
    }
}

/// Walk `node_type`'s chain and return the first handler `lookup` knows.
///
/// `lookup` receives derived handler names, most-derived type first. This is
/// the single resolution routine shared by trait-based visitors and runtime
/// registries.
pub fn resolve<F>(
    node_type: &'static NodeType,
    mut lookup: impl FnMut(&str) -> Option<F>,
) -> Dispatch<F> {
    for matched in node_type.chain() {
        if let Some(handler) = lookup(&matched.handler_name()) {
            return Dispatch::Handler { matched, handler };
        }
    }
    Dispatch::Fallback
}

/// A visitor over nodes, taking extra arguments `A` and producing `R`.
///
/// Extra positional or keyword arguments travel as the single value `A`
/// (typically a tuple or a small struct) and are forwarded to the resolved
/// handler verbatim.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot visit nodes with arguments `{A}` producing `{R}`",
    label = "missing `Visitor<{A}, {R}>` implementation",
    note = "Implement `generic_visit`, or annotate an inherent impl block with `#[visita::visitor]`."
)]
pub trait Visitor<A = (), R = ()> {
    /// The type-specific handler declared under `name`, if any.
    ///
    /// `name` is a derived handler name such as `visit_dog`.
    fn handler(&self, name: &str) -> Option<VisitFn<Self, A, R>> {
        let _ = name;
        None
    }

    /// The fallback, called when no type in the node's chain has a handler.
    fn generic_visit(&self, node: &dyn Node, args: A) -> R;

    /// Resolve the handler for `node_type`.
    ///
    /// Visitors that override [`visit`](Visitor::visit) with their own lookup
    /// override this too, so that `dispatch`, `matched_type` and `visit` agree.
    fn dispatch(&self, node_type: &'static NodeType) -> Dispatch<VisitFn<Self, A, R>> {
        resolve(node_type, |name| self.handler(name))
    }

    /// The chain entry whose handler `visit` would run, `None` for the fallback.
    fn matched_type(&self, node_type: &'static NodeType) -> Option<&'static NodeType> {
        self.dispatch(node_type).matched()
    }

    /// Visit `node`, forwarding `args` to the resolved handler.
    fn visit(&self, node: &dyn Node, args: A) -> R {
        match self.dispatch(node.node_type()) {
            Dispatch::Handler { handler, .. } => handler(self, node, args),
            Dispatch::Fallback => self.generic_visit(node, args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeKind, OBJECT};
    use std::cell::RefCell;

    struct Animal;
    struct Dog;
    struct Puppy;

    impl NodeKind for Animal {
        const NODE_TYPE: &'static NodeType = &NodeType::root("Animal");
    }
    impl Node for Animal {
        fn node_type(&self) -> &'static NodeType {
            Self::NODE_TYPE
        }
    }
    impl NodeKind for Dog {
        const NODE_TYPE: &'static NodeType = &NodeType::new("Dog", Some(Animal::NODE_TYPE));
    }
    impl Node for Dog {
        fn node_type(&self) -> &'static NodeType {
            Self::NODE_TYPE
        }
    }
    impl NodeKind for Puppy {
        const NODE_TYPE: &'static NodeType = &NodeType::new("Puppy", Some(Dog::NODE_TYPE));
    }
    impl Node for Puppy {
        fn node_type(&self) -> &'static NodeType {
            Self::NODE_TYPE
        }
    }

    /// Handles both `Animal` and `Dog`, and records every lookup it is asked for.
    #[derive(Default)]
    struct Zoo {
        lookups: RefCell<Vec<String>>,
    }

    impl Zoo {
        fn visit_animal(&self, _node: &dyn Node, _args: ()) -> String {
            "animal".into()
        }

        fn visit_dog(&self, _node: &dyn Node, _args: ()) -> String {
            "dog".into()
        }
    }

    impl Visitor<(), String> for Zoo {
        fn handler(&self, name: &str) -> Option<VisitFn<Self, (), String>> {
            self.lookups.borrow_mut().push(name.to_string());
            match name {
                "visit_animal" => Some(Zoo::visit_animal),
                "visit_dog" => Some(Zoo::visit_dog),
                _ => None,
            }
        }

        fn generic_visit(&self, node: &dyn Node, _args: ()) -> String {
            format!("generic:{}", node.type_name())
        }
    }

    #[test]
    fn test_most_specific_wins() {
        let zoo = Zoo::default();
        assert_eq!(zoo.visit(&Dog, ()), "dog");
        assert_eq!(*zoo.lookups.borrow(), ["visit_dog"]);
    }

    #[test]
    fn test_subtype_inherits_ancestor_handler() {
        let zoo = Zoo::default();
        assert_eq!(zoo.visit(&Puppy, ()), "dog");
        assert_eq!(*zoo.lookups.borrow(), ["visit_puppy", "visit_dog"]);
    }

    #[test]
    fn test_fallback_after_full_chain() {
        let zoo = Zoo::default();
        assert_eq!(zoo.visit(&1_u8, ()), "generic:u8");
        assert_eq!(*zoo.lookups.borrow(), ["visit_u8", "visit_object"]);
    }

    #[test]
    fn test_dispatch_reports_match() {
        let zoo = Zoo::default();
        let dispatch = zoo.dispatch(Puppy::NODE_TYPE);
        assert_eq!(dispatch.matched().map(NodeType::name), Some("Dog"));
        assert_eq!(dispatch.handler_name(), "visit_dog");
        assert!(!dispatch.is_fallback());

        let dispatch = zoo.dispatch(&OBJECT);
        assert!(dispatch.is_fallback());
        assert_eq!(dispatch.handler_name(), FALLBACK_HANDLER);
        assert_eq!(format!("{:?}", dispatch), "Fallback");
    }

    #[test]
    fn test_matched_type() {
        let zoo = Zoo::default();
        assert_eq!(zoo.matched_type(Animal::NODE_TYPE), Some(Animal::NODE_TYPE));
        assert_eq!(zoo.matched_type(<i64 as NodeKind>::NODE_TYPE), None);
    }

    #[test]
    fn test_resolve_with_plain_lookup() {
        let dispatch = resolve(Puppy::NODE_TYPE, |name| (name == "visit_object").then_some(7));
        assert_eq!(dispatch.matched(), Some(&OBJECT));
        assert_eq!(dispatch.map(|n| n * 6).handler_name(), "visit_object");
    }

    struct FallbackOnly;

    impl Visitor<(i32, &'static str), (&'static str, i32, &'static str)> for FallbackOnly {
        fn generic_visit(
            &self,
            node: &dyn Node,
            (n, key): (i32, &'static str),
        ) -> (&'static str, i32, &'static str) {
            (node.type_name(), n, key)
        }
    }

    #[test]
    fn test_fallback_only_forwards_args() {
        assert_eq!(FallbackOnly.visit(&Dog, (3, "x")), ("Dog", 3, "x"));
        assert_eq!(FallbackOnly.visit(&'c', (0, "")), ("char", 0, ""));
    }
}
