//! # visita - Visitor Dispatch by Type Hierarchy
//!
//! `visita` routes a call on a node to a handler chosen by the node's runtime
//! type. Each node type declares its parent, and the type plus its ancestors
//! form the type hierarchy chain. A visitor declares handlers named
//! `visit_<lower-cased type name>` and one mandatory fallback,
//! `generic_visit`. [`Visitor::visit`] runs the handler of the most-derived
//! type in the chain that has one, or the fallback.
//!
//! ## Quick Start (Static Path - Recommended)
//!
//! ```rust,ignore
//! use visita::prelude::*;
//!
//! #[derive(Node)]
//! struct Animal;
//!
//! #[derive(Node)]
//! #[node(extends = Animal)]
//! struct Dog;
//!
//! struct Sounds;
//!
//! #[visita::visitor]
//! impl Sounds {
//!     fn visit_dog(&self, _node: &dyn Node) -> &'static str {
//!         "bark"
//!     }
//!
//!     fn generic_visit(&self, _node: &dyn Node) -> &'static str {
//!         "generic"
//!     }
//! }
//!
//! assert_eq!(Sounds.visit(&Dog, ()), "bark");
//! assert_eq!(Animal.accept(&Sounds), "generic");
//! ```
//!
//! ## Dynamic Path
//!
//! When handlers are only known at setup time, build a
//! [`Registry`](dynamic::Registry) instead. It resolves in the same
//! most-specific-first order.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use visita_core::{
    // Node model
    AsNode,
    // Error types
    BoxError,
    Chain,
    // Visitor
    Dispatch,
    // Naming
    FALLBACK_HANDLER,
    HANDLER_PREFIX,
    Node,
    NodeKind,
    NodeType,
    OBJECT,
    RegistryError,
    VisitError,
    VisitFn,
    Visitee,
    VisitaError,
    Visitor,
    handler_name,
    is_handler_name,
    resolve,
};

/// Dynamic dispatch support module.
pub mod dynamic {
    pub use visita_std::dynamic::{BoxHandler, Registry, RegistryBuilder, RegistryVisitor};
}

/// Standard visitor wrappers.
pub mod hooks {
    pub use visita_std::hooks::{LoggingVisitor, TracingVisitor};
}

/// Testing utilities.
pub mod testing {
    pub use visita_std::testing::{CountingVisitor, Probe, RecordingVisitor};
}

/// Prelude module - common imports for Visita.
///
/// # Usage
///
/// ```rust,ignore
/// use visita::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Core traits
        Node,
        NodeKind,
        NodeType,
        VisitFn,
        Visitee,
        Visitor,
        // Dynamic
        dynamic::{Registry, RegistryVisitor},
    };

    #[cfg(feature = "macros")]
    pub use crate::visitor;
}

#[cfg(feature = "macros")]
pub use visita_macros::{Node, visitor};
