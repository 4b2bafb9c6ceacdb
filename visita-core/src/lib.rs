//! # visita-core
//!
//! Core traits for the Visita visitor dispatch library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! crates that define node types or visitors but do not need the runtime
//! registry from `visita-std`.
//!
//! # Building Blocks
//!
//! ## Nodes ([`Node`], [`NodeType`])
//!
//! A node reports a static [`NodeType`], which names the type and its parent.
//! The type and its ancestors, most-derived first and ending with [`OBJECT`],
//! form the type hierarchy chain.
//!
//! ## Visitors ([`Visitor`])
//!
//! A visitor declares type-specific handlers named `visit_<type>` and one
//! mandatory fallback, `generic_visit`. [`Visitor::visit`] walks the node's
//! chain and runs the first handler it finds, or the fallback.
//!
//! ## Visitees ([`Visitee`])
//!
//! Every node can `accept` a visitor, which is exactly `visitor.visit(node, ())`.
//!
//! # Error Types
//!
//! - [`VisitaError`] - Top-level error type
//! - [`VisitError`] - Dispatch errors
//! - [`RegistryError`] - Registry construction errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod naming;
mod node;
mod visitee;
mod visitor;

// Re-exports
pub use error::{BoxError, RegistryError, VisitError, VisitaError};
pub use naming::{FALLBACK_HANDLER, HANDLER_PREFIX, handler_name, is_handler_name};
pub use node::{AsNode, Chain, Node, NodeKind, NodeType, OBJECT};
pub use visitee::Visitee;
pub use visitor::{Dispatch, VisitFn, Visitor, resolve};
