//! Dynamic dispatch support.
//!
//! This module provides a runtime-populated handler registry.
//! Use when the set of handled node types is decided at setup time (plugins,
//! config-driven handlers) rather than written as visitor methods.

pub mod registry;

pub use registry::{BoxHandler, Registry, RegistryBuilder, RegistryVisitor};
