//! Error types for Visita.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`VisitaError`] - Top-level error type
//! - [`VisitError`] - Errors during dispatch
//! - [`RegistryError`] - Errors while building a handler registry
//!
//! Handler failures are never wrapped in these types; a handler's error is
//! part of its own return value and reaches the caller untouched.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Visita operations.
#[derive(Error, Debug)]
pub enum VisitaError {
    /// An error occurred during dispatch.
    #[error("visit error: {0}")]
    Visit(#[from] VisitError),

    /// An error occurred while building a registry.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur during dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VisitError {
    /// No handler matched the node's chain and no fallback was available.
    #[error("no handler resolvable for node type `{node_type}`")]
    NoHandler {
        /// The most-derived type of the visited node.
        node_type: &'static str,
    },
}

/// Errors that can occur while building a handler registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two handlers were registered under the same name.
    #[error("handler already registered: {0}")]
    DuplicateHandler(String),

    /// A raw handler name does not follow the `visit_<type>` convention.
    #[error("invalid handler name: {0}")]
    InvalidHandlerName(String),

    /// A visitor was requested but no fallback handler was set.
    #[error("visitor has no `generic_visit` fallback")]
    MissingFallback,
}

// Convenience conversions
impl From<BoxError> for VisitaError {
    fn from(err: BoxError) -> Self {
        VisitaError::Custom(err)
    }
}
