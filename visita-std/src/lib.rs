//! # visita-std
//!
//! Standard implementations for the Visita visitor dispatch library.
//!
//! This crate provides:
//! - **Dynamic dispatch**: [`Registry`](dynamic::Registry), a runtime-populated
//!   handler table with the same most-specific-first lookup as trait visitors
//! - **Standard wrappers**: Tracing, Logging
//! - **Testing utilities**: recording and counting visitors, handler probes

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use visita_core;

// Modules
pub mod dynamic;
pub mod hooks;
pub mod testing;
