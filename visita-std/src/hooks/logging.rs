//! Logging visitor for node observation.

use visita_core::{Node, Visitor};

/// A fallback-only visitor that logs every node it sees.
///
/// Handy as the fallback of a registry under construction: every node that
/// no handler claims shows up in the `debug` log with its full chain.
pub struct LoggingVisitor {
    name: &'static str,
}

impl LoggingVisitor {
    /// Create a new `LoggingVisitor` with a default name.
    pub fn new() -> Self {
        Self { name: "visitor" }
    }

    /// Create a new `LoggingVisitor` with a custom name.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// The name used in log events.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LoggingVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Visitor<A, ()> for LoggingVisitor {
    fn generic_visit(&self, node: &dyn Node, _args: A) {
        #[cfg(feature = "tracing")]
        {
            let chain: Vec<_> = node.node_type().chain().map(|ty| ty.name()).collect();
            ::tracing::debug!(name = %self.name, node_type = %node.type_name(), ?chain, "Unhandled node");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = node; // Suppress unused warning
        }
    }
}
