//! Tracing wrapper - observability for visitor dispatch.

use visita_core::{Dispatch, Node, NodeType, VisitFn, Visitor};

/// A visitor wrapper that instruments every visit with a `tracing` span.
///
/// With the `tracing` feature enabled, each visit runs inside a
/// `debug_span!("visit")` carrying the wrapper name and the node type, and a
/// `trace!` event records which handler was resolved. Without the feature the
/// wrapper is a plain pass-through.
///
/// The inner visitor's result is returned untouched, errors included.
///
/// # Example
///
/// ```rust,ignore
/// let visitor = TracingVisitor::new(Sounds, "sounds");
/// assert_eq!(visitor.visit(&Dog, ()), "bark");
/// ```
pub struct TracingVisitor<V> {
    inner: V,
    name: &'static str,
}

impl<V> TracingVisitor<V> {
    /// Create a new `TracingVisitor` wrapper around a visitor.
    pub const fn new(inner: V, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The wrapped visitor.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Unwrap the inner visitor.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Clone> Clone for TracingVisitor<V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<V: Copy> Copy for TracingVisitor<V> {}

impl<A, R, V> Visitor<A, R> for TracingVisitor<V>
where
    V: Visitor<A, R>,
{
    fn generic_visit(&self, node: &dyn Node, args: A) -> R {
        self.inner.generic_visit(node, args)
    }

    fn dispatch(&self, node_type: &'static NodeType) -> Dispatch<VisitFn<Self, A, R>> {
        // The resolved entry goes back through `visit` so it stays instrumented.
        self.inner.dispatch(node_type).map(|_| {
            let handler: VisitFn<Self, A, R> =
                |visitor, node, args| <Self as Visitor<A, R>>::visit(visitor, node, args);
            handler
        })
    }

    #[cfg(feature = "tracing")]
    fn visit(&self, node: &dyn Node, args: A) -> R {
        let node_type = node.node_type();
        let span = ::tracing::debug_span!(
            "visit",
            visitor = %self.name,
            node_type = %node_type.name()
        );
        let _enter = span.enter();

        let handler = match self.inner.matched_type(node_type) {
            Some(matched) => matched.handler_name(),
            None => visita_core::FALLBACK_HANDLER.to_string(),
        };
        ::tracing::trace!(%handler, "Dispatching visit");

        self.inner.visit(node, args)
    }

    #[cfg(not(feature = "tracing"))]
    fn visit(&self, node: &dyn Node, args: A) -> R {
        self.inner.visit(node, args)
    }
}
