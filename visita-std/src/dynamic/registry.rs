//! Dynamic registry for runtime handler registration.
//!
//! Maps handler names (derived from node types) to boxed closures. Lookup
//! walks the node's chain most-derived first, the same order trait-based
//! visitors use.

use std::{collections::HashMap, fmt};
use visita_core::{
    Dispatch, FALLBACK_HANDLER, Node, NodeKind, NodeType, RegistryError, VisitError, VisitFn,
    Visitor, handler_name, is_handler_name, resolve,
};

/// A boxed handler: receives the node and the forwarded arguments.
pub type BoxHandler<A, R> = Box<dyn Fn(&dyn Node, A) -> R + Send + Sync>;

/// A registry of dynamically registered handlers.
///
/// The fallback is optional here; visiting a node nothing matches without a
/// fallback fails with [`VisitError::NoHandler`]. Use [`RegistryVisitor`]
/// when the fallback must be guaranteed.
pub struct Registry<A, R> {
    handlers: HashMap<String, BoxHandler<A, R>>,
    fallback: Option<BoxHandler<A, R>>,
}

impl<A, R> Registry<A, R> {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder<A, R> {
        RegistryBuilder::new()
    }

    /// Resolve the handler for `node_type`.
    pub fn dispatch(&self, node_type: &'static NodeType) -> Dispatch<&BoxHandler<A, R>> {
        resolve(node_type, |name| self.handlers.get(name))
    }

    /// Visit `node`, failing if nothing matches and no fallback is set.
    pub fn try_visit(&self, node: &dyn Node, args: A) -> Result<R, VisitError> {
        match self.dispatch(node.node_type()) {
            Dispatch::Handler { handler, .. } => Ok(handler(node, args)),
            Dispatch::Fallback => match &self.fallback {
                Some(fallback) => Ok(fallback(node, args)),
                None => Err(VisitError::NoHandler {
                    node_type: node.type_name(),
                }),
            },
        }
    }

    /// Whether a handler is registered for the type named `type_name`.
    pub fn contains(&self, type_name: &str) -> bool {
        self.handlers.contains_key(&handler_name(type_name))
    }

    /// Whether a fallback is set.
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Registered handler names, in no particular order.
    pub fn handler_names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Get the number of type-specific handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no type-specific handler is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<A, R> fmt::Debug for Registry<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.handler_names().collect();
        names.sort_unstable();
        f.debug_struct("Registry")
            .field("handlers", &names)
            .field("fallback", &self.has_fallback())
            .finish()
    }
}

/// Builder for constructing a [`Registry`].
pub struct RegistryBuilder<A, R> {
    handlers: HashMap<String, BoxHandler<A, R>>,
    fallback: Option<BoxHandler<A, R>>,
    allow_overrides: bool,
    duplicates: Vec<String>,
    invalid: Vec<String>,
}

impl<A, R> Default for RegistryBuilder<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R> RegistryBuilder<A, R> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            fallback: None,
            allow_overrides: false,
            duplicates: Vec::new(),
            invalid: Vec::new(),
        }
    }

    /// Allow re-registering a handler (later registrations replace earlier ones).
    pub fn allow_overrides(mut self) -> Self {
        self.allow_overrides = true;
        self
    }

    /// Register a handler for node type `T`.
    pub fn on<T, F>(self, handler: F) -> Self
    where
        T: NodeKind,
        F: Fn(&dyn Node, A) -> R + Send + Sync + 'static,
    {
        self.on_type(T::NODE_TYPE, handler)
    }

    /// Register a handler for a node type descriptor.
    pub fn on_type<F>(self, node_type: &NodeType, handler: F) -> Self
    where
        F: Fn(&dyn Node, A) -> R + Send + Sync + 'static,
    {
        self.insert(node_type.handler_name(), Box::new(handler))
    }

    /// Register a handler under a raw handler name such as `visit_dog`.
    ///
    /// Names that do not follow the convention make [`build`](Self::build) fail.
    pub fn on_handler<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&dyn Node, A) -> R + Send + Sync + 'static,
    {
        let name = name.into();
        if !is_handler_name(&name) {
            self.invalid.push(name);
            return self;
        }
        self.insert(name, Box::new(handler))
    }

    /// Set the fallback handler.
    pub fn fallback<F>(mut self, handler: F) -> Self
    where
        F: Fn(&dyn Node, A) -> R + Send + Sync + 'static,
    {
        if self.fallback.is_some() && !self.allow_overrides {
            self.duplicates.push(FALLBACK_HANDLER.to_string());
        }
        self.fallback = Some(Box::new(handler));
        self
    }

    fn insert(mut self, name: String, handler: BoxHandler<A, R>) -> Self {
        if self.handlers.contains_key(&name) && !self.allow_overrides {
            self.duplicates.push(name.clone());
        }
        self.handlers.insert(name, handler);
        self
    }

    /// Build the registry.
    pub fn build(self) -> Result<Registry<A, R>, RegistryError> {
        if let Some(name) = self.invalid.into_iter().next() {
            return Err(RegistryError::InvalidHandlerName(name));
        }
        if let Some(name) = self.duplicates.into_iter().next() {
            return Err(RegistryError::DuplicateHandler(name));
        }
        Ok(Registry {
            handlers: self.handlers,
            fallback: self.fallback,
        })
    }

    /// Build a [`RegistryVisitor`]; fails if no fallback was set.
    pub fn build_visitor(self) -> Result<RegistryVisitor<A, R>, RegistryError> {
        let mut registry = self.build()?;
        let fallback = registry
            .fallback
            .take()
            .ok_or(RegistryError::MissingFallback)?;
        Ok(RegistryVisitor { registry, fallback })
    }
}

/// A registry with a guaranteed fallback, usable anywhere a [`Visitor`] is.
pub struct RegistryVisitor<A, R> {
    registry: Registry<A, R>,
    fallback: BoxHandler<A, R>,
}

impl<A, R> RegistryVisitor<A, R> {
    /// Pair a registry with a fallback. A fallback already set on the registry
    /// is replaced.
    pub fn new<F>(mut registry: Registry<A, R>, fallback: F) -> Self
    where
        F: Fn(&dyn Node, A) -> R + Send + Sync + 'static,
    {
        registry.fallback = None;
        Self {
            registry,
            fallback: Box::new(fallback),
        }
    }

    /// The type-specific handlers.
    pub fn registry(&self) -> &Registry<A, R> {
        &self.registry
    }
}

impl<A, R> fmt::Debug for RegistryVisitor<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryVisitor")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl<A, R> Visitor<A, R> for RegistryVisitor<A, R> {
    fn generic_visit(&self, node: &dyn Node, args: A) -> R {
        (self.fallback)(node, args)
    }

    fn dispatch(&self, node_type: &'static NodeType) -> Dispatch<VisitFn<Self, A, R>> {
        // Registered handlers are closures, so the resolved entry re-enters
        // `visit`, which looks the same handler up for the node's type.
        self.registry.dispatch(node_type).map(|_| {
            let handler: VisitFn<Self, A, R> =
                |visitor, node, args| <Self as Visitor<A, R>>::visit(visitor, node, args);
            handler
        })
    }

    fn visit(&self, node: &dyn Node, args: A) -> R {
        match self.registry.dispatch(node.node_type()) {
            Dispatch::Handler { handler, .. } => handler(node, args),
            Dispatch::Fallback => self.generic_visit(node, args),
        }
    }
}
