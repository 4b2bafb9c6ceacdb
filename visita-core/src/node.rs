//! # Node Types
//!
//! A node is any `'static` value that can name its place in a type hierarchy.
//! Rust has no class inheritance, so the hierarchy is declared explicitly:
//! every [`NodeType`] names itself and, optionally, its parent. The ordered
//! sequence of a type and its ancestors (most-derived first) is the
//! **type hierarchy chain** that visitor dispatch walks.
//!
//! Every chain ends with [`OBJECT`], the universal root. A visitor that
//! handles `object` therefore handles every node before its fallback would.
//!
//! # Example
//!
//! ```rust
//! use visita_core::{Node, NodeKind, NodeType};
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
//!
//! impl NodeKind for Dog {
//!     const NODE_TYPE: &'static NodeType = &NodeType::new("Dog", Some(Animal::NODE_TYPE));
//! }
//! impl Node for Dog {
//!     fn node_type(&self) -> &'static NodeType {
//!         Self::NODE_TYPE
//!     }
//! }
//!
//! let names: Vec<_> = Dog.node_type().chain().map(NodeType::name).collect();
//! assert_eq!(names, ["Dog", "Animal", "object"]);
//! ```

use crate::naming::handler_name;
use std::{
    any::Any,
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
};

/// The universal root type. Terminates every hierarchy chain.
pub static OBJECT: NodeType = NodeType::root("object");

/// Static descriptor of one type in a node hierarchy.
///
/// Identity is by name: two descriptors with the same name describe the same
/// type, which mirrors how handler names are derived from type names.
#[derive(Clone, Copy)]
pub struct NodeType {
    name: &'static str,
    parent: Option<&'static NodeType>,
}

impl NodeType {
    /// A type whose only ancestor is [`OBJECT`].
    pub const fn root(name: &'static str) -> Self {
        Self { name, parent: None }
    }

    /// A type deriving from `parent`. `None` is equivalent to [`NodeType::root`].
    pub const fn new(name: &'static str, parent: Option<&'static NodeType>) -> Self {
        Self { name, parent }
    }

    /// The type name handlers are derived from.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The declared parent type, if any. Root types report `None` even though
    /// their chain continues to [`OBJECT`].
    pub const fn parent(&self) -> Option<&'static NodeType> {
        self.parent
    }

    /// Whether this is the universal root.
    pub fn is_object(&self) -> bool {
        self.parent.is_none() && self.name == OBJECT.name
    }

    /// The type hierarchy chain: this type, its ancestors, then `object`.
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Number of ancestors in the chain, `object` included.
    pub fn depth(&self) -> usize {
        self.chain().count() - 1
    }

    /// Whether `other` appears in this type's chain (a type is a subtype of itself).
    pub fn is_subtype_of(&self, other: &NodeType) -> bool {
        self.chain().any(|ty| ty == other)
    }

    /// The handler name a visitor declares to special-case this type.
    pub fn handler_name(&self) -> String {
        handler_name(self.name)
    }
}

impl PartialEq for NodeType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for NodeType {}

impl Hash for NodeType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.chain().map(NodeType::name))
            .finish()
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Iterator over a type hierarchy chain, most-derived first.
///
/// Created by [`NodeType::chain`].
#[derive(Clone, Debug)]
pub struct Chain<'a> {
    next: Option<&'a NodeType>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a NodeType;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = match current.parent {
            Some(parent) => Some(parent),
            None if current.is_object() => None,
            None => Some(&OBJECT),
        };
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// A value that can be visited.
///
/// The only property dispatch cares about is the node's [`NodeType`]. The
/// trait is object-safe; visitors receive nodes as `&dyn Node` and may
/// recover the concrete type with [`downcast_ref`](trait.Node.html#method.downcast_ref).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a visitable node",
    label = "missing `Node` implementation",
    note = "Implement `Node` (and usually `NodeKind`), or use `#[derive(visita::Node)]`."
)]
pub trait Node: AsNode + 'static {
    /// The runtime type of this node.
    fn node_type(&self) -> &'static NodeType;
}

/// Upcasts for [`Node`]. Implemented automatically for every sized node.
pub trait AsNode {
    /// View as a node trait object.
    fn as_node(&self) -> &dyn Node;

    /// View as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Node> AsNode for T {
    fn as_node(&self) -> &dyn Node {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn Node {
    /// Whether the concrete Rust type behind this node is `T`.
    pub fn is<T: Node>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Recover the concrete Rust type behind this node.
    ///
    /// This checks the Rust type, not the declared hierarchy: a `Dog` node does
    /// not downcast to `Animal`.
    pub fn downcast_ref<T: Node>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Shorthand for `self.node_type().name()`.
    pub fn type_name(&self) -> &'static str {
        self.node_type().name()
    }
}

impl fmt::Debug for dyn Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.type_name())
    }
}

/// A node whose type is known statically.
///
/// Lets runtime registries bind handlers to a type without an instance.
pub trait NodeKind: Node {
    /// The descriptor every instance of this type reports.
    const NODE_TYPE: &'static NodeType;
}

macro_rules! builtin_nodes {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl NodeKind for $ty {
                const NODE_TYPE: &'static NodeType = &NodeType::root($name);
            }

            impl Node for $ty {
                fn node_type(&self) -> &'static NodeType {
                    <Self as NodeKind>::NODE_TYPE
                }
            }
        )*
    };
}

// Common Node implementations
builtin_nodes! {
    bool => "bool",
    char => "char",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
    String => "String",
    &'static str => "str",
}
