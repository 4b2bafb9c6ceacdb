#![allow(dead_code)]

use visita::{Node, NodeKind, NodeType};

// ============================================================================
// Test Node Types
// ============================================================================
//
// Animal
// ├── Dog
// │   └── Puppy
// └── Cat
// Rock

macro_rules! node {
    (@node $ty:ident) => {
        impl Node for $ty {
            fn node_type(&self) -> &'static NodeType {
                <Self as NodeKind>::NODE_TYPE
            }
        }
    };
    ($ty:ident, $name:literal) => {
        impl NodeKind for $ty {
            const NODE_TYPE: &'static NodeType = &NodeType::root($name);
        }
        node!(@node $ty);
    };
    ($ty:ident, $name:literal, $parent:ty) => {
        impl NodeKind for $ty {
            const NODE_TYPE: &'static NodeType =
                &NodeType::new($name, Some(<$parent as NodeKind>::NODE_TYPE));
        }
        node!(@node $ty);
    };
}

#[derive(Clone, Debug, Default)]
pub struct Animal;

#[derive(Clone, Debug, Default)]
pub struct Dog {
    pub name: String,
}

#[derive(Clone, Debug, Default)]
pub struct Puppy {
    pub name: String,
    pub weeks: u32,
}

#[derive(Clone, Debug, Default)]
pub struct Cat;

#[derive(Clone, Debug, Default)]
pub struct Rock;

node!(Animal, "Animal");
node!(Dog, "Dog", Animal);
node!(Puppy, "Puppy", Dog);
node!(Cat, "Cat", Animal);
node!(Rock, "Rock");

pub fn dog(name: &str) -> Dog {
    Dog {
        name: name.to_string(),
    }
}

pub fn puppy(name: &str, weeks: u32) -> Puppy {
    Puppy {
        name: name.to_string(),
        weeks,
    }
}

// ============================================================================
// Keyword Arguments
// ============================================================================

/// Stand-in for keyword arguments forwarded alongside positional ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Kwargs {
    pub key: Option<String>,
}

impl Kwargs {
    pub fn key(key: &str) -> Self {
        Self {
            key: Some(key.to_string()),
        }
    }
}
