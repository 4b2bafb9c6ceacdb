//! Integration tests for visita macros.

#![cfg(feature = "macros")]

use visita::{Node, NodeKind, NodeType, Visitee, Visitor};

// Test Node Types
#[derive(Node)]
struct Animal;

#[derive(Node)]
#[node(extends = Animal)]
struct Dog {
    name: &'static str,
}

#[derive(Node)]
#[node(extends = Dog, name = "Puppy")]
struct YoungDog;

#[derive(Node)]
#[node(name = "Mineral")]
struct Rock;

#[test]
fn test_derive_node_types() {
    let names: Vec<_> = YoungDog::NODE_TYPE.chain().map(NodeType::name).collect();
    assert_eq!(names, ["Puppy", "Dog", "Animal", "object"]);
    assert_eq!(Rock.node_type().name(), "Mineral");
    assert_eq!(Rock::NODE_TYPE.parent(), None);
    assert!(Dog::NODE_TYPE.is_subtype_of(Animal::NODE_TYPE));
}

// Test: #[visitor] basic usage
struct Sounds;

#[visita::visitor]
impl Sounds {
    fn visit_dog(&self, _node: &dyn Node) -> &'static str {
        "bark"
    }

    fn generic_visit(&self, _node: &dyn Node) -> &'static str {
        "generic"
    }
}

#[test]
fn test_visitor_macro_scenario() {
    assert_eq!(Sounds.visit(&Dog { name: "rex" }, ()), "bark");
    assert_eq!(Sounds.visit(&Animal, ()), "generic");
    assert_eq!(Sounds.visit(&YoungDog, ()), "bark");
    assert_eq!(Dog { name: "rex" }.accept(&Sounds), "bark");
}

#[test]
fn test_visitor_macro_exposes_handlers() {
    assert!(Sounds.handler("visit_dog").is_some());
    assert!(Sounds.handler("visit_animal").is_none());
    assert!(Sounds.handler("generic_visit").is_none());
}

// Test: handlers on every level, most specific wins
struct Describe;

#[visita::visitor]
impl Describe {
    fn visit_animal(&self, node: &dyn Node) -> String {
        format!("animal:{}", node.type_name())
    }

    fn visit_dog(&self, node: &dyn Node) -> String {
        match node.downcast_ref::<Dog>() {
            Some(dog) => format!("dog:{}", dog.name),
            None => format!("dog:{}", node.type_name()),
        }
    }

    fn visit_puppy(&self, _node: &dyn Node) -> String {
        "puppy".to_string()
    }

    fn generic_visit(&self, node: &dyn Node) -> String {
        format!("generic:{}", node.type_name())
    }

    /// Not a handler: plain helper methods are left alone.
    fn describe_all(&self, nodes: &[&dyn Node]) -> Vec<String> {
        nodes.iter().map(|node| self.visit(*node, ())).collect()
    }
}

#[test]
fn test_visitor_macro_most_specific_wins() {
    assert_eq!(
        Describe.describe_all(&[&Animal, &Dog { name: "rex" }, &YoungDog, &Rock]),
        ["animal:Animal", "dog:rex", "puppy", "generic:Mineral"]
    );
}

// Test: extra arguments are forwarded verbatim
#[derive(Clone, Debug, PartialEq)]
struct Options {
    positional: (i32, i32),
    key: Option<&'static str>,
}

struct Echo;

#[visita::visitor]
impl Echo {
    fn visit_animal(&self, node: &dyn Node, options: Options) -> (String, Options) {
        (format!("animal:{}", node.type_name()), options)
    }

    fn generic_visit(&self, node: &dyn Node, options: Options) -> (String, Options) {
        (format!("generic:{}", node.type_name()), options)
    }
}

#[test]
fn test_visitor_macro_forwards_args() {
    let options = Options {
        positional: (1, 2),
        key: Some("x"),
    };
    assert_eq!(options.positional, (1, 2));
    assert_eq!(options.key, Some("x"));
    assert_eq!(
        Echo.visit(&Dog { name: "rex" }, options.clone()),
        ("animal:Dog".to_string(), options.clone())
    );
    assert_eq!(
        Echo.visit(&Rock, options.clone()),
        ("generic:Mineral".to_string(), options)
    );
}

// Test: a handler may ignore the arguments its visitor takes
struct Sizer;

#[visita::visitor]
impl Sizer {
    fn visit_mineral(&self, _node: &dyn Node) -> usize {
        0
    }

    fn visit_str(&self, node: &dyn Node, scale: usize) -> usize {
        node.downcast_ref::<&'static str>().map_or(0, |text| text.len() * scale)
    }

    fn generic_visit(&self, _node: &dyn Node, scale: usize) -> usize {
        scale
    }
}

#[test]
fn test_visitor_macro_mixed_arity() {
    assert_eq!(Rock::NODE_TYPE.handler_name(), "visit_mineral");
    assert_eq!(Sizer.matched_type(Rock::NODE_TYPE), Some(Rock::NODE_TYPE));
    assert_eq!(Sizer.visit(&Rock, 10), 0);
    assert_eq!(Sizer.visit(&"four", 2), 8);
    assert_eq!(Sizer.visit(&Animal, 5), 5);
}

// Test: catch-all through the object root
struct Catch;

#[visita::visitor]
impl Catch {
    fn visit_object(&self, _node: &dyn Node) -> bool {
        true
    }

    fn generic_visit(&self, _node: &dyn Node) -> bool {
        false
    }
}

#[test]
fn test_visitor_macro_object_handler() {
    assert!(Sounds.visit(&Rock, ()) == "generic");
    assert!(Catch.visit(&Rock, ()));
    assert!(Catch.visit(&3_u8, ()));
    assert!(Animal.accept(&Catch));
}

// Test: generic visitors
struct Constant<T>(T);

#[visita::visitor]
impl<T: Clone> Constant<T> {
    fn generic_visit(&self, _node: &dyn Node) -> T {
        self.0.clone()
    }
}

#[test]
fn test_visitor_macro_generic_impl() {
    assert_eq!(Constant(7_u8).visit(&Rock, ()), 7);
    assert_eq!(Constant("same").visit(&Animal, ()), "same");
}
