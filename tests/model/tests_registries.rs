#![allow(clippy::unwrap_used)]

use raml_model::model::{
    BoxedDelegate, PrimitiveType, ResolveError, Schema, TextTransformer, TransformerRegistry,
    ValueTransformer, View,
};
use raml_model::view_interface;
use raml_model::{Node, NodeRef, Scalar};
use rstest::rstest;

view_interface! {
    pub struct Contact("Contact") {
        name("name") -> one<String>;
        partner("partner") -> view<Contact>;
    }
}

/// Upper-cases text.
struct Shouting;

impl ValueTransformer for Shouting {
    fn name(&self) -> &'static str {
        "shouting"
    }

    fn accepts(&self, target: PrimitiveType) -> bool {
        target == PrimitiveType::String
    }

    fn transform(&self, node: &Node, _target: PrimitiveType) -> Result<Option<Scalar>, ResolveError> {
        Ok(node
            .as_scalar()
            .map(|s| Scalar::String(s.to_string().to_uppercase())))
    }
}

fn broken<'a>(_node: NodeRef<'a>) -> Result<BoxedDelegate<'a>, ResolveError> {
    Err(ResolveError::delegate("always fails"))
}

#[rstest]
#[case(true, "ADA")]
#[case(false, "Ada")]
fn test_first_accepting_transformer_wins(#[case] shouting_first: bool, #[case] expected: &str) {
    let registry = if shouting_first {
        TransformerRegistry::empty().with(Shouting).with(TextTransformer)
    } else {
        TransformerRegistry::empty().with(TextTransformer).with(Shouting)
    };
    let schema = Schema::new().with_transformers(registry);
    let root = Node::object([("name", Node::from("Ada"))]);
    let contact: Contact = schema.view(&root);
    assert_eq!(contact.name().unwrap().as_deref(), Some(expected));
}

#[test]
fn test_no_transformer_is_unsupported_primitive() {
    let schema = Schema::new().with_transformers(TransformerRegistry::empty());
    let root = Node::object([("name", Node::from("Ada"))]);
    let contact: Contact = schema.view(&root);
    let err = contact.name().unwrap_err();
    assert!(matches!(
        err.cause(),
        Some(ResolveError::UnsupportedPrimitive(PrimitiveType::String))
    ));
}

#[rstest]
#[case(Node::object([("name", Node::from("Grace"))]), "DefaultElement")]
#[case(Node::from("Grace"), "StringType")]
fn test_fallback_delegate_by_node_kind(#[case] partner: Node, #[case] expected: &str) {
    let schema = Schema::new();
    let root = Node::object([("partner", partner)]);
    let contact: Contact = schema.view(&root);
    let partner = contact.partner().unwrap().unwrap();
    assert_eq!(partner.instance().delegate_type(), expected);
}

#[test]
fn test_failing_constructor_falls_back() {
    let schema = Schema::new().register_delegate("Contact", broken);
    let root = Node::object([(
        "partner",
        Node::object([("name", Node::from("Grace"))]),
    )]);
    let contact: Contact = schema.view(&root);
    let partner = contact.partner().unwrap().unwrap();
    assert_eq!(partner.instance().delegate_type(), "DefaultElement");
    assert_eq!(partner.name().unwrap().as_deref(), Some("Grace"));
}

#[test]
fn test_one_schema_serves_many_documents() {
    let schema = Schema::new();
    let first = Node::object([("name", Node::from("Ada"))]);
    let second = Node::object([("name", Node::from("Grace"))]);
    let a: Contact = schema.view(&first);
    let b: Contact = schema.view(&second);
    assert_eq!(a.name().unwrap().as_deref(), Some("Ada"));
    assert_eq!(b.name().unwrap().as_deref(), Some("Grace"));
}
