//! YAML adapter.
//!
//! Builds a [`Node`] tree from YAML text via `serde_yaml`. This is the
//! boundary to the document parser; the view layer never sees YAML types.
//!
//! Mapping keys that are not strings (`200:` under `responses`, `true:`)
//! become their textual form. Tagged values (`!include foo.raml`) are
//! unwrapped to the tagged value.

use super::{Node, ObjectNode, Scalar};
use serde_yaml::Value;
use thiserror::Error;

/// Errors that can occur while building a node tree from YAML.
#[derive(Debug, Error)]
pub enum NodeError {
    /// The text is not valid YAML.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// A mapping key that has no textual form (a nested mapping or sequence).
    #[error("Unsupported mapping key: {0}")]
    UnsupportedKey(String),

    /// A number that fits neither `i64` nor `f64`.
    #[error("Unsupported number: {0}")]
    UnsupportedNumber(String),
}

impl NodeError {
    /// Create a YAML error.
    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }
}

impl Node {
    /// Parse YAML text into a node tree.
    pub fn from_yaml_str(input: &str) -> Result<Node, NodeError> {
        let value: Value = serde_yaml::from_str(input)
            .map_err(|e| NodeError::yaml(format!("YAML parse error: {e}")))?;
        Node::try_from(value)
    }

    /// Parse YAML bytes into a node tree.
    pub fn from_yaml_slice(input: &[u8]) -> Result<Node, NodeError> {
        let value: Value = serde_yaml::from_slice(input)
            .map_err(|e| NodeError::yaml(format!("YAML parse error: {e}")))?;
        Node::try_from(value)
    }
}

impl TryFrom<Value> for Node {
    type Error = NodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Node::Null),
            Value::Bool(b) => Ok(Node::Simple(Scalar::Boolean(b))),
            Value::Number(n) => number_to_scalar(&n).map(Node::Simple),
            Value::String(s) => Ok(Node::Simple(Scalar::String(s))),
            Value::Sequence(seq) => seq
                .into_iter()
                .map(Node::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Node::Array),
            Value::Mapping(map) => {
                let mut object = ObjectNode::new();
                for (key, value) in map {
                    object.insert(key_text(key)?, Node::try_from(value)?);
                }
                Ok(Node::Object(object))
            }
            Value::Tagged(tagged) => Node::try_from(tagged.value),
        }
    }
}

fn number_to_scalar(n: &serde_yaml::Number) -> Result<Scalar, NodeError> {
    if let Some(i) = n.as_i64() {
        Ok(Scalar::Integer(i))
    } else if let Some(f) = n.as_f64() {
        Ok(Scalar::Float(f))
    } else {
        Err(NodeError::UnsupportedNumber(n.to_string()))
    }
}

fn key_text(key: Value) -> Result<String, NodeError> {
    match key {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => key_text(tagged.value),
        other => Err(NodeError::UnsupportedKey(format!("{other:?}"))),
    }
}
