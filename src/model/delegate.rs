//! Domain delegates.
//!
//! A delegate is a hand-written object built from one node that implements
//! some accessors with more logic than a plain property lookup (a RAML
//! resource knows its path from its key, an API knows that its resources
//! are the `/`-prefixed keys). Accessors a delegate does not implement are
//! read straight from the tree.
//!
//! Two generic delegates back nodes that have no domain type:
//! [`StringType`] for scalar leaves and [`DefaultElement`] for everything
//! else.

use super::error::ResolveError;
use crate::nodes::{NodeRef, Scalar};

/// Owned, type-erased delegate.
pub type BoxedDelegate<'a> = Box<dyn Delegate<'a> + 'a>;

/// What a delegate method produced.
pub type DelegateResult<'a> = Result<DelegateValue<'a>, ResolveError>;

/// A domain object that implements some accessors by hand.
pub trait Delegate<'a>: Send + Sync {
    /// Type name, reported in resolution errors.
    fn type_name(&self) -> &'static str;

    /// The node this delegate was built from, used for accessors it does
    /// not implement. `None` for delegates that wrap a detached value.
    fn node(&self) -> Option<NodeRef<'a>>;

    /// Call the method named `accessor`.
    ///
    /// Returns `None` when the delegate has no such method.
    fn invoke(&self, accessor: &str) -> Option<DelegateResult<'a>>;
}

/// The raw result of a delegate method, before it is shaped by the
/// declared accessor type.
pub enum DelegateValue<'a> {
    Null,
    Scalar(Scalar),
    /// A node to be resolved like a tree property.
    Node(NodeRef<'a>),
    /// Another domain object.
    Element(BoxedDelegate<'a>),
    List(Vec<DelegateValue<'a>>),
}

impl<'a> DelegateValue<'a> {
    /// Kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Scalar(_) => "scalar",
            Self::Node(_) => "node",
            Self::Element(_) => "element",
            Self::List(_) => "list",
        }
    }

    pub fn element(delegate: impl Delegate<'a> + 'a) -> Self {
        Self::Element(Box::new(delegate))
    }

    /// A list of elements, or of anything convertible into a value.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<DelegateValue<'a>>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl std::fmt::Debug for DelegateValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Scalar(s) => f.debug_tuple("Scalar").field(s).finish(),
            Self::Node(n) => f.debug_tuple("Node").field(&n.kind()).finish(),
            Self::Element(d) => f.debug_tuple("Element").field(&d.type_name()).finish(),
            Self::List(items) => f.debug_list().entries(items).finish(),
        }
    }
}

impl From<Scalar> for DelegateValue<'_> {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<&str> for DelegateValue<'_> {
    fn from(s: &str) -> Self {
        Self::Scalar(s.into())
    }
}

impl From<String> for DelegateValue<'_> {
    fn from(s: String) -> Self {
        Self::Scalar(s.into())
    }
}

impl<'a> From<NodeRef<'a>> for DelegateValue<'a> {
    fn from(node: NodeRef<'a>) -> Self {
        Self::Node(node)
    }
}

impl<'a> From<BoxedDelegate<'a>> for DelegateValue<'a> {
    fn from(delegate: BoxedDelegate<'a>) -> Self {
        Self::Element(delegate)
    }
}

impl<'a, T: Into<DelegateValue<'a>>> From<Option<T>> for DelegateValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// GENERIC DELEGATES
// ============================================================================

/// Delegate over a scalar leaf. Implements `value`.
#[derive(Debug, Clone)]
pub struct StringType<'a> {
    node: Option<NodeRef<'a>>,
    value: Scalar,
}

impl<'a> StringType<'a> {
    /// Wrap a scalar node. Returns `None` for any other node kind.
    pub fn new(node: NodeRef<'a>) -> Option<Self> {
        node.as_scalar().map(|value| Self {
            node: Some(node),
            value: value.clone(),
        })
    }

    /// Wrap a value that has no node, such as a string a delegate computed.
    pub fn detached(value: Scalar) -> Self {
        Self { node: None, value }
    }

    pub fn value(&self) -> &Scalar {
        &self.value
    }
}

impl<'a> Delegate<'a> for StringType<'a> {
    fn type_name(&self) -> &'static str {
        "StringType"
    }

    fn node(&self) -> Option<NodeRef<'a>> {
        self.node
    }

    fn invoke(&self, accessor: &str) -> Option<DelegateResult<'a>> {
        match accessor {
            "value" => Some(Ok(DelegateValue::Scalar(self.value.clone()))),
            _ => None,
        }
    }
}

/// Delegate with no methods; every accessor is read from its node.
#[derive(Debug, Clone, Copy)]
pub struct DefaultElement<'a> {
    node: NodeRef<'a>,
}

impl<'a> DefaultElement<'a> {
    pub fn new(node: NodeRef<'a>) -> Self {
        Self { node }
    }
}

impl<'a> Delegate<'a> for DefaultElement<'a> {
    fn type_name(&self) -> &'static str {
        "DefaultElement"
    }

    fn node(&self) -> Option<NodeRef<'a>> {
        Some(self.node)
    }

    fn invoke(&self, _accessor: &str) -> Option<DelegateResult<'a>> {
        None
    }
}
