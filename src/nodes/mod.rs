//! The generic document tree.
//!
//! A parsed document is an immutable tree of [`Node`]s:
//!
//! ```text
//! Node
//! ├── Object(ObjectNode)   ordered map: key -> Node
//! ├── Array(Vec<Node>)     ordered sequence
//! ├── Simple(Scalar)       leaf value
//! └── Null                 explicit absence
//! ```
//!
//! The tree is owned by whoever built it (usually the YAML adapter) and is
//! only ever borrowed by the view layer. [`NodeRef`] is that borrow, paired
//! with the key the node sits under in its parent object.

mod scalar;
#[cfg(feature = "yaml")]
mod yaml;

pub use scalar::Scalar;
#[cfg(feature = "yaml")]
pub use yaml::NodeError;

use indexmap::IndexMap;

/// Shared node returned for absent properties.
static NULL: Node = Node::Null;

/// A node in the generic document tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Node {
    Object(ObjectNode),
    Array(Vec<Node>),
    Simple(Scalar),
    #[default]
    Null,
}

/// Discriminant of a [`Node`], used for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Object,
    Array,
    Simple,
    Null,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::Simple => "scalar",
            Self::Null => "null",
        }
    }
}

impl Node {
    /// Build an object node from key/value pairs, keeping their order.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Self::Object(entries.into_iter().collect())
    }

    /// Build an array node.
    pub fn array<I: IntoIterator<Item = Node>>(items: I) -> Self {
        Self::Array(items.into_iter().collect())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Object(_) => NodeKind::Object,
            Self::Array(_) => NodeKind::Array,
            Self::Simple(_) => NodeKind::Simple,
            Self::Null => NodeKind::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Object and array nodes are containers; their children can be listed.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Array(_))
    }

    pub fn as_object(&self) -> Option<&ObjectNode> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Simple(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Value of the named property, if this is an object that has it.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_object().and_then(|object| object.get(key))
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Self::Simple(scalar)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::Simple(s.into())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::Simple(s.into())
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Self::Simple(i.into())
    }
}

impl From<f64> for Node {
    fn from(f: f64) -> Self {
        Self::Simple(f.into())
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Self::Simple(b.into())
    }
}

// ============================================================================
// OBJECT NODE
// ============================================================================

/// An ordered mapping from property name to child node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectNode {
    entries: IndexMap<String, Node>,
}

impl ObjectNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Node) -> Option<Node> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// The stored key and value, both borrowed from the map.
    pub fn get_entry(&self, key: &str) -> Option<(&str, &Node)> {
        self.entries
            .get_key_value(key)
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for ObjectNode {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// ============================================================================
// NODE REF
// ============================================================================

/// A borrowed node together with the key it was found under.
///
/// Children of an array have no key. The key lets delegates for object
/// members (a resource under `/users`, a response under `200`) read the
/// name their parent gave them.
#[derive(Clone, Copy, Debug)]
pub struct NodeRef<'a> {
    key: Option<&'a str>,
    node: &'a Node,
}

impl<'a> NodeRef<'a> {
    /// A reference to a document root (no key).
    pub fn root(node: &'a Node) -> Self {
        Self { key: None, node }
    }

    pub fn keyed(key: &'a str, node: &'a Node) -> Self {
        Self {
            key: Some(key),
            node,
        }
    }

    /// A reference to the shared null node.
    pub fn null() -> Self {
        Self {
            key: None,
            node: &NULL,
        }
    }

    pub fn key(&self) -> Option<&'a str> {
        self.key
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn kind(&self) -> NodeKind {
        self.node.kind()
    }

    pub fn is_null(&self) -> bool {
        self.node.is_null()
    }

    pub fn as_scalar(&self) -> Option<&'a Scalar> {
        self.node.as_scalar()
    }

    /// Direct children in document order.
    ///
    /// Object children carry their key; array children do not. Scalars and
    /// nulls have no children.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        match self.node {
            Node::Object(object) => object
                .iter()
                .map(|(key, node)| NodeRef::keyed(key, node))
                .collect(),
            Node::Array(items) => items.iter().map(NodeRef::root).collect(),
            Node::Simple(_) | Node::Null => Vec::new(),
        }
    }

    /// Object members whose key satisfies `predicate`, in document order.
    pub fn members_where(&self, predicate: impl Fn(&str) -> bool) -> Vec<NodeRef<'a>> {
        match self.node {
            Node::Object(object) => object
                .iter()
                .filter(|(key, _)| predicate(*key))
                .map(|(key, node)| NodeRef::keyed(key, node))
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        Self::root(node)
    }
}
