//! The view materializer.
//!
//! A [`ViewInstance`] binds one node (and optionally one domain delegate)
//! to one [`ViewInterface`]. Nothing is computed up front: each accessor
//! call resolves its value on demand, re-walking the tree and building
//! fresh nested instances every time.
//!
//! ## Resolution order
//!
//! ```text
//! get(accessor)
//!   │
//!   ├─ delegate implements it? ──► through_delegate(shape, raw result)
//!   │                                ├─ primitive / passthrough: raw value
//!   │                                ├─ view: bridge list -> single, wrap
//!   │                                ├─ list of primitive: as is
//!   │                                └─ list of view: wrap each
//!   │
//!   └─ otherwise ──► through_tree(shape, property node)
//!                      ├─ primitive: transformer registry
//!                      ├─ passthrough: scalar value
//!                      ├─ view: locate delegate, wrap
//!                      └─ list: bridge single -> list, resolve each
//! ```
//!
//! Lists keep one entry per child, so a null child is a `Value::Absent`
//! at its position. The typed `many`/`views` accessors skip those entries.
//!
//! Every failure comes back as a [`ModelError::Resolution`] naming the
//! accessor and the delegate type, and only affects that one call.

use super::delegate::{BoxedDelegate, DelegateValue, StringType};
use super::error::{ModelError, ResolveError};
use super::schema::Schema;
use super::select;
use super::shape::{Accessor, PrimitiveType, Shape, ViewInterface};
use super::typed::{PrimitiveValue, View};
use crate::nodes::{Node, NodeRef, Scalar};

/// Delegate type name reported when a view has no delegate.
const TREE_BACKED: &str = "tree";

/// A resolved accessor value.
pub enum Value<'a> {
    Absent,
    Scalar(Scalar),
    View(ViewInstance<'a>),
    List(Vec<Value<'a>>),
}

impl<'a> Value<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_view(&self) -> Option<&ViewInstance<'a>> {
        match self {
            Self::View(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value<'a>]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Scalar(_) => "scalar",
            Self::View(_) => "view",
            Self::List(_) => "list",
        }
    }
}

impl std::fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Scalar(s) => f.debug_tuple("Scalar").field(s).finish(),
            Self::View(v) => f.debug_tuple("View").field(v).finish(),
            Self::List(items) => f.debug_list().entries(items).finish(),
        }
    }
}

// ============================================================================
// CARDINALITY BRIDGING
// ============================================================================

/// Collapse a delegate list onto a single-valued accessor.
///
/// Interface families disagree on multiplicity (`mediaType` is one value
/// in 0.8 and a list in 1.0), while delegates return one representation.
/// An empty list is absent; otherwise the first element is kept and the
/// rest discarded.
pub fn bridge_to_single(value: DelegateValue<'_>) -> DelegateValue<'_> {
    match value {
        DelegateValue::List(items) => {
            if items.len() > 1 {
                tracing::debug!(discarded = items.len() - 1, "list bridged to single value");
            }
            items.into_iter().next().unwrap_or(DelegateValue::Null)
        }
        other => other,
    }
}

/// Spread a delegate value onto a list-valued accessor.
///
/// Null is the empty list. A node is split the way a tree property is
/// (see [`select::items`]); any other non-list value is a one-element list.
pub fn bridge_to_list(value: DelegateValue<'_>) -> Vec<DelegateValue<'_>> {
    match value {
        DelegateValue::List(items) => items,
        DelegateValue::Null => Vec::new(),
        DelegateValue::Node(node) => select::items(node).into_iter().map(DelegateValue::Node).collect(),
        other => vec![other],
    }
}

// ============================================================================
// VIEW INSTANCE
// ============================================================================

/// A lazily resolved object satisfying one view interface.
///
/// Holds a borrowed node and, when present, owns its delegate. Instances
/// are immutable and can be shared across threads.
pub struct ViewInstance<'a> {
    schema: &'a Schema,
    interface: &'static ViewInterface,
    node: Option<NodeRef<'a>>,
    delegate: Option<BoxedDelegate<'a>>,
}

impl<'a> ViewInstance<'a> {
    /// Bind `node` and `delegate` to `interface`.
    ///
    /// When `node` is `None` the delegate's own node is used.
    pub fn new(
        schema: &'a Schema,
        node: Option<NodeRef<'a>>,
        delegate: Option<BoxedDelegate<'a>>,
        interface: &'static ViewInterface,
    ) -> Self {
        let node = node.or_else(|| delegate.as_ref().and_then(|d| d.node()));
        Self {
            schema,
            interface,
            node,
            delegate,
        }
    }

    pub fn interface(&self) -> &'static ViewInterface {
        self.interface
    }

    pub fn node(&self) -> Option<NodeRef<'a>> {
        self.node
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Type name of the delegate, or `tree` when there is none.
    pub fn delegate_type(&self) -> &'static str {
        self.delegate
            .as_ref()
            .map_or(TREE_BACKED, |d| d.type_name())
    }

    /// Resolve the accessor named `accessor`.
    pub fn get(&self, accessor: &str) -> Result<Value<'a>, ModelError> {
        let declared = self
            .interface
            .accessor(accessor)
            .ok_or_else(|| ModelError::UnknownAccessor {
                interface: self.interface.name,
                accessor: accessor.to_string(),
            })?;
        self.resolve(declared).map_err(|source| self.failure(accessor, source))
    }

    fn failure(&self, accessor: &str, source: ResolveError) -> ModelError {
        ModelError::Resolution {
            interface: self.interface.name,
            accessor: accessor.to_string(),
            delegate: self.delegate_type(),
            source,
        }
    }

    fn resolve(&self, accessor: &Accessor) -> Result<Value<'a>, ResolveError> {
        if let Some(delegate) = &self.delegate {
            if let Some(result) = delegate.invoke(accessor.name) {
                tracing::trace!(
                    interface = self.interface.name,
                    accessor = accessor.name,
                    delegate = delegate.type_name(),
                    "resolved through delegate"
                );
                return self.through_delegate(accessor.shape, result?);
            }
        }
        let node = self.node.ok_or(ResolveError::NoBackingNode)?;
        self.through_tree(accessor.shape, select::property(node, accessor.name))
    }

    // ── Delegate-backed resolution ──────────────────────────────────

    fn through_delegate(&self, shape: Shape, value: DelegateValue<'a>) -> Result<Value<'a>, ResolveError> {
        match shape {
            Shape::Primitive(_) | Shape::Passthrough => raw(value),
            Shape::View(interface) => self.wrap(bridge_to_single(value), interface()),
            Shape::ListOfPrimitive(_) => bridge_to_list(value)
                .into_iter()
                .map(raw)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            Shape::ListOfView(interface) => {
                let interface = interface();
                bridge_to_list(value)
                    .into_iter()
                    .map(|item| self.wrap(item, interface))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::List)
            }
            Shape::Map | Shape::RawCollection => Err(ResolveError::unsupported_shape(shape)),
        }
    }

    /// Wrap one delegate result as a view of `interface`.
    fn wrap(&self, value: DelegateValue<'a>, interface: &'static ViewInterface) -> Result<Value<'a>, ResolveError> {
        match value {
            DelegateValue::Null => Ok(Value::Absent),
            DelegateValue::Element(delegate) => Ok(Value::View(ViewInstance::new(
                self.schema,
                None,
                Some(delegate),
                interface,
            ))),
            DelegateValue::Node(node) => Ok(self.locate(node, interface)),
            DelegateValue::Scalar(scalar) => Ok(Value::View(ViewInstance::new(
                self.schema,
                None,
                Some(Box::new(StringType::detached(scalar))),
                interface,
            ))),
            DelegateValue::List(_) => Err(ResolveError::unexpected(
                format!("element of `{}`", interface.name),
                "nested list",
            )),
        }
    }

    // ── Tree-backed resolution ──────────────────────────────────────

    fn through_tree(&self, shape: Shape, node: NodeRef<'a>) -> Result<Value<'a>, ResolveError> {
        match shape {
            Shape::Primitive(target) => self.coerce(node.node(), target),
            Shape::Passthrough => Ok(passthrough(node)),
            Shape::View(_) if node.is_null() => Ok(Value::Absent),
            Shape::View(interface) => Ok(self.locate(node, interface())),
            Shape::ListOfPrimitive(target) => select::items(node)
                .into_iter()
                .map(|item| self.coerce(item.node(), target))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            Shape::ListOfView(interface) => {
                let interface = interface();
                Ok(Value::List(
                    select::items(node)
                        .into_iter()
                        .map(|item| self.locate(item, interface))
                        .collect(),
                ))
            }
            Shape::Map | Shape::RawCollection => Err(ResolveError::unsupported_shape(shape)),
        }
    }

    fn coerce(&self, node: &Node, target: PrimitiveType) -> Result<Value<'a>, ResolveError> {
        Ok(self
            .schema
            .transformers()
            .coerce(node, target)?
            .map_or(Value::Absent, Value::Scalar))
    }

    /// A view of `interface` over `node`, with a located or fallback delegate.
    ///
    /// A keyed member with no body (`/users:`) still exists; only unkeyed
    /// nulls are absent.
    fn locate(&self, node: NodeRef<'a>, interface: &'static ViewInterface) -> Value<'a> {
        if node.is_null() && node.key().is_none() {
            return Value::Absent;
        }
        let delegate = self.schema.delegates().delegate_for(interface.name, node);
        Value::View(ViewInstance::new(self.schema, Some(node), Some(delegate), interface))
    }

    // ── Typed access ────────────────────────────────────────────────

    /// Resolve a single primitive accessor.
    pub fn primitive<P: PrimitiveValue>(&self, accessor: &str) -> Result<Option<P>, ModelError> {
        match self.get(accessor)? {
            Value::Absent => Ok(None),
            value => self.to_primitive(accessor, value).map(Some),
        }
    }

    /// Resolve a list-of-primitive accessor.
    ///
    /// Absent items (null children) are skipped; [`get`](Self::get) keeps
    /// them in place.
    pub fn primitive_list<P: PrimitiveValue>(&self, accessor: &str) -> Result<Vec<P>, ModelError> {
        self.to_list(accessor, self.get(accessor)?)?
            .into_iter()
            .filter(|item| !item.is_absent())
            .map(|item| self.to_primitive(accessor, item))
            .collect()
    }

    /// Resolve a single view accessor.
    pub fn view<V: View<'a>>(&self, accessor: &str) -> Result<Option<V>, ModelError> {
        match self.get(accessor)? {
            Value::Absent => Ok(None),
            value => self.to_view(accessor, value).map(Some),
        }
    }

    /// Resolve a list-of-view accessor.
    ///
    /// Absent items (null children) are skipped; [`get`](Self::get) keeps
    /// them in place.
    pub fn view_list<V: View<'a>>(&self, accessor: &str) -> Result<Vec<V>, ModelError> {
        self.to_list(accessor, self.get(accessor)?)?
            .into_iter()
            .filter(|item| !item.is_absent())
            .map(|item| self.to_view(accessor, item))
            .collect()
    }

    /// Resolve a passthrough accessor to its raw scalar.
    pub fn raw(&self, accessor: &str) -> Result<Option<Scalar>, ModelError> {
        match self.get(accessor)? {
            Value::Absent => Ok(None),
            Value::Scalar(scalar) => Ok(Some(scalar)),
            other => Err(self.failure(accessor, ResolveError::unexpected("scalar", other.kind()))),
        }
    }

    fn to_primitive<P: PrimitiveValue>(&self, accessor: &str, value: Value<'a>) -> Result<P, ModelError> {
        let expected = P::PRIMITIVE;
        match value {
            Value::Scalar(scalar) => P::from_scalar(&scalar).ok_or_else(|| {
                self.failure(
                    accessor,
                    ResolveError::unexpected(expected.to_string(), format!("{} `{scalar}`", scalar.kind())),
                )
            }),
            other => Err(self.failure(accessor, ResolveError::unexpected(expected.to_string(), other.kind()))),
        }
    }

    fn to_view<V: View<'a>>(&self, accessor: &str, value: Value<'a>) -> Result<V, ModelError> {
        match value {
            Value::View(instance) => Ok(V::from_instance(instance)),
            other => Err(self.failure(
                accessor,
                ResolveError::unexpected(format!("view `{}`", V::interface().name), other.kind()),
            )),
        }
    }

    fn to_list(&self, accessor: &str, value: Value<'a>) -> Result<Vec<Value<'a>>, ModelError> {
        match value {
            Value::List(items) => Ok(items),
            Value::Absent => Ok(Vec::new()),
            other => Err(self.failure(accessor, ResolveError::unexpected("list", other.kind()))),
        }
    }
}

/// Primitive and passthrough accessors take the delegate's value as is.
fn raw(value: DelegateValue<'_>) -> Result<Value<'_>, ResolveError> {
    match value {
        DelegateValue::Null => Ok(Value::Absent),
        DelegateValue::Scalar(scalar) => Ok(Value::Scalar(scalar)),
        DelegateValue::Node(node) => Ok(passthrough(node)),
        other => Err(ResolveError::unexpected("scalar", other.kind())),
    }
}

/// The raw scalar of a node.
///
/// Objects and arrays have no raw scalar form and resolve to absent.
fn passthrough(node: NodeRef<'_>) -> Value<'_> {
    match node.node() {
        Node::Simple(scalar) => Value::Scalar(scalar.clone()),
        Node::Null => Value::Absent,
        other => {
            tracing::debug!(
                node = other.kind().as_str(),
                "passthrough accessor over a non-scalar node resolves to absent"
            );
            Value::Absent
        }
    }
}

impl std::fmt::Debug for ViewInstance<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewInstance")
            .field("interface", &self.interface.name)
            .field("delegate", &self.delegate_type())
            .field("node", &self.node.map(|n| n.kind()))
            .finish()
    }
}
