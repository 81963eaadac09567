//! Domain delegates for RAML documents.
//!
//! These implement the accessors that need more than a property lookup:
//! resources are the `/`-prefixed keys of their parent, methods are the
//! HTTP-verb keys of a resource, and a resource's path is the
//! concatenation of its ancestors' keys. Everything else is read from the
//! tree by the materializer.

use crate::model::{BoxedDelegate, Delegate, DelegateResult, DelegateValue, ResolveError, select};
use crate::nodes::{Node, NodeRef};

/// HTTP methods a resource may declare, in RAML spelling.
pub const HTTP_METHODS: &[&str] = &[
    "get", "patch", "put", "post", "delete", "head", "options", "trace", "connect",
];

/// Whether `key` names a nested resource.
pub fn is_resource_key(key: &str) -> bool {
    key.starts_with('/')
}

/// Whether `key` names a method.
pub fn is_method_key(key: &str) -> bool {
    HTTP_METHODS.contains(&key)
}

/// Members may be declared with no body (`/users:`), so null is accepted
/// alongside objects.
fn expect_mapping(node: NodeRef<'_>, what: &str) -> Result<(), ResolveError> {
    match node.node() {
        Node::Object(_) | Node::Null => Ok(()),
        other => Err(ResolveError::delegate(format!(
            "{what} must be a mapping, found {}",
            other.kind().as_str()
        ))),
    }
}

/// Explicit `displayName`, or the member's key.
fn display_name<'a>(node: NodeRef<'a>) -> DelegateValue<'a> {
    match select::property(node, "displayName") {
        explicit if !explicit.is_null() => DelegateValue::Node(explicit),
        _ => node.key().into(),
    }
}

// ============================================================================
// API
// ============================================================================

/// The document root.
#[derive(Debug, Clone, Copy)]
pub struct Api<'a> {
    node: NodeRef<'a>,
}

impl<'a> Api<'a> {
    pub fn new(node: NodeRef<'a>) -> Self {
        Self { node }
    }

    /// Top-level resources in document order.
    pub fn resources(&self) -> Vec<Resource<'a>> {
        self.node
            .members_where(is_resource_key)
            .into_iter()
            .map(|member| Resource::new(member, ""))
            .collect()
    }

    /// Default media types. A single value is one media type.
    pub fn media_types(&self) -> Vec<NodeRef<'a>> {
        select::items(select::property(self.node, "mediaType"))
    }
}

impl<'a> Delegate<'a> for Api<'a> {
    fn type_name(&self) -> &'static str {
        "Api"
    }

    fn node(&self) -> Option<NodeRef<'a>> {
        Some(self.node)
    }

    fn invoke(&self, accessor: &str) -> Option<DelegateResult<'a>> {
        let value = match accessor {
            "resources" => DelegateValue::list(self.resources().into_iter().map(DelegateValue::element)),
            "mediaType" => DelegateValue::list(self.media_types()),
            _ => return None,
        };
        Some(Ok(value))
    }
}

// ============================================================================
// RESOURCE
// ============================================================================

/// A resource, keyed by its relative URI.
#[derive(Debug, Clone)]
pub struct Resource<'a> {
    node: NodeRef<'a>,
    parent_path: String,
}

impl<'a> Resource<'a> {
    pub fn new(node: NodeRef<'a>, parent_path: impl Into<String>) -> Self {
        Self {
            node,
            parent_path: parent_path.into(),
        }
    }

    pub fn relative_uri(&self) -> &'a str {
        self.node.key().unwrap_or_default()
    }

    /// Full path from the API root.
    pub fn resource_path(&self) -> String {
        format!("{}{}", self.parent_path, self.relative_uri())
    }

    pub fn resources(&self) -> Vec<Resource<'a>> {
        let path = self.resource_path();
        self.node
            .members_where(is_resource_key)
            .into_iter()
            .map(|member| Resource::new(member, path.clone()))
            .collect()
    }

    pub fn methods(&self) -> Vec<Method<'a>> {
        let path = self.resource_path();
        self.node
            .members_where(is_method_key)
            .into_iter()
            .map(|member| Method::new(member, path.clone()))
            .collect()
    }
}

impl<'a> Delegate<'a> for Resource<'a> {
    fn type_name(&self) -> &'static str {
        "Resource"
    }

    fn node(&self) -> Option<NodeRef<'a>> {
        Some(self.node)
    }

    fn invoke(&self, accessor: &str) -> Option<DelegateResult<'a>> {
        let value = match accessor {
            "relativeUri" => self.relative_uri().into(),
            "resourcePath" => self.resource_path().into(),
            "displayName" => display_name(self.node),
            "resources" => DelegateValue::list(self.resources().into_iter().map(DelegateValue::element)),
            "methods" => DelegateValue::list(self.methods().into_iter().map(DelegateValue::element)),
            _ => return None,
        };
        Some(Ok(value))
    }
}

// ============================================================================
// METHOD
// ============================================================================

/// An HTTP method of a resource.
#[derive(Debug, Clone)]
pub struct Method<'a> {
    node: NodeRef<'a>,
    resource_path: String,
}

impl<'a> Method<'a> {
    pub fn new(node: NodeRef<'a>, resource_path: impl Into<String>) -> Self {
        Self {
            node,
            resource_path: resource_path.into(),
        }
    }

    pub fn method(&self) -> &'a str {
        self.node.key().unwrap_or_default()
    }
}

impl<'a> Delegate<'a> for Method<'a> {
    fn type_name(&self) -> &'static str {
        "Method"
    }

    fn node(&self) -> Option<NodeRef<'a>> {
        Some(self.node)
    }

    fn invoke(&self, accessor: &str) -> Option<DelegateResult<'a>> {
        let value = match accessor {
            "method" => self.method().into(),
            "resourcePath" => self.resource_path.clone().into(),
            "displayName" => display_name(self.node),
            _ => return None,
        };
        Some(Ok(value))
    }
}

// ============================================================================
// KEYED MEMBERS
// ============================================================================

/// A response, keyed by status code.
#[derive(Debug, Clone, Copy)]
pub struct Response<'a> {
    node: NodeRef<'a>,
}

impl<'a> Delegate<'a> for Response<'a> {
    fn type_name(&self) -> &'static str {
        "Response"
    }

    fn node(&self) -> Option<NodeRef<'a>> {
        Some(self.node)
    }

    fn invoke(&self, accessor: &str) -> Option<DelegateResult<'a>> {
        match accessor {
            "code" => Some(Ok(self.node.key().into())),
            _ => None,
        }
    }
}

/// A named parameter (URI, query or header), keyed by name.
///
/// RAML 1.0 allows a shorthand where the body is the type itself
/// (`page: integer`).
#[derive(Debug, Clone, Copy)]
pub struct Parameter<'a> {
    node: NodeRef<'a>,
}

impl<'a> Parameter<'a> {
    pub fn new(node: NodeRef<'a>) -> Self {
        Self { node }
    }

    /// The type of a shorthand declaration; `None` for a full body.
    pub fn shorthand_type(&self) -> Option<NodeRef<'a>> {
        self.node.as_scalar().map(|_| self.node)
    }
}

impl<'a> Delegate<'a> for Parameter<'a> {
    fn type_name(&self) -> &'static str {
        "Parameter"
    }

    fn node(&self) -> Option<NodeRef<'a>> {
        Some(self.node)
    }

    fn invoke(&self, accessor: &str) -> Option<DelegateResult<'a>> {
        let value = match accessor {
            "name" => self.node.key().into(),
            "displayName" => display_name(self.node),
            "type" => DelegateValue::Node(self.shorthand_type()?),
            _ => return None,
        };
        Some(Ok(value))
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

pub(crate) fn api<'a>(node: NodeRef<'a>) -> Result<BoxedDelegate<'a>, ResolveError> {
    expect_mapping(node, "api")?;
    Ok(Box::new(Api::new(node)))
}

pub(crate) fn resource<'a>(node: NodeRef<'a>) -> Result<BoxedDelegate<'a>, ResolveError> {
    expect_mapping(node, "resource")?;
    Ok(Box::new(Resource::new(node, "")))
}

pub(crate) fn method<'a>(node: NodeRef<'a>) -> Result<BoxedDelegate<'a>, ResolveError> {
    expect_mapping(node, "method")?;
    Ok(Box::new(Method::new(node, "")))
}

pub(crate) fn response<'a>(node: NodeRef<'a>) -> Result<BoxedDelegate<'a>, ResolveError> {
    expect_mapping(node, "response")?;
    Ok(Box::new(Response { node }))
}

pub(crate) fn parameter<'a>(node: NodeRef<'a>) -> Result<BoxedDelegate<'a>, ResolveError> {
    if node.as_scalar().is_none() {
        expect_mapping(node, "parameter")?;
    }
    Ok(Box::new(Parameter::new(node)))
}
