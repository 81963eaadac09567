//! RAML API definitions as typed views.
//!
//! Two interface families describe the same documents: [`v08`] for RAML 0.8
//! and [`v10`] for RAML 1.0. Both are served by one set of domain
//! delegates in [`elements`], so where the families disagree on
//! multiplicity (`mediaType`, parameter `type`) the materializer bridges
//! the difference.
//!
//! ```ignore
//! use raml_model::nodes::Node;
//! use raml_model::raml::{self, v10};
//!
//! let root = Node::from_yaml_str(source)?;
//! let api: v10::Api = raml::create_api(&root);
//! for resource in api.resources()? {
//!     println!("{:?}", resource.resource_path()?);
//! }
//! ```

pub mod elements;
pub mod v08;
pub mod v10;

use once_cell::sync::Lazy;

use crate::model::{EnumType, PrimitiveType, PrimitiveValue, Schema, View};
use crate::nodes::{Node, NodeRef, Scalar};

const PROTOCOL: EnumType = EnumType {
    name: "Protocol",
    variants: &["HTTP", "HTTPS"],
};

/// Transfer protocol of an API or method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "HTTP",
            Self::Https => "HTTPS",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PrimitiveValue for Protocol {
    const PRIMITIVE: PrimitiveType = PrimitiveType::Enum(&PROTOCOL);

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match scalar.as_str()? {
            "HTTP" => Some(Self::Http),
            "HTTPS" => Some(Self::Https),
            _ => None,
        }
    }
}

static SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .register_delegate("Api", elements::api)
        .register_delegate("Resource", elements::resource)
        .register_delegate("Method", elements::method)
        .register_delegate("Response", elements::response)
        .register_delegate("Parameter", elements::parameter)
});

/// The schema shared by both RAML families.
pub fn schema() -> &'static Schema {
    &SCHEMA
}

/// View a parsed RAML document as the `Api` of family `V`.
pub fn create_api<'a, V: View<'a>>(root: &'a Node) -> V {
    schema().view_with(root, Box::new(elements::Api::new(NodeRef::root(root))))
}
