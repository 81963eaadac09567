//! View interface descriptors.
//!
//! A [`ViewInterface`] is the static description of a view contract: its
//! name and, for each zero-argument accessor, the declared result
//! [`Shape`]. Descriptors are normally produced by
//! [`view_interface!`](crate::view_interface) and live in statics.

use std::fmt;

/// A function returning an interface descriptor.
///
/// Nested shapes refer to interfaces through a function rather than a
/// reference so that interfaces can refer to each other (and to
/// themselves, as `Resource.resources` does).
pub type InterfaceRef = fn() -> &'static ViewInterface;

/// A closed set of textual values a scalar may take.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumType {
    pub name: &'static str,
    /// Canonical spelling of each variant.
    pub variants: &'static [&'static str],
}

impl EnumType {
    /// Canonical variant matching `text`, compared case-insensitively.
    pub fn variant(&self, text: &str) -> Option<&'static str> {
        self.variants
            .iter()
            .copied()
            .find(|v| v.eq_ignore_ascii_case(text))
    }
}

/// Scalar types an accessor can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveType {
    String,
    Boolean,
    Integer,
    Float,
    Enum(&'static EnumType),
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Boolean => f.write_str("boolean"),
            Self::Integer => f.write_str("integer"),
            Self::Float => f.write_str("float"),
            Self::Enum(e) => write!(f, "enum {}", e.name),
        }
    }
}

/// Declared result shape of an accessor.
#[derive(Clone, Copy)]
pub enum Shape {
    /// A single scalar of the given type.
    Primitive(PrimitiveType),
    /// The raw scalar, whatever its type.
    Passthrough,
    /// A single nested view.
    View(InterfaceRef),
    /// An ordered list of scalars.
    ListOfPrimitive(PrimitiveType),
    /// An ordered list of nested views.
    ListOfView(InterfaceRef),
    /// An unordered map. Declarable, but has no resolution rule.
    Map,
    /// A list with no declared item type. Declarable, but has no resolution rule.
    RawCollection,
}

impl Shape {
    pub fn is_list(&self) -> bool {
        matches!(self, Self::ListOfPrimitive(_) | Self::ListOfView(_))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{p}"),
            Self::Passthrough => f.write_str("passthrough"),
            Self::View(i) => write!(f, "view `{}`", i().name),
            Self::ListOfPrimitive(p) => write!(f, "list of {p}"),
            Self::ListOfView(i) => write!(f, "list of view `{}`", i().name),
            Self::Map => f.write_str("map"),
            Self::RawCollection => f.write_str("untyped collection"),
        }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({self})")
    }
}

/// One accessor of an interface.
#[derive(Clone, Copy, Debug)]
pub struct Accessor {
    /// Accessor name, which doubles as the document property name.
    pub name: &'static str,
    pub shape: Shape,
}

/// A named contract of zero-argument accessors.
#[derive(Debug)]
pub struct ViewInterface {
    pub name: &'static str,
    pub accessors: &'static [Accessor],
}

impl ViewInterface {
    /// Look up an accessor by name.
    pub fn accessor(&self, name: &str) -> Option<&'static Accessor> {
        self.accessors.iter().find(|a| a.name == name)
    }

    pub fn accessor_names(&self) -> impl Iterator<Item = &'static str> {
        self.accessors.iter().map(|a| a.name)
    }
}
