//! Error types for view resolution.

use super::shape::PrimitiveType;
use thiserror::Error;

/// Why a single resolution failed.
///
/// Never returned on its own from an accessor; it is the `source` of a
/// [`ModelError::Resolution`].
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No transformer in the registry accepts the declared scalar type.
    #[error("no value transformer accepts `{0}`")]
    UnsupportedPrimitive(PrimitiveType),

    /// The declared result shape has no resolution rule.
    #[error("unsupported result shape: {0}")]
    UnsupportedShape(String),

    /// A transformer accepted the type but could not convert the node.
    #[error("cannot convert {found} to `{target}`")]
    Conversion { target: PrimitiveType, found: String },

    /// The accessor has to be read from the tree but the delegate has no node.
    #[error("delegate has no backing node")]
    NoBackingNode,

    /// A value of the wrong kind reached a declared shape.
    #[error("expected {expected}, found {found}")]
    UnexpectedValue { expected: String, found: String },

    /// A domain delegate method failed.
    #[error("{0}")]
    Delegate(String),
}

impl ResolveError {
    /// Create an unsupported shape error.
    pub fn unsupported_shape(shape: impl ToString) -> Self {
        Self::UnsupportedShape(shape.to_string())
    }

    /// Create a conversion error.
    pub fn conversion(target: PrimitiveType, found: impl Into<String>) -> Self {
        Self::Conversion {
            target,
            found: found.into(),
        }
    }

    /// Create an unexpected value error.
    pub fn unexpected(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::UnexpectedValue {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a delegate failure.
    pub fn delegate(message: impl Into<String>) -> Self {
        Self::Delegate(message.into())
    }
}

/// Errors returned by accessor calls on a view.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Resolving a declared accessor failed.
    #[error("cannot resolve `{interface}.{accessor}` on {delegate}")]
    Resolution {
        interface: &'static str,
        accessor: String,
        delegate: &'static str,
        #[source]
        source: ResolveError,
    },

    /// The interface declares no accessor with this name.
    #[error("`{interface}` has no accessor `{accessor}`")]
    UnknownAccessor {
        interface: &'static str,
        accessor: String,
    },
}

impl ModelError {
    /// The underlying resolution failure, if any.
    pub fn cause(&self) -> Option<&ResolveError> {
        match self {
            Self::Resolution { source, .. } => Some(source),
            Self::UnknownAccessor { .. } => None,
        }
    }

    /// Name of the accessor that failed.
    pub fn accessor(&self) -> &str {
        match self {
            Self::Resolution { accessor, .. } | Self::UnknownAccessor { accessor, .. } => accessor,
        }
    }
}
