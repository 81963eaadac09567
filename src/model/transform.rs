//! Scalar coercion.
//!
//! A [`ValueTransformer`] turns a leaf node into a scalar of a declared
//! [`PrimitiveType`]. The [`TransformerRegistry`] keeps transformers in
//! registration order and hands each request to the first one that accepts
//! the target type. That transformer's answer is final: if it accepts and
//! then fails to convert, the failure is returned and no later transformer
//! is consulted.
//!
//! Because the first acceptor wins, more specific transformers must be
//! registered before more general ones.

use super::error::ResolveError;
use super::shape::PrimitiveType;
use crate::nodes::{Node, Scalar};

/// A scalar coercion rule.
pub trait ValueTransformer: Send + Sync {
    /// Name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Whether this transformer handles `target`.
    fn accepts(&self, target: PrimitiveType) -> bool;

    /// Convert `node` to `target`.
    ///
    /// Null nodes convert to `None`.
    fn transform(&self, node: &Node, target: PrimitiveType) -> Result<Option<Scalar>, ResolveError>;
}

/// Split a node into its scalar, or report why it has none.
fn leaf(node: &Node, target: PrimitiveType) -> Result<Option<&Scalar>, ResolveError> {
    match node {
        Node::Simple(scalar) => Ok(Some(scalar)),
        Node::Null => Ok(None),
        other => Err(ResolveError::conversion(target, other.kind().as_str())),
    }
}

/// Whether an integral float converts to `i64` without saturating.
/// `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
fn fits_i64(f: f64) -> bool {
    f >= i64::MIN as f64 && f < i64::MAX as f64
}

fn mismatch(target: PrimitiveType, scalar: &Scalar) -> ResolveError {
    ResolveError::conversion(target, format!("{} `{scalar}`", scalar.kind()))
}

// ============================================================================
// BUILT-IN TRANSFORMERS
// ============================================================================

/// Any scalar as text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextTransformer;

impl ValueTransformer for TextTransformer {
    fn name(&self) -> &'static str {
        "text"
    }

    fn accepts(&self, target: PrimitiveType) -> bool {
        target == PrimitiveType::String
    }

    fn transform(&self, node: &Node, target: PrimitiveType) -> Result<Option<Scalar>, ResolveError> {
        Ok(leaf(node, target)?.map(|s| Scalar::String(s.to_string())))
    }
}

/// Booleans, and the strings `true` / `false` in any case.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanTransformer;

impl ValueTransformer for BooleanTransformer {
    fn name(&self) -> &'static str {
        "boolean"
    }

    fn accepts(&self, target: PrimitiveType) -> bool {
        target == PrimitiveType::Boolean
    }

    fn transform(&self, node: &Node, target: PrimitiveType) -> Result<Option<Scalar>, ResolveError> {
        let Some(scalar) = leaf(node, target)? else {
            return Ok(None);
        };
        match scalar {
            Scalar::Boolean(b) => Ok(Some(Scalar::Boolean(*b))),
            Scalar::String(s) if s.eq_ignore_ascii_case("true") => Ok(Some(Scalar::Boolean(true))),
            Scalar::String(s) if s.eq_ignore_ascii_case("false") => Ok(Some(Scalar::Boolean(false))),
            other => Err(mismatch(target, other)),
        }
    }
}

/// Integers, integral floats and numeric strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerTransformer;

impl ValueTransformer for IntegerTransformer {
    fn name(&self) -> &'static str {
        "integer"
    }

    fn accepts(&self, target: PrimitiveType) -> bool {
        target == PrimitiveType::Integer
    }

    fn transform(&self, node: &Node, target: PrimitiveType) -> Result<Option<Scalar>, ResolveError> {
        let Some(scalar) = leaf(node, target)? else {
            return Ok(None);
        };
        let value = match scalar {
            Scalar::Integer(i) => Some(*i),
            Scalar::Float(f) if f.fract() == 0.0 && fits_i64(*f) => Some(*f as i64),
            Scalar::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        value
            .map(|i| Some(Scalar::Integer(i)))
            .ok_or_else(|| mismatch(target, scalar))
    }
}

/// Floats, integers and numeric strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatTransformer;

impl ValueTransformer for FloatTransformer {
    fn name(&self) -> &'static str {
        "float"
    }

    fn accepts(&self, target: PrimitiveType) -> bool {
        target == PrimitiveType::Float
    }

    fn transform(&self, node: &Node, target: PrimitiveType) -> Result<Option<Scalar>, ResolveError> {
        let Some(scalar) = leaf(node, target)? else {
            return Ok(None);
        };
        let value = match scalar {
            Scalar::String(s) => s.trim().parse::<f64>().ok(),
            other => other.as_f64(),
        };
        value
            .map(|f| Some(Scalar::Float(f)))
            .ok_or_else(|| mismatch(target, scalar))
    }
}

/// Text matching one of an enum's variants, normalized to its canonical spelling.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumTransformer;

impl ValueTransformer for EnumTransformer {
    fn name(&self) -> &'static str {
        "enum"
    }

    fn accepts(&self, target: PrimitiveType) -> bool {
        matches!(target, PrimitiveType::Enum(_))
    }

    fn transform(&self, node: &Node, target: PrimitiveType) -> Result<Option<Scalar>, ResolveError> {
        let PrimitiveType::Enum(enum_type) = target else {
            return Err(ResolveError::UnsupportedPrimitive(target));
        };
        let Some(scalar) = leaf(node, target)? else {
            return Ok(None);
        };
        enum_type
            .variant(&scalar.to_string())
            .map(|v| Some(Scalar::String(v.to_string())))
            .ok_or_else(|| mismatch(target, scalar))
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Ordered set of value transformers.
pub struct TransformerRegistry {
    transformers: Vec<Box<dyn ValueTransformer>>,
}

impl TransformerRegistry {
    /// A registry with no transformers; every coercion is unsupported.
    pub fn empty() -> Self {
        Self {
            transformers: Vec::new(),
        }
    }

    /// Append a transformer after the ones already registered.
    pub fn register(&mut self, transformer: impl ValueTransformer + 'static) {
        self.transformers.push(Box::new(transformer));
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, transformer: impl ValueTransformer + 'static) -> Self {
        self.register(transformer);
        self
    }

    /// The first transformer accepting `target`.
    pub fn find(&self, target: PrimitiveType) -> Option<&dyn ValueTransformer> {
        self.transformers
            .iter()
            .find(|t| t.accepts(target))
            .map(|t| t.as_ref())
    }

    /// Coerce `node` to `target` with the first accepting transformer.
    pub fn coerce(&self, node: &Node, target: PrimitiveType) -> Result<Option<Scalar>, ResolveError> {
        let transformer = self
            .find(target)
            .ok_or(ResolveError::UnsupportedPrimitive(target))?;
        tracing::trace!(
            transformer = transformer.name(),
            %target,
            "coercing {} node",
            node.kind().as_str()
        );
        transformer.transform(node, target)
    }

    /// Names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.transformers.iter().map(|t| t.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }
}

impl Default for TransformerRegistry {
    /// The built-in transformers: text, boolean, integer, float, enum.
    fn default() -> Self {
        Self::empty()
            .with(TextTransformer)
            .with(BooleanTransformer)
            .with(IntegerTransformer)
            .with(FloatTransformer)
            .with(EnumTransformer)
    }
}

impl std::fmt::Debug for TransformerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
