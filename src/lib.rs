//! # raml-model
//!
//! Typed, versioned views over parsed RAML API definitions.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! raml      → RAML 0.8 / 1.0 view families, domain delegates
//!   ↓
//! model     → View interfaces, materializer, transformers, delegate lookup
//!   ↓
//! nodes     → Generic document tree (object / array / scalar / null)
//! ```

// ============================================================================
// MODULES (dependency order: nodes → model → raml)
// ============================================================================

/// Document tree: Node, NodeRef, Scalar, YAML loading
pub mod nodes;

/// View materialization: interfaces, shapes, registries, Schema
pub mod model;

/// RAML view families and their delegates
pub mod raml;

// Re-export foundation types
pub use model::{ModelError, ResolveError, Schema, View, ViewInstance};
pub use nodes::{Node, NodeRef, Scalar};
