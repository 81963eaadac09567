//! Materializer tests
//!
//! Tests for view resolution independent of RAML:
//! - Tree-backed accessors and scalar coercion
//! - Delegate-backed accessors and cardinality bridging
//! - Transformer priority and delegate fallback

pub mod tests_delegates;
pub mod tests_registries;
