//! Typed views over the generic node tree.
//!
//! This module projects an already built [`Node`](crate::nodes::Node) tree
//! onto statically declared view interfaces. It never parses, validates or
//! mutates the tree.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Generated views (view_interface!)                        │
//! │  - Api, Resource, Method ... per version family           │
//! └──────────────────────────┬───────────────────────────────┘
//!                            │ accessor call
//!                            ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  ViewInstance::get(accessor)                              │
//! │  - delegate method, else property lookup                  │
//! │  - cardinality bridging, nested views                     │
//! └─────────┬───────────────────┬────────────────────┬───────┘
//!           ▼                   ▼                    ▼
//!   TransformerRegistry   select::property    DelegateRegistry
//!   (scalar coercion)     (child lookup)      (domain delegates)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use raml_model::model::Schema;
//! use raml_model::raml::v10;
//!
//! let schema = Schema::new();
//! let api: v10::Api = schema.view(&root);
//! println!("{:?}", api.title()?);
//! ```

mod delegate;
mod error;
mod locator;
mod materialize;
mod schema;
pub mod select;
mod shape;
mod transform;
mod typed;

pub use delegate::{BoxedDelegate, DefaultElement, Delegate, DelegateResult, DelegateValue, StringType};
pub use error::{ModelError, ResolveError};
pub use locator::{DelegateConstructor, DelegateRegistry, fallback};
pub use materialize::{Value, ViewInstance, bridge_to_list, bridge_to_single};
pub use schema::Schema;
pub use shape::{Accessor, EnumType, InterfaceRef, PrimitiveType, Shape, ViewInterface};
pub use transform::{
    BooleanTransformer, EnumTransformer, FloatTransformer, IntegerTransformer, TextTransformer,
    TransformerRegistry, ValueTransformer,
};
pub use typed::{PrimitiveValue, View};
