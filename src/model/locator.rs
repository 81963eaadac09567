//! Domain delegate lookup.
//!
//! The [`DelegateRegistry`] maps interface names to delegate constructors.
//! When a nested view is resolved from the tree, the registry is asked for
//! a delegate for the target interface. A missing constructor, or one that
//! fails, is never an error: the node is wrapped in a generic delegate
//! instead ([`StringType`] for scalars, [`DefaultElement`] otherwise).
//!
//! Construction failures are reported through `tracing` at `warn` level so
//! a broken domain type does not silently look like an absent one.

use super::delegate::{BoxedDelegate, DefaultElement, StringType};
use super::error::ResolveError;
use crate::nodes::NodeRef;
use rustc_hash::FxHashMap;

/// Builds a delegate from a node.
pub type DelegateConstructor = for<'a> fn(NodeRef<'a>) -> Result<BoxedDelegate<'a>, ResolveError>;

/// Interface name -> delegate constructor.
#[derive(Default, Clone)]
pub struct DelegateRegistry {
    constructors: FxHashMap<&'static str, DelegateConstructor>,
}

impl DelegateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the constructor used for views of `interface`.
    ///
    /// Replaces any constructor previously registered for that name.
    pub fn register(&mut self, interface: &'static str, constructor: DelegateConstructor) {
        self.constructors.insert(interface, constructor);
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, interface: &'static str, constructor: DelegateConstructor) -> Self {
        self.register(interface, constructor);
        self
    }

    /// The constructor registered for `interface`, if any.
    pub fn locate(&self, interface: &str) -> Option<DelegateConstructor> {
        self.constructors.get(interface).copied()
    }

    /// A delegate for `node` viewed as `interface`, falling back to a
    /// generic delegate when there is no constructor or it fails.
    pub fn delegate_for<'a>(&self, interface: &str, node: NodeRef<'a>) -> BoxedDelegate<'a> {
        if let Some(constructor) = self.locate(interface) {
            match constructor(node) {
                Ok(delegate) => return delegate,
                Err(err) => {
                    tracing::warn!(
                        interface,
                        node = node.kind().as_str(),
                        "delegate construction failed, using fallback: {err}"
                    );
                }
            }
        }
        fallback(node)
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.constructors.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl std::fmt::Debug for DelegateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.interfaces().collect();
        names.sort_unstable();
        f.debug_struct("DelegateRegistry")
            .field("interfaces", &names)
            .finish()
    }
}

/// The generic delegate for a node with no domain type.
pub fn fallback<'a>(node: NodeRef<'a>) -> BoxedDelegate<'a> {
    match StringType::new(node) {
        Some(string) => {
            tracing::trace!("no domain delegate, wrapping scalar");
            Box::new(string)
        }
        None => {
            tracing::trace!(node = node.kind().as_str(), "no domain delegate, using default element");
            Box::new(DefaultElement::new(node))
        }
    }
}
