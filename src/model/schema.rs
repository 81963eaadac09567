//! The configuration a set of views resolves against.

use super::delegate::BoxedDelegate;
use super::locator::{DelegateConstructor, DelegateRegistry};
use super::materialize::ViewInstance;
use super::shape::ViewInterface;
use super::transform::TransformerRegistry;
use super::typed::View;
use crate::nodes::{Node, NodeRef};

/// Value transformers plus domain delegates.
///
/// A schema holds no per-document state; one instance can serve any
/// number of trees and threads.
#[derive(Debug, Default)]
pub struct Schema {
    transformers: TransformerRegistry,
    delegates: DelegateRegistry,
}

impl Schema {
    /// Built-in transformers, no delegates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the transformer registry.
    pub fn with_transformers(mut self, transformers: TransformerRegistry) -> Self {
        self.transformers = transformers;
        self
    }

    /// Replace the delegate registry.
    pub fn with_delegates(mut self, delegates: DelegateRegistry) -> Self {
        self.delegates = delegates;
        self
    }

    /// Register a delegate constructor for `interface`.
    pub fn register_delegate(mut self, interface: &'static str, constructor: DelegateConstructor) -> Self {
        self.delegates.register(interface, constructor);
        self
    }

    pub fn transformers(&self) -> &TransformerRegistry {
        &self.transformers
    }

    pub fn delegates(&self) -> &DelegateRegistry {
        &self.delegates
    }

    /// Bind a node and an optional delegate to `interface`.
    pub fn materialize<'a>(
        &'a self,
        node: Option<NodeRef<'a>>,
        delegate: Option<BoxedDelegate<'a>>,
        interface: &'static ViewInterface,
    ) -> ViewInstance<'a> {
        ViewInstance::new(self, node, delegate, interface)
    }

    /// View `root` as `V`, using the delegate registered for `V` (or a
    /// generic one).
    pub fn view<'a, V: View<'a>>(&'a self, root: &'a Node) -> V {
        let node = NodeRef::root(root);
        let interface = V::interface();
        let delegate = self.delegates.delegate_for(interface.name, node);
        V::from_instance(self.materialize(Some(node), Some(delegate), interface))
    }

    /// View `root` as `V` with the given delegate.
    pub fn view_with<'a, V: View<'a>>(&'a self, root: &'a Node, delegate: BoxedDelegate<'a>) -> V {
        V::from_instance(self.materialize(Some(NodeRef::root(root)), Some(delegate), V::interface()))
    }

    /// View `root` as `V` straight from the tree, with no delegate.
    pub fn view_tree<'a, V: View<'a>>(&'a self, root: &'a Node) -> V {
        V::from_instance(self.materialize(Some(NodeRef::root(root)), None, V::interface()))
    }
}
