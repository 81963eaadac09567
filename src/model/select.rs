//! Property lookup.

use crate::nodes::NodeRef;

/// The child of `node` stored under `name`.
///
/// Returns the null node when `node` is not an object or has no such key.
/// A missing property is a normal value, not an error.
pub fn property<'a>(node: NodeRef<'a>, name: &str) -> NodeRef<'a> {
    node.node()
        .as_object()
        .and_then(|object| object.get_entry(name))
        .map(|(key, child)| NodeRef::keyed(key, child))
        .unwrap_or_else(NodeRef::null)
}

/// Split a property node into the items a list accessor iterates.
///
/// Objects yield their members and arrays their elements, in order. A
/// single scalar is a one-element list. Null yields nothing.
pub fn items(node: NodeRef<'_>) -> Vec<NodeRef<'_>> {
    if node.is_null() {
        Vec::new()
    } else if node.node().is_container() {
        node.children()
    } else {
        vec![node]
    }
}
