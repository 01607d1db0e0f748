//! Tree operations: insert, remove, walk.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use super::node::NodeId;
use crate::widget::Widget;

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// The widget tree, backed by a slotmap arena.
///
/// All widgets live in a single `SlotMap`. Parent/child relationships are
/// stored in secondary maps so that node removal is O(subtree size) and lookup
/// is O(1).
pub struct Dom {
    pub(crate) nodes: SlotMap<NodeId, Box<dyn Widget>>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
}

impl Dom {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a root-level widget (no parent).
    ///
    /// If no root has been set yet, this widget becomes the root.
    pub fn insert(&mut self, widget: impl Widget + 'static) -> NodeId {
        let id = self.nodes.insert(Box::new(widget));
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert a widget as the last child of `parent`.
    ///
    /// If `parent` does not exist the widget is inserted detached.
    pub fn insert_child(&mut self, parent: NodeId, widget: impl Widget + 'static) -> NodeId {
        let id = self.nodes.insert(Box::new(widget));
        self.children.insert(id, Vec::new());
        match self.children.get_mut(parent) {
            Some(siblings) => {
                siblings.push(id);
                self.parent.insert(id, parent);
            }
            None => log::warn!("insert_child: parent {parent:?} does not exist"),
        }
        id
    }

    /// Remove a widget and all its descendants.
    ///
    /// Returns the removed widget, or `None` if it didn't exist.
    pub fn remove(&mut self, id: NodeId) -> Option<Box<dyn Widget>> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        // Detach from parent's children list.
        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }

        if self.root == Some(id) {
            self.root = None;
        }

        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed = None;

        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                to_remove.extend(kids);
            }
            self.parent.remove(current);
            let widget = self.nodes.remove(current);
            if current == id {
                removed = widget;
            }
        }

        removed
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// The children of a node. Empty if the node has none or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Immutable access to a widget.
    pub fn get(&self, id: NodeId) -> Option<&dyn Widget> {
        self.nodes.get(id).map(|w| w.as_ref())
    }

    /// Mutable access to a widget.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut (dyn Widget + 'static)> {
        self.nodes.get_mut(id).map(|w| w.as_mut())
    }

    /// Typed access to a widget.
    pub fn widget<T: Widget + 'static>(&self, id: NodeId) -> Option<&T> {
        self.get(id)?.as_any().downcast_ref::<T>()
    }

    /// Typed mutable access to a widget.
    pub fn widget_mut<T: Widget + 'static>(&mut self, id: NodeId) -> Option<&mut T> {
        self.get_mut(id)?.as_any_mut().downcast_mut::<T>()
    }

    /// The current root node, if set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Explicitly set the root node.
    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// Number of widgets in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the tree contains a widget with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            stack.extend(self.children(current).iter().rev());
        }
        result
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Dom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dom")
            .field("len", &self.nodes.len())
            .field("root", &self.root)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Static;

    /// Build a small test tree:
    /// ```text
    ///       root
    ///      /    \
    ///     a      b
    ///    / \
    ///   c   d
    /// ```
    fn build_tree() -> (Dom, NodeId, NodeId, NodeId, NodeId, NodeId) {
        let mut dom = Dom::new();
        let root = dom.insert(Static::new("root"));
        let a = dom.insert_child(root, Static::new("a"));
        let b = dom.insert_child(root, Static::new("b"));
        let c = dom.insert_child(a, Static::new("c"));
        let d = dom.insert_child(a, Static::new("d"));
        (dom, root, a, b, c, d)
    }

    #[test]
    fn first_insert_becomes_root() {
        let (dom, root, ..) = build_tree();
        assert_eq!(dom.root(), Some(root));
        assert_eq!(dom.len(), 5);
    }

    #[test]
    fn children_in_insertion_order() {
        let (dom, root, a, b, c, d) = build_tree();
        assert_eq!(dom.children(root), &[a, b]);
        assert_eq!(dom.children(a), &[c, d]);
        assert!(dom.children(b).is_empty());
        assert_eq!(dom.parent(c), Some(a));
        assert_eq!(dom.parent(root), None);
    }

    #[test]
    fn remove_subtree() {
        let (mut dom, root, a, b, c, d) = build_tree();
        let removed = dom.remove(a).unwrap();
        assert_eq!(removed.as_any().downcast_ref::<Static>().unwrap().text(), "a");
        assert!(!dom.contains(a));
        assert!(!dom.contains(c));
        assert!(!dom.contains(d));
        assert_eq!(dom.children(root), &[b]);
        assert!(dom.remove(a).is_none());
    }

    #[test]
    fn walk_is_preorder() {
        let (dom, root, a, b, c, d) = build_tree();
        assert_eq!(dom.walk_depth_first(root), vec![root, a, c, d, b]);
    }

    #[test]
    fn typed_access() {
        let (mut dom, _root, a, ..) = build_tree();
        assert!(dom.widget::<Static>(a).is_some());
        dom.widget_mut::<Static>(a).unwrap().set_text("changed");
        assert_eq!(dom.widget::<Static>(a).unwrap().text(), "changed");
    }
}
