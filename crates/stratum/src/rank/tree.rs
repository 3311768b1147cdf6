//! Spanning tree of tight edges used by network simplex.

use crate::graph::{VertexId, VertexMap};
use crate::hierarchy::Hierarchy;

#[derive(Debug, Clone, Default)]
pub(crate) struct TreeNode {
    pub parent: Option<VertexId>,
    pub children: Vec<VertexId>,
    /// Cut value of the edge between this node and its parent.
    pub cut_value: i32,
    /// Cut value minus the contribution of the edges incident to the parent.
    pub out_cut_value: i32,
    /// Smallest postorder number in the subtree.
    pub min: usize,
    /// Postorder number.
    pub order: usize,
}

/// A tree edge: `u` is the parent, `v` the child. `dir` is `1` when the graph edge points from
/// `u` to `v` and `-1` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TreeEdge {
    pub u: VertexId,
    pub v: VertexId,
    pub dir: i32,
}

#[derive(Debug, Clone)]
pub(crate) struct TightTree {
    pub nodes: VertexMap<TreeNode>,
    pub root: VertexId,
}

impl TightTree {
    pub fn new(len: usize, root: VertexId) -> Self {
        Self {
            nodes: VertexMap::new(len, TreeNode::default()),
            root,
        }
    }

    pub fn node(&self, u: VertexId) -> &TreeNode {
        &self.nodes[u]
    }

    pub fn children(&self, u: VertexId) -> &[VertexId] {
        &self.nodes[u].children
    }

    pub fn parent(&self, u: VertexId) -> Option<VertexId> {
        self.nodes[u].parent
    }

    pub fn add_child(&mut self, parent: VertexId, child: VertexId) {
        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);
    }

    fn unlink_child(&mut self, parent: VertexId, child: VertexId) {
        let children = &mut self.nodes[parent].children;
        if let Some(i) = children.iter().position(|&c| c == child) {
            children.remove(i);
        }
    }

    /// Side of the tree `x` falls on once `e` is removed: `e.u` for the side holding the
    /// root, `e.v` for the subtree under `e.v`. Needs an up to date postorder.
    pub fn component(&self, e: TreeEdge, x: VertexId) -> VertexId {
        let child = &self.nodes[e.v];
        let node = &self.nodes[x];
        if child.min > node.min || child.order < node.order {
            e.u
        } else {
            e.v
        }
    }

    /// Orientation of the graph edge between `u` and `v`.
    pub fn dir(h: &Hierarchy, u: VertexId, v: VertexId) -> i32 {
        h.span(u, v).signum()
    }

    /// Deepest node whose subtree holds both `u` and `v`. Needs an up to date postorder.
    pub fn common_ancestor(&self, u: VertexId, v: VertexId) -> VertexId {
        let (left_min, right_order) = if self.nodes[u].order < self.nodes[v].order {
            (self.nodes[u].min, self.nodes[v].order)
        } else {
            (self.nodes[v].min, self.nodes[u].order)
        };

        let mut ancestor = u;
        while self.nodes[ancestor].min > left_min || self.nodes[ancestor].order < right_order {
            // The root covers every postorder number, so the walk stops there at the latest.
            let Some(parent) = self.nodes[ancestor].parent else {
                break;
            };
            ancestor = parent;
        }
        ancestor
    }

    /// Numbers the subtree rooted at `root` in postorder, starting at `first`.
    pub fn postorder(&mut self, root: VertexId, first: usize) {
        let mut counter = first;
        let mut stack: Vec<(VertexId, usize)> = vec![(root, 0)];
        self.nodes[root].min = counter;

        while let Some(top) = stack.last_mut() {
            let (u, next) = *top;
            if let Some(&child) = self.nodes[u].children.get(next) {
                top.1 += 1;
                self.nodes[child].min = counter;
                stack.push((child, 0));
            } else {
                self.nodes[u].order = counter;
                counter += 1;
                stack.pop();
            }
        }
    }

    /// Nodes of the subtree rooted at `root`, every node after its parent.
    pub fn preorder(&self, root: VertexId) -> Vec<VertexId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(u) = stack.pop() {
            out.push(u);
            stack.extend(self.nodes[u].children.iter().rev());
        }
        out
    }

    /// Replaces the tree edge `leaving` by `entering`. The path from `entering.v` up to
    /// `leaving.v` is reversed so that `entering.v` hangs under `entering.u`.
    pub fn exchange(&mut self, entering: TreeEdge, leaving: TreeEdge) {
        let mut parent = entering.u;
        let mut u = entering.v;
        while u != leaving.u {
            let Some(next) = self.nodes[u].parent else {
                break;
            };
            self.nodes[u].parent = Some(parent);
            self.nodes[parent].children.push(u);
            parent = u;
            u = next;
            self.unlink_child(u, parent);
        }
    }
}
