use alloc::{string::String, vec::Vec};
use core::{fmt, fmt::Write, num::NonZeroUsize};

use crate::{OrdTree, Visitor};

/// The traversals visit every node exactly once and use an explicit stack, so
/// that degenerate trees cannot overflow the call stack
impl<K, V, C, E> OrdTree<K, V, C, E> {
    /// Visits the `p_tree0` subtree, then the node, then the `p_tree1` subtree
    /// of every node. This visits keys in ascending order.
    pub fn in_order<F: Visitor<K, V> + ?Sized>(&self, visitor: &mut F) {
        let mut stack: Vec<NonZeroUsize> = Vec::new();
        let mut p = self.root;
        loop {
            while let Some(inner) = p {
                stack.push(inner);
                p = self.a.get_inx_unwrap(inner).p_tree0;
            }
            let Some(inner) = stack.pop() else { break };
            let node = self.a.get_inx_unwrap(inner);
            visitor.visit(&node.k, &node.v);
            p = node.p_tree1;
        }
    }

    /// Visits a node before either of its subtrees, the `p_tree0` subtree
    /// before the `p_tree1` subtree
    pub fn pre_order<F: Visitor<K, V> + ?Sized>(&self, visitor: &mut F) {
        let mut stack: Vec<NonZeroUsize> = self.root.into_iter().collect();
        while let Some(p) = stack.pop() {
            let node = self.a.get_inx_unwrap(p);
            visitor.visit(&node.k, &node.v);
            // pushed in reverse so that `p_tree0` is popped first
            stack.extend(node.p_tree1);
            stack.extend(node.p_tree0);
        }
    }

    /// Visits a node after both of its subtrees, the `p_tree0` subtree before
    /// the `p_tree1` subtree
    pub fn post_order<F: Visitor<K, V> + ?Sized>(&self, visitor: &mut F) {
        // the `bool` is set once the children of the node have been pushed
        let mut stack: Vec<(NonZeroUsize, bool)> =
            self.root.into_iter().map(|p| (p, false)).collect();
        while let Some((p, expanded)) = stack.pop() {
            let node = self.a.get_inx_unwrap(p);
            if expanded {
                visitor.visit(&node.k, &node.v);
            } else {
                stack.push((p, true));
                stack.extend(node.p_tree1.map(|p| (p, false)));
                stack.extend(node.p_tree0.map(|p| (p, false)));
            }
        }
    }

    /// Returns the number of nodes on the longest path from the root to a
    /// leaf. This is 0 for an empty tree and `self.len()` for a tree filled in
    /// sorted order.
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(NonZeroUsize, usize)> =
            self.root.into_iter().map(|p| (p, 1)).collect();
        while let Some((p, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            let node = self.a.get_inx_unwrap(p);
            for p_tree in [node.p_tree0, node.p_tree1].into_iter().flatten() {
                stack.push((p_tree, depth + 1));
            }
        }
        max_depth
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C, E> OrdTree<K, V, C, E> {
    /// Renders the shape of the tree sideways, one node per line in pre-order.
    /// Lesser children are marked with `←` and greater children with `→`.
    ///
    /// ```text
    /// OrdTree
    /// └─ 50: "fifty"
    ///   ← 20: "twenty"
    ///   → 80: "eighty"
    ///     ← 60: "sixty"
    /// ```
    pub fn debug(&self) -> String {
        let mut s = String::from("OrdTree");
        let Some(root) = self.root else {
            s.push_str(" ∅\n");
            return s
        };
        s.push('\n');
        let mut stack = alloc::vec![(root, 0usize, "└─")];
        while let Some((p, depth, side)) = stack.pop() {
            let node = self.a.get_inx_unwrap(p);
            for _ in 0..depth {
                s.push_str("  ");
            }
            // writing to a `String` cannot fail
            let _ = writeln!(s, "{side} {:?}: {:?}", node.k, node.v);
            stack.extend(node.p_tree1.map(|p| (p, depth + 1, "→")));
            stack.extend(node.p_tree0.map(|p| (p, depth + 1, "←")));
        }
        s
    }
}
