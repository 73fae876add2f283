use core::{fmt, num::NonZeroUsize};

use log::debug;

use crate::{Compare, NaturalOrder, NoKeyOf, Node, NodeArena};

mod find;
mod insert;
mod remove;
mod traverse;

// A plain binary search tree stored on a `NodeArena`. Keys and values are
// stored in every node, `p_tree0` leads to lesser keys and `p_tree1` to greater
// keys, and every node except the root has a `p_back` to its parent. There is
// no rebalancing, the shape of the tree is entirely determined by the order of
// insertions and removals, so the height can be `O(n)` for sorted insertion
// orders. Every walk over the tree is iterative for that reason.
//
// Invariants:
//
// 0. `root.is_none()` if and only if the arena is empty
// 1. every allocated node in the arena is reachable from `root`, so
//    `self.a.len()` is the element count
// 2. the root has no `p_back`, and every other node is a child of its `p_back`
// 3. for every node, all keys in its `p_tree0` subtree compare `Less` and all
//    keys in its `p_tree1` subtree compare `Greater` under `cmp`

/// An ordered map from `K` to `V`, backed by an unbalanced binary search tree
/// with parent links. The order of keys is determined by the comparator
/// `C: Compare<K>` supplied at construction, and trees constructed with a key
/// extractor `E: KeyOf<V, K>` can also be filled with bare values through
/// [OrdTree::add].
///
/// Nodes never leave the tree, only keys and values cross the interface.
///
/// ```
/// use ord_tree::{OrdTree, TreeError};
///
/// let mut tree: OrdTree<u64, &str> = OrdTree::new();
/// for (k, v) in [(50, "fifty"), (80, "eighty"), (20, "twenty"), (60, "sixty")] {
///     assert!(tree.insert(k, v).is_none());
/// }
/// assert_eq!(tree.len(), 4);
/// assert_eq!(tree.find(&60), Some(&"sixty"));
///
/// // equal keys overwrite the value and hand the displaced pair back
/// assert_eq!(tree.insert(60, "SIXTY"), Some((60, "sixty")));
/// assert_eq!(tree.len(), 4);
///
/// // deleting the root splices its in-order successor into its place
/// assert_eq!(tree.delete(&50), Ok("fifty"));
/// assert_eq!(tree.delete(&50), Err(TreeError::NotFound));
///
/// let mut keys = vec![];
/// tree.in_order(&mut |k: &u64, _: &&str| keys.push(*k));
/// assert_eq!(keys, [20, 60, 80]);
/// ```
pub struct OrdTree<K, V, C = NaturalOrder, E = NoKeyOf> {
    pub(crate) root: Option<NonZeroUsize>,
    pub(crate) a: NodeArena<Node<K, V>>,
    pub(crate) cmp: C,
    pub(crate) key_of: E,
}

impl<K: Ord, V> OrdTree<K, V> {
    /// Creates an empty tree ordered by `K: Ord`
    pub const fn new() -> Self {
        Self {
            root: None,
            a: NodeArena::new(),
            cmp: NaturalOrder,
            key_of: NoKeyOf,
        }
    }

    /// Creates an empty tree ordered by `K: Ord` with room for `capacity`
    /// nodes
    pub fn with_capacity(capacity: usize) -> Self {
        let mut res = Self::new();
        res.reserve(capacity);
        res
    }
}

impl<K: Ord, V> Default for OrdTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: Compare<K>> OrdTree<K, V, C> {
    /// Creates an empty tree ordered by `cmp`
    pub const fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            a: NodeArena::new(),
            cmp,
            key_of: NoKeyOf,
        }
    }
}

impl<K, V, C, E> OrdTree<K, V, C, E> {
    /// Used by tests
    #[doc(hidden)]
    pub fn _check_invariants(this: &Self) -> Result<(), &'static str>
    where
        C: Compare<K>,
    {
        NodeArena::_check_invariants(&this.a)?;
        let Some(root) = this.root else {
            if this.a.is_empty() {
                return Ok(())
            } else {
                return Err("no root but the arena is not empty")
            }
        };
        match this.a.get(root) {
            Some(node) => {
                if node.p_back.is_some() {
                    return Err("root node has a back pointer")
                }
            }
            None => return Err("this.root is broken"),
        }
        // walk the whole tree and check the links in both directions
        let mut count = 0usize;
        let mut stack = alloc::vec![root];
        while let Some(p) = stack.pop() {
            count += 1;
            if count > this.a.len() {
                return Err("cycle or shared subtree")
            }
            let node = this.a.get(p).ok_or("tree link to unallocated node")?;
            if node.p_tree0.is_some() && (node.p_tree0 == node.p_tree1) {
                return Err("`p_tree0` and `p_tree1` are the same")
            }
            for p_tree in [node.p_tree0, node.p_tree1].into_iter().flatten() {
                let child = this.a.get(p_tree).ok_or("broken tree")?;
                if child.p_back != Some(p) {
                    return Err("child does not point back to its parent")
                }
                stack.push(p_tree);
            }
        }
        if count != this.a.len() {
            return Err("nodes in the arena are unreachable from the root")
        }
        // an in-order walk must see strictly increasing keys
        let mut prev: Option<&K> = None;
        for (k, _) in this.iter() {
            if let Some(prev) = prev {
                if this.cmp.compare(prev, k) != core::cmp::Ordering::Less {
                    return Err("incorrect ordering")
                }
            }
            prev = Some(k);
        }
        Ok(())
    }

    /// Returns the number of key-value pairs in the tree
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Returns if the tree is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of nodes the tree can hold before its arena needs to
    /// allocate again
    pub fn capacity(&self) -> usize {
        self.a.capacity()
    }

    /// Reserves node capacity for at least `additional` more insertions
    pub fn reserve(&mut self, additional: usize) {
        let free = self.a.capacity() - self.a.len();
        if additional > free {
            self.a.reserve(additional - free);
        }
    }

    /// Returns the comparator of the tree
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Removes every key-value pair from the tree, keeping node capacity
    pub fn clear(&mut self) {
        debug!("clearing tree of {} nodes", self.len());
        self.a.clear();
        self.root = None;
    }

    /// Removes every key-value pair from the tree and frees the node capacity
    pub fn clear_and_shrink(&mut self) {
        debug!("clearing and shrinking tree of {} nodes", self.len());
        self.a.clear_and_shrink();
        self.root = None;
    }

    /// Direct access to the node arena, for tests
    #[cfg(feature = "expose_internal_utils")]
    #[doc(hidden)]
    pub fn _arena(&self) -> &NodeArena<Node<K, V>> {
        &self.a
    }

    /// Returns the index of the root, for tests
    #[cfg(feature = "expose_internal_utils")]
    #[doc(hidden)]
    pub fn _root(&self) -> Option<NonZeroUsize> {
        self.root
    }
}

/// Implemented if all of `K`, `V`, `C`, and `E` implement `Clone`
impl<K: Clone, V: Clone, C: Clone, E: Clone> Clone for OrdTree<K, V, C, E> {
    /// The clone has the same shape as `self`
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            a: self.a.clone(),
            cmp: self.cmp.clone(),
            key_of: self.key_of.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C, E> fmt::Debug for OrdTree<K, V, C, E> {
    /// Formats as a map in ascending key order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
