use core::{cmp::Ordering, num::NonZeroUsize};

use crate::{Compare, OrdTree};

impl<K, V, C, E> OrdTree<K, V, C, E> {
    /// Starting from `p`, follows `p_tree1` links if `side` or `p_tree0` links
    /// otherwise until there is no further node, and returns that node
    pub(crate) fn extreme(&self, mut p: NonZeroUsize, side: bool) -> NonZeroUsize {
        while let Some(next) = self.a.get_inx_unwrap(p).tree(side) {
            p = next;
        }
        p
    }

    /// Returns the node after `p` in key order
    pub(crate) fn next_inx(&self, p: NonZeroUsize) -> Option<NonZeroUsize> {
        self.step_inx(p, true)
    }

    /// Returns the node before `p` in key order
    pub(crate) fn prev_inx(&self, p: NonZeroUsize) -> Option<NonZeroUsize> {
        self.step_inx(p, false)
    }

    fn step_inx(&self, mut p: NonZeroUsize, side: bool) -> Option<NonZeroUsize> {
        let node = self.a.get_inx_unwrap(p);
        if let Some(p_tree) = node.tree(side) {
            return Some(self.extreme(p_tree, !side))
        }
        // climb until we come up from the opposite side
        let mut p_back = node.p_back;
        while let Some(p_up) = p_back {
            let up = self.a.get_inx_unwrap(p_up);
            if up.tree(side) == Some(p) {
                p = p_up;
                p_back = up.p_back;
            } else {
                return Some(p_up)
            }
        }
        None
    }

    /// Returns the key-value pair with the least key, or `None` if the tree is
    /// empty
    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        let node = self.a.get_inx_unwrap(self.extreme(self.root?, false));
        Some((&node.k, &node.v))
    }

    /// Returns the key-value pair with the greatest key, or `None` if the tree
    /// is empty
    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        let node = self.a.get_inx_unwrap(self.extreme(self.root?, true));
        Some((&node.k, &node.v))
    }
}

impl<K, V, C: Compare<K>, E> OrdTree<K, V, C, E> {
    /// Descends from the root to the node with a key equal to `k`
    pub(crate) fn find_inx(&self, k: &K) -> Option<NonZeroUsize> {
        let mut p = self.root?;
        loop {
            let node = self.a.get_inx_unwrap(p);
            match self.cmp.compare(&node.k, k) {
                Ordering::Greater => p = node.p_tree0?,
                Ordering::Equal => break Some(p),
                Ordering::Less => p = node.p_tree1?,
            }
        }
    }

    /// Returns a reference to the value stored under a key equal to `k`, or
    /// `None` if there is none. Runs in `O(height)` comparisons.
    #[must_use]
    pub fn find(&self, k: &K) -> Option<&V> {
        self.find_inx(k).map(|p| &self.a.get_inx_unwrap(p).v)
    }

    /// Like [OrdTree::find] but returns a mutable reference. Keys cannot be
    /// mutated in place since that could break the ordering.
    #[must_use]
    pub fn find_mut(&mut self, k: &K) -> Option<&mut V> {
        let p = self.find_inx(k)?;
        Some(&mut self.a.get_inx_mut_unwrap(p).v)
    }

    /// Returns the stored key and the value for a key equal to `k`
    #[must_use]
    pub fn find_key_value(&self, k: &K) -> Option<(&K, &V)> {
        self.find_inx(k).map(|p| {
            let node = self.a.get_inx_unwrap(p);
            (&node.k, &node.v)
        })
    }

    /// Returns if there is a key equal to `k` in the tree
    pub fn contains_key(&self, k: &K) -> bool {
        self.find_inx(k).is_some()
    }
}
