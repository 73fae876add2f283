use core::num::NonZeroUsize;

use log::trace;

use crate::{Compare, OrdTree, TreeError};

impl<K, V, C, E> OrdTree<K, V, C, E> {
    /// Unlinks the node at `p_d` from the tree and returns its key and value.
    ///
    /// A node with children is not overwritten with the payload of a
    /// neighbor, instead a neighboring node is physically moved into its
    /// position. If the removed node `d` has a `p_tree1` subtree, the
    /// replacement is the in-order successor `r` (the `p_tree0`-most node of
    /// that subtree), else it is the in-order predecessor (the `p_tree1`-most
    /// node of the `p_tree0` subtree) and every direction below is mirrored:
    ///
    /// ```text
    ///        d                    r
    ///       / \                  / \
    ///      a   x                a   s
    ///         /         =>           \
    ///        r                        t
    ///         \                        \
    ///          s                        x
    ///           \
    ///            t
    /// ```
    ///
    /// `r` takes over the `p_tree0` subtree of `d`. If `r` was not the direct
    /// child of `d`, it is cut out of its parent `x`, and the remainder of
    /// the `p_tree1` subtree of `d` is hung off the `p_tree1`-most node of the
    /// chain below `r` (`t` above, or `r` itself). Everything in that chain is
    /// less than everything remaining under `x`, so the order is preserved.
    /// Finally `r` is put into the slot of `d` in the parent of `d`, or becomes
    /// the root.
    pub(crate) fn remove_inx(&mut self, p_d: NonZeroUsize) -> (K, V) {
        let d = self.a.get_inx_unwrap(p_d);
        let d_back = d.p_back;
        let p_r = if d.is_leaf() {
            trace!("unlinking leaf {p_d}");
            None
        } else {
            // successor if there is a greater subtree, else predecessor
            let side = d.p_tree1.is_some();
            Some(self.splice_replacement(p_d, side))
        };
        if let Some(p_r) = p_r {
            self.a.get_inx_mut_unwrap(p_r).p_back = d_back;
        }
        // put the replacement (or nothing) into the old slot of `d`
        match d_back {
            Some(p_back) => {
                let parent = self.a.get_inx_mut_unwrap(p_back);
                if parent.p_tree0 == Some(p_d) {
                    parent.p_tree0 = p_r;
                } else {
                    parent.p_tree1 = p_r;
                }
            }
            None => self.root = p_r,
        }
        let d = self.a.remove(p_d).unwrap();
        (d.k, d.v)
    }

    /// Detaches the replacement for `p_d` from the `side` subtree of `p_d` and
    /// gives it both subtrees of `p_d`. The `p_back` of the replacement and
    /// the link from the parent of `p_d` are left to the caller.
    fn splice_replacement(&mut self, p_d: NonZeroUsize, side: bool) -> NonZeroUsize {
        let d = self.a.get_inx_unwrap(p_d);
        // the subtree the replacement comes from, and the subtree on the other side
        let p_far = d.tree(side).unwrap();
        let p_near = d.tree(!side);
        let p_r = self.extreme(p_far, !side);
        trace!(
            "splicing {} {p_r} into the place of {p_d}",
            if side { "successor" } else { "predecessor" }
        );
        // `r` has nothing on the near side by construction
        *self.a.get_inx_mut_unwrap(p_r).tree_mut(!side) = p_near;
        if let Some(p_near) = p_near {
            self.a.get_inx_mut_unwrap(p_near).p_back = Some(p_r);
        }
        if p_r != p_far {
            // cut `r` out of its parent, its own far chain stays with it
            let p_r_back = self.a.get_inx_unwrap(p_r).p_back.unwrap();
            *self.a.get_inx_mut_unwrap(p_r_back).tree_mut(!side) = None;
            // hang the rest of the far subtree off the end of that chain
            let p_tail = self.extreme(p_r, side);
            *self.a.get_inx_mut_unwrap(p_tail).tree_mut(side) = Some(p_far);
            self.a.get_inx_mut_unwrap(p_far).p_back = Some(p_tail);
        }
        if let Some(p_r_far) = self.a.get_inx_unwrap(p_r).tree(side) {
            self.a.get_inx_mut_unwrap(p_r_far).p_back = Some(p_r);
        }
        p_r
    }

    /// Removes and returns the key-value pair with the least key
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let p = self.extreme(self.root?, false);
        Some(self.remove_inx(p))
    }

    /// Removes and returns the key-value pair with the greatest key
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let p = self.extreme(self.root?, true);
        Some(self.remove_inx(p))
    }
}

impl<K, V, C: Compare<K>, E> OrdTree<K, V, C, E> {
    /// Removes the node with a key equal to `k` and returns the stored key and
    /// value, or `None` if there is no such key
    pub fn remove_entry(&mut self, k: &K) -> Option<(K, V)> {
        let p = self.find_inx(k)?;
        Some(self.remove_inx(p))
    }

    /// Removes the node with a key equal to `k` and returns its value. When
    /// the node has a greater subtree its in-order successor takes its place,
    /// otherwise its in-order predecessor does.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::NotFound` if there is no key equal to `k`,
    /// including when the tree is empty
    pub fn delete(&mut self, k: &K) -> Result<V, TreeError> {
        match self.remove_entry(k) {
            Some((_, v)) => Ok(v),
            None => Err(TreeError::NotFound),
        }
    }
}
