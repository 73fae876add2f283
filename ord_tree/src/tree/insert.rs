use core::{cmp::Ordering, mem, num::NonZeroUsize};

use log::trace;

use crate::{Compare, KeyOf, Node, OrdTree, TreeError};

impl<K, V, C: Compare<K>, E> OrdTree<K, V, C, E> {
    /// Inserts at a leaf position. Returns `Ok` with the new node if there is
    /// a new insertion. If a node with an equal key already exists, `Err`
    /// returns ownership of `k` together with either the displaced value (if
    /// `replace`, in which case `v` is now stored under the old key) or `v`
    /// itself (if not `replace`, in which case the tree is unchanged).
    pub(crate) fn raw_insert(
        &mut self,
        k: K,
        v: V,
        replace: bool,
    ) -> Result<NonZeroUsize, (K, V)> {
        let Some(mut p) = self.root else {
            let p_new = self.a.insert(Node::new(k, v, None));
            self.root = Some(p_new);
            trace!("inserted {p_new} as the root");
            return Ok(p_new)
        };
        loop {
            let node = self.a.get_inx_unwrap(p);
            // `side` is the direction from the current node toward the new key
            let side = match self.cmp.compare(&node.k, &k) {
                Ordering::Greater => false,
                Ordering::Less => true,
                Ordering::Equal => {
                    if replace {
                        let old_v = mem::replace(&mut self.a.get_inx_mut_unwrap(p).v, v);
                        trace!("replaced the value of {p}");
                        return Err((k, old_v))
                    } else {
                        return Err((k, v))
                    }
                }
            };
            if let Some(p_tree) = node.tree(side) {
                p = p_tree;
            } else {
                // attach a new leaf
                let p_new = self.a.insert(Node::new(k, v, Some(p)));
                *self.a.get_inx_mut_unwrap(p).tree_mut(side) = Some(p_new);
                trace!("attached {p_new} to {p} on side {}", side as u8);
                break Ok(p_new)
            }
        }
    }

    /// Inserts `v` under the key `k`. If there is no key equal to `k` in the
    /// tree, a new leaf node is attached and `None` is returned. If there is an
    /// equal key, its value is overwritten with `v` (the stored key is kept and
    /// the tree shape does not change) and `Some((k, old_value))` is returned.
    ///
    /// Runs in `O(height)` comparisons, no rebalancing is done.
    pub fn insert(&mut self, k: K, v: V) -> Option<(K, V)> {
        self.raw_insert(k, v, true).err()
    }

    /// Inserts `v` under the key `k` only if there is no equal key in the tree.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::DuplicateKey` and leaves the tree unchanged if an
    /// equal key is already in the tree. `k` and `v` are dropped.
    pub fn try_insert(&mut self, k: K, v: V) -> Result<(), TreeError> {
        match self.raw_insert(k, v, false) {
            Ok(_) => Ok(()),
            Err(_) => Err(TreeError::DuplicateKey),
        }
    }
}

impl<K, V, C: Compare<K>, E: KeyOf<V, K>> OrdTree<K, V, C, E> {
    /// Creates an empty tree ordered by `cmp` that derives the key of each
    /// [OrdTree::add]ed value with `key_of`
    pub const fn with_key_extractor(cmp: C, key_of: E) -> Self {
        Self {
            root: None,
            a: crate::NodeArena::new(),
            cmp,
            key_of,
        }
    }

    /// Inserts a value under the key that the key extractor derives from it.
    /// The extractor is called exactly once. Equal keys are handled the same
    /// way as in [OrdTree::insert].
    pub fn add(&mut self, v: V) -> Option<(K, V)> {
        let k = self.key_of.key_of(&v);
        self.insert(k, v)
    }

    /// Returns the key extractor of the tree
    pub fn key_extractor(&self) -> &E {
        &self.key_of
    }
}
