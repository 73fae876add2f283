use core::num::NonZeroUsize;

/// A tree node. The links are indexes into the `NodeArena` that owns every
/// node, `p_tree0` and `p_tree1` point to the lesser and greater subtrees, and
/// `p_back` points back to the parent (it is `None` only for the root).
#[derive(Clone)]
pub struct Node<K, V> {
    pub k: K,
    pub v: V,
    pub p_back: Option<NonZeroUsize>,
    pub p_tree0: Option<NonZeroUsize>,
    pub p_tree1: Option<NonZeroUsize>,
}

impl<K, V> Node<K, V> {
    pub fn new(k: K, v: V, p_back: Option<NonZeroUsize>) -> Self {
        Self {
            k,
            v,
            p_back,
            p_tree0: None,
            p_tree1: None,
        }
    }

    /// Returns `p_tree1` if `side`, else `p_tree0`
    #[inline]
    pub fn tree(&self, side: bool) -> Option<NonZeroUsize> {
        if side {
            self.p_tree1
        } else {
            self.p_tree0
        }
    }

    /// Returns `&mut p_tree1` if `side`, else `&mut p_tree0`
    #[inline]
    pub fn tree_mut(&mut self, side: bool) -> &mut Option<NonZeroUsize> {
        if side {
            &mut self.p_tree1
        } else {
            &mut self.p_tree0
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.p_tree0.is_none() && self.p_tree1.is_none()
    }
}
