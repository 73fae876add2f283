//! Iterators for `OrdTree`

use core::{iter::FusedIterator, num::NonZeroUsize};

use crate::OrdTree;

/// An iterator over `(&K, &V)` in ascending key order. It does not allocate,
/// it steps between neighboring nodes through the parent links.
pub struct Iter<'a, K, V, C, E> {
    tree: &'a OrdTree<K, V, C, E>,
    front: Option<NonZeroUsize>,
    back: Option<NonZeroUsize>,
    remaining: usize,
}

impl<'a, K, V, C, E> Iterator for Iter<'a, K, V, C, E> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None
        }
        let p = self.front?;
        self.remaining -= 1;
        self.front = self.tree.next_inx(p);
        let node = self.tree.a.get_inx_unwrap(p);
        Some((&node.k, &node.v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V, C, E> DoubleEndedIterator for Iter<'a, K, V, C, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None
        }
        let p = self.back?;
        self.remaining -= 1;
        self.back = self.tree.prev_inx(p);
        let node = self.tree.a.get_inx_unwrap(p);
        Some((&node.k, &node.v))
    }
}

impl<'a, K, V, C, E> ExactSizeIterator for Iter<'a, K, V, C, E> {}

impl<'a, K, V, C, E> FusedIterator for Iter<'a, K, V, C, E> {}

impl<'a, K, V, C, E> Clone for Iter<'a, K, V, C, E> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// An iterator over `&K` in ascending order
pub struct Keys<'a, K, V, C, E> {
    iter: Iter<'a, K, V, C, E>,
}

impl<'a, K, V, C, E> Iterator for Keys<'a, K, V, C, E> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K, V, C, E> DoubleEndedIterator for Keys<'a, K, V, C, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(k, _)| k)
    }
}

impl<'a, K, V, C, E> ExactSizeIterator for Keys<'a, K, V, C, E> {}

/// An iterator over `&V` in ascending order of their keys
pub struct Values<'a, K, V, C, E> {
    iter: Iter<'a, K, V, C, E>,
}

impl<'a, K, V, C, E> Iterator for Values<'a, K, V, C, E> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K, V, C, E> DoubleEndedIterator for Values<'a, K, V, C, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(_, v)| v)
    }
}

impl<'a, K, V, C, E> ExactSizeIterator for Values<'a, K, V, C, E> {}

/// All the iterators here iterate in order from the least key to the greatest
/// key. The tree cannot be mutated while they exist.
impl<K, V, C, E> OrdTree<K, V, C, E> {
    /// Iteration over `(&K, &V)`
    pub fn iter(&self) -> Iter<'_, K, V, C, E> {
        let (front, back) = match self.root {
            Some(root) => (
                Some(self.extreme(root, false)),
                Some(self.extreme(root, true)),
            ),
            None => (None, None),
        };
        Iter {
            tree: self,
            front,
            back,
            remaining: self.len(),
        }
    }

    /// Iteration over `&K`
    pub fn keys(&self) -> Keys<'_, K, V, C, E> {
        Keys { iter: self.iter() }
    }

    /// Iteration over `&V`
    pub fn values(&self) -> Values<'_, K, V, C, E> {
        Values { iter: self.iter() }
    }
}

impl<'a, K, V, C, E> IntoIterator for &'a OrdTree<K, V, C, E> {
    type IntoIter = Iter<'a, K, V, C, E>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
