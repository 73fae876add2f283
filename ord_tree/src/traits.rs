//! The strategies an `OrdTree` is parameterized over

use core::cmp::Ordering;

/// A total order over keys. The tree calls `compare(stored_key, probe_key)`
/// at every node it visits while descending.
///
/// This is implemented for every `Fn(&K, &K) -> Ordering`, so plain closures
/// and functions such as `u64::cmp` can be used directly. The order must not
/// change while keys are stored in a tree, or the ordering invariant is lost.
pub trait Compare<K> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

impl<K, F: Fn(&K, &K) -> Ordering> Compare<K> for F {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Orders keys by their `Ord` implementation. This is the default comparator
/// of an `OrdTree`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K: Ord> Compare<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        Ord::cmp(a, b)
    }
}

/// Orders keys in the reverse of their `Ord` implementation, so that in-order
/// traversal yields descending keys
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReverseOrder;

impl<K: Ord> Compare<K> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        Ord::cmp(b, a)
    }
}

/// Derives the key of a value, for trees that are filled with
/// [OrdTree::add](crate::OrdTree::add). It is called exactly once per added
/// value and only gets a shared reference to it.
///
/// This is implemented for every `Fn(&V) -> K`.
pub trait KeyOf<V, K> {
    fn key_of(&self, v: &V) -> K;
}

impl<V, K, F: Fn(&V) -> K> KeyOf<V, K> for F {
    #[inline]
    fn key_of(&self, v: &V) -> K {
        self(v)
    }
}

/// The key extractor type of trees that are only filled through explicit
/// key-value insertion. It does not implement `KeyOf`, so `add` is not
/// available on such trees.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoKeyOf;

/// A callback for the traversals of an `OrdTree`. `visit` is called once per
/// key-value pair in the order of the traversal.
///
/// This is implemented for every `FnMut(&K, &V)`. Because the traversals only
/// borrow the tree immutably, a visitor can never mutate the tree it is
/// visiting.
pub trait Visitor<K, V> {
    fn visit(&mut self, k: &K, v: &V);
}

impl<K, V, F: FnMut(&K, &V)> Visitor<K, V> for F {
    #[inline]
    fn visit(&mut self, k: &K, v: &V) {
        self(k, v)
    }
}
