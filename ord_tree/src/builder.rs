use alloc::boxed::Box;
use core::cmp::Ordering;

use log::debug;

use crate::{OrdTree, TreeError};

/// A comparator chosen at runtime
pub type BoxedCompare<K> = Box<dyn Fn(&K, &K) -> Ordering>;

/// A key extractor chosen at runtime
pub type BoxedKeyOf<V, K> = Box<dyn Fn(&V) -> K>;

/// Assembles an `OrdTree` from strategies that are only known at runtime.
/// Statically known strategies should be passed to
/// [OrdTree::with_comparator] or [OrdTree::with_key_extractor] instead, which
/// cannot fail.
///
/// ```
/// use ord_tree::{OrdTreeBuilder, TreeError};
///
/// // a tree without a comparator cannot be built
/// let res = OrdTreeBuilder::<u64, &str>::new().build();
/// assert!(matches!(res, Err(TreeError::InvalidConstruction(_))));
///
/// let mut tree = OrdTreeBuilder::new()
///     .comparator(|a: &u64, b: &u64| b.cmp(a))
///     .key_extractor(|v: &&str| v.len() as u64)
///     .build_keyed()
///     .unwrap();
/// tree.add("abc");
/// tree.add("a");
/// assert_eq!(tree.values().copied().collect::<Vec<_>>(), ["abc", "a"]);
/// ```
pub struct OrdTreeBuilder<K, V> {
    cmp: Option<BoxedCompare<K>>,
    key_of: Option<BoxedKeyOf<V, K>>,
    capacity: usize,
}

impl<K, V> OrdTreeBuilder<K, V> {
    pub fn new() -> Self {
        Self {
            cmp: None,
            key_of: None,
            capacity: 0,
        }
    }

    /// Sets the comparator
    pub fn comparator<F: Fn(&K, &K) -> Ordering + 'static>(mut self, cmp: F) -> Self {
        self.cmp = Some(Box::new(cmp));
        self
    }

    /// Sets the comparator to the `Ord` implementation of `K`
    pub fn natural_order(self) -> Self
    where
        K: Ord + 'static,
    {
        self.comparator(K::cmp)
    }

    /// Sets the key extractor used by [OrdTree::add]
    pub fn key_extractor<F: Fn(&V) -> K + 'static>(mut self, key_of: F) -> Self {
        self.key_of = Some(Box::new(key_of));
        self
    }

    /// Reserves node capacity up front
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds a tree filled through [OrdTree::insert]. A key extractor, if
    /// set, is dropped.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::InvalidConstruction` if no comparator was set
    pub fn build(self) -> Result<OrdTree<K, V, BoxedCompare<K>>, TreeError> {
        let cmp = self
            .cmp
            .ok_or(TreeError::InvalidConstruction("no comparator was supplied"))?;
        let mut tree = OrdTree::with_comparator(cmp);
        tree.reserve(self.capacity);
        debug!("built tree with capacity {}", tree.capacity());
        Ok(tree)
    }

    /// Builds a tree that can also be filled through [OrdTree::add]
    ///
    /// # Errors
    ///
    /// Returns `TreeError::InvalidConstruction` if the comparator or the key
    /// extractor was not set
    pub fn build_keyed(
        self,
    ) -> Result<OrdTree<K, V, BoxedCompare<K>, BoxedKeyOf<V, K>>, TreeError> {
        let cmp = self
            .cmp
            .ok_or(TreeError::InvalidConstruction("no comparator was supplied"))?;
        let key_of = self.key_of.ok_or(TreeError::InvalidConstruction(
            "no key extractor was supplied",
        ))?;
        let mut tree = OrdTree::with_key_extractor(cmp, key_of);
        tree.reserve(self.capacity);
        debug!("built keyed tree with capacity {}", tree.capacity());
        Ok(tree)
    }
}

impl<K, V> Default for OrdTreeBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
