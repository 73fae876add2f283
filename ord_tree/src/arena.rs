use alloc::vec::Vec;
use core::{mem, num::NonZeroUsize};

use Slot::*;

/// `NonZeroUsize::new(x).unwrap()` usable in `const` contexts
///
/// # Panics
///
/// If `x` is 0
#[inline]
pub(crate) const fn nzusize(x: usize) -> NonZeroUsize {
    match NonZeroUsize::new(x) {
        Some(x) => x,
        None => panic!("`nzusize` called with 0"),
    }
}

#[derive(Clone)]
enum Slot<T> {
    /// Links to the next vacant slot. The last vacant slot links to itself.
    Vacant(NonZeroUsize),
    Occupied(T),
}

/// The node storage of an `OrdTree`. Every node of the tree lives in one of
/// these, and the tree links between nodes are `NonZeroUsize` indexes into
/// it, so that no node owns another and the parent links cannot form
/// ownership cycles.
///
/// Index 1 is the first slot, so that `Option<NonZeroUsize>` links are the
/// size of a `usize`. Vacated slots are chained into a free list and the most
/// recently vacated slot is the first to be reused. There are no generation
/// counters, indexes never leave the tree.
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    /// Number of occupied slots
    len: usize,
    /// Head of the chain of vacant slots, `None` iff there are no vacant
    /// slots
    free_head: Option<NonZeroUsize>,
}

impl<T> NodeArena<T> {
    /// Used by tests
    #[doc(hidden)]
    pub fn _check_invariants(this: &Self) -> Result<(), &'static str> {
        let occupied = this.slots.iter().filter(|s| matches!(s, Occupied(_))).count();
        if occupied != this.len {
            return Err("`len` does not match the number of occupied slots")
        }
        let mut vacant = 0;
        let mut next = this.free_head;
        while let Some(inx) = next {
            vacant += 1;
            if vacant > this.slots.len() {
                return Err("free list has a cycle")
            }
            match this.slot(inx) {
                Some(Vacant(link)) => {
                    next = if *link == inx { None } else { Some(*link) };
                }
                Some(Occupied(_)) => return Err("free list links to an occupied slot"),
                None => return Err("free list links out of bounds"),
            }
        }
        if occupied + vacant != this.slots.len() {
            return Err("vacant slots missing from the free list")
        }
        Ok(())
    }

    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
            free_head: None,
        }
    }

    #[inline]
    fn slot(&self, inx: NonZeroUsize) -> Option<&Slot<T>> {
        self.slots.get(inx.get() - 1)
    }

    #[inline]
    fn slot_mut(&mut self, inx: NonZeroUsize) -> Option<&mut Slot<T>> {
        self.slots.get_mut(inx.get() - 1)
    }

    /// Returns the number of occupied slots
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots, occupied or vacant
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Appends `additional` vacant slots and puts them at the front of the
    /// free list, in ascending order
    pub fn reserve(&mut self, additional: usize) {
        if additional == 0 {
            return
        }
        let first = self.slots.len() + 1;
        let last = self.slots.len() + additional;
        self.slots.reserve(additional);
        for i in first..last {
            self.slots.push(Vacant(nzusize(i + 1)));
        }
        // the new chain continues into the old one, or ends on itself
        self.slots.push(Vacant(self.free_head.unwrap_or(nzusize(last))));
        self.free_head = Some(nzusize(first));
    }

    /// Puts `t` into the first vacant slot and returns its index. If there
    /// are no vacant slots, the capacity is doubled first.
    pub fn insert(&mut self, t: T) -> NonZeroUsize {
        if self.free_head.is_none() {
            self.reserve(self.slots.len().max(1));
        }
        let inx = self.free_head.unwrap();
        let slot = self.slot_mut(inx).unwrap();
        let Vacant(link) = mem::replace(slot, Occupied(t)) else {
            unreachable!("free list links to an occupied slot")
        };
        self.free_head = if link == inx { None } else { Some(link) };
        self.len += 1;
        inx
    }

    /// Returns if `inx` points to an occupied slot
    pub fn contains(&self, inx: NonZeroUsize) -> bool {
        matches!(self.slot(inx), Some(Occupied(_)))
    }

    #[must_use]
    pub fn get(&self, inx: NonZeroUsize) -> Option<&T> {
        match self.slot(inx)? {
            Occupied(t) => Some(t),
            Vacant(_) => None,
        }
    }

    #[must_use]
    pub fn get_mut(&mut self, inx: NonZeroUsize) -> Option<&mut T> {
        match self.slot_mut(inx)? {
            Occupied(t) => Some(t),
            Vacant(_) => None,
        }
    }

    /// For indexes that the tree invariants guarantee to be occupied
    ///
    /// # Panics
    ///
    /// If `inx` does not point to an occupied slot
    #[inline]
    #[track_caller]
    pub fn get_inx_unwrap(&self, inx: NonZeroUsize) -> &T {
        match self.slot(inx) {
            Some(Occupied(t)) => t,
            _ => panic!("no node at index {inx}"),
        }
    }

    /// For indexes that the tree invariants guarantee to be occupied
    ///
    /// # Panics
    ///
    /// If `inx` does not point to an occupied slot
    #[inline]
    #[track_caller]
    pub fn get_inx_mut_unwrap(&mut self, inx: NonZeroUsize) -> &mut T {
        match self.slot_mut(inx) {
            Some(Occupied(t)) => t,
            _ => panic!("no node at index {inx}"),
        }
    }

    /// Vacates the slot at `inx` and returns its `T`, or returns `None` if
    /// the slot is out of bounds or already vacant
    #[must_use]
    pub fn remove(&mut self, inx: NonZeroUsize) -> Option<T> {
        let link = self.free_head.unwrap_or(inx);
        let slot = self.slot_mut(inx)?;
        if let Vacant(_) = slot {
            return None
        }
        let Occupied(t) = mem::replace(slot, Vacant(link)) else {
            unreachable!()
        };
        self.free_head = Some(inx);
        self.len -= 1;
        Some(t)
    }

    /// Drops every `T` and frees all slots
    pub fn clear_and_shrink(&mut self) {
        self.slots = Vec::new();
        self.len = 0;
        self.free_head = None;
    }

    /// Drops every `T` and keeps the same number of slots, all vacant
    pub fn clear(&mut self) {
        let capacity = self.slots.len();
        self.slots.clear();
        self.len = 0;
        self.free_head = None;
        self.reserve(capacity);
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The clone has every `T` at the same index
impl<T: Clone> Clone for NodeArena<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            len: self.len,
            free_head: self.free_head,
        }
    }
}
