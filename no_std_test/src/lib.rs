//! Checks that `ord_tree` builds without `std`. The functions are targets for
//! `cargo-show-asm`, for example
//!
//! `cargo asm --target=riscv32i-unknown-none-elf -p no_std_test asm_find`

#![no_std]
#![allow(clippy::all)]

use core::num::NonZeroUsize;

use ord_tree::{Node, NodeArena, OrdTree, TreeError};

// should be a bounds check and a discriminant check
pub fn asm_arena_get(a: &NodeArena<Node<u64, u64>>, inx: NonZeroUsize) -> u64 {
    a.get_inx_unwrap(inx).v
}

pub fn asm_root_key(t: &OrdTree<u64, u64>) -> Option<u64> {
    t._root().map(|p| t._arena().get_inx_unwrap(p).k)
}

pub fn asm_find(t: &OrdTree<u64, u64>, k: u64) -> Option<u64> {
    t.find(&k).copied()
}

pub fn asm_insert(t: &mut OrdTree<u64, u64>, k: u64, v: u64) -> Option<(u64, u64)> {
    t.insert(k, v)
}

pub fn asm_delete(t: &mut OrdTree<u64, u64>, k: u64) -> Result<u64, TreeError> {
    t.delete(&k)
}
