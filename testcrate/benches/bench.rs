#![feature(test)]

extern crate test;
use std::collections::BTreeMap;

use ord_tree::OrdTree;
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
use test::Bencher;
use testcrate::fuzz_fill_inst;

const A: usize = B << 1;
const B: usize = 1 << 11;

fn get_std_insts() -> Vec<Result<u64, usize>> {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    // we fill the tree up to `A` elements, then randomly insert and remove the
    // same number of `B` elements, then empty it in the same random way
    let (mut insts, sim) = fuzz_fill_inst(&mut rng, &[], A, 0);
    let tmp = fuzz_fill_inst(&mut rng, &sim, B, B);
    insts.extend_from_slice(&tmp.0);
    let tmp = fuzz_fill_inst(&mut rng, &tmp.1, 0, A);
    insts.extend_from_slice(&tmp.0);
    assert!(tmp.1.is_empty());
    insts
}

#[bench]
fn std_btree(bencher: &mut Bencher) {
    let mut a = BTreeMap::<u64, u64>::new();
    let mut repr_keys = vec![];

    bencher.iter(|| {
        let insts = get_std_insts();
        for inst in insts {
            match inst {
                Ok(k) => {
                    repr_keys.push(k);
                    a.insert(k, k);
                }
                Err(inx) => {
                    a.remove(&repr_keys.swap_remove(inx)).unwrap();
                }
            }
        }
    })
}

// random keys keep the unbalanced tree at a logarithmic expected height
#[bench]
fn ord_tree_insert_delete(bencher: &mut Bencher) {
    let mut a = OrdTree::<u64, u64>::new();
    let mut repr_keys = vec![];

    bencher.iter(|| {
        let insts = get_std_insts();
        for inst in insts {
            match inst {
                Ok(k) => {
                    repr_keys.push(k);
                    a.insert(k, k);
                }
                Err(inx) => {
                    a.delete(&repr_keys.swap_remove(inx)).unwrap();
                }
            }
        }
    })
}

#[bench]
fn ord_tree_traverse(bencher: &mut Bencher) {
    let mut a = OrdTree::<u64, u64>::new();
    let (insts, _) = fuzz_fill_inst(&mut Xoshiro128StarStar::seed_from_u64(0), &[], A, 0);
    for k in insts.into_iter().flatten() {
        a.insert(k, k);
    }

    bencher.iter(|| {
        let mut sum = 0u64;
        a.in_order(&mut |_: &u64, v: &u64| sum = sum.wrapping_add(*v));
        sum
    })
}
