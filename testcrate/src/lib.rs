use std::{cell::Cell, cmp::Ordering};

use ord_tree::Visitor;
use rand_xoshiro::{rand_core::RngCore, Xoshiro128StarStar};

/// Installs `env_logger` for tests. Use `RUST_LOG=trace` to see every link
/// change the trees make.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: u32,
    pub name: String,
}

impl Student {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
        }
    }
}

/// The key extractor for `Student`s
pub fn student_id(s: &Student) -> u32 {
    s.id
}

/// A visitor with its own state, records the ids and names it sees
#[derive(Debug, Default)]
pub struct Roster {
    pub ids: Vec<u32>,
    pub names: Vec<String>,
}

impl Visitor<u32, Student> for Roster {
    fn visit(&mut self, k: &u32, v: &Student) {
        assert_eq!(*k, v.id);
        self.ids.push(*k);
        self.names.push(v.name.clone());
    }
}

thread_local!(
    static CMP_COUNT: Cell<u64> = const { Cell::new(0) };
);

/// Returns the number of comparisons done on this thread by `counting_cmp`
/// and the `Ord` impl of `CKey`
pub fn get_cmp_count() -> u64 {
    CMP_COUNT.with(|c| c.get())
}

pub fn reset_cmp_count() {
    CMP_COUNT.with(|c| c.set(0))
}

fn inc_cmp_count() {
    CMP_COUNT.with(|c| c.set(c.get() + 1))
}

/// A comparator for `u64` that counts its calls
pub fn counting_cmp(a: &u64, b: &u64) -> Ordering {
    inc_cmp_count();
    a.cmp(b)
}

/// A key that counts how many times it is compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CKey {
    pub k: u64,
}

impl PartialOrd for CKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CKey {
    fn cmp(&self, other: &Self) -> Ordering {
        inc_cmp_count();
        self.k.cmp(&other.k)
    }
}

/// Generates `num_inserts` insertions of keys that are not in `sim` and
/// `num_removes` removals randomly interleaved. `Ok(k)` inserts `k`, and
/// `Err(inx)` removes the key at `inx` of the simulated list of keys, which
/// is updated with `swap_remove`. Removals are only generated when the list
/// is nonempty. Returns the instructions and the final list.
pub fn fuzz_fill_inst(
    rng: &mut Xoshiro128StarStar,
    sim: &[u64],
    num_inserts: usize,
    num_removes: usize,
) -> (Vec<Result<u64, usize>>, Vec<u64>) {
    let mut sim = sim.to_vec();
    let mut insts = vec![];
    let mut inserts = 0;
    let mut removes = 0;
    while (inserts < num_inserts) || (removes < num_removes) {
        let can_insert = inserts < num_inserts;
        let can_remove = (removes < num_removes) && !sim.is_empty();
        let insert = match (can_insert, can_remove) {
            (true, true) => (rng.next_u32() & 1) == 0,
            (true, false) => true,
            (false, true) => false,
            // not enough elements left to remove
            (false, false) => break,
        };
        if insert {
            let mut k = rng.next_u64();
            while sim.contains(&k) {
                k = rng.next_u64();
            }
            sim.push(k);
            insts.push(Ok(k));
            inserts += 1;
        } else {
            let inx = (rng.next_u32() as usize) % sim.len();
            sim.swap_remove(inx);
            insts.push(Err(inx));
            removes += 1;
        }
    }
    (insts, sim)
}
