use ord_tree::{OrdTree, TreeError};
use testcrate::init_logger;

fn tree_of(keys: &[u64]) -> OrdTree<u64, u64> {
    let mut tree = OrdTree::new();
    for k in keys {
        assert!(tree.insert(*k, k * 10).is_none());
    }
    OrdTree::_check_invariants(&tree).unwrap();
    tree
}

fn pre_order(tree: &OrdTree<u64, u64>) -> Vec<u64> {
    let mut v = vec![];
    tree.pre_order(&mut |k: &u64, _: &u64| v.push(*k));
    v
}

fn in_order(tree: &OrdTree<u64, u64>) -> Vec<u64> {
    tree.keys().copied().collect()
}

#[test]
fn remove_empty() {
    init_logger();
    let mut tree: OrdTree<u64, u64> = OrdTree::new();
    assert_eq!(tree.delete(&0), Err(TreeError::NotFound));
    assert_eq!(tree.remove_entry(&0), None);
    assert_eq!(tree.pop_first(), None);
    assert_eq!(tree.pop_last(), None);
    assert!(tree.is_empty());
    OrdTree::_check_invariants(&tree).unwrap();
}

#[test]
fn remove_only_root() {
    init_logger();
    let mut tree = tree_of(&[7]);
    assert_eq!(tree.delete(&7), Ok(70));
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.first(), None);
    OrdTree::_check_invariants(&tree).unwrap();
    // the tree is usable afterwards
    assert!(tree.insert(8, 80).is_none());
    assert_eq!(pre_order(&tree), [8]);
}

#[test]
fn remove_leaf() {
    init_logger();
    let mut tree = tree_of(&[50, 30, 70, 60]);
    assert_eq!(tree.delete(&60), Ok(600));
    OrdTree::_check_invariants(&tree).unwrap();
    assert_eq!(pre_order(&tree), [50, 30, 70]);
    assert_eq!(tree.delete(&30), Ok(300));
    OrdTree::_check_invariants(&tree).unwrap();
    assert_eq!(pre_order(&tree), [50, 70]);
}

#[test]
fn remove_direct_successor() {
    init_logger();
    // 30 is the direct `p_tree1` child of 20 and has no lesser child
    let mut tree = tree_of(&[50, 20, 10, 30, 40]);
    assert_eq!(tree.remove_entry(&20), Some((20, 200)));
    OrdTree::_check_invariants(&tree).unwrap();
    assert_eq!(pre_order(&tree), [50, 30, 10, 40]);
}

#[test]
fn remove_deep_successor() {
    init_logger();
    //   10
    //  /  \
    // 5    30
    //     /  \
    //    20   40
    //     \
    //      25
    //       \
    //        27
    let mut tree = tree_of(&[10, 5, 30, 20, 25, 27, 40]);
    assert_eq!(tree.height(), 5);
    assert_eq!(tree.delete(&10), Ok(100));
    OrdTree::_check_invariants(&tree).unwrap();
    assert_eq!(in_order(&tree), [5, 20, 25, 27, 30, 40]);
    // the successor 20 becomes the root and the rest of the greater subtree
    // is hung off the end of its chain
    assert_eq!(pre_order(&tree), [20, 5, 25, 27, 30, 40]);
    assert_eq!(tree.height(), 5);
}

#[test]
fn remove_predecessor() {
    init_logger();
    //        50
    //       /
    //     30
    //    /  \
    //   20   40
    //       /
    //      35
    //        \
    //         38
    let mut tree = tree_of(&[50, 30, 20, 40, 35, 38]);
    assert_eq!(tree.delete(&50), Ok(500));
    OrdTree::_check_invariants(&tree).unwrap();
    assert_eq!(in_order(&tree), [20, 30, 35, 38, 40]);
    assert_eq!(pre_order(&tree), [40, 35, 30, 20, 38]);

    // predecessor that is the direct child
    let mut tree = tree_of(&[50, 30, 20]);
    assert_eq!(tree.delete(&50), Ok(500));
    OrdTree::_check_invariants(&tree).unwrap();
    assert_eq!(pre_order(&tree), [30, 20]);
}

#[test]
fn remove_all_orders() {
    init_logger();
    let keys = [50, 25, 75, 12, 37, 62, 87, 6, 18, 31, 43, 56, 68, 81, 93];
    // remove in a few different orders, checking after every step
    for stride in [1, 2, 4, 7, 11] {
        let mut tree = tree_of(&keys);
        let mut expected: Vec<u64> = in_order(&tree);
        let mut i = 0;
        while !expected.is_empty() {
            i = (i + stride) % expected.len();
            let k = expected.remove(i);
            assert_eq!(tree.delete(&k), Ok(k * 10));
            OrdTree::_check_invariants(&tree).unwrap();
            assert_eq!(in_order(&tree), expected);
            assert_eq!(tree.len(), expected.len());
            if !expected.is_empty() {
                i %= expected.len();
            }
        }
        assert!(tree.is_empty());
    }
}

#[test]
fn pop_first_last() {
    init_logger();
    let mut tree = tree_of(&[50, 25, 75, 12, 37, 62, 87]);
    assert_eq!(tree.first(), Some((&12, &120)));
    assert_eq!(tree.last(), Some((&87, &870)));
    assert_eq!(tree.pop_first(), Some((12, 120)));
    assert_eq!(tree.pop_last(), Some((87, 870)));
    OrdTree::_check_invariants(&tree).unwrap();
    assert_eq!(tree.pop_first(), Some((25, 250)));
    assert_eq!(tree.pop_last(), Some((75, 750)));
    OrdTree::_check_invariants(&tree).unwrap();
    assert_eq!(in_order(&tree), [37, 50, 62]);
    assert_eq!(tree.pop_first(), Some((37, 370)));
    assert_eq!(tree.pop_first(), Some((50, 500)));
    assert_eq!(tree.pop_first(), Some((62, 620)));
    assert_eq!(tree.pop_first(), None);
    OrdTree::_check_invariants(&tree).unwrap();
}

#[test]
fn capacity_is_reused() {
    init_logger();
    let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7, 8]);
    let cap = tree.capacity();
    for _ in 0..100 {
        let (k, v) = tree.pop_first().unwrap();
        assert!(tree.insert(k + 100, v).is_none());
        OrdTree::_check_invariants(&tree).unwrap();
    }
    assert_eq!(tree.capacity(), cap);
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.capacity(), cap);
    OrdTree::_check_invariants(&tree).unwrap();
    tree.clear_and_shrink();
    assert_eq!(tree.capacity(), 0);
    OrdTree::_check_invariants(&tree).unwrap();
}

#[test]
fn replacement_node_is_moved() {
    init_logger();
    let mut tree = tree_of(&[50, 20, 80, 60, 90, 70]);
    let a = tree._arena();
    let p50 = tree._root().unwrap();
    let p80 = a.get_inx_unwrap(p50).p_tree1.unwrap();
    let p60 = a.get_inx_unwrap(p80).p_tree0.unwrap();
    let p70 = a.get_inx_unwrap(p60).p_tree1.unwrap();
    assert_eq!(a.get_inx_unwrap(p60).k, 60);
    assert_eq!(tree.delete(&50), Ok(500));
    OrdTree::_check_invariants(&tree).unwrap();
    // the node of 60 itself now sits at the root, nothing was copied
    assert_eq!(tree._root(), Some(p60));
    let a = tree._arena();
    assert!(!a.contains(p50));
    let root = a.get_inx_unwrap(p60);
    assert_eq!((root.k, root.v, root.p_back), (60, 600, None));
    // the chain of 60 took the rest of the greater subtree
    assert_eq!(a.get_inx_unwrap(p70).p_tree1, Some(p80));
    assert_eq!(a.get_inx_unwrap(p80).p_back, Some(p70));
    assert_eq!(a.get_inx_unwrap(p80).p_tree0, None);
    assert_eq!(pre_order(&tree), [60, 20, 70, 80, 90]);
}
