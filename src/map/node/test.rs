use compare::{natural, Natural};
use quickcheck::{quickcheck, TestResult};
use rand::seq::SliceRandom;
use std::fmt::Debug;
use super::{Color, Left, Link, Right, Tree};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn color<K, V>(tree: &Tree<K, V>, link: Link) -> Color {
    link.map_or(Color::Black, |id| tree[id].color)
}

// Checks ordering, parent links and coloring below `link`, returning its black-height.
fn check_subtree<K, V>(tree: &Tree<K, V>, link: Link, parent: Link, lo: Option<&K>, hi: Option<&K>)
    -> usize where K: Ord + Debug {

    let id = match link {
        None => return 1,
        Some(id) => id,
    };

    let node = &tree[id];
    assert_eq!(node.parent, parent, "stale parent link at {:?}", node.key);
    if let Some(lo) = lo { assert!(*lo < node.key, "{:?} is not above {:?}", node.key, lo); }
    if let Some(hi) = hi { assert!(node.key < *hi, "{:?} is not below {:?}", node.key, hi); }

    if node.color == Color::Red {
        assert_eq!(color(tree, node.left), Color::Black, "red child under red {:?}", node.key);
        assert_eq!(color(tree, node.right), Color::Black, "red child under red {:?}", node.key);
    }

    let left = check_subtree(tree, node.left, link, lo, Some(&node.key));
    let right = check_subtree(tree, node.right, link, Some(&node.key), hi);
    assert_eq!(left, right, "black-height differs below {:?}", node.key);

    left + if node.color == Color::Black { 1 } else { 0 }
}

pub fn assert_red_black<K, V>(tree: &Tree<K, V>) where K: Ord + Debug {
    assert_eq!(color(tree, tree.root), Color::Black);
    check_subtree(tree, tree.root, None, None, None);
}

fn height<K, V>(tree: &Tree<K, V>, link: Link) -> usize {
    link.map_or(0, |id| 1 + height(tree, tree[id].left).max(height(tree, tree[id].right)))
}

fn assert_balanced<K, V>(tree: &Tree<K, V>) {
    let bound = 2.0 * ((tree.len() + 1) as f64).log2();
    let height = height(tree, tree.root);
    assert!(height as f64 <= bound, "height {} exceeds {} for {} nodes", height, bound, tree.len());
}

fn build<K>(keys: &[K]) -> Tree<K, ()> where K: Clone + Ord + Debug {
    let cmp: Natural<K> = natural();
    let mut tree = Tree::new();

    for key in keys {
        let _ = tree.insert(&cmp, key.clone(), ());
        assert_red_black(&tree);
        assert_balanced(&tree);
    }

    tree
}

#[test]
fn test_empty() {
    let tree: Tree<u32, ()> = Tree::new();
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.root(), None);
    assert_red_black(&tree);
}

#[test]
fn test_invariants_after_each_insert() {
    fn check(keys: Vec<u32>) -> TestResult {
        build(&keys);
        TestResult::passed()
    }

    init_logging();
    quickcheck(check as fn(_) -> _);
}

#[test]
fn test_ten_thousand_shuffled() {
    init_logging();
    let mut keys: Vec<u32> = (0..10_000).collect();
    keys.shuffle(&mut rand::thread_rng());

    let tree = build(&keys);
    assert_eq!(tree.len(), keys.len());
}

#[test]
fn test_ascending_and_descending() {
    let ascending: Vec<u32> = (0..2_000).collect();
    let descending: Vec<u32> = ascending.iter().rev().cloned().collect();

    for keys in &[ascending, descending] {
        let tree = build(keys);
        assert_eq!(tree.len(), 2_000);
    }
}

#[test]
fn test_duplicate_rejected() {
    let cmp: Natural<i32> = natural();
    let mut tree = Tree::new();

    assert!(tree.insert(&cmp, 3, "a").is_ok());
    assert!(tree.insert(&cmp, 1, "b").is_ok());
    assert_eq!(tree.insert(&cmp, 3, "c").err(), Some((3, "c")));
    assert_eq!(tree.len(), 2);

    let id = tree.find(&cmp, &3).unwrap();
    assert_eq!(tree[id].value, "a");
}

#[test]
fn test_rotations_preserve_order() {
    let cmp: Natural<i32> = natural();
    let mut tree = Tree::new();
    for key in 0..7 { tree.insert(&cmp, key, ()).unwrap(); }

    let in_order = |tree: &Tree<i32, ()>| {
        let mut keys = vec![];
        let mut link = tree.root().map(|root| tree.extremum::<Left>(root));
        while let Some(id) = link {
            keys.push(tree[id].key);
            link = tree.neighbor::<Right>(id);
        }
        keys
    };

    let root = tree.root().unwrap();
    let old_root_key = tree[root].key;

    tree.rotate::<Left>(root);
    assert_eq!(in_order(&tree), (0..7).collect::<Vec<_>>());
    let new_root = tree.root().unwrap();
    assert!(new_root != root);
    assert_eq!(tree[new_root].parent, None);
    assert_eq!(tree[root].parent, Some(new_root));

    tree.rotate::<Right>(new_root);
    assert_eq!(in_order(&tree), (0..7).collect::<Vec<_>>());
    assert_eq!(tree.root(), Some(root));
    assert_eq!(tree[root].key, old_root_key);
}

#[test]
fn test_fixup_cases() {
    // each sequence drives a distinct fixup branch at the third insert
    for keys in &[[2, 1, 3], [3, 2, 1], [1, 2, 3], [3, 1, 2], [1, 3, 2]] {
        let tree = build(keys);
        let root = tree.root().unwrap();
        assert_eq!(tree[root].key, 2, "sequence {:?}", keys);
        assert_eq!(height(&tree, tree.root), 2);
    }

    // a red uncle only recolors
    let cmp: Natural<i32> = natural();
    let tree = build(&[2, 1, 3, 4]);
    let colors: Vec<_> = (1..5).map(|key| {
        let id = tree.find(&cmp, &key).unwrap();
        tree[id].color
    }).collect();
    assert_eq!(colors, [Color::Black, Color::Black, Color::Black, Color::Red]);
}

#[test]
fn test_neighbors() {
    let cmp: Natural<u32> = natural();
    let tree = build(&(0..100).map(|i| i * 2).collect::<Vec<u32>>());

    for key in 0..100 {
        let id = tree.find(&cmp, &(key * 2)).unwrap();
        let pred = tree.neighbor::<Left>(id).map(|id| tree[id].key);
        let succ = tree.neighbor::<Right>(id).map(|id| tree[id].key);
        assert_eq!(pred, if key == 0 { None } else { Some(key * 2 - 2) });
        assert_eq!(succ, if key == 99 { None } else { Some(key * 2 + 2) });
    }

    assert_eq!(tree.find(&cmp, &3), None);
}
