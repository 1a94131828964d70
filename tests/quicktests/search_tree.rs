use ordered_tree::SearchTree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and to a multiset model (a map from
/// item to how many copies are stored). This way we can ensure that after a
/// random smattering of adds and removes we have the same items in both.
fn do_ops(ops: &[Op<i8>], tree: &mut SearchTree<i8>, model: &mut BTreeMap<i8, usize>) {
    for op in ops {
        match op {
            Op::Add(x) => {
                assert!(tree.add(*x));
                *model.entry(*x).or_insert(0) += 1;
            }
            Op::Remove(x) => {
                let expected = match model.get_mut(x) {
                    Some(count) => {
                        *count -= 1;
                        if *count == 0 {
                            model.remove(x);
                        }
                        true
                    }
                    None => false,
                };
                assert_eq!(tree.remove(x), expected);
            }
            Op::Rebuild => tree.rebuild_balanced(),
        }
    }
}

fn model_items(model: &BTreeMap<i8, usize>) -> Vec<i8> {
    model
        .iter()
        .flat_map(|(x, count)| std::iter::repeat(*x).take(*count))
        .collect()
}

fn inorder(tree: &SearchTree<i8>) -> Vec<i8> {
    let mut items = Vec::new();
    tree.inorder_traverse(|x| items.push(*x));
    items
}

fn minimal_height(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = SearchTree::new();
    let mut model = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut model);

    inorder(&tree) == model_items(&model)
        && tree.len() == model.values().sum::<usize>()
        && model.keys().all(|x| tree.contains(x))
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i8>) -> bool {
    let tree: SearchTree<_> = xs.iter().copied().collect();

    let mut sorted = xs;
    sorted.sort_unstable();
    inorder(&tree) == sorted
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: SearchTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x) && tree.get_entry(x) == Ok(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: SearchTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x) && tree.get_entry(x).is_err())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: SearchTree<_> = xs.iter().copied().collect();
    let mut still_present = xs;
    for delete in &deletes {
        let removed = tree.remove(delete);
        match still_present.iter().position(|x| x == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                if !removed {
                    return false;
                }
            }
            None => {
                if removed {
                    return false;
                }
            }
        }
    }

    still_present.sort_unstable();
    tree.len() == still_present.len() && inorder(&tree) == still_present
}

#[quickcheck]
fn remove_missing_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: SearchTree<_> = xs.iter().copied().filter(|x| *x != missing).collect();
    let mut before = Vec::new();
    tree.preorder_traverse(|x| before.push(*x));

    let removed = tree.remove(&missing);
    let mut after = Vec::new();
    tree.preorder_traverse(|x| after.push(*x));

    !removed && before == after
}

#[quickcheck]
fn rebuild_keeps_items_and_minimizes_height(xs: Vec<i8>) -> bool {
    let mut tree: SearchTree<_> = xs.iter().copied().collect();
    let before = inorder(&tree);

    tree.rebuild_balanced();

    inorder(&tree) == before && tree.height() <= minimal_height(xs.len())
}

#[quickcheck]
fn clone_is_independent(xs: Vec<i8>, extra: Vec<i8>) -> bool {
    let mut tree: SearchTree<_> = xs.iter().copied().collect();
    let copy = tree.clone();
    let at_copy_time = inorder(&tree);

    for x in &xs {
        tree.remove(x);
    }
    tree.extend(extra);

    inorder(&copy) == at_copy_time
}

#[quickcheck]
fn traversals_visit_every_node(xs: Vec<i8>) -> bool {
    let tree: SearchTree<_> = xs.iter().copied().collect();
    let (mut pre, mut post) = (0, 0);
    tree.preorder_traverse(|_| pre += 1);
    tree.postorder_traverse(|_| post += 1);

    pre == xs.len() && post == xs.len() && tree.len() == xs.len()
}
