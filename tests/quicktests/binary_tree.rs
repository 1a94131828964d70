use ordered_tree::BinaryTree;
use quickcheck_macros::quickcheck;

fn sorted_items(tree: &BinaryTree<i8>) -> Vec<i8> {
    let mut items: Vec<_> = tree.iter().copied().collect();
    items.sort_unstable();
    items
}

#[quickcheck]
fn keeps_every_item(xs: Vec<i8>) -> bool {
    let tree: BinaryTree<_> = xs.iter().copied().collect();

    let mut expected = xs.clone();
    expected.sort_unstable();
    sorted_items(&tree) == expected && xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn first_item_stays_at_root(xs: Vec<i8>) -> bool {
    let tree: BinaryTree<_> = xs.iter().copied().collect();
    tree.root_data().ok() == xs.first()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: BinaryTree<_> = xs.iter().copied().collect();
    let mut still_present = xs;
    for delete in &deletes {
        let removed = tree.remove(delete);
        let expected = match still_present.iter().position(|x| x == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                true
            }
            None => false,
        };
        if removed != expected {
            return false;
        }
    }

    still_present.sort_unstable();
    tree.len() == still_present.len() && sorted_items(&tree) == still_present
}
