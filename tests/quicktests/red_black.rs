use rbtree::red_black::{Color, Node, Tree};

/// Counts black nodes on the way down to each empty slot. Returns `None` if two paths disagree
/// or a red node has a red child.
fn black_height(node: Option<&Node<i16>>) -> Option<usize> {
    let node = match node {
        None => return Some(1),
        Some(node) => node,
    };

    let red = node.color() == Color::Red;
    let red_child = [node.left(), node.right()]
        .iter()
        .flatten()
        .any(|child| child.color() == Color::Red);
    if red && red_child {
        return None;
    }

    let left = black_height(node.left())?;
    let right = black_height(node.right())?;
    if left != right {
        return None;
    }

    Some(left + usize::from(!red))
}

fn build(xs: &[i16]) -> Tree<i16> {
    xs.iter().copied().collect()
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i16>) -> bool {
    let tree = build(&xs);
    let keys: Vec<_> = tree.in_order().into_iter().map(|(key, _)| *key).collect();

    let mut sorted = xs;
    sorted.sort_unstable();
    keys == sorted
}

#[quickcheck]
fn root_is_black_after_every_insert(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();

    xs.into_iter().all(|x| {
        tree.insert(x);
        tree.root().map(Node::color) == Some(Color::Black)
    })
}

#[quickcheck]
fn no_red_red_and_even_black_height(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();

    xs.into_iter().all(|x| {
        tree.insert(x);
        black_height(tree.root()).is_some()
    })
}

#[quickcheck]
fn size_is_preserved(xs: Vec<i16>) -> bool {
    let tree = build(&xs);

    tree.len() == xs.len() && tree.pre_order().len() == xs.len()
}

#[quickcheck]
fn height_is_logarithmic(xs: Vec<i16>) -> bool {
    let tree = build(&xs);
    let bound = 2.0 * ((xs.len() + 1) as f64).log2();

    tree.height() as f64 <= bound
}

#[quickcheck]
fn sorted_input_stays_balanced(n: u8) -> bool {
    let n = i16::from(n) * 8;
    let ascending: Tree<_> = (0..n).collect();
    let descending: Tree<_> = (0..n).rev().collect();
    let bound = 2.0 * (f64::from(n) + 1.0).log2();

    ascending.height() as f64 <= bound && descending.height() as f64 <= bound
}

#[quickcheck]
fn contains_not(xs: Vec<i16>, nots: Vec<i16>) -> bool {
    let tree = build(&xs);

    nots.iter()
        .filter(|x| !xs.contains(x))
        .all(|x| !tree.contains(x))
}

#[test]
fn canonical_insertion_order() {
    let tree = build(&[19, 20, 25, 12, 17, 23, 24]);
    let keys: Vec<_> = tree.in_order().into_iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, [12, 17, 19, 20, 23, 24, 25]);

    let root = tree.root().unwrap();
    let (left, right) = (root.left().unwrap(), root.right().unwrap());
    assert_eq!(*root.key(), 20);
    assert_eq!(
        (*left.key(), *left.left().unwrap().key(), *left.right().unwrap().key()),
        (17, 12, 19)
    );
    assert_eq!(
        (*right.key(), *right.left().unwrap().key(), *right.right().unwrap().key()),
        (24, 23, 25)
    );
}

#[test]
fn single_key() {
    let tree = build(&[42]);
    let root = tree.root().unwrap();

    assert_eq!(root.color(), Color::Black);
    assert!(root.left().is_none() && root.right().is_none());
}
