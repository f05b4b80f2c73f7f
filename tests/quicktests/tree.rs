use arena_bst::{NodeRef, Tree};

use crate::Order;

/// Builds a tree rooted at `root` followed by the values in `order`.
fn build(root: i8, order: &Order<i8>) -> Tree<i8> {
    let mut tree = Tree::new(root);
    tree.extend(order.values().iter().copied());
    tree
}

/// Checks the ordering invariant at `node` against every value in its subtrees.
fn ordered_at(node: NodeRef<'_, i8>) -> bool {
    let value = node.value();
    let left_ok = node
        .left()
        .map_or(true, |l| l.pre_order().all(|n| n.value() < value));
    let right_ok = node
        .right()
        .map_or(true, |r| r.pre_order().all(|n| n.value() >= value));

    left_ok && right_ok
}

quickcheck::quickcheck! {
    fn ordering_invariant_holds(root: i8, order: Order<i8>) -> bool {
        let tree = build(root, &order);
        tree.pre_order().all(ordered_at)
    }
}

quickcheck::quickcheck! {
    fn in_order_is_sorted_input(root: i8, order: Order<i8>) -> bool {
        let tree = build(root, &order);

        let mut expected = order.values().to_vec();
        expected.push(root);
        expected.sort();

        tree.in_order().map(|n| *n.value()).collect::<Vec<_>>() == expected
    }
}

quickcheck::quickcheck! {
    fn count_is_one_more_than_inserted(root: i8, order: Order<i8>) -> bool {
        let tree = build(root, &order);
        tree.count() == order.values().len() + 1
    }
}

quickcheck::quickcheck! {
    fn exactly_one_root(root: i8, order: Order<i8>) -> bool {
        let tree = build(root, &order);
        tree.pre_order().filter(|n| n.is_root()).count() == 1 && tree.root().is_root()
    }
}

quickcheck::quickcheck! {
    fn every_child_is_on_exactly_one_side(root: i8, order: Order<i8>) -> bool {
        let tree = build(root, &order);

        tree.pre_order().filter(|n| !n.is_root()).all(|n| {
            let parent = n.parent().unwrap();
            let on_left = parent.left() == Some(n);
            let on_right = parent.right() == Some(n);

            on_left != on_right && n.is_left_child() == on_left && n.is_right_child() == on_right
        })
    }
}

quickcheck::quickcheck! {
    fn repeated_value_builds_right_chain(value: i8, repeats: u8) -> bool {
        let mut tree = Tree::new(value);
        tree.extend(std::iter::repeat(value).take(repeats as usize));

        let chain = tree.pre_order().all(|n| !n.has_left_child());
        chain && tree.root().height() == repeats as usize
    }
}

quickcheck::quickcheck! {
    fn sorted_input_degenerates(xs: Vec<i8>) -> bool {
        let mut xs = xs;
        xs.sort();
        match Tree::try_from_slice(&xs) {
            Ok(tree) => tree.root().height() + 1 == xs.len(),
            Err(_) => xs.is_empty(),
        }
    }
}

quickcheck::quickcheck! {
    fn find_returns_the_shallowest_match(root: i8, order: Order<i8>, target: i8) -> bool {
        let tree = build(root, &order);
        let shallowest = tree
            .pre_order()
            .filter(|n| *n.value() == target)
            .min_by_key(|n| n.depth());

        tree.find(&target) == shallowest
    }
}

#[test]
fn description_of_small_tree() {
    let tree = Tree::from_slice(&[5, 3, 8]);
    assert_eq!(tree.root().description(), "(3) <- 5 -> (8)");
}

#[test]
fn heights_depend_on_order() {
    assert_eq!(Tree::from_slice(&[5, 3, 8, 1, 4]).root().height(), 2);
    assert_eq!(Tree::from_slice(&[1, 3, 4, 5, 8]).root().height(), 4);
}

#[test]
#[should_panic]
fn empty_sequence_is_rejected() {
    let _ = Tree::<u8>::from_slice(&[]);
}
