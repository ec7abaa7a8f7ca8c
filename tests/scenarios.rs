use avl_tree::{Node, Tree, TreeError};

const ELEMENTS: [i32; 12] = [50, 25, 75, 13, 37, 70, 80, 12, 15, 40, 85, 10];

/// Renders a subtree as `element(left, right)` with `-` for empty children and leaves written
/// bare, e.g. `2(1, 3)`.
fn shape(node: Option<&Node<i32>>) -> String {
    match node {
        None => "-".to_string(),
        Some(n) if n.left().is_none() && n.right().is_none() => n.element().to_string(),
        Some(n) => format!("{}({}, {})", n.element(), shape(n.left()), shape(n.right())),
    }
}

/// Checks ordering, cached heights, and balance using only the public accessors. Returns the
/// subtree height.
fn assert_balanced(node: Option<&Node<i32>>, low: Option<i32>, high: Option<i32>) -> isize {
    let Some(n) = node else {
        return -1;
    };
    let element = *n.element();
    assert!(low.map_or(true, |low| low < element));
    assert!(high.map_or(true, |high| element < high));

    let left_height = assert_balanced(n.left(), low, Some(element));
    let right_height = assert_balanced(n.right(), Some(element), high);
    assert_eq!(n.height(), 1 + left_height.max(right_height));
    assert_eq!(n.balance_factor(), left_height - right_height);
    assert!(n.balance_factor().abs() <= 1);
    n.height()
}

#[test]
fn insertion_order_produces_expected_shape() {
    let tree = Tree::from_elements(ELEMENTS).unwrap();

    assert_eq!(tree.len(), 12);
    assert_eq!(tree.height(), 4);
    assert_eq!(
        shape(tree.root()),
        "50(25(13(12(10, -), 15), 37(-, 40)), 75(70, 80(-, 85)))"
    );
    assert_balanced(tree.root(), None, None);
}

#[test]
fn removing_two_child_root_promotes_predecessor() {
    let mut tree = Tree::from_elements(ELEMENTS).unwrap();

    assert_eq!(tree.remove(&50), Ok(50));
    assert_eq!(tree.len(), 11);
    assert_eq!(tree.contains(&50), Ok(false));

    // 40 moved into the root, and the subtree under 25 lost a level and rotated right.
    assert_eq!(
        shape(tree.root()),
        "40(13(12(10, -), 25(15, 37)), 75(70, 80(-, 85)))"
    );
    assert_balanced(tree.root(), None, None);
}

#[test]
fn neighbourhood_queries_on_sample_tree() {
    let tree = Tree::from_elements(ELEMENTS).unwrap();
    let sorted = |target: i32, max_distance: isize| {
        let mut found = tree.elements_within_distance(&target, max_distance).unwrap();
        found.sort();
        found.into_iter().copied().collect::<Vec<_>>()
    };

    assert_eq!(sorted(37, 3), [12, 13, 15, 25, 37, 40, 50, 75]);
    assert_eq!(sorted(85, 2), [75, 80, 85]);
    assert_eq!(sorted(13, 1), [12, 13, 15, 25]);
}

#[test]
fn neighbourhood_query_rejects_bad_arguments() {
    let tree = Tree::from_elements(ELEMENTS).unwrap();

    assert!(matches!(
        tree.elements_within_distance(&37, -1),
        Err(TreeError::InvalidArgument(_))
    ));
    assert_eq!(
        tree.elements_within_distance(&36, 1),
        Err(TreeError::NotFound)
    );
}

#[test]
fn draining_keeps_every_intermediate_tree_balanced() {
    let mut tree = Tree::from_elements(ELEMENTS).unwrap();

    for (removed, element) in ELEMENTS.iter().enumerate() {
        assert_eq!(tree.remove(element), Ok(*element));
        assert_eq!(tree.len(), ELEMENTS.len() - removed - 1);
        assert_balanced(tree.root(), None, None);
        assert_eq!(tree.remove(element), Err(TreeError::NotFound));
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(TreeError::NotFound.to_string(), "element not found in tree");
    assert_eq!(
        TreeError::InvalidArgument("distance must not be negative").to_string(),
        "invalid argument: distance must not be negative"
    );
}
