use super::node::{Link, EMPTY_HEIGHT};
use super::Tree;

impl<T> Tree<T>
where
    T: PartialOrd,
{
    /// Walks the whole tree and panics if any structural invariant is broken: strictly
    /// ascending in-order elements, cached heights and balance factors matching the real
    /// subtrees, balance factors within `-1..=1`, and the element count matching the number of
    /// nodes.
    pub fn check_consistency(&self) {
        let mut previous = None;
        let (_, num_nodes) = check_subtree(&self.root, &mut previous);
        assert_eq!(num_nodes, self.len);
    }
}

/// Returns the height and number of nodes of the subtree.
fn check_subtree<'a, T>(link: &'a Link<T>, previous: &mut Option<&'a T>) -> (isize, usize)
where
    T: PartialOrd,
{
    let Some(node) = link.node() else {
        return (EMPTY_HEIGHT, 0);
    };

    let (left_height, left_nodes) = check_subtree(&node.left, previous);
    if let Some(previous) = *previous {
        assert!(*previous < node.element, "in-order elements must strictly ascend");
    }
    *previous = Some(&node.element);
    let (right_height, right_nodes) = check_subtree(&node.right, previous);

    assert_eq!(node.height, 1 + left_height.max(right_height));
    assert_eq!(node.balance_factor, left_height - right_height);
    assert!(node.balance_factor.abs() <= 1);

    (node.height, left_nodes + right_nodes + 1)
}
