//! Collecting every element within a bounded number of edges of a target element.
//!
//! The walk happens in two phases. Descending, we follow the ordinary search path to the target.
//! Unwinding, each ancestor learns its own distance from the target (one more than its child on
//! the path) and, if close enough, is collected together with the part of its *other* subtree
//! that is still in range. The subtree holding the path is never expanded a second time.

use std::cmp::Ordering;

use super::node::{compare, Link};
use crate::error::{Result, TreeError};

impl<T> Link<T>
where
    T: PartialOrd,
{
    /// Finds the target below this link, collecting qualifying elements into `found`, and
    /// returns the distance from this link's root to the target.
    pub(super) fn collect_near<'a>(
        &'a self,
        target: &T,
        max_distance: isize,
        found: &mut Vec<&'a T>,
    ) -> Result<isize> {
        let node = self.node().ok_or(TreeError::NotFound)?;

        let distance = match compare(target, &node.element)? {
            Ordering::Less => {
                let distance = node.left.collect_near(target, max_distance, found)? + 1;
                if distance <= max_distance {
                    found.push(&node.element);
                    node.right.collect_subtree(distance + 1, max_distance, found);
                }
                distance
            }
            Ordering::Greater => {
                let distance = node.right.collect_near(target, max_distance, found)? + 1;
                if distance <= max_distance {
                    found.push(&node.element);
                    node.left.collect_subtree(distance + 1, max_distance, found);
                }
                distance
            }
            Ordering::Equal => {
                found.push(&node.element);
                node.left.collect_subtree(1, max_distance, found);
                node.right.collect_subtree(1, max_distance, found);
                0
            }
        };
        Ok(distance)
    }
}

impl<T> Link<T> {
    /// Collects every element of this subtree whose distance stays within `max_distance`, given
    /// that this link's root sits `distance` edges away from the target.
    fn collect_subtree<'a>(&'a self, distance: isize, max_distance: isize, found: &mut Vec<&'a T>) {
        let Some(node) = self.node() else {
            return;
        };
        if distance > max_distance {
            return;
        }
        found.push(&node.element);
        node.left.collect_subtree(distance + 1, max_distance, found);
        node.right.collect_subtree(distance + 1, max_distance, found);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Tree, TreeError};

    /// The tree built by inserting these elements in order:
    ///
    /// ```text
    ///              50
    ///            /    \
    ///         25       75
    ///        /  \     /  \
    ///      13    37  70   80
    ///     /  \     \        \
    ///    12   15    40       85
    ///   /
    ///  10
    /// ```
    const ELEMENTS: [i32; 12] = [50, 25, 75, 13, 37, 70, 80, 12, 15, 40, 85, 10];

    fn sample_tree() -> Tree<i32> {
        Tree::from_elements(ELEMENTS).unwrap()
    }

    fn near(tree: &Tree<i32>, target: i32, max_distance: isize) -> Vec<i32> {
        let mut found: Vec<i32> = tree
            .elements_within_distance(&target, max_distance)
            .unwrap()
            .into_iter()
            .copied()
            .collect();
        found.sort();
        found
    }

    #[test]
    fn ancestors_and_their_other_subtrees_are_collected() {
        let tree = sample_tree();
        assert_eq!(near(&tree, 37, 3), [12, 13, 15, 25, 37, 40, 50, 75]);
    }

    #[test]
    fn deep_leaf_reaches_up_two_levels() {
        let tree = sample_tree();
        assert_eq!(near(&tree, 85, 2), [75, 80, 85]);
    }

    #[test]
    fn direct_neighbours_only() {
        let tree = sample_tree();
        assert_eq!(near(&tree, 13, 1), [12, 13, 15, 25]);
    }

    #[test]
    fn zero_distance_is_just_the_target() {
        let tree = sample_tree();
        assert_eq!(near(&tree, 50, 0), [50]);
        assert_eq!(near(&tree, 10, 0), [10]);
    }

    #[test]
    fn large_distance_covers_whole_tree() {
        let tree = sample_tree();
        let mut all = ELEMENTS.to_vec();
        all.sort();

        // 10 to 85 is the longest path: 10-12-13-25-50-75-80-85.
        assert_eq!(near(&tree, 10, 7), all);
        assert_eq!(near(&tree, 10, isize::MAX), all);
        assert_ne!(near(&tree, 10, 6), all);
    }

    #[test]
    fn sibling_subtree_is_not_reentered() {
        let tree = sample_tree();
        // 37 is three edges away (12-13-25-37) so its child 40 is four away and must be left out.
        assert_eq!(near(&tree, 12, 3), [10, 12, 13, 15, 25, 37, 50]);
    }

    #[test]
    fn results_hold_no_duplicates() {
        let tree = sample_tree();
        let found = tree.elements_within_distance(&25, 10).unwrap();
        assert_eq!(found.len(), tree.len());
    }

    #[test]
    fn negative_distance_is_invalid() {
        let tree = sample_tree();
        assert!(matches!(
            tree.elements_within_distance(&50, -1),
            Err(TreeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn unordered_target_is_invalid() {
        let tree = Tree::from_elements([1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(
            tree.elements_within_distance(&f64::NAN, 1),
            Err(TreeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn missing_target_is_not_found() {
        let tree = sample_tree();
        assert_eq!(
            tree.elements_within_distance(&38, 3),
            Err(TreeError::NotFound)
        );

        let empty = Tree::<i32>::new();
        assert_eq!(
            empty.elements_within_distance(&38, 3),
            Err(TreeError::NotFound)
        );
    }
}
