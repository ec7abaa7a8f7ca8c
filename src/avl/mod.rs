//! A self-balancing (AVL) Binary Search Tree over ordered elements.
//!
//! Every node exclusively owns its two children, so there are no parent pointers. Mutations
//! recurse down to where the work happens and rebalance each subtree root while unwinding,
//! relinking whatever node ends up on top into its parent.
//!
//! # Examples
//!
//! ```
//! use avl_tree::avl::Tree;
//! use avl_tree::TreeError;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.contains(&1), Ok(false));
//! assert_eq!(tree.height(), -1);
//!
//! assert_eq!(tree.insert(1), Ok(true));
//! assert_eq!(tree.get(&1), Ok(&1));
//!
//! // Inserting an equal element again does nothing.
//! assert_eq!(tree.insert(1), Ok(false));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing returns the element that was stored.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Err(TreeError::NotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{Result, TreeError};

#[cfg(any(test, feature = "consistency_check"))]
mod check;
mod distance;
mod node;

use node::Link;
pub use node::Node;

/// A self-balancing Binary Search Tree (specifically, an AVL tree). This can be used for
/// inserting, finding, and removing elements, and for finding every element near another one.
///
/// Elements only need [`PartialOrd`]. An element that does not compare equal to itself (such as
/// `f64::NAN`) can never be stored or looked up and is rejected with
/// [`TreeError::InvalidArgument`].
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link(None),
            len: 0,
        }
    }

    /// The root node, if the tree isn't empty. Useful for inspecting the shape of the tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.node()
    }

    /// Number of elements stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree stores no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the root node, or `-1` for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(2).unwrap();
    /// tree.insert(3).unwrap();
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        self.root.height()
    }

    /// Drops every node, leaving an empty tree.
    pub fn clear(&mut self) {
        debug!(len = self.len, "clearing tree");
        self.root = Link(None);
        self.len = 0;
    }
}

impl<T> Tree<T>
where
    T: PartialOrd,
{
    /// Builds a tree by inserting each element in iteration order. Duplicates are skipped just
    /// like [`Tree::insert`] skips them.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`] for the first element that cannot be ordered.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::Tree;
    ///
    /// let tree = Tree::from_elements([3, 1, 2, 3]).unwrap();
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root().map(|n| *n.element()), Some(2));
    /// ```
    pub fn from_elements<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        for element in elements {
            tree.insert(element)?;
        }
        debug!(len = tree.len, height = tree.height(), "built tree from elements");
        Ok(tree)
    }

    /// Inserts the element, rebalancing on the way back up. Returns whether the element was
    /// new; inserting an element equal to a stored one changes nothing and returns `false`.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`] if the element cannot be ordered. The tree is untouched.
    pub fn insert(&mut self, element: T) -> Result<bool> {
        validate(&element)?;
        let inserted = self.root.insert(element)?;
        if inserted {
            self.len += 1;
        }
        Ok(inserted)
    }

    /// Removes the element equal to the given one and returns the stored element (which compares
    /// equal to the argument but need not be identical to it).
    ///
    /// A node with two children takes over the element of its in-order predecessor, whose own
    /// node is then removed from the left subtree.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`] if the element cannot be ordered and
    /// [`TreeError::NotFound`] if nothing equal is stored. Either way the tree is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::Tree;
    ///
    /// let mut tree = Tree::from_elements([2, 1, 3]).unwrap();
    /// assert_eq!(tree.remove(&2), Ok(2));
    ///
    /// // The predecessor took the root's place.
    /// assert_eq!(tree.root().map(|n| *n.element()), Some(1));
    /// ```
    pub fn remove(&mut self, element: &T) -> Result<T> {
        validate(element)?;
        let removed = self.root.remove(element)?;
        self.len -= 1;
        trace!(len = self.len, "removed element");
        Ok(removed)
    }

    /// Returns the stored element equal to the given one.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`] if the element cannot be ordered and
    /// [`TreeError::NotFound`] if nothing equal is stored.
    pub fn get(&self, element: &T) -> Result<&T> {
        validate(element)?;
        self.root.get(element)
    }

    /// Whether an element equal to the given one is stored.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`] if the element cannot be ordered.
    pub fn contains(&self, element: &T) -> Result<bool> {
        match self.get(element) {
            Ok(_) => Ok(true),
            Err(TreeError::NotFound) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Returns every stored element whose distance to `element` is at most `max_distance`,
    /// where distance counts the edges on the path between two nodes. The target itself is
    /// included at distance `0`. The order of the returned elements is unspecified and no
    /// element appears twice.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`] if the element cannot be ordered or `max_distance` is
    /// negative and [`TreeError::NotFound`] if the element isn't stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::Tree;
    ///
    /// let tree = Tree::from_elements([50, 25, 75, 13, 37, 70, 80, 12, 15, 40, 85, 10]).unwrap();
    ///
    /// let mut near = tree.elements_within_distance(&85, 2).unwrap();
    /// near.sort();
    /// assert_eq!(near, [&75, &80, &85]);
    /// ```
    pub fn elements_within_distance(&self, element: &T, max_distance: isize) -> Result<Vec<&T>> {
        validate(element)?;
        if max_distance < 0 {
            return Err(TreeError::InvalidArgument("distance must not be negative"));
        }

        let mut found = Vec::new();
        self.root.collect_near(element, max_distance, &mut found)?;
        Ok(found)
    }
}

/// Rejects elements that don't compare equal to themselves since they could never be found.
fn validate<T>(element: &T) -> Result<()>
where
    T: PartialOrd,
{
    match element.partial_cmp(element) {
        Some(Ordering::Equal) => Ok(()),
        _ => Err(TreeError::InvalidArgument("element does not compare equal to itself")),
    }
}
