use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::trace;

use crate::error::{Result, TreeError};

/// Height of an empty subtree. A leaf is one level above this.
pub(crate) const EMPTY_HEIGHT: isize = -1;

/// An owning edge from a parent to a (possibly empty) subtree. All restructuring happens through
/// a `&mut Link` so that a rotated subtree root is relinked into whoever owns the link.
#[derive(Clone, Default)]
pub(crate) struct Link<T>(pub(super) Option<Box<Node<T>>>);

/// A `Node` stores one element and owns its two children (either of which may be empty). It
/// caches its height and balance factor, which are recomputed whenever the subtree below it
/// changes.
#[derive(Clone)]
pub struct Node<T> {
    pub(super) element: T,
    pub(super) left: Link<T>,
    pub(super) right: Link<T>,
    pub(super) height: isize,
    pub(super) balance_factor: isize,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("element", &self.element)
            .field("height", &self.height)
            .field("balance_factor", &self.balance_factor)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<T> Node<T> {
    fn new_boxed(element: T) -> Box<Self> {
        Box::new(Node {
            element,
            left: Link(None),
            right: Link(None),
            height: 0,
            balance_factor: 0,
        })
    }

    /// The element stored in this node.
    pub fn element(&self) -> &T {
        &self.element
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.node()
    }

    /// Number of edges on the longest path from this node down to a leaf. Leaves have a height
    /// of `0`.
    pub fn height(&self) -> isize {
        self.height
    }

    /// Height of the left subtree minus height of the right subtree.
    pub fn balance_factor(&self) -> isize {
        self.balance_factor
    }

    fn fix_height(&mut self) {
        let left_height = self.left.height();
        let right_height = self.right.height();
        self.height = 1 + left_height.max(right_height);
        self.balance_factor = left_height - right_height;
    }
}

/// Orders two elements, rejecting pairs that have no ordering between them.
pub(super) fn compare<T>(a: &T, b: &T) -> Result<Ordering>
where
    T: PartialOrd,
{
    a.partial_cmp(b)
        .ok_or(TreeError::InvalidArgument("element has no ordering relative to stored elements"))
}

impl<T> Link<T> {
    pub(super) fn node(&self) -> Option<&Node<T>> {
        self.0.as_deref()
    }

    pub(super) fn height(&self) -> isize {
        self.node().map_or(EMPTY_HEIGHT, |n| n.height)
    }

    fn balance_factor(&self) -> isize {
        self.node().map_or(0, |n| n.balance_factor)
    }

    fn take(&mut self) -> Self {
        Link(self.0.take())
    }

    /// Recomputes the root's height and balance factor and, if the root is out of balance,
    /// restores balance with a single or double rotation.
    ///
    /// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
    fn balance(&mut self) {
        let Some(root) = self.0.as_mut() else {
            return;
        };
        root.fix_height();
        match root.balance_factor {
            2 => match root.left.balance_factor() {
                -1 => self.rotate_left_right(),
                _ => self.rotate_right(),
            },
            -2 => match root.right.balance_factor() {
                1 => self.rotate_right_left(),
                _ => self.rotate_left(),
            },
            _ => {}
        }

        if cfg!(debug_assertions) {
            let Some(root) = self.node() else {
                return;
            };
            let left_height = root.left.height();
            let right_height = root.right.height();
            assert_eq!(root.height, left_height.max(right_height) + 1);
            assert!((left_height - right_height).abs() <= 1);
        }
    }

    /// Rotate self to the right. This moves the left child up vertically and self down vertically.
    /// Used to rebalance the tree when the left child is too tall. As such, it must only be called
    /// when there _is_ a left child.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///       old_root                 new_root
    ///        /     \                 /     \
    ///   new_root    z   rotate ->   x    old_root
    ///    /   \                              /  \
    ///   x     y                            y    z
    /// ```
    fn rotate_right(&mut self) {
        let mut old_root = self.0.take().expect("Cannot rotate empty tree/node.");
        let mut new_root = old_root.left.0.take().expect("Rotate right => left child");
        trace!(height = old_root.height, "rotating subtree right");

        old_root.left = new_root.right.take();
        old_root.fix_height();

        new_root.right = Link(Some(old_root));
        new_root.fix_height();
        self.0 = Some(new_root);
    }

    /// Mirror image of [`Link::rotate_right`]: the right child moves up and its left subtree is
    /// handed to the old root.
    fn rotate_left(&mut self) {
        let mut old_root = self.0.take().expect("Rotating a tree requires a root");
        let mut new_root = old_root.right.0.take().expect("Rotate left => right child");
        trace!(height = old_root.height, "rotating subtree left");

        old_root.right = new_root.left.take();
        old_root.fix_height();

        new_root.left = Link(Some(old_root));
        new_root.fix_height();
        self.0 = Some(new_root);
    }

    fn rotate_right_left(&mut self) {
        self.0
            .as_mut()
            .expect("Rotating a tree requires a root")
            .right
            .rotate_right();
        self.rotate_left();
    }

    fn rotate_left_right(&mut self) {
        self.0
            .as_mut()
            .expect("Rotating a tree requires a root")
            .left
            .rotate_left();
        self.rotate_right();
    }

    /// Unlinks the largest node of this subtree and returns its element. This is the in-order
    /// predecessor of whichever node owns this link as its left child.
    ///
    /// ## Panics
    ///
    /// When called on an empty link.
    fn remove_largest(&mut self) -> T {
        let node = self.0.as_mut().expect("Removing the largest node requires a node");
        if node.right.0.is_some() {
            let largest = node.right.remove_largest();
            self.balance();
            largest
        } else {
            // The largest node has no right child, so its left child (if any) takes its place.
            let node = self.0.take().expect("Checked above");
            let Node { element, left, .. } = *node;
            *self = left;
            element
        }
    }

    /// Unlinks the root of this subtree and returns its element.
    fn remove_root(&mut self) -> T {
        let mut node = self.0.take().expect("Removing root implies root");

        if node.left.0.is_some() && node.right.0.is_some() {
            // With two children we promote this node's predecessor. That is, the largest
            // element in this node's left subtree.
            let predecessor = node.left.remove_largest();
            let removed = mem::replace(&mut node.element, predecessor);
            self.0 = Some(node);
            self.balance();
            return removed;
        }

        let Node {
            element,
            left,
            right,
            ..
        } = *node;
        *self = if left.0.is_some() { left } else { right };
        element
    }
}

impl<T> Link<T>
where
    T: PartialOrd,
{
    /// Inserts the element below this link, returning whether a new node was created. Equal
    /// elements are left alone.
    pub(super) fn insert(&mut self, element: T) -> Result<bool> {
        let Some(node) = self.0.as_mut() else {
            self.0 = Some(Node::new_boxed(element));
            return Ok(true);
        };

        let inserted = match compare(&element, &node.element)? {
            Ordering::Less => node.left.insert(element)?,
            Ordering::Greater => node.right.insert(element)?,
            Ordering::Equal => false,
        };
        if inserted {
            self.balance();
        }
        Ok(inserted)
    }

    /// Removes the node whose element equals the given one and returns the element that was
    /// stored there. Nothing is touched unless a match is found.
    pub(super) fn remove(&mut self, element: &T) -> Result<T> {
        let node = self.0.as_mut().ok_or(TreeError::NotFound)?;
        let removed = match compare(element, &node.element)? {
            Ordering::Less => node.left.remove(element)?,
            Ordering::Greater => node.right.remove(element)?,
            Ordering::Equal => return Ok(self.remove_root()),
        };
        self.balance();
        Ok(removed)
    }

    pub(super) fn get(&self, element: &T) -> Result<&T> {
        let node = self.node().ok_or(TreeError::NotFound)?;
        match compare(element, &node.element)? {
            Ordering::Less => node.left.get(element),
            Ordering::Equal => Ok(&node.element),
            Ordering::Greater => node.right.get(element),
        }
    }
}
