//! This crate exposes a self-balancing Binary Search Tree (an AVL tree) over ordered elements,
//! along with a query for every element lying within a given number of edges of another.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are defined recursively
//! using the notion of a `Node`. Each `Node` stores one element and
//! may have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for an element takes `O(height)`. An AVL tree additionally keeps the heights of
//! every `Node`'s two subtrees within one of each other, which limits the height to `O(lg N)`
//! no matter the order elements arrive in.
//!
//! ## Heights and balance factors
//!
//! A leaf has a height of `0` and an empty subtree has a height of `-1`. A `Node`'s balance
//! factor is the height of its left subtree minus the height of its right subtree, and is
//! always `-1`, `0`, or `1` once a mutating operation returns.
//!
//! # Examples
//!
//! ```
//! use avl_tree::{Tree, TreeError};
//!
//! let mut tree = Tree::from_elements([50, 25, 75, 13, 37]).unwrap();
//! assert_eq!(tree.len(), 5);
//! assert_eq!(tree.height(), 2);
//!
//! // Duplicates are silently skipped.
//! assert_eq!(tree.insert(37), Ok(false));
//!
//! let mut near = tree.elements_within_distance(&13, 2).unwrap();
//! near.sort();
//! assert_eq!(near, [&13, &25, &37, &50]);
//!
//! assert_eq!(tree.remove(&25), Ok(25));
//! assert_eq!(tree.get(&25), Err(TreeError::NotFound));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
mod error;

pub use avl::{Node, Tree};
pub use error::{Result, TreeError};
