//! This crate exposes a Red-Black Tree along with the small co-star graph
//! it was written next to.
//!
//! ## Red-Black Tree
//!
//! A Binary Search Tree keeps every key in a node's left subtree less than
//! the node's key and every key in its right subtree greater than (or equal
//! to) it. Searching takes `O(height)`, and a plain BST fed sorted input ends
//! up with a height of `N`.
//!
//! A Red-Black Tree tags every node as red or black and maintains:
//!
//! 1. The root is black.
//! 2. A red node never has a red child.
//! 3. Every path from a node down to an empty slot passes the same number of
//!    black nodes.
//!
//! Together these bound the height to `2 * lg(N + 1)`. See [`red_black`].
//!
//! ## Co-star graph
//!
//! [`tsv`] reads tab separated rows of movie casts and [`graph`] links every
//! cast member to everyone they appeared with, answering degree and
//! breadth-first traversal queries.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod graph;
pub mod red_black;
pub mod tsv;
