//! This crate exposes an unbalanced Binary Search Tree (BST) that keeps
//! every element it is given, duplicates included.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The invariants of the BST in this crate are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than _or equal to_ its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). [`tree::OrderedTree`]
//! does no balancing at all, so inserting already-sorted values builds a chain
//! and every operation degrades to `O(N)`. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the
//! right subtree.
//!
//! [`record::VideoGame`] is a small record type that can be stored in a tree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod record;
pub mod tree;
