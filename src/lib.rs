//! This crate exposes a plain (non-self-balancing) Binary Search Tree
//! (BST) acting as an ordered set of comparable values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a single
//! value and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value in the tree takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`), and
//! visiting the left subtree, then the subtree root, then the right subtree
//! yields the stored values in ascending order.
//!
//! The tree in this crate performs no rebalancing, so its height is
//! determined entirely by insertion order. Inserting values in ascending or
//! descending order produces one node per level, and every `O(height)`
//! operation degrades to `O(N)` where `N` is the number of nodes. Callers
//! that need a bounded height on adversarial input want a self-balancing
//! tree instead; [`owned::Tree::is_balanced`] reports whether a given
//! insertion order happened to produce a balanced shape.
//!
//! Each value is stored at most once. Inserting a value that is already
//! present is rejected and leaves the tree untouched, so the container
//! behaves as a set rather than a map.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod owned;

#[cfg(test)]
mod test;
