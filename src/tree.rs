//! An unbalanced BST. Every node owns its children directly, so there are no parent pointers and
//! no shared nodes. Nothing is ever rotated - the shape of the tree is decided entirely by the
//! order elements were inserted in.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::error::TreeError;
//! use ordered_tree::tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.height(), -1);
//! assert_eq!(tree.find_min(), Err(TreeError::EmptyTree { operation: "find_min" }));
//!
//! for x in [5, 3, 8, 1, 4] {
//!     tree.insert(x);
//! }
//!
//! // In-order traversal is sorted.
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 8]);
//! assert_eq!(tree.find_max(), Ok(&8));
//! assert_eq!(tree.height(), 2);
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&5), Ok(5));
//! assert_eq!(tree.remove(&5), Err(TreeError::NotFound));
//! assert_eq!(tree.size(), 4);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::mem;

use crate::error::{Result, TreeError};

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree without any balancing. Elements that compare less than or equal to a node
/// live in its left subtree and elements that compare greater live in its right subtree, so
/// duplicates are kept and pile up to the left.
pub struct OrderedTree<T> {
    root: Link<T>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    // Sorted input leaves us with a chain as long as the tree so the default, recursive, drop of
    // `Box<Node>` could overflow the stack.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for OrderedTree<T>
where
    T: Clone,
{
    /// Deep copies the tree node for node. The copy has exactly the same shape as the original and
    /// shares nothing with it.
    fn clone(&self) -> Self {
        // Post-order hands us both children before their parent, so the roots of the copied
        // subtrees are always on top of `built`: the right one first, then the left one.
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        let mut nodes = self.post_order();
        while let Some(node) = nodes.next_node() {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                value: node.value.clone(),
                left,
                right,
            }));
        }
        Self { root: built.pop() }
    }
}

impl<T> PartialEq for OrderedTree<T>
where
    T: PartialEq,
{
    /// Two trees are equal when they have the same shape and hold equal elements in the same
    /// positions. Trees with the same elements arranged differently are _not_ equal.
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self.root.as_deref(), other.root.as_deref())];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) if a.value == b.value => {
                    stack.push((a.left.as_deref(), b.left.as_deref()));
                    stack.push((a.right.as_deref(), b.right.as_deref()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T> Eq for OrderedTree<T> where T: Eq {}

/// A piece of `Debug` output still to be written.
enum DebugPiece<'a, T> {
    Link(Option<&'a Node<T>>),
    Text(&'static str),
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    // Writes the same text a derived `Debug` on the nodes would, without recursing once per
    // level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrderedTree { root: ")?;
        let mut stack = vec![DebugPiece::Link(self.root.as_deref())];
        while let Some(piece) = stack.pop() {
            match piece {
                DebugPiece::Text(text) => f.write_str(text)?,
                DebugPiece::Link(None) => f.write_str("None")?,
                DebugPiece::Link(Some(node)) => {
                    f.write_str("Some(Node { value: ")?;
                    fmt::Debug::fmt(&node.value, f)?;
                    f.write_str(", left: ")?;
                    stack.push(DebugPiece::Text(" })"));
                    stack.push(DebugPiece::Link(node.right.as_deref()));
                    stack.push(DebugPiece::Text(", right: "));
                    stack.push(DebugPiece::Link(node.left.as_deref()));
                }
            }
        }
        f.write_str(" }")
    }
}

impl<T> fmt::Display for OrderedTree<T>
where
    T: fmt::Display,
{
    /// Writes the elements in sorted order separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.in_order().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(x, f)?;
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<T> OrderedTree<T> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree holds no elements at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in the tree. This walks the whole tree so it is `O(n)`.
    pub fn size(&self) -> usize {
        self.pre_order().count()
    }

    /// The number of edges on the longest path from the root down to a leaf. A tree with a single
    /// node has a height of `0` and, by convention, an empty tree has a height of `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Sorted input degenerates into a chain.
    /// tree.extend([2, 3, 4]);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut stack: Vec<(&Node<T>, isize)> =
            self.root.as_deref().map(|root| (root, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        height
    }

    /// The element stored at the root of the tree.
    pub fn root(&self) -> Result<&T> {
        self.root_node("root").map(|root| &root.value)
    }

    /// The smallest element in the tree. When it is in the tree more than once this is the
    /// leftmost copy.
    pub fn find_min(&self) -> Result<&T> {
        self.root_node("find_min").map(|root| &root.leftmost().value)
    }

    /// The largest element in the tree.
    pub fn find_max(&self) -> Result<&T> {
        self.root_node("find_max").map(|root| &root.rightmost().value)
    }

    /// Visits every element root first, then the left subtree, then the right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Visits every element in sorted order: the left subtree, then the root, then the right
    /// subtree.
    pub fn in_order(&self) -> InOrder<'_, T> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Visits every element with both subtrees before the root: the left subtree, then the right
    /// subtree, then the root.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: self.root.as_deref().map(|root| (root, false)).into_iter().collect(),
        }
    }

    fn root_node(&self, operation: &'static str) -> Result<&Node<T>> {
        self.root
            .as_deref()
            .ok_or(TreeError::EmptyTree { operation })
    }
}

impl<T> OrderedTree<T>
where
    T: Ord,
{
    /// Whether an element comparing equal to `x` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, x: &T) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match x.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Equal => return true,
                Ordering::Greater => &node.right,
            };
        }
        false
    }

    /// Adds `x` to the tree as a new leaf. Nothing is ever rejected or overwritten: an element
    /// equal to one already in the tree goes into that node's left subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.size(), 2);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn insert(&mut self, x: T) {
        let mut depth = 0usize;
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if x <= node.value {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        log::trace!("OrderedTree::insert new leaf at depth {}", depth);
        *link = Some(Node::new_boxed(x));

        self.check_order();
    }

    /// Removes one element comparing equal to `x` from the tree and returns it. If duplicates of
    /// `x` were inserted, the others stay in the tree.
    ///
    /// On an error the tree is left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::error::TreeError;
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = vec![2, 1, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&2), Ok(2));
    /// assert!(tree.contains(&2));
    /// assert_eq!(tree.remove(&2), Ok(2));
    /// assert_eq!(tree.remove(&2), Err(TreeError::NotFound));
    /// ```
    pub fn remove(&mut self, x: &T) -> Result<T> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree { operation: "remove" });
        }
        if !self.contains(x) {
            return Err(TreeError::NotFound);
        }

        let removed = Node::remove(&mut self.root, x);
        debug_assert!(removed.is_some(), "contains() found an element remove() missed");

        self.check_order();
        removed.ok_or(TreeError::NotFound)
    }

    /// In tests, assert that mutations haven't broken the ordering of the tree.
    fn check_order(&self) {
        if cfg!(test) {
            let sorted = self
                .in_order()
                .zip(self.in_order().skip(1))
                .all(|(a, b)| a <= b);
            assert!(sorted, "in-order traversal is out of order");
        }
    }
}

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }

    /// Detaches the leftmost node of the subtree in the slot `link` and returns its element. The
    /// leftmost node has no left child so its right child, if any, takes over its slot.
    fn take_min(mut link: &mut Link<T>) -> Option<T> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }
        let node = link.take()?;
        let Node { value, right, .. } = *node;
        *link = right;
        Some(value)
    }
}

impl<T> Node<T>
where
    T: Ord,
{
    /// Removes a node holding `x` from the subtree in the slot `link` and returns its element.
    /// Whatever replaces the node is stored straight back into the slot it was found in.
    fn remove(mut link: &mut Link<T>, x: &T) -> Option<T> {
        loop {
            let ordering = x.cmp(&link.as_ref()?.value);
            link = match ordering {
                Ordering::Less => &mut link.as_mut()?.left,
                Ordering::Equal => break,
                Ordering::Greater => &mut link.as_mut()?.right,
            };
        }

        let node = link.as_mut()?;
        if node.left.is_some() && node.right.is_some() {
            // The successor must come out of this node's own right subtree.
            log::debug!("OrderedTree::remove replacing with successor");
            let successor = Self::take_min(&mut node.right)?;
            return Some(mem::replace(&mut node.value, successor));
        }

        let mut node = link.take()?;
        let child = node.left.take().or_else(|| node.right.take());
        match child {
            Some(_) => log::debug!("OrderedTree::remove splicing in only child"),
            None => log::debug!("OrderedTree::remove detaching leaf"),
        }
        *link = child;
        Some(node.value)
    }
}

/// Iterator over a tree in pre-order. Created by [`OrderedTree::pre_order`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Clone for PreOrder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is visited first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for PreOrder<'a, T> {}

/// Iterator over a tree in sorted order. Created by [`OrderedTree::in_order`].
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree has been pushed but which haven't been yielded yet.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Clone for InOrder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for InOrder<'a, T> {}

/// Iterator over a tree in post-order. Created by [`OrderedTree::post_order`].
pub struct PostOrder<'a, T> {
    /// Each node is paired with whether its children have been pushed already.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    fn next_node(&mut self) -> Option<&'a Node<T>> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(node);
            }
            self.stack.push((node, true));
            self.stack
                .extend(node.right.as_deref().map(|right| (right, false)));
            self.stack
                .extend(node.left.as_deref().map(|left| (left, false)));
        }
        None
    }
}

impl<'a, T> Clone for PostOrder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(|node| &node.value)
    }
}

impl<'a, T> FusedIterator for PostOrder<'a, T> {}
