//! Lazy traversals over a [`BinarySearchTree`](crate::BinarySearchTree).
//!
//! Every traversal is driven by an explicit stack, so walking a deeply
//! skewed tree does not consume call stack. Traversals borrow the tree
//! immutably. Calling the producing method again starts a fresh walk, and
//! cloning a traversal forks it at its current position.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use super::node::{Link, Node};
use crate::error::TreeError;
use crate::record::Record;

/// The order in which a traversal visits nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree. Yields ascending keys.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
}

impl TraversalOrder {
    /// All orders, in declaration order.
    pub const ALL: [Self; 3] = [Self::PreOrder, Self::InOrder, Self::PostOrder];
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PreOrder => "pre-order",
            Self::InOrder => "in-order",
            Self::PostOrder => "post-order",
        };
        formatter.write_str(name)
    }
}

/// Accepts `pre`, `in`, `post`, with or without an `-order`/`order` suffix.
/// `end` and `end-order` are accepted as aliases for in-order.
impl FromStr for TraversalOrder {
    type Err = TreeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_ascii_lowercase();
        let stem = normalized
            .strip_suffix("order")
            .map_or(normalized.as_str(), |stem| stem.trim_end_matches(['-', '_']));
        match stem {
            "pre" => Ok(Self::PreOrder),
            "in" | "end" => Ok(Self::InOrder),
            "post" => Ok(Self::PostOrder),
            _ => Err(TreeError::invalid_argument(
                input,
                "expected one of `pre`, `in`, `post`",
            )),
        }
    }
}

// =============================================================================
// Pre-order
// =============================================================================

/// Pre-order traversal. Created by
/// [`BinarySearchTree::pre_order`](crate::BinarySearchTree::pre_order).
pub struct PreOrder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> PreOrder<'a, K, V> {
    pub(super) fn new(root: &'a Link<K, V>, length: usize) -> Self {
        Self {
            stack: root.as_deref().into_iter().collect(),
            remaining: length,
        }
    }
}

impl<'a, K, V> Iterator for PreOrder<'a, K, V> {
    type Item = &'a Record<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

// =============================================================================
// In-order
// =============================================================================

/// In-order traversal, ascending by key. Created by
/// [`BinarySearchTree::in_order`](crate::BinarySearchTree::in_order) and
/// [`BinarySearchTree::iter`](crate::BinarySearchTree::iter).
pub struct InOrder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    current: Option<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> InOrder<'a, K, V> {
    pub(super) fn new(root: &'a Link<K, V>, length: usize) -> Self {
        Self {
            stack: Vec::new(),
            current: root.as_deref(),
            remaining: length,
        }
    }
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
    type Item = &'a Record<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        self.remaining -= 1;
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

// =============================================================================
// Post-order
// =============================================================================

/// Post-order traversal. Created by
/// [`BinarySearchTree::post_order`](crate::BinarySearchTree::post_order).
pub struct PostOrder<'a, K, V> {
    /// Nodes paired with whether their children were already scheduled.
    stack: Vec<(&'a Node<K, V>, bool)>,
    remaining: usize,
}

impl<'a, K, V> PostOrder<'a, K, V> {
    pub(super) fn new(root: &'a Link<K, V>, length: usize) -> Self {
        Self {
            stack: root.as_deref().map(|node| (node, false)).into_iter().collect(),
            remaining: length,
        }
    }
}

impl<'a, K, V> Iterator for PostOrder<'a, K, V> {
    type Item = &'a Record<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                self.remaining -= 1;
                return Some(&node.record);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|right| (right, false)));
            self.stack.extend(node.left.as_deref().map(|left| (left, false)));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

// =============================================================================
// Runtime-selected order
// =============================================================================

/// A traversal whose order is chosen at runtime. Created by
/// [`BinarySearchTree::traverse`](crate::BinarySearchTree::traverse).
pub enum Traversal<'a, K, V> {
    /// See [`PreOrder`].
    PreOrder(PreOrder<'a, K, V>),
    /// See [`InOrder`].
    InOrder(InOrder<'a, K, V>),
    /// See [`PostOrder`].
    PostOrder(PostOrder<'a, K, V>),
}

impl<'a, K, V> Traversal<'a, K, V> {
    pub(super) fn new(root: &'a Link<K, V>, length: usize, order: TraversalOrder) -> Self {
        match order {
            TraversalOrder::PreOrder => Self::PreOrder(PreOrder::new(root, length)),
            TraversalOrder::InOrder => Self::InOrder(InOrder::new(root, length)),
            TraversalOrder::PostOrder => Self::PostOrder(PostOrder::new(root, length)),
        }
    }

    /// The order this traversal visits nodes in.
    #[must_use]
    pub const fn order(&self) -> TraversalOrder {
        match self {
            Self::PreOrder(_) => TraversalOrder::PreOrder,
            Self::InOrder(_) => TraversalOrder::InOrder,
            Self::PostOrder(_) => TraversalOrder::PostOrder,
        }
    }
}

impl<'a, K, V> Iterator for Traversal<'a, K, V> {
    type Item = &'a Record<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::PreOrder(inner) => inner.next(),
            Self::InOrder(inner) => inner.next(),
            Self::PostOrder(inner) => inner.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::PreOrder(inner) => inner.size_hint(),
            Self::InOrder(inner) => inner.size_hint(),
            Self::PostOrder(inner) => inner.size_hint(),
        }
    }
}

// =============================================================================
// Shared trait implementations
// =============================================================================

impl<K, V> Clone for Traversal<'_, K, V> {
    fn clone(&self) -> Self {
        match self {
            Self::PreOrder(inner) => Self::PreOrder(inner.clone()),
            Self::InOrder(inner) => Self::InOrder(inner.clone()),
            Self::PostOrder(inner) => Self::PostOrder(inner.clone()),
        }
    }
}

impl<K, V> Clone for PreOrder<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K, V> Clone for InOrder<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<K, V> Clone for PostOrder<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K, V> ExactSizeIterator for PreOrder<'_, K, V> {}
impl<K, V> ExactSizeIterator for InOrder<'_, K, V> {}
impl<K, V> ExactSizeIterator for PostOrder<'_, K, V> {}
impl<K, V> ExactSizeIterator for Traversal<'_, K, V> {}

impl<K, V> FusedIterator for PreOrder<'_, K, V> {}
impl<K, V> FusedIterator for InOrder<'_, K, V> {}
impl<K, V> FusedIterator for PostOrder<'_, K, V> {}
impl<K, V> FusedIterator for Traversal<'_, K, V> {}
