//! Unbalanced binary search tree.
//!
//! This module provides [`BinarySearchTree`], a single-owner mutable ordered
//! container of [`Record`]s.
//!
//! # Overview
//!
//! - Keys smaller than a node's key live in its left subtree, keys greater
//!   than or equal to it in its right subtree
//! - When duplicate keys are allowed, promoting a predecessor during removal
//!   may lift one copy of a key above another, so the left bound relaxes to
//!   smaller-or-equal; lookups still reach a record whenever its key is
//!   present
//! - No rebalancing: insertion order decides the shape, so sorted input
//!   degrades the tree into a chain of depth N
//! - Removal handles the four child layouts (leaf, only left, only right,
//!   both) and retires exactly one record per call
//! - Insertion, lookup, removal, traversal and destruction all run without
//!   recursion, so skewed trees are safe to use and to drop
//!
//! # Examples
//!
//! ```rust
//! use bstree::{BinarySearchTree, Record};
//!
//! let mut tree = BinarySearchTree::new();
//! tree.insert(Record::new(2, "two")).unwrap();
//! tree.insert(Record::new(1, "one")).unwrap();
//! tree.insert(Record::new(3, "three")).unwrap();
//!
//! // In-order traversal yields ascending keys
//! let keys: Vec<&i32> = tree.keys().collect();
//! assert_eq!(keys, vec![&1, &2, &3]);
//!
//! let removed = tree.remove(&2).unwrap();
//! assert_eq!(removed.value(), &"two");
//! assert_eq!(tree.len(), 2);
//! ```

mod config;
mod node;
mod traversal;

use std::fmt;
use std::io::{self, Write};

pub use config::{DuplicatePolicy, TreeConfig};
pub use traversal::{InOrder, PostOrder, PreOrder, Traversal, TraversalOrder};

use crate::error::{TreeError, TreeResult};
use crate::record::Record;
use node::Link;

// =============================================================================
// BinarySearchTree Definition
// =============================================================================

/// An ordered key-value container backed by an unbalanced binary search tree.
///
/// The tree exclusively owns every node and every record it holds. Records
/// leave the tree only through [`remove`](Self::remove), which hands the
/// retired record back, or through destruction, which drops them.
///
/// # Time Complexity
///
/// | Operation      | Average    | Worst (skewed) |
/// |----------------|------------|----------------|
/// | `insert`       | O(log N)   | O(N)           |
/// | `search`       | O(log N)   | O(N)           |
/// | `remove`       | O(log N)   | O(N)           |
/// | traversals     | O(N)       | O(N)           |
/// | `len`          | O(1)       | O(1)           |
/// | `is_empty`     | O(1)       | O(1)           |
///
/// # Examples
///
/// ```rust
/// use bstree::{BinarySearchTree, Record};
///
/// let tree: BinarySearchTree<i32, i32> =
///     [(6, 6), (4, 4), (8, 8)].into_iter().collect();
///
/// assert_eq!(tree.search(&4), Some(&Record::new(4, 4)));
/// assert!(tree.search(&5).is_none());
/// ```
pub struct BinarySearchTree<K, V> {
    root: Link<K, V>,
    length: usize,
    config: TreeConfig,
}

impl<K, V> BinarySearchTree<K, V> {
    /// Creates an empty tree with the default configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<i32, i32> = BinarySearchTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(TreeConfig::new())
    }

    /// Creates an empty tree with the given configuration.
    #[inline]
    #[must_use]
    pub const fn with_config(config: TreeConfig) -> Self {
        Self {
            root: None,
            length: 0,
            config,
        }
    }

    /// Returns the configuration the tree was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> TreeConfig {
        self.config
    }

    /// Returns the number of records in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree has no root.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::{BinarySearchTree, Record};
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(Record::new(1, 1)).unwrap();
    /// assert!(!tree.is_empty());
    ///
    /// tree.remove(&1).unwrap();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// An empty tree has height 0, a single node height 1.
    #[must_use]
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Returns the record with the smallest key.
    #[must_use]
    pub fn min(&self) -> Option<&Record<K, V>> {
        let mut current = self.root.as_deref()?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        Some(&current.record)
    }

    /// Returns the record with the largest key.
    ///
    /// When duplicates are stored this is the most recently inserted of them.
    #[must_use]
    pub fn max(&self) -> Option<&Record<K, V>> {
        let mut current = self.root.as_deref()?;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        Some(&current.record)
    }

    // =========================================================================
    // Traversals
    // =========================================================================

    /// Visits each node, then its left subtree, then its right subtree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<i32, i32> =
    ///     [6, 4, 8, 2, 5, 10].into_iter().map(|key| (key, key)).collect();
    /// let keys: Vec<i32> = tree.pre_order().map(|record| *record.key()).collect();
    /// assert_eq!(keys, vec![6, 4, 2, 5, 8, 10]);
    /// ```
    #[must_use]
    pub fn pre_order(&self) -> PreOrder<'_, K, V> {
        PreOrder::new(&self.root, self.length)
    }

    /// Visits the left subtree, then the node, then the right subtree,
    /// yielding records in ascending key order.
    #[must_use]
    pub fn in_order(&self) -> InOrder<'_, K, V> {
        InOrder::new(&self.root, self.length)
    }

    /// Visits the left subtree, then the right subtree, then the node.
    #[must_use]
    pub fn post_order(&self) -> PostOrder<'_, K, V> {
        PostOrder::new(&self.root, self.length)
    }

    /// Produces a traversal in the order selected at runtime.
    #[must_use]
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, K, V> {
        Traversal::new(&self.root, self.length, order)
    }

    /// Iterates over records in ascending key order. Same as
    /// [`in_order`](Self::in_order).
    #[must_use]
    pub fn iter(&self) -> InOrder<'_, K, V> {
        self.in_order()
    }

    /// Iterates over keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.in_order().map(Record::key)
    }

    /// Iterates over values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.in_order().map(Record::value)
    }

    /// Collects a traversal into a vector whose storage is reserved up front.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::AllocationFailure`] if the buffer cannot be
    /// reserved. The tree is not affected.
    pub fn try_to_vec(&self, order: TraversalOrder) -> TreeResult<Vec<&Record<K, V>>> {
        let mut records = Vec::new();
        records.try_reserve_exact(self.length)?;
        records.extend(self.traverse(order));
        Ok(records)
    }

    // =========================================================================
    // Destruction
    // =========================================================================

    /// Destroys every node and record, leaving an empty tree that keeps its
    /// configuration.
    pub fn clear(&mut self) {
        let released = node::destroy(self.root.take());
        self.length = 0;
        tracing::debug!(released, "tree cleared");
    }

    /// Consumes the tree, destroying every node children-first.
    ///
    /// Returns the number of records released.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<i32, i32> = (0..5).map(|key| (key, key)).collect();
    /// assert_eq!(tree.destroy(), 5);
    /// ```
    pub fn destroy(mut self) -> usize {
        let released = node::destroy(self.root.take());
        self.length = 0;
        tracing::debug!(released, "tree destroyed");
        released
    }
}

impl<K: Ord + fmt::Debug, V> BinarySearchTree<K, V> {
    /// Inserts `record` at the first free slot on its search path.
    ///
    /// Keys smaller than a node's key descend left, all others (equal keys
    /// included) descend right. Under [`DuplicatePolicy::Allow`] an equal key
    /// is stored and shadowed by the earlier occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::DuplicateKey`] when the key is present and the
    /// tree was configured with [`DuplicatePolicy::Reject`]. The tree is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::{BinarySearchTree, Record};
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(Record::new(5, "first")).unwrap();
    /// tree.insert(Record::new(5, "second")).unwrap();
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.get(&5), Some(&"first"));
    /// ```
    pub fn insert(&mut self, record: Record<K, V>) -> TreeResult<()> {
        if self.config.duplicate_policy() == DuplicatePolicy::Reject
            && self.contains_key(record.key())
        {
            tracing::debug!(key = ?record.key(), "duplicate key rejected");
            return Err(TreeError::duplicate_key(record.key()));
        }

        tracing::trace!(key = ?record.key(), "inserting record");
        let depth = node::attach(&mut self.root, record);
        self.length += 1;
        tracing::trace!(depth, length = self.length, "record inserted");
        Ok(())
    }

    /// Returns the first record on the search path whose key equals `key`.
    ///
    /// An absent key is an ordinary outcome reported as `None`.
    #[must_use]
    pub fn search(&self, key: &K) -> Option<&Record<K, V>> {
        let found = node::find(&self.root, key).map(|node| &node.record);
        if found.is_none() {
            tracing::debug!(key = ?key, "key not found");
        }
        found
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.search(key).map(Record::value)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        node::find(&self.root, key).is_some()
    }

    /// Removes the first record on the search path whose key equals `key`
    /// and returns it.
    ///
    /// A node with a single child is replaced by that child; a node with two
    /// children takes over the record of its in-order predecessor, the
    /// largest key of its left subtree, which is then spliced out.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotFound`] if `key` is absent. The tree is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<i32, i32> =
    ///     [6, 4, 8, 2, 5, 10].into_iter().map(|key| (key, key)).collect();
    ///
    /// let removed = tree.remove(&6).unwrap();
    /// assert_eq!(removed.key(), &6);
    ///
    /// let keys: Vec<i32> = tree.pre_order().map(|record| *record.key()).collect();
    /// assert_eq!(keys, vec![5, 4, 2, 8, 10]);
    ///
    /// assert!(tree.remove(&99).unwrap_err().is_not_found());
    /// ```
    pub fn remove(&mut self, key: &K) -> TreeResult<Record<K, V>> {
        match node::remove(&mut self.root, key) {
            Some((retired, children)) => {
                self.length -= 1;
                tracing::trace!(
                    key = ?key,
                    layout = ?children,
                    length = self.length,
                    "record removed"
                );
                Ok(retired)
            }
            None => {
                tracing::warn!(key = ?key, "key not found for removal");
                Err(TreeError::not_found(key))
            }
        }
    }
}

impl<K: fmt::Display, V: fmt::Display> BinarySearchTree<K, V> {
    /// Writes one `{key: K, value: V}` line per record, in `order`, to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Io`] if writing to or flushing the sink fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstree::{BinarySearchTree, TraversalOrder};
    ///
    /// let tree: BinarySearchTree<i32, i32> = [(2, 20), (1, 10)].into_iter().collect();
    /// let mut output = Vec::new();
    /// tree.write_traversal(TraversalOrder::InOrder, &mut output).unwrap();
    ///
    /// assert_eq!(
    ///     String::from_utf8(output).unwrap(),
    ///     "{key: 1, value: 10}\n{key: 2, value: 20}\n"
    /// );
    /// ```
    pub fn write_traversal<W: Write>(&self, order: TraversalOrder, mut sink: W) -> TreeResult<()> {
        for record in self.traverse(order) {
            writeln!(sink, "{record}")?;
        }
        sink.flush()?;
        Ok(())
    }

    /// Writes a traversal to standard output.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Io`] if standard output cannot be written.
    pub fn print_traversal(&self, order: TraversalOrder) -> TreeResult<()> {
        self.write_traversal(order, io::stdout().lock())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Drop for BinarySearchTree<K, V> {
    fn drop(&mut self) {
        node::destroy(self.root.take());
    }
}

impl<K, V> Default for BinarySearchTree<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for BinarySearchTree<K, V> {
    fn clone(&self) -> Self {
        Self {
            root: node::duplicate(&self.root),
            length: self.length,
            config: self.config,
        }
    }
}

impl<K: Ord + fmt::Debug, V> Extend<Record<K, V>> for BinarySearchTree<K, V> {
    /// Inserts every record. Records refused by the duplicate policy are
    /// skipped.
    fn extend<I: IntoIterator<Item = Record<K, V>>>(&mut self, iter: I) {
        for record in iter {
            if let Err(error) = self.insert(record) {
                tracing::debug!(%error, "record skipped");
            }
        }
    }
}

impl<K: Ord + fmt::Debug, V> Extend<(K, V)> for BinarySearchTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            if let Err(error) = self.insert(Record::new(key, value)) {
                tracing::debug!(%error, "record skipped");
            }
        }
    }
}

impl<K: Ord + fmt::Debug, V> FromIterator<Record<K, V>> for BinarySearchTree<K, V> {
    fn from_iter<I: IntoIterator<Item = Record<K, V>>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord + fmt::Debug, V> FromIterator<(K, V)> for BinarySearchTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K, V> IntoIterator for &'a BinarySearchTree<K, V> {
    type Item = &'a Record<K, V>;
    type IntoIter = InOrder<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BinarySearchTree<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.iter().map(|record| (record.key(), record.value())))
            .finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for BinarySearchTree<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for record in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{}: {}", record.key(), record.value())?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(BinarySearchTree<i32, i32>: Send, Sync, Default);
static_assertions::assert_impl_all!(Record<i32, String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(BinarySearchTree<std::rc::Rc<i32>, i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
