//! # bstree
//!
//! An in-memory ordered key-value container backed by an unbalanced
//! binary search tree.
//!
//! ## Overview
//!
//! - **Records**: [`Record`], an immutable key/value pair ordered by key
//! - **Tree**: [`BinarySearchTree`], a single-owner mutable tree supporting
//!   insertion, removal, point lookup and three traversal orders
//! - **Errors**: [`TreeError`], distinguishing recoverable lookups of absent
//!   keys from invalid input
//!
//! No balancing is performed: the shape of the tree is decided entirely by
//! insertion order.
//!
//! ## Example
//!
//! ```rust
//! use bstree::prelude::*;
//!
//! let mut tree = BinarySearchTree::new();
//! for key in [6, 4, 8, 2, 5, 10] {
//!     tree.insert(Record::new(key, key)).unwrap();
//! }
//!
//! let keys: Vec<i32> = tree.pre_order().map(|record| *record.key()).collect();
//! assert_eq!(keys, vec![6, 4, 2, 5, 8, 10]);
//!
//! tree.remove(&6).unwrap();
//! let keys: Vec<i32> = tree.pre_order().map(|record| *record.key()).collect();
//! assert_eq!(keys, vec![5, 4, 2, 8, 10]);
//! assert_eq!(tree.search(&5), Some(&Record::new(5, 5)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use bstree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{TreeError, TreeResult};
    pub use crate::record::Record;
    pub use crate::tree::{BinarySearchTree, DuplicatePolicy, TraversalOrder, TreeConfig};
}

pub mod error;
pub mod record;
pub mod tree;

pub use error::{TreeError, TreeResult};
pub use record::Record;
pub use tree::{BinarySearchTree, DuplicatePolicy, TraversalOrder, TreeConfig};
