//! Error type definition for tree operations.
//!
//! [`TreeError`] separates the expected, recoverable outcome of looking up an
//! absent key ([`TreeError::NotFound`]) from failures caused by invalid input
//! or exhausted resources.

use std::collections::TryReserveError;
use std::fmt;
use std::io;

use thiserror::Error;

/// Errors reported by [`BinarySearchTree`](crate::BinarySearchTree) and
/// [`Record`](crate::Record) parsing.
///
/// Every variant is raised before any structural mutation begins, so a tree
/// that returned an error is exactly the tree it was before the call.
///
/// # Examples
///
/// ```
/// use bstree::{BinarySearchTree, Record, TreeError};
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(Record::new(1, 10)).unwrap();
///
/// let error = tree.remove(&99).unwrap_err();
/// assert!(error.is_not_found());
/// assert_eq!(error.to_string(), "key not found: 99");
/// ```
#[derive(Debug, Error)]
pub enum TreeError {
    /// Input could not be turned into a valid argument.
    #[error("invalid argument `{input}`: {reason}")]
    InvalidArgument {
        /// The offending input, verbatim.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// The requested key is not present in the tree.
    #[error("key not found: {key}")]
    NotFound {
        /// Debug rendering of the missing key.
        key: String,
    },

    /// The key is already present and the tree rejects duplicates.
    #[error("duplicate key rejected: {key}")]
    DuplicateKey {
        /// Debug rendering of the duplicated key.
        key: String,
    },

    /// Storage for the result could not be reserved.
    #[error("allocation failure")]
    AllocationFailure(#[from] TryReserveError),

    /// Writing a traversal to its sink failed.
    #[error("failed to write traversal output")]
    Io(#[from] io::Error),
}

/// Result alias used throughout the crate.
pub type TreeResult<T> = Result<T, TreeError>;

impl TreeError {
    /// Creates an [`TreeError::InvalidArgument`].
    #[must_use]
    pub fn invalid_argument(input: &str, reason: &str) -> Self {
        Self::InvalidArgument {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a [`TreeError::NotFound`] for `key`.
    #[must_use]
    pub fn not_found<K: fmt::Debug + ?Sized>(key: &K) -> Self {
        Self::NotFound {
            key: format!("{key:?}"),
        }
    }

    /// Creates a [`TreeError::DuplicateKey`] for `key`.
    #[must_use]
    pub fn duplicate_key<K: fmt::Debug + ?Sized>(key: &K) -> Self {
        Self::DuplicateKey {
            key: format!("{key:?}"),
        }
    }

    /// Returns `true` for the recoverable "key is absent" outcome.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` when the error stems from caller misuse rather than
    /// from the contents of the tree.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_not_found_display() {
        let error = TreeError::not_found(&42);
        assert_eq!(error.to_string(), "key not found: 42");
    }

    #[rstest]
    fn test_duplicate_key_display() {
        let error = TreeError::duplicate_key(&7);
        assert_eq!(error.to_string(), "duplicate key rejected: 7");
    }

    #[rstest]
    fn test_invalid_argument_display() {
        let error = TreeError::invalid_argument("abc", "missing separator");
        assert_eq!(
            error.to_string(),
            "invalid argument `abc`: missing separator"
        );
    }

    #[rstest]
    #[case(TreeError::not_found(&1), true, false)]
    #[case(TreeError::duplicate_key(&1), false, false)]
    #[case(TreeError::invalid_argument("x", "y"), false, true)]
    fn test_error_classification(
        #[case] error: TreeError,
        #[case] not_found: bool,
        #[case] invalid_argument: bool,
    ) {
        assert_eq!(error.is_not_found(), not_found);
        assert_eq!(error.is_invalid_argument(), invalid_argument);
    }

    #[rstest]
    fn test_io_error_converts() {
        let error: TreeError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(error, TreeError::Io(_)));
    }

    #[rstest]
    fn test_allocation_failure_converts() {
        let mut buffer: Vec<u8> = Vec::new();
        let reserve_error = buffer.try_reserve(usize::MAX).unwrap_err();
        let error: TreeError = reserve_error.into();
        assert_eq!(error.to_string(), "allocation failure");
    }

    #[rstest]
    fn test_error_trait() {
        let error = TreeError::not_found(&1);
        let _: &dyn std::error::Error = &error;
    }
}
