//! Tree configuration.

/// How [`BinarySearchTree::insert`](crate::BinarySearchTree::insert) treats a
/// key that is already present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    /// Equal keys are routed into the right subtree of the first node sharing
    /// the key. Lookups and removals reach the earliest inserted occurrence;
    /// later ones stay stored but are shadowed until it is removed.
    #[default]
    Allow,
    /// Inserting an existing key fails with
    /// [`TreeError::DuplicateKey`](crate::TreeError::DuplicateKey) and leaves
    /// the tree untouched.
    Reject,
}

/// Configuration applied to a [`BinarySearchTree`](crate::BinarySearchTree)
/// at construction.
///
/// # Examples
///
/// ```rust
/// use bstree::{BinarySearchTree, DuplicatePolicy, Record, TreeConfig};
///
/// let config = TreeConfig::new().duplicates(DuplicatePolicy::Reject);
/// let mut tree = BinarySearchTree::with_config(config);
///
/// tree.insert(Record::new(1, 1)).unwrap();
/// assert!(tree.insert(Record::new(1, 2)).is_err());
/// assert_eq!(tree.len(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TreeConfig {
    duplicates: DuplicatePolicy,
}

impl TreeConfig {
    /// Creates the default configuration.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            duplicates: DuplicatePolicy::Allow,
        }
    }

    /// Sets the duplicate key policy.
    #[inline]
    #[must_use]
    pub const fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Returns the duplicate key policy.
    #[inline]
    #[must_use]
    pub const fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_default_allows_duplicates() {
        assert_eq!(TreeConfig::default().duplicate_policy(), DuplicatePolicy::Allow);
        assert_eq!(TreeConfig::new(), TreeConfig::default());
    }

    #[rstest]
    fn test_builder_sets_policy() {
        let config = TreeConfig::new().duplicates(DuplicatePolicy::Reject);
        assert_eq!(config.duplicate_policy(), DuplicatePolicy::Reject);
    }
}
