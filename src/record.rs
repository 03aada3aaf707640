//! Key/value records stored in the tree.
//!
//! A [`Record`] is the payload of every tree position. Its shape is fixed at
//! construction, and equality and ordering look at the key alone, so two
//! records with the same key compare equal whatever their values.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::TreeError;

/// An immutable key/value pair ordered by key.
///
/// # Examples
///
/// ```rust
/// use bstree::Record;
///
/// let record = Record::new(5, 50);
/// assert_eq!(record.key(), &5);
/// assert_eq!(record.value(), &50);
/// assert_eq!(record.to_string(), "{key: 5, value: 50}");
///
/// // Equality is decided by the key only
/// assert_eq!(Record::new(5, 50), Record::new(5, 0));
/// ```
#[derive(Clone)]
pub struct Record<K, V> {
    key: K,
    value: V,
}

impl<K, V> Record<K, V> {
    /// Creates a record from its key and value.
    #[inline]
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the record, returning its key and value.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Record<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K: PartialEq, V> PartialEq for Record<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for Record<K, V> {}

impl<K: PartialOrd, V> PartialOrd for Record<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

impl<K: Ord, V> Ord for Record<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K: Hash, V> Hash for Record<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Record<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Record")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Record<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{key: {}, value: {}}}", self.key, self.value)
    }
}

/// Parses `K:V`, `K=V`, or the display form `{key: K, value: V}`.
///
/// # Errors
///
/// Returns [`TreeError::InvalidArgument`] when the separator is missing or
/// either side fails to parse.
///
/// # Examples
///
/// ```rust
/// use bstree::Record;
///
/// let record: Record<i32, i32> = "{key: 3, value: 30}".parse().unwrap();
/// assert_eq!(record.value(), &30);
///
/// let record: Record<i32, i32> = "4=40".parse().unwrap();
/// assert_eq!(record.key(), &4);
///
/// assert!("four".parse::<Record<i32, i32>>().is_err());
/// ```
impl<K: FromStr, V: FromStr> FromStr for Record<K, V> {
    type Err = TreeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let (key, value) = match trimmed
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
        {
            Some(body) => split_braced(body).ok_or_else(|| {
                TreeError::invalid_argument(input, "expected `{key: K, value: V}`")
            })?,
            None => trimmed.split_once([':', '=']).ok_or_else(|| {
                TreeError::invalid_argument(input, "expected `K:V` or `K=V`")
            })?,
        };

        let key = key
            .trim()
            .parse()
            .map_err(|_| TreeError::invalid_argument(input, "key could not be parsed"))?;
        let value = value
            .trim()
            .parse()
            .map_err(|_| TreeError::invalid_argument(input, "value could not be parsed"))?;
        Ok(Self::new(key, value))
    }
}

fn split_braced(body: &str) -> Option<(&str, &str)> {
    let (key_field, value_field) = body.split_once(',')?;
    let key = key_field
        .trim()
        .strip_prefix("key")?
        .trim_start()
        .strip_prefix(':')?;
    let value = value_field
        .trim()
        .strip_prefix("value")?
        .trim_start()
        .strip_prefix(':')?;
    Some((key, value))
}
