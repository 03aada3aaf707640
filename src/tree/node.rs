//! Tree nodes and the structural algorithms that rearrange them.
//!
//! Each node exclusively owns its record and its two optional children.
//! Every function here works on a [`Link`], the owning slot a node lives in,
//! so that detaching or promoting a node is an ownership move out of the
//! slot rather than pointer patching.

use std::cmp::Ordering;
use std::mem;

use crate::record::Record;

/// An owning slot for a subtree. `None` is an absent child.
pub(super) type Link<K, V> = Option<Box<Node<K, V>>>;

pub(super) struct Node<K, V> {
    pub(super) record: Record<K, V>,
    pub(super) left: Link<K, V>,
    pub(super) right: Link<K, V>,
}

/// Child layout of a node, which decides how it is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Children {
    Leaf,
    OnlyLeft,
    OnlyRight,
    Both,
}

impl<K, V> Node<K, V> {
    pub(super) const fn leaf(record: Record<K, V>) -> Self {
        Self {
            record,
            left: None,
            right: None,
        }
    }

    pub(super) fn children(&self) -> Children {
        match (&self.left, &self.right) {
            (None, None) => Children::Leaf,
            (Some(_), None) => Children::OnlyLeft,
            (None, Some(_)) => Children::OnlyRight,
            (Some(_), Some(_)) => Children::Both,
        }
    }
}

/// Finds the first node on the search path whose key equals `key`.
pub(super) fn find<'a, K: Ord, V>(root: &'a Link<K, V>, key: &K) -> Option<&'a Node<K, V>> {
    let mut current = root.as_deref();
    while let Some(node) = current {
        current = match key.cmp(node.record.key()) {
            Ordering::Equal => return Some(node),
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
        };
    }
    None
}

/// Attaches `record` at the first absent slot on its search path and
/// returns the depth it landed at. Equal keys descend right.
pub(super) fn attach<K: Ord, V>(root: &mut Link<K, V>, record: Record<K, V>) -> usize {
    let mut link = root;
    let mut depth = 0;
    while let Some(node) = link {
        link = if record.key() < node.record.key() {
            &mut node.left
        } else {
            &mut node.right
        };
        depth += 1;
    }
    *link = Some(Box::new(Node::leaf(record)));
    depth
}

/// Removes the first node on the search path matching `key`.
///
/// Returns the retired record together with the child layout the removed
/// node had, or `None` when the key is absent (the subtree is untouched).
pub(super) fn remove<K: Ord, V>(
    root: &mut Link<K, V>,
    key: &K,
) -> Option<(Record<K, V>, Children)> {
    let mut link = root;
    loop {
        let ordering = key.cmp(link.as_deref()?.record.key());
        if ordering == Ordering::Equal {
            return unlink(link);
        }
        let node = link.as_deref_mut()?;
        link = if ordering == Ordering::Less {
            &mut node.left
        } else {
            &mut node.right
        };
    }
}

/// Removes the node occupying `link`, keeping its subtrees in the tree.
fn unlink<K, V>(link: &mut Link<K, V>) -> Option<(Record<K, V>, Children)> {
    let children = link.as_deref()?.children();
    let retired = match children {
        Children::Leaf => {
            let Node { record, .. } = *link.take()?;
            record
        }
        Children::OnlyLeft => {
            let node = link.as_deref_mut()?;
            let child = node.left.take()?;
            absorb(node, child)
        }
        Children::OnlyRight => {
            let node = link.as_deref_mut()?;
            let child = node.right.take()?;
            absorb(node, child)
        }
        Children::Both => {
            let node = link.as_deref_mut()?;
            let predecessor = take_max(&mut node.left)?;
            mem::replace(&mut node.record, predecessor)
        }
    };
    Some((retired, children))
}

/// Moves `child`'s record and links up into `node`, dropping the child's
/// shell. Returns the record `node` held before.
fn absorb<K, V>(node: &mut Node<K, V>, child: Box<Node<K, V>>) -> Record<K, V> {
    let Node {
        record,
        left,
        right,
    } = *child;
    node.left = left;
    node.right = right;
    mem::replace(&mut node.record, record)
}

/// Detaches the maximum node of the subtree in `link` and returns its record.
///
/// The maximum is the rightmost node, so it has no right child; its left
/// child takes over the slot it occupied.
fn take_max<K, V>(mut link: &mut Link<K, V>) -> Option<Record<K, V>> {
    while link.as_ref().is_some_and(|node| node.right.is_some()) {
        link = &mut link.as_mut()?.right;
    }
    let Node { record, left, .. } = *link.take()?;
    *link = left;
    Some(record)
}

/// Copies a subtree node for node, preserving its exact shape. Children are
/// built before their parent, so no recursion is needed.
pub(super) fn duplicate<K: Clone, V: Clone>(root: &Link<K, V>) -> Link<K, V> {
    let mut pending: Vec<(&Node<K, V>, bool)> =
        root.as_deref().map(|node| (node, false)).into_iter().collect();
    let mut built: Vec<Box<Node<K, V>>> = Vec::new();
    while let Some((node, expanded)) = pending.pop() {
        if expanded {
            let right = if node.right.is_some() { built.pop() } else { None };
            let left = if node.left.is_some() { built.pop() } else { None };
            built.push(Box::new(Node {
                record: node.record.clone(),
                left,
                right,
            }));
        } else {
            pending.push((node, true));
            pending.extend(node.right.as_deref().map(|right| (right, false)));
            pending.extend(node.left.as_deref().map(|left| (left, false)));
        }
    }
    built.pop()
}

/// Destroys a subtree children-first without recursion. Returns the number
/// of records released.
pub(super) fn destroy<K, V>(root: Link<K, V>) -> usize {
    let mut pending: Vec<Box<Node<K, V>>> = root.into_iter().collect();
    let mut released = 0;
    while let Some(mut node) = pending.pop() {
        let left = node.left.take();
        let right = node.right.take();
        if left.is_none() && right.is_none() {
            drop(node);
            released += 1;
        } else {
            pending.push(node);
            pending.extend(right);
            pending.extend(left);
        }
    }
    released
}

/// Number of nodes on the longest root-to-leaf path.
pub(super) fn height<K, V>(root: &Link<K, V>) -> usize {
    let mut pending: Vec<(&Node<K, V>, usize)> =
        root.as_deref().map(|node| (node, 1)).into_iter().collect();
    let mut tallest = 0;
    while let Some((node, depth)) = pending.pop() {
        tallest = tallest.max(depth);
        pending.extend(node.left.as_deref().map(|child| (child, depth + 1)));
        pending.extend(node.right.as_deref().map(|child| (child, depth + 1)));
    }
    tallest
}
