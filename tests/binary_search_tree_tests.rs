//! Integration tests for BinarySearchTree.

use bstree::prelude::*;
use rstest::{fixture, rstest};
use std::io::{self, Write};

fn keys_in(tree: &BinarySearchTree<i32, i32>, order: TraversalOrder) -> Vec<i32> {
    tree.traverse(order).map(|record| *record.key()).collect()
}

#[fixture]
fn canonical() -> BinarySearchTree<i32, i32> {
    let mut tree = BinarySearchTree::new();
    for key in [6, 4, 8, 2, 5, 10] {
        tree.insert(Record::new(key, key)).unwrap();
    }
    tree
}

// =============================================================================
// Canonical Scenario
// =============================================================================

#[rstest]
fn test_canonical_pre_order_before_removal(canonical: BinarySearchTree<i32, i32>) {
    assert_eq!(
        keys_in(&canonical, TraversalOrder::PreOrder),
        vec![6, 4, 2, 5, 8, 10]
    );
}

#[rstest]
fn test_canonical_removal_promotes_predecessor(mut canonical: BinarySearchTree<i32, i32>) {
    canonical.remove(&6).unwrap();

    assert_eq!(
        keys_in(&canonical, TraversalOrder::PreOrder),
        vec![5, 4, 2, 8, 10]
    );
    let promoted = canonical.search(&5).unwrap();
    assert_eq!(promoted.key(), &5);
    assert_eq!(promoted.value(), &5);
    assert!(canonical.search(&6).is_none());
}

#[rstest]
fn test_canonical_missing_removal_is_harmless(mut canonical: BinarySearchTree<i32, i32>) {
    canonical.remove(&6).unwrap();
    let error = canonical.remove(&99).unwrap_err();

    assert!(error.is_not_found());
    assert!(matches!(error, TreeError::NotFound { ref key } if key == "99"));
    assert_eq!(
        keys_in(&canonical, TraversalOrder::PreOrder),
        vec![5, 4, 2, 8, 10]
    );
}

// =============================================================================
// Traversal Output
// =============================================================================

#[rstest]
#[case(TraversalOrder::PreOrder, vec![6, 4, 2, 5, 8, 10])]
#[case(TraversalOrder::InOrder, vec![2, 4, 5, 6, 8, 10])]
#[case(TraversalOrder::PostOrder, vec![2, 5, 4, 10, 8, 6])]
fn test_traversal_orders(
    canonical: BinarySearchTree<i32, i32>,
    #[case] order: TraversalOrder,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(keys_in(&canonical, order), expected);
    assert_eq!(canonical.traverse(order).len(), expected.len());
    assert_eq!(canonical.traverse(order).order(), order);
}

#[rstest]
fn test_write_traversal_renders_one_line_per_record(canonical: BinarySearchTree<i32, i32>) {
    let mut output = Vec::new();
    canonical
        .write_traversal(TraversalOrder::PostOrder, &mut output)
        .unwrap();

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "{key: 2, value: 2}");
    assert_eq!(lines[5], "{key: 6, value: 6}");
}

#[rstest]
fn test_write_traversal_of_empty_tree_writes_nothing() {
    let tree: BinarySearchTree<i32, i32> = BinarySearchTree::new();
    let mut output = Vec::new();
    tree.write_traversal(TraversalOrder::InOrder, &mut output)
        .unwrap();
    assert!(output.is_empty());
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buffer: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[rstest]
fn test_write_traversal_reports_sink_failure(canonical: BinarySearchTree<i32, i32>) {
    let error = canonical
        .write_traversal(TraversalOrder::PreOrder, BrokenSink)
        .unwrap_err();
    assert!(matches!(error, TreeError::Io(_)));
    assert_eq!(canonical.len(), 6);
}

#[rstest]
fn test_try_to_vec_matches_traversal(canonical: BinarySearchTree<i32, i32>) {
    let records = canonical.try_to_vec(TraversalOrder::InOrder).unwrap();
    let keys: Vec<i32> = records.iter().map(|record| *record.key()).collect();
    assert_eq!(keys, vec![2, 4, 5, 6, 8, 10]);
}

// =============================================================================
// Emptiness and Lifecycle
// =============================================================================

#[rstest]
fn test_emptiness_cycle() {
    let mut tree = BinarySearchTree::new();
    assert!(tree.is_empty());

    tree.insert(Record::new(1, 100)).unwrap();
    assert!(!tree.is_empty());

    tree.remove(&1).unwrap();
    assert!(tree.is_empty());
}

#[rstest]
fn test_destroy_counts_records(canonical: BinarySearchTree<i32, i32>) {
    assert_eq!(canonical.destroy(), 6);
}

#[rstest]
fn test_default_matches_new() {
    let tree: BinarySearchTree<i32, i32> = BinarySearchTree::default();
    assert!(tree.is_empty());
    assert_eq!(tree.config(), TreeConfig::default());
}

// =============================================================================
// Duplicate Keys
// =============================================================================

#[rstest]
fn test_duplicate_allowed_by_default() {
    let mut tree = BinarySearchTree::new();
    tree.insert(Record::new(3, "a")).unwrap();
    tree.insert(Record::new(3, "b")).unwrap();

    assert_eq!(tree.len(), 2);
    assert_eq!(tree.get(&3), Some(&"a"));
    let values: Vec<&&str> = tree.values().collect();
    assert_eq!(values, vec![&"a", &"b"]);
}

#[rstest]
fn test_duplicate_rejected_when_configured() {
    let mut tree =
        BinarySearchTree::with_config(TreeConfig::new().duplicates(DuplicatePolicy::Reject));
    tree.insert(Record::new(3, "a")).unwrap();

    let error = tree.insert(Record::new(3, "b")).unwrap_err();
    assert_eq!(error.to_string(), "duplicate key rejected: 3");
    assert_eq!(tree.get(&3), Some(&"a"));
}

#[rstest]
fn test_collect_skips_rejected_duplicates() {
    let mut tree: BinarySearchTree<i32, i32> =
        BinarySearchTree::with_config(TreeConfig::new().duplicates(DuplicatePolicy::Reject));
    tree.extend([(1, 1), (2, 2), (1, 3)]);

    assert_eq!(tree.len(), 2);
    assert_eq!(tree.get(&1), Some(&1));
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn test_collect_from_records() {
    let tree: BinarySearchTree<i32, &str> = vec![Record::new(2, "two"), Record::new(1, "one")]
        .into_iter()
        .collect();
    let keys: Vec<&i32> = tree.keys().collect();
    assert_eq!(keys, vec![&1, &2]);
}

#[rstest]
fn test_into_iterator_for_reference(canonical: BinarySearchTree<i32, i32>) {
    let mut sum = 0;
    for record in &canonical {
        sum += record.value();
    }
    assert_eq!(sum, 35);
}

#[rstest]
fn test_parsed_records_insert() {
    let mut tree = BinarySearchTree::new();
    for text in ["{key: 2, value: 20}", "1:10", "3=30"] {
        tree.insert(text.parse::<Record<i32, i32>>().unwrap())
            .unwrap();
    }
    assert_eq!(tree.to_string(), "{1: 10, 2: 20, 3: 30}");
}
