//! Canonical scenario: build a small tree, remove a node with two children,
//! and look up the key that was promoted into its place.

use std::io::Write;

use anyhow::{Context, Result};
use bstree::{BinarySearchTree, Record, TraversalOrder};
use clap::Args;

/// Keys inserted by the demo, each with value equal to its key.
const DEMO_KEYS: [i32; 6] = [6, 4, 8, 2, 5, 10];

/// Arguments for the demo subcommand
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Traversal order used to print the tree (pre|in|post)
    #[arg(long, short = 'o', default_value = "pre")]
    pub order: TraversalOrder,

    /// Key removed between the two printouts
    #[arg(long, default_value_t = 6)]
    pub remove: i32,

    /// Key looked up after the removal
    #[arg(long, default_value_t = 5)]
    pub search: i32,
}

pub fn run<W: Write>(
    args: &DemoArgs,
    tree: &mut BinarySearchTree<i32, i32>,
    out: &mut W,
) -> Result<()> {
    for key in DEMO_KEYS {
        if let Err(error) = tree.insert(Record::new(key, key)) {
            tracing::warn!(%error, "demo insert skipped");
        }
    }

    writeln!(out, "---> initial ({}):", args.order)?;
    tree.write_traversal(args.order, &mut *out)
        .context("Failed to print initial tree")?;

    match tree.remove(&args.remove) {
        Ok(removed) => writeln!(out, "removed: {removed}")?,
        Err(error) if error.is_not_found() => writeln!(out, "{error}")?,
        Err(error) => return Err(error).context("Failed to remove demo key"),
    }

    writeln!(out, "---> final ({}):", args.order)?;
    tree.write_traversal(args.order, &mut *out)
        .context("Failed to print final tree")?;

    writeln!(out, "search for key <<{}>>:", args.search)?;
    match tree.search(&args.search) {
        Some(record) => writeln!(out, "{record}")?,
        None => writeln!(out, "key not found.")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn run_demo(args: &DemoArgs) -> String {
        let mut tree = BinarySearchTree::new();
        let mut output = Vec::new();
        run(args, &mut tree, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[rstest]
    fn test_default_demo_output() {
        let output = run_demo(&DemoArgs {
            order: TraversalOrder::PreOrder,
            remove: 6,
            search: 5,
        });

        let expected = "\
---> initial (pre-order):
{key: 6, value: 6}
{key: 4, value: 4}
{key: 2, value: 2}
{key: 5, value: 5}
{key: 8, value: 8}
{key: 10, value: 10}
removed: {key: 6, value: 6}
---> final (pre-order):
{key: 5, value: 5}
{key: 4, value: 4}
{key: 2, value: 2}
{key: 8, value: 8}
{key: 10, value: 10}
search for key <<5>>:
{key: 5, value: 5}
";
        assert_eq!(output, expected);
    }

    #[rstest]
    fn test_demo_missing_keys_are_reported() {
        let output = run_demo(&DemoArgs {
            order: TraversalOrder::InOrder,
            remove: 99,
            search: 42,
        });

        assert!(output.contains("key not found: 99"));
        assert!(output.ends_with("search for key <<42>>:\nkey not found.\n"));
    }
}
