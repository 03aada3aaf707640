//! Operation scripts.
//!
//! One command per line; blank lines and `#` comments are ignored:
//!
//! ```text
//! insert 6 6
//! insert {key: 4, value: 40}
//! remove 6
//! search 4
//! print pre
//! empty
//! len
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use bstree::{BinarySearchTree, Record, TraversalOrder, TreeError};
use clap::Args;

/// Arguments for the run subcommand
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script file path, or `-` to read from standard input
    pub script: PathBuf,
}

/// A single script command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Insert(i32, i32),
    Remove(i32),
    Search(i32),
    Print(TraversalOrder),
    Empty,
    Len,
}

fn parse_key(line: &str, word: &str) -> Result<i32, TreeError> {
    word.parse()
        .map_err(|_| TreeError::invalid_argument(line, "key must be an integer"))
}

impl FromStr for Command {
    type Err = TreeError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let trimmed = line.trim();
        let (verb, rest) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(verb, rest)| (verb, rest.trim()));
        let words: Vec<&str> = rest.split_whitespace().collect();

        match (verb, words.as_slice()) {
            ("insert", [key, value]) if !rest.starts_with('{') => Ok(Self::Insert(
                parse_key(line, key)?,
                value
                    .parse()
                    .map_err(|_| TreeError::invalid_argument(line, "value must be an integer"))?,
            )),
            ("insert", [_, ..]) => {
                let (key, value) = rest.parse::<Record<i32, i32>>()?.into_parts();
                Ok(Self::Insert(key, value))
            }
            ("remove", [key]) => Ok(Self::Remove(parse_key(line, key)?)),
            ("search", [key]) => Ok(Self::Search(parse_key(line, key)?)),
            ("print", []) => Ok(Self::Print(TraversalOrder::PreOrder)),
            ("print", [order]) => Ok(Self::Print(order.parse()?)),
            ("empty", []) => Ok(Self::Empty),
            ("len", []) => Ok(Self::Len),
            _ => Err(TreeError::invalid_argument(line, "unrecognized command")),
        }
    }
}

/// Parses a whole script, skipping blank lines and comments.
///
/// Every line is validated before anything is executed.
pub fn parse(source: &str) -> Result<Vec<Command>> {
    source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| {
            line.parse::<Command>()
                .with_context(|| format!("Invalid command on line {number}"))
        })
        .collect()
}

/// Applies one command, reporting its outcome to `out`.
///
/// Absent keys and refused duplicates are reported and do not fail.
pub fn execute<W: Write>(
    tree: &mut BinarySearchTree<i32, i32>,
    command: &Command,
    out: &mut W,
) -> Result<()> {
    match *command {
        Command::Insert(key, value) => match tree.insert(Record::new(key, value)) {
            Ok(()) => {}
            Err(error @ TreeError::DuplicateKey { .. }) => writeln!(out, "{error}")?,
            Err(error) => return Err(error).context("Insert failed"),
        },
        Command::Remove(key) => match tree.remove(&key) {
            Ok(removed) => writeln!(out, "removed: {removed}")?,
            Err(error) if error.is_not_found() => writeln!(out, "{error}")?,
            Err(error) => return Err(error).context("Remove failed"),
        },
        Command::Search(key) => match tree.search(&key) {
            Some(record) => writeln!(out, "{record}")?,
            None => writeln!(out, "key not found.")?,
        },
        Command::Print(order) => tree
            .write_traversal(order, &mut *out)
            .context("Failed to print tree")?,
        Command::Empty => writeln!(out, "{}", tree.is_empty())?,
        Command::Len => writeln!(out, "{}", tree.len())?,
    }
    Ok(())
}

fn read_source(args: &RunArgs) -> Result<String> {
    if args.script.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read script from stdin")?;
        Ok(source)
    } else {
        fs::read_to_string(&args.script)
            .with_context(|| format!("Failed to read script {}", args.script.display()))
    }
}

pub fn run<W: Write>(
    args: &RunArgs,
    tree: &mut BinarySearchTree<i32, i32>,
    out: &mut W,
) -> Result<()> {
    let source = read_source(args)?;
    let commands = parse(&source)?;
    tracing::info!(commands = commands.len(), "running script");

    for command in &commands {
        tracing::debug!(?command, "executing");
        execute(tree, command, out)?;
    }
    Ok(())
}
