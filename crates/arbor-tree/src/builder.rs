//! Validate-then-assemble tree builder.

use arbor_core::{NodeId, Record};
use rayon::prelude::*;
use tracing::debug;

use crate::error::BuildError;
use crate::tree::{Slot, Tree};
use crate::validate;

/// Knobs for [`build_with`]. The built tree is the same for every setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Record count at which child lists are sorted on the rayon pool.
    pub parallel_threshold: usize,
}

impl BuildOptions {
    /// Never fan out.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Always fan out, whatever the input size.
    pub fn parallel() -> Self {
        Self {
            parallel_threshold: 0,
        }
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: 4096,
        }
    }
}

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The record set was empty; there is no tree.
    Empty,
    Tree(Tree),
}

impl BuildOutcome {
    pub fn is_empty(&self) -> bool {
        matches!(self, BuildOutcome::Empty)
    }

    pub fn tree(&self) -> Option<&Tree> {
        match self {
            BuildOutcome::Tree(tree) => Some(tree),
            BuildOutcome::Empty => None,
        }
    }

    pub fn into_tree(self) -> Option<Tree> {
        match self {
            BuildOutcome::Tree(tree) => Some(tree),
            BuildOutcome::Empty => None,
        }
    }
}

/// Build a tree from `records` with default options.
pub fn build(records: &[Record]) -> Result<BuildOutcome, BuildError> {
    build_with(records, &BuildOptions::default())
}

/// Validate `records`, then assemble the arena.
///
/// Validation runs to completion, sequentially, before any slot is allocated;
/// a failure never leaves a partial tree behind.
pub fn build_with(records: &[Record], options: &BuildOptions) -> Result<BuildOutcome, BuildError> {
    if records.is_empty() {
        debug!("empty record set, no tree to build");
        return Ok(BuildOutcome::Empty);
    }

    debug!(records = records.len(), "validating records");
    let edges = validate::validate_records(records)
        .inspect_err(|err| debug!(error = %err, "rejected record set"))?;

    let mut slots: Vec<Slot> = (0..records.len())
        .map(|index| {
            NodeId::try_from_index(index)
                .map(|id| Slot {
                    id,
                    parent: None,
                    children: Vec::new(),
                })
                .ok_or(BuildError::TooManyRecords { len: records.len() })
        })
        .collect::<Result<_, _>>()?;

    for edge in &edges {
        slots[edge.parent.as_usize()].children.push(edge.child);
        slots[edge.child.as_usize()].parent = Some(edge.parent);
    }

    // Records arrive in any order; child lists must come out ascending
    let parallel = records.len() >= options.parallel_threshold;
    debug!(parallel, "sorting child lists");
    if parallel {
        slots.par_iter_mut().for_each(|slot| slot.children.sort());
    } else {
        for slot in &mut slots {
            slot.children.sort();
        }
    }

    Ok(BuildOutcome::Tree(Tree { slots }))
}

/// Builder for collecting records incrementally.
///
/// Use `push` or `extend` to gather records, then call `build()` to validate
/// and freeze them into a [`BuildOutcome`].
#[derive(Debug, Default, Clone)]
pub struct TreeBuilder {
    records: Vec<Record>,
    options: BuildOptions,
}

impl TreeBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Add one `{id, parent}` record.
    pub fn push(&mut self, id: i64, parent: i64) -> &mut Self {
        self.records.push(Record::new(id, parent));
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn build(self) -> Result<BuildOutcome, BuildError> {
        build_with(&self.records, &self.options)
    }
}

impl Extend<Record> for TreeBuilder {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}
