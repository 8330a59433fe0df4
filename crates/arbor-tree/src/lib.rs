//! arbor-tree: rebuilds a rooted, ordered tree from flat `{id, parent}` records.
//!
//! Provides:
//! - A validation pass that rejects anything other than exactly one well-formed tree
//! - An arena [`Tree`] with children stored as ids, sorted ascending
//! - An owned, nested [`Node`] view of the same hierarchy
//! - Iterative traversal and flattening back into records
//!
//! # Example
//!
//! ```
//! use arbor_core::Record;
//! use arbor_tree::{build, BuildOutcome};
//!
//! let records = [Record::new(0, 0), Record::new(2, 0), Record::new(1, 0)];
//! let BuildOutcome::Tree(tree) = build(&records).unwrap() else {
//!     panic!("expected a tree");
//! };
//!
//! let children: Vec<u32> = tree.children(tree.root()).iter().map(|c| c.index()).collect();
//! assert_eq!(children, vec![1, 2]);
//! ```

pub mod builder;
pub mod error;
pub mod node;
pub mod traverse;
pub mod tree;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::{BuildOptions, BuildOutcome, TreeBuilder, build, build_with};
pub use error::BuildError;
pub use node::Node;
pub use traverse::{NodePreOrder, PreOrder, WithDepth};
pub use tree::{Slot, Tree};
