//! Build error types.

use arbor_core::ArborError;

/// Reasons a record set does not describe exactly one well-formed tree.
///
/// The first four variants are the validation categories; `TooManyRecords`
/// is a capacity limit of the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A record names a node outside `0..len`.
    #[error("record references node {id}, which is not in the record set")]
    MissingNode { id: i64 },

    /// A non-root record points at itself or at a later id.
    #[error("record {id} has parent {parent}; a non-root parent must have a smaller id")]
    CycleOrSelfAncestry { id: i64, parent: i64 },

    /// The same id appears in more than one record.
    #[error("record id {id} appears more than once")]
    DuplicateId { id: i64 },

    /// The root record (id 0) claims a parent other than itself.
    #[error("root record has nonzero parent {parent}")]
    MalformedRoot { parent: i64 },

    /// The record set is larger than the arena can address.
    #[error("{len} records exceed the arena capacity")]
    TooManyRecords { len: usize },
}

impl From<BuildError> for ArborError {
    fn from(err: BuildError) -> Self {
        ArborError::Invariant {
            what: err.to_string(),
        }
    }
}
