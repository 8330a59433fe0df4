//! Record validation logic.

use arbor_core::{NodeId, Record};

use crate::error::BuildError;

/// A checked non-root record: `child` hangs below `parent`, both in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Edge {
    pub child: NodeId,
    pub parent: NodeId,
}

/// Validate the record set and return its edges, root excluded.
///
/// Records are checked in input order and the first violation is returned.
/// For a single record the checks run as: range, ordering, uniqueness, root shape.
pub(crate) fn validate_records(records: &[Record]) -> Result<Vec<Edge>, BuildError> {
    let len = records.len();
    if len > NodeId::MAX_INDEX as usize + 1 {
        return Err(BuildError::TooManyRecords { len });
    }

    let mut seen = vec![false; len];
    let mut edges = Vec::with_capacity(len.saturating_sub(1));

    for record in records {
        let id = checked_id(record.id, len).ok_or(BuildError::MissingNode { id: record.id })?;

        if !record.is_root() && record.parent >= record.id {
            return Err(BuildError::CycleOrSelfAncestry {
                id: record.id,
                parent: record.parent,
            });
        }

        if seen[id.as_usize()] {
            return Err(BuildError::DuplicateId { id: record.id });
        }
        seen[id.as_usize()] = true;

        if record.is_root() {
            if record.parent != 0 {
                return Err(BuildError::MalformedRoot {
                    parent: record.parent,
                });
            }
            continue;
        }

        // parent < id < len already holds, so only a negative parent can dangle
        let parent = checked_id(record.parent, len).ok_or(BuildError::MissingNode {
            id: record.parent,
        })?;
        edges.push(Edge { child: id, parent });
    }

    Ok(edges)
}

/// Map a raw record id to an arena id if it lies in `0..len`.
pub(crate) fn checked_id(raw: i64, len: usize) -> Option<NodeId> {
    let index = usize::try_from(raw).ok().filter(|&i| i < len)?;
    NodeId::try_from_index(index)
}
