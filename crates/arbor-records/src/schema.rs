//! Record file schema.
//!
//! A file is either a mapping with a `records` key or a bare sequence:
//!
//! ```yaml
//! records:
//!   - { id: 0, parent: 0 }
//!   - { id: 1, parent: 0 }
//! ```

use arbor_core::Record;
use serde::{Deserialize, Serialize};

/// Canonical form written by the save functions.
///
/// The `records` key is required and no other key is accepted, so a
/// misspelled key is an error rather than an empty record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordFile {
    pub records: Vec<Record>,
}

impl From<&[Record]> for RecordFile {
    fn from(records: &[Record]) -> Self {
        Self {
            records: records.to_vec(),
        }
    }
}

/// Every shape accepted when reading.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RecordFileRepr {
    File(RecordFile),
    Bare(Vec<Record>),
}

impl RecordFileRepr {
    pub(crate) fn into_records(self) -> Vec<Record> {
        match self {
            RecordFileRepr::File(file) => file.records,
            RecordFileRepr::Bare(records) => records,
        }
    }
}
