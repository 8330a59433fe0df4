//! The flat input fact a tree is built from.

use core::fmt;

/// One claimed parent-child edge: node `id` hangs below node `parent`.
///
/// The root is the record with `id == 0`, and its `parent` is `0` as well.
/// Fields are signed so that malformed input (negative ids) can be
/// represented and rejected instead of failing at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub id: i64,
    pub parent: i64,
}

impl Record {
    pub const fn new(id: i64, parent: i64) -> Self {
        Self { id, parent }
    }

    /// The record that declares the root.
    pub const fn root() -> Self {
        Self { id: 0, parent: 0 }
    }

    pub fn is_root(&self) -> bool {
        self.id == 0
    }
}

impl From<(i64, i64)> for Record {
    fn from((id, parent): (i64, i64)) -> Self {
        Self { id, parent }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{id: {}, parent: {}}}", self.id, self.parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_record() {
        let root = Record::root();
        assert!(root.is_root());
        assert_eq!(root, Record::new(0, 0));
        assert!(!Record::new(3, 0).is_root());
    }

    #[test]
    fn from_tuple() {
        let r: Record = (4, 1).into();
        assert_eq!(r.id, 4);
        assert_eq!(r.parent, 1);
    }

    #[test]
    fn display_format() {
        assert_eq!(Record::new(2, 1).to_string(), "{id: 2, parent: 1}");
    }
}
