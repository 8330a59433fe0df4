use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier of a node in the tree arena.
///
/// - `u32` keeps arena slots small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
///
/// The stored value is `index + 1`; the public face is always the 0-based index,
/// which is also the id of the record the node was built from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// The root of every tree.
    pub const ROOT: Id = Id(NonZeroU32::MIN);

    /// Largest 0-based index an `Id` can hold.
    pub const MAX_INDEX: u32 = u32::MAX - 1;

    /// Create an Id from a 0-based index, or `None` if it does not fit.
    pub fn try_from_index(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .and_then(NonZeroU32::new)
            .map(Self)
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// The 0-based index as a `usize`, for slicing into the arena.
    pub fn as_usize(self) -> usize {
        self.index() as usize
    }

    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Id {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.index())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Id {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = <u32 as serde::Deserialize>::deserialize(deserializer)?;
        Id::try_from_index(index as usize)
            .ok_or_else(|| serde::de::Error::custom(format!("node index {index} out of range")))
    }
}

/// Domain-specific ID alias for clarity (no runtime cost).
pub type NodeId = Id;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_index() {
        for i in [0_usize, 1, 2, 42, 10_000] {
            let id = Id::try_from_index(i).unwrap();
            assert_eq!(id.as_usize(), i);
        }
    }

    #[test]
    fn id_rejects_out_of_range() {
        assert!(Id::try_from_index(Id::MAX_INDEX as usize).is_some());
        assert!(Id::try_from_index(u32::MAX as usize).is_none());
    }

    #[test]
    fn root_is_index_zero() {
        assert_eq!(Id::ROOT.index(), 0);
        assert!(Id::try_from_index(0).unwrap().is_root());
        assert!(!Id::try_from_index(1).unwrap().is_root());
    }

    #[test]
    fn option_id_is_small() {
        // This is a classic reason for NonZero: Option<Id> can be same size as Id.
        assert_eq!(
            core::mem::size_of::<Id>(),
            core::mem::size_of::<Option<Id>>()
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn ordering_follows_index(a in 0_u32..Id::MAX_INDEX, b in 0_u32..Id::MAX_INDEX) {
            let ia = Id::try_from_index(a as usize).unwrap();
            let ib = Id::try_from_index(b as usize).unwrap();
            prop_assert_eq!(ia.cmp(&ib), a.cmp(&b));
        }
    }
}
