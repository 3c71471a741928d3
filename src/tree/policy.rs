//! Merge policy flags for path mutation

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Composable flags controlling how [`set_with_policy`](super::mutate::set_with_policy)
/// treats the existing value at the target key and non-map intermediates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MergePolicy(u8);

impl MergePolicy {
    /// Plain overwrite.
    pub const NONE: MergePolicy = MergePolicy(0);

    /// When both the existing and the new value are maps, shallow-union the
    /// new map into the existing one (new keys win).
    pub const MERGE_MAPS: MergePolicy = MergePolicy(1 << 0);

    /// When both the existing and the new value are arrays of the requested
    /// element type, append the new elements after the existing ones.
    pub const APPEND_ARRAYS: MergePolicy = MergePolicy(1 << 1);

    /// Replace a non-map intermediate value with an empty map instead of
    /// failing. The replaced value is lost.
    pub const FORCE_THROUGH: MergePolicy = MergePolicy(1 << 2);

    /// Policy used by `set` and by directory ingestion.
    pub const DEFAULT: MergePolicy = MergePolicy::MERGE_MAPS;

    /// Build a policy from individual switches.
    pub fn from_flags(merge_maps: bool, append_arrays: bool, force_through: bool) -> Self {
        let mut policy = MergePolicy::NONE;
        if merge_maps {
            policy |= MergePolicy::MERGE_MAPS;
        }
        if append_arrays {
            policy |= MergePolicy::APPEND_ARRAYS;
        }
        if force_through {
            policy |= MergePolicy::FORCE_THROUGH;
        }
        policy
    }

    /// True when every flag of `other` is set in `self`.
    pub fn contains(self, other: MergePolicy) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for MergePolicy {
    type Output = MergePolicy;

    fn bitor(self, rhs: MergePolicy) -> MergePolicy {
        MergePolicy(self.0 | rhs.0)
    }
}

impl BitOrAssign for MergePolicy {
    fn bitor_assign(&mut self, rhs: MergePolicy) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<&str> = [
            (MergePolicy::MERGE_MAPS, "merge_maps"),
            (MergePolicy::APPEND_ARRAYS, "append_arrays"),
            (MergePolicy::FORCE_THROUGH, "force_through"),
        ]
        .iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| *name)
        .collect();
        write!(f, "{}", names.join("|"))
    }
}
