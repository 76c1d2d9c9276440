use crate::types::ConstraintKind;
use crate::{GenericVersionConstraint, Version, VersionConstraint, VersionRange};
use std::hash::{Hash, Hasher};
use tracing::trace;

impl<R: VersionRange<V>, V: Version> GenericVersionConstraint<R, V> {
    /// Whether the given version satisfies this constraint
    ///
    /// For a range this is whatever the range's own [VersionRange::contains_version] says, for an
    /// exact version it is plain equality, e.g. `1.0` and `1.0` -> true, `1.0` and `1.1` -> false
    pub fn contains_version(&self, version: &V) -> bool {
        match &self.kind {
            ConstraintKind::Range(range) => {
                let contained = range.contains_version(version);
                trace!("{} contains {}: {}", range, version, contained);
                contained
            }
            ConstraintKind::Version(this) => version == this,
        }
    }
}

impl<R: VersionRange<V>, V: Version> VersionConstraint<V> for GenericVersionConstraint<R, V> {
    type Range = R;

    fn range(&self) -> Option<&R> {
        GenericVersionConstraint::range(self)
    }

    fn version(&self) -> Option<&V> {
        GenericVersionConstraint::version(self)
    }

    fn contains_version(&self, version: &V) -> bool {
        GenericVersionConstraint::contains_version(self, version)
    }
}

/// Two constraints are equal if their ranges are equal (or both absent) and their versions are
/// equal (or both absent), so a range constraint never equals an exact one
impl<R: PartialEq, V: PartialEq> PartialEq<Self> for GenericVersionConstraint<R, V> {
    fn eq(&self, other: &Self) -> bool {
        self.range() == other.range() && self.version() == other.version()
    }
}

impl<R: Eq, V: Eq> Eq for GenericVersionConstraint<R, V> {}

/// Hashes both fields in the same order [PartialEq] compares them, an absent field contributing
/// only its `None` marker
impl<R: Hash, V: Hash> Hash for GenericVersionConstraint<R, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.range().hash(state);
        self.version().hash(state);
    }
}
