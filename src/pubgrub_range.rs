//! Lets a [pubgrub] range back a version constraint

use crate::VersionRange;
use pubgrub::range::Range;

impl<V: pubgrub::version::Version> VersionRange<V> for Range<V> {
    fn contains_version(&self, version: &V) -> bool {
        self.contains(version)
    }
}
