//! A dependency's version constraint: either one exact version or one version range.
//!
//! The crate doesn't parse or compare versions itself. Anything with [PartialEq] and
//! [Display](std::fmt::Display) is a [Version], and a range is anything implementing
//! [VersionRange]; a [GenericVersionConstraint] stores one of the two and forwards membership
//! queries.
//!
//! ```rust
//! use std::fmt::{Display, Formatter};
//! use version_constraint::{GenericVersionConstraint, VersionRange};
//!
//! /// `[lower,upper)`
//! struct HalfOpen(u32, u32);
//!
//! impl Display for HalfOpen {
//!     fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "[{},{})", self.0, self.1)
//!     }
//! }
//!
//! impl VersionRange<u32> for HalfOpen {
//!     fn contains_version(&self, version: &u32) -> bool {
//!         (self.0..self.1).contains(version)
//!     }
//! }
//!
//! let range = GenericVersionConstraint::<_, u32>::from_range(HalfOpen(1, 3));
//! assert!(range.contains_version(&2));
//! assert!(!range.contains_version(&3));
//! assert_eq!(range.to_string(), "[1,3)");
//!
//! let exact = GenericVersionConstraint::<HalfOpen, u32>::from_version(1);
//! assert!(exact.contains_version(&1));
//! assert!(!exact.contains_version(&2));
//! ```
//!
//! With the `pubgrub` feature, `pubgrub::range::Range` can be used as the range type directly.
//! With the `serde` feature, constraints (de)serialize as `{"range": ...}` or `{"version": ...}`.

#![deny(missing_docs)]

mod compare;
#[cfg(feature = "pubgrub")]
mod pubgrub_range;
#[cfg(test)]
mod test_helpers;
mod types;

pub use types::{
    GenericVersionConstraint, InvalidArgumentError, Version, VersionConstraint, VersionRange,
};
