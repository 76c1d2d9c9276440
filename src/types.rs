use std::fmt::{Display, Formatter};
use tracing::debug;

/// A single release, e.g. `1.0` or `2.3.1-beta`.
///
/// All a constraint needs from a version is value equality and a textual rendering, so every
/// type with [PartialEq] and [Display] is a version.
pub trait Version: PartialEq + Display {}

impl<T: PartialEq + Display + ?Sized> Version for T {}

/// An interval of versions such as `[1.0,2.0)`, bounded or unbounded on either side.
///
/// How the interval is spelled and how its bounds compare is up to the implementation, a
/// [GenericVersionConstraint] only ever asks whether a version falls inside it.
pub trait VersionRange<V: Version>: Display {
    /// Whether `version` lies within this range
    fn contains_version(&self, version: &V) -> bool;
}

impl<V: Version, R: VersionRange<V> + ?Sized> VersionRange<V> for &R {
    fn contains_version(&self, version: &V) -> bool {
        (**self).contains_version(version)
    }
}

impl<V: Version, R: VersionRange<V> + ?Sized> VersionRange<V> for Box<R> {
    fn contains_version(&self, version: &V) -> bool {
        (**self).contains_version(version)
    }
}

/// A restriction on the acceptable versions of a dependency, either one exact version or one
/// version range.
pub trait VersionConstraint<V: Version>: Display {
    /// The range type backing range constraints
    type Range: VersionRange<V>;

    /// The range, unless this constraint pins an exact version
    fn range(&self) -> Option<&Self::Range>;

    /// The exact version, unless this constraint is a range
    fn version(&self) -> Option<&V>;

    /// Whether `version` satisfies this constraint
    fn contains_version(&self, version: &V) -> bool;
}

/// Exactly one of a range or a version
#[derive(Eq, PartialEq, Debug, Hash, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub(crate) enum ConstraintKind<R, V> {
    /// `[1.0,2.0)`
    Range(R),
    /// `1.0`
    Version(V),
}

/// A version constraint for a dependency, such as `1.0` or `[1.0,2.0)`.
///
/// Build it from an already constructed range or version; the constraint itself never parses
/// anything. Once built it can't be modified.
///
/// ```rust
/// use version_constraint::GenericVersionConstraint;
///
/// let constraint: GenericVersionConstraint<std::ops::Range<u32>, &str> =
///     GenericVersionConstraint::from_version("1.0");
/// assert!(constraint.is_exact());
/// assert_eq!(constraint.version(), Some(&"1.0"));
/// assert_eq!(constraint.range(), None);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GenericVersionConstraint<R, V> {
    pub(crate) kind: ConstraintKind<R, V>,
}

impl<R, V> GenericVersionConstraint<R, V> {
    /// A constraint accepting every version inside `range`
    pub fn from_range(range: R) -> Self {
        Self {
            kind: ConstraintKind::Range(range),
        }
    }

    /// A constraint accepting exactly `version`
    pub fn from_version(version: V) -> Self {
        Self {
            kind: ConstraintKind::Version(version),
        }
    }

    /// Like [Self::from_range], for callers that may not have a range at hand. Fails if `range`
    /// is `None`.
    pub fn try_from_range(range: Option<R>) -> Result<Self, InvalidArgumentError> {
        match range {
            Some(range) => Ok(Self::from_range(range)),
            None => {
                debug!("Rejecting version constraint without a version range");
                Err(InvalidArgumentError::new(
                    "range",
                    "version range cannot be absent",
                ))
            }
        }
    }

    /// Like [Self::from_version], for callers that may not have a version at hand. Fails if
    /// `version` is `None`.
    pub fn try_from_version(version: Option<V>) -> Result<Self, InvalidArgumentError> {
        match version {
            Some(version) => Ok(Self::from_version(version)),
            None => {
                debug!("Rejecting version constraint without a version");
                Err(InvalidArgumentError::new("version", "version cannot be absent"))
            }
        }
    }

    /// Get the range, e.g. `[1.0,2.0)`, or `None` for an exact version constraint
    pub fn range(&self) -> Option<&R> {
        match &self.kind {
            ConstraintKind::Range(range) => Some(range),
            ConstraintKind::Version(_) => None,
        }
    }

    /// Get the exact version, e.g. `1.0`, or `None` for a range constraint
    pub fn version(&self) -> Option<&V> {
        match &self.kind {
            ConstraintKind::Range(_) => None,
            ConstraintKind::Version(version) => Some(version),
        }
    }

    /// Whether this constraint was built from a range
    pub fn is_range(&self) -> bool {
        matches!(self.kind, ConstraintKind::Range(_))
    }

    /// Whether this constraint was built from an exact version
    pub fn is_exact(&self) -> bool {
        matches!(self.kind, ConstraintKind::Version(_))
    }

    /// Consume the constraint, returning the range if it had one
    pub fn into_range(self) -> Option<R> {
        match self.kind {
            ConstraintKind::Range(range) => Some(range),
            ConstraintKind::Version(_) => None,
        }
    }

    /// Consume the constraint, returning the exact version if it had one
    pub fn into_version(self) -> Option<V> {
        match self.kind {
            ConstraintKind::Range(_) => None,
            ConstraintKind::Version(version) => Some(version),
        }
    }
}

/// Shows the range if there is one, otherwise the version
impl<R: Display, V: Display> Display for GenericVersionConstraint<R, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ConstraintKind::Range(range) => write!(f, "{}", range),
            ConstraintKind::Version(version) => write!(f, "{}", version),
        }
    }
}

/// A constructor was handed an absent value for an argument it requires
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct InvalidArgumentError {
    /// The name of the rejected argument, `range` or `version`
    pub argument: &'static str,
    /// The actual error message
    pub message: String,
}

impl InvalidArgumentError {
    pub(crate) fn new(argument: &'static str, message: impl Into<String>) -> Self {
        Self {
            argument,
            message: message.into(),
        }
    }
}

impl Display for InvalidArgumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid argument `{}`: {}", self.argument, self.message)
    }
}

impl std::error::Error for InvalidArgumentError {}
