//! Minimal version and range types for exercising constraints in tests

use crate::VersionRange;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;

/// A dotted numeric version such as `1.0.2`. Shorter versions are padded with zeros, so `1`,
/// `1.0` and `1.0.0` are equal but keep their own rendering.
#[derive(Debug, Clone)]
pub struct TestVersion {
    pub release: Vec<usize>,
}

pub fn ver(s: &str) -> TestVersion {
    TestVersion {
        release: s.split('.').map(|part| part.parse().unwrap()).collect(),
    }
}

fn compare_release(this: &[usize], other: &[usize]) -> Ordering {
    let len = this.len().max(other.len());
    let this = this.iter().chain(iter::repeat(&0)).take(len);
    let other = other.iter().chain(iter::repeat(&0)).take(len);
    this.cmp(other)
}

impl PartialEq<Self> for TestVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TestVersion {}

impl PartialOrd<Self> for TestVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TestVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_release(&self.release, &other.release)
    }
}

/// Ignores trailing zeros, like [PartialEq]
impl Hash for TestVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let significant = self
            .release
            .iter()
            .rposition(|part| *part != 0)
            .map_or(0, |last| last + 1);
        self.release[..significant].hash(state);
    }
}

impl Display for TestVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let release = self
            .release
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<String>>()
            .join(".");
        write!(f, "{}", release)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Bound {
    pub version: TestVersion,
    pub inclusive: bool,
}

/// An interval rendered with brackets, e.g. `[1.0,2.0)`, `(,1.0]` or `[1.0,)`
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TestRange {
    pub lower: Option<Bound>,
    pub upper: Option<Bound>,
}

/// `[lower,upper)`
pub fn between(lower: &str, upper: &str) -> TestRange {
    TestRange {
        lower: Some(Bound {
            version: ver(lower),
            inclusive: true,
        }),
        upper: Some(Bound {
            version: ver(upper),
            inclusive: false,
        }),
    }
}

/// `[lower,upper]`
pub fn inclusive(lower: &str, upper: &str) -> TestRange {
    TestRange {
        lower: Some(Bound {
            version: ver(lower),
            inclusive: true,
        }),
        upper: Some(Bound {
            version: ver(upper),
            inclusive: true,
        }),
    }
}

/// `[lower,)`
pub fn at_least(lower: &str) -> TestRange {
    TestRange {
        lower: Some(Bound {
            version: ver(lower),
            inclusive: true,
        }),
        upper: None,
    }
}

/// `(,upper]`
pub fn at_most(upper: &str) -> TestRange {
    TestRange {
        lower: None,
        upper: Some(Bound {
            version: ver(upper),
            inclusive: true,
        }),
    }
}

impl VersionRange<TestVersion> for TestRange {
    fn contains_version(&self, version: &TestVersion) -> bool {
        let above_lower = match &self.lower {
            None => true,
            Some(bound) if bound.inclusive => version >= &bound.version,
            Some(bound) => version > &bound.version,
        };
        let below_upper = match &self.upper {
            None => true,
            Some(bound) if bound.inclusive => version <= &bound.version,
            Some(bound) => version < &bound.version,
        };
        above_lower && below_upper
    }
}

impl Display for TestRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.lower {
            Some(bound) => write!(
                f,
                "{}{}",
                if bound.inclusive { "[" } else { "(" },
                bound.version
            )?,
            None => write!(f, "(")?,
        }
        write!(f, ",")?;
        match &self.upper {
            Some(bound) => write!(
                f,
                "{}{}",
                bound.version,
                if bound.inclusive { "]" } else { ")" }
            ),
            None => write!(f, ")"),
        }
    }
}
