use crate::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Bound, Deref};
use ecow::EcoString;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A band of the key space: every key that starts with `start`.
///
/// The empty prefix is the universal scope, matching every key. Two scopes
/// are always equal, nested, or disjoint; they never partially overlap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StringScope {
    pub start: EcoString,
}

/// How the key-set of one scope relates to another's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Containment {
    /// Strictly contained in the other scope (more specific).
    Subset,
    Equal,
    /// Strictly contains the other scope (more general).
    Superset,
    /// No key belongs to both.
    Disjoint,
}

impl Containment {
    /// Numeric encoding: `-1` subset, `0` equal, `1` superset, `2` disjoint.
    pub const fn code(self) -> i8 {
        match self {
            Containment::Subset => -1,
            Containment::Equal => 0,
            Containment::Superset => 1,
            Containment::Disjoint => 2,
        }
    }
}

impl StringScope {
    pub fn new(start: impl Into<EcoString>) -> Self {
        Self {
            start: start.into(),
        }
    }

    pub fn universal() -> Self {
        Self::default()
    }

    pub fn is_universal(&self) -> bool {
        self.start.is_empty()
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    /// Relation of `self`'s key-set to `other`'s.
    pub fn containment(&self, other: &StringScope) -> Containment {
        if self.start == other.start {
            Containment::Equal
        } else if self.is_universal() {
            Containment::Superset
        } else if other.is_universal() || self.start.starts_with(other.start.as_str()) {
            Containment::Subset
        } else if other.start.starts_with(self.start.as_str()) {
            Containment::Superset
        } else {
            Containment::Disjoint
        }
    }

    /// [`containment`](Self::containment) as its numeric code.
    pub fn cmp_code(&self, other: &StringScope) -> i8 {
        self.containment(other).code()
    }

    pub fn matches(&self, key: &str) -> bool {
        key.starts_with(self.start.as_str())
    }

    /// The half-open byte range `[start, successor)` holding every key of
    /// this scope, for driving a range scan.
    ///
    /// The universal scope, and a prefix made only of `0xFF` bytes, have no
    /// finite upper bound.
    pub fn key_range(&self) -> (Bound<Vec<u8>>, Bound<Vec<u8>>) {
        if self.is_universal() {
            return (Bound::Unbounded, Bound::Unbounded);
        }
        let lower = Bound::Included(self.start.as_bytes().to_vec());
        let upper = match prefix_successor(self.start.as_bytes()) {
            Some(successor) => Bound::Excluded(successor),
            None => Bound::Unbounded,
        };
        (lower, upper)
    }
}

/// Smallest byte string greater than every string with the given prefix.
fn prefix_successor(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut successor = prefix.to_vec();
    while let Some(last) = successor.pop() {
        if last < u8::MAX {
            successor.push(last + 1);
            return Some(successor);
        }
    }
    None
}

impl fmt::Display for StringScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_universal() {
            write!(f, "*")
        } else {
            write!(f, "{:?}*", self.start.as_str())
        }
    }
}

impl From<&str> for StringScope {
    fn from(start: &str) -> Self {
        StringScope::new(start)
    }
}

/// Sort order used by the algebra: ascending by prefix, universal last.
pub(crate) fn scope_order(a: &StringScope, b: &StringScope) -> Ordering {
    match (a.is_universal(), b.is_universal()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.start.as_str().cmp(b.start.as_str()),
    }
}

/// A union of scopes.
///
/// Results of the algebra and of scope evaluation are normalized: sorted, and
/// no member contains another.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringScopes(pub(crate) SmallVec<[StringScope; 2]>);

impl StringScopes {
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// The single universal scope: no constraint.
    pub fn universal() -> Self {
        Self::single(StringScope::universal())
    }

    pub fn single(scope: StringScope) -> Self {
        let mut scopes = SmallVec::new();
        scopes.push(scope);
        Self(scopes)
    }

    pub fn push(&mut self, scope: StringScope) {
        self.0.push(scope);
    }

    /// Whether any member is the universal scope.
    pub fn is_universal(&self) -> bool {
        self.0.iter().any(StringScope::is_universal)
    }

    /// Whether `key` falls in any member.
    pub fn matches(&self, key: &str) -> bool {
        self.0.iter().any(|scope| scope.matches(key))
    }

    /// Sort and drop members contained in other members.
    pub fn normalized(&self) -> Self {
        self.union(&StringScopes::new())
    }

    pub fn into_vec(self) -> Vec<StringScope> {
        self.0.into_vec()
    }
}

impl Deref for StringScopes {
    type Target = [StringScope];

    fn deref(&self) -> &[StringScope] {
        &self.0
    }
}

impl FromIterator<StringScope> for StringScopes {
    fn from_iter<I: IntoIterator<Item = StringScope>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for StringScopes {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(StringScope::new).collect()
    }
}

impl IntoIterator for StringScopes {
    type Item = StringScope;
    type IntoIter = smallvec::IntoIter<[StringScope; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StringScopes {
    type Item = &'a StringScope;
    type IntoIter = core::slice::Iter<'a, StringScope>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for StringScopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, scope) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", scope)?;
        }
        write!(f, "]")
    }
}
