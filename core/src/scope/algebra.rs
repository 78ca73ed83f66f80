//! Union and intersection over scope sets.
//!
//! Both operations sort a borrowed view of each input (prefixes ascending,
//! universal last), walk the two sorted views as a single merged sequence,
//! and compare every candidate with the last scope placed in the output.
//! Inputs are never modified.

use super::string_scope::{Containment, StringScope, StringScopes, scope_order};
use smallvec::SmallVec;

type SortedRefs<'a> = SmallVec<[&'a StringScope; 4]>;

fn sorted(scopes: &StringScopes) -> SortedRefs<'_> {
    let mut refs: SortedRefs<'_> = scopes.iter().collect();
    refs.sort_by(|a, b| scope_order(a, b));
    refs
}

/// Merge two sorted views, feeding each scope to `place` in ascending order.
fn merge<'a>(a: &SortedRefs<'a>, b: &SortedRefs<'a>, mut place: impl FnMut(&'a StringScope)) {
    let (mut i, mut j) = (0, 0);
    while i < a.len() || j < b.len() {
        let take_left = match (a.get(i), b.get(j)) {
            (Some(x), Some(y)) => scope_order(x, y).is_le(),
            (Some(_), None) => true,
            _ => false,
        };
        if take_left {
            place(a[i]);
            i += 1;
        } else {
            place(b[j]);
            j += 1;
        }
    }
}

impl StringScopes {
    /// Scopes covering every key covered by `self` or `other`.
    ///
    /// When a scope of one side contains a scope of the other only the wider
    /// one is kept. A universal scope anywhere makes the result universal.
    pub fn union(&self, other: &StringScopes) -> StringScopes {
        if self.is_universal() || other.is_universal() {
            return StringScopes::universal();
        }

        let (a, b) = (sorted(self), sorted(other));
        let mut out = StringScopes::new();
        merge(&a, &b, |candidate| match out.0.last_mut() {
            None => out.0.push(candidate.clone()),
            Some(last) => match last.containment(candidate) {
                Containment::Disjoint => out.0.push(candidate.clone()),
                Containment::Subset => *last = candidate.clone(),
                Containment::Equal | Containment::Superset => {}
            },
        });
        out
    }

    /// Scopes covering the keys covered by both `self` and `other`.
    ///
    /// Nested scopes narrow to the more specific one. Universal scopes are
    /// the identity and are skipped, so an empty or universal side returns
    /// the other side normalized.
    ///
    /// Two disjoint bands admit no common key, yet both are kept: the result
    /// may cover more keys than the exact intersection, never fewer.
    pub fn intersection(&self, other: &StringScopes) -> StringScopes {
        let (a, b) = (sorted(self), sorted(other));
        let mut out = StringScopes::universal();
        merge(&a, &b, |candidate| {
            if candidate.is_universal() {
                return;
            }
            match out.0.last_mut() {
                None => out.0.push(candidate.clone()),
                Some(last) => match last.containment(candidate) {
                    Containment::Disjoint => out.0.push(candidate.clone()),
                    Containment::Superset => *last = candidate.clone(),
                    Containment::Equal | Containment::Subset => {}
                },
            }
        });
        out
    }
}
