/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;
use std::iter::FromIterator;

use smallvec::SmallVec;

use super::set_ops::SetElementOps;
use super::set_ops::SetOps;

// Inline capacity before spilling to the heap. Sets this type targets
// rarely grow past a handful of elements.
const INLINE_LEN: usize = 8;

/// An insertion-ordered set backed by a small vector.
///
/// No two elements compare equal; `insert` is idempotent. Membership
/// and the pairwise algebra are linear scans, so every binary
/// operation is O(n·m). Callers that need hash-based membership and
/// don't care about ordering can use the `SetOps` impl on
/// `im::HashSet` instead.
#[derive(Clone, Debug)]
pub struct LinearSet<T: Eq> {
    storage: SmallVec<[T; INLINE_LEN]>,
}

impl<T: Eq> LinearSet<T> {
    pub fn new() -> Self {
        Self {
            storage: SmallVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Appends `e` unless an equal element is already present.
    /// Returns whether the set changed.
    pub fn insert(&mut self, e: T) -> bool {
        if self.contains(&e) {
            return false;
        }
        self.storage.push(e);
        true
    }

    /// Removes the occurrence of `e`, shifting later elements down so
    /// insertion order is preserved. Returns false when `e` is absent;
    /// absence is not an error.
    pub fn remove(&mut self, e: &T) -> bool {
        match self.storage.iter().position(|x| x == e) {
            Some(idx) => {
                self.storage.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, e: &T) -> bool {
        self.storage.iter().any(|x| x == e)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }
}

impl<T: Eq + Clone> LinearSet<T> {
    /// New set holding the elements of `self` also present in `other`,
    /// in `self`'s order.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersection_with(other);
        result
    }

    /// New set holding `self`'s elements followed by the elements of
    /// `other` not already present, in `other`'s relative order.
    pub fn union(mut self, other: Self) -> Self {
        self.union_with(other);
        self
    }

    /// New set holding the elements of `self` absent from `other`, in
    /// `self`'s order.
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.difference_with(other);
        result
    }
}

impl<T: Eq> Default for LinearSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Set equality: same elements, order ignored.
impl<T: Eq> PartialEq for LinearSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.storage.iter().all(|e| other.contains(e))
    }
}

impl<T: Eq> Eq for LinearSet<T> {}

impl<T: Eq + Clone> SetOps for LinearSet<T> {
    fn is_subset(&self, other: &Self) -> bool {
        self.storage.iter().all(|e| other.contains(e))
    }

    fn intersection_with(&mut self, other: &Self) {
        self.storage.retain(|e| other.contains(e));
    }

    fn union_with(&mut self, other: Self) {
        for e in other.storage {
            self.insert(e);
        }
    }

    fn difference_with(&mut self, other: &Self) {
        self.storage.retain(|e| !other.contains(e));
    }
}

impl<T: Eq> SetElementOps for LinearSet<T> {
    type Element = T;
    type ElementIter<'a> = std::slice::Iter<'a, T> where Self: 'a;

    fn add_element(&mut self, e: T) {
        self.insert(e);
    }

    fn remove_element(&mut self, e: &T) {
        self.remove(e);
    }

    fn elements(&self) -> Self::ElementIter<'_> {
        self.iter()
    }
}

impl<T: Eq> FromIterator<T> for LinearSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ret = LinearSet::new();
        for e in iter {
            ret.insert(e);
        }
        ret
    }
}

impl<T: Eq, const N: usize> From<[T; N]> for LinearSet<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, T: Eq> IntoIterator for &'a LinearSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + fmt::Display> fmt::Display for LinearSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, e) in self.storage.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use crate::collection::LinearSet;
    use crate::collection::SetOps;

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = LinearSet::new();
        assert!(set.insert(2));
        assert!(!set.insert(2));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut set = LinearSet::from([1, 2, 3]);
        assert!(!set.remove(&5));
        assert_eq!(set.len(), 3);

        assert!(set.remove(&2));
        let remaining: Vec<i64> = set.iter().copied().collect();
        assert_eq!(remaining, vec![1, 3]);
    }

    #[test]
    fn test_scenario_algebra() {
        let a = LinearSet::from([1, 2, 3, 4]);
        let b = LinearSet::from([3, 4, 5, 6]);

        let met: Vec<i64> = a.intersection(&b).iter().copied().collect();
        assert_eq!(met, vec![3, 4]);

        let joined: Vec<i64> = a.clone().union(b.clone()).iter().copied().collect();
        assert_eq!(joined, vec![1, 2, 3, 4, 5, 6]);

        let diff: Vec<i64> = a.difference(&b).iter().copied().collect();
        assert_eq!(diff, vec![1, 2]);

        assert!(!a.is_subset(&b));
        assert!(a.is_subset(&a));
    }

    #[test]
    fn test_display() {
        let set = LinearSet::from(["c", "a", "b"]);
        assert_eq!(set.to_string(), "{c, a, b}");
        assert_eq!(LinearSet::<i64>::new().to_string(), "{}");
    }
}
