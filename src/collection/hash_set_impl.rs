/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::hash::Hash;

use im::hashset::Iter;
use im::HashSet;

use super::set_ops::SetElementOps;
use super::set_ops::SetOps;

// Hash-based membership for callers that don't need insertion order.
// Every operation here is O(n) or O(n + m) where LinearSet scans.

impl<T: Eq + Hash + Clone> SetOps for HashSet<T> {
    fn is_subset(&self, other: &Self) -> bool {
        self.is_subset(other)
    }

    fn intersection_with(&mut self, other: &Self) {
        self.retain(|e| other.contains(e));
    }

    fn union_with(&mut self, other: Self) {
        other.into_iter().for_each(|e| {
            self.insert(e);
        })
    }

    fn difference_with(&mut self, other: &Self) {
        self.retain(|e| !other.contains(e));
    }
}

impl<T: Eq + Hash + Clone> SetElementOps for HashSet<T> {
    type Element = T;
    type ElementIter<'a> = Iter<'a, T> where Self: 'a;

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
