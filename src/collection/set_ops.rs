/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

/// Pairwise set algebra over a concrete container.
///
/// The `*_with` methods mutate `self` in place; owned wrappers live on
/// the implementing types. Implementations backed by an ordered
/// container must keep `self`'s element order through
/// `intersection_with` and `difference_with`, and must append novel
/// elements of `other` in their original relative order in
/// `union_with`.
pub trait SetOps: Clone {
    /// True iff every element of `self` is contained in `other`.
    /// Vacuously true when `self` is empty.
    fn is_subset(&self, other: &Self) -> bool;

    /// Keep only the elements also contained in `other`.
    fn intersection_with(&mut self, other: &Self);

    /// Absorb the elements of `other` that `self` does not already
    /// contain.
    fn union_with(&mut self, other: Self);

    /// Drop the elements contained in `other`.
    fn difference_with(&mut self, other: &Self);
}

pub trait SetElementOps {
    type Element;
    type ElementIter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    /// No-op when the element is already present.
    fn add_element(&mut self, e: Self::Element);

    /// No-op when the element is absent.
    fn remove_element(&mut self, e: &Self::Element);

    fn elements(&self) -> Self::ElementIter<'_>;
}
