//! Exact-membership separator sets.

use smallvec::SmallVec;

use crate::SplitElement;

/// Separators held inline before spilling to the heap.
const INLINE_SEPARATORS: usize = 8;

/// A set of separator elements.
///
/// Built once when a split strategy is constructed; tokenizing never
/// allocates. Duplicates are removed on construction so the `memchr` fast
/// path for byte sets sees the smallest possible needle list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeparatorSet<T: SplitElement> {
    elements: SmallVec<[T; INLINE_SEPARATORS]>,
    /// Search state for `elements`, built once here.
    lookup: T::Lookup,
}

impl<T: SplitElement> SeparatorSet<T> {
    /// Create a set from `separators`, dropping duplicates.
    pub fn new(separators: &[T]) -> Self {
        let mut elements = SmallVec::with_capacity(separators.len());
        for &sep in separators {
            if !elements.contains(&sep) {
                elements.push(sep);
            }
        }
        let lookup = T::lookup(&elements);
        Self { elements, lookup }
    }

    /// Returns `true` if `element` is a separator.
    #[inline]
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// The distinct separators, in first-seen order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Number of distinct separators.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if there are no separators.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The precomputed search state for these separators.
    pub fn lookup(&self) -> &T::Lookup {
        &self.lookup
    }

    /// Index of the first separator in `view`.
    #[inline]
    pub fn find_first(&self, view: &[T]) -> Option<usize> {
        T::position_any(view, &self.elements, &self.lookup)
    }

    /// Index of the last separator in `view`.
    #[inline]
    pub fn find_last(&self, view: &[T]) -> Option<usize> {
        T::rposition_any(view, &self.elements, &self.lookup)
    }

    /// Index of the first element of `view` that is not a separator.
    #[inline]
    pub fn find_first_not(&self, view: &[T]) -> Option<usize> {
        view.iter().position(|e| !self.contains(e))
    }

    /// Index of the last element of `view` that is not a separator.
    #[inline]
    pub fn find_last_not(&self, view: &[T]) -> Option<usize> {
        view.iter().rposition(|e| !self.contains(e))
    }
}

#[cfg(test)]
mod tests;
