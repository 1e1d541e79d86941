//! Built-in separator-based split strategies.
//!
//! [`split_strategy`] turns a separator set and [`SplitOptions`] into a
//! [`SplitConfig`]: the boundary strategy, the optional trim, and the
//! skip-empty flag the engine needs. Each option bit is independent.
//!
//! | Options | Boundary step over a view of length `len` |
//! |---|---|
//! | forward | first separator `i`: token `[0, i)`, continue `[i+1, len)`; none: token `[0, len)`, done |
//! | forward + remove empty | first non-separator `s`, then first separator `i > s`: token `[s, i)`, continue `[i+1, len)` |
//! | reverse | last separator `i`: token `[i+1, len)`, continue `[0, i)`; none: token `[0, len)`, done |
//! | reverse + remove empty | last non-separator `e-1`, then last separator `i < e`: token `[i+1, e)`, continue `[0, i)` |
//!
//! A separator in the final scanned position continues with an empty
//! window, so `"a,"` yields `"a"` then `""` when empty entries are kept.

use std::any::type_name;
use std::ops::Range;

use bitflags::bitflags;

use crate::{
    Boundary, BoundaryStrategy, SeparatorSet, SplitElement, StrategyError, Tokenizer,
    TrimStrategy,
};

bitflags! {
    /// Independent options for the built-in split strategies.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct SplitOptions: u8 {
        /// Drop tokens that are empty (after trimming, when trimming).
        const REMOVE_EMPTY_ENTRIES = 1 << 0;
        /// Strip leading and trailing whitespace from every token.
        const TRIM_ENTRIES = 1 << 1;
        /// Scan from the end of the buffer towards its start.
        const REVERSE = 1 << 2;
    }
}

impl SplitOptions {
    /// No options: forward scan, keep empty tokens, no trimming.
    pub const NONE: Self = Self::empty();
}

/// Separator-based boundary strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Split<T: SplitElement> {
    separators: SeparatorSet<T>,
    reverse: bool,
    skip_empty: bool,
}

impl<T: SplitElement> Split<T> {
    /// Create a split over `separators`.
    ///
    /// Honors `REVERSE` and `REMOVE_EMPTY_ENTRIES`; `TRIM_ENTRIES` is a trim
    /// concern and is ignored here (see [`split_strategy`]).
    pub fn new(separators: &[T], options: SplitOptions) -> Self {
        Self {
            separators: SeparatorSet::new(separators),
            reverse: options.contains(SplitOptions::REVERSE),
            skip_empty: options.contains(SplitOptions::REMOVE_EMPTY_ENTRIES),
        }
    }

    /// The deduplicated separator set.
    pub fn separators(&self) -> &SeparatorSet<T> {
        &self.separators
    }

    fn forward_keep_empty(&self, view: &[T]) -> Boundary {
        match self.separators.find_first(view) {
            Some(i) => Boundary::new(0..i, Some(i + 1..view.len())),
            None => Boundary::last(0..view.len()),
        }
    }

    fn forward_skip_empty(&self, view: &[T]) -> Boundary {
        let len = view.len();
        let Some(start) = self.separators.find_first_not(view) else {
            return Boundary::last(len..len);
        };
        match self.separators.find_first(&view[start..]) {
            Some(i) => {
                let sep = start + i;
                Boundary::new(start..sep, Some(sep + 1..len))
            }
            None => Boundary::last(start..len),
        }
    }

    fn reverse_keep_empty(&self, view: &[T]) -> Boundary {
        match self.separators.find_last(view) {
            Some(i) => Boundary::new(i + 1..view.len(), Some(0..i)),
            None => Boundary::last(0..view.len()),
        }
    }

    fn reverse_skip_empty(&self, view: &[T]) -> Boundary {
        let Some(last) = self.separators.find_last_not(view) else {
            return Boundary::last(0..0);
        };
        let end = last + 1;
        match self.separators.find_last(&view[..end]) {
            Some(sep) => Boundary::new(sep + 1..end, Some(0..sep)),
            None => Boundary::last(0..end),
        }
    }
}

impl<T: SplitElement> BoundaryStrategy<T> for Split<T> {
    #[inline]
    fn next_boundary(&self, view: &[T]) -> Boundary {
        match (self.reverse, self.skip_empty) {
            (false, false) => self.forward_keep_empty(view),
            (false, true) => self.forward_skip_empty(view),
            (true, false) => self.reverse_keep_empty(view),
            (true, true) => self.reverse_skip_empty(view),
        }
    }
}

impl<T: SplitElement> BoundaryStrategy<T> for &Split<T> {
    #[inline]
    fn next_boundary(&self, view: &[T]) -> Boundary {
        (**self).next_boundary(view)
    }
}

/// Trims leading and trailing [`SplitElement::is_whitespace`] elements.
///
/// Idempotent: trimming an already-trimmed token returns its full range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WhitespaceTrim;

impl<T: SplitElement> TrimStrategy<T> for WhitespaceTrim {
    fn trim(&self, token: &[T]) -> Range<usize> {
        let Some(start) = token.iter().position(|e| !e.is_whitespace()) else {
            return 0..0;
        };
        // A non-whitespace element exists, so the reverse search succeeds.
        let end = token
            .iter()
            .rposition(|e| !e.is_whitespace())
            .map_or(start, |last| last + 1);
        start..end
    }
}

/// A resolved split: boundary strategy, optional trim, skip-empty flag.
///
/// Produced by [`split_strategy`]; reusable across any number of buffers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitConfig<T: SplitElement> {
    boundary: Split<T>,
    trim: Option<WhitespaceTrim>,
    skip_empty: bool,
}

impl<T: SplitElement> SplitConfig<T> {
    /// The boundary strategy.
    pub fn boundary(&self) -> &Split<T> {
        &self.boundary
    }

    /// The trim strategy, present when `TRIM_ENTRIES` was requested.
    pub fn trim(&self) -> Option<WhitespaceTrim> {
        self.trim
    }

    /// Whether empty tokens are dropped.
    pub fn skip_empty(&self) -> bool {
        self.skip_empty
    }

    /// Start tokenizing `source` with this configuration.
    pub fn tokenize<'a>(&self, source: &'a [T]) -> Tokenizer<'a, T, &Split<T>, WhitespaceTrim> {
        Tokenizer::new(source, &self.boundary)
            .with_optional_trim(self.trim)
            .skip_empty(self.skip_empty)
    }
}

/// Build the split strategy for `separators` and `options`.
///
/// # Errors
///
/// [`StrategyError::Unsupported`] when `TRIM_ENTRIES` is requested for an
/// element type without a built-in whitespace trim.
pub fn split_strategy<T: SplitElement>(
    separators: &[T],
    options: SplitOptions,
) -> Result<SplitConfig<T>, StrategyError> {
    let trim_entries = options.contains(SplitOptions::TRIM_ENTRIES);
    if trim_entries && !T::WHITESPACE_TRIM {
        tracing::debug!(
            element = type_name::<T>(),
            ?options,
            "no whitespace trim for element type"
        );
        return Err(StrategyError::Unsupported {
            element: type_name::<T>(),
            options,
        });
    }

    let boundary = Split::new(separators, options);
    tracing::debug!(
        element = type_name::<T>(),
        ?options,
        separators = boundary.separators().len(),
        "built split strategy"
    );

    Ok(SplitConfig {
        boundary,
        trim: trim_entries.then_some(WhitespaceTrim),
        skip_empty: options.contains(SplitOptions::REMOVE_EMPTY_ENTRIES),
    })
}

#[cfg(test)]
mod tests;
