//! Single-pass tokenizer cursor.
//!
//! The cursor owns three pieces of state: the not-yet-tokenized window
//! (`remaining`), that window's offset in the original buffer
//! (`source_offset`), and the last published token (`current`). Each
//! [`advance()`](Tokenizer::advance) hands `remaining` to the boundary
//! strategy, optionally trims the candidate token, and either publishes it
//! or, for an empty token with skip-empty set, moves on without yielding.
//!
//! # Protocol
//!
//! Advance-then-read: call `advance()`, and when it returns `true` read
//! [`current()`](Tokenizer::current). `advance()` returning `false` is the
//! terminal state and every later call returns `false` again. There is no
//! rewind; construct a new tokenizer to scan again.
//!
//! # Direction
//!
//! The engine makes no assumption about scan direction. A forward strategy
//! continues with the suffix after the token; a reverse strategy continues
//! with the prefix before it (`continuation.start == 0`, so the offset does
//! not move). Either way no index is visited twice.
//!
//! # Termination
//!
//! A step over an empty window is final: it may produce one (empty) token,
//! and then the cursor is exhausted even if the strategy returned a
//! continuation. Every other step must shrink the window, so a buffer of
//! `n` elements takes at most `n + 1` steps.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::{Boundary, BoundaryStrategy, TrimStrategy};

/// Placeholder trim type for a tokenizer without trimming.
///
/// Never invoked by the engine; as a [`TrimStrategy`] it keeps the whole
/// token.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrim;

impl<T> TrimStrategy<T> for NoTrim {
    #[inline]
    fn trim(&self, token: &[T]) -> Range<usize> {
        0..token.len()
    }
}

/// Allocation-free cursor yielding token ranges over a borrowed buffer.
///
/// Ranges are absolute (relative to the start of the buffer passed to
/// [`new()`](Self::new)). The tokenizer never copies or mutates the buffer.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a, T, B, R = NoTrim> {
    /// The full buffer being tokenized.
    source: &'a [T],
    /// Window still to scan. `None` once exhausted.
    remaining: Option<&'a [T]>,
    /// Offset of `remaining` within `source`.
    source_offset: usize,
    /// Last published token, absolute.
    current: Range<usize>,
    boundary: B,
    trim: Option<R>,
    skip_empty: bool,
}

impl<'a, T, B> Tokenizer<'a, T, B>
where
    B: BoundaryStrategy<T>,
{
    /// Create a tokenizer over `source` with no trim and skip-empty off.
    ///
    /// An empty `source` yields no tokens.
    pub fn new(source: &'a [T], boundary: B) -> Self {
        Self {
            source,
            remaining: (!source.is_empty()).then_some(source),
            source_offset: 0,
            current: 0..0,
            boundary,
            trim: None,
            skip_empty: false,
        }
    }
}

impl<'a, T, B, R> Tokenizer<'a, T, B, R>
where
    B: BoundaryStrategy<T>,
    R: TrimStrategy<T>,
{
    /// Install a trim strategy, replacing any previous one.
    #[must_use]
    pub fn with_trim<R2>(self, trim: R2) -> Tokenizer<'a, T, B, R2>
    where
        R2: TrimStrategy<T>,
    {
        self.with_optional_trim(Some(trim))
    }

    /// Install an optional trim strategy; `None` disables trimming.
    #[must_use]
    pub fn with_optional_trim<R2>(self, trim: Option<R2>) -> Tokenizer<'a, T, B, R2>
    where
        R2: TrimStrategy<T>,
    {
        Tokenizer {
            source: self.source,
            remaining: self.remaining,
            source_offset: self.source_offset,
            current: self.current,
            boundary: self.boundary,
            trim,
            skip_empty: self.skip_empty,
        }
    }

    /// Drop tokens that are empty after trimming.
    #[must_use]
    pub fn skip_empty(mut self, skip_empty: bool) -> Self {
        self.skip_empty = skip_empty;
        self
    }

    /// Move to the next token.
    ///
    /// Returns `false` when the buffer is exhausted; that state is permanent.
    pub fn advance(&mut self) -> bool {
        loop {
            let Some(view) = self.remaining else {
                return false;
            };

            let Boundary {
                token,
                continuation,
            } = self.boundary.next_boundary(view);
            debug_assert!(
                token.start <= token.end && token.end <= view.len(),
                "boundary strategy returned token {token:?} outside view of length {}",
                view.len()
            );
            if let Some(next) = &continuation {
                debug_assert!(
                    next.start <= next.end && next.end <= view.len(),
                    "boundary strategy returned continuation {next:?} outside view of length {}",
                    view.len()
                );
            }

            let token = match &self.trim {
                Some(trim) if !token.is_empty() => {
                    let trimmed = trim.trim(&view[token.clone()]);
                    debug_assert!(
                        trimmed.start <= trimmed.end && trimmed.end <= token.len(),
                        "trim strategy returned {trimmed:?} outside token of length {}",
                        token.len()
                    );
                    token.start + trimmed.start..token.start + trimmed.end
                }
                _ => token,
            };

            if token.is_empty() && self.skip_empty {
                tracing::trace!(
                    offset = self.source_offset + token.start,
                    "skipping empty token"
                );
                self.move_to(view, continuation);
                continue;
            }

            self.current = self.source_offset + token.start..self.source_offset + token.end;
            self.move_to(view, continuation);
            return true;
        }
    }

    /// Narrow `remaining` to `continuation` (relative to `view`).
    ///
    /// An empty view is always the last step, whatever the continuation.
    #[inline]
    fn move_to(&mut self, view: &'a [T], continuation: Option<Range<usize>>) {
        match continuation {
            Some(next) if !view.is_empty() => {
                self.source_offset += next.start;
                self.remaining = Some(&view[next]);
            }
            _ => self.remaining = None,
        }
    }
}

impl<'a, T, B, R> Tokenizer<'a, T, B, R> {
    /// The last token published by a successful `advance()`.
    ///
    /// Stale before the first successful advance and after exhaustion.
    #[inline]
    pub fn current(&self) -> Range<usize> {
        self.current.clone()
    }

    /// The elements of the last published token, borrowed from the source.
    #[inline]
    pub fn token(&self) -> &'a [T] {
        &self.source[self.current.clone()]
    }

    /// The buffer being tokenized.
    #[inline]
    pub fn source(&self) -> &'a [T] {
        self.source
    }

    /// Offset of the unscanned window within the source.
    #[inline]
    pub fn source_offset(&self) -> usize {
        self.source_offset
    }

    /// The unscanned window; empty once exhausted.
    #[inline]
    pub fn remaining(&self) -> &'a [T] {
        self.remaining.unwrap_or_default()
    }

    /// Returns `true` once `advance()` can no longer produce tokens.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_none()
    }
}

impl<T, B, R> Iterator for Tokenizer<'_, T, B, R>
where
    B: BoundaryStrategy<T>,
    R: TrimStrategy<T>,
{
    type Item = Range<usize>;

    #[inline]
    fn next(&mut self) -> Option<Range<usize>> {
        self.advance().then(|| self.current())
    }
}

impl<T, B, R> FusedIterator for Tokenizer<'_, T, B, R>
where
    B: BoundaryStrategy<T>,
    R: TrimStrategy<T>,
{
}
