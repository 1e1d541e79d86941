//! Pluggable boundary and trim strategy contracts.
//!
//! Both contracts are pure functions of the view they are handed. All cursor
//! state lives in [`Tokenizer`](crate::Tokenizer); a strategy sees only the
//! not-yet-tokenized window and answers in coordinates relative to it.
//!
//! Closures implement both traits through blanket impls:
//!
//! ```
//! use span_tokenizer::{Boundary, Tokenizer};
//!
//! // Fixed-width records of two elements each.
//! let pairs = |view: &[u8]| {
//!     let end = view.len().min(2);
//!     Boundary::new(0..end, (end < view.len()).then_some(end..view.len()))
//! };
//! let ranges: Vec<_> = Tokenizer::new(b"abcde", pairs).collect();
//! assert_eq!(ranges, [0..2, 2..4, 4..5]);
//! ```

use std::ops::Range;

/// Output of a [`BoundaryStrategy`]: the next token and where to continue.
///
/// Both ranges are half-open and relative to the view the strategy was
/// handed.
///
/// `continuation` is the window the next step scans. `None` means scanning
/// is complete after this token. `Some` of an empty range means one more
/// step runs over an empty window; the built-in splits use this to report
/// the empty token after a trailing separator. A step over an empty window
/// is always the last one: its continuation is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Boundary {
    /// The candidate token.
    pub token: Range<usize>,
    /// The window to continue scanning from, if any.
    pub continuation: Option<Range<usize>>,
}

impl Boundary {
    /// A token and the window to continue from.
    #[inline]
    pub fn new(token: Range<usize>, continuation: Option<Range<usize>>) -> Self {
        Self {
            token,
            continuation,
        }
    }

    /// A final token with nothing left to scan.
    #[inline]
    pub fn last(token: Range<usize>) -> Self {
        Self {
            token,
            continuation: None,
        }
    }
}

/// Finds the next token in a view.
///
/// # Contract
///
/// For a view of length `len`, the returned ranges must satisfy
/// `token.start <= token.end <= len` and, when present,
/// `continuation.start <= continuation.end <= len`. The continuation must
/// not contain the token, or tokenizing will not terminate. The one
/// exception is an empty view: that step always ends the scan, so a
/// continuation returned for it is ignored.
///
/// Debug builds assert the bounds on every step. Release builds trust the
/// strategy; out-of-bounds ranges panic when the view is sliced.
pub trait BoundaryStrategy<T> {
    fn next_boundary(&self, view: &[T]) -> Boundary;
}

impl<T, F> BoundaryStrategy<T> for F
where
    F: Fn(&[T]) -> Boundary,
{
    #[inline]
    fn next_boundary(&self, view: &[T]) -> Boundary {
        self(view)
    }
}

/// Narrows a candidate token.
///
/// # Contract
///
/// Given the token slice, returns a sub-range `start <= end <= token.len()`
/// relative to the token's own start. Checked the same way as
/// [`BoundaryStrategy`] output.
pub trait TrimStrategy<T> {
    fn trim(&self, token: &[T]) -> Range<usize>;
}

impl<T, F> TrimStrategy<T> for F
where
    F: Fn(&[T]) -> Range<usize>,
{
    #[inline]
    fn trim(&self, token: &[T]) -> Range<usize> {
        self(token)
    }
}
