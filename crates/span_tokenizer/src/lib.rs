//! Allocation-free, single-pass tokenizer over contiguous buffers.
//!
//! The crate splits a borrowed buffer (`&[T]`) into token ranges without
//! copying or allocating. It has two layers:
//!
//! - [`Tokenizer`]: a cursor that repeatedly asks a [`BoundaryStrategy`] for
//!   the next token and the window to keep scanning, optionally narrows the
//!   token with a [`TrimStrategy`], and optionally drops empty tokens.
//! - Built-in strategies ([`Split`], [`WhitespaceTrim`]) selected from
//!   [`SplitOptions`] and a separator set by [`split_strategy`].
//!
//! Tokens are reported as half-open `Range<usize>` values into the original
//! buffer. Callers slice the buffer themselves (or use [`Tokenizer::token`]).
//!
//! # Example
//!
//! ```
//! use span_tokenizer::{split_strategy, SplitOptions};
//!
//! let config = split_strategy(b",", SplitOptions::REMOVE_EMPTY_ENTRIES)?;
//! let source = b"a,,b,";
//! let tokens: Vec<&[u8]> = config.tokenize(source).map(|r| &source[r]).collect();
//! assert_eq!(tokens, [&b"a"[..], &b"b"[..]]);
//! # Ok::<(), span_tokenizer::StrategyError>(())
//! ```
//!
//! # Contract Checking
//!
//! Strategy output is validated with `debug_assert!`. Release builds trust
//! the strategy; an out-of-contract range then panics at slice indexing.

mod element;
mod error;
mod separator;
mod split;
mod strategy;
mod tokenizer;

pub use element::{ByteTable, SplitElement};
pub use error::StrategyError;
pub use separator::SeparatorSet;
pub use split::{split_strategy, Split, SplitConfig, SplitOptions, WhitespaceTrim};
pub use strategy::{Boundary, BoundaryStrategy, TrimStrategy};
pub use tokenizer::{NoTrim, Tokenizer};
