//! Element types the built-in split strategies can operate on.
//!
//! The tokenizer engine itself is generic over any `T`. The built-in
//! strategies additionally need to search for separators and, when trimming
//! is requested, to classify whitespace. [`SplitElement`] carries both.
//!
//! # Search
//!
//! `position_any` / `rposition_any` default to a linear scan with exact
//! equality. `u8` overrides them with `memchr` for sets of up to three
//! needles, which is the common case (`,`, `;`, `\t`, `\n`...). Larger byte
//! sets fall back to a 256-bit membership table ([`ByteTable`]).
//!
//! Any per-set search state is a [`SplitElement::Lookup`], built once by
//! [`SplitElement::lookup`] when the separator set is constructed and passed
//! to every search.
//!
//! # Whitespace
//!
//! Only character-like element types have a built-in whitespace trim:
//! `u8` (ASCII), `char`, and `u16` (UTF-16 code units). For every other type
//! `WHITESPACE_TRIM` is `false` and requesting a trimmed split fails at
//! construction time.

use std::fmt;

/// An element type the built-in split strategies support.
pub trait SplitElement: Copy + PartialEq {
    /// Search state precomputed from a needle set; `()` for linear search.
    type Lookup: Clone + fmt::Debug + Eq;

    /// Whether [`is_whitespace`](Self::is_whitespace) is meaningful for this
    /// type, i.e. whether a built-in whitespace trim exists.
    const WHITESPACE_TRIM: bool = false;

    /// Returns `true` if this element is whitespace.
    ///
    /// Always `false` for types without a built-in whitespace trim.
    #[inline]
    fn is_whitespace(self) -> bool {
        false
    }

    /// Build the search state for `needles`.
    fn lookup(needles: &[Self]) -> Self::Lookup;

    /// Index of the first element of `haystack` equal to any of `needles`.
    ///
    /// `lookup` must come from [`lookup(needles)`](Self::lookup).
    #[inline]
    fn position_any(
        haystack: &[Self],
        needles: &[Self],
        _lookup: &Self::Lookup,
    ) -> Option<usize> {
        haystack.iter().position(|e| needles.contains(e))
    }

    /// Index of the last element of `haystack` equal to any of `needles`.
    ///
    /// `lookup` must come from [`lookup(needles)`](Self::lookup).
    #[inline]
    fn rposition_any(
        haystack: &[Self],
        needles: &[Self],
        _lookup: &Self::Lookup,
    ) -> Option<usize> {
        haystack.iter().rposition(|e| needles.contains(e))
    }
}

/// 256-bit membership table for byte sets too large for `memchr3`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ByteTable([u64; 4]);

impl ByteTable {
    /// Table holding exactly `bytes`.
    pub fn new(bytes: &[u8]) -> Self {
        let mut bits = [0u64; 4];
        for &b in bytes {
            bits[(b >> 6) as usize] |= 1 << (b & 63);
        }
        Self(bits)
    }

    /// Returns `true` if `b` is in the table.
    #[inline]
    pub fn contains(&self, b: u8) -> bool {
        self.0[(b >> 6) as usize] & (1 << (b & 63)) != 0
    }
}

impl SplitElement for u8 {
    type Lookup = ByteTable;

    const WHITESPACE_TRIM: bool = true;

    #[inline]
    fn is_whitespace(self) -> bool {
        // `u8::is_ascii_whitespace` excludes vertical tab.
        self.is_ascii_whitespace() || self == 0x0B
    }

    fn lookup(needles: &[u8]) -> ByteTable {
        ByteTable::new(needles)
    }

    fn position_any(haystack: &[u8], needles: &[u8], table: &ByteTable) -> Option<usize> {
        match *needles {
            [] => None,
            [a] => memchr::memchr(a, haystack),
            [a, b] => memchr::memchr2(a, b, haystack),
            [a, b, c] => memchr::memchr3(a, b, c, haystack),
            _ => haystack.iter().position(|&b| table.contains(b)),
        }
    }

    fn rposition_any(haystack: &[u8], needles: &[u8], table: &ByteTable) -> Option<usize> {
        match *needles {
            [] => None,
            [a] => memchr::memrchr(a, haystack),
            [a, b] => memchr::memrchr2(a, b, haystack),
            [a, b, c] => memchr::memrchr3(a, b, c, haystack),
            _ => haystack.iter().rposition(|&b| table.contains(b)),
        }
    }
}

impl SplitElement for char {
    type Lookup = ();

    const WHITESPACE_TRIM: bool = true;

    fn lookup(_needles: &[char]) {}

    #[inline]
    fn is_whitespace(self) -> bool {
        char::is_whitespace(self)
    }
}

impl SplitElement for u16 {
    type Lookup = ();

    const WHITESPACE_TRIM: bool = true;

    fn lookup(_needles: &[u16]) {}

    /// Surrogate halves are never whitespace.
    #[inline]
    fn is_whitespace(self) -> bool {
        char::from_u32(u32::from(self)).is_some_and(char::is_whitespace)
    }
}

macro_rules! impl_split_element_without_trim {
    ($($ty:ty),* $(,)?) => {
        $(impl SplitElement for $ty {
            type Lookup = ();

            fn lookup(_needles: &[$ty]) {}
        })*
    };
}

impl_split_element_without_trim!(i8, i16, i32, i64, isize, u32, u64, usize);
