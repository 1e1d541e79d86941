//! Same-layout comparable wrapper for buffers of optional values.
//!
//! [`Nullable<T>`] is `#[repr(transparent)]` over `Option<T>`, so a buffer of
//! `Option<T>` can be viewed as a buffer of `Nullable<T>` (and back) in place:
//! no copy, no allocation, no per-element conversion. Generic buffer code
//! that is written against a wrapper type (or that needs a local type to
//! implement its own traits on) can then run directly over optional-value
//! storage.
//!
//! # Ordering
//!
//! Equality, ordering and hashing delegate to `Option<T>`: the absent value
//! orders before every present value, and present values compare by payload.
//!
//! # Layout
//!
//! `repr(transparent)` guarantees identical size, alignment and niche
//! layout for every `T`. Each reinterpreting function additionally asserts
//! size and alignment at compile time for the instantiated `T`.
//!
//! ```
//! use span_nullable::{as_nullable_slice_mut, Nullable};
//!
//! let mut readings = [Some(3), None, Some(1)];
//! as_nullable_slice_mut(&mut readings).sort_unstable();
//! assert_eq!(readings, [None, Some(1), Some(3)]);
//! assert!(Nullable::none() < Nullable::new(0));
//! ```

use std::mem::{align_of, size_of};

/// An optional value with the same in-memory layout as `Option<T>`.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nullable<T>(Option<T>);

/// Compile-time layout equality of `Nullable<T>` and `Option<T>`.
const fn same_layout<T>() -> bool {
    size_of::<Nullable<T>>() == size_of::<Option<T>>()
        && align_of::<Nullable<T>>() == align_of::<Option<T>>()
}

const _: () = assert!(same_layout::<u8>());
const _: () = assert!(same_layout::<u64>());
const _: () = assert!(same_layout::<&'static str>());
const _: () = assert!(same_layout::<std::num::NonZeroU32>());

impl<T> Nullable<T> {
    /// A present value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(Some(value))
    }

    /// The absent value.
    #[inline]
    pub const fn none() -> Self {
        Self(None)
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` if the value is absent.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Unwrap into the underlying `Option<T>`.
    #[inline]
    pub fn into_inner(self) -> Option<T> {
        self.0
    }

    /// Borrow the underlying `Option<T>`.
    #[inline]
    pub const fn as_option(&self) -> &Option<T> {
        &self.0
    }

    /// Mutably borrow the underlying `Option<T>`.
    #[inline]
    pub fn as_option_mut(&mut self) -> &mut Option<T> {
        &mut self.0
    }

    /// View an `Option<T>` as a `Nullable<T>` in place.
    #[inline]
    #[allow(
        unsafe_code,
        reason = "pointer cast between repr(transparent) wrapper and its field"
    )]
    pub fn from_ref(value: &Option<T>) -> &Self {
        const { assert!(same_layout::<T>()) };
        // SAFETY: `Nullable<T>` is `repr(transparent)` over `Option<T>`, so
        // the pointee layout and validity invariants are identical. The
        // returned reference inherits the lifetime of `value`.
        unsafe { &*std::ptr::from_ref(value).cast::<Self>() }
    }

    /// View an `Option<T>` as a `Nullable<T>` in place, mutably.
    #[inline]
    #[allow(
        unsafe_code,
        reason = "pointer cast between repr(transparent) wrapper and its field"
    )]
    pub fn from_mut(value: &mut Option<T>) -> &mut Self {
        const { assert!(same_layout::<T>()) };
        // SAFETY: as in `from_ref`; the exclusive borrow of `value` is moved
        // into the returned reference.
        unsafe { &mut *std::ptr::from_mut(value).cast::<Self>() }
    }
}

impl<T> Default for Nullable<T> {
    /// The absent value, for any `T`.
    #[inline]
    fn default() -> Self {
        Self(None)
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    #[inline]
    fn from(value: Nullable<T>) -> Self {
        value.0
    }
}

/// View a buffer of `Option<T>` as a buffer of `Nullable<T>`.
#[inline]
#[allow(
    unsafe_code,
    reason = "slice reinterpretation between layout-identical element types"
)]
pub fn as_nullable_slice<T>(values: &[Option<T>]) -> &[Nullable<T>] {
    const { assert!(same_layout::<T>()) };
    // SAFETY: element types are layout-identical (`repr(transparent)`), so
    // the same pointer and length describe a valid `[Nullable<T>]` covering
    // exactly the same bytes for the same lifetime.
    unsafe { std::slice::from_raw_parts(values.as_ptr().cast::<Nullable<T>>(), values.len()) }
}

/// View a buffer of `Option<T>` as a buffer of `Nullable<T>`, mutably.
#[inline]
#[allow(
    unsafe_code,
    reason = "slice reinterpretation between layout-identical element types"
)]
pub fn as_nullable_slice_mut<T>(values: &mut [Option<T>]) -> &mut [Nullable<T>] {
    const { assert!(same_layout::<T>()) };
    // SAFETY: as in `as_nullable_slice`; the exclusive borrow is carried over.
    unsafe {
        std::slice::from_raw_parts_mut(values.as_mut_ptr().cast::<Nullable<T>>(), values.len())
    }
}

/// View a buffer of `Nullable<T>` as a buffer of `Option<T>`.
#[inline]
#[allow(
    unsafe_code,
    reason = "slice reinterpretation between layout-identical element types"
)]
pub fn as_option_slice<T>(values: &[Nullable<T>]) -> &[Option<T>] {
    const { assert!(same_layout::<T>()) };
    // SAFETY: inverse of `as_nullable_slice`.
    unsafe { std::slice::from_raw_parts(values.as_ptr().cast::<Option<T>>(), values.len()) }
}

/// View a buffer of `Nullable<T>` as a buffer of `Option<T>`, mutably.
#[inline]
#[allow(
    unsafe_code,
    reason = "slice reinterpretation between layout-identical element types"
)]
pub fn as_option_slice_mut<T>(values: &mut [Nullable<T>]) -> &mut [Option<T>] {
    const { assert!(same_layout::<T>()) };
    // SAFETY: inverse of `as_nullable_slice_mut`.
    unsafe {
        std::slice::from_raw_parts_mut(values.as_mut_ptr().cast::<Option<T>>(), values.len())
    }
}
