//! `growable_vec`: a heap-allocated, growable vector with explicit capacity management
//!
//! Provides [`GrowableVec`], a contiguous container that tracks its length and
//! allocated capacity separately, grows by doubling, and reports contract
//! violations and allocation failures as [`VecError`] values instead of aborting.
//! The crate is `no_std` and only needs `alloc`.
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(clippy::multiple_unsafe_ops_per_block)]
#![deny(clippy::semicolon_if_nothing_returned)]
#![deny(clippy::std_instead_of_core)]
#![deny(clippy::std_instead_of_alloc)]
#![deny(clippy::missing_inline_in_public_items)]
#![deny(clippy::return_self_not_must_use)]
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

/// Internal module that are not meant for users to use.
mod internal {
    /// Helper macro to define the unchecked and checked variants of an accessor.
    ///
    /// The unchecked variant is `unsafe` and only `debug_assert!`s its preconditions.
    /// The checked variant tests the same preconditions and returns the paired
    /// [`VecError`](crate::VecError) for the first one that holds.
    macro_rules! define_variants {
    (
        $(#[$meta:meta])*
        fn $name:ident($self:ident : $self_ty:ty $(, $param:ident: $param_ty:ty)*) -> $ret:ty,

        checked_brief: $checked_brief:literal,
        unchecked_brief_suffix: $unchecked_brief_suffix:literal,
        ub_conditions: {
            $($ub_condition:expr => $error_name:ident : $error:expr ; $message:literal),+ $(,)?
        },
        unchecked_fn: $unchecked_fn:ident,
        body: $body:tt,
        $(examples: { $($ex_checked:tt)* })?
    ) => {
        $(#[$meta])*
        #[doc = concat!(" ", $checked_brief, ", ", $unchecked_brief_suffix, ".")]
        ///
        #[doc = concat!(" See also [`Self::", stringify!($name), "`] for the checked version.")]
        ///
        /// # Safety
        ///
        /// Calling this function when any of the following conditions are **`true`** is **undefined behavior**:
        $( #[doc = concat!(" - `", stringify!($ub_condition), "`")] )+
        #[inline]
        pub unsafe fn $unchecked_fn($self: $self_ty $(, $param: $param_ty)*) -> $ret {
            $( debug_assert!(!($ub_condition), $message); )+
            $body
        }

        $(#[$meta])*
        #[doc = concat!(" ", $checked_brief, ".")]
        ///
        #[doc = concat!(" See also [`Self::", stringify!($unchecked_fn), "`] for the unchecked version.")]
        ///
        /// # Errors
        ///
        $( #[doc = concat!(" - [`", stringify!($error_name), "`](crate::VecError::", stringify!($error_name), ") if `", stringify!($ub_condition), "`")] )+
        $(
            ///
            /// # Examples
            ///
            $($ex_checked)*
        )?
        #[inline]
        pub fn $name($self: $self_ty $(, $param: $param_ty)*) -> $crate::VecResult<$ret> {
            $( if $ub_condition { return Err($error); } )+
            // SAFETY: passed all undefined behaviour conditions above
            let result = unsafe { $self.$unchecked_fn($($param),*) };
            Ok(result)
        }
    };
}

    pub(crate) use define_variants;
}

/// The error type shared by all fallible operations.
pub mod error;

/// A heap-allocated vector with explicit, doubling capacity growth.
pub mod growable_vec;

mod raw_buf;

pub use crate::error::{VecError, VecResult};
pub use crate::growable_vec::{GrowableVec, GROWTH_FACTOR};
