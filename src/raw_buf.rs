use crate::error::{VecError, VecResult};

use alloc::alloc::{alloc, dealloc, Layout};
use core::{marker::PhantomData, ptr::NonNull};

/// An exclusively owned heap buffer of `cap` slots of `T`.
///
/// The buffer only manages memory: it never reads, writes or drops elements.
/// A capacity of zero means the buffer is released and `ptr` is dangling.
pub struct RawBuf<T> {
    /// Start of the allocation, or a dangling pointer when nothing is allocated.
    ptr: NonNull<T>,

    /// Number of slots this buffer was allocated for.
    cap: usize,

    /// The buffer logically owns values of `T`.
    _owns: PhantomData<T>,
}

// SAFETY: RawBuf uniquely owns its allocation, so sending it is sending the `T`s in it.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access to RawBuf only hands out shared access to the `T`s in it.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// Returns `true` if `T` takes no space, in which case the allocator is never used.
    #[inline]
    const fn is_zst() -> bool {
        size_of::<T>() == 0
    }

    /// A buffer that owns no storage.
    #[inline]
    pub const fn released() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _owns: PhantomData,
        }
    }

    /// Allocates room for exactly `cap` slots, all of them uninitialized.
    ///
    /// A `cap` of zero yields a released buffer.
    pub fn allocate(cap: usize) -> VecResult<Self> {
        if cap == 0 {
            return Ok(Self::released());
        }

        if Self::is_zst() {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap,
                _owns: PhantomData,
            });
        }

        let failure = VecError::AllocationFailure { capacity: cap };
        let Ok(layout) = Layout::array::<T>(cap) else {
            log::debug!("layout overflow for {cap} slots of {} bytes", size_of::<T>());
            return Err(failure);
        };

        // SAFETY: `layout` has a non-zero size since `cap > 0` and `T` is not zero-sized.
        let raw = unsafe { alloc(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            log::debug!("allocator refused {} bytes for {cap} slots", layout.size());
            return Err(failure);
        };

        log::trace!("allocated {cap} slots at {ptr:p}");
        Ok(Self {
            ptr,
            cap,
            _owns: PhantomData,
        })
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    #[expect(
        clippy::needless_pass_by_ref_mut,
        reason = "the returned pointer is written through, so callers must hold unique access"
    )]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T> Drop for RawBuf<T> {
    /// Returns the storage to the allocator. Elements must already be gone.
    #[inline]
    fn drop(&mut self) {
        if self.cap == 0 || Self::is_zst() {
            return;
        }
        let layout = Layout::array::<T>(self.cap);
        // Unreachable: `allocate` already computed this layout for the same `cap`.
        debug_assert!(layout.is_ok(), "layout of a live buffer must be valid");
        let Ok(layout) = layout else {
            return;
        };
        log::trace!("releasing {} slots at {:p}", self.cap, self.ptr);
        // SAFETY: ptr was returned by `alloc` with exactly this layout and is freed only here.
        unsafe {
            dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
        }
    }
}
