use crate::error::{or_panic, VecError, VecResult};
use crate::internal::define_variants;
use crate::raw_buf::RawBuf;

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr, slice,
};

/// Multiplier applied to the capacity whenever a vector runs out of room.
pub const GROWTH_FACTOR: usize = 2;

/// A heap-allocated vector that tracks its length and capacity separately.
///
/// Every constructor leaves at least one slot allocated. The only state with
/// zero capacity is the *released* state left behind by [`Self::take`], which
/// owns no storage and is still fully usable: the next growth allocates again.
///
/// Instances are `Send`/`Sync` exactly when `T` is. There is no internal
/// locking; sharing one vector across threads for mutation is ruled out by the
/// borrow rules, not by the type.
pub struct GrowableVec<T> {
    /// The heap storage; slots in `len..capacity` are uninitialized.
    buf: RawBuf<T>,

    /// The current number of initialized elements at the front of `buf`.
    len: usize,
}

impl<T> GrowableVec<T> {
    /// Attempts to create an empty vector with room for one element.
    ///
    /// # Errors
    ///
    /// - [`VecError::AllocationFailure`] if the single slot cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use growable_vec::GrowableVec;
    ///
    /// let vec = GrowableVec::<i32>::try_new()?;
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 1);
    /// assert!(vec.is_empty());
    /// # Ok::<(), growable_vec::VecError>(())
    /// ```
    #[inline]
    pub fn try_new() -> VecResult<Self> {
        Ok(Self {
            buf: RawBuf::allocate(1)?,
            len: 0,
        })
    }

    /// Creates an empty vector with room for one element.
    ///
    /// See also [`Self::try_new`] for the fallible version.
    ///
    /// # Panics
    ///
    /// - if the single slot cannot be allocated.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn new() -> Self {
        or_panic(Self::try_new())
    }

    /// Attempts to create a vector holding `len` default values.
    ///
    /// The capacity is exactly `len`, or one when `len` is zero.
    ///
    /// # Errors
    ///
    /// - [`VecError::AllocationFailure`] if the storage cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use growable_vec::GrowableVec;
    ///
    /// let vec = GrowableVec::<u8>::try_with_len(4)?;
    /// assert_eq!(vec.as_slice(), &[0, 0, 0, 0]);
    /// assert_eq!(vec.capacity(), 4);
    ///
    /// let empty = GrowableVec::<u8>::try_with_len(0)?;
    /// assert_eq!(empty.capacity(), 1);
    /// # Ok::<(), growable_vec::VecError>(())
    /// ```
    #[inline]
    pub fn try_with_len(len: usize) -> VecResult<Self>
    where
        T: Default,
    {
        let mut vec = Self {
            buf: RawBuf::allocate(len.max(1))?,
            len: 0,
        };
        for _ in 0..len {
            // SAFETY: capacity is at least `len` and fewer than `len` elements are live
            unsafe { vec.push_back_unchecked(T::default()) };
        }
        Ok(vec)
    }

    /// Creates a vector holding `len` default values.
    ///
    /// See also [`Self::try_with_len`] for the fallible version.
    ///
    /// # Panics
    ///
    /// - if the storage cannot be allocated.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        or_panic(Self::try_with_len(len))
    }

    /// A vector that owns no storage.
    #[inline]
    const fn released() -> Self {
        Self {
            buf: RawBuf::released(),
            len: 0,
        }
    }

    /// Copies `items` into a fresh buffer of `capacity` slots.
    fn try_from_slice_with_capacity(items: &[T], capacity: usize) -> VecResult<Self>
    where
        T: Clone,
    {
        debug_assert!(items.len() <= capacity, "buffer capacity exceeded");
        let mut out = Self {
            buf: RawBuf::allocate(capacity)?,
            len: 0,
        };
        for item in items {
            // SAFETY: `out` has room for `capacity >= items.len()` elements
            unsafe { out.push_back_unchecked(item.clone()) };
        }
        Ok(out)
    }

    /// Attempts to create a deep copy with the same length and capacity.
    ///
    /// If allocating or cloning fails partway, everything cloned so far is
    /// dropped, the new storage is released, and no copy is produced.
    ///
    /// # Errors
    ///
    /// - [`VecError::AllocationFailure`] if the storage cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use growable_vec::GrowableVec;
    ///
    /// let mut vec = GrowableVec::new();
    /// vec.push_back(1)?;
    /// vec.push_back(2)?;
    /// vec.push_back(3)?;
    ///
    /// let mut copy = vec.try_clone()?;
    /// copy.push_back(4)?;
    ///
    /// assert_eq!(vec.as_slice(), &[1, 2, 3]);
    /// assert_eq!(copy.as_slice(), &[1, 2, 3, 4]);
    /// # Ok::<(), growable_vec::VecError>(())
    /// ```
    #[inline]
    pub fn try_clone(&self) -> VecResult<Self>
    where
        T: Clone,
    {
        Self::try_from_slice_with_capacity(self.as_slice(), self.capacity().max(1))
    }

    /// Replaces the contents with a deep copy of `source` (copy-and-swap).
    ///
    /// The copy is built completely before anything in `self` changes, so on
    /// failure `self` is left exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`VecError::AllocationFailure`] if the copy cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use growable_vec::GrowableVec;
    ///
    /// let source = GrowableVec::try_from(&[7, 8][..])?;
    /// let mut target = GrowableVec::try_from(&[1, 2, 3, 4][..])?;
    ///
    /// target.try_clone_from(&source)?;
    /// assert_eq!(target.as_slice(), &[7, 8]);
    /// assert_eq!(target.capacity(), source.capacity());
    /// # Ok::<(), growable_vec::VecError>(())
    /// ```
    #[inline]
    pub fn try_clone_from(&mut self, source: &Self) -> VecResult<()>
    where
        T: Clone,
    {
        let mut copy = source.try_clone()?;
        mem::swap(self, &mut copy);
        Ok(())
    }

    /// Moves the whole vector out, leaving `self` released.
    ///
    /// No element is copied and nothing is allocated. Afterwards `self` has
    /// length 0, capacity 0 and no storage; it can still be pushed to.
    ///
    /// # Examples
    ///
    /// ```
    /// use growable_vec::GrowableVec;
    ///
    /// let mut source = GrowableVec::try_from(&[1, 2, 3][..])?;
    /// let moved = source.take();
    ///
    /// assert_eq!(moved.as_slice(), &[1, 2, 3]);
    /// assert_eq!(source.len(), 0);
    /// assert_eq!(source.capacity(), 0);
    ///
    /// source.push_back(9)?;
    /// assert_eq!(source.as_slice(), &[9]);
    /// # Ok::<(), growable_vec::VecError>(())
    /// ```
    #[must_use = "dropping the taken vector releases its elements immediately"]
    #[inline]
    pub const fn take(&mut self) -> Self {
        mem::replace(self, Self::released())
    }

    /// Exchanges the whole state with `source` without copying or allocating.
    ///
    /// `source` ends up owning what `self` held before and releases it when dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use growable_vec::GrowableVec;
    ///
    /// let mut target = GrowableVec::try_from(&[1][..])?;
    /// let mut source = GrowableVec::try_from(&[2, 3][..])?;
    ///
    /// target.move_from(&mut source);
    /// assert_eq!(target.as_slice(), &[2, 3]);
    /// assert_eq!(source.as_slice(), &[1]);
    /// # Ok::<(), growable_vec::VecError>(())
    /// ```
    #[inline]
    pub fn move_from(&mut self, source: &mut Self) {
        mem::swap(&mut self.buf, &mut source.buf);
        mem::swap(&mut self.len, &mut source.len);
    }

    /// Returns a raw pointer to the vector's buffer.
    ///
    /// The pointer is valid for reads of `self.len()` elements. For a released
    /// vector it is dangling.
    #[expect(clippy::inline_always, reason = "this method is trivial")]
    #[must_use]
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a mutable raw pointer to the vector's buffer.
    ///
    /// Writing past `self.len()` is allowed up to `self.capacity()`, but those
    /// values only become part of the vector through [`Self::set_len`].
    #[expect(clippy::inline_always, reason = "this method is trivial")]
    #[must_use]
    #[inline(always)]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Forces the length of the vector.
    ///
    /// # Safety
    ///
    /// Calling this function when any of the following conditions are **`true`** is **undefined behavior**:
    /// - `new_len > self.capacity()`
    /// - the slots up to `new_len` are not all initialized.
    ///
    /// Elements beyond `new_len` are not dropped.
    #[inline]
    pub const unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.buf.capacity(), "buffer capacity exceeded");
        self.len = new_len;
    }

    /// Returns the live elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use growable_vec::GrowableVec;
    ///
    /// let mut vec = GrowableVec::new();
    /// vec.push_back(1)?;
    /// vec.push_back(2)?;
    /// assert_eq!(vec.as_slice(), &[1, 2]);
    /// # Ok::<(), growable_vec::VecError>(())
    /// ```
    #[must_use]
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: First self.len elements are initialized
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[must_use]
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: First self.len elements are initialized
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Returns the number of live elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    ///
    /// This is zero only for a released vector.
    #[expect(clippy::inline_always, reason = "this method is trivial")]
    #[inline(always)]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `true` if the vector has no live elements.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    // at
    define_variants! {
        fn at(self: &Self, index: usize) -> &T,

        checked_brief: "Returns a reference to the element at `index`",
        unchecked_brief_suffix: "without bounds checking",
        ub_conditions: {
            index >= self.len => OutOfRange: VecError::OutOfRange { index, len: self.len }; "index out of bounds",
        },
        unchecked_fn: get_unchecked,
        body: {
            // SAFETY: Caller guarantees index < self.len
            let ptr = unsafe { self.as_ptr().add(index) };
            // SAFETY: Element at index is initialized
            unsafe { &*ptr }
        },
        examples: {
            /// ```
            /// use growable_vec::{GrowableVec, VecError};
            ///
            /// let vec = GrowableVec::try_from(&[10, 20, 30][..])?;
            ///
            /// assert_eq!(vec.at(1), Ok(&20));
            /// assert_eq!(vec.at(3), Err(VecError::OutOfRange { index: 3, len: 3 }));
            /// # Ok::<(), VecError>(())
            /// ```
        }
    }

    // at_mut
    define_variants! {
        fn at_mut(self: &mut Self, index: usize) -> &mut T,

        checked_brief: "Returns a mutable reference to the element at `index`",
        unchecked_brief_suffix: "without bounds checking",
        ub_conditions: {
            index >= self.len => OutOfRange: VecError::OutOfRange { index, len: self.len }; "index out of bounds",
        },
        unchecked_fn: get_unchecked_mut,
        body: {
            // SAFETY: Caller guarantees index < self.len
            let ptr = unsafe { self.as_mut_ptr().add(index) };
            // SAFETY: Element at index is initialized
            unsafe { &mut *ptr }
        },
        examples: {
            /// ```
            /// use growable_vec::GrowableVec;
            ///
            /// let mut vec = GrowableVec::try_from(&[10, 20, 30][..])?;
            ///
            /// *vec.at_mut(1)? = 42;
            /// assert_eq!(vec.as_slice(), &[10, 42, 30]);
            /// assert!(vec.at_mut(5).is_err());
            /// # Ok::<(), growable_vec::VecError>(())
            /// ```
        }
    }

    // front
    define_variants! {
        fn front(self: &Self) -> &T,

        checked_brief: "Returns a reference to the first element",
        unchecked_brief_suffix: "without checking for emptiness",
        ub_conditions: {
            self.is_empty() => EmptyContainer: VecError::EmptyContainer; "container is empty",
        },
        unchecked_fn: front_unchecked,
        body: {
            // SAFETY: Caller guarantees the first element is initialized
            unsafe { &*self.as_ptr() }
        },
        examples: {
            /// ```
            /// use growable_vec::{GrowableVec, VecError};
            ///
            /// let mut vec = GrowableVec::new();
            /// assert_eq!(vec.front(), Err(VecError::EmptyContainer));
            ///
            /// vec.push_back(5)?;
            /// vec.push_back(6)?;
            /// assert_eq!(vec.front(), Ok(&5));
            /// # Ok::<(), VecError>(())
            /// ```
        }
    }

    // front_mut
    define_variants! {
        fn front_mut(self: &mut Self) -> &mut T,

        checked_brief: "Returns a mutable reference to the first element",
        unchecked_brief_suffix: "without checking for emptiness",
        ub_conditions: {
            self.is_empty() => EmptyContainer: VecError::EmptyContainer; "container is empty",
        },
        unchecked_fn: front_unchecked_mut,
        body: {
            // SAFETY: Caller guarantees the first element is initialized
            unsafe { &mut *self.as_mut_ptr() }
        },
    }

    // back
    define_variants! {
        fn back(self: &Self) -> &T,

        checked_brief: "Returns a reference to the last element",
        unchecked_brief_suffix: "without checking for emptiness",
        ub_conditions: {
            self.is_empty() => EmptyContainer: VecError::EmptyContainer; "container is empty",
        },
        unchecked_fn: back_unchecked,
        body: {
            // SAFETY: Caller guarantees self.len > 0
            let ptr = unsafe { self.as_ptr().add(self.len - 1) };
            // SAFETY: The last live element is initialized
            unsafe { &*ptr }
        },
        examples: {
            /// ```
            /// use growable_vec::{GrowableVec, VecError};
            ///
            /// let mut vec = GrowableVec::new();
            /// assert_eq!(vec.back(), Err(VecError::EmptyContainer));
            ///
            /// vec.push_back(5)?;
            /// vec.push_back(6)?;
            /// assert_eq!(vec.back(), Ok(&6));
            /// # Ok::<(), VecError>(())
            /// ```
        }
    }

    // back_mut
    define_variants! {
        fn back_mut(self: &mut Self) -> &mut T,

        checked_brief: "Returns a mutable reference to the last element",
        unchecked_brief_suffix: "without checking for emptiness",
        ub_conditions: {
            self.is_empty() => EmptyContainer: VecError::EmptyContainer; "container is empty",
        },
        unchecked_fn: back_unchecked_mut,
        body: {
            // SAFETY: Caller guarantees self.len > 0
            let ptr = unsafe { self.as_mut_ptr().add(self.len - 1) };
            // SAFETY: The last live element is initialized
            unsafe { &mut *ptr }
        },
    }

    // pop_back
    define_variants! {
        fn pop_back(self: &mut Self) -> T,

        checked_brief: "Removes the last element and returns it",
        unchecked_brief_suffix: "without checking for emptiness",
        ub_conditions: {
            self.is_empty() => EmptyContainer: VecError::EmptyContainer; "container is empty",
        },
        unchecked_fn: pop_back_unchecked,
        body: {
            self.len -= 1;
            // SAFETY: self.len was > 0, now points to last initialized element
            let ptr = unsafe { self.as_ptr().add(self.len) };
            // SAFETY: Reading from initialized element that is no longer counted as live
            unsafe { ptr.read() }
        },
        examples: {
            /// The removed value is handed to the caller, who drops it exactly once:
            ///
            /// ```
            /// use growable_vec::{GrowableVec, VecError};
            ///
            /// let mut vec = GrowableVec::try_from(&[1, 2, 3][..])?;
            ///
            /// assert_eq!(vec.pop_back(), Ok(3));
            /// assert_eq!(vec.as_slice(), &[1, 2]);
            /// assert_eq!(vec.capacity(), 3);
            ///
            /// vec.clear();
            /// assert_eq!(vec.pop_back(), Err(VecError::EmptyContainer));
            /// # Ok::<(), VecError>(())
            /// ```
        }
    }

    /// Appends a value without checking capacity.
    ///
    /// See also [`Self::push_back`] for the growing version.
    ///
    /// # Safety
    ///
    /// Calling this function when any of the following conditions are **`true`** is **undefined behavior**:
    /// - `self.len() >= self.capacity()`
    #[inline]
    pub unsafe fn push_back_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.capacity(), "buffer capacity exceeded");
        // SAFETY: Caller guarantees self.len < capacity
        let dst = unsafe { self.as_mut_ptr().add(self.len) };
        // SAFETY: Writing to valid uninitialized slot
        unsafe {
            dst.write(value);
        }
        self.len += 1;
    }

    /// Appends a value, doubling the capacity first if the vector is full.
    ///
    /// A released vector grows to one slot before doubling applies.
    ///
    /// # Errors
    ///
    /// - [`VecError::AllocationFailure`] if growing fails. The vector is left
    ///   unchanged and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use growable_vec::GrowableVec;
    ///
    /// let mut vec = GrowableVec::new();
    /// vec.push_back(1)?;
    /// vec.push_back(2)?;
    /// vec.push_back(3)?;
    ///
    /// assert_eq!(vec.len(), 3);
    /// assert_eq!(vec.capacity(), 4);
    /// assert_eq!(vec.at(0), Ok(&1));
    /// assert_eq!(vec.at(2), Ok(&3));
    /// # Ok::<(), growable_vec::VecError>(())
    /// ```
    #[inline]
    pub fn push_back(&mut self, value: T) -> VecResult<()> {
        let required = self
            .len
            .checked_add(1)
            .ok_or(VecError::AllocationFailure {
                capacity: usize::MAX,
            })?;
        self.grow_to_fit(required)?;
        // SAFETY: grow_to_fit ensured capacity >= self.len + 1
        unsafe { self.push_back_unchecked(value) };
        Ok(())
    }

    /// Appends a clone of `value`, growing like [`Self::push_back`].
    ///
    /// # Errors
    ///
    /// - [`VecError::AllocationFailure`] if growing fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use growable_vec::GrowableVec;
    ///
    /// let name = String::from("default");
    /// let mut vec = GrowableVec::new();
    /// vec.push_back_cloned(&name)?;
    ///
    /// assert_eq!(vec.as_slice(), &[name]);
    /// # Ok::<(), growable_vec::VecError>(())
    /// ```
    #[inline]
    pub fn push_back_cloned(&mut self, value: &T) -> VecResult<()>
    where
        T: Clone,
    {
        self.push_back(value.clone())
    }

    /// Grows the buffer to exactly `new_capacity` slots.
    ///
    /// Does nothing if `new_capacity <= self.capacity()`. Otherwise the new
    /// buffer is allocated first, the live elements are moved into it, and
    /// only then is the old buffer released. Moves in Rust are bitwise and
    /// cannot fail, so the transfer never falls back to cloning.
    ///
    /// # Errors
    ///
    /// - [`VecError::AllocationFailure`] if the new buffer cannot be allocated.
    ///   The vector is left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use growable_vec::{GrowableVec, VecError};
    ///
    /// let mut vec = GrowableVec::try_from(&[1_u64, 2][..])?;
    ///
    /// vec.reserve(10)?;
    /// assert_eq!(vec.capacity(), 10);
    ///
    /// vec.reserve(3)?;
    /// assert_eq!(vec.capacity(), 10);
    ///
    /// assert!(vec.reserve(usize::MAX).is_err());
    /// assert_eq!(vec.capacity(), 10);
    /// assert_eq!(vec.as_slice(), &[1, 2]);
    /// # Ok::<(), VecError>(())
    /// ```
    #[inline]
    pub fn reserve(&mut self, new_capacity: usize) -> VecResult<()> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        let mut fresh = RawBuf::allocate(new_capacity)?;
        log::trace!(
            "reallocating {} -> {new_capacity} slots with {} live elements",
            self.capacity(),
            self.len
        );
        // SAFETY: both buffers hold at least self.len slots and are distinct allocations
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr(), fresh.as_mut_ptr(), self.len);
        }
        mem::swap(&mut self.buf, &mut fresh);
        // `fresh` now holds the old storage, whose elements were moved out above
        drop(fresh);
        Ok(())
    }

    /// Doubles the capacity, starting from at least one slot, until `required` slots fit.
    ///
    /// Reallocates at most once, straight to the final doubled capacity.
    fn grow_to_fit(&mut self, required: usize) -> VecResult<()> {
        let cap = self.capacity();
        if required <= cap {
            return Ok(());
        }
        let mut target = cap.max(1);
        while target < required {
            target = target.saturating_mul(GROWTH_FACTOR);
        }
        self.reserve(target)
    }

    /// Sets the length to `new_len`.
    ///
    /// Shrinking drops the removed elements and keeps the capacity. Growing
    /// fills every new slot with `T::default()`, doubling the capacity first
    /// if `new_len` does not fit.
    ///
    /// # Errors
    ///
    /// - [`VecError::AllocationFailure`] if growing fails. The vector is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use growable_vec::GrowableVec;
    ///
    /// let mut vec = GrowableVec::try_from(&[5, 6, 7][..])?;
    ///
    /// vec.resize(1)?;
    /// assert_eq!(vec.as_slice(), &[5]);
    /// assert_eq!(vec.capacity(), 3);
    ///
    /// // slots exposed again are fresh defaults, not the old values
    /// vec.resize(3)?;
    /// assert_eq!(vec.as_slice(), &[5, 0, 0]);
    ///
    /// vec.resize(7)?;
    /// assert_eq!(vec.len(), 7);
    /// assert_eq!(vec.capacity(), 12);
    /// # Ok::<(), growable_vec::VecError>(())
    /// ```
    #[inline]
    pub fn resize(&mut self, new_len: usize) -> VecResult<()>
    where
        T: Default,
    {
        if new_len <= self.len {
            self.drop_tail(new_len);
            return Ok(());
        }

        self.grow_to_fit(new_len)?;
        while self.len < new_len {
            // SAFETY: grow_to_fit ensured capacity >= new_len > self.len
            unsafe { self.push_back_unchecked(T::default()) };
        }
        Ok(())
    }

    /// Drops the elements past `new_len` and shortens the length to it.
    ///
    /// Does nothing if `new_len >= self.len()`.
    #[inline]
    fn drop_tail(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail_len = self.len - new_len;
        // shrink first so a panicking destructor cannot lead to a double drop
        self.len = new_len;
        // SAFETY: new_len < old len <= capacity
        let tail = unsafe { self.as_mut_ptr().add(new_len) };
        // SAFETY: the tail holds tail_len initialized elements no longer reachable through self
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(tail, tail_len));
        }
    }

    /// Removes every element, keeping the allocated capacity.
    ///
    /// Elements are dropped in place; nothing is deallocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use growable_vec::GrowableVec;
    ///
    /// let mut vec = GrowableVec::try_from(&[1, 2, 3][..])?;
    /// let cap = vec.capacity();
    ///
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), cap);
    /// # Ok::<(), growable_vec::VecError>(())
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.drop_tail(0);
    }
}

impl<T> Default for GrowableVec<T> {
    /// Returns a new empty `GrowableVec<T>` with one allocated slot.
    ///
    /// This is equivalent to [`Self::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for GrowableVec<T> {
    /// Drops every live element; the buffer itself is released by its own handle.
    #[inline]
    fn drop(&mut self) {
        self.drop_tail(0);
    }
}

impl<T: Clone> Clone for GrowableVec<T> {
    /// Creates a deep copy with the same length and capacity.
    ///
    /// # Panics
    ///
    /// - if the storage cannot be allocated; see [`Self::try_clone`].
    #[inline]
    #[track_caller]
    fn clone(&self) -> Self {
        or_panic(self.try_clone())
    }

    /// Copy-and-swap assignment; see [`Self::try_clone_from`].
    ///
    /// # Panics
    ///
    /// - if the storage cannot be allocated, leaving `self` untouched.
    #[inline]
    #[track_caller]
    fn clone_from(&mut self, source: &Self) {
        or_panic(self.try_clone_from(source));
    }
}

impl<T: Clone> TryFrom<&[T]> for GrowableVec<T> {
    type Error = VecError;

    /// Creates a vector holding clones of `slice`, with capacity `max(slice.len(), 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growable_vec::GrowableVec;
    ///
    /// let vec = GrowableVec::try_from(&[1, 2, 3][..]).unwrap();
    /// assert_eq!(vec.len(), 3);
    /// assert_eq!(vec.capacity(), 3);
    /// ```
    #[inline]
    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        Self::try_from_slice_with_capacity(slice, slice.len().max(1))
    }
}

impl<T> Deref for GrowableVec<T> {
    type Target = [T];

    /// Returns the contents as a slice.
    ///
    /// This is equivalent to [`Self::as_slice`].
    #[inline]
    fn deref(&self) -> &Self::Target {
        Self::as_slice(self)
    }
}

impl<T> DerefMut for GrowableVec<T> {
    /// Returns the contents as a mutable slice.
    ///
    /// This is equivalent to [`Self::as_mut_slice`].
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        Self::as_mut_slice(self)
    }
}

impl<T> AsRef<[T]> for GrowableVec<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for GrowableVec<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut *self
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableVec<T> {
    /// Formats the live elements like a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use growable_vec::GrowableVec;
    ///
    /// let vec = GrowableVec::try_from(&[1, 2, 3][..]).unwrap();
    /// assert_eq!(format!("{:?}", vec), "[1, 2, 3]");
    /// ```
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl<T: PartialEq> PartialEq for GrowableVec<T> {
    /// Compares the live elements; capacity is ignored.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for GrowableVec<T> {}

impl<T: PartialOrd> PartialOrd for GrowableVec<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).partial_cmp(&**other)
    }
}

impl<T: Ord> Ord for GrowableVec<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        (**self).cmp(&**other)
    }
}

impl<T: Hash> Hash for GrowableVec<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T> Index<usize> for GrowableVec<T> {
    type Output = T;

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// - if `index >= self.len()`; see [`Self::at`] for the checked version.
    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        or_panic(self.at(index))
    }
}

impl<T> IndexMut<usize> for GrowableVec<T> {
    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// - if `index >= self.len()`; see [`Self::at_mut`] for the checked version.
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        or_panic(self.at_mut(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::String, sync::Arc};
    use core::sync::atomic::{AtomicUsize, Ordering};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[derive(Clone)]
    struct DropCounter(i32, Arc<AtomicUsize>);
    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.1.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Clones fine until the shared budget runs out, then panics.
    struct FlakyClone(i32, Arc<AtomicUsize>);
    impl Clone for FlakyClone {
        fn clone(&self) -> Self {
            let remaining = self.1.load(Ordering::SeqCst);
            assert!(remaining > 0, "clone budget exhausted");
            self.1.store(remaining - 1, Ordering::SeqCst);
            Self(self.0, Arc::clone(&self.1))
        }
    }

    fn filled(values: &[i32]) -> GrowableVec<i32> {
        GrowableVec::try_from(values).unwrap()
    }

    #[test]
    fn default_construction_allocates_one_slot() {
        let vec = GrowableVec::<String>::default();
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 1);
        assert!(vec.is_empty());
    }

    #[test]
    fn sized_construction_defaults_every_element() {
        let vec = GrowableVec::<String>::with_len(3);
        assert_eq!(vec.len(), 3);
        assert_eq!(vec.capacity(), 3);
        assert!(vec.iter().all(String::is_empty));

        let empty = GrowableVec::<String>::with_len(0);
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.capacity(), 1);
    }

    #[test]
    fn push_clear_push_scenario() {
        let mut vec = GrowableVec::new();
        vec.push_back(1_i32).unwrap();
        vec.push_back(2_i32).unwrap();
        vec.push_back(3_i32).unwrap();

        assert_eq!(vec.len(), 3);
        assert!(vec.capacity() >= 3);
        assert_eq!(vec.at(0), Ok(&1_i32));
        assert_eq!(vec.at(2), Ok(&3_i32));

        let cap = vec.capacity();
        vec.clear();
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), cap);

        vec.push_back(9_i32).unwrap();
        assert_eq!(vec.len(), 1);
        assert_eq!(vec.at(0), Ok(&9_i32));
    }

    #[test]
    fn push_doubles_capacity() {
        let mut vec = GrowableVec::new();
        let mut seen = alloc::vec::Vec::new();
        for i in 0..9_i32 {
            vec.push_back(i).unwrap();
            seen.push(vec.capacity());
        }
        assert_eq!(seen, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn checked_and_unchecked_access_agree() {
        let mut vec = filled(&[4, 5, 6]);
        for i in 0..vec.len() {
            // SAFETY: i < len
            let unchecked = unsafe { *vec.get_unchecked(i) };
            assert_eq!(vec.at(i), Ok(&unchecked));
        }
        assert_eq!(
            vec.at(3),
            Err(VecError::OutOfRange { index: 3, len: 3 })
        );

        // SAFETY: 1 < len
        unsafe {
            *vec.get_unchecked_mut(1) = 50_i32;
        }
        assert_eq!(vec[1], 50_i32);
    }

    #[test]
    #[should_panic = "index 2 out of range for length 2"]
    fn indexing_past_len_panics() {
        let vec = filled(&[1, 2]);
        let _value: i32 = vec[2];
    }

    #[test]
    fn front_and_back() {
        let mut vec = GrowableVec::<i32>::new();
        assert_eq!(vec.front(), Err(VecError::EmptyContainer));
        assert_eq!(vec.back_mut(), Err(VecError::EmptyContainer));

        vec.push_back(1_i32).unwrap();
        assert_eq!(vec.front(), vec.back());

        vec.push_back(2_i32).unwrap();
        *vec.front_mut().unwrap() = 10_i32;
        *vec.back_mut().unwrap() += 10_i32;
        assert_eq!(vec.as_slice(), &[10_i32, 12_i32]);

        // SAFETY: vec is non-empty
        let first = unsafe { *vec.front_unchecked() };
        // SAFETY: vec is non-empty
        let last = unsafe { *vec.back_unchecked() };
        assert_eq!((first, last), (10_i32, 12_i32));
    }

    #[test]
    fn pop_back_drops_each_element_once() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut vec = GrowableVec::new();
        for i in 0..3_i32 {
            vec.push_back(DropCounter(i, Arc::clone(&counter))).unwrap();
        }

        let popped = vec.pop_back().unwrap();
        assert_eq!(popped.0, 2_i32);
        assert_eq!(vec.len(), 2);
        assert_eq!(vec.back().unwrap().0, 1_i32);
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        drop(popped);
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        drop(vec);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn pop_back_on_empty_fails() {
        let mut vec = filled(&[1]);
        assert_eq!(vec.pop_back(), Ok(1_i32));
        assert_eq!(vec.pop_back(), Err(VecError::EmptyContainer));
        assert_eq!(vec.len(), 0);
    }

    #[test]
    fn reallocation_moves_without_dropping() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut vec = GrowableVec::new();
        for i in 0..5_i32 {
            vec.push_back(DropCounter(i, Arc::clone(&counter))).unwrap();
        }
        vec.reserve(64).unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert_eq!(vec.capacity(), 64);
        let order: alloc::vec::Vec<i32> = vec.iter().map(|dc| dc.0).collect();
        assert_eq!(order, [0, 1, 2, 3, 4]);

        drop(vec);
        assert_eq!(counter.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn reserve_below_capacity_is_a_no_op() {
        let mut vec = filled(&[1, 2, 3]);
        vec.reserve(8).unwrap();
        let ptr = vec.as_ptr();

        vec.reserve(8).unwrap();
        vec.reserve(2).unwrap();
        assert_eq!(vec.as_ptr(), ptr);
        assert_eq!(vec.capacity(), 8);
        assert_eq!(vec.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn failed_reserve_leaves_vector_untouched() {
        let mut vec = GrowableVec::try_from(&[1_u64, 2, 3][..]).unwrap();
        let ptr = vec.as_ptr();

        assert_eq!(
            vec.reserve(usize::MAX),
            Err(VecError::AllocationFailure {
                capacity: usize::MAX
            })
        );
        assert_eq!(vec.as_ptr(), ptr);
        assert_eq!(vec.capacity(), 3);
        assert_eq!(vec.as_slice(), &[1, 2, 3]);

        assert!(vec.resize(usize::MAX / 2).is_err());
        assert_eq!(vec.len(), 3);
        assert_eq!(vec.capacity(), 3);
    }

    #[test]
    fn resize_within_and_beyond_capacity() {
        let mut vec = GrowableVec::<i32>::with_len(3);
        vec.reserve(8).unwrap();

        vec.resize(6).unwrap();
        assert_eq!(vec.capacity(), 8);
        assert_eq!(vec.len(), 6);

        vec.resize(9).unwrap();
        assert_eq!(vec.capacity(), 16);

        vec.resize(100).unwrap();
        assert_eq!(vec.capacity(), 128);
        assert!(vec.iter().all(|x| *x == 0_i32));
    }

    #[test]
    fn truncation_drops_only_the_tail() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut vec = GrowableVec::new();
        for i in 0..4_i32 {
            vec.push_back(DropCounter(i, Arc::clone(&counter))).unwrap();
        }

        vec.drop_tail(1);
        assert_eq!(vec.len(), 1);
        assert_eq!(counter.load(Ordering::SeqCst), 3);

        vec.clear();
        assert_eq!(counter.load(Ordering::SeqCst), 4);
        assert_eq!(vec.capacity(), 4);
    }

    #[test]
    fn copies_are_isolated() {
        let vec = filled(&[1, 2, 3]);
        let mut copy = vec.clone();
        copy.push_back(4_i32).unwrap();
        copy[0] = 100_i32;

        assert_eq!(vec.as_slice(), &[1, 2, 3]);
        assert_eq!(vec.len(), 3);
        assert_eq!(copy.as_slice(), &[100, 2, 3, 4]);
        assert_eq!(copy.len(), 4);
    }

    #[test]
    fn copy_mirrors_length_and_capacity() {
        let mut vec = filled(&[1, 2, 3]);
        vec.reserve(10).unwrap();
        let copy = vec.try_clone().unwrap();
        assert_eq!(copy.len(), 3);
        assert_eq!(copy.capacity(), 10);
        assert_ne!(copy.as_ptr(), vec.as_ptr());
    }

    #[test]
    fn failed_copy_drops_partial_clones() {
        let budget = Arc::new(AtomicUsize::new(2));
        let mut vec = GrowableVec::new();
        for i in 0..4_i32 {
            vec.push_back(FlakyClone(i, Arc::clone(&budget))).unwrap();
        }

        let result = catch_unwind(AssertUnwindSafe(|| vec.clone()));
        assert!(result.is_err());
        // the two clones made before the panic were dropped, releasing their Arc handles
        assert_eq!(Arc::strong_count(&budget), 5);
        assert_eq!(vec.len(), 4);
    }

    #[test]
    fn failed_copy_assignment_leaves_target_untouched() {
        let budget = Arc::new(AtomicUsize::new(1));
        let mut source = GrowableVec::new();
        for i in 0..3_i32 {
            source.push_back(FlakyClone(i, Arc::clone(&budget))).unwrap();
        }
        let mut target = GrowableVec::new();
        target
            .push_back(FlakyClone(42, Arc::new(AtomicUsize::new(0))))
            .unwrap();

        let result = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
        assert!(result.is_err());
        assert_eq!(target.len(), 1);
        assert_eq!(target.at(0).unwrap().0, 42_i32);
    }

    #[test]
    fn copy_assignment_replaces_contents() {
        let source = filled(&[7, 8]);
        let mut target = filled(&[1, 2, 3, 4]);
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.capacity(), 2);
    }

    #[test]
    fn empty_slice_conversion_keeps_one_slot() {
        let vec = GrowableVec::<i32>::try_from(&[][..]).unwrap();
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 1);
    }

    #[test]
    fn push_back_cloned_keeps_source_and_drops_clone_once() {
        let budget = Arc::new(AtomicUsize::new(1));
        let source = FlakyClone(5, Arc::clone(&budget));
        let mut vec = GrowableVec::new();

        vec.push_back_cloned(&source).unwrap();
        assert_eq!(budget.load(Ordering::SeqCst), 0);
        assert_eq!(vec.len(), 1);
        assert_eq!(vec.at(0).unwrap().0, 5_i32);
        assert_eq!(source.0, 5_i32);
        assert_eq!(Arc::strong_count(&budget), 3);

        // an exhausted budget panics inside clone, before anything is stored
        let result = catch_unwind(AssertUnwindSafe(|| vec.push_back_cloned(&source)));
        assert!(result.is_err());
        assert_eq!(vec.len(), 1);
        assert_eq!(Arc::strong_count(&budget), 3);

        drop(vec);
        assert_eq!(Arc::strong_count(&budget), 2);
        assert_eq!(source.0, 5_i32);
    }

    #[test]
    fn push_back_cloned_drops_each_clone_once() {
        let drops = Arc::new(AtomicUsize::new(0));
        let source = DropCounter(3, Arc::clone(&drops));
        let mut vec = GrowableVec::new();
        for _ in 0..3 {
            vec.push_back_cloned(&source).unwrap();
        }
        assert_eq!(drops.load(Ordering::SeqCst), 0);
        assert!(vec.iter().all(|item| item.0 == 3_i32));

        drop(vec);
        assert_eq!(drops.load(Ordering::SeqCst), 3);
        assert_eq!(source.0, 3_i32);
        drop(source);
        assert_eq!(drops.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn take_leaves_released_but_usable_source() {
        let mut source = filled(&[1, 2, 3]);
        let ptr = source.as_ptr();
        let moved = source.take();

        assert_eq!(moved.as_ptr(), ptr);
        assert_eq!(moved.as_slice(), &[1, 2, 3]);
        assert_eq!(moved.capacity(), 3);
        assert_eq!(source.len(), 0);
        assert_eq!(source.capacity(), 0);
        assert!(source.front().is_err());

        source.push_back(9_i32).unwrap();
        assert_eq!(source.capacity(), 1);
        assert_eq!(source.as_slice(), &[9]);
    }

    #[test]
    fn released_vector_resizes_and_copies() {
        let mut source = filled(&[1]);
        let _moved = source.take();

        let copy = source.clone();
        assert_eq!(copy.len(), 0);
        assert_eq!(copy.capacity(), 1);

        source.resize(3).unwrap();
        assert_eq!(source.capacity(), 4);
        assert_eq!(source.as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn move_from_exchanges_state() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut target = GrowableVec::new();
        target.push_back(DropCounter(1, Arc::clone(&counter))).unwrap();
        let mut source = GrowableVec::new();
        source.push_back(DropCounter(2, Arc::clone(&counter))).unwrap();
        source.push_back(DropCounter(3, Arc::clone(&counter))).unwrap();

        target.move_from(&mut source);
        assert_eq!(target.len(), 2);
        assert_eq!(source.len(), 1);
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        drop(source);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        drop(target);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn zero_sized_elements_track_capacity() {
        let mut vec = GrowableVec::new();
        for _ in 0..1000 {
            vec.push_back(()).unwrap();
        }
        assert_eq!(vec.len(), 1000);
        assert_eq!(vec.capacity(), 1024);
        assert_eq!(vec.pop_back(), Ok(()));
        assert_eq!(vec.len(), 999);
    }

    #[test]
    fn set_len_exposes_written_slots() {
        let mut vec = GrowableVec::<i32>::new();
        vec.reserve(3).unwrap();
        let ptr = vec.as_mut_ptr();
        for i in 0..3_i32 {
            // SAFETY: i < capacity
            let slot = unsafe { ptr.add(i as usize) };
            // SAFETY: slot is inside the allocation and uninitialized
            unsafe { slot.write(i) };
        }
        // SAFETY: three slots initialized above, capacity is 3
        unsafe { vec.set_len(3) };
        assert_eq!(vec.as_slice(), &[0, 1, 2]);
    }
}
