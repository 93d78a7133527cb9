//! Backing-region management.
//!
//! `RawBuf` owns the allocation and nothing else: no length, no element
//! semantics. Reallocation is fallible and leaves the region untouched when
//! the allocator refuses.

use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use alloc::alloc as heap;

use crate::arith::{can_mul, is_valid_slot_count};
use crate::error::GrowVecError;

/// The backing region of a `GrowVec`: a pointer and the slot capacity.
///
/// The region is absent exactly when `cap == 0`; the pointer is dangling
/// then. Zero-sized element types never allocate, their capacity is pure
/// bookkeeping over the dangling pointer.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuf<T> {
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Reallocates the region to hold exactly `new_cap` slots, preserving
    /// the leading `min(old, new)` slots.
    ///
    /// `new_cap` must be a valid slot count for `size_of::<T>()`.
    ///
    /// # Errors
    ///
    /// `OutOfMemory` when the allocator refuses. The region, pointer and
    /// capacity are left exactly as they were.
    pub(crate) fn set_capacity(&mut self, new_cap: usize) -> Result<(), GrowVecError> {
        let elem_size = mem::size_of::<T>();
        debug_assert!(is_valid_slot_count(new_cap, elem_size));
        debug_assert!(can_mul(new_cap, elem_size));

        if elem_size == 0 || new_cap == self.cap {
            self.cap = new_cap;
            return Ok(());
        }

        if new_cap == 0 {
            // SAFETY: cap != new_cap, so cap > 0 and T is sized; the region
            // was allocated with this exact layout.
            unsafe { heap::dealloc(self.ptr.as_ptr().cast(), Self::layout(self.cap)) };
            self.ptr = NonNull::dangling();
            self.cap = 0;
            return Ok(());
        }

        let new_layout = Self::layout(new_cap);
        let raw = if self.cap == 0 {
            // SAFETY: new_layout has a nonzero size (new_cap > 0, T sized).
            unsafe { heap::alloc(new_layout) }
        } else {
            // SAFETY: the region was allocated with the old layout; the new
            // byte size is a validated slot count.
            unsafe {
                heap::realloc(
                    self.ptr.as_ptr().cast(),
                    Self::layout(self.cap),
                    new_layout.size(),
                )
            }
        };

        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => {
                self.ptr = ptr;
                self.cap = new_cap;
                Ok(())
            }
            None => Err(GrowVecError::OutOfMemory { requested: new_cap }),
        }
    }

    #[allow(clippy::expect_used)]
    fn layout(cap: usize) -> Layout {
        // valid slot counts keep the byte size within the allocation limit
        Layout::array::<T>(cap).expect("slot count validated before layout")
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap != 0 && mem::size_of::<T>() != 0 {
            // SAFETY: a nonzero capacity means the region is live and was
            // allocated with this layout.
            unsafe { heap::dealloc(self.ptr.as_ptr().cast(), Self::layout(self.cap)) };
        }
    }
}

// The buffer adds no sharing of its own; element access is gated by the
// owning container.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}
