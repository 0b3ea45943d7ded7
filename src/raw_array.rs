//! Raw buffer management for `DynamicArray`.
//!
//! This module handles the single contiguous allocation behind a dynamic array,
//! similar to how `RawVec` works for `Vec` in the standard library.

use std::alloc::Layout;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use allocator_api2::alloc::{Allocator, Global};
use tracing::debug;

use crate::error::{ArrayError, Result};

/// Raw contiguous buffer that handles allocation without element management.
///
/// It owns the allocation and knows its capacity but does not track the
/// element count or handle element initialization/destruction.
pub(crate) struct RawArray<T> {
    /// Start of the allocation, dangling while nothing is allocated
    ptr: NonNull<T>,
    /// Number of `T` slots in the allocation
    cap: usize,
    /// Marker for type ownership
    _marker: PhantomData<T>,
}

impl<T> RawArray<T> {
    /// Whether T is a zero-sized type
    const IS_ZST: bool = std::mem::size_of::<T>() == 0;

    /// Largest number of elements a single allocation of `T` can describe.
    pub(crate) const MAX_CAPACITY: usize = if Self::IS_ZST {
        usize::MAX
    } else {
        isize::MAX as usize / std::mem::size_of::<T>()
    };

    /// Creates an empty buffer without allocating.
    ///
    /// Zero-sized types never allocate and report unlimited capacity.
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: if Self::IS_ZST { usize::MAX } else { 0 },
            _marker: PhantomData,
        }
    }

    /// Allocates a buffer with room for exactly `capacity` elements.
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut raw = Self::new();
        if Self::IS_ZST || capacity == 0 {
            return Ok(raw);
        }
        raw.ptr = Self::allocate(capacity)?;
        raw.cap = capacity;
        Ok(raw)
    }

    /// Returns the number of elements the buffer can hold.
    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns a raw pointer to the first slot.
    #[inline]
    pub(crate) const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    fn layout(capacity: usize) -> Result<Layout> {
        Layout::array::<T>(capacity).map_err(|_| ArrayError::CapacityOverflow {
            requested: capacity,
            max: Self::MAX_CAPACITY,
        })
    }

    fn allocate(capacity: usize) -> Result<NonNull<T>> {
        let layout = Self::layout(capacity)?;
        match Global.allocate(layout) {
            Ok(block) => Ok(block.cast::<T>()),
            Err(_) => {
                debug!(capacity, bytes = layout.size(), "allocation refused");
                Err(ArrayError::AllocFailed {
                    size: layout.size(),
                })
            }
        }
    }

    /// Moves the first `len` elements into a fresh allocation of
    /// `new_capacity` slots and frees the old one.
    ///
    /// On error the buffer is left untouched.
    ///
    /// # Safety
    ///
    /// `len` must not exceed either capacity, and the first `len` slots must
    /// be initialized.
    pub(crate) unsafe fn reallocate(&mut self, len: usize, new_capacity: usize) -> Result<()> {
        debug_assert!(len <= self.cap && len <= new_capacity);
        if Self::IS_ZST {
            return Ok(());
        }

        let new_ptr = if new_capacity == 0 {
            NonNull::dangling()
        } else {
            Self::allocate(new_capacity)?
        };
        if len > 0 {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), len);
        }

        self.free();
        self.ptr = new_ptr;
        self.cap = new_capacity;
        Ok(())
    }

    /// Frees the allocation without dropping elements.
    fn free(&mut self) {
        if Self::IS_ZST || self.cap == 0 {
            return;
        }
        // The layout was valid when this block was allocated.
        if let Ok(layout) = Layout::array::<T>(self.cap) {
            unsafe {
                Global.deallocate(self.ptr.cast::<u8>(), layout);
            }
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }
}

impl<T> Drop for RawArray<T> {
    fn drop(&mut self) {
        // Only frees memory. DynamicArray drops its elements first.
        self.free();
    }
}

// Safety: RawArray owns its allocation and T determines thread safety
unsafe impl<T: Send> Send for RawArray<T> {}
unsafe impl<T: Sync> Sync for RawArray<T> {}
