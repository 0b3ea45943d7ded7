//! Iterator implementations for `DynamicArray`.

use std::fmt;
use std::iter::FusedIterator;
use std::mem::ManuallyDrop;
use std::ptr;

use crate::error::{ArrayError, Result};
use crate::DynamicArray;

/// A forward, single-pass, read-only cursor over a `DynamicArray`.
///
/// Created by [`DynamicArray::iter`]. Besides the [`Iterator`] protocol it
/// offers [`has_next`](Iter::has_next) and [`try_next`](Iter::try_next), which
/// reports running past the end as [`ArrayError::Exhausted`].
///
/// The cursor borrows the array, so the array cannot be mutated while it is
/// alive.
///
/// # Example
///
/// ```
/// use dynamic_array::{ArrayError, DynamicArray};
///
/// let array = DynamicArray::from(vec![1, 2]);
/// let mut cursor = array.iter();
/// assert_eq!(cursor.try_next(), Ok(&1));
/// assert_eq!(cursor.try_next(), Ok(&2));
/// assert!(!cursor.has_next());
/// assert_eq!(cursor.try_next(), Err(ArrayError::Exhausted));
/// ```
pub struct Iter<'a, T> {
    pub(crate) elements: &'a [T],
    /// Next position to yield
    pub(crate) index: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(array: &'a DynamicArray<T>) -> Self {
        Self {
            elements: array.as_slice(),
            index: 0,
        }
    }

    /// Returns `true` if another element remains.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.index < self.elements.len()
    }

    /// Returns the next element, or [`ArrayError::Exhausted`] past the end.
    #[inline]
    pub fn try_next(&mut self) -> Result<&'a T> {
        self.next().ok_or(ArrayError::Exhausted)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.elements.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            index: self.index,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&&self.elements[self.index..])
            .finish()
    }
}

/// An owning iterator over elements of a `DynamicArray`.
///
/// This struct is created by the `into_iter` method on `DynamicArray`
/// (provided by the [`IntoIterator`] trait).
pub struct IntoIter<T> {
    /// Length is zeroed on construction; the elements in `index..end` are
    /// owned by this iterator.
    array: ManuallyDrop<DynamicArray<T>>,
    index: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(array: DynamicArray<T>) -> Self {
        let mut array = ManuallyDrop::new(array);
        let end = array.len();
        // The iterator now owns the elements; the array only holds the buffer.
        unsafe { array.set_len(0) };
        Self {
            array,
            index: 0,
            end,
        }
    }

    /// Returns the remaining items as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            std::slice::from_raw_parts(self.array.as_ptr().add(self.index), self.end - self.index)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.end {
            return None;
        }
        // Safety: index < end, so the slot is initialized and not yet moved out
        let value = unsafe { ptr::read(self.array.as_ptr().add(self.index)) };
        self.index += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.index >= self.end {
            return None;
        }
        self.end -= 1;
        // Safety: the slot at the old end - 1 is initialized and not yet moved out
        Some(unsafe { ptr::read(self.array.as_ptr().add(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Take the array out so its buffer is freed even if an element's drop panics.
        let array = unsafe { ManuallyDrop::take(&mut self.array) };
        let remaining = self.end - self.index;
        if std::mem::needs_drop::<T>() && remaining > 0 {
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                    array.as_ptr().add(self.index),
                    remaining,
                ));
            }
        }
        // Length is zero, so this frees the buffer only.
        drop(array);
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
