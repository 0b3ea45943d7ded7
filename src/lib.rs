//! A growable, contiguous array list with a null-tolerant quick sort.
//!
//! [`DynamicArray`] owns one contiguous buffer. Appends are amortized O(1),
//! indexed reads and writes are O(1), and insertion or removal at an arbitrary
//! position shifts the tail of the array. Every fallible operation returns a
//! [`Result`] and leaves the array untouched on error.
//!
//! The [`sort`] module sorts any [`RandomAccess`] container of [`Nullable`]
//! elements in place, placing absent values before every present one.
//!
//! # Example
//!
//! ```
//! use dynamic_array::DynamicArray;
//!
//! let mut array = DynamicArray::new();
//! array.push(Some(1))?;
//! array.push(None)?;
//! array.push(None)?;
//! array.push(Some(3))?;
//!
//! array.sort_nulls_first();
//! assert_eq!(array.to_string(), "[null, null, 1, 3]");
//! # Ok::<(), dynamic_array::ArrayError>(())
//! ```
//!
//! # Known quirks
//!
//! - [`DynamicArray::insert`] only accepts indices of existing elements, so
//!   inserting at `len` (and any insertion into an empty array) is rejected.
//!   Use [`DynamicArray::push`] to append.
//! - [`DynamicArray::sub_array`] takes an inclusive upper bound.

mod config;
mod error;
mod iter;
mod raw_array;
mod render;
pub mod sort;

pub use config::{ArrayConfig, GrowthPolicy, DEFAULT_CAPACITY_MULTIPLIER, DEFAULT_INITIAL_CAPACITY};
pub use error::{ArrayError, Result};
pub use iter::{IntoIter, Iter};
pub use render::Render;
pub use sort::{Nullable, RandomAccess};

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};
use std::ptr;

use raw_array::RawArray;
use tracing::{debug, trace};

/// A growable array list backed by a single contiguous buffer.
///
/// Elements live in `0..len` of the buffer; capacity grows according to the
/// array's [`ArrayConfig`] whenever an insertion needs more room. The array
/// permits any element type, including `Option<T>` for arrays that hold
/// absent values.
///
/// Not synchronized: shared mutation requires external locking.
pub struct DynamicArray<T> {
    /// Owned backing storage
    buf: RawArray<T>,
    /// Number of initialized elements
    len: usize,
    /// Construction and growth parameters
    config: ArrayConfig,
}

// Core implementation
impl<T> DynamicArray<T> {
    /// Creates an empty array with the default initial capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    /// let array: DynamicArray<i32> = DynamicArray::new();
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 10);
    /// ```
    pub fn new() -> Self {
        Self::with_config(ArrayConfig::default())
    }

    /// Creates an empty array holding `capacity` slots.
    ///
    /// A capacity of zero selects the default initial capacity.
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot be allocated; see
    /// [`try_with_capacity`](Self::try_with_capacity).
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(ArrayConfig::default().with_initial_capacity(capacity))
    }

    /// Creates an empty array holding `capacity` slots, reporting a failed
    /// allocation.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Self::try_with_config(ArrayConfig::default().with_initial_capacity(capacity))
    }

    /// Creates an empty array with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the initial buffer cannot be allocated; see
    /// [`try_with_config`](Self::try_with_config).
    #[track_caller]
    pub fn with_config(config: ArrayConfig) -> Self {
        match Self::try_with_config(config) {
            Ok(array) => array,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates an empty array with the given configuration, reporting a
    /// failed initial allocation.
    pub fn try_with_config(config: ArrayConfig) -> Result<Self> {
        let buf = RawArray::try_with_capacity(config.effective_initial_capacity())?;
        Ok(Self {
            buf,
            len: 0,
            config,
        })
    }

    /// Returns the configuration this array grows by.
    #[inline]
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Returns the number of elements in the array.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array contains no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the array holds without growing.
    ///
    /// Never exceeds the configured maximum, including for zero-sized types.
    #[inline]
    pub const fn capacity(&self) -> usize {
        let cap = self.buf.capacity();
        if cap > self.config.max_capacity {
            self.config.max_capacity
        } else {
            cap
        }
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *mut T {
        self.buf.ptr()
    }

    /// Sets the length without any checks.
    ///
    /// # Safety
    ///
    /// `new_len` must not exceed capacity, and `0..new_len` must be initialized.
    #[inline]
    pub(crate) unsafe fn set_len(&mut self, new_len: usize) {
        self.len = new_len;
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(ArrayError::out_of_bounds(index, self.len))
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Example
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    /// let array = DynamicArray::from([5, 2]);
    /// assert_eq!(array.get(1), Ok(&2));
    /// assert!(array.get(2).is_err());
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(unsafe { &*self.buf.ptr().add(index) })
    }

    /// Returns a mutable reference to the element at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(unsafe { &mut *self.buf.ptr().add(index) })
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Reserves room for at least `additional` more elements.
    ///
    /// Growth follows the configured [`GrowthPolicy`]. On error the array is
    /// unchanged.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or_else(|| ArrayError::CapacityOverflow {
                requested: usize::MAX,
                max: self.max_capacity(),
            })?;
        self.grow_to_fit(required)
    }

    fn max_capacity(&self) -> usize {
        self.config.max_capacity.min(RawArray::<T>::MAX_CAPACITY)
    }

    /// Grows the buffer so that `required` elements fit.
    fn grow_to_fit(&mut self, required: usize) -> Result<()> {
        let old_capacity = self.capacity();
        if required <= old_capacity {
            return Ok(());
        }

        let new_capacity = self
            .config
            .next_capacity(self.len, required, RawArray::<T>::MAX_CAPACITY)
            .inspect_err(|err| debug!(%err, len = self.len, "growth rejected"))?;

        // Safety: the first `len` slots are initialized and fit both buffers.
        unsafe { self.buf.reallocate(self.len, new_capacity)? };
        trace!(
            old_capacity,
            new_capacity,
            len = self.len,
            "grew backing storage"
        );
        Ok(())
    }

    /// Appends an element to the back of the array.
    ///
    /// Fails with [`ArrayError::CapacityOverflow`] or
    /// [`ArrayError::AllocFailed`] when storage cannot grow.
    ///
    /// # Example
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    /// let mut array = DynamicArray::new();
    /// array.push(1)?;
    /// array.push(2)?;
    /// assert_eq!(array.len(), 2);
    /// # Ok::<(), dynamic_array::ArrayError>(())
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.len == self.capacity() {
            self.try_reserve(1)?;
        }
        unsafe {
            ptr::write(self.buf.ptr().add(self.len), value);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the last element and returns it, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// Inserts an element at `index`, shifting all elements after it to the
    /// right.
    ///
    /// `index` must name an existing element: inserting at `len` is rejected
    /// with [`ArrayError::IndexOutOfBounds`], as is any insertion into an
    /// empty array. Use [`push`](Self::push) to append.
    ///
    /// # Example
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    /// let mut array = DynamicArray::from([1, 2]);
    /// array.insert(1, 3)?;
    /// assert_eq!(array, [1, 3, 2]);
    /// assert!(array.insert(3, 4).is_err());
    /// # Ok::<(), dynamic_array::ArrayError>(())
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        if self.len == self.capacity() {
            self.try_reserve(1)?;
        }

        unsafe {
            let slot = self.buf.ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            ptr::write(slot, value);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting all elements
    /// after it to the left.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        unsafe {
            let slot = self.buf.ptr().add(index);
            let removed = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            Ok(removed)
        }
    }

    /// Swaps two elements.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.as_mut_slice().swap(a, b);
        Ok(())
    }

    /// Shortens the array, keeping the first `len` elements and dropping the
    /// rest. Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let tail = self.len - len;
        // Update len BEFORE dropping to prevent double-free if drop panics
        self.len = len;
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr().add(len), tail));
        }
    }

    /// Removes all elements and replaces the buffer with a fresh one of the
    /// initial capacity.
    ///
    /// If the fresh buffer cannot be allocated, the array stays empty and
    /// keeps its previous buffer.
    pub fn clear(&mut self) {
        self.truncate(0);
        match RawArray::try_with_capacity(self.config.effective_initial_capacity()) {
            Ok(fresh) => {
                trace!(
                    old_capacity = self.buf.capacity(),
                    new_capacity = fresh.capacity(),
                    "reset backing storage"
                );
                self.buf = fresh;
            }
            Err(err) => debug!(%err, "keeping previous buffer after clear"),
        }
    }

    /// Retains only the elements for which `keep` returns `true`, preserving
    /// their order. Capacity is unchanged.
    ///
    /// If `keep` panics, the elements already kept and the ones not yet
    /// visited stay in the array.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let original_len = self.len;
        let base = self.buf.ptr();
        // Hidden from `Drop` while the guard owns the elements.
        self.len = 0;

        let mut guard = BackshiftOnDrop {
            array: self,
            base,
            processed: 0,
            deleted: 0,
            original_len,
        };

        while guard.processed < original_len {
            unsafe {
                let current = base.add(guard.processed);
                if keep(&*current) {
                    if guard.deleted > 0 {
                        ptr::copy_nonoverlapping(current, current.sub(guard.deleted), 1);
                    }
                    guard.processed += 1;
                } else {
                    guard.processed += 1;
                    guard.deleted += 1;
                    ptr::drop_in_place(current);
                }
            }
        }
    }

    /// Appends every element of `values`, in iteration order.
    ///
    /// Storage grows once for the whole batch. On error nothing is appended.
    ///
    /// # Example
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    /// let mut array = DynamicArray::new();
    /// array.add_all([1, 2, 3])?;
    /// assert_eq!(array.to_vec(), vec![1, 2, 3]);
    /// # Ok::<(), dynamic_array::ArrayError>(())
    /// ```
    pub fn add_all<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = values.into_iter();
        let (lower, upper) = iter.size_hint();

        if upper == Some(lower) {
            self.try_reserve(lower)?;
            let old_len = self.len;
            for value in iter {
                if let Err(err) = self.push(value) {
                    self.truncate(old_len);
                    return Err(err);
                }
            }
            return Ok(());
        }

        // Unknown batch size: gather first so growth happens once.
        let mut batch: Vec<T> = iter.collect();
        self.append_vec(&mut batch)
    }

    /// Moves all elements of `batch` to the back of the array.
    fn append_vec(&mut self, batch: &mut Vec<T>) -> Result<()> {
        let count = batch.len();
        self.try_reserve(count)?;
        unsafe {
            ptr::copy_nonoverlapping(batch.as_ptr(), self.buf.ptr().add(self.len), count);
            batch.set_len(0);
        }
        self.len += count;
        Ok(())
    }

    /// Clones and appends every element of `values`.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<()>
    where
        T: Clone,
    {
        self.try_reserve(values.len())?;
        for value in values {
            self.push(value.clone())?;
        }
        Ok(())
    }

    /// Batch insertion at a position is not provided.
    ///
    /// Always returns [`ArrayError::Unsupported`].
    pub fn insert_all_at<I>(&mut self, _index: usize, _values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        Err(ArrayError::Unsupported {
            operation: "insert_all_at",
        })
    }

    /// Returns a forward cursor over the elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Positioned or bidirectional cursors are not provided.
    ///
    /// Always returns [`ArrayError::Unsupported`]; use [`iter`](Self::iter).
    pub fn positioned_iter(&self, _index: usize) -> Result<Iter<'_, T>> {
        Err(ArrayError::Unsupported {
            operation: "positioned_iter",
        })
    }

    /// Copies the elements into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Copies the elements, converted to `U`, into `buffer`.
    ///
    /// `buffer` is cleared and reused when it can hold every element,
    /// otherwise a new one of exactly the right capacity is allocated.
    ///
    /// # Example
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    /// let array = DynamicArray::from([5u8, 2, 3, 2]);
    /// let widened: Vec<u32> = array.to_array_in(Vec::new());
    /// assert_eq!(widened, vec![5, 2, 3, 2]);
    /// ```
    pub fn to_array_in<U>(&self, mut buffer: Vec<U>) -> Vec<U>
    where
        T: Clone + Into<U>,
    {
        buffer.clear();
        if buffer.capacity() < self.len {
            buffer = Vec::with_capacity(self.len);
        }
        buffer.extend(self.iter().cloned().map(Into::into));
        buffer
    }

    /// Returns a new array holding a copy of `from..=to`.
    ///
    /// Both bounds must be valid indices and the upper bound is inclusive.
    /// `from == to + 1` yields an empty array.
    ///
    /// # Example
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    /// let array = DynamicArray::from([5, 2, 3, 2]);
    /// assert_eq!(array.sub_array(2, 3)?, [3, 2]);
    /// # Ok::<(), dynamic_array::ArrayError>(())
    /// ```
    pub fn sub_array(&self, from: usize, to: usize) -> Result<Self>
    where
        T: Clone,
    {
        self.check_index(from)?;
        self.check_index(to)?;
        if from > to + 1 {
            return Err(ArrayError::InvalidRange {
                from,
                to,
                len: self.len,
            });
        }

        let range = &self.as_slice()[from..to + 1];
        let mut sub = Self::try_with_config(self.config)?;
        sub.extend_from_slice(range)?;
        Ok(sub)
    }
}

// Search operations
impl<T: PartialEq> DynamicArray<T> {
    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.as_slice().iter().position(|element| element == value)
    }

    /// Returns the index of the last element equal to `value`.
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.as_slice().iter().rposition(|element| element == value)
    }

    /// Returns `true` if the array contains an element equal to `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns `true` if every element of `values` is contained in the array.
    pub fn contains_all<I>(&self, values: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        values
            .into_iter()
            .all(|value| self.contains(value.borrow()))
    }

    /// Removes the first element equal to `value`. Returns whether one was
    /// found.
    pub fn remove_item(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }

    /// Removes, for each element of `values`, the first remaining equal
    /// element of the array. Returns whether anything was removed.
    ///
    /// Duplicates in `values` each remove one more occurrence.
    pub fn remove_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut changed = false;
        for value in values {
            changed |= self.remove_item(value.borrow());
        }
        changed
    }

    /// Keeps only the elements equal to some element of `values`, in their
    /// original order, then shrinks the buffer to the retained count.
    /// Returns whether the array changed.
    ///
    /// # Example
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    /// let mut array = DynamicArray::from([1, 2, 3, 4, 5]);
    /// assert!(array.retain_all([2, 4, 7]));
    /// assert_eq!(array, [2, 4]);
    /// ```
    pub fn retain_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let filter: Vec<I::Item> = values.into_iter().collect();
        let old_len = self.len;
        self.retain(|element| filter.iter().any(|value| value.borrow() == element));

        if self.len == old_len {
            return false;
        }

        let old_capacity = self.buf.capacity();
        // Safety: the first `len` slots are initialized and fit the new buffer.
        match unsafe { self.buf.reallocate(self.len, self.len) } {
            Ok(()) => trace!(
                old_capacity,
                new_capacity = self.len,
                "shrank backing storage"
            ),
            Err(err) => debug!(%err, "keeping larger buffer after retain"),
        }
        true
    }
}

// Sorting operations
impl<T: Nullable> DynamicArray<T> {
    /// Sorts the array in ascending order with absent values first.
    ///
    /// See [`sort::quick_sort`].
    pub fn sort_nulls_first(&mut self)
    where
        T::Value: Ord,
    {
        sort::quick_sort(self);
    }

    /// Sorts the array with a comparison function, absent values first.
    pub fn sort_nulls_first_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T::Value, &T::Value) -> Ordering,
    {
        sort::quick_sort_by(self, compare);
    }
}

/// Closes the gap left by `retain` and restores the length, also on unwind.
struct BackshiftOnDrop<'a, T> {
    array: &'a mut DynamicArray<T>,
    base: *mut T,
    processed: usize,
    deleted: usize,
    original_len: usize,
}

impl<T> Drop for BackshiftOnDrop<'_, T> {
    fn drop(&mut self) {
        let unvisited = self.original_len - self.processed;
        if self.deleted > 0 && unvisited > 0 {
            unsafe {
                let src = self.base.add(self.processed);
                ptr::copy(src, src.sub(self.deleted), unvisited);
            }
        }
        self.array.len = self.original_len - self.deleted;
    }
}

/// Panics with the error when an infallible trait impl cannot grow storage.
#[track_caller]
fn grown(result: Result<()>) {
    if let Err(err) = result {
        panic!("{err}");
    }
}

// Trait implementations
impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        self.truncate(0);
        // RawArray is dropped afterwards and frees the memory
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// Clones into an array with the same configuration.
    ///
    /// # Panics
    ///
    /// Panics if storage for the copy cannot be allocated.
    fn clone(&self) -> Self {
        let mut copy = Self::with_config(self.config);
        grown(copy.extend_from_slice(self.as_slice()));
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq<U>, U> PartialEq<DynamicArray<U>> for DynamicArray<T> {
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for DynamicArray<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for DynamicArray<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for DynamicArray<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    /// # Panics
    ///
    /// Panics if storage cannot grow; use [`DynamicArray::add_all`] to
    /// handle that case.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        grown(self.add_all(iter));
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        grown(self.add_all(iter.into_iter().cloned()));
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(mut values: Vec<T>) -> Self {
        let mut array = Self::with_capacity(values.len());
        grown(array.append_vec(&mut values));
        array
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(values: [T; N]) -> Self {
        let mut array = Self::with_capacity(N);
        array.extend(values);
        array
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// RandomAccess implementation for sorting
impl<T> RandomAccess<T> for DynamicArray<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get_ref(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}
