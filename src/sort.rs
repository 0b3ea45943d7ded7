//! Null-tolerant quick sort.
//!
//! Sorts any indexed container whose elements may be absent. Absent values
//! order before every present value; present values are ordered by the
//! caller's comparison, which never sees an absent value.
//!
//! The sort is in place, recursive and not stable.
//!
//! # Example
//!
//! ```
//! use dynamic_array::sort;
//!
//! let mut values = vec![Some(1), None, None, Some(3)];
//! sort::quick_sort(&mut values);
//! assert_eq!(values, [None, None, Some(1), Some(3)]);
//! ```

use std::cmp::Ordering;

/// Trait for indexed access to a collection.
///
/// This abstraction allows the sort to work with any random-access
/// container, not only `DynamicArray`.
pub trait RandomAccess<T> {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a reference to the element at index.
    ///
    /// May panic if `index >= len`.
    fn get_ref(&self, index: usize) -> &T;

    /// Swap elements at two indices.
    fn swap(&mut self, a: usize, b: usize);
}

impl<T> RandomAccess<T> for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get_ref(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T> RandomAccess<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get_ref(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

/// An element that is either a present value or the absent sentinel.
pub trait Nullable {
    /// Type of the present value.
    type Value: ?Sized;

    /// Returns the present value, or `None` for the absent sentinel.
    fn present(&self) -> Option<&Self::Value>;

    /// Returns `true` for the absent sentinel.
    #[inline]
    fn is_absent(&self) -> bool {
        self.present().is_none()
    }
}

impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn present(&self) -> Option<&T> {
        self.as_ref()
    }
}

/// Sorts the whole container in ascending order, absent values first.
pub fn quick_sort<N, S>(seq: &mut S)
where
    S: RandomAccess<N> + ?Sized,
    N: Nullable,
    N::Value: Ord,
{
    quick_sort_by(seq, |a, b| a.cmp(b));
}

/// Sorts the whole container with a comparison function, absent values first.
///
/// Empty and single-element containers are left untouched.
pub fn quick_sort_by<N, S, F>(seq: &mut S, compare: F)
where
    S: RandomAccess<N> + ?Sized,
    N: Nullable,
    F: FnMut(&N::Value, &N::Value) -> Ordering,
{
    let len = seq.len();
    if len < 2 {
        return;
    }
    quick_sort_range_by(seq, 0, len - 1, compare);
}

/// Sorts `seq[from..=to]` with a comparison function, absent values first.
///
/// Both bounds are inclusive. Elements outside the range are not touched.
/// A range with `from >= to` holds at most one element and is left as is.
/// A panic raised by `compare` propagates to the caller.
///
/// # Panics
///
/// Panics if `from < to` and `to` is not a valid index of `seq`.
pub fn quick_sort_range_by<N, S, F>(seq: &mut S, from: usize, to: usize, mut compare: F)
where
    S: RandomAccess<N> + ?Sized,
    N: Nullable,
    F: FnMut(&N::Value, &N::Value) -> Ordering,
{
    quick_sort_recursive(seq, from, to, &mut compare);
}

fn quick_sort_recursive<N, S, F>(seq: &mut S, mut from: usize, mut to: usize, compare: &mut F)
where
    S: RandomAccess<N> + ?Sized,
    N: Nullable,
    F: FnMut(&N::Value, &N::Value) -> Ordering,
{
    while from < to {
        let Some(pivot_final) = partition(seq, from, to, compare) else {
            return;
        };

        // Recurse on the smaller side, loop on the larger one to bound stack depth.
        let left_len = pivot_final - from;
        let right_len = to - pivot_final;

        if left_len < right_len {
            if pivot_final > from {
                quick_sort_recursive(seq, from, pivot_final - 1, compare);
            }
            from = pivot_final + 1;
        } else {
            quick_sort_recursive(seq, pivot_final + 1, to, compare);
            if pivot_final == from {
                return;
            }
            to = pivot_final - 1;
        }
    }
}

/// Partitions `seq[from..=to]` around the first present value.
///
/// Absent values and values not greater than the pivot end up left of it.
/// Returns the pivot's final position, or `None` when the range is already
/// sorted because at most one element follows the leading run of absent values.
fn partition<N, S, F>(seq: &mut S, from: usize, to: usize, compare: &mut F) -> Option<usize>
where
    S: RandomAccess<N> + ?Sized,
    N: Nullable,
    F: FnMut(&N::Value, &N::Value) -> Ordering,
{
    let mut pivot = from;
    while pivot < to && seq.get_ref(pivot).is_absent() {
        pivot += 1;
    }
    if pivot >= to {
        return None;
    }

    let mut left = pivot;
    for right in (pivot + 1)..=to {
        let goes_left = match (seq.get_ref(pivot).present(), seq.get_ref(right).present()) {
            (_, None) => true,
            (Some(pivot_value), Some(value)) => compare(pivot_value, value) != Ordering::Less,
            // The pivot is present by construction.
            (None, Some(_)) => false,
        };
        if goes_left {
            left += 1;
            seq.swap(left, right);
        }
    }

    seq.swap(pivot, left);
    Some(left)
}
