//! Comparison tests between DynamicArray and std::Vec
//!
//! Property-based tests that drive a `DynamicArray` and a `Vec` through the
//! same operations and check that they stay in agreement. Where the array's
//! contract differs from `Vec` (insertion at `len`, errors instead of panics)
//! the test checks the array's contract instead.

use dynamic_array::sort;
use dynamic_array::{ArrayConfig, ArrayError, DynamicArray, GrowthPolicy};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// ============================================================================
// COMPARISON TESTING INFRASTRUCTURE
// ============================================================================

/// Operations that can be applied to both containers.
#[derive(Debug, Clone)]
enum ArrayOp<T> {
    Push(T),
    Pop,
    Clear,
    Truncate(usize),
    Insert(usize, T),
    Remove(usize),
    Set(usize, T),
    Swap(usize, usize),
    AddAll(Vec<T>),
    RemoveItem(T),
    RemoveAll(Vec<T>),
    RetainAll(Vec<T>),
}

/// Apply an operation to both containers and compare results.
fn apply_op<T: Clone + PartialEq + std::fmt::Debug>(
    std_vec: &mut Vec<T>,
    array: &mut DynamicArray<T>,
    op: &ArrayOp<T>,
) {
    match op {
        ArrayOp::Push(v) => {
            std_vec.push(v.clone());
            array.push(v.clone()).unwrap();
        }
        ArrayOp::Pop => {
            assert_eq!(std_vec.pop(), array.pop(), "pop() mismatch");
        }
        ArrayOp::Clear => {
            std_vec.clear();
            array.clear();
        }
        ArrayOp::Truncate(len) => {
            std_vec.truncate(*len);
            array.truncate(*len);
        }
        ArrayOp::Insert(idx, v) => {
            if *idx < std_vec.len() {
                std_vec.insert(*idx, v.clone());
                array.insert(*idx, v.clone()).unwrap();
            } else {
                // Insertion is only accepted at the index of an existing element.
                let err = array.insert(*idx, v.clone()).unwrap_err();
                assert!(err.is_out_of_bounds(), "insert({}) error: {:?}", idx, err);
            }
        }
        ArrayOp::Remove(idx) => {
            if *idx < std_vec.len() {
                let std_result = std_vec.remove(*idx);
                let array_result = array.remove(*idx).unwrap();
                assert_eq!(std_result, array_result, "remove() mismatch");
            } else {
                assert_eq!(
                    array.remove(*idx),
                    Err(ArrayError::IndexOutOfBounds {
                        index: *idx,
                        len: std_vec.len()
                    })
                );
            }
        }
        ArrayOp::Set(idx, v) => {
            if *idx < std_vec.len() {
                let old = std::mem::replace(&mut std_vec[*idx], v.clone());
                assert_eq!(array.set(*idx, v.clone()), Ok(old), "set() mismatch");
            } else {
                assert!(array.set(*idx, v.clone()).is_err());
            }
        }
        ArrayOp::Swap(a, b) => {
            if *a < std_vec.len() && *b < std_vec.len() {
                std_vec.swap(*a, *b);
                array.swap(*a, *b).unwrap();
            } else {
                assert!(array.swap(*a, *b).is_err());
            }
        }
        ArrayOp::AddAll(vals) => {
            std_vec.extend(vals.iter().cloned());
            array.add_all(vals.iter().cloned()).unwrap();
        }
        ArrayOp::RemoveItem(v) => {
            let std_result = match std_vec.iter().position(|e| e == v) {
                Some(pos) => {
                    std_vec.remove(pos);
                    true
                }
                None => false,
            };
            assert_eq!(std_result, array.remove_item(v), "remove_item() mismatch");
        }
        ArrayOp::RemoveAll(vals) => {
            let mut std_changed = false;
            for v in vals {
                if let Some(pos) = std_vec.iter().position(|e| e == v) {
                    std_vec.remove(pos);
                    std_changed = true;
                }
            }
            assert_eq!(std_changed, array.remove_all(vals), "remove_all() mismatch");
        }
        ArrayOp::RetainAll(vals) => {
            let before = std_vec.len();
            std_vec.retain(|e| vals.contains(e));
            let std_changed = std_vec.len() != before;
            assert_eq!(std_changed, array.retain_all(vals), "retain_all() mismatch");
        }
    }
}

/// Verify that both containers have the same content.
fn assert_arrays_equal<T: Clone + PartialEq + std::fmt::Debug>(
    std_vec: &[T],
    array: &DynamicArray<T>,
) {
    assert_eq!(std_vec.len(), array.len(), "length mismatch");
    assert_eq!(std_vec.is_empty(), array.is_empty(), "is_empty mismatch");
    assert!(array.capacity() >= array.len(), "capacity below length");

    // Compare element by element
    for (i, (std_elem, array_elem)) in std_vec.iter().zip(array.iter()).enumerate() {
        assert_eq!(std_elem, array_elem, "element mismatch at index {}", i);
    }

    for i in 0..std_vec.len() {
        assert_eq!(std_vec.get(i), array.get(i).ok(), "get({}) mismatch", i);
    }

    // Out of bounds is an error
    assert!(array.get(std_vec.len()).unwrap_err().is_out_of_bounds());
    assert!(array.get(usize::MAX).is_err());
}

// ============================================================================
// PROPTEST STRATEGIES
// ============================================================================

/// Values are drawn from a small range so searches and removals hit.
fn value_strategy() -> impl Strategy<Value = i32> {
    -20i32..20
}

/// Strategy for generating a single operation.
fn array_op_strategy() -> impl Strategy<Value = ArrayOp<i32>> {
    prop_oneof![
        value_strategy().prop_map(ArrayOp::Push),
        Just(ArrayOp::Pop),
        Just(ArrayOp::Clear),
        (0usize..200).prop_map(ArrayOp::Truncate),
        (0usize..100, value_strategy()).prop_map(|(idx, v)| ArrayOp::Insert(idx, v)),
        (0usize..100).prop_map(ArrayOp::Remove),
        (0usize..100, value_strategy()).prop_map(|(idx, v)| ArrayOp::Set(idx, v)),
        (0usize..100, 0usize..100).prop_map(|(a, b)| ArrayOp::Swap(a, b)),
        prop::collection::vec(value_strategy(), 0..50).prop_map(ArrayOp::AddAll),
        value_strategy().prop_map(ArrayOp::RemoveItem),
        prop::collection::vec(value_strategy(), 0..8).prop_map(ArrayOp::RemoveAll),
        prop::collection::vec(value_strategy(), 0..20).prop_map(ArrayOp::RetainAll),
    ]
}

/// Strategy for generating a sequence of operations.
fn ops_sequence_strategy() -> impl Strategy<Value = Vec<ArrayOp<i32>>> {
    prop::collection::vec(array_op_strategy(), 0..200)
}

fn growth_strategy() -> impl Strategy<Value = GrowthPolicy> {
    prop_oneof![
        (1.0f64..4.0).prop_map(GrowthPolicy::Multiplier),
        (1usize..16).prop_map(GrowthPolicy::Increment),
    ]
}

/// Orders `Option<i32>` with `None` first, matching the sort's contract.
fn nulls_first_reference(values: &[Option<i32>]) -> Vec<Option<i32>> {
    let mut sorted = values.to_vec();
    // `Option`'s derived ordering already places `None` before `Some`.
    sorted.sort();
    sorted
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// PROPTEST TESTS
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// A random sequence of operations produces identical results.
    #[test]
    fn proptest_operations_match(ops in ops_sequence_strategy()) {
        let mut std_vec: Vec<i32> = Vec::new();
        let mut array: DynamicArray<i32> = DynamicArray::new();

        for op in &ops {
            apply_op(&mut std_vec, &mut array, op);
            assert_arrays_equal(&std_vec, &array);
        }
    }

    /// Any growth policy keeps the contents intact.
    #[test]
    fn proptest_growth_policies(
        initial in 0usize..8,
        growth in growth_strategy(),
        values in prop::collection::vec(any::<i32>(), 0..300),
    ) {
        let config = ArrayConfig::default()
            .with_initial_capacity(initial)
            .with_growth(growth);
        let mut array = DynamicArray::with_config(config);
        for v in &values {
            array.push(*v).unwrap();
        }
        prop_assert!(array.capacity() >= array.len());
        prop_assert_eq!(array.to_vec(), values);
    }

    /// A capped array rejects growth past the cap without changing.
    #[test]
    fn proptest_max_capacity(
        max in 1usize..64,
        values in prop::collection::vec(any::<i32>(), 0..100),
    ) {
        let config = ArrayConfig::default().with_max_capacity(max);
        let mut array = DynamicArray::with_config(config);
        for (i, v) in values.iter().enumerate() {
            let result = array.push(*v);
            if i < max {
                prop_assert!(result.is_ok());
            } else {
                prop_assert!(result.unwrap_err().is_resource_exhaustion());
            }
        }
        let expected: Vec<i32> = values.iter().copied().take(max).collect();
        prop_assert_eq!(array.to_vec(), expected);
        prop_assert!(array.capacity() <= max);
    }

    /// The cap also holds for zero-sized elements, which never allocate.
    #[test]
    fn proptest_max_capacity_zst(max in 1usize..64, pushes in 0usize..100) {
        let config = ArrayConfig::default().with_max_capacity(max);
        let mut array: DynamicArray<()> = DynamicArray::with_config(config);
        for i in 0..pushes {
            let result = array.push(());
            if i < max {
                prop_assert!(result.is_ok());
            } else {
                prop_assert!(result.unwrap_err().is_resource_exhaustion());
            }
        }
        prop_assert_eq!(array.len(), pushes.min(max));
        prop_assert!(array.capacity() <= max);
    }

    /// Push followed by iteration.
    #[test]
    fn proptest_push_and_iter(values in prop::collection::vec(any::<i32>(), 0..500)) {
        let mut array: DynamicArray<i32> = DynamicArray::new();
        for v in &values {
            array.push(*v).unwrap();
        }

        let collected: Vec<_> = array.iter().copied().collect();
        prop_assert_eq!(&collected, &values);

        let into: Vec<_> = array.clone().into_iter().collect();
        prop_assert_eq!(&into, &values);

        let reversed: Vec<_> = array.into_iter().rev().collect();
        let expected: Vec<_> = values.iter().rev().copied().collect();
        prop_assert_eq!(reversed, expected);
    }

    /// Sorting with absent values matches `Option`'s own ordering.
    #[test]
    fn proptest_sort_nulls_first(values in prop::collection::vec(prop::option::of(-50i32..50), 0..200)) {
        let mut array: DynamicArray<Option<i32>> = values.iter().copied().collect();
        array.sort_nulls_first();
        prop_assert_eq!(array.to_vec(), nulls_first_reference(&values));
    }

    /// The free sort function works on plain vectors and slices.
    #[test]
    fn proptest_sort_vec(values in prop::collection::vec(prop::option::of(any::<i32>()), 0..200)) {
        let mut sorted = values.clone();
        sort::quick_sort(&mut sorted);
        prop_assert_eq!(sorted, nulls_first_reference(&values));
    }

    /// A descending comparison reverses present values but keeps absent ones first.
    #[test]
    fn proptest_sort_by_descending(values in prop::collection::vec(prop::option::of(any::<i32>()), 0..200)) {
        let mut array: DynamicArray<Option<i32>> = values.iter().copied().collect();
        array.sort_nulls_first_by(|a, b| b.cmp(a));

        let absent = values.iter().filter(|v| v.is_none()).count();
        let mut present: Vec<i32> = values.iter().flatten().copied().collect();
        present.sort_by(|a, b| b.cmp(a));
        let mut expected = vec![None; absent];
        expected.extend(present.into_iter().map(Some));

        prop_assert_eq!(array.to_vec(), expected);
    }

    /// Sorting a sub-range leaves the rest untouched.
    #[test]
    fn proptest_sort_range(
        values in prop::collection::vec(prop::option::of(-50i32..50), 1..100),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let (from, to) = {
            let a = a.index(values.len());
            let b = b.index(values.len());
            (a.min(b), a.max(b))
        };
        let mut sorted = values.clone();
        sort::quick_sort_range_by(&mut sorted, from, to, |x: &i32, y: &i32| x.cmp(y));

        prop_assert_eq!(&sorted[..from], &values[..from]);
        prop_assert_eq!(&sorted[to + 1..], &values[to + 1..]);
        prop_assert_eq!(sorted[from..=to].to_vec(), nulls_first_reference(&values[from..=to]));
    }

    /// Searches agree with the slice methods.
    #[test]
    fn proptest_search(
        values in prop::collection::vec(value_strategy(), 0..100),
        needle in value_strategy(),
    ) {
        let array: DynamicArray<i32> = values.iter().copied().collect();
        prop_assert_eq!(array.index_of(&needle), values.iter().position(|v| *v == needle));
        prop_assert_eq!(array.last_index_of(&needle), values.iter().rposition(|v| *v == needle));
        prop_assert_eq!(array.contains(&needle), values.contains(&needle));
    }

    /// Inclusive sub-arrays agree with slicing.
    #[test]
    fn proptest_sub_array(
        values in prop::collection::vec(any::<i32>(), 1..100),
        from in any::<prop::sample::Index>(),
        to in any::<prop::sample::Index>(),
    ) {
        let array: DynamicArray<i32> = values.iter().copied().collect();
        let from = from.index(values.len());
        let to = to.index(values.len());

        match array.sub_array(from, to) {
            Ok(sub) => {
                prop_assert!(from <= to + 1);
                prop_assert_eq!(sub.to_vec(), values[from..to + 1].to_vec());
            }
            Err(err) => {
                prop_assert!(from > to + 1);
                prop_assert_eq!(err, ArrayError::InvalidRange { from, to, len: values.len() });
            }
        }
    }

    /// Equal contents compare and hash the same as a slice would.
    #[test]
    fn proptest_eq_and_hash(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let array: DynamicArray<i32> = values.iter().copied().collect();
        let copy = array.clone();
        prop_assert_eq!(&array, &copy);
        prop_assert!(array == values);
        prop_assert_eq!(hash_of(&array), hash_of(&copy));
        prop_assert_eq!(hash_of(&array), hash_of(&values.as_slice()));
    }

    /// Rendering matches a hand-built rendering.
    #[test]
    fn proptest_render(values in prop::collection::vec(prop::option::of(any::<i16>()), 0..50)) {
        let array: DynamicArray<Option<i16>> = values.iter().copied().collect();
        let parts: Vec<String> = values
            .iter()
            .map(|v| v.map_or_else(|| "null".to_string(), |n| n.to_string()))
            .collect();
        prop_assert_eq!(array.to_string(), format!("[{}]", parts.join(", ")));
    }
}

// ============================================================================
// REGRESSION TESTS
// ============================================================================

#[test]
fn test_sort_two_element_tail() {
    let mut array = DynamicArray::from([None, Some(3), Some(1)]);
    array.sort_nulls_first();
    assert_eq!(array, [None, Some(1), Some(3)]);
}

#[test]
fn test_sort_strings() {
    let mut array: DynamicArray<Option<String>> = ["pear", "apple", "fig"]
        .iter()
        .map(|s| Some(s.to_string()))
        .collect();
    array.push(None).unwrap();
    array.sort_nulls_first();
    assert_eq!(array.to_string(), "[null, apple, fig, pear]");
}

#[test]
fn test_clear_then_reuse() {
    let mut array = DynamicArray::new();
    array.add_all(0..1000).unwrap();
    array.clear();
    array.clear();
    array.add_all(0..5).unwrap();
    assert_eq!(array, [0, 1, 2, 3, 4]);
}

#[test]
fn test_cursor_after_exhaustion() {
    let array = DynamicArray::from([1]);
    let mut cursor = array.iter();
    assert_eq!(cursor.try_next(), Ok(&1));
    assert_eq!(cursor.try_next(), Err(ArrayError::Exhausted));
    assert_eq!(cursor.try_next(), Err(ArrayError::Exhausted));
}
