//! Capacity configuration for `DynamicArray`.

use crate::error::{ArrayError, Result};

/// Initial capacity used when none (or zero) is requested.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Multiplier applied to the length when the default policy grows storage.
pub const DEFAULT_CAPACITY_MULTIPLIER: f64 = 1.75;

/// How the backing storage grows once it is full.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GrowthPolicy {
    /// New capacity is `len * factor`, rounded down.
    Multiplier(f64),
    /// New capacity is `len + step`.
    Increment(usize),
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        GrowthPolicy::Multiplier(DEFAULT_CAPACITY_MULTIPLIER)
    }
}

/// Construction and growth parameters of a `DynamicArray`.
///
/// # Example
///
/// ```
/// use dynamic_array::{ArrayConfig, DynamicArray, GrowthPolicy};
///
/// let config = ArrayConfig::default()
///     .with_initial_capacity(4)
///     .with_growth(GrowthPolicy::Increment(4))
///     .with_max_capacity(64);
/// let array: DynamicArray<u8> = DynamicArray::with_config(config);
/// assert_eq!(array.capacity(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrayConfig {
    /// Capacity allocated on construction and after `clear`.
    pub initial_capacity: usize,
    /// Growth policy applied when an insertion needs more room.
    pub growth: GrowthPolicy,
    /// Upper bound on capacity. Requests past it fail with
    /// [`ArrayError::CapacityOverflow`].
    pub max_capacity: usize,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth: GrowthPolicy::default(),
            max_capacity: usize::MAX,
        }
    }
}

impl ArrayConfig {
    /// Sets the initial capacity. Zero selects [`DEFAULT_INITIAL_CAPACITY`].
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the growth policy.
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Sets the maximum capacity.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Initial capacity after applying the zero fallback and the maximum.
    pub(crate) fn effective_initial_capacity(&self) -> usize {
        let requested = if self.initial_capacity == 0 {
            DEFAULT_INITIAL_CAPACITY
        } else {
            self.initial_capacity
        };
        requested.min(self.max_capacity)
    }

    /// Computes the capacity to grow to so that `required` elements fit.
    ///
    /// Callers only ask when `required` exceeds the current capacity, so the
    /// result is always strictly larger than it.
    pub(crate) fn next_capacity(&self, len: usize, required: usize, max: usize) -> Result<usize> {
        let max = max.min(self.max_capacity);
        if required > max {
            return Err(ArrayError::CapacityOverflow {
                requested: required,
                max,
            });
        }

        let proposed = match self.growth {
            GrowthPolicy::Multiplier(factor) => {
                let scaled = len as f64 * factor;
                if scaled >= max as f64 {
                    max
                } else {
                    // NaN and negative factors saturate to zero here.
                    scaled as usize
                }
            }
            GrowthPolicy::Increment(step) => len.saturating_add(step),
        };

        Ok(proposed.max(required).min(max))
    }
}
