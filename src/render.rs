//! Human-readable rendering of `DynamicArray`.
//!
//! `Display` renders `[a, b, c]`, with absent values written as `null`.

use std::fmt;

use crate::DynamicArray;

/// Element rendering used by the `Display` impl of `DynamicArray`.
///
/// Implemented for common scalar and string types and for `Option<T>` over
/// any displayable `T`, where `None` renders as `null`. Other element types
/// opt in by implementing `Render`, usually by forwarding to their `Display`.
///
/// # Example
///
/// ```
/// use std::fmt;
/// use dynamic_array::{DynamicArray, Render};
///
/// struct Celsius(i32);
///
/// impl Render for Celsius {
///     fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}C", self.0)
///     }
/// }
///
/// let array = DynamicArray::from([Celsius(20), Celsius(-3)]);
/// assert_eq!(array.to_string(), "[20C, -3C]");
/// ```
pub trait Render {
    /// Writes this element to `f`.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T: fmt::Display> Render for Option<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("null"),
        }
    }
}

macro_rules! render_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                #[inline]
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

render_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl<T: Render + ?Sized> Render for &T {
    #[inline]
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            element.render(f)?;
        }
        f.write_str("]")
    }
}
