//! The per-type sentinel value used to detect absence at construction time.
//!
//! Both container families detect absence by comparing a raw input against
//! the type's "zero" value: `0` for numeric types, the empty string for
//! textual types, `None` for optional references. The comparison only ever
//! happens inside the construction helpers (`Maybe::from_raw`,
//! `Deferred::from_raw`, `Deferred::resolve`); once a value is inside a
//! container, absence is structural.
//!
//! Sentinel equality is inherently brittle: a legitimate value equal to the
//! sentinel (a real `0`) is indistinguishable from "absent". Every
//! sentinel-sensitive operation therefore has a sibling taking an explicit
//! closure policy (`from_raw_by`, `resolve_by`), and the definitely-present
//! constructors (`Maybe::just`, `Deferred::fulfilled`) bypass the policy
//! entirely.
//!
//! # Examples
//!
//! ```rust
//! use promissory::typeclass::Sentinel;
//!
//! assert!(0_i32.is_sentinel());
//! assert!(!42_i32.is_sentinel());
//! assert!(String::new().is_sentinel());
//! assert_eq!(<i32 as Sentinel>::sentinel(), 0);
//! ```

/// A type with a distinguished "zero/empty" value used to detect absence.
///
/// `sentinel()` produces the distinguished value; `is_sentinel()` tests a
/// value against it. The two must agree: `Self::sentinel().is_sentinel()`
/// is always `true`.
///
/// Implementations are provided for the primitive numeric types (zero),
/// `bool` (`false`), `char` (`'\0'`), `String` and `&str` (empty),
/// `Vec<T>` (empty), and `Option<T>` (`None`).
pub trait Sentinel: Sized {
    /// Returns the distinguished sentinel value for this type.
    fn sentinel() -> Self;

    /// Returns `true` if this value equals the sentinel.
    fn is_sentinel(&self) -> bool;
}

macro_rules! numeric_sentinel {
    ($($type:ident),* $(,)?) => {
        $(
            impl Sentinel for $type {
                #[inline]
                fn sentinel() -> Self {
                    0 as $type
                }

                #[inline]
                #[allow(clippy::float_cmp)]
                fn is_sentinel(&self) -> bool {
                    *self == Self::sentinel()
                }
            }
        )*
    };
}

numeric_sentinel!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Sentinel for bool {
    #[inline]
    fn sentinel() -> Self {
        false
    }

    #[inline]
    fn is_sentinel(&self) -> bool {
        !*self
    }
}

impl Sentinel for char {
    #[inline]
    fn sentinel() -> Self {
        '\0'
    }

    #[inline]
    fn is_sentinel(&self) -> bool {
        *self == '\0'
    }
}

impl Sentinel for String {
    #[inline]
    fn sentinel() -> Self {
        Self::new()
    }

    #[inline]
    fn is_sentinel(&self) -> bool {
        self.is_empty()
    }
}

impl Sentinel for &str {
    #[inline]
    fn sentinel() -> Self {
        ""
    }

    #[inline]
    fn is_sentinel(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Sentinel for Vec<T> {
    #[inline]
    fn sentinel() -> Self {
        Self::new()
    }

    #[inline]
    fn is_sentinel(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Sentinel for Option<T> {
    #[inline]
    fn sentinel() -> Self {
        None
    }

    #[inline]
    fn is_sentinel(&self) -> bool {
        self.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! zero_sentinel_tests {
        ($($type:ident),* $(,)?) => {
            paste::paste! {
                $(
                    #[test]
                    fn [<$type _zero_is_sentinel>]() {
                        assert!(<$type as Sentinel>::sentinel().is_sentinel());
                        assert!(!(1 as $type).is_sentinel());
                    }
                )*
            }
        };
    }

    zero_sentinel_tests!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

    #[test]
    fn bool_sentinel_is_false() {
        assert!(bool::sentinel().is_sentinel());
        assert!(!true.is_sentinel());
    }

    #[test]
    fn char_sentinel_is_nul() {
        assert!(char::sentinel().is_sentinel());
        assert!(!'a'.is_sentinel());
    }

    #[test]
    fn string_sentinel_is_empty() {
        assert!(String::sentinel().is_sentinel());
        assert!(!String::from("hello").is_sentinel());
    }

    #[test]
    fn str_sentinel_is_empty() {
        assert!(<&str as Sentinel>::sentinel().is_sentinel());
        assert!(!"hello".is_sentinel());
    }

    #[test]
    fn vec_sentinel_is_empty() {
        assert!(Vec::<i32>::sentinel().is_sentinel());
        assert!(!vec![1].is_sentinel());
    }

    #[test]
    fn option_sentinel_is_none() {
        assert!(Option::<i32>::sentinel().is_sentinel());
        assert!(!Some(0).is_sentinel());
    }
}
