//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for defining the [`Functor`] and
//! [`Applicative`] traits over both container families. Rust cannot
//! abstract over `Maybe<_>` and `Deferred<In, _>` as type constructors
//! directly, so a Generic Associated Type stands in for the "hole".
//!
//! [`Functor`]: crate::typeclass::Functor
//! [`Applicative`]: crate::typeclass::Applicative

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. It allows abstracting over type constructors like `Maybe<_>` and
/// `Deferred<In, _>`: the deferred family keeps its input type fixed and
/// re-applies the constructor to a new output type.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently
///   applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use promissory::container::Maybe;
/// use promissory::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Maybe<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Maybe<i32>`, this would be `i32`; for
    /// `Deferred<In, Out>` it is `Out`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Maybe<i32>`, `WithType<String>` would be
    /// `Maybe<String>`; for `Deferred<In, Out>` it is `Deferred<In, B>`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` ensures that the resulting
    /// type is also a valid type constructor, maintaining the ability to
    /// chain transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "container")]
    use crate::container::{Deferred, Maybe};

    #[cfg(feature = "container")]
    #[test]
    fn maybe_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Maybe<i32>>();
    }

    #[cfg(feature = "container")]
    #[test]
    fn deferred_inner_type_is_output() {
        fn assert_inner<T: TypeConstructor<Inner = String>>() {}
        assert_inner::<Deferred<i32, String>>();
    }

    #[cfg(feature = "container")]
    #[test]
    fn deferred_with_type_keeps_input_fixed() {
        // Deferred<In, Out>::WithType<B> must be Deferred<In, B>
        fn assert_with_type<In, Out, B>()
        where
            Deferred<In, Out>: TypeConstructor<Inner = Out, WithType<B> = Deferred<In, B>>,
        {
        }

        assert_with_type::<i32, String, bool>();
        assert_with_type::<String, (), i32>();
    }

    #[cfg(feature = "container")]
    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Maybe<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_maybe_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_maybe_bool::<Step2>();
    }
}
