//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value while preserving the
//! container's shape. Both container families implement it: mapping a
//! `Maybe` transforms the present value or preserves `Nothing`; mapping a
//! pending `Deferred` composes the function after the accumulated transform
//! so it runs once a value is supplied.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor should return an equivalent functor:
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence should be equivalent to mapping their composition:
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! For the deferred family the laws are observed through resolution: two
//! deferreds built from the same pending instance by the left-hand and
//! right-hand sides of a law produce the same terminal state and payload
//! when resolved with the same input.
//!
//! # Examples
//!
//! ```rust
//! use promissory::container::Maybe;
//! use promissory::typeclass::Functor;
//!
//! let present = Maybe::just(5);
//! let transformed: Maybe<String> = present.fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::just("5".to_string()));
//!
//! // Nothing is preserved
//! let absent: Maybe<i32> = Maybe::nothing();
//! assert_eq!(absent.fmap(|n| n.to_string()), Maybe::nothing());
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// `Functor` represents the ability to apply a function to the value inside
/// a container while preserving the container's structure. The function is
/// `FnOnce + 'static` because the deferred family stores it inside a boxed
/// transform until a value arrives.
///
/// # Laws
///
/// ## Identity Law
///
/// Mapping the identity function returns an equivalent functor:
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// Mapping composed functions is equivalent to mapping them in sequence:
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use promissory::container::Deferred;
/// use promissory::typeclass::Functor;
///
/// let deferred: Deferred<i32, i32> = Deferred::new();
/// let mut doubled = deferred.fmap(|x| x * 2);
/// doubled.resolve(21);
/// assert_eq!(doubled.value(), 42);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// This is the primary operation of the Functor type class. On an
    /// absent or failed container this is a no-op returning the same-shaped
    /// empty container; it never raises.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    /// use promissory::typeclass::Functor;
    ///
    /// let x = Maybe::just(5);
    /// assert_eq!(x.fmap(|n| n * 2), Maybe::just(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    /// use promissory::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::just(5).replace("replaced"), Maybe::just("replaced"));
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(absent.replace("replaced"), Maybe::nothing());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// This is useful when you only care about the shape of the container
    /// and not the value it contains. Equivalent to `replace(())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    /// use promissory::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::just(5).void(), Maybe::just(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
