//! Applicative type class - lifting values and applying contained functions.
//!
//! This module provides the `Applicative` trait, which extends `Functor`
//! with the ability to:
//!
//! - Lift a raw value into the container (`pure`)
//! - Combine two container values using a function (`map2`)
//! - Apply a contained function to a contained value (`apply`)
//!
//! # Lifting and the sentinel
//!
//! Unlike a textbook applicative, `pure` here is a *construction helper*:
//! it routes a sentinel-equal input (see [`Sentinel`]) to the empty shape —
//! `Nothing` for the optional family, `Failed` for the deferred family.
//! Consequently the homomorphism law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! holds only when neither `x` nor `f(x)` equals its type's sentinel. Use
//! the structural constructors (`Maybe::just`, `Deferred::fulfilled`) when
//! a value must be lifted unconditionally.
//!
//! # Laws
//!
//! ## Short-circuit
//!
//! `apply` on an empty function container returns the empty shape without
//! invoking anything, and without inspecting the value container:
//!
//! ```text
//! apply(Nothing, fa) == Nothing
//! ```
//!
//! ## Composition through `map2`
//!
//! Combining is associative up to tuple re-association:
//!
//! ```text
//! fa.map2(fb, f).map2(fc, g) == fa.map2(fb.product(fc), |a, (b, c)| g(f(a, b), c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use promissory::container::Maybe;
//! use promissory::typeclass::Applicative;
//!
//! // Lifting routes the sentinel to Nothing
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, Maybe::just(42));
//! let empty: Maybe<i32> = <Maybe<()>>::pure(0);
//! assert_eq!(empty, Maybe::nothing());
//!
//! // Combining two values
//! let sum = Maybe::just(1).map2(Maybe::just(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::just(3));
//! ```

use super::functor::Functor;
use super::sentinel::Sentinel;

/// A type class for containers that support lifting values and applying
/// contained functions.
///
/// `Applicative` extends `Functor` with `pure` (lift a raw value under the
/// sentinel policy), `map2` (combine two containers), and `apply` (apply a
/// contained function to a contained value).
///
/// The function and value bounds carry `'static` because the deferred
/// family stores closures inside a boxed transform until resolution.
///
/// # Examples
///
/// ```rust
/// use promissory::container::Maybe;
/// use promissory::typeclass::Applicative;
///
/// let function: Maybe<fn(i32) -> i32> = Maybe::just(|x| x + 1);
/// assert_eq!(function.apply(Maybe::just(5)), Maybe::just(6));
/// ```
pub trait Applicative: Functor {
    /// Lifts a raw value into the container under the sentinel policy.
    ///
    /// A sentinel-equal input produces the empty shape (`Nothing` or
    /// `Failed`); any other input produces the present shape. See the
    /// module documentation for the law consequences.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    /// use promissory::typeclass::Applicative;
    ///
    /// let x: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(x, Maybe::just(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: Sentinel + 'static;

    /// Combines two container values using a binary function.
    ///
    /// If either side is empty (absent or failed), the result is empty and
    /// the function is not invoked. For two pending deferreds the same
    /// input is fed through both accumulated transforms at resolution time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    /// use promissory::typeclass::Applicative;
    ///
    /// let sum = Maybe::just(1).map2(Maybe::just(2), |x, y| x + y);
    /// assert_eq!(sum, Maybe::just(3));
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(Maybe::just(1).map2(absent, |x, y| x + y), Maybe::nothing());
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C + 'static,
        B: 'static,
        C: 'static;

    /// Applies a function inside the container to a value inside the container.
    ///
    /// If the function container is empty, the result is the empty shape
    /// immediately — the value container is not inspected and no function
    /// is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    /// use promissory::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::just(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::just(5)), Maybe::just(6));
    ///
    /// let absent: Maybe<fn(i32) -> i32> = Maybe::nothing();
    /// assert_eq!(absent.apply(Maybe::just(5)), Maybe::nothing());
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output + 'static,
        B: 'static,
        Output: 'static;

    /// Combines two container values into a tuple.
    ///
    /// This is equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    /// use promissory::typeclass::Applicative;
    ///
    /// let paired = Maybe::just(1).product(Maybe::just("hello"));
    /// assert_eq!(paired, Maybe::just((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two containers and keeps the left value.
    ///
    /// Both sides participate in the emptiness check, but only the left
    /// value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    /// use promissory::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::just(1).product_left(Maybe::just(2)), Maybe::just(1));
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(Maybe::just(1).product_left(absent), Maybe::nothing());
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: 'static,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two containers and keeps the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    /// use promissory::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::just(1).product_right(Maybe::just(2)), Maybe::just(2));
    /// ```
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: 'static,
    {
        self.map2(other, |_, b| b)
    }
}
