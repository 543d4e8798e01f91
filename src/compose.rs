//! Point-free composition utilities.
//!
//! This module provides the fundamental combinators used throughout the
//! library plus curried forms of the container operations:
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: A function that always returns the same value (K combinator)
//! - [`compose`]: Right-to-left function composition, the primitive the
//!   pending deferred uses to accumulate transforms
//! - [`fmap`] / [`apply`]: Free-function forms of the container operations
//! - [`mapping`] / [`inspecting`] / [`lift`] / [`applying`]: Curried forms
//!   returning closures by value, so pipelines can be built before a
//!   container exists
//!
//! # Examples
//!
//! ```rust
//! use promissory::compose::mapping;
//! use promissory::container::Maybe;
//!
//! // Build the pipeline first, supply the container later
//! let double = mapping(|n: i32| n * 2);
//! assert_eq!(double(Maybe::just(21)), Maybe::just(42));
//! ```

use crate::typeclass::{Applicative, Functor, Sentinel};

#[cfg(feature = "container")]
use crate::container::Maybe;

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// `compose(identity, f)` behaves as `f`, and it is the default transform a
/// fresh pending deferred holds.
///
/// # Examples
///
/// ```
/// use promissory::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Also known as the K combinator in combinatory logic.
///
/// # Examples
///
/// ```
/// use promissory::compose::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Composes two functions right-to-left: `compose(g, f)(x)` is `g(f(x))`.
///
/// Composition is associative, which is what makes transform accumulation
/// on a pending deferred order-preserving: composing `g` after `f`, then
/// `h` after that, applies `f`, `g`, `h` in call order at resolution time.
///
/// # Examples
///
/// ```
/// use promissory::compose::compose;
///
/// let add_then_double = compose(|x: i32| x * 2, |x: i32| x + 1);
/// assert_eq!(add_then_double(3), 8);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: G, inner: F) -> impl FnOnce(A) -> C
where
    F: FnOnce(A) -> B,
    G: FnOnce(B) -> C,
{
    move |value| outer(inner(value))
}

/// Applies a function to the value inside a container (free-function form).
///
/// Equivalent to `container.fmap(function)`.
///
/// # Examples
///
/// ```
/// use promissory::compose::fmap;
/// use promissory::container::Maybe;
///
/// assert_eq!(fmap(|n: i32| n * 2, Maybe::just(21)), Maybe::just(42));
/// ```
#[inline]
pub fn fmap<FA, B, F>(function: F, container: FA) -> FA::WithType<B>
where
    FA: Functor,
    F: FnOnce(FA::Inner) -> B + 'static,
    B: 'static,
{
    container.fmap(function)
}

/// Applies a contained function to a contained value (free-function form).
///
/// Equivalent to `function_container.apply(value_container)`. An empty
/// function container short-circuits to the empty shape without invoking
/// anything.
///
/// # Examples
///
/// ```
/// use promissory::compose::apply;
/// use promissory::container::Maybe;
///
/// let function: Maybe<fn(i32) -> i32> = Maybe::just(|x| x + 1);
/// assert_eq!(apply(function, Maybe::just(5)), Maybe::just(6));
/// ```
#[inline]
pub fn apply<FF, B, Output>(
    function_container: FF,
    value_container: FF::WithType<B>,
) -> FF::WithType<Output>
where
    FF: Applicative,
    FF::Inner: FnOnce(B) -> Output + 'static,
    B: 'static,
    Output: 'static,
{
    function_container.apply(value_container)
}

/// Curries [`fmap`]: given only a transformation, returns a function from
/// container to container.
///
/// # Examples
///
/// ```
/// use promissory::compose::mapping;
/// use promissory::container::{Deferred, Maybe};
///
/// let double = mapping(|n: i32| n * 2);
/// assert_eq!(double(Maybe::just(21)), Maybe::just(42));
///
/// let double = mapping(|n: i32| n * 2);
/// let mut deferred = double(Deferred::<i32, i32>::new());
/// deferred.resolve(21);
/// assert_eq!(deferred.value(), 42);
/// ```
#[inline]
pub fn mapping<FA, B, F>(function: F) -> impl FnOnce(FA) -> FA::WithType<B>
where
    FA: Functor,
    F: FnOnce(FA::Inner) -> B + 'static,
    B: 'static,
{
    move |container| container.fmap(function)
}

/// Curries an effect-only map: given an effect, returns a function that
/// runs it against a container's value and hands the container back.
///
/// The effect observes a reference and the container's shape is unchanged,
/// mirroring `Maybe::inspect`.
///
/// Unlike the other curried combinators this one is not generic over both
/// families: the deferred family's effect map ([`Deferred::inspect`]) takes
/// `&mut self` and composes into the slot in place, so there is no by-value
/// container-to-container form to curry.
///
/// [`Deferred::inspect`]: crate::container::Deferred::inspect
///
/// # Examples
///
/// ```
/// use promissory::compose::inspecting;
/// use promissory::container::Maybe;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let seen = Rc::new(Cell::new(0));
/// let observer = Rc::clone(&seen);
///
/// let observe = inspecting(move |n: &i32| observer.set(*n));
/// assert_eq!(observe(Maybe::just(7)), Maybe::just(7));
/// assert_eq!(seen.get(), 7);
/// ```
#[cfg(feature = "container")]
#[inline]
pub fn inspecting<A, F>(effect: F) -> impl FnOnce(Maybe<A>) -> Maybe<A>
where
    F: FnOnce(&A),
{
    move |container| container.inspect(effect)
}

/// Lifts a raw value into a chosen container family under the sentinel
/// policy (free-function form of `pure`).
///
/// The container family is selected by the type parameter; a
/// sentinel-equal value produces the family's empty shape.
///
/// # Examples
///
/// ```
/// use promissory::compose::lift;
/// use promissory::container::Maybe;
///
/// let lifted: Maybe<i32> = lift::<Maybe<()>, _>(42);
/// assert_eq!(lifted, Maybe::just(42));
///
/// let empty: Maybe<i32> = lift::<Maybe<()>, _>(0);
/// assert_eq!(empty, Maybe::nothing());
/// ```
#[inline]
pub fn lift<F, B>(value: B) -> F::WithType<B>
where
    F: Applicative,
    B: Sentinel + 'static,
{
    F::pure(value)
}

/// Curries [`apply`] on the value side: given the value container, returns
/// a function awaiting the function container.
///
/// # Examples
///
/// ```
/// use promissory::compose::applying;
/// use promissory::container::Maybe;
///
/// let apply_to_five = applying(Maybe::just(5));
/// let function: Maybe<fn(i32) -> i32> = Maybe::just(|x| x + 1);
/// assert_eq!(apply_to_five(function), Maybe::just(6));
/// ```
#[inline]
pub fn applying<FF, B, Output>(
    value_container: FF::WithType<B>,
) -> impl FnOnce(FF) -> FF::WithType<Output>
where
    FF: Applicative,
    FF::Inner: FnOnce(B) -> Output + 'static,
    B: 'static,
    Output: 'static,
{
    move |function_container| function_container.apply(value_container)
}

#[cfg(all(test, feature = "container"))]
mod tests {
    use super::*;
    use crate::container::Deferred;
    use rstest::rstest;

    #[rstest]
    fn identity_returns_input() {
        assert_eq!(identity(42), 42);
        assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[rstest]
    fn constant_ignores_input() {
        let always = constant::<_, i32>("k");
        assert_eq!(always(1), "k");
        assert_eq!(always(2), "k");
    }

    #[rstest]
    fn compose_applies_inner_first() {
        let add_then_double = compose(|x: i32| x * 2, |x: i32| x + 1);
        assert_eq!(add_then_double(3), 8);
    }

    #[rstest]
    fn free_fmap_over_both_families() {
        assert_eq!(fmap(|n: i32| n * 2, Maybe::just(21)), Maybe::just(42));

        let mut deferred = fmap(|n: i32| n * 2, Deferred::<i32, i32>::new());
        deferred.resolve(21);
        assert_eq!(deferred.value(), 42);
    }

    #[rstest]
    fn mapping_builds_pipeline_before_container_exists() {
        let double = mapping(|n: i32| n * 2);
        assert_eq!(double(Maybe::just(21)), Maybe::just(42));
    }

    #[rstest]
    fn lift_routes_sentinel_per_family() {
        let present: Maybe<i32> = lift::<Maybe<()>, _>(42);
        assert_eq!(present, Maybe::just(42));

        let absent: Maybe<i32> = lift::<Maybe<()>, _>(0);
        assert_eq!(absent, Maybe::Nothing);

        let failed: Deferred<(), i32> = lift::<Deferred<(), ()>, _>(0);
        assert!(failed.is_failed());
    }

    #[rstest]
    fn applying_awaits_function_container() {
        let apply_to_five = applying(Maybe::just(5));
        let function: Maybe<fn(i32) -> i32> = Maybe::just(|x| x + 1);
        assert_eq!(apply_to_five(function), Maybe::just(6));

        let apply_to_five = applying(Maybe::just(5));
        let absent: Maybe<fn(i32) -> i32> = Maybe::nothing();
        assert_eq!(apply_to_five(absent), Maybe::Nothing);
    }
}
