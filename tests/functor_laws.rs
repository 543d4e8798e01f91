#![cfg(feature = "container")]
//! Property-based tests for Functor laws.
//!
//! This module verifies that both container families satisfy the required laws:
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! A pending deferred holds an opaque transform, so its laws are observed
//! through resolution: both sides of a law are resolved with the same input
//! and must land in the same terminal state with the same payload.

use promissory::container::{Deferred, Maybe};
use promissory::typeclass::Functor;
use proptest::prelude::*;

fn maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

// =============================================================================
// Maybe<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Maybe<i32>: fmap with identity returns the original value
    #[test]
    fn prop_maybe_identity_law(value in maybe_i32()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    /// Composition Law for Maybe<i32>: mapping composed functions equals composing maps
    #[test]
    fn prop_maybe_composition_law(value in maybe_i32()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Identity Law for Maybe<String>
    #[test]
    fn prop_maybe_string_identity_law(value in any::<Option<String>>()) {
        let container = Maybe::from(value);
        prop_assert_eq!(container.clone().fmap(|x| x), container);
    }

    /// Absence propagation: mapping Nothing is Nothing for any function
    #[test]
    fn prop_absence_propagates(offset in any::<i32>()) {
        let absent: Maybe<i32> = Maybe::nothing();
        prop_assert_eq!(absent.fmap(move |x| x.wrapping_add(offset)), Maybe::Nothing);
    }
}

// =============================================================================
// Deferred<In, Out> Property Tests (observed through resolution)
// =============================================================================

proptest! {
    /// Identity Law while pending: resolving fmap(identity) matches resolving
    /// the untouched deferred
    #[test]
    fn prop_deferred_pending_identity_law(input in any::<i32>()) {
        let mut mapped: Deferred<i32, i32> = Deferred::new().fmap(|x| x);
        let mut plain: Deferred<i32, i32> = Deferred::new();

        mapped.resolve(input);
        plain.resolve(input);

        prop_assert_eq!(mapped.state(), plain.state());
        prop_assert_eq!(mapped.try_value(), plain.try_value());
    }

    /// Composition Law while pending: chained maps equal a single fused map
    #[test]
    fn prop_deferred_pending_composition_law(input in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let mut chained: Deferred<i32, i32> = Deferred::new().fmap(function1).fmap(function2);
        let mut fused: Deferred<i32, i32> = Deferred::new().fmap(move |x| function2(function1(x)));

        chained.resolve(input);
        fused.resolve(input);

        prop_assert_eq!(chained.state(), fused.state());
        prop_assert_eq!(chained.try_value(), fused.try_value());
    }

    /// Identity Law once fulfilled
    #[test]
    fn prop_deferred_fulfilled_identity_law(value in any::<i32>()) {
        let deferred: Deferred<(), i32> = Deferred::fulfilled(value).fmap(|x| x);
        prop_assert_eq!(deferred.try_value(), Some(&value));
    }

    /// Composition Law once fulfilled
    #[test]
    fn prop_deferred_fulfilled_composition_law(value in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left: Deferred<(), i32> = Deferred::fulfilled(value).fmap(function1).fmap(function2);
        let right: Deferred<(), i32> =
            Deferred::fulfilled(value).fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left.try_value(), right.try_value());
    }

    /// Sentinel-to-failure holds for any accumulated transform
    #[test]
    fn prop_resolve_sentinel_always_fails(offset in any::<i32>()) {
        let mut deferred: Deferred<i32, i32> =
            Deferred::with_transform(move |x: i32| x.wrapping_add(offset));
        deferred.resolve(0);
        prop_assert!(deferred.is_failed());
    }

    /// Failure propagation: a failed deferred stays failed under any map
    #[test]
    fn prop_failure_propagates(offset in any::<i32>()) {
        let failed: Deferred<i32, i32> = Deferred::failed();
        prop_assert!(failed.fmap(move |x| x.wrapping_add(offset)).is_failed());
    }
}
