#![cfg(all(feature = "compose", feature = "container"))]
//! Integration tests for the point-free glue.
//!
//! The curried forms must allow a pipeline to be assembled before any
//! container exists, then applied uniformly to either family.

use promissory::compose::{applying, compose, constant, fmap, identity, inspecting, lift, mapping};
use promissory::container::{Deferred, Maybe};
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

#[rstest]
fn pipeline_built_before_container_exists() {
    // Only the transformation is known here; no container yet.
    let describe = mapping(|n: i32| format!("value: {n}"));

    let present = describe(Maybe::just(7));
    assert_eq!(present, Maybe::just(String::from("value: 7")));
}

#[rstest]
fn same_pipeline_shape_for_both_families() {
    let double_maybe = mapping(|n: i32| n * 2);
    let double_deferred = mapping(|n: i32| n * 2);

    assert_eq!(double_maybe(Maybe::just(21)), Maybe::just(42));

    let mut deferred = double_deferred(Deferred::<i32, i32>::new());
    deferred.resolve(21);
    assert_eq!(deferred.value(), 42);
}

#[rstest]
fn free_fmap_is_uncurried_mapping() {
    assert_eq!(fmap(|n: i32| n + 1, Maybe::just(1)), Maybe::just(2));
    assert_eq!(fmap(|n: i32| n + 1, Maybe::nothing()), Maybe::<i32>::Nothing);
}

#[rstest]
fn lift_selects_family_by_type() {
    let present: Maybe<i32> = lift::<Maybe<()>, _>(42);
    assert_eq!(present, Maybe::just(42));

    let failed: Deferred<(), String> = lift::<Deferred<(), ()>, _>(String::new());
    assert!(failed.is_failed());

    let fulfilled: Deferred<(), String> = lift::<Deferred<(), ()>, _>(String::from("x"));
    assert_eq!(fulfilled.try_value(), Some(&String::from("x")));
}

#[rstest]
fn applying_waits_for_the_function_container() {
    let apply_to_ten = applying(Maybe::just(10));
    let halve: Maybe<fn(i32) -> i32> = Maybe::just(|x| x / 2);
    assert_eq!(apply_to_ten(halve), Maybe::just(5));
}

#[rstest]
fn inspecting_observes_without_reshaping() {
    let seen = Rc::new(Cell::new(0));
    let observer = Rc::clone(&seen);

    let observe = inspecting(move |n: &i32| observer.set(*n));
    assert_eq!(observe(Maybe::just(7)), Maybe::just(7));
    assert_eq!(seen.get(), 7);
}

#[rstest]
fn compose_matches_sequential_maps() {
    let f = |x: i32| x + 1;
    let g = |x: i32| x * 2;

    let fused = compose(g, f);
    assert_eq!(fused(3), 8);
    assert_eq!(Maybe::just(3).map(f).map(g), Maybe::just(8));
}

#[rstest]
fn combinator_basics() {
    assert_eq!(identity(42), 42);
    let always = constant::<_, i32>(9);
    assert_eq!(always(0), 9);
    assert_eq!(always(1), 9);
}
