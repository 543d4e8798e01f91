//! Type class traits shared by both container families.
//!
//! This module provides the capability contract that lets calling code stay
//! uniform across "maybe absent" and "not yet known" values:
//!
//! - [`Functor`]: Mapping over a contained value without changing the
//!   container's shape
//! - [`Applicative`]: Lifting a plain value into a container and applying a
//!   contained function to a contained value
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing us to define traits like Functor and Applicative
//! in a generic way.
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Sentinel`]: The per-type "zero/empty" value used by construction
//!   helpers to detect absence
//!
//! # Examples
//!
//! ```rust
//! use promissory::container::Maybe;
//! use promissory::typeclass::Functor;
//!
//! let present = Maybe::just(5);
//! assert_eq!(present.fmap(|n| n * 2), Maybe::just(10));
//!
//! let absent: Maybe<i32> = Maybe::nothing();
//! assert_eq!(absent.fmap(|n| n * 2), Maybe::nothing());
//! ```

mod applicative;
mod functor;
mod higher;
mod sentinel;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use sentinel::Sentinel;
