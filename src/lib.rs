//! # promissory
//!
//! Optional and deferred value containers with Functor and Applicative
//! combinators for synchronous code.
//!
//! ## Overview
//!
//! This library provides two closed algebraic containers and the generic
//! combinators to compose transformations over them without branching at
//! every call site:
//!
//! - **`Maybe<A>`**: a value that may be absent (`Just`/`Nothing`)
//! - **`Deferred<In, Out>`**: a value that is not yet known, eventually
//!   fulfilled or permanently failed
//! - **Type Classes**: `Functor` and `Applicative` traits implemented by
//!   both families, so calling code stays uniform across "maybe absent"
//!   and "not yet known" values
//! - **Point-free glue**: curried free functions (`mapping`, `lift`,
//!   `applying`) for building pipelines before a container exists
//!
//! "Deferred" means "value not yet supplied", not "asynchronous task":
//! there is no scheduler, thread, timer, or I/O anywhere in this crate.
//! `resolve` and `reject` are ordinary calls made by the owner.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative)
//! - `container`: The `Maybe` and `Deferred` families and the `Sentinel` policy
//! - `compose`: Point-free composition utilities
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use promissory::prelude::*;
//!
//! // A pending deferred accumulates transforms until resolved.
//! let mut total: Deferred<i32, i32> = Deferred::new();
//! total.map_in_place(|x| x + 1);
//! total.map_in_place(|x| x * 2);
//! total.resolve(3);
//! assert_eq!(total.value(), 8);
//!
//! // Sentinel-equal input routes to the empty shape.
//! assert_eq!(Maybe::from_raw(0), Maybe::<i32>::Nothing);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use promissory::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "container")]
    pub use crate::container::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "container")]
pub mod container;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        assert!(true);
    }
}
