//! The two closed container families.
//!
//! - [`Maybe`]: presence or absence of a value, decided at construction
//!   time and immutable thereafter
//! - [`Deferred`]: a value resolved later into success or permanent
//!   failure, accumulating transforms while pending
//! - [`DeferredEffect`]: the zero-payload mirror of [`Deferred`] for
//!   effect-only pipelines
//!
//! Raw values enter through the sentinel-aware construction helpers
//! (`from_raw`, `from_raw_by`), become container instances, are composed
//! through chained `map`/`apply` calls, and are eventually inspected or
//! resolved to obtain a terminal value.

mod deferred;
mod maybe;

pub use deferred::{Deferred, DeferredEffect, DeferredState};
pub use maybe::Maybe;
