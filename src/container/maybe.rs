//! Maybe type - a value that may be absent.
//!
//! This module provides the `Maybe<A>` type, a closed variant representing
//! presence (`Just`) or absence (`Nothing`) of a value. Absence is detected
//! structurally by the variant tag; the construction helpers additionally
//! route a sentinel-equal raw input (`0`, the empty string, `None`) to
//! `Nothing` so call sites can wrap host values without branching.
//!
//! # Examples
//!
//! ```rust
//! use promissory::container::Maybe;
//!
//! // Structural constructors bypass the sentinel policy entirely
//! let zero = Maybe::just(0);
//! assert!(zero.is_just());
//!
//! // Construction helpers route the sentinel to Nothing
//! let absent = Maybe::from_raw(0);
//! assert!(absent.is_nothing());
//!
//! // Composition without branching
//! let result = Maybe::from_raw(21).map(|n| n * 2);
//! assert_eq!(result, Maybe::just(42));
//! ```

use crate::typeclass::{Applicative, Functor, Sentinel, TypeConstructor};

/// A value that may be absent.
///
/// `Maybe<A>` is either `Just(value)` or `Nothing`. A `Just` is immutable
/// once constructed; `Nothing` carries no payload. Every operation is total:
/// mapping or applying over `Nothing` is a defined no-op returning `Nothing`.
///
/// The original host relied on implicit boolean coercion of the container;
/// here presence is observed through the explicit predicates
/// [`is_just`](Self::is_just) and [`is_nothing`](Self::is_nothing) or by
/// pattern matching on the tag.
///
/// # Examples
///
/// ```rust
/// use promissory::container::Maybe;
///
/// let name = Maybe::from_raw(String::from("ada"));
/// let greeting = name.map(|n| format!("hello, {n}"));
/// assert_eq!(greeting, Maybe::just(String::from("hello, ada")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Maybe<A> {
    /// A present value.
    Just(A),
    /// The absence of a value.
    #[default]
    Nothing,
}

impl<A> Maybe<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a definitely-present value, bypassing the sentinel policy.
    ///
    /// Use this when a value equal to the sentinel (a real `0`, an empty
    /// string) must still count as present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    ///
    /// assert!(Maybe::just(0).is_just());
    /// ```
    #[inline]
    pub const fn just(value: A) -> Self {
        Self::Just(value)
    }

    /// Creates an absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// assert!(absent.is_nothing());
    /// ```
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Wraps a possibly-absent raw value under the type's sentinel policy.
    ///
    /// A sentinel-equal input becomes `Nothing`; any other input becomes
    /// `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    ///
    /// assert_eq!(Maybe::from_raw(0), Maybe::<i32>::Nothing);
    /// assert_eq!(Maybe::from_raw(7), Maybe::just(7));
    /// assert_eq!(Maybe::from_raw(String::new()), Maybe::<String>::Nothing);
    /// ```
    #[inline]
    pub fn from_raw(value: A) -> Self
    where
        A: Sentinel,
    {
        if value.is_sentinel() {
            Self::Nothing
        } else {
            Self::Just(value)
        }
    }

    /// Wraps a raw value, substituting a default when the input is absent.
    ///
    /// A sentinel-equal input becomes `Just(default())`; any other input is
    /// preserved as `Just(value)`. The default is substituted *only* when
    /// the input equals the sentinel — a non-empty input is always kept.
    ///
    /// This constructor can never yield `Nothing`. That is intentional but
    /// surprising: the result is always present, so callers that need to
    /// observe absence must use [`from_raw`](Self::from_raw) instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    ///
    /// assert_eq!(Maybe::from_raw_or(0, || 42), Maybe::just(42));
    /// assert_eq!(Maybe::from_raw_or(7, || 42), Maybe::just(7));
    /// ```
    #[inline]
    pub fn from_raw_or<F>(value: A, default: F) -> Self
    where
        A: Sentinel,
        F: FnOnce() -> A,
    {
        if value.is_sentinel() {
            Self::Just(default())
        } else {
            Self::Just(value)
        }
    }

    /// Wraps a raw value under an explicit absence policy.
    ///
    /// The closure decides absence instead of the type's [`Sentinel`]
    /// implementation. Use this when a legitimate value collides with the
    /// conventional sentinel, or when a type has no `Sentinel` impl.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    ///
    /// // Treat negative readings as absent, but keep a real zero
    /// assert_eq!(Maybe::from_raw_by(0, |n| *n < 0), Maybe::just(0));
    /// assert_eq!(Maybe::from_raw_by(-1, |n| *n < 0), Maybe::<i32>::Nothing);
    /// ```
    #[inline]
    pub fn from_raw_by<F>(value: A, is_absent: F) -> Self
    where
        F: FnOnce(&A) -> bool,
    {
        if is_absent(&value) {
            Self::Nothing
        } else {
            Self::Just(value)
        }
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    ///
    /// assert!(Maybe::just(5).is_just());
    /// assert!(!Maybe::<i32>::nothing().is_just());
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    ///
    /// assert!(Maybe::<i32>::nothing().is_nothing());
    /// assert!(!Maybe::just(5).is_nothing());
    /// ```
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the contained value if present.
    ///
    /// `Just(v)` becomes `Just(function(v))`; `Nothing` stays `Nothing`
    /// without invoking the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).map(|n| n * 2), Maybe::just(10));
    /// assert_eq!(Maybe::<i32>::nothing().map(|n| n * 2), Maybe::nothing());
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Runs an effect against the contained value, returning the container
    /// unchanged in shape.
    ///
    /// On `Just`, the effect receives a reference to the value; on
    /// `Nothing`, nothing runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    /// use std::cell::Cell;
    ///
    /// let seen = Cell::new(0);
    /// let kept = Maybe::just(5).inspect(|n| seen.set(*n));
    /// assert_eq!(kept, Maybe::just(5));
    /// assert_eq!(seen.get(), 5);
    /// ```
    #[inline]
    pub fn inspect<F>(self, effect: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Self::Just(value) = &self {
            effect(value);
        }
        self
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the container by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    ///
    /// let present = Maybe::just(5).fold(|| String::from("absent"), |n| n.to_string());
    /// assert_eq!(present, "5");
    ///
    /// let absent = Maybe::<i32>::nothing().fold(|| String::from("absent"), |n| n.to_string());
    /// assert_eq!(absent, "absent");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_nothing: F, on_just: G) -> T
    where
        F: FnOnce() -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    /// Returns a reference to the contained value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).just_ref(), Some(&5));
    /// assert_eq!(Maybe::<i32>::nothing().just_ref(), None);
    /// ```
    #[inline]
    pub const fn just_ref(&self) -> Option<&A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Returns the contained value, or the given default when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).unwrap_or(0), 5);
    /// assert_eq!(Maybe::nothing().unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns a clone of the contained value, or the type's sentinel when
    /// absent. Total: never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).value(), 5);
    /// assert_eq!(Maybe::<i32>::nothing().value(), 0);
    /// ```
    #[inline]
    pub fn value(&self) -> A
    where
        A: Sentinel + Clone,
    {
        match self {
            Self::Just(value) => value.clone(),
            Self::Nothing => A::sentinel(),
        }
    }

    /// Returns the contained value, consuming the container.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).unwrap_just(), 5);
    /// ```
    #[inline]
    pub fn unwrap_just(self) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("called `Maybe::unwrap_just()` on a `Nothing` value"),
        }
    }
}

// =============================================================================
// Host interop
// =============================================================================

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(value: Option<A>) -> Self {
        match value {
            Some(inner) => Self::Just(inner),
            None => Self::Nothing,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(value: Maybe<A>) -> Self {
        match value {
            Maybe::Just(inner) => Some(inner),
            Maybe::Nothing => None,
        }
    }
}

// =============================================================================
// Type class instances
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B>
    where
        B: Sentinel + 'static,
    {
        Maybe::from_raw(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        match (self, other) {
            (Self::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output + 'static,
        B: 'static,
        Output: 'static,
    {
        // An absent function short-circuits before the value container is
        // inspected.
        match self {
            Self::Just(function) => other.map(function),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Clone, Copy, Send, Sync);
