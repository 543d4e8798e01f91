//! Deferred type - a value resolved later into success or permanent failure.
//!
//! This module provides `Deferred<In, Out>`, a closed three-state variant
//! for values that are not yet known, and `DeferredEffect`, its zero-payload
//! mirror for effect-only pipelines.
//!
//! "Deferred" means "value not yet supplied", not "asynchronous task":
//! `resolve` and `reject` are ordinary calls made by whichever single owner
//! holds the instance. Nothing here suspends, blocks, or involves a
//! scheduler.
//!
//! # State machine
//!
//! ```text
//! Pending   --map(g)-->                    Pending      (transform := g ∘ transform)
//! Pending   --resolve(v), v = sentinel-->  Failed
//! Pending   --resolve(v), v ≠ sentinel-->  Fulfilled(transform(v))
//! Pending   --reject()-->                  Failed
//! Fulfilled --map(g)-->                    Fulfilled(g(value))
//! Fulfilled --resolve(_) / reject()-->     Fulfilled    (no-op)
//! Failed    --map(g) / resolve(_) / reject()--> Failed  (no-op)
//! ```
//!
//! While pending, each `map` composes its function after the accumulated
//! transform instead of registering a callback: function composition is
//! associative, so applied `map` calls run in call order when the input
//! finally arrives. Cost is O(1) per `map` while pending and a single
//! composed application at resolution time.
//!
//! # Examples
//!
//! ```rust
//! use promissory::container::Deferred;
//!
//! let mut total: Deferred<i32, i32> = Deferred::new();
//! total.map_in_place(|x| x + 1);
//! total.map_in_place(|x| x * 2);
//! total.resolve(3);
//! assert_eq!(total.value(), 8);
//! ```

use std::fmt;
use std::mem;

use crate::typeclass::{Applicative, Functor, Sentinel, TypeConstructor};

/// The tagged state held by the deferred slot.
enum State<In, Out> {
    /// Awaiting input; holds the accumulated transform.
    Pending(Box<dyn FnOnce(In) -> Out>),
    /// Terminal success.
    Fulfilled(Out),
    /// Terminal failure; no payload.
    Failed,
}

/// An observation of a deferred's current state.
///
/// `Deferred` cannot derive `PartialEq` (a pending instance holds an opaque
/// transform), so predicates and tests compare this tag instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredState {
    /// Awaiting input.
    Pending,
    /// Terminal success.
    Fulfilled,
    /// Terminal failure.
    Failed,
}

/// A value that is not yet known, eventually fulfilled or permanently failed.
///
/// A `Deferred<In, Out>` starts `Pending`, accumulating transforms from
/// `In` to `Out` as `map` calls arrive, then transitions exactly once into
/// a terminal state when its single owner calls [`resolve`](Self::resolve)
/// or [`reject`](Self::reject). Terminal transitions are irreversible;
/// every operation on a terminal instance is a defined no-op, never a
/// panic.
///
/// The whole container is a single owned, reassignable slot: the mutating
/// operations take `&mut self` and overwrite the slot's contents, which
/// encodes the single-owner, single-thread model in the type system. The
/// type is not `Sync`; sharing a pending instance across threads would
/// require external synchronization and is out of scope.
///
/// # Examples
///
/// ```rust
/// use promissory::container::Deferred;
///
/// let mut parsed: Deferred<String, usize> = Deferred::with_transform(|s: String| s.len());
/// parsed.resolve(String::from("hello"));
/// assert_eq!(parsed.value(), 5);
///
/// // A sentinel input fails the deferred instead of fulfilling it
/// let mut empty: Deferred<String, usize> = Deferred::with_transform(|s: String| s.len());
/// empty.resolve(String::new());
/// assert!(empty.is_failed());
/// ```
pub struct Deferred<In, Out = In> {
    state: State<In, Out>,
}

impl<In: 'static> Deferred<In, In> {
    /// Creates a pending deferred holding the identity transform.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Deferred;
    ///
    /// let mut deferred: Deferred<i32, i32> = Deferred::new();
    /// deferred.resolve(7);
    /// assert_eq!(deferred.value(), 7);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_transform(std::convert::identity)
    }
}

impl<In: 'static> Default for Deferred<In, In> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<In: 'static, Out: 'static> Deferred<In, Out> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a pending deferred with a caller-supplied transform.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Deferred;
    ///
    /// let mut parsed: Deferred<String, usize> = Deferred::with_transform(|s: String| s.len());
    /// parsed.resolve(String::from("four"));
    /// assert_eq!(parsed.value(), 4);
    /// ```
    #[inline]
    pub fn with_transform<F>(transform: F) -> Self
    where
        F: FnOnce(In) -> Out + 'static,
    {
        Self {
            state: State::Pending(Box::new(transform)),
        }
    }

    /// Creates a deferred that is already fulfilled, bypassing the sentinel
    /// policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Deferred;
    ///
    /// let ready: Deferred<(), i32> = Deferred::fulfilled(0);
    /// assert!(ready.is_fulfilled());
    /// ```
    #[inline]
    pub const fn fulfilled(value: Out) -> Self {
        Self {
            state: State::Fulfilled(value),
        }
    }

    /// Creates a deferred that has already failed.
    #[inline]
    pub const fn failed() -> Self {
        Self {
            state: State::Failed,
        }
    }

    /// Wraps a possibly-absent raw value as a terminal deferred under the
    /// type's sentinel policy.
    ///
    /// A sentinel-equal input produces `Failed`; any other input produces
    /// `Fulfilled`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Deferred;
    ///
    /// let present: Deferred<(), i32> = Deferred::from_raw(7);
    /// assert_eq!(present.value(), 7);
    ///
    /// let absent: Deferred<(), i32> = Deferred::from_raw(0);
    /// assert!(absent.is_failed());
    /// ```
    #[inline]
    pub fn from_raw(value: Out) -> Self
    where
        Out: Sentinel,
    {
        if value.is_sentinel() {
            Self::failed()
        } else {
            Self::fulfilled(value)
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the eventual value, consuming the deferred.
    ///
    /// While pending, the function is composed after the accumulated
    /// transform and runs when the input arrives. When fulfilled, the
    /// function is applied to the stored value immediately. When failed,
    /// the result is failed and the function is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Deferred;
    ///
    /// let deferred: Deferred<i32, i32> = Deferred::new();
    /// let mut labeled = deferred.map(|n| format!("n={n}"));
    /// labeled.resolve(3);
    /// assert_eq!(labeled.value(), "n=3");
    /// ```
    #[inline]
    pub fn map<C, G>(self, function: G) -> Deferred<In, C>
    where
        G: FnOnce(Out) -> C + 'static,
        C: 'static,
    {
        let state: State<In, C> = match self.state {
            State::Pending(transform) => {
                State::Pending(Box::new(move |input| function(transform(input))))
            }
            State::Fulfilled(value) => State::Fulfilled(function(value)),
            State::Failed => State::Failed,
        };
        Deferred { state }
    }

    /// Applies an endomorphic function to the eventual value in place.
    ///
    /// This is the mutation the original exposed on a shared pending
    /// instance: the slot is overwritten rather than a new container
    /// returned, so every holder of the `&mut` borrow observes the
    /// composed transform.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Deferred;
    ///
    /// let mut deferred: Deferred<i32, i32> = Deferred::new();
    /// deferred.map_in_place(|x| x + 1);
    /// deferred.map_in_place(|x| x * 2);
    /// deferred.resolve(3);
    /// assert_eq!(deferred.value(), 8);
    /// ```
    pub fn map_in_place<G>(&mut self, function: G)
    where
        G: FnOnce(Out) -> Out + 'static,
    {
        // The slot briefly holds Failed while the replacement is built; a
        // panicking function leaves it there.
        let state = mem::replace(&mut self.state, State::Failed);
        self.state = match state {
            State::Pending(transform) => {
                State::Pending(Box::new(move |input| function(transform(input))))
            }
            State::Fulfilled(value) => State::Fulfilled(function(value)),
            State::Failed => State::Failed,
        };
    }

    /// Runs an effect against the eventual value without replacing it.
    ///
    /// While pending, the effect is composed after the accumulated
    /// transform and observes the computed value at resolution time. When
    /// fulfilled, the effect runs immediately against the stored value.
    /// When failed, nothing runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Deferred;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let seen = Rc::new(Cell::new(0));
    /// let observer = Rc::clone(&seen);
    ///
    /// let mut deferred: Deferred<i32, i32> = Deferred::new();
    /// deferred.inspect(move |n| observer.set(*n));
    /// assert_eq!(seen.get(), 0); // nothing yet
    ///
    /// deferred.resolve(7);
    /// assert_eq!(seen.get(), 7);
    /// ```
    pub fn inspect<G>(&mut self, effect: G)
    where
        G: FnOnce(&Out) + 'static,
    {
        let state = mem::replace(&mut self.state, State::Failed);
        self.state = match state {
            State::Pending(transform) => State::Pending(Box::new(move |input| {
                let value = transform(input);
                effect(&value);
                value
            })),
            State::Fulfilled(value) => {
                effect(&value);
                State::Fulfilled(value)
            }
            State::Failed => State::Failed,
        };
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Supplies the input, transitioning a pending deferred into a terminal
    /// state under the input type's sentinel policy.
    ///
    /// A sentinel-equal input fails the deferred regardless of the
    /// accumulated transform; any other input fulfils it with
    /// `transform(input)`. On a terminal instance this is an idempotent
    /// no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Deferred;
    ///
    /// let mut deferred: Deferred<i32, i32> = Deferred::new();
    /// deferred.resolve(0); // sentinel
    /// assert!(deferred.is_failed());
    /// ```
    #[inline]
    pub fn resolve(&mut self, input: In)
    where
        In: Sentinel,
    {
        self.resolve_by(input, Sentinel::is_sentinel);
    }

    /// Supplies the input under an explicit absence policy.
    ///
    /// The closure decides whether the input counts as absent instead of
    /// the input type's [`Sentinel`] implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Deferred;
    ///
    /// // A real zero is a legitimate reading here
    /// let mut reading: Deferred<i32, i32> = Deferred::new();
    /// reading.resolve_by(0, |n| *n < 0);
    /// assert_eq!(reading.try_value(), Some(&0));
    /// ```
    pub fn resolve_by<F>(&mut self, input: In, is_absent: F)
    where
        F: FnOnce(&In) -> bool,
    {
        if !matches!(self.state, State::Pending(_)) {
            return;
        }
        let state = mem::replace(&mut self.state, State::Failed);
        if let State::Pending(transform) = state {
            if !is_absent(&input) {
                self.state = State::Fulfilled(transform(input));
            }
        }
    }

    /// Forces a pending deferred into the failed state.
    ///
    /// Idempotent: a terminal instance (fulfilled or failed) is left
    /// unchanged, matching the terminal-immutability invariant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Deferred;
    ///
    /// let mut deferred: Deferred<i32, i32> = Deferred::new();
    /// deferred.reject();
    /// deferred.resolve(7); // ignored
    /// assert!(deferred.is_failed());
    /// ```
    #[inline]
    pub fn reject(&mut self) {
        if matches!(self.state, State::Pending(_)) {
            self.state = State::Failed;
        }
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Returns a clone of the payload if fulfilled, or the output type's
    /// sentinel otherwise. Total: never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::container::Deferred;
    ///
    /// let pending: Deferred<i32, i32> = Deferred::new();
    /// assert_eq!(pending.value(), 0);
    ///
    /// let done: Deferred<i32, i32> = Deferred::fulfilled(7);
    /// assert_eq!(done.value(), 7);
    /// ```
    #[inline]
    pub fn value(&self) -> Out
    where
        Out: Sentinel + Clone,
    {
        match &self.state {
            State::Fulfilled(value) => value.clone(),
            State::Pending(_) | State::Failed => Out::sentinel(),
        }
    }

    /// Returns a reference to the payload if fulfilled.
    #[inline]
    pub const fn try_value(&self) -> Option<&Out> {
        match &self.state {
            State::Fulfilled(value) => Some(value),
            State::Pending(_) | State::Failed => None,
        }
    }

    /// Returns the current state tag.
    #[inline]
    pub const fn state(&self) -> DeferredState {
        match self.state {
            State::Pending(_) => DeferredState::Pending,
            State::Fulfilled(_) => DeferredState::Fulfilled,
            State::Failed => DeferredState::Failed,
        }
    }

    /// Returns `true` while awaiting input.
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending(_))
    }

    /// Returns `true` once fulfilled.
    #[inline]
    pub const fn is_fulfilled(&self) -> bool {
        matches!(self.state, State::Fulfilled(_))
    }

    /// Returns `true` once failed.
    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self.state, State::Failed)
    }
}

impl<In, Out: fmt::Debug> fmt::Debug for Deferred<In, Out> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Pending(_) => formatter.write_str("Deferred::Pending"),
            State::Fulfilled(value) => formatter
                .debug_tuple("Deferred::Fulfilled")
                .field(value)
                .finish(),
            State::Failed => formatter.write_str("Deferred::Failed"),
        }
    }
}

// =============================================================================
// Type class instances
// =============================================================================

impl<In, Out> TypeConstructor for Deferred<In, Out> {
    type Inner = Out;
    type WithType<B> = Deferred<In, B>;
}

impl<In: 'static, Out: 'static> Functor for Deferred<In, Out> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Deferred<In, B>
    where
        F: FnOnce(Out) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

/// The applicative instance combines two deferreds sharing the same input
/// type. Two pendings feed one (cloned) input through both accumulated
/// transforms at resolution time; a fulfilled side closes over its payload;
/// a failed side wins immediately.
impl<In: Clone + 'static, Out: 'static> Applicative for Deferred<In, Out> {
    #[inline]
    fn pure<B>(value: B) -> Deferred<In, B>
    where
        B: Sentinel + 'static,
    {
        Deferred::from_raw(value)
    }

    fn map2<B, C, F>(self, other: Deferred<In, B>, function: F) -> Deferred<In, C>
    where
        F: FnOnce(Out, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        match (self.state, other.state) {
            (State::Failed, _) | (_, State::Failed) => Deferred::failed(),
            (State::Fulfilled(a), State::Fulfilled(b)) => Deferred::fulfilled(function(a, b)),
            (State::Fulfilled(a), State::Pending(other_transform)) => {
                Deferred::with_transform(move |input| function(a, other_transform(input)))
            }
            (State::Pending(transform), State::Fulfilled(b)) => {
                Deferred::with_transform(move |input| function(transform(input), b))
            }
            (State::Pending(transform), State::Pending(other_transform)) => {
                Deferred::with_transform(move |input: In| {
                    let a = transform(input.clone());
                    function(a, other_transform(input))
                })
            }
        }
    }

    fn apply<B, Output>(self, other: Deferred<In, B>) -> Deferred<In, Output>
    where
        Out: FnOnce(B) -> Output + 'static,
        B: 'static,
        Output: 'static,
    {
        // A failed function container short-circuits before the value
        // container is inspected.
        match self.state {
            State::Failed => Deferred::failed(),
            State::Fulfilled(function) => other.map(function),
            State::Pending(transform) => match other.state {
                State::Failed => Deferred::failed(),
                State::Fulfilled(value) => {
                    Deferred::with_transform(move |input| transform(input)(value))
                }
                State::Pending(other_transform) => Deferred::with_transform(move |input: In| {
                    let function = transform(input.clone());
                    function(other_transform(input))
                }),
            },
        }
    }
}

// =============================================================================
// DeferredEffect - the zero-payload mirror
// =============================================================================

/// The tagged state held by the effect slot.
enum EffectState {
    /// Awaiting resolution; holds the accumulated effect.
    Pending(Box<dyn FnOnce()>),
    /// Terminal success; the accumulated effect has run.
    Done,
    /// Terminal failure; the accumulated effect was discarded.
    Failed,
}

/// A side-effecting deferred with no output value.
///
/// `DeferredEffect` mirrors the [`Deferred`] state machine, restricted to
/// effectful transforms: while pending, [`then`](Self::then) composes
/// effects in call order; [`resolve`](Self::resolve) runs the accumulated
/// effect exactly once and enters the done state; [`reject`](Self::reject)
/// discards it. There is no input and therefore no sentinel check.
///
/// # Examples
///
/// ```rust
/// use promissory::container::DeferredEffect;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let log = Rc::new(Cell::new(0));
/// let first = Rc::clone(&log);
/// let second = Rc::clone(&log);
///
/// let mut effect = DeferredEffect::new(move || first.set(first.get() + 1));
/// effect.then(move || second.set(second.get() * 10));
/// assert_eq!(log.get(), 0); // nothing has run
///
/// effect.resolve();
/// assert_eq!(log.get(), 10); // (0 + 1) * 10, in call order
/// ```
pub struct DeferredEffect {
    state: EffectState,
}

impl DeferredEffect {
    /// Creates a pending effect.
    #[inline]
    pub fn new<F>(effect: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            state: EffectState::Pending(Box::new(effect)),
        }
    }

    /// Creates an effect that is already done.
    #[inline]
    pub const fn ready() -> Self {
        Self {
            state: EffectState::Done,
        }
    }

    /// Creates an effect that has already failed.
    #[inline]
    pub const fn failed() -> Self {
        Self {
            state: EffectState::Failed,
        }
    }

    /// Chains a further effect.
    ///
    /// While pending, the effect is composed after the accumulated one and
    /// runs at resolution time. Once done, the effect runs immediately.
    /// Once failed, nothing runs.
    pub fn then<F>(&mut self, effect: F)
    where
        F: FnOnce() + 'static,
    {
        match mem::replace(&mut self.state, EffectState::Failed) {
            EffectState::Pending(accumulated) => {
                self.state = EffectState::Pending(Box::new(move || {
                    accumulated();
                    effect();
                }));
            }
            EffectState::Done => {
                self.state = EffectState::Done;
                effect();
            }
            EffectState::Failed => {}
        }
    }

    /// Runs the accumulated effect exactly once and enters the done state.
    ///
    /// Idempotent: a terminal instance is left unchanged and nothing runs
    /// again.
    pub fn resolve(&mut self) {
        if !matches!(self.state, EffectState::Pending(_)) {
            return;
        }
        if let EffectState::Pending(accumulated) = mem::replace(&mut self.state, EffectState::Done)
        {
            accumulated();
        }
    }

    /// Discards the accumulated effect and enters the failed state.
    ///
    /// Idempotent: a terminal instance is left unchanged.
    #[inline]
    pub fn reject(&mut self) {
        if matches!(self.state, EffectState::Pending(_)) {
            self.state = EffectState::Failed;
        }
    }

    /// Returns `true` while awaiting resolution.
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self.state, EffectState::Pending(_))
    }

    /// Returns `true` once the accumulated effect has run.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self.state, EffectState::Done)
    }

    /// Returns `true` once failed.
    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self.state, EffectState::Failed)
    }
}

impl fmt::Debug for DeferredEffect {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            EffectState::Pending(_) => formatter.write_str("DeferredEffect::Pending"),
            EffectState::Done => formatter.write_str("DeferredEffect::Done"),
            EffectState::Failed => formatter.write_str("DeferredEffect::Failed"),
        }
    }
}

static_assertions::assert_impl_all!(DeferredState: Clone, Copy, Send, Sync);
