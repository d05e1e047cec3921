//! The result family: success or failure with provenance.
//!
//! `Outcome<A, E>` is either `Success(a)` (Right) or `Failure(e, trace)`
//! (Left), where the [`Trace`] records which call built the failure. The
//! trace is diagnostic only and never takes part in equality.
//!
//! [`Constrained`] restricts which failure payloads are acceptable. The
//! check runs when the failure is built, so a bad payload is reported at the
//! construction site instead of surfacing later.
//!
//! # Examples
//!
//! ```rust
//! use rightward::family::Outcome;
//! use rightward::typeclass::{Functor, Monad};
//!
//! fn divide(numerator: i32, denominator: i32) -> Outcome<i32, String> {
//!     if denominator == 0 {
//!         Outcome::failure("division by zero".to_string())
//!     } else {
//!         Outcome::success(numerator / denominator)
//!     }
//! }
//!
//! assert_eq!(divide(10, 2).fmap(|n| n + 1), Outcome::success(6));
//! assert_eq!(
//!     divide(10, 0).bind(|n| divide(n, 1)),
//!     Outcome::failure("division by zero".to_string())
//! );
//! ```

use std::fmt;

use crate::error::InvalidFailureTypeError;
use crate::family::{Maybe, Validated};
use crate::trace::{Failed, Trace};
use crate::typeclass::{
    Applicative, Either, Functor, Monad, RightBiased, ToMonad, TypeConstructor,
};

/// A computation that either succeeded with `A` or failed with `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<A, E> {
    /// The success payload.
    Success(A),
    /// The failure payload and where it was constructed.
    Failure(E, Trace),
}

impl<A, E> Outcome<A, E> {
    /// Builds a success.
    #[inline]
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// Builds a failure, recording the caller as its provenance.
    #[inline]
    #[track_caller]
    pub fn failure(error: E) -> Self {
        Self::Failure(error, Trace::caller())
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(..))
    }

    /// Borrows the failure payload, if any.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error, _) => Some(error),
        }
    }

    /// The construction site of a failure.
    #[inline]
    pub const fn trace(&self) -> Option<Trace> {
        match self {
            Self::Success(_) => None,
            Self::Failure(_, trace) => Some(*trace),
        }
    }

    /// Transforms the failure payload, keeping its trace.
    ///
    /// ```rust
    /// use rightward::family::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::failure("io");
    /// assert_eq!(failure.map_failure(str::len), Outcome::failure(2));
    /// ```
    #[inline]
    pub fn map_failure<F, G>(self, function: G) -> Outcome<A, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error, trace) => Outcome::Failure(function(error), trace),
        }
    }

    /// Collapses both variants into one value.
    #[inline]
    pub fn either<T, S, F>(self, on_success: S, on_failure: F) -> T
    where
        S: FnOnce(A) -> T,
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error, _) => on_failure(error),
        }
    }

    /// Swaps the variants: a success becomes a failure and vice versa.
    #[inline]
    #[track_caller]
    pub fn flip(self) -> Outcome<E, A> {
        match self {
            Self::Success(value) => Outcome::failure(value),
            Self::Failure(error, _) => Outcome::Success(error),
        }
    }

    /// Drops the failure payload.
    #[inline]
    pub fn to_maybe(self) -> Maybe<A> {
        match self {
            Self::Success(value) => Maybe::Just(value),
            Self::Failure(..) => Maybe::Nothing,
        }
    }

    /// Reinterprets the value as a validation, keeping the trace.
    #[inline]
    pub fn to_validated(self) -> Validated<A, E> {
        match self {
            Self::Success(value) => Validated::Valid(value),
            Self::Failure(error, trace) => Validated::Invalid(error, trace),
        }
    }

    /// Converts into a standard `Result`, dropping the trace.
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error, _) => Err(error),
        }
    }
}

impl<A, E> Outcome<Outcome<A, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<A, E> {
        self.bind(|inner| inner)
    }
}

impl<A, E> From<Result<A, E>> for Outcome<A, E> {
    #[inline]
    #[track_caller]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<A, E> From<Outcome<A, E>> for Result<A, E> {
    #[inline]
    fn from(outcome: Outcome<A, E>) -> Self {
        outcome.into_result()
    }
}

impl<A, E> TypeConstructor for Outcome<A, E> {
    type Inner = A;
    type WithType<B> = Outcome<B, E>;
}

impl<A, E> RightBiased for Outcome<A, E> {
    type Left = Failed<E>;

    #[inline]
    fn from_right(value: A) -> Self {
        Self::Success(value)
    }

    #[inline]
    fn from_left(left: Failed<E>) -> Self {
        Self::Failure(left.error, left.trace)
    }

    #[inline]
    fn into_either(self) -> Either<Failed<E>, A> {
        match self {
            Self::Success(value) => Either::Right(value),
            Self::Failure(error, trace) => Either::Left(Failed::with_trace(error, trace)),
        }
    }

    #[inline]
    fn right_ref(&self) -> Option<&A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(..) => None,
        }
    }
}

impl<A, E> Functor for Outcome<A, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error, trace) => Outcome::Failure(error, trace),
        }
    }
}

impl<A, E> Applicative for Outcome<A, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Success(first), Outcome::Success(second)) => {
                Outcome::Success(function(first, second))
            }
            (Self::Failure(error, trace), _) | (_, Outcome::Failure(error, trace)) => {
                Outcome::Failure(error, trace)
            }
        }
    }
}

impl<A, E> Monad for Outcome<A, E> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(A) -> Outcome<B, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error, trace) => Outcome::Failure(error, trace),
        }
    }
}

impl<A, E> ToMonad for Outcome<A, E> {
    type Monad = Self;

    #[inline]
    fn to_monad(self) -> Self {
        self
    }
}

impl<A, E> ToMonad for Result<A, E> {
    type Monad = Outcome<A, E>;

    #[inline]
    #[track_caller]
    fn to_monad(self) -> Outcome<A, E> {
        Outcome::from(self)
    }
}

/// A failure-payload constraint for `Outcome`.
///
/// Failures built through [`Constrained::failure`] are checked immediately;
/// a payload the predicate rejects yields [`InvalidFailureTypeError`]
/// instead of an `Outcome`.
///
/// # Examples
///
/// ```rust
/// use std::error::Error;
/// use std::io;
///
/// use rightward::family::Constrained;
///
/// type BoxError = Box<dyn Error + Send + Sync>;
///
/// const IO_ONLY: Constrained<BoxError> =
///     Constrained::new("io::Error", |error: &BoxError| error.is::<io::Error>());
///
/// let accepted = IO_ONLY.failure::<()>(Box::new(io::Error::other("disk full")));
/// assert!(accepted.is_ok());
///
/// let rejected = IO_ONLY.failure::<()>("not io".into());
/// assert_eq!(rejected.unwrap_err().constraint, "io::Error");
/// ```
pub struct Constrained<E> {
    name: &'static str,
    accepts: fn(&E) -> bool,
}

impl<E> Constrained<E> {
    /// Declares a constraint called `name`, satisfied when `accepts` holds.
    #[inline]
    pub const fn new(name: &'static str, accepts: fn(&E) -> bool) -> Self {
        Self { name, accepts }
    }

    /// The constraint's name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `error` satisfies the constraint.
    #[inline]
    pub fn accepts(&self, error: &E) -> bool {
        (self.accepts)(error)
    }

    /// Builds a success; successes are never constrained.
    #[inline]
    pub const fn success<A>(&self, value: A) -> Outcome<A, E> {
        Outcome::Success(value)
    }

    /// Builds a failure if `error` satisfies the constraint.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFailureTypeError`] carrying `error` when the
    /// constraint rejects it.
    #[inline]
    #[track_caller]
    pub fn failure<A>(&self, error: E) -> Result<Outcome<A, E>, InvalidFailureTypeError<E>> {
        if self.accepts(&error) {
            Ok(Outcome::failure(error))
        } else {
            Err(InvalidFailureTypeError {
                constraint: self.name,
                payload: error,
            })
        }
    }

    /// Checks an existing value against the constraint.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFailureTypeError`] when `outcome` is a failure whose
    /// payload the constraint rejects.
    pub fn check<A>(&self, outcome: Outcome<A, E>) -> Result<Outcome<A, E>, InvalidFailureTypeError<E>> {
        match outcome {
            Outcome::Failure(error, _) if !self.accepts(&error) => Err(InvalidFailureTypeError {
                constraint: self.name,
                payload: error,
            }),
            other => Ok(other),
        }
    }
}

impl<E> Clone for Constrained<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Constrained<E> {}

impl<E> fmt::Debug for Constrained<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Constrained")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn failure_records_construction_site() {
        let failure: Outcome<i32, &str> = Outcome::failure("boom");
        let trace = failure.trace().expect("failure has a trace");
        assert!(trace.location().is_some_and(|location| location.file().ends_with("outcome.rs")));
    }

    #[rstest]
    fn equality_ignores_trace() {
        let first: Outcome<i32, &str> = Outcome::failure("boom");
        let second: Outcome<i32, &str> = Outcome::Failure("boom", Trace::none());
        assert_eq!(first, second);
    }

    #[rstest]
    fn right_identity_law() {
        let identity = |n: i32| Outcome::<i32, &str>::success(n);
        assert_eq!(Outcome::success(5).bind(identity), identity(5));
    }

    #[rstest]
    fn failure_absorbs_combinators() {
        let failure: Outcome<i32, &str> = Outcome::failure("x");
        assert_eq!(failure.fmap(|n| n * 2), failure);
        assert_eq!(failure.bind(|n| Outcome::success(n * 2)), failure);
        assert_eq!(
            Outcome::<fn(i32) -> i32, &str>::failure("x").apply(Outcome::success(1)),
            failure
        );
    }

    #[rstest]
    fn apply_propagates_failed_argument() {
        let function = Outcome::<fn(i32) -> i32, &str>::success(|n| n + 1);
        assert_eq!(function.apply(Outcome::failure("arg")), Outcome::failure("arg"));
    }

    #[rstest]
    fn map2_keeps_leftmost_failure() {
        let first: Outcome<i32, &str> = Outcome::failure("first");
        let second: Outcome<i32, &str> = Outcome::failure("second");
        assert_eq!(first.map2(second, |a, b| a + b), Outcome::failure("first"));
    }

    #[rstest]
    fn and_pairs_successes() {
        let pair = Outcome::<_, &str>::success(1).and(Outcome::success("one"));
        assert_eq!(pair, Outcome::success((1, "one")));
    }

    #[rstest]
    fn or_else_receives_failed_payload() {
        let recovered = Outcome::<usize, &str>::failure("four").or_else(|failed| {
            Outcome::success(failed.error.len())
        });
        assert_eq!(recovered, Outcome::success(4));
    }

    #[rstest]
    fn value_or_else_uses_failure() {
        let failure: Outcome<usize, &str> = Outcome::failure("abc");
        assert_eq!(failure.value_or_else(|failed| failed.error.len()), 3);
    }

    #[rstest]
    fn flatten_removes_one_level() {
        let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::failure("in"));
        assert_eq!(nested.flatten(), Outcome::failure("in"));
    }

    #[rstest]
    fn flip_swaps_variants() {
        assert_eq!(Outcome::<i32, &str>::success(1).flip(), Outcome::failure(1));
        assert_eq!(Outcome::<i32, &str>::failure("e").flip(), Outcome::success("e"));
    }

    #[rstest]
    fn result_round_trip() {
        let outcome: Outcome<i32, &str> = Err("e").into();
        assert_eq!(outcome, Outcome::failure("e"));
        assert_eq!(Result::from(outcome), Err("e"));
    }

    #[rstest]
    fn conversions_keep_payloads() {
        let failure: Outcome<i32, &str> = Outcome::failure("e");
        assert_eq!(failure.to_maybe(), Maybe::Nothing);
        assert_eq!(failure.to_validated(), Validated::invalid("e"));
        assert_eq!(failure.either(|n| n.to_string(), str::to_uppercase), "E");
    }

    #[rstest]
    fn constrained_accepts_matching_payload() {
        let negative = Constrained::new("negative", |code: &i32| *code < 0);
        assert_eq!(negative.failure::<()>(-1), Ok(Outcome::failure(-1)));
        assert_eq!(negative.success::<&str>("ok"), Outcome::success("ok"));
    }

    #[rstest]
    fn constrained_rejects_at_construction() {
        let negative = Constrained::new("negative", |code: &i32| *code < 0);
        let error = negative.failure::<()>(3).unwrap_err();
        assert_eq!(error.constraint, "negative");
        assert_eq!(error.payload, 3);
    }

    #[rstest]
    fn constrained_check_validates_existing_values() {
        let negative = Constrained::new("negative", |code: &i32| *code < 0);
        assert!(negative.check(Outcome::<(), i32>::failure(5)).is_err());
        assert!(negative.check(Outcome::<(), i32>::success(())).is_ok());
    }
}
