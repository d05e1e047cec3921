//! The capturing family: computations whose errors are caught selectively.
//!
//! `Attempt<A>` is either `Value(a, catch)` (Right) or
//! `Error(exception, trace)` (Left). A [`Catch`] is the allow-list of error
//! types a computation may fail with. [`Attempt::run`] executes a fallible
//! closure and captures the error only when the allow-list names its type;
//! any other error is handed back to the caller untouched.
//!
//! The allow-list travels with the value, so [`Attempt::try_fmap`] and
//! [`Attempt::try_bind`] capture the same error types as the original run.
//!
//! # Examples
//!
//! ```rust
//! use std::num::ParseIntError;
//!
//! use rightward::family::{Attempt, Catch, Exception};
//!
//! fn parse(input: &str) -> Result<i32, Exception> {
//!     Ok(input.parse::<i32>()?)
//! }
//!
//! let catch = Catch::new().of::<ParseIntError>();
//!
//! let parsed = Attempt::run(catch.clone(), || parse("42")).unwrap();
//! assert!(parsed.is_value());
//!
//! let captured = Attempt::run(catch, || parse("forty-two")).unwrap();
//! assert!(captured.is_error());
//! ```

use std::any::type_name;
use std::error::Error;
use std::fmt;

use crate::family::{Maybe, Outcome};
use crate::trace::{Failed, Trace};
use crate::typeclass::{
    Applicative, Either, Functor, Monad, RightBiased, ToMonad, TypeConstructor,
};

/// A boxed error as carried by [`Attempt::Error`].
pub type Exception = Box<dyn Error + Send + Sync + 'static>;

#[derive(Clone, Copy)]
struct Matcher {
    name: &'static str,
    accepts: fn(&(dyn Error + Send + Sync + 'static)) -> bool,
}

fn is_exception<T: Error + 'static>(exception: &(dyn Error + Send + Sync + 'static)) -> bool {
    exception.is::<T>()
}

/// The error types an [`Attempt`] captures.
///
/// Built up with [`of`](Self::of); [`Catch::any`] captures everything.
/// An empty allow-list captures nothing.
#[derive(Clone, Default)]
pub struct Catch {
    matchers: Vec<Matcher>,
    any: bool,
}

impl Catch {
    /// An empty allow-list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            matchers: Vec::new(),
            any: false,
        }
    }

    /// An allow-list that captures every error.
    #[inline]
    pub const fn any() -> Self {
        Self {
            matchers: Vec::new(),
            any: true,
        }
    }

    /// Adds `T` to the allow-list.
    #[must_use]
    pub fn of<T: Error + 'static>(mut self) -> Self {
        self.matchers.push(Matcher {
            name: type_name::<T>(),
            accepts: is_exception::<T>,
        });
        self
    }

    /// Whether `exception` is of an allow-listed type.
    pub fn catches(&self, exception: &(dyn Error + Send + Sync + 'static)) -> bool {
        self.any
            || self
                .matchers
                .iter()
                .any(|matcher| (matcher.accepts)(exception))
    }
}

impl fmt::Debug for Catch {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.any {
            return formatter.write_str("Catch(any)");
        }
        formatter
            .debug_tuple("Catch")
            .field(&self.matchers.iter().map(|matcher| matcher.name).collect::<Vec<_>>())
            .finish()
    }
}

/// The outcome of a computation run under a [`Catch`].
#[derive(Debug)]
pub enum Attempt<A> {
    /// The computation's value and the allow-list it ran under.
    Value(A, Catch),
    /// A captured error and where it was captured.
    Error(Exception, Trace),
}

impl<A> Attempt<A> {
    /// Runs `computation` under `catch`.
    ///
    /// # Errors
    ///
    /// Returns the computation's error unchanged when `catch` does not list
    /// its type.
    #[track_caller]
    pub fn run<F>(catch: Catch, computation: F) -> Result<Self, Exception>
    where
        F: FnOnce() -> Result<A, Exception>,
    {
        match computation() {
            Ok(value) => Ok(Self::Value(value, catch)),
            Err(exception) if catch.catches(exception.as_ref()) => {
                Ok(Self::Error(exception, Trace::caller()))
            }
            Err(exception) => Err(exception),
        }
    }

    /// A value that captures nothing in later `try_*` steps.
    #[inline]
    pub const fn succeeded(value: A) -> Self {
        Self::Value(value, Catch::new())
    }

    /// A captured error, recording the caller as its provenance.
    #[inline]
    #[track_caller]
    pub fn failed(exception: Exception) -> Self {
        Self::Error(exception, Trace::caller())
    }

    /// Returns `true` for `Value`.
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(..))
    }

    /// Returns `true` for `Error`.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(..))
    }

    /// Borrows the captured error, if any.
    pub fn exception(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Self::Value(..) => None,
            Self::Error(exception, _) => Some(exception.as_ref()),
        }
    }

    /// The allow-list of a `Value`.
    pub const fn catch(&self) -> Option<&Catch> {
        match self {
            Self::Value(_, catch) => Some(catch),
            Self::Error(..) => None,
        }
    }

    /// Maps the value with a fallible function, capturing its error under
    /// the same allow-list.
    ///
    /// # Errors
    ///
    /// Returns the function's error when the allow-list does not cover it.
    #[track_caller]
    pub fn try_fmap<B, F>(self, function: F) -> Result<Attempt<B>, Exception>
    where
        F: FnOnce(A) -> Result<B, Exception>,
    {
        match self {
            Self::Value(value, catch) => Attempt::run(catch, || function(value)),
            Self::Error(exception, trace) => Ok(Attempt::Error(exception, trace)),
        }
    }

    /// Chains a fallible step that itself produces an `Attempt`.
    ///
    /// # Errors
    ///
    /// Returns the step's error when the allow-list does not cover it.
    #[track_caller]
    pub fn try_bind<B, F>(self, function: F) -> Result<Attempt<B>, Exception>
    where
        F: FnOnce(A) -> Result<Attempt<B>, Exception>,
    {
        Ok(self.try_fmap(function)?.flatten())
    }

    /// Turns a captured error covered by `catch` back into a value.
    ///
    /// The recovered value keeps `catch` as its allow-list for later
    /// `try_*` steps. Errors outside `catch` and values are returned as is.
    ///
    /// ```rust
    /// use std::num::ParseIntError;
    /// use rightward::family::{Attempt, Catch};
    ///
    /// let failed: Attempt<i32> = Attempt::failed("oops".parse::<i32>().unwrap_err().into());
    /// let recovered = failed.recover(Catch::new().of::<ParseIntError>(), |_| 0);
    /// assert_eq!(recovered, Attempt::succeeded(0));
    /// ```
    pub fn recover<F>(self, catch: Catch, function: F) -> Self
    where
        F: FnOnce(Exception) -> A,
    {
        match self {
            Self::Error(exception, _) if catch.catches(exception.as_ref()) => {
                Self::Value(function(exception), catch)
            }
            other => other,
        }
    }

    /// Converts into an `Outcome` carrying the exception, keeping the trace.
    pub fn to_outcome(self) -> Outcome<A, Exception> {
        match self {
            Self::Value(value, _) => Outcome::Success(value),
            Self::Error(exception, trace) => Outcome::Failure(exception, trace),
        }
    }

    /// Drops the exception.
    pub fn to_maybe(self) -> Maybe<A> {
        match self {
            Self::Value(value, _) => Maybe::Just(value),
            Self::Error(..) => Maybe::Nothing,
        }
    }
}

impl<A> Attempt<Attempt<A>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Attempt<A> {
        self.bind(|inner| inner)
    }
}

/// Errors compare by their rendered form; allow-lists and traces are
/// ignored.
impl<A: PartialEq> PartialEq for Attempt<A> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(first, _), Self::Value(second, _)) => first == second,
            (Self::Error(first, _), Self::Error(second, _)) => {
                first.to_string() == second.to_string()
                    && format!("{first:?}") == format!("{second:?}")
            }
            _ => false,
        }
    }
}

impl<A> TypeConstructor for Attempt<A> {
    type Inner = A;
    type WithType<B> = Attempt<B>;
}

impl<A> RightBiased for Attempt<A> {
    type Left = Failed<Exception>;

    #[inline]
    fn from_right(value: A) -> Self {
        Self::succeeded(value)
    }

    #[inline]
    fn from_left(left: Failed<Exception>) -> Self {
        Self::Error(left.error, left.trace)
    }

    #[inline]
    fn into_either(self) -> Either<Failed<Exception>, A> {
        match self {
            Self::Value(value, _) => Either::Right(value),
            Self::Error(exception, trace) => Either::Left(Failed::with_trace(exception, trace)),
        }
    }

    #[inline]
    fn right_ref(&self) -> Option<&A> {
        match self {
            Self::Value(value, _) => Some(value),
            Self::Error(..) => None,
        }
    }
}

impl<A> Functor for Attempt<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Attempt<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Value(value, catch) => Attempt::Value(function(value), catch),
            Self::Error(exception, trace) => Attempt::Error(exception, trace),
        }
    }
}

impl<A> Applicative for Attempt<A> {
    #[inline]
    fn pure<B>(value: B) -> Attempt<B> {
        Attempt::succeeded(value)
    }

    fn map2<B, C, F>(self, other: Attempt<B>, function: F) -> Attempt<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Value(first, catch), Attempt::Value(second, _)) => {
                Attempt::Value(function(first, second), catch)
            }
            (Self::Error(exception, trace), _) | (_, Attempt::Error(exception, trace)) => {
                Attempt::Error(exception, trace)
            }
        }
    }
}

impl<A> Monad for Attempt<A> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Attempt<B>
    where
        F: FnOnce(A) -> Attempt<B>,
    {
        match self {
            Self::Value(value, _) => function(value),
            Self::Error(exception, trace) => Attempt::Error(exception, trace),
        }
    }
}

impl<A> ToMonad for Attempt<A> {
    type Monad = Self;

    #[inline]
    fn to_monad(self) -> Self {
        self
    }
}

static_assertions::assert_impl_all!(Attempt<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Attempt<i32>: Clone);
