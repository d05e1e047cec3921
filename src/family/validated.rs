//! The accumulating family: validation that collects every error.
//!
//! `Validated<A, E>` is either `Valid(a)` (Right) or `Invalid(e, trace)`
//! (Left). Unlike the other families, combining two invalid values with
//! [`map2`](crate::typeclass::Applicative::map2) keeps both errors,
//! appended through [`Semigroup`]. Because a dependent step cannot run
//! without the previous value, `Validated` has no `bind`: it implements
//! [`Applicative`] but not [`Monad`](crate::typeclass::Monad).
//!
//! # Examples
//!
//! ```rust
//! use rightward::family::Validated;
//! use rightward::typeclass::Applicative;
//!
//! fn name(input: &str) -> Validated<String, Vec<String>> {
//!     if input.is_empty() {
//!         Validated::invalid(vec!["name is empty".to_string()])
//!     } else {
//!         Validated::valid(input.to_string())
//!     }
//! }
//!
//! fn age(input: u32) -> Validated<u32, Vec<String>> {
//!     if input > 150 {
//!         Validated::invalid(vec![format!("age {input} is implausible")])
//!     } else {
//!         Validated::valid(input)
//!     }
//! }
//!
//! let person = name("").map2(age(200), |name, age| (name, age));
//! assert_eq!(
//!     person,
//!     Validated::invalid(vec!["name is empty".to_string(), "age 200 is implausible".to_string()])
//! );
//! ```

use crate::family::{Maybe, Outcome};
use crate::trace::{Failed, Trace};
use crate::typeclass::{
    Applicative, Either, Functor, RightBiased, Semigroup, ToMonad, TypeConstructor,
};

/// A validated value or the errors that invalidated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validated<A, E> {
    /// The validated value.
    Valid(A),
    /// The errors and where the first of them was reported.
    Invalid(E, Trace),
}

impl<A, E> Validated<A, E> {
    /// Builds a valid value.
    #[inline]
    pub const fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Builds an invalid value, recording the caller as its provenance.
    #[inline]
    #[track_caller]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(error, Trace::caller())
    }

    /// Returns `true` for `Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` for `Invalid`.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(..))
    }

    /// Borrows the errors, if any.
    #[inline]
    pub const fn invalid_ref(&self) -> Option<&E> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(error, _) => Some(error),
        }
    }

    /// Transforms the errors, keeping the trace.
    #[inline]
    pub fn map_invalid<F, G>(self, function: G) -> Validated<A, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Valid(value) => Validated::Valid(value),
            Self::Invalid(error, trace) => Validated::Invalid(function(error), trace),
        }
    }

    /// Converts into an `Outcome`, the family to use for dependent steps.
    #[inline]
    pub fn to_outcome(self) -> Outcome<A, E> {
        match self {
            Self::Valid(value) => Outcome::Success(value),
            Self::Invalid(error, trace) => Outcome::Failure(error, trace),
        }
    }

    /// Drops the errors.
    #[inline]
    pub fn to_maybe(self) -> Maybe<A> {
        match self {
            Self::Valid(value) => Maybe::Just(value),
            Self::Invalid(..) => Maybe::Nothing,
        }
    }

    /// Converts into a standard `Result`, dropping the trace.
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(error, _) => Err(error),
        }
    }
}

impl<A, E> From<Result<A, E>> for Validated<A, E> {
    #[inline]
    #[track_caller]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }
}

impl<A, E> TypeConstructor for Validated<A, E> {
    type Inner = A;
    type WithType<B> = Validated<B, E>;
}

impl<A, E> RightBiased for Validated<A, E> {
    type Left = Failed<E>;

    #[inline]
    fn from_right(value: A) -> Self {
        Self::Valid(value)
    }

    #[inline]
    fn from_left(left: Failed<E>) -> Self {
        Self::Invalid(left.error, left.trace)
    }

    #[inline]
    fn into_either(self) -> Either<Failed<E>, A> {
        match self {
            Self::Valid(value) => Either::Right(value),
            Self::Invalid(error, trace) => Either::Left(Failed::with_trace(error, trace)),
        }
    }

    #[inline]
    fn right_ref(&self) -> Option<&A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(..) => None,
        }
    }
}

impl<A, E> Functor for Validated<A, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Validated<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validated::Valid(function(value)),
            Self::Invalid(error, trace) => Validated::Invalid(error, trace),
        }
    }
}

impl<A, E: Semigroup> Applicative for Validated<A, E> {
    #[inline]
    fn pure<B>(value: B) -> Validated<B, E> {
        Validated::Valid(value)
    }

    /// Combines two values; two invalid values append their errors and keep
    /// the first trace.
    fn map2<B, C, F>(self, other: Validated<B, E>, function: F) -> Validated<C, E>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Valid(first), Validated::Valid(second)) => {
                Validated::Valid(function(first, second))
            }
            (Self::Invalid(first, trace), Validated::Invalid(second, _)) => {
                Validated::Invalid(first.combine(second), trace)
            }
            (Self::Invalid(error, trace), Validated::Valid(_))
            | (Self::Valid(_), Validated::Invalid(error, trace)) => {
                Validated::Invalid(error, trace)
            }
        }
    }
}

impl<A, E> ToMonad for Validated<A, E> {
    type Monad = Outcome<A, E>;

    #[inline]
    fn to_monad(self) -> Outcome<A, E> {
        self.to_outcome()
    }
}

static_assertions::assert_impl_all!(Validated<i32, Vec<String>>: Send, Sync, Applicative);
static_assertions::assert_not_impl_any!(Validated<i32, Vec<String>>: crate::typeclass::Monad);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Form = Validated<i32, Vec<&'static str>>;

    #[rstest]
    fn map2_accumulates_in_order() {
        let first: Form = Validated::invalid(vec!["a"]);
        let second: Form = Validated::invalid(vec!["b", "c"]);
        assert_eq!(first.map2(second, |x, y| x + y), Validated::invalid(vec!["a", "b", "c"]));
    }

    #[rstest]
    #[case(Validated::valid(1), Validated::invalid(vec!["b"]), Validated::invalid(vec!["b"]))]
    #[case(Validated::invalid(vec!["a"]), Validated::valid(2), Validated::invalid(vec!["a"]))]
    #[case(Validated::valid(1), Validated::valid(2), Validated::valid(3))]
    fn map2_with_one_side_valid(#[case] first: Form, #[case] second: Form, #[case] expected: Form) {
        assert_eq!(first.map2(second, |x, y| x + y), expected);
    }

    #[rstest]
    fn apply_accumulates_function_and_argument_errors() {
        let function: Validated<fn(i32) -> i32, Vec<&str>> = Validated::invalid(vec!["f"]);
        let argument: Form = Validated::invalid(vec!["x"]);
        assert_eq!(function.apply(argument), Validated::invalid(vec!["f", "x"]));
    }

    #[rstest]
    fn fmap_skips_invalid() {
        let invalid: Form = Validated::invalid(vec!["a"]);
        assert_eq!(invalid.clone().fmap(|n| n + 1), invalid);
    }

    #[rstest]
    fn to_monad_converts_to_outcome() {
        let invalid: Form = Validated::invalid(vec!["a"]);
        assert_eq!(invalid.to_monad(), Outcome::failure(vec!["a"]));
        assert_eq!(Form::valid(1).to_monad(), Outcome::success(1));
    }

    #[rstest]
    fn map_invalid_keeps_valid() {
        assert_eq!(Form::valid(1).map_invalid(|errors| errors.len()), Validated::valid(1));
    }

    #[rstest]
    fn string_errors_concatenate() {
        let first: Validated<(), String> = Validated::invalid("a;".to_string());
        let second: Validated<(), String> = Validated::invalid("b;".to_string());
        assert_eq!(first.and(second), Validated::invalid("a;b;".to_string()));
    }
}
