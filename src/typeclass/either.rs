//! Either type - the two-sided view of any family value.
//!
//! Every family projects onto `Either<Left, Right>` through
//! [`RightBiased::into_either`](super::RightBiased::into_either): this is the
//! destructuring contract shared by `Maybe`, `Outcome`, `Attempt` and
//! `Validated`, and the branch the do-notation engine inspects.
//!
//! # Examples
//!
//! ```rust
//! use rightward::typeclass::Either;
//!
//! let right: Either<String, i32> = Either::Right(42);
//! let message = right.fold(|error| error, |value| format!("got {value}"));
//! assert_eq!(message, "got 42");
//! ```

use std::fmt;

/// A value that is either a `Left(L)` or a `Right(R)`.
///
/// By convention `Left` is the failure side and `Right` the success side.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The failure side.
    Left(L),
    /// The success side.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into `Option<L>`, discarding a right value.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Option<R>`, discarding a left value.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Transforms the left value, leaving a right value untouched.
    ///
    /// ```rust
    /// use rightward::typeclass::Either;
    ///
    /// let left: Either<i32, &str> = Either::Left(2);
    /// assert_eq!(left.map_left(|n| n * 10), Either::Left(20));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms the right value, leaving a left value untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Collapses both sides into one value.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Converts into a standard `Result`, `Right` becoming `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(value) => Err(value),
            Self::Right(value) => Ok(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}
