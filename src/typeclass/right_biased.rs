//! The Right/Left capability pair every family implements.
//!
//! A right-biased value has a success side (Right) holding one payload and a
//! failure side (Left) that is absorbing: every transformation skips it and
//! hands it back unchanged. [`RightBiased`] captures the shape common to all
//! families (how to build either side and how to look at them) and derives
//! the fallback combinators (`or`, `or_else`, `or_fmap`, `value_or`, ...)
//! from it.
//!
//! | operation | on Right | on Left |
//! |-----------|----------|---------|
//! | `or(fallback)` | itself | `fallback` |
//! | `or_else(f)` | itself | `f(left)` |
//! | `or_fmap(f)` | itself | Right `f(left)` |
//! | `value_or(default)` | payload | `default` |
//! | `value_or_else(f)` | payload | `f(left)` |
//! | `try_value()` | `Ok(payload)` | `Err(UnwrapError)` |
//!
//! `Option` and `Result` implement the trait as well, with [`Absent`] and
//! [`Failed`] as their Left values, so they can be returned from
//! do-notation blocks.
//!
//! # Examples
//!
//! ```rust
//! use rightward::family::Outcome;
//! use rightward::typeclass::RightBiased;
//!
//! let failure: Outcome<i32, &str> = Outcome::failure("timeout");
//! assert_eq!(failure.clone().value_or(0), 0);
//! assert_eq!(failure.or_fmap(|failed| failed.error.len() as i32), Outcome::success(7));
//! ```

use super::either::Either;
use super::higher::TypeConstructor;
use crate::error::UnwrapError;
use crate::trace::{Absent, Failed, Trace};

/// The shared Right/Left protocol.
///
/// # Laws
///
/// ## Round trip
///
/// ```text
/// Self::from_right(a).into_either() == Either::Right(a)
/// Self::from_left(l).into_either()  == Either::Left(l)
/// ```
///
/// ## Left absorption
///
/// For a Left value `l`, every combinator that takes a function for the
/// Right side ignores it and returns `l`.
pub trait RightBiased: TypeConstructor + Sized {
    /// The canonical Left value of this family.
    type Left;

    /// Builds the Right variant.
    fn from_right(value: Self::Inner) -> Self;

    /// Builds the Left variant.
    fn from_left(left: Self::Left) -> Self;

    /// Splits the value into its two sides.
    fn into_either(self) -> Either<Self::Left, Self::Inner>;

    /// Borrows the Right payload, if any.
    fn right_ref(&self) -> Option<&Self::Inner>;

    /// Returns `true` for the Right variant.
    #[inline]
    fn is_right(&self) -> bool {
        self.right_ref().is_some()
    }

    /// Returns `true` for the Left variant.
    #[inline]
    fn is_left(&self) -> bool {
        !self.is_right()
    }

    /// Returns the payload, or `default` for a Left.
    #[inline]
    fn value_or(self, default: Self::Inner) -> Self::Inner {
        match self.into_either() {
            Either::Right(value) => value,
            Either::Left(_) => default,
        }
    }

    /// Returns the payload, or computes one from the Left value.
    #[inline]
    fn value_or_else<F>(self, function: F) -> Self::Inner
    where
        F: FnOnce(Self::Left) -> Self::Inner,
    {
        match self.into_either() {
            Either::Right(value) => value,
            Either::Left(left) => function(left),
        }
    }

    /// Returns `self` for a Right, `fallback` for a Left.
    ///
    /// The fallback is evaluated eagerly; use [`or_else`](Self::or_else) to
    /// compute it only when needed.
    #[inline]
    #[must_use]
    fn or(self, fallback: Self) -> Self {
        if self.is_right() { self } else { fallback }
    }

    /// Returns `self` for a Right, `function(left)` for a Left.
    #[inline]
    #[must_use]
    fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce(Self::Left) -> Self,
    {
        if self.is_right() {
            return self;
        }
        match self.into_either() {
            Either::Left(left) => function(left),
            Either::Right(value) => Self::from_right(value),
        }
    }

    /// Like [`or_else`](Self::or_else), but the fallback is a plain payload
    /// that gets wrapped into the Right variant.
    #[inline]
    #[must_use]
    fn or_fmap<F>(self, function: F) -> Self
    where
        F: FnOnce(Self::Left) -> Self::Inner,
    {
        if self.is_right() {
            return self;
        }
        match self.into_either() {
            Either::Left(left) => Self::from_right(function(left)),
            Either::Right(value) => Self::from_right(value),
        }
    }

    /// Forces the payload out, reporting a Left as [`UnwrapError`].
    #[inline]
    fn try_value(self) -> Result<Self::Inner, UnwrapError<Self::Left>> {
        match self.into_either() {
            Either::Right(value) => Ok(value),
            Either::Left(left) => Err(UnwrapError::new(left)),
        }
    }

    /// Forces the payload out.
    ///
    /// # Panics
    ///
    /// Panics with the [`UnwrapError`] message when called on a Left.
    #[inline]
    #[track_caller]
    fn value(self) -> Self::Inner
    where
        Self::Left: std::fmt::Debug,
    {
        match self.try_value() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<A> RightBiased for Option<A> {
    type Left = Absent;

    #[inline]
    fn from_right(value: A) -> Self {
        Some(value)
    }

    #[inline]
    fn from_left(_left: Absent) -> Self {
        None
    }

    #[inline]
    fn into_either(self) -> Either<Absent, A> {
        self.map_or(Either::Left(Absent), Either::Right)
    }

    #[inline]
    fn right_ref(&self) -> Option<&A> {
        self.as_ref()
    }
}

impl<T, E> RightBiased for Result<T, E> {
    type Left = Failed<E>;

    #[inline]
    fn from_right(value: T) -> Self {
        Ok(value)
    }

    #[inline]
    fn from_left(left: Failed<E>) -> Self {
        Err(left.error)
    }

    #[inline]
    fn into_either(self) -> Either<Failed<E>, T> {
        match self {
            Ok(value) => Either::Right(value),
            Err(error) => Either::Left(Failed::with_trace(error, Trace::none())),
        }
    }

    #[inline]
    fn right_ref(&self) -> Option<&T> {
        self.as_ref().ok()
    }
}
