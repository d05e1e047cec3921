//! Monad type class - sequencing dependent steps.
//!
//! `bind` hands the Right payload to a function that itself returns a value
//! of the same family; the function's result is returned as-is. A Left is
//! absorbing: `bind` returns it and never calls the function.
//!
//! `Validated` deliberately does not implement this trait. Accumulating
//! errors breaks the monad laws, so binding a `Validated` value is a compile
//! error rather than a runtime surprise:
//!
//! ```rust,compile_fail,E0599
//! use rightward::family::Validated;
//! use rightward::typeclass::Monad;
//!
//! let valid: Validated<i32, Vec<&str>> = Validated::valid(1);
//! let _ = valid.bind(|n| Validated::valid(n + 1));
//! ```
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).bind(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.bind(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use rightward::family::Outcome;
//! use rightward::typeclass::Monad;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input.parse().map_err(|_| format!("not a number: {input}")).into()
//! }
//!
//! let doubled = Outcome::success("21").bind(parse).bind(|n| Outcome::success(n * 2));
//! assert_eq!(doubled, Outcome::success(42));
//! ```

use super::applicative::Applicative;
use super::either::Either;
use super::right_biased::RightBiased;

/// A type class for families that can sequence dependent computations.
pub trait Monad: Applicative {
    /// Applies `function` to the Right payload and returns its result.
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Runs `function` for its effect and keeps `self`, unless the function
    /// reports a Left, which then replaces `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rightward::family::Outcome;
    /// use rightward::typeclass::Monad;
    ///
    /// let checked = Outcome::<i32, &str>::success(5)
    ///     .tee(|n| if *n > 0 { Outcome::success(()) } else { Outcome::failure("negative") });
    /// assert_eq!(checked, Outcome::success(5));
    ///
    /// let rejected = Outcome::<i32, &str>::success(-5)
    ///     .tee(|n| if *n > 0 { Outcome::success(()) } else { Outcome::failure("negative") });
    /// assert_eq!(rejected, Outcome::failure("negative"));
    /// ```
    #[inline]
    #[must_use]
    fn tee<B, F>(self, function: F) -> Self
    where
        Self: RightBiased,
        F: FnOnce(&Self::Inner) -> Self::WithType<B>,
        Self::WithType<B>: RightBiased<Left = <Self as RightBiased>::Left>,
    {
        let effect = match self.right_ref() {
            Some(value) => function(value),
            None => return self,
        };
        match effect.into_either() {
            Either::Left(left) => Self::from_left(left),
            Either::Right(_) => self,
        }
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}
