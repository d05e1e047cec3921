//! Functor type class - mapping over the Right payload.
//!
//! `fmap` transforms the payload of a Right value and re-wraps the result
//! in the same family; a Left value passes through untouched.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use rightward::family::Outcome;
//! use rightward::typeclass::Functor;
//!
//! let doubled = Outcome::<i32, String>::success(21).fmap(|n| n * 2);
//! assert_eq!(doubled, Outcome::success(42));
//!
//! let failure: Outcome<i32, &str> = Outcome::failure("nope");
//! assert_eq!(failure.fmap(|n| n * 2), Outcome::failure("nope"));
//! ```

use super::higher::TypeConstructor;

/// A type class for families whose Right payload can be mapped.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the Right payload and re-wraps the result.
    ///
    /// Left values are returned unchanged and `function` is never called.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the Right payload with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Replaces the Right payload with the unit sentinel `()`.
    ///
    /// ```rust
    /// use rightward::family::Maybe;
    /// use rightward::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::just(5).discard(), Maybe::just(()));
    /// assert_eq!(Maybe::<i32>::Nothing.discard(), Maybe::Nothing);
    /// ```
    #[inline]
    fn discard(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}
