//! Applicative type class - combining independent values of one family.
//!
//! `Applicative` extends [`Functor`] with:
//!
//! - `pure`: lift a payload into the Right variant
//! - `map2`: combine two values with a binary function
//! - `apply`: call a Right payload that is itself a function
//! - `and`: pair two payloads into a tuple
//!
//! For the short-circuiting families the leftmost Left wins. `Validated`
//! is the exception: its `map2` combines the payloads of two Left values,
//! which is what makes error accumulation possible.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Currying
//!
//! `apply` takes one argument at a time, so multi-argument functions are
//! curried first:
//!
//! ```rust
//! use rightward::curry;
//! use rightward::family::Outcome;
//! use rightward::typeclass::Applicative;
//!
//! let add = Outcome::<_, String>::success(curry!(|a: i32, b: i32| a + b));
//! let sum = add.apply(Outcome::success(1)).apply(Outcome::success(2));
//! assert_eq!(sum, Outcome::success(3));
//! ```

use super::functor::Functor;

/// A type class for lifting payloads and combining independent values.
pub trait Applicative: Functor {
    /// Lifts a payload into the Right variant.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values using a binary function.
    ///
    /// The function runs only if both values are Right.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Applies the function held in `self` to the payload of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rightward::family::Maybe;
    /// use rightward::typeclass::Applicative;
    ///
    /// let increment = Maybe::just(|n: i32| n + 1);
    /// assert_eq!(increment.apply(Maybe::just(1)), Maybe::just(2));
    /// ```
    #[inline]
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }

    /// Pairs the payloads of two values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rightward::family::Outcome;
    /// use rightward::typeclass::Applicative;
    ///
    /// let pair = Outcome::<_, &str>::success(1).and(Outcome::success("one"));
    /// assert_eq!(pair, Outcome::success((1, "one")));
    /// ```
    #[inline]
    fn and<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |first, second| (first, second))
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(first), Some(second)) => Some(function(first, second)),
            _ => None,
        }
    }
}

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Ok(first), Ok(second)) => Ok(function(first, second)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_pure_is_some() {
        assert_eq!(<Option<()>>::pure(42), Some(42));
    }

    #[rstest]
    fn result_map2_leftmost_error_wins() {
        let first: Result<i32, &str> = Err("first");
        let second: Result<i32, &str> = Err("second");
        assert_eq!(first.map2(second, |a, b| a + b), Err("first"));
    }

    #[rstest]
    fn apply_calls_wrapped_function() {
        let function: Option<fn(i32) -> i32> = Some(|x| x * 3);
        assert_eq!(function.apply(Some(2)), Some(6));
    }

    #[rstest]
    fn apply_propagates_left_argument() {
        let function: Result<fn(i32) -> i32, &str> = Ok(|x| x * 3);
        assert_eq!(function.apply(Err("missing")), Err("missing"));
    }

    #[rstest]
    fn and_pairs_payloads() {
        assert_eq!(Applicative::and(Some(1), Some('a')), Some((1, 'a')));
        assert_eq!(Applicative::and(Some(1), None::<char>), None);
    }

    #[rstest]
    fn homomorphism_law() {
        let function = |x: i32| x + 10;
        assert_eq!(
            <Option<()>>::pure(function).apply(<Option<()>>::pure(5)),
            <Option<()>>::pure(function(5))
        );
    }
}
