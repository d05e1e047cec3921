//! The optional family: a value that may be absent.
//!
//! `Maybe<A>` is either `Just(a)` (Right) or the singleton `Nothing` (Left).
//! Lifting an `Option` maps `None` to `Nothing`.
//!
//! # Coercing `None` results
//!
//! A plain [`fmap`](crate::typeclass::Functor::fmap) is total: whatever the
//! function returns becomes the new payload, `Option` included. Use
//! [`Maybe::maybe`] when the function can fail to produce a value and that
//! should collapse into `Nothing`:
//!
//! ```rust
//! use rightward::family::Maybe;
//!
//! let user_email = |id: u32| if id == 1 { Some("a@example.com") } else { None };
//!
//! assert_eq!(Maybe::just(1).maybe(user_email), Maybe::just("a@example.com"));
//! assert_eq!(Maybe::just(2).maybe(user_email), Maybe::Nothing);
//! ```

use crate::deprecation;
use crate::family::Outcome;
use crate::trace::Absent;
use crate::typeclass::{
    Applicative, Either, Functor, Monad, RightBiased, ToMonad, TypeConstructor,
};

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// # Examples
///
/// ```rust
/// use rightward::family::Maybe;
/// use rightward::typeclass::{Functor, RightBiased};
///
/// let port: Maybe<u16> = Some(8080).into();
/// assert_eq!(port.fmap(|p| p + 1).value_or(80), 8081);
///
/// let missing: Maybe<u16> = None.into();
/// assert_eq!(missing.value_or(80), 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<A> {
    /// A present value.
    Just(A),
    /// No value.
    Nothing,
}

impl<A> Maybe<A> {
    /// Wraps a present value.
    #[inline]
    pub const fn just(value: A) -> Self {
        Self::Just(value)
    }

    /// The absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Returns `true` for `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Maps the payload through a function that may produce no value,
    /// turning a `None` result into `Nothing`.
    #[inline]
    pub fn maybe<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        match self {
            Self::Just(value) => function(value).into(),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Same as [`maybe`](Self::maybe), kept for callers that relied on
    /// `fmap` silently collapsing `None` results.
    #[deprecated(note = "use `Maybe::maybe`, which performs the same coercion explicitly")]
    #[track_caller]
    pub fn fmap_nullable<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        deprecation::warn("Maybe::fmap_nullable", "Maybe::maybe");
        self.maybe(function)
    }

    /// Keeps a `Just` only if its payload satisfies `predicate`.
    ///
    /// ```rust
    /// use rightward::family::Maybe;
    ///
    /// assert_eq!(Maybe::just(4).filter(|n| n % 2 == 0), Maybe::just(4));
    /// assert_eq!(Maybe::just(3).filter(|n| n % 2 == 0), Maybe::Nothing);
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn to_option(self) -> Option<A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Converts into an `Outcome`, using `error` as the failure payload for
    /// `Nothing`.
    #[inline]
    #[track_caller]
    pub fn to_outcome<E>(self, error: E) -> Outcome<A, E> {
        match self {
            Self::Just(value) => Outcome::Success(value),
            Self::Nothing => Outcome::failure(error),
        }
    }

    /// Like [`to_outcome`](Self::to_outcome), computing the error lazily.
    #[inline]
    #[track_caller]
    pub fn to_outcome_else<E, F>(self, error: F) -> Outcome<A, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Just(value) => Outcome::Success(value),
            Self::Nothing => Outcome::failure(error()),
        }
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<A> {
        self.bind(|inner| inner)
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(option: Option<A>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        maybe.to_option()
    }
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> RightBiased for Maybe<A> {
    type Left = Absent;

    #[inline]
    fn from_right(value: A) -> Self {
        Self::Just(value)
    }

    #[inline]
    fn from_left(_left: Absent) -> Self {
        Self::Nothing
    }

    #[inline]
    fn into_either(self) -> Either<Absent, A> {
        match self {
            Self::Just(value) => Either::Right(value),
            Self::Nothing => Either::Left(Absent),
        }
    }

    #[inline]
    fn right_ref(&self) -> Option<&A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Just(first), Maybe::Just(second)) => Maybe::Just(function(first, second)),
            _ => Maybe::Nothing,
        }
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> ToMonad for Maybe<A> {
    type Monad = Self;

    #[inline]
    fn to_monad(self) -> Self {
        self
    }
}

impl<A> ToMonad for Option<A> {
    type Monad = Maybe<A>;

    #[inline]
    fn to_monad(self) -> Maybe<A> {
        self.into()
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_none_lifts_to_nothing() {
        assert_eq!(Maybe::from(None::<i32>), Maybe::Nothing);
        assert_eq!(Maybe::from(Some(1)), Maybe::Just(1));
    }

    #[rstest]
    fn maybe_coerces_none_result() {
        let result = Maybe::just("x").maybe(|s| s.parse::<i32>().ok());
        assert_eq!(result, Maybe::Nothing);
    }

    #[rstest]
    fn fmap_is_total() {
        let result = Maybe::just(1).fmap(|_| None::<i32>);
        assert_eq!(result, Maybe::Just(None));
    }

    #[rstest]
    #[allow(deprecated)]
    fn fmap_nullable_still_coerces() {
        let result = Maybe::just(1).fmap_nullable(|_| None::<i32>);
        assert_eq!(result, Maybe::Nothing);
    }

    #[rstest]
    fn nothing_absorbs_combinators() {
        let nothing: Maybe<i32> = Maybe::Nothing;
        assert_eq!(nothing.fmap(|n| n + 1), Maybe::Nothing);
        assert_eq!(nothing.bind(|n| Maybe::just(n + 1)), Maybe::Nothing);
        assert_eq!(Maybe::<fn(i32) -> i32>::Nothing.apply(Maybe::just(1)), Maybe::Nothing);
    }

    #[rstest]
    #[case(Maybe::just(1), Maybe::just(2), Maybe::just(1))]
    #[case(Maybe::Nothing, Maybe::just(2), Maybe::just(2))]
    fn or_picks_first_just(
        #[case] value: Maybe<i32>,
        #[case] fallback: Maybe<i32>,
        #[case] expected: Maybe<i32>,
    ) {
        assert_eq!(value.or(fallback), expected);
    }

    #[rstest]
    fn or_fmap_wraps_fallback() {
        assert_eq!(Maybe::<i32>::Nothing.or_fmap(|Absent| 7), Maybe::just(7));
    }

    #[rstest]
    fn flatten_removes_one_level() {
        assert_eq!(Maybe::just(Maybe::just(1)).flatten(), Maybe::just(1));
        assert_eq!(Maybe::just(Maybe::<i32>::Nothing).flatten(), Maybe::Nothing);
    }

    #[rstest]
    fn to_outcome_uses_error_for_nothing() {
        assert_eq!(Maybe::<i32>::Nothing.to_outcome("missing"), Outcome::failure("missing"));
        assert_eq!(Maybe::just(1).to_outcome("missing"), Outcome::success(1));
    }

    #[rstest]
    fn discard_maps_to_unit() {
        assert_eq!(Maybe::just("payload").discard(), Maybe::just(()));
    }
}
