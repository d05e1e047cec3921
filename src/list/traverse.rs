//! Per-family traversal defaults.
//!
//! Rust has no higher-kinded types, so a single generic `traverse` over
//! every applicative cannot be written against [`TypeConstructor`]. Each
//! family instead declares how its values are collected:
//!
//! - [`Traverse::lift`] prepares one element before it is combined. It is
//!   the identity for every family except `Validated<A, E>`, whose bare
//!   error is wrapped into `Vec<E>` so errors accumulate without asking
//!   `E` to be a [`Semigroup`].
//! - [`Accumulate::accumulate`] folds the prepared elements, starting from
//!   `pure(Vec::new())` and combining with `map2` in order.
//!
//! Short-circuiting families therefore keep the leftmost Left, while
//! `Validated` keeps every error in element order.
//!
//! [`TypeConstructor`]: crate::typeclass::TypeConstructor

use crate::family::{Attempt, Maybe, Outcome, Validated};
use crate::typeclass::{Applicative, RightBiased, Semigroup};

/// Folds a sequence of one family into the family of a sequence.
pub trait Accumulate: Sized {
    /// The family value holding every payload.
    type Collected: RightBiased;

    /// Combines `items` left to right.
    fn accumulate<I>(items: I) -> Self::Collected
    where
        I: IntoIterator<Item = Self>;
}

/// The default preparation applied to each element by `List::traverse`.
pub trait Traverse: Sized {
    /// The prepared element.
    type Lifted: Accumulate;

    /// Prepares one element for accumulation.
    fn lift(self) -> Self::Lifted;
}

fn push<A>(mut collected: Vec<A>, item: A) -> Vec<A> {
    collected.push(item);
    collected
}

impl<A> Accumulate for Maybe<A> {
    type Collected = Maybe<Vec<A>>;

    fn accumulate<I>(items: I) -> Maybe<Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        items
            .into_iter()
            .fold(Maybe::just(Vec::new()), |collected, item| collected.map2(item, push))
    }
}

impl<A, E> Accumulate for Outcome<A, E> {
    type Collected = Outcome<Vec<A>, E>;

    fn accumulate<I>(items: I) -> Outcome<Vec<A>, E>
    where
        I: IntoIterator<Item = Self>,
    {
        items
            .into_iter()
            .fold(Outcome::success(Vec::new()), |collected, item| collected.map2(item, push))
    }
}

impl<A> Accumulate for Attempt<A> {
    type Collected = Attempt<Vec<A>>;

    fn accumulate<I>(items: I) -> Attempt<Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        items
            .into_iter()
            .fold(Attempt::succeeded(Vec::new()), |collected, item| collected.map2(item, push))
    }
}

impl<A, E: Semigroup> Accumulate for Validated<A, E> {
    type Collected = Validated<Vec<A>, E>;

    fn accumulate<I>(items: I) -> Validated<Vec<A>, E>
    where
        I: IntoIterator<Item = Self>,
    {
        items
            .into_iter()
            .fold(Validated::valid(Vec::new()), |collected, item| collected.map2(item, push))
    }
}

impl<A> Accumulate for Option<A> {
    type Collected = Option<Vec<A>>;

    fn accumulate<I>(items: I) -> Option<Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        items
            .into_iter()
            .fold(Some(Vec::new()), |collected, item| collected.map2(item, push))
    }
}

impl<A, E> Accumulate for Result<A, E> {
    type Collected = Result<Vec<A>, E>;

    fn accumulate<I>(items: I) -> Result<Vec<A>, E>
    where
        I: IntoIterator<Item = Self>,
    {
        items
            .into_iter()
            .fold(Ok(Vec::new()), |collected, item| collected.map2(item, push))
    }
}

macro_rules! identity_lift {
    ($([$($generics:tt)*] $family:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Traverse for $family {
                type Lifted = Self;

                #[inline]
                fn lift(self) -> Self {
                    self
                }
            }
        )*
    };
}

identity_lift! {
    [A] Maybe<A>,
    [A, E] Outcome<A, E>,
    [A] Attempt<A>,
    [A] Option<A>,
    [A, E] Result<A, E>,
}

impl<A, E> Traverse for Validated<A, E> {
    type Lifted = Validated<A, Vec<E>>;

    #[inline]
    fn lift(self) -> Validated<A, Vec<E>> {
        self.map_invalid(|error| vec![error])
    }
}
