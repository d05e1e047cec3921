//! Do-notation: inline unwrapping with early exit on the first Left.
//!
//! [`run`] establishes a *boundary*. Inside it, the [`Scope`] capability
//! unwraps values of any family: a Right yields its payload, a Left becomes
//! a [`Halt`] that the `?` operator carries straight to the boundary. The
//! boundary turns the halted Left into the block's return family with
//! [`RightBiased::from_left`]; a block that completes normally returns its
//! value unchanged.
//!
//! ```rust
//! use rightward::do_notation::run;
//! use rightward::family::Outcome;
//!
//! let sum = run::<Outcome<i32, &str>, _>(|scope| {
//!     let first = scope.unwrap(Outcome::<i32, &str>::success(1))?;
//!     let second = scope.unwrap(Outcome::<i32, &str>::success(2))?;
//!     Ok(Outcome::success(first + second))
//! });
//! assert_eq!(sum, Outcome::success(3));
//!
//! let halted = run::<Outcome<i32, &str>, _>(|scope| {
//!     let first = scope.unwrap(Outcome::<i32, &str>::failure("x"))?;
//!     unreachable!("never reached: {first}");
//! });
//! assert_eq!(halted, Outcome::failure("x"));
//! ```
//!
//! # Containment
//!
//! Every boundary brands its scope with a fresh lifetime. A `Halt` carries
//! the brand of the scope that created it, so it can only be returned to
//! that boundary; handing it to another one does not compile:
//!
//! ```rust,compile_fail
//! use rightward::do_notation::run;
//! use rightward::family::Maybe;
//!
//! let _ = run::<Maybe<i32>, _>(|outer| {
//!     let inner: Maybe<i32> = run(|_inner| {
//!         outer.unwrap(Maybe::<i32>::Nothing)?;
//!         Ok(Maybe::just(1))
//!     });
//!     Ok(inner)
//! });
//! ```
//!
//! Nested and recursive calls each get their own boundary, so a Left in an
//! inner block only ever stops that block.
//!
//! # Sequences
//!
//! Unwrapping a `Vec` or [`List`](crate::list::List) of family values
//! traverses it first, and [`Scope::unwrap_all`] unwraps a tuple of values
//! left to right.
//!
//! # Cleanup
//!
//! A halt is an ordinary `Err` while it travels, so helpers between the
//! unwrap and the boundary observe an abrupt exit and can roll back:
//!
//! ```rust
//! use rightward::do_notation::run;
//! use rightward::family::Outcome;
//!
//! fn transaction<T, E>(log: &mut Vec<&'static str>, body: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
//!     log.push("begin");
//!     let result = body();
//!     log.push(if result.is_ok() { "commit" } else { "rollback" });
//!     result
//! }
//!
//! let mut log = Vec::new();
//! let saved = run::<Outcome<i32, &str>, _>(|scope| {
//!     let id = transaction(&mut log, || scope.unwrap(Outcome::<i32, &str>::failure("conflict")))?;
//!     Ok(Outcome::success(id))
//! });
//! assert_eq!(saved, Outcome::failure("conflict"));
//! assert_eq!(log, ["begin", "rollback"]);
//! ```

mod unwrap_all;

pub use unwrap_all::UnwrapAll;

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use crate::typeclass::{Either, RightBiased, ToMonad, TypeConstructor};

type Brand<'scope> = PhantomData<fn(&'scope ()) -> &'scope ()>;

/// The capability to unwrap values inside one boundary.
///
/// `L` is the Left type of the boundary's return family. The `'scope`
/// lifetime is invariant and unique to the boundary.
pub struct Scope<'scope, L> {
    brand: Brand<'scope>,
    left: PhantomData<fn() -> L>,
}

impl<L> Clone for Scope<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for Scope<'_, L> {}

impl<L> fmt::Debug for Scope<'_, L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Scope").finish_non_exhaustive()
    }
}

impl<'scope, L> Scope<'scope, L> {
    const fn new() -> Self {
        Self {
            brand: PhantomData,
            left: PhantomData,
        }
    }

    /// Returns the Right payload of `value`, or a halt carrying its Left.
    ///
    /// The value is first converted with [`ToMonad`], so `Option`,
    /// `Result`, `Validated`, `Vec` and `List` all unwrap here. The Left
    /// is converted into the boundary's Left type with `From`.
    ///
    /// # Errors
    ///
    /// Returns a [`Halt`] for a Left value; propagate it with `?`.
    #[inline]
    #[track_caller]
    pub fn unwrap<M>(
        self,
        value: M,
    ) -> Result<<M::Monad as TypeConstructor>::Inner, Halt<'scope, L>>
    where
        M: ToMonad,
        L: From<<M::Monad as RightBiased>::Left>,
    {
        match value.to_monad().into_either() {
            Either::Right(payload) => Ok(payload),
            Either::Left(left) => Err(Halt::new(left.into())),
        }
    }

    /// Unwraps every value of a tuple, left to right, halting on the first
    /// Left.
    ///
    /// ```rust
    /// use rightward::do_notation::run;
    /// use rightward::family::Maybe;
    ///
    /// let pair = run::<Maybe<(i32, char)>, _>(|scope| {
    ///     let (number, letter) = scope.unwrap_all((Maybe::just(1), Some('a')))?;
    ///     Ok(Maybe::just((number, letter)))
    /// });
    /// assert_eq!(pair, Maybe::just((1, 'a')));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`Halt`] carrying the leftmost Left.
    #[inline]
    #[track_caller]
    pub fn unwrap_all<T>(self, values: T) -> Result<T::Output, Halt<'scope, L>>
    where
        T: UnwrapAll<L>,
    {
        values.unwrap_all(self)
    }

    /// Halts with an explicit Left value.
    ///
    /// ```rust
    /// use rightward::do_notation::run;
    /// use rightward::family::Outcome;
    /// use rightward::trace::Failed;
    ///
    /// let checked = run::<Outcome<u32, &str>, _>(|scope| {
    ///     let age = scope.unwrap(Outcome::<u32, &str>::success(200))?;
    ///     if age > 150 {
    ///         return Err(scope.halt(Failed::new("implausible age")));
    ///     }
    ///     Ok(Outcome::success(age))
    /// });
    /// assert_eq!(checked, Outcome::failure("implausible age"));
    /// ```
    #[inline]
    pub fn halt(self, left: impl Into<L>) -> Halt<'scope, L> {
        Halt::new(left.into())
    }
}

/// The early-exit signal of one boundary, carrying a Left value.
///
/// A `Halt` is not an error type: it only exists while travelling from an
/// unwrap to the boundary that owns it.
#[must_use = "a halt must be returned to its boundary with `?`"]
pub struct Halt<'scope, L> {
    left: L,
    brand: Brand<'scope>,
}

impl<L> Halt<'_, L> {
    const fn new(left: L) -> Self {
        Self {
            left,
            brand: PhantomData,
        }
    }

    /// The Left value being carried.
    #[inline]
    pub const fn left(&self) -> &L {
        &self.left
    }
}

impl<L: fmt::Debug> fmt::Debug for Halt<'_, L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Halt").field(&self.left).finish()
    }
}

/// Runs `body` inside a fresh boundary.
///
/// The body receives the boundary's [`Scope`] and returns either the block
/// value (`Ok`) or a halt (`Err`, usually produced by `?`). A halt is turned
/// into `R::from_left(left)`; a value is returned unchanged.
pub fn run<R, F>(body: F) -> R
where
    R: RightBiased,
    F: for<'scope> FnOnce(Scope<'scope, R::Left>) -> Result<R, Halt<'scope, R::Left>>,
{
    match body(Scope::new()) {
        Ok(value) => value,
        Err(halt) => {
            tracing::trace!(
                target: "rightward::do_notation",
                family = type_name::<R>(),
                "block halted on a Left value"
            );
            R::from_left(halt.left)
        }
    }
}
