//! The concrete families.
//!
//! | family | Right | Left | canonical Left |
//! |--------|-------|------|----------------|
//! | [`Maybe<A>`] | `Just(a)` | `Nothing` | [`Absent`](crate::trace::Absent) |
//! | [`Outcome<A, E>`] | `Success(a)` | `Failure(e, trace)` | [`Failed<E>`](crate::trace::Failed) |
//! | [`Attempt<A>`] | `Value(a, catch)` | `Error(exception, trace)` | `Failed<Exception>` |
//! | [`Validated<A, E>`] | `Valid(a)` | `Invalid(e, trace)` | `Failed<E>` |
//!
//! All four implement [`RightBiased`](crate::typeclass::RightBiased),
//! [`Functor`](crate::typeclass::Functor) and
//! [`Applicative`](crate::typeclass::Applicative). All but `Validated`
//! implement [`Monad`](crate::typeclass::Monad).

mod attempt;
mod maybe;
mod outcome;
mod validated;

pub use attempt::{Attempt, Catch, Exception};
pub use maybe::Maybe;
pub use outcome::{Constrained, Outcome};
pub use validated::Validated;
