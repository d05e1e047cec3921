//! The right-biased combinator protocol.
//!
//! Every family in this crate is a two-variant type: a Right variant holding
//! a payload and an absorbing Left variant holding a failure. The traits in
//! this module describe what the families share:
//!
//! - [`RightBiased`]: building and inspecting both sides, fallbacks
//!   (`or`, `or_else`, `or_fmap`, `value_or`) and forced unwrapping
//! - [`Functor`]: `fmap`, `discard`
//! - [`Applicative`]: `pure`, `map2`, `apply`, `and`
//! - [`Monad`]: `bind`, `tee` (not implemented by `Validated`)
//! - [`ToMonad`]: conversion to the canonical family used by do-notation
//! - [`Semigroup`]: associative append, required by error accumulation
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have higher-kinded types. [`TypeConstructor`] uses Generic
//! Associated Types so a trait method can return "this family applied to
//! another payload".
//!
//! # Examples
//!
//! ```rust
//! use rightward::family::Outcome;
//! use rightward::typeclass::{Applicative, Functor, Monad, RightBiased};
//!
//! let total = Outcome::<i32, String>::success(1)
//!     .bind(|a| Outcome::success(a + 1))
//!     .fmap(|a| a * 10);
//! assert_eq!(total.value_or(0), 20);
//! ```

mod applicative;
mod either;
mod functor;
mod higher;
mod monad;
mod right_biased;
mod semigroup;
mod to_monad;

pub use applicative::Applicative;
pub use either::Either;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use right_biased::RightBiased;
pub use semigroup::Semigroup;
pub use to_monad::ToMonad;
