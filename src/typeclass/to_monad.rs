//! Conversion into a family's canonical form.
//!
//! Do-notation never inspects a value directly: it first asks for the
//! value's canonical monadic form and then branches on that. Any type can
//! take part in do-notation by implementing [`ToMonad`]: `Option` converts
//! to `Maybe`, `Result` to `Outcome`, `Validated` to `Outcome`, and a
//! `Vec` of family values is traversed into one family value.
//!
//! # Examples
//!
//! ```rust
//! use rightward::family::{Maybe, Outcome};
//! use rightward::typeclass::ToMonad;
//!
//! assert_eq!(Some(3).to_monad(), Maybe::just(3));
//! assert_eq!(Err::<i32, _>("e").to_monad(), Outcome::failure("e"));
//! ```

use super::right_biased::RightBiased;

/// Converts a value into the family value do-notation unwraps.
pub trait ToMonad {
    /// The canonical family value.
    type Monad: RightBiased;

    /// Performs the conversion.
    fn to_monad(self) -> Self::Monad;
}
