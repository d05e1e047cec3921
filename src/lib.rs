//! # rightward
//!
//! Short-circuiting computation for Rust: a family of two-variant container
//! types sharing one right-biased combinator protocol, a tagged list that
//! traverses against a family, and a do-notation engine that unwraps values
//! inline and stops at the first failure.
//!
//! ## Overview
//!
//! - **Families**: [`Maybe`](family::Maybe), [`Outcome`](family::Outcome),
//!   [`Attempt`](family::Attempt) and [`Validated`](family::Validated)
//! - **Protocol**: `fmap`, `bind`, `apply`, `or`, `or_else`, `value_or`,
//!   `tee`, ... as type classes in [`typeclass`]
//! - **Traversal**: [`List`](list::List) turns a list of family values into
//!   a family value of a list
//! - **Do-notation**: [`do_notation::run`] plus the `#[do_notation]`,
//!   `#[do_for]` and `#[do_all]` attributes
//!
//! ## Feature Flags
//!
//! - `typeclass`: the combinator protocol
//! - `family`: the concrete families
//! - `list`: the tagged list and traversal
//! - `do-notation`: the do-notation runtime
//! - `derive`: `curry!` and the do-notation attributes
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use rightward::prelude::*;
//!
//! #[do_notation]
//! fn add(a: Outcome<i32, String>, b: Outcome<i32, String>, scope: Scope) -> Outcome<i32, String> {
//!     let a = scope.unwrap(a)?;
//!     let b = scope.unwrap(b)?;
//!     Outcome::success(a + b)
//! }
//!
//! assert_eq!(add(Outcome::success(1), Outcome::success(2)), Outcome::success(3));
//! assert_eq!(
//!     add(Outcome::failure("x".to_string()), Outcome::success(2)),
//!     Outcome::failure("x".to_string())
//! );
//! ```
//!
//! ## Visibility
//!
//! Instrumented functions keep the visibility they were declared with unless
//! `vis = ...` overrides it, so a private block stays private:
//!
//! ```rust,compile_fail,E0603
//! mod billing {
//!     use rightward::prelude::*;
//!
//!     #[do_notation]
//!     fn fee(amount: Outcome<u32, String>, scope: Scope) -> Outcome<u32, String> {
//!         Outcome::success(scope.unwrap(amount)? / 10)
//!     }
//! }
//!
//! let _ = billing::fee(rightward::family::Outcome::success(100));
//! ```
//!
//! ```rust
//! mod billing {
//!     use rightward::prelude::*;
//!
//!     #[do_notation(vis = pub)]
//!     fn fee(amount: Outcome<u32, String>, scope: Scope) -> Outcome<u32, String> {
//!         Outcome::success(scope.unwrap(amount)? / 10)
//!     }
//! }
//!
//! assert_eq!(
//!     billing::fee(rightward::family::Outcome::success(100)),
//!     rightward::family::Outcome::success(10)
//! );
//! ```
//!
//! The same holds for methods instrumented by a block attribute: a private
//! helper can back a public entry point without becoming callable itself.
//!
//! ```rust,compile_fail,E0624
//! mod shop {
//!     use rightward::prelude::*;
//!
//!     pub struct Till;
//!
//!     #[do_for(fee, total: pub)]
//!     impl Till {
//!         fn fee(&self, amount: u32, scope: Scope) -> Outcome<u32, String> {
//!             let _ = scope;
//!             Outcome::success(amount / 10)
//!         }
//!
//!         fn total(&self, amount: u32, scope: Scope) -> Outcome<u32, String> {
//!             let fee = scope.unwrap(self.fee(amount))?;
//!             Outcome::success(amount + fee)
//!         }
//!     }
//! }
//!
//! let _ = shop::Till.fee(100);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

extern crate self as rightward;

/// Prelude module for convenient imports.
///
/// Re-exports the families, the protocol traits, the do-notation runtime
/// and, with `derive`, the macros.
///
/// # Usage
///
/// ```rust
/// use rightward::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "family")]
    pub use crate::family::*;

    #[cfg(feature = "list")]
    pub use crate::list::{List, Typed, Untyped};

    #[cfg(feature = "do-notation")]
    pub use crate::do_notation::{Halt, Scope, run};

    #[cfg(feature = "derive")]
    pub use crate::{curry, do_all, do_for, do_notation};

    pub use crate::trace::{Absent, Failed};
}

pub mod deprecation;
pub mod error;
pub mod trace;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "family")]
pub mod family;

#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "do-notation")]
pub mod do_notation;

#[cfg(feature = "derive")]
pub use rightward_derive::{curry, do_all, do_for, do_notation};
