//! Procedural macros for rightward.
//!
//! # Available Attribute Macros
//!
//! - [`macro@do_notation`]: instruments one function or method
//! - [`macro@do_for`]: instruments the named methods of an impl block or trait
//! - [`macro@do_all`]: instruments every method of a block that takes a `Scope`
//!
//! # Available Function-like Macros
//!
//! - [`curry!`]: Converts multi-argument closures into curried form
//!
//! # Example: Do-notation
//!
//! ```rust,ignore
//! use rightward::do_notation::Scope;
//! use rightward::do_notation;
//! use rightward::family::Outcome;
//!
//! #[do_notation]
//! fn add(a: Outcome<i32, String>, b: Outcome<i32, String>, scope: Scope) -> Outcome<i32, String> {
//!     let a = scope.unwrap(a)?;
//!     let b = scope.unwrap(b)?;
//!     Outcome::success(a + b)
//! }
//!
//! assert_eq!(add(Outcome::success(1), Outcome::success(2)), Outcome::success(3));
//! ```
//!
//! # Example: Currying
//!
//! ```rust,ignore
//! use rightward::curry;
//!
//! let add = curry!(|a: i32, b: i32| a + b);
//! assert_eq!(add(5)(3), 8);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;
mod do_notation;

use proc_macro::TokenStream;

/// Converts a multi-argument closure or function into curried form.
///
/// # Forms
///
/// - `curry!(|a, b, c| body)`
/// - `curry!(function_name, arity)`
///
/// The curried closures can be called repeatedly, and partial applications
/// can be reused. Arguments other than the last are cloned when a partial
/// application is shared.
///
/// # Example
///
/// ```rust,ignore
/// use rightward::curry;
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 {
///     width * height * depth
/// }
///
/// let curried = curry!(volume, 3);
/// let flat = curried(2)(3);
/// assert_eq!(flat(4), 24);
/// assert_eq!(flat(5), 30);
/// ```
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::curry_impl(input)
}

/// Instruments a function or method for do-notation.
///
/// The function must take exactly one parameter whose type is `Scope`,
/// written either bare or as `rightward::do_notation::Scope`
/// (`rightward::prelude::Scope` also works); other types that happen to be
/// named `Scope` are left alone. The instrumented function drops that
/// parameter; callers never see it. The body can unwrap values with `scope.unwrap(value)?` and returns its value
/// as usual. `return value` exits normally.
///
/// # Options
///
/// - `with = name`: also emit `name`, an explicit-scope variant that keeps
///   the `Scope` parameter and returns `Result<R, Halt>`. Calling it from
///   another block with that block's scope propagates a halt to the
///   caller's boundary.
/// - `vis = ...`: visibility of the generated functions. Defaults to the
///   original visibility.
///
/// # Example
///
/// ```rust,ignore
/// #[do_notation(with = checked_age_in)]
/// pub fn checked_age(input: &str, scope: Scope) -> Outcome<u32, String> {
///     let age = scope.unwrap(input.parse::<u32>().map_err(|error| error.to_string()))?;
///     Outcome::success(age)
/// }
/// ```
#[proc_macro_attribute]
pub fn do_notation(attribute: TokenStream, item: TokenStream) -> TokenStream {
    do_notation::do_notation_impl(attribute, item)
}

/// Instruments the named methods of an impl block or trait.
///
/// Each name may carry a visibility override: `#[do_for(total, fee: pub(crate))]`.
/// Naming a method the block does not define, or one without a `Scope`
/// parameter, is a compile error. Methods carrying their own
/// `#[do_notation]` are left to it.
#[proc_macro_attribute]
pub fn do_for(attribute: TokenStream, item: TokenStream) -> TokenStream {
    do_notation::do_for_impl(attribute, item)
}

/// Instruments every method of an impl block or trait that takes a `Scope`.
///
/// Trait default bodies are instrumented inside the trait, and required
/// methods lose their `Scope` parameter so implementations can be
/// instrumented with their own `#[do_all]`.
#[proc_macro_attribute]
pub fn do_all(attribute: TokenStream, item: TokenStream) -> TokenStream {
    do_notation::do_all_impl(attribute, item)
}
