//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Outcome<_, E>` or `Maybe<_>` as type
//! constructors directly. [`TypeConstructor`] names the payload a family is
//! currently applied to and lets a trait method return "the same family
//! applied to another payload", which is all the combinator protocol needs.
//!
//! # Example
//!
//! ```rust
//! use rightward::typeclass::TypeConstructor;
//! use rightward::family::Outcome;
//!
//! fn assert_payload<T: TypeConstructor<Inner = i32>>() {}
//! assert_payload::<Outcome<i32, String>>();
//! ```

/// A family viewed as a type constructor.
///
/// `Inner` is the payload the family is applied to; `WithType<B>` is the
/// same family holding a `B` instead. Failure parameters such as the `E` of
/// `Outcome<A, E>` stay fixed, so `WithType<F::Inner>` is always `F`.
pub trait TypeConstructor {
    /// The payload type of the Right variant.
    type Inner;

    /// The same family applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}
