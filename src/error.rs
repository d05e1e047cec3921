//! Error types reported by the families and the tagged list.
//!
//! The do-notation halt is not among them: it never leaves its boundary and
//! is not a user-facing error.

use std::fmt;

/// Returned when a payload is forced out of a Left value.
///
/// Carries the offending Left for diagnostics.
///
/// # Examples
///
/// ```rust
/// use rightward::family::Outcome;
/// use rightward::typeclass::RightBiased;
///
/// let failure: Outcome<i32, &str> = Outcome::failure("missing");
/// let error = failure.try_value().unwrap_err();
/// assert_eq!(error.left().error, "missing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrapError<L> {
    left: L,
}

impl<L> UnwrapError<L> {
    pub(crate) const fn new(left: L) -> Self {
        Self { left }
    }

    /// The Left value that was unwrapped.
    pub const fn left(&self) -> &L {
        &self.left
    }

    /// Gives back the Left value.
    pub fn into_left(self) -> L {
        self.left
    }
}

impl<L: fmt::Debug> fmt::Display for UnwrapError<L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "value() was called on a Left value: {:?}", self.left)
    }
}

impl<L: fmt::Debug> std::error::Error for UnwrapError<L> {}

/// Returned when a constrained `Outcome` is handed a failure payload its
/// constraint rejects.
///
/// # Examples
///
/// ```rust
/// use rightward::family::Constrained;
///
/// let only_negative = Constrained::new("negative code", |code: &i32| *code < 0);
/// let error = only_negative.failure::<()>(7).unwrap_err();
/// assert_eq!(error.to_string(), "failure payload 7 does not satisfy constraint `negative code`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFailureTypeError<E> {
    /// Name of the violated constraint.
    pub constraint: &'static str,
    /// The rejected payload.
    pub payload: E,
}

impl<E: fmt::Debug> fmt::Display for InvalidFailureTypeError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "failure payload {:?} does not satisfy constraint `{}`",
            self.payload, self.constraint
        )
    }
}

impl<E: fmt::Debug> std::error::Error for InvalidFailureTypeError<E> {}

/// Returned when a family tag is inferred from an empty untyped list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInferenceError {
    /// The operation that needed a tag.
    pub operation: &'static str,
}

impl fmt::Display for TypeInferenceError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: cannot infer the family of an empty untyped list; tag it with List::typed",
            self.operation
        )
    }
}

impl std::error::Error for TypeInferenceError {}
