//! Provenance markers and the canonical Left payloads.
//!
//! Every failing value remembers where it was built. The marker is a
//! [`Trace`] holding the `#[track_caller]` location of the constructor call;
//! it is purely diagnostic and compares equal to every other trace, so two
//! failures with equal payloads are equal no matter where they came from.
//!
//! [`Failed`] and [`Absent`] are the canonical Left values: what a halted
//! do-notation block carries back to its boundary and what
//! [`RightBiased::Left`](crate::typeclass::RightBiased::Left) names for each
//! family.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::panic::Location;

/// Construction site of a Left value.
///
/// `Trace` is "phantom-equal": `==` always holds and hashing writes nothing,
/// so provenance never changes equality, ordering of hash buckets, or
/// behavior.
///
/// # Examples
///
/// ```rust
/// use rightward::trace::Trace;
///
/// let here = Trace::caller();
/// assert!(here.location().is_some());
/// assert_eq!(here, Trace::none());
/// ```
#[derive(Clone, Copy, Default)]
pub struct Trace(Option<&'static Location<'static>>);

impl Trace {
    /// Captures the location of the caller.
    #[inline]
    #[track_caller]
    pub fn caller() -> Self {
        Self(Some(Location::caller()))
    }

    /// A trace with no recorded location.
    #[inline]
    pub const fn none() -> Self {
        Self(None)
    }

    /// The recorded location, if any.
    #[inline]
    pub const fn location(&self) -> Option<&'static Location<'static>> {
        self.0
    }
}

impl PartialEq for Trace {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for Trace {}

impl Hash for Trace {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl fmt::Debug for Trace {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(location) => write!(formatter, "Trace({location})"),
            None => formatter.write_str("Trace(<unknown>)"),
        }
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(location) => write!(formatter, "{location}"),
            None => formatter.write_str("<unknown>"),
        }
    }
}

/// The Left value of the error-carrying families.
///
/// `Outcome::Failure`, `Attempt::Error` and `Validated::Invalid` all project
/// to a `Failed<E>` through [`RightBiased::into_either`](crate::typeclass::RightBiased::into_either),
/// which is what lets a failure unwrapped from one of them halt a block that
/// returns another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Failed<E> {
    /// The failure payload.
    pub error: E,
    /// Where the failing value was constructed.
    pub trace: Trace,
}

impl<E> Failed<E> {
    /// Wraps `error`, recording the caller as its provenance.
    #[inline]
    #[track_caller]
    pub fn new(error: E) -> Self {
        Self {
            error,
            trace: Trace::caller(),
        }
    }

    /// Wraps `error` with an already captured trace.
    #[inline]
    pub const fn with_trace(error: E, trace: Trace) -> Self {
        Self { error, trace }
    }

    /// Discards the trace and returns the payload.
    #[inline]
    pub fn into_error(self) -> E {
        self.error
    }

    /// Transforms the payload, keeping the original trace.
    #[inline]
    pub fn map<F, G>(self, function: G) -> Failed<F>
    where
        G: FnOnce(E) -> F,
    {
        Failed {
            error: function(self.error),
            trace: self.trace,
        }
    }
}

impl<E: fmt::Display> fmt::Display for Failed<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} (at {})", self.error, self.trace)
    }
}

/// The Left value of the optional family: the singleton "no value" marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Absent;

impl fmt::Display for Absent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("no value")
    }
}
