//! Associative combination of failure payloads.
//!
//! `Validated` keeps every failure it meets by combining their payloads,
//! so an error type that should pile up across `map2` and `apply` must
//! implement [`Semigroup`]. `combine` has to be associative:
//! `a.combine(b).combine(c) == a.combine(b.combine(c))`.
//!
//! ```rust
//! use rightward::typeclass::Semigroup;
//!
//! assert_eq!(vec!["age"].combine(vec!["email"]), vec!["age", "email"]);
//! assert_eq!(String::from("bad age; ").combine(String::from("bad email")), "bad age; bad email");
//! ```

/// Values that can be merged, keeping `self` before `other`.
pub trait Semigroup {
    /// Appends `other` to `self`.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}
