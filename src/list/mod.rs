//! The tagged list and its traversal.
//!
//! [`List<T, Tag>`] is an ordered, possibly empty sequence. Its `Tag` is a
//! type-state marker: a list starts [`Untyped`] and becomes [`Typed`] once it
//! is tagged with the family of its elements. Only a typed list of family
//! values can be traversed, turning `List<M<A>>` into `M<Vec<A>>`:
//!
//! ```rust
//! use rightward::family::{Outcome, Validated};
//! use rightward::list::List;
//!
//! let list = List::from(vec![Outcome::<i32, &str>::success(1), Outcome::success(2)]);
//! assert_eq!(list.typed().traverse(), Outcome::success(vec![1, 2]));
//!
//! let checks = List::from(vec![
//!     Validated::<i32, &str>::invalid("too short"),
//!     Validated::valid(3),
//!     Validated::invalid("no digits"),
//! ]);
//! assert_eq!(checks.typed().traverse(), Validated::invalid(vec!["too short", "no digits"]));
//! ```
//!
//! The element type already names the family, so [`List::typed`] only
//! records the decision. [`List::infer_tag`] is the deprecated form that
//! insists on a first element to infer from.

mod traverse;

pub use traverse::{Accumulate, Traverse};

use std::marker::PhantomData;

use crate::deprecation;
use crate::error::TypeInferenceError;
use crate::family::Maybe;
use crate::typeclass::{Semigroup, ToMonad};

/// Tag of a list whose family has not been declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Untyped;

/// Tag of a list whose elements are declared to be values of one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Typed;

/// An ordered sequence tagged with the state of its family declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct List<T, Tag = Untyped> {
    items: Vec<T>,
    tag: PhantomData<Tag>,
}

impl<T> List<T, Untyped> {
    /// An empty untyped list.
    #[inline]
    pub const fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Tags the list, failing when there is no element to infer from.
    ///
    /// # Errors
    ///
    /// Returns [`TypeInferenceError`] for an empty list.
    #[deprecated(note = "use `List::typed`, which never needs an element to infer from")]
    #[track_caller]
    pub fn infer_tag(self) -> Result<List<T, Typed>, TypeInferenceError> {
        deprecation::warn("List::infer_tag", "List::typed");
        if self.items.is_empty() {
            return Err(TypeInferenceError {
                operation: "List::infer_tag",
            });
        }
        Ok(self.typed())
    }
}

impl<T> Default for List<T, Untyped> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Tag> List<T, Tag> {
    const fn from_vec(items: Vec<T>) -> Self {
        Self {
            items,
            tag: PhantomData,
        }
    }

    /// Declares the elements to be values of their family.
    #[inline]
    pub fn typed(self) -> List<T, Typed> {
        List::from_vec(self.items)
    }

    /// Drops the family declaration.
    #[inline]
    pub fn untyped(self) -> List<T, Untyped> {
        List::from_vec(self.items)
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the list has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Gives back the elements.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// The first element.
    #[inline]
    pub fn head(&self) -> Maybe<&T> {
        self.items.first().into()
    }

    /// The last element.
    #[inline]
    pub fn last(&self) -> Maybe<&T> {
        self.items.last().into()
    }

    /// Every element but the first; empty for an empty list.
    #[must_use]
    pub fn tail(mut self) -> Self {
        if !self.items.is_empty() {
            self.items.remove(0);
        }
        self
    }

    /// Maps every element. The result is untyped: the new elements may
    /// belong to a different family.
    pub fn fmap<U, F>(self, function: F) -> List<U, Untyped>
    where
        F: FnMut(T) -> U,
    {
        self.items.into_iter().map(function).collect()
    }

    /// Maps every element to a list and concatenates the results.
    pub fn bind<U, UTag, F>(self, mut function: F) -> List<U, Untyped>
    where
        F: FnMut(T) -> List<U, UTag>,
    {
        self.items
            .into_iter()
            .flat_map(|item| function(item).items)
            .collect()
    }

    /// Keeps the elements satisfying `predicate`.
    #[must_use]
    pub fn filter<P>(mut self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.items.retain(predicate);
        self
    }

    /// Folds from the first element to the last.
    pub fn fold_left<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.items.into_iter().fold(initial, function)
    }

    /// Folds from the last element to the first.
    pub fn fold_right<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.items
            .into_iter()
            .rev()
            .fold(initial, |accumulator, item| function(item, accumulator))
    }

    /// Reverses the order of the elements.
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.items.reverse();
        self
    }
}

impl<A, Tag> List<Maybe<A>, Tag> {
    /// Keeps the payloads of the `Just` elements.
    ///
    /// ```rust
    /// use rightward::family::Maybe;
    /// use rightward::list::List;
    ///
    /// let list = List::from(vec![Maybe::just(1), Maybe::Nothing, Maybe::just(3)]);
    /// assert_eq!(list.collect_just().into_vec(), vec![1, 3]);
    /// ```
    pub fn collect_just(self) -> List<A, Untyped> {
        self.items.into_iter().filter_map(Maybe::to_option).collect()
    }
}

impl<M: Traverse> List<M, Typed> {
    /// Turns the list of family values into a family value of a `Vec`.
    ///
    /// Each element is lifted with [`Traverse::lift`] and folded with
    /// `map2`, starting from `pure(Vec::new())`. An empty list yields a
    /// Right holding an empty `Vec`.
    pub fn traverse(self) -> <M::Lifted as Accumulate>::Collected {
        <M::Lifted as Accumulate>::accumulate(self.items.into_iter().map(Traverse::lift))
    }

    /// Like [`traverse`](Self::traverse), but every element is converted by
    /// `function` instead of the default lift.
    ///
    /// ```rust
    /// use rightward::family::Validated;
    /// use rightward::list::List;
    ///
    /// let list = List::from(vec![
    ///     Validated::<i32, String>::invalid("a".into()),
    ///     Validated::invalid("b".into()),
    /// ]);
    /// // String is a Semigroup, so the errors are appended as-is.
    /// assert_eq!(list.typed().traverse_with(|item| item), Validated::invalid("ab".to_string()));
    /// ```
    pub fn traverse_with<N, F>(self, function: F) -> N::Collected
    where
        N: Accumulate,
        F: FnMut(M) -> N,
    {
        N::accumulate(self.items.into_iter().map(function))
    }
}

impl<T, Tag> Semigroup for List<T, Tag> {
    fn combine(mut self, other: Self) -> Self {
        self.items.extend(other.items);
        self
    }
}

impl<T> From<Vec<T>> for List<T, Untyped> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> FromIterator<T> for List<T, Untyped> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::from_vec(iterator.into_iter().collect())
    }
}

impl<T, Tag> IntoIterator for List<T, Tag> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, Tag> IntoIterator for &'a List<T, Tag> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Unwrapping a list in do-notation traverses it first. An untyped list is
/// tagged from its element type, so an empty one unwraps to an empty `Vec`.
impl<M: Traverse, Tag> ToMonad for List<M, Tag> {
    type Monad = <M::Lifted as Accumulate>::Collected;

    fn to_monad(self) -> Self::Monad {
        self.typed().traverse()
    }
}

impl<M: Traverse> ToMonad for Vec<M> {
    type Monad = <M::Lifted as Accumulate>::Collected;

    fn to_monad(self) -> Self::Monad {
        List::from(self).typed().traverse()
    }
}
