use super::{Halt, Scope};
use crate::typeclass::{RightBiased, ToMonad, TypeConstructor};

/// A tuple of values that [`Scope::unwrap_all`] can unwrap together.
///
/// Elements are unwrapped in argument order; the first Left halts and the
/// remaining elements are never inspected.
pub trait UnwrapAll<L> {
    /// The tuple of payloads.
    type Output;

    /// Unwraps every element inside `scope`.
    ///
    /// # Errors
    ///
    /// Returns a [`Halt`] carrying the leftmost Left.
    fn unwrap_all<'scope>(self, scope: Scope<'scope, L>) -> Result<Self::Output, Halt<'scope, L>>;
}

macro_rules! impl_unwrap_all {
    ($($value:ident: $family:ident),+) => {
        impl<L, $($family),+> UnwrapAll<L> for ($($family,)+)
        where
            $(
                $family: ToMonad,
                L: From<<$family::Monad as RightBiased>::Left>,
            )+
        {
            type Output = ($(<$family::Monad as TypeConstructor>::Inner,)+);

            #[track_caller]
            fn unwrap_all<'scope>(
                self,
                scope: Scope<'scope, L>,
            ) -> Result<Self::Output, Halt<'scope, L>> {
                let ($($value,)+) = self;
                Ok(($(scope.unwrap($value)?,)+))
            }
        }
    };
}

impl_unwrap_all!(a: A);
impl_unwrap_all!(a: A, b: B);
impl_unwrap_all!(a: A, b: B, c: C);
impl_unwrap_all!(a: A, b: B, c: C, d: D);
impl_unwrap_all!(a: A, b: B, c: C, d: D, e: E);
impl_unwrap_all!(a: A, b: B, c: C, d: D, e: E, f: F);
impl_unwrap_all!(a: A, b: B, c: C, d: D, e: E, f: F, g: G);
impl_unwrap_all!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H);
