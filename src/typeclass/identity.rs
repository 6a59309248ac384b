//! Identity wrapper type - the simplest capability instance.
//!
//! `Identity` wraps a single value and adds no behavior. It is the minimal
//! model for checking capability laws and a useful degenerate instance for
//! the sequencing engine (a do-block over `Identity` is plain sequential
//! evaluation).

use super::applicative::Applicative;
use super::functor::Functor;
use super::higher::TypeConstructor;
use super::monad::Monad;

/// The identity wrapper - holds a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use dobind::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B: 'static> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn map<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> B + 'static,
        B: 'static,
    {
        Identity(function(self.0))
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn wrap<B>(value: B) -> Identity<B>
    where
        B: 'static,
    {
        Identity(value)
    }

    #[inline]
    fn apply<B, C>(self, value: Identity<B>) -> Identity<C>
    where
        A: FnMut(B) -> C,
        B: Clone + 'static,
        C: 'static,
    {
        let mut function = self.0;
        Identity(function(value.0))
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn bind<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> Identity<B> + 'static,
        B: 'static,
    {
        function(self.0)
    }
}
