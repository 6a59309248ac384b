//! One-shot deferred computation.
//!
//! A [`Thunk`] holds a computation that has not run yet. `map`, `apply` and
//! `bind` compose further work onto the pending computation without running
//! anything; nothing executes until [`Thunk::force`] is called. A do-block
//! over `Thunk` therefore builds the whole chain lazily and runs it in a
//! single `force`.

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A deferred computation producing an `A` when forced.
///
/// # Examples
///
/// ```rust
/// use dobind::control::Thunk;
/// use dobind::typeclass::Monad;
///
/// let pending = Thunk::new(|| 20).bind(|n| Thunk::new(move || n + 1));
/// assert_eq!(pending.force(), 21);
/// ```
pub struct Thunk<A: 'static> {
    run: Box<dyn FnOnce() -> A>,
}

impl<A> Thunk<A> {
    /// Creates a deferred computation from a closure.
    pub fn new<F>(computation: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            run: Box::new(computation),
        }
    }

    /// Runs the deferred computation, consuming the thunk.
    pub fn force(self) -> A {
        (self.run)()
    }
}

impl<A> fmt::Debug for Thunk<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Thunk(<deferred>)")
    }
}

impl<A> TypeConstructor for Thunk<A> {
    type Inner = A;
    type WithType<B: 'static> = Thunk<B>;
}

impl<A> Functor for Thunk<A> {
    fn map<B, F>(self, mut function: F) -> Thunk<B>
    where
        F: FnMut(A) -> B + 'static,
        B: 'static,
    {
        Thunk::new(move || function(self.force()))
    }
}

impl<A> Applicative for Thunk<A> {
    fn wrap<B>(value: B) -> Thunk<B>
    where
        B: 'static,
    {
        Thunk::new(move || value)
    }

    /// Runs the function thunk first, then the value thunk.
    fn apply<B, C>(self, value: Thunk<B>) -> Thunk<C>
    where
        A: FnMut(B) -> C,
        B: Clone + 'static,
        C: 'static,
    {
        Thunk::new(move || {
            let mut function = self.force();
            function(value.force())
        })
    }
}

impl<A> Monad for Thunk<A> {
    fn bind<B, F>(self, mut function: F) -> Thunk<B>
    where
        F: FnMut(A) -> Thunk<B> + 'static,
        B: 'static,
    {
        Thunk::new(move || function(self.force()).force())
    }
}

static_assertions::assert_impl_all!(Thunk<i32>: Monad);
