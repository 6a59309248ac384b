//! Environment-reading computation.
//!
//! A [`Reader`] wraps a function from an environment `R` to a result `A`.
//! `map`, `apply` and `bind` compose further computations that all read the
//! same environment, which is threaded implicitly; nothing runs until
//! [`Reader::run_with`] supplies it. A do-block over `Reader` is therefore a
//! pipeline of computations sharing one read-only context.

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A one-shot computation producing an `A` from an environment `R`.
///
/// The environment must be `Clone`: `apply` and `bind` hand the same
/// environment to both sides of the composition.
///
/// # Examples
///
/// ```rust
/// use dobind::control::Reader;
/// use dobind::typeclass::Monad;
///
/// let doubled: Reader<i32, i32> = Reader::new(|environment| environment * 2);
/// assert_eq!(doubled.run_with(21), 42);
///
/// let described = Reader::ask().bind(|n: i32| Reader::new(move |bound| {
///     if n < bound { "small" } else { "large" }
/// }));
/// assert_eq!(described.run_with(10), "large");
/// ```
pub struct Reader<R: Clone + 'static, A: 'static> {
    run: Box<dyn FnOnce(R) -> A>,
}

impl<R: Clone + 'static, A> Reader<R, A> {
    /// Creates a computation from a function of the environment.
    pub fn new<F>(computation: F) -> Self
    where
        F: FnOnce(R) -> A + 'static,
    {
        Self {
            run: Box::new(computation),
        }
    }

    /// Runs the computation against an environment, consuming the reader.
    pub fn run_with(self, environment: R) -> A {
        (self.run)(environment)
    }

    /// The computation that yields a projection of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: FnOnce(R) -> A + 'static,
    {
        Self::new(projection)
    }
}

impl<R: Clone + 'static> Reader<R, R> {
    /// The computation that yields the environment itself.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R: Clone + 'static, A> fmt::Debug for Reader<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Reader(<pending>)")
    }
}

impl<R: Clone + 'static, A> TypeConstructor for Reader<R, A> {
    type Inner = A;
    type WithType<B: 'static> = Reader<R, B>;
}

impl<R: Clone + 'static, A> Functor for Reader<R, A> {
    fn map<B, F>(self, mut function: F) -> Reader<R, B>
    where
        F: FnMut(A) -> B + 'static,
        B: 'static,
    {
        Reader::new(move |environment| function((self.run)(environment)))
    }
}

impl<R: Clone + 'static, A> Applicative for Reader<R, A> {
    fn wrap<B>(value: B) -> Reader<R, B>
    where
        B: 'static,
    {
        Reader::new(move |_| value)
    }

    /// Both sides read the same environment; the function side runs first.
    fn apply<B, C>(self, value: Reader<R, B>) -> Reader<R, C>
    where
        A: FnMut(B) -> C,
        B: Clone + 'static,
        C: 'static,
    {
        Reader::new(move |environment: R| {
            let mut function = (self.run)(environment.clone());
            function((value.run)(environment))
        })
    }
}

impl<R: Clone + 'static, A> Monad for Reader<R, A> {
    fn bind<B, F>(self, mut function: F) -> Reader<R, B>
    where
        F: FnMut(A) -> Reader<R, B> + 'static,
        B: 'static,
    {
        Reader::new(move |environment: R| {
            let next = function((self.run)(environment.clone()));
            (next.run)(environment)
        })
    }
}

static_assertions::assert_impl_all!(Reader<i32, i32>: Monad);
