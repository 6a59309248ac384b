//! Monad capability - sequencing dependent wrapped computations.
//!
//! A [`Monad`] adds `bind` (generalized flat-map) on top of
//! [`Applicative`](super::Applicative): the continuation passed to `bind`
//! receives the resolved payload and decides the next wrapped computation.
//! `bind` also governs short-circuiting - a wrapped value encoding absence,
//! failure or emptiness never invokes the continuation, and the whole chain
//! evaluates to that value.
//!
//! The sequencing engine in [`block`](crate::block) is derived entirely from
//! this capability.
//!
//! # Laws
//!
//! ```text
//! wrap(a).bind(f) == f(a)                            // left identity
//! m.bind(wrap) == m                                  // right identity
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))      // associativity
//! ```

use super::applicative::Applicative;

/// A capability for types that can sequence computations where each step
/// depends on the previous step's resolved payload.
///
/// # Example
///
/// ```rust
/// use dobind::typeclass::Monad;
///
/// let halved = Some(10).bind(|n| if n % 2 == 0 { Some(n / 2) } else { None });
/// assert_eq!(halved, Some(5));
/// ```
pub trait Monad: Applicative {
    /// Applies a wrapped-value-returning function to the payload and
    /// flattens the result.
    ///
    /// If `self` encodes "no further computation" (absence, error,
    /// emptiness), `function` is never invoked and that encoding propagates
    /// unchanged.
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn bind<B, F>(self, mut function: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B> + 'static,
        B: 'static,
    {
        match self {
            Some(inner) => function(inner),
            None => None,
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn bind<B, F>(self, mut function: F) -> Result<B, E>
    where
        F: FnMut(T) -> Result<B, E> + 'static,
        B: 'static,
    {
        match self {
            Ok(inner) => function(inner),
            Err(error) => Err(error),
        }
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Monad for Vec<T> {
    /// Non-deterministic sequencing: the continuation runs once per element
    /// and the results are concatenated in element order.
    #[inline]
    fn bind<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> Vec<B> + 'static,
        B: 'static,
    {
        self.into_iter().flat_map(function).collect()
    }
}

// =============================================================================
// Box<T> Implementation
// =============================================================================

impl<T> Monad for Box<T> {
    #[inline]
    fn bind<B, F>(self, mut function: F) -> Box<B>
    where
        F: FnMut(T) -> Box<B> + 'static,
        B: 'static,
    {
        function(*self)
    }
}
