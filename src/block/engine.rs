//! The do-block sequencing engine.
//!
//! [`Bindings`] collects an ordered sequence of named binding expressions and
//! runs them as one `bind` chain, threading an accumulating [`DoState`]
//! record. Each expression sees exactly the bindings declared before it; a
//! short-circuiting value stops the chain and no later expression runs.

use std::fmt;
use std::rc::Rc;

use super::state::{BindingValue, DoState};
use crate::typeclass::{Monad, TypeConstructor};

/// A binding expression: reads the record accumulated so far and produces
/// the next wrapped value.
pub type Step<M> = Rc<dyn Fn(&DoState) -> M>;

/// An ordered sequence of named binding expressions over the monad `M`.
///
/// Building the sequence requires `M` to carry the full monad capability;
/// a type that stops at `map` or `apply` is rejected where the sequence is
/// constructed, not when it runs.
///
/// # Examples
///
/// ```rust
/// use dobind::block::{Bindings, BindingValue};
///
/// let result = Bindings::new()
///     .bind("x", |_| Some(BindingValue::new(2_i32)))
///     .bind("y", |state| {
///         let x: i32 = state.get("x").ok()?;
///         Some(BindingValue::new(x * 10))
///     })
///     .run();
/// assert_eq!(result.unwrap().get::<i32>("y").unwrap(), 20);
/// ```
pub struct Bindings<M> {
    steps: Vec<(&'static str, Step<M>)>,
}

impl<M> Bindings<M>
where
    M: Monad<Inner = BindingValue> + 'static,
    M::WithType<DoState>: Monad<Inner = DoState>,
    M::WithType<DoState>: TypeConstructor<WithType<DoState> = M::WithType<DoState>>,
{
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a named binding expression.
    ///
    /// The expression receives the record holding every earlier binding and
    /// produces the wrapped value to store under `name`. Re-using a name
    /// overwrites the earlier entry when the later expression runs.
    #[must_use]
    pub fn bind<F>(mut self, name: &'static str, step: F) -> Self
    where
        F: Fn(&DoState) -> M + 'static,
    {
        self.steps.push((name, Rc::new(step)));
        self
    }

    /// Runs the sequence from an empty record.
    pub fn run(&self) -> M::WithType<DoState> {
        self.run_from(DoState::new())
    }

    /// Runs the sequence from a pre-populated record.
    ///
    /// The chain starts at `wrap(seed)`; each expression is bound in
    /// declaration order and its value inserted under its name before the
    /// next expression runs.
    pub fn run_from(&self, seed: DoState) -> M::WithType<DoState> {
        let mut chained = M::wrap(seed);
        for (name, step) in &self.steps {
            let name = *name;
            let step = Rc::clone(step);
            chained = chained.bind::<DoState, _>(move |state: DoState| {
                step(&state).map(move |value: BindingValue| {
                    let mut next = state.clone();
                    next.insert(name, value);
                    next
                })
            });
        }
        chained
    }

    /// Runs the sequence repeatedly while `predicate` holds.
    ///
    /// One full pass always runs; the predicate is consulted on each
    /// completed record and, while it returns `true`, the sequence is bound
    /// in again with that record as the seed. State accumulates across
    /// passes, later passes overwriting earlier bindings by name. A
    /// short-circuiting value ends the recursion the same way it ends a
    /// single pass.
    pub fn run_while<P>(&self, predicate: P) -> M::WithType<DoState>
    where
        P: Fn(&DoState) -> bool + 'static,
    {
        self.run_while_from(predicate, DoState::new())
    }

    /// Runs the sequence repeatedly while `predicate` holds, starting from a
    /// pre-populated record.
    pub fn run_while_from<P>(&self, predicate: P, seed: DoState) -> M::WithType<DoState>
    where
        P: Fn(&DoState) -> bool + 'static,
    {
        self.advance(Rc::new(predicate), seed)
    }

    fn advance(
        &self,
        predicate: Rc<dyn Fn(&DoState) -> bool>,
        seed: DoState,
    ) -> M::WithType<DoState> {
        let repeat = self.clone();
        self.run_from(seed).bind::<DoState, _>(move |state: DoState| {
            if predicate(&state) {
                repeat.advance(Rc::clone(&predicate), state)
            } else {
                M::wrap(state)
            }
        })
    }
}

impl<M> Clone for Bindings<M> {
    fn clone(&self) -> Self {
        Self {
            steps: self.steps.clone(),
        }
    }
}

impl<M> Default for Bindings<M>
where
    M: Monad<Inner = BindingValue> + 'static,
    M::WithType<DoState>: Monad<Inner = DoState>,
    M::WithType<DoState>: TypeConstructor<WithType<DoState> = M::WithType<DoState>>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for Bindings<M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.steps.iter().map(|(name, _)| *name).collect();
        formatter.debug_struct("Bindings").field("steps", &names).finish()
    }
}
