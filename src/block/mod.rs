//! Named-binding do-blocks over any [`Monad`](crate::typeclass::Monad).
//!
//! A do-block is an ordered sequence of named binding expressions. Each
//! expression reads the [`DoState`] record holding every earlier binding and
//! produces the next wrapped value; the engine chains the expressions
//! through `bind`, so a short-circuiting value stops the whole block. The
//! [`do_!`](crate::do_) and [`loop_!`](crate::loop_) macros are the
//! front-end; [`Bindings`] is the builder they expand to.

mod engine;
mod state;

pub use engine::{Bindings, Step};
pub use state::{BindingError, BindingValue, DoState};

/// Runs an ordered sequence of named binding expressions as one do-block.
///
/// Each line is `name <= expression;` where the expression is a closure from
/// `&DoState` to a wrapped [`BindingValue`]. The block evaluates to the
/// wrapped record of every binding.
///
/// # Examples
///
/// ```rust
/// use dobind::do_;
/// use dobind::block::{BindingValue, DoState};
///
/// let result: Option<DoState> = do_! {
///     x <= |_s: &DoState| Some(BindingValue::new(2_i32));
///     y <= |s: &DoState| Some(BindingValue::new(s.get::<i32>("x").unwrap() * 10));
/// };
/// assert_eq!(result.unwrap().get::<i32>("y").unwrap(), 20);
/// ```
#[macro_export]
macro_rules! do_ {
    ($($name:ident <= $step:expr ;)+) => {
        $crate::block::Bindings::new()
            $(.bind(stringify!($name), $step))+
            .run()
    };
}

/// Runs a do-block repeatedly while a predicate over the record holds.
///
/// One full pass always runs; while the predicate returns `true` on the
/// completed record, the block runs again with that record as the seed.
///
/// # Examples
///
/// ```rust
/// use dobind::loop_;
/// use dobind::block::{BindingValue, DoState};
/// use dobind::typeclass::Identity;
///
/// let result: Identity<DoState> = loop_! {
///     while |s: &DoState| s.get_or::<i32>("n", 0) < 3;
///     n <= |s: &DoState| Identity::new(BindingValue::new(s.get_or::<i32>("n", 0) + 1));
/// };
/// assert_eq!(result.into_inner().get::<i32>("n").unwrap(), 3);
/// ```
#[macro_export]
macro_rules! loop_ {
    (while $predicate:expr ; $($name:ident <= $step:expr ;)+) => {
        $crate::block::Bindings::new()
            $(.bind(stringify!($name), $step))+
            .run_while($predicate)
    };
}
