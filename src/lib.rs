//! # dobind
//!
//! Composable functor/applicative/monad capabilities and a named-binding
//! do-block sequencing engine.
//!
//! ## Overview
//!
//! The crate is built from three small layers:
//!
//! - **Capability traits** ([`typeclass`]): `Functor` (`map`), `Applicative`
//!   (`wrap` + `apply`) and `Monad` (`bind`) over a GAT-based
//!   [`TypeConstructor`](typeclass::TypeConstructor) abstraction, with
//!   instances for `Option`, `Result`, `Vec`, `Box`, [`Identity`](typeclass::Identity),
//!   the deferred [`Thunk`](control::Thunk) and the environment-reading
//!   [`Reader`](control::Reader).
//! - **Layer derivations**: [`mmap`](typeclass::mmap) and friends map a plain
//!   function through nested wrapping; [`lift1`](typeclass::lift1)..[`lift3`](typeclass::lift3)
//!   apply a plain function to independently wrapped arguments.
//! - **Sequencing engine** ([`block`]): [`Bindings`](block::Bindings) chains an
//!   ordered sequence of named binding expressions through `bind`, threading an
//!   accumulating [`DoState`](block::DoState) record. Short-circuiting values
//!   (`None`, `Err`, an empty `Vec`) stop the chain; no later expression runs.
//!
//! ## Example
//!
//! ```rust
//! use dobind::do_;
//! use dobind::block::{BindingValue, DoState};
//!
//! let result: Option<DoState> = do_! {
//!     x <= |_s: &DoState| Some(BindingValue::new(1_i32));
//!     y <= |s: &DoState| Some(BindingValue::new(s.get::<i32>("x").unwrap() + 1));
//! };
//! assert_eq!(result.unwrap().get::<i32>("y").unwrap(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use dobind::prelude::*;
/// ```
pub mod prelude {
    pub use crate::block::*;
    pub use crate::control::*;
    pub use crate::typeclass::*;
}

pub mod block;
pub mod control;
pub mod typeclass;
