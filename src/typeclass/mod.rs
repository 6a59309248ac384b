//! Capability traits for wrapped-value types.
//!
//! Three strictly additive layers over a GAT-based type-constructor
//! abstraction:
//!
//! - [`Functor`]: transform the payload without changing the wrapping
//!   (`map`), with the layer-peeling derivations [`mmap`]/[`mmap2`]/[`mmap3`]
//! - [`Applicative`]: trivial construction (`wrap`) and wrapped-function
//!   combination (`apply`), with the derivations [`lift1`]..[`lift3`]
//! - [`Monad`]: dependent sequencing (`bind`), from which the
//!   [`block`](crate::block) engine derives its do-block and loop operations
//!
//! A type opts into a layer by implementing the trait; a missing capability
//! is a compile error at the point the capability is demanded, never a
//! deferred runtime failure.

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;

pub use applicative::{Applicative, Applied, lift1, lift2, lift3};
pub use functor::{Functor, mmap, mmap2, mmap3};
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;

// The instances the sequencing engine is documented against.
static_assertions::assert_impl_all!(Option<i32>: Monad);
static_assertions::assert_impl_all!(Result<i32, String>: Monad);
static_assertions::assert_impl_all!(Vec<i32>: Monad);
static_assertions::assert_impl_all!(Box<i32>: Monad);
static_assertions::assert_impl_all!(Identity<i32>: Monad);
