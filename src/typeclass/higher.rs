//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Option<_>` or `Vec<_>` as type constructors
//! directly. This module uses a GAT to work around that limitation, giving
//! the capability traits ([`Functor`](super::Functor),
//! [`Applicative`](super::Applicative), [`Monad`](super::Monad)) a common
//! foundation.

/// A trait representing a type constructor.
///
/// Implementing types are a type constructor applied to some payload type,
/// for example `Option<A>` or `Vec<A>`. `WithType<B>` re-applies the same
/// constructor to a different payload type.
///
/// The `B: 'static` bound on the GAT allows instances that store their
/// payload behind a type-erased boxed closure (see
/// [`Thunk`](crate::control::Thunk)).
///
/// # Example
///
/// ```rust
/// use dobind::typeclass::TypeConstructor;
///
/// fn rewrap<T: TypeConstructor>(_value: T) -> T::WithType<String>
/// where
///     T::WithType<String>: Default,
/// {
///     Default::default()
/// }
///
/// let none_string: Option<String> = rewrap(Some(42));
/// assert_eq!(none_string, None);
/// ```
pub trait TypeConstructor {
    /// The payload type this constructor is currently applied to.
    type Inner;

    /// The same type constructor applied to a different payload type `B`.
    type WithType<B: 'static>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B: 'static> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B: 'static> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B: 'static> = Vec<B>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B: 'static> = Box<B>;
}
