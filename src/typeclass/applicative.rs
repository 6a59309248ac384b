//! Applicative capability - combining independently wrapped values.
//!
//! An [`Applicative`] adds two operations on top of [`Functor`]:
//!
//! - `wrap` lifts a plain value into the minimal wrapped form, and
//! - `apply` combines a wrapped function with a wrapped value according to
//!   the concrete type's own rule ("apply if present", "cartesian product",
//!   "run then apply").
//!
//! The free functions [`lift1`], [`lift2`] and [`lift3`] derive from these a
//! way to apply a plain n-ary function to n independently wrapped arguments:
//! the function is curried, wrapped via `wrap`, then combined with each
//! argument strictly left to right using `apply`. Left-to-right order is
//! observable for multi-valued instances, whose combination order determines
//! the result sequence.
//!
//! # Laws
//!
//! ```text
//! wrap(|x| x).apply(v) == v                  // identity
//! wrap(f).apply(wrap(x)) == wrap(f(x))       // homomorphism
//! ```

use super::functor::Functor;
use super::higher::TypeConstructor;

/// A boxed single-argument stage of a curried function.
///
/// `lift2`/`lift3` thread partially applied functions through `apply` as
/// wrapped payloads; boxing gives those intermediate payloads nameable types.
pub type Applied<A, B> = Box<dyn FnMut(A) -> B>;

/// A capability for types that support lifting plain values and combining
/// wrapped function with wrapped value.
///
/// # Example
///
/// ```rust
/// use dobind::typeclass::Applicative;
///
/// let wrapped: Option<i32> = <Option<i32>>::wrap(42);
/// assert_eq!(wrapped, Some(42));
///
/// let add_one: Option<fn(i32) -> i32> = Some(|n| n + 1);
/// assert_eq!(add_one.apply(Some(5)), Some(6));
/// ```
pub trait Applicative: Functor {
    /// Constructs the minimal wrapped value holding exactly `value`.
    fn wrap<B>(value: B) -> Self::WithType<B>
    where
        B: 'static;

    /// Combines a wrapped function (`self`) with a wrapped value, per the
    /// concrete type's own combination rule.
    ///
    /// `B: Clone` because multi-valued instances apply every contained
    /// function to every contained value.
    fn apply<B, C>(self, value: Self::WithType<B>) -> Self::WithType<C>
    where
        Self::Inner: FnMut(B) -> C,
        B: Clone + 'static,
        C: 'static;
}

/// Refactors a unary function to act on a wrapped argument via
/// `wrap(f).apply(a)`.
///
/// Arity 0 needs no derivation: it is [`Applicative::wrap`] itself.
///
/// # Example
///
/// ```rust
/// use dobind::typeclass::lift1;
///
/// assert_eq!(lift1(|n: i32| n * 2)(Some(21)), Some(42));
/// ```
pub fn lift1<Fa, B, F>(function: F) -> impl FnOnce(Fa) -> Fa::WithType<B>
where
    Fa: Applicative,
    Fa::Inner: Clone + 'static,
    B: 'static,
    F: FnMut(Fa::Inner) -> B + 'static,
    Fa::WithType<Applied<Fa::Inner, B>>: Applicative<Inner = Applied<Fa::Inner, B>>,
    Fa::WithType<Applied<Fa::Inner, B>>: TypeConstructor<WithType<Fa::Inner> = Fa>,
    Fa::WithType<Applied<Fa::Inner, B>>: TypeConstructor<WithType<B> = Fa::WithType<B>>,
{
    move |first| {
        Fa::wrap::<Applied<Fa::Inner, B>>(Box::new(function)).apply::<Fa::Inner, B>(first)
    }
}

/// Refactors a binary function to act on two wrapped arguments via
/// `wrap(curry(f)).apply(a1).apply(a2)`.
///
/// Arguments are combined strictly left to right; for multi-valued instances
/// the result is the row-major cartesian product.
///
/// # Example
///
/// ```rust
/// use dobind::typeclass::lift2;
///
/// let products = lift2(|a: i32, b: i32| a * b)(vec![1, 2], vec![10, 100]);
/// assert_eq!(products, vec![10, 100, 20, 200]);
/// ```
pub fn lift2<Fa, B, C, F>(function: F) -> impl FnOnce(Fa, Fa::WithType<B>) -> Fa::WithType<C>
where
    Fa: Applicative,
    Fa::Inner: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    F: FnMut(Fa::Inner, B) -> C + Clone + 'static,
    Fa::WithType<Applied<Fa::Inner, Applied<B, C>>>:
        Applicative<Inner = Applied<Fa::Inner, Applied<B, C>>>,
    Fa::WithType<Applied<Fa::Inner, Applied<B, C>>>: TypeConstructor<WithType<Fa::Inner> = Fa>,
    Fa::WithType<Applied<Fa::Inner, Applied<B, C>>>:
        TypeConstructor<WithType<Applied<B, C>> = Fa::WithType<Applied<B, C>>>,
    Fa::WithType<Applied<B, C>>: Applicative<Inner = Applied<B, C>>,
    Fa::WithType<Applied<B, C>>: TypeConstructor<WithType<B> = Fa::WithType<B>>,
    Fa::WithType<Applied<B, C>>: TypeConstructor<WithType<C> = Fa::WithType<C>>,
{
    move |first, second| {
        let curried: Applied<Fa::Inner, Applied<B, C>> = Box::new(move |a: Fa::Inner| {
            let mut partial = function.clone();
            Box::new(move |b: B| partial(a.clone(), b)) as Applied<B, C>
        });
        Fa::wrap(curried)
            .apply::<Fa::Inner, Applied<B, C>>(first)
            .apply::<B, C>(second)
    }
}

/// Refactors a ternary function to act on three wrapped arguments, combined
/// strictly left to right. See [`lift2`].
pub fn lift3<Fa, B, C, D, F>(
    function: F,
) -> impl FnOnce(Fa, Fa::WithType<B>, Fa::WithType<C>) -> Fa::WithType<D>
where
    Fa: Applicative,
    Fa::Inner: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: 'static,
    F: FnMut(Fa::Inner, B, C) -> D + Clone + 'static,
    Fa::WithType<Applied<Fa::Inner, Applied<B, Applied<C, D>>>>:
        Applicative<Inner = Applied<Fa::Inner, Applied<B, Applied<C, D>>>>,
    Fa::WithType<Applied<Fa::Inner, Applied<B, Applied<C, D>>>>:
        TypeConstructor<WithType<Fa::Inner> = Fa>,
    Fa::WithType<Applied<Fa::Inner, Applied<B, Applied<C, D>>>>:
        TypeConstructor<WithType<Applied<B, Applied<C, D>>> = Fa::WithType<Applied<B, Applied<C, D>>>>,
    Fa::WithType<Applied<B, Applied<C, D>>>: Applicative<Inner = Applied<B, Applied<C, D>>>,
    Fa::WithType<Applied<B, Applied<C, D>>>: TypeConstructor<WithType<B> = Fa::WithType<B>>,
    Fa::WithType<Applied<B, Applied<C, D>>>:
        TypeConstructor<WithType<Applied<C, D>> = Fa::WithType<Applied<C, D>>>,
    Fa::WithType<Applied<C, D>>: Applicative<Inner = Applied<C, D>>,
    Fa::WithType<Applied<C, D>>: TypeConstructor<WithType<C> = Fa::WithType<C>>,
    Fa::WithType<Applied<C, D>>: TypeConstructor<WithType<D> = Fa::WithType<D>>,
{
    move |first, second, third| {
        let curried: Applied<Fa::Inner, Applied<B, Applied<C, D>>> =
            Box::new(move |a: Fa::Inner| {
                let function = function.clone();
                Box::new(move |b: B| {
                    let mut partial = function.clone();
                    let a = a.clone();
                    Box::new(move |c: C| partial(a.clone(), b.clone(), c)) as Applied<C, D>
                }) as Applied<B, Applied<C, D>>
            });
        Fa::wrap(curried)
            .apply::<Fa::Inner, Applied<B, Applied<C, D>>>(first)
            .apply::<B, Applied<C, D>>(second)
            .apply::<C, D>(third)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn wrap<B>(value: B) -> Option<B>
    where
        B: 'static,
    {
        Some(value)
    }

    #[inline]
    fn apply<B, C>(self, value: Option<B>) -> Option<C>
    where
        A: FnMut(B) -> C,
        B: Clone + 'static,
        C: 'static,
    {
        match (self, value) {
            (Some(mut function), Some(inner)) => Some(function(inner)),
            _ => None,
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn wrap<B>(value: B) -> Result<B, E>
    where
        B: 'static,
    {
        Ok(value)
    }

    /// When both sides fail, the function's error wins: combination is
    /// strictly left to right.
    #[inline]
    fn apply<B, C>(self, value: Result<B, E>) -> Result<C, E>
    where
        T: FnMut(B) -> C,
        B: Clone + 'static,
        C: 'static,
    {
        match (self, value) {
            (Ok(mut function), Ok(inner)) => Ok(function(inner)),
            (Err(error), _) | (Ok(_), Err(error)) => Err(error),
        }
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Applicative for Vec<T> {
    #[inline]
    fn wrap<B>(value: B) -> Vec<B>
    where
        B: 'static,
    {
        vec![value]
    }

    /// Cartesian combination in row-major order: every function is applied
    /// to every value, functions varying slowest.
    fn apply<B, C>(self, values: Vec<B>) -> Vec<C>
    where
        T: FnMut(B) -> C,
        B: Clone + 'static,
        C: 'static,
    {
        let mut output = Vec::with_capacity(self.len().saturating_mul(values.len()));
        for mut function in self {
            for value in &values {
                output.push(function(value.clone()));
            }
        }
        output
    }
}

// =============================================================================
// Box<T> Implementation
// =============================================================================

impl<T> Applicative for Box<T> {
    #[inline]
    fn wrap<B>(value: B) -> Box<B>
    where
        B: 'static,
    {
        Box::new(value)
    }

    #[inline]
    fn apply<B, C>(self, value: Box<B>) -> Box<C>
    where
        T: FnMut(B) -> C,
        B: Clone + 'static,
        C: 'static,
    {
        let mut function = *self;
        Box::new(function(*value))
    }
}
