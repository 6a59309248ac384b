//! Functor capability - mapping over wrapped values.
//!
//! A [`Functor`] applies a plain function to the payload(s) of a wrapped
//! value without changing the wrapping structure. The free functions
//! [`mmap`], [`mmap2`] and [`mmap3`] refactor a plain function into one that
//! maps through one, two or three layers of wrapping.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy:
//!
//! ```text
//! fa.map(|x| x) == fa                        // identity
//! fa.map(f).map(g) == fa.map(|x| g(f(x)))   // composition
//! ```

use super::higher::TypeConstructor;

/// A capability for types whose payload can be transformed by a plain
/// function while the wrapping structure is preserved.
///
/// `map` takes `FnMut` rather than `FnOnce` so that multi-valued instances
/// (`Vec`) share the same trait as single-shot instances; the `'static`
/// bound allows deferred instances to store the function.
///
/// # Example
///
/// ```rust
/// use dobind::typeclass::Functor;
///
/// let doubled = Functor::map(Some(5), |n: i32| n * 2);
/// assert_eq!(doubled, Some(10));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the payload(s) inside the wrapped value.
    ///
    /// A failure encoded by the wrapping (absence, error, emptiness) is
    /// preserved untouched; the function is simply never invoked.
    fn map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B + 'static,
        B: 'static;
}

/// Refactors a function to map through one layer of wrapping.
///
/// `mmap(f)(w)` is `w.map(f)`; it exists as the depth-1 base of the
/// [`mmap2`]/[`mmap3`] family.
///
/// # Example
///
/// ```rust
/// use dobind::typeclass::mmap;
///
/// assert_eq!(mmap(|n: i32| n * 2)(Some(5)), Some(10));
/// ```
pub fn mmap<Fa, B, F>(function: F) -> impl FnOnce(Fa) -> Fa::WithType<B>
where
    Fa: Functor,
    F: FnMut(Fa::Inner) -> B + 'static,
    B: 'static,
{
    move |wrapped| wrapped.map(function)
}

/// Refactors a function to map through two layers of wrapping.
///
/// `mmap2(f)` is structurally `map(mmap(f))`: the outer layer is peeled with
/// `map`, the inner layer with another `map`. Depth is fixed statically by
/// choosing the variant, not discovered by runtime inspection.
///
/// # Example
///
/// ```rust
/// use dobind::typeclass::mmap2;
///
/// assert_eq!(mmap2(|n: i32| n + 1)(Some(vec![1, 2])), Some(vec![2, 3]));
/// ```
pub fn mmap2<Ffa, B, F>(
    function: F,
) -> impl FnOnce(Ffa) -> Ffa::WithType<<Ffa::Inner as TypeConstructor>::WithType<B>>
where
    Ffa: Functor,
    Ffa::Inner: Functor,
    <Ffa::Inner as TypeConstructor>::WithType<B>: 'static,
    F: FnMut(<Ffa::Inner as TypeConstructor>::Inner) -> B + Clone + 'static,
    B: 'static,
{
    move |wrapped| wrapped.map(move |inner: Ffa::Inner| inner.map(function.clone()))
}

/// Refactors a function to map through three layers of wrapping.
///
/// See [`mmap2`]; this is one layer deeper.
pub fn mmap3<Fffa, B, F>(
    function: F,
) -> impl FnOnce(
    Fffa,
) -> Fffa::WithType<
    <Fffa::Inner as TypeConstructor>::WithType<
        <<Fffa::Inner as TypeConstructor>::Inner as TypeConstructor>::WithType<B>,
    >,
>
where
    Fffa: Functor,
    Fffa::Inner: Functor,
    <Fffa::Inner as TypeConstructor>::Inner: Functor,
    <<Fffa::Inner as TypeConstructor>::Inner as TypeConstructor>::WithType<B>: 'static,
    <Fffa::Inner as TypeConstructor>::WithType<
        <<Fffa::Inner as TypeConstructor>::Inner as TypeConstructor>::WithType<B>,
    >: 'static,
    F: FnMut(<<Fffa::Inner as TypeConstructor>::Inner as TypeConstructor>::Inner) -> B
        + Clone
        + 'static,
    B: 'static,
{
    move |wrapped| {
        wrapped.map(move |middle: Fffa::Inner| {
            let function = function.clone();
            middle.map(move |inner: <Fffa::Inner as TypeConstructor>::Inner| {
                inner.map(function.clone())
            })
        })
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn map<B, F>(self, mut function: F) -> Option<B>
    where
        F: FnMut(A) -> B + 'static,
        B: 'static,
    {
        match self {
            Some(inner) => Some(function(inner)),
            None => None,
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn map<B, F>(self, mut function: F) -> Result<B, E>
    where
        F: FnMut(T) -> B + 'static,
        B: 'static,
    {
        match self {
            Ok(inner) => Ok(function(inner)),
            Err(error) => Err(error),
        }
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Functor for Vec<T> {
    #[inline]
    fn map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B + 'static,
        B: 'static,
    {
        self.into_iter().map(function).collect()
    }
}

// =============================================================================
// Box<T> Implementation
// =============================================================================

impl<T> Functor for Box<T> {
    #[inline]
    fn map<B, F>(self, mut function: F) -> Box<B>
    where
        F: FnMut(T) -> B + 'static,
        B: 'static,
    {
        Box::new(function(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    macro_rules! functor_law_tests {
        ($($case:ident => $wrapped:expr),* $(,)?) => {
            paste::paste! {
                $(
                    #[rstest]
                    fn [<$case _identity_law>]() {
                        let wrapped = $wrapped;
                        assert_eq!(Functor::map(wrapped.clone(), |x| x), wrapped);
                    }

                    #[rstest]
                    fn [<$case _composition_law>]() {
                        let wrapped = $wrapped;
                        let left =
                            Functor::map(Functor::map(wrapped.clone(), |n| n + 1), |n| n * 2);
                        let right = Functor::map(wrapped, |n| (n + 1) * 2);
                        assert_eq!(left, right);
                    }
                )*
            }
        };
    }

    functor_law_tests! {
        option_some => Some(5),
        option_none => Option::<i32>::None,
        result_ok => Ok::<i32, String>(5),
        result_err => Err::<i32, String>("error".to_owned()),
        vec_values => vec![1, 2, 3],
        vec_empty => Vec::<i32>::new(),
        boxed => Box::new(5),
    }

    #[rstest]
    fn option_map_transforms_payload() {
        let transformed = Functor::map(Some(5), |n: i32| n.to_string());
        assert_eq!(transformed, Some("5".to_owned()));
    }

    #[rstest]
    fn result_map_preserves_error() {
        let failed: Result<i32, String> = Err("broken".to_owned());
        let transformed = Functor::map(failed, |n: i32| n.to_string());
        assert_eq!(transformed, Err("broken".to_owned()));
    }

    #[rstest]
    fn vec_map_transforms_all_elements() {
        let doubled = Functor::map(vec![1, 2, 3], |n: i32| n * 2);
        assert_eq!(doubled, vec![2, 4, 6]);
    }

    #[rstest]
    fn mmap_single_layer() {
        assert_eq!(mmap(|n: i32| n * 2)(Some(5)), Some(10));
        assert_eq!(mmap(|n: i32| n * 2)(vec![1, 2]), vec![2, 4]);
    }

    #[rstest]
    fn mmap2_two_layers() {
        let result = mmap2(|n: i32| n + 1)(Some(vec![1, 2]));
        assert_eq!(result, Some(vec![2, 3]));

        let result = mmap2(|n: i32| n + 1)(vec![vec![1], vec![2, 3]]);
        assert_eq!(result, vec![vec![2], vec![3, 4]]);
    }

    #[rstest]
    fn mmap2_identity_law() {
        let nested = Some(vec![1, 2, 3]);
        assert_eq!(mmap2(|n: i32| n)(nested.clone()), nested);
    }

    #[rstest]
    fn mmap2_composition_law() {
        let nested = vec![Some(1), None, Some(3)];
        let left = mmap2(|n: i32| n * 2)(mmap2(|n: i32| n + 1)(nested.clone()));
        let right = mmap2(|n: i32| (n + 1) * 2)(nested);
        assert_eq!(left, right);
    }

    #[rstest]
    fn mmap3_three_layers() {
        let nested = vec![vec![vec![1], vec![2, 3]]];
        let result = mmap3(|n: i32| n * 2)(nested);
        assert_eq!(result, vec![vec![vec![2], vec![4, 6]]]);
    }

    #[rstest]
    fn mmap3_mixed_wrappers() {
        let nested: Option<Vec<Option<i32>>> = Some(vec![Some(1), None]);
        let result = mmap3(|n: i32| n + 10)(nested);
        assert_eq!(result, Some(vec![Some(11), None]));
    }

    /// A panic inside the mapped function propagates unchanged; the functor
    /// layer adds no handling of its own.
    #[rstest]
    #[should_panic(expected = "inner failure")]
    fn mmap_is_transparent_to_panics() {
        let _ = mmap(|_: i32| -> i32 { panic!("inner failure") })(Some(1));
    }
}
