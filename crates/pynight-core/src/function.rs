//! First-class functions and composition
//!
//! Functions are ordinary values: they can be bound to new names, passed to
//! other functions and returned from them. [`UnaryFunction`] names the
//! capability "callable with one argument" so composition can be checked at
//! compile time.

/// Anything callable with a single argument
///
/// Implemented for every `Fn(T) -> R` closure or fn item, and for
/// [`Composed`], so compositions nest.
pub trait UnaryFunction<T> {
    /// Result of the call
    type Output;

    /// Apply the function to `input`
    fn call(&self, input: T) -> Self::Output;
}

impl<T, R, F> UnaryFunction<T> for F
where
    F: Fn(T) -> R,
{
    type Output = R;

    #[inline]
    fn call(&self, input: T) -> R {
        self(input)
    }
}

/// `outer ∘ inner`, built by [`compose`]
///
/// Holds both functions; neither runs until [`UnaryFunction::call`].
#[derive(Debug, Clone, Copy)]
pub struct Composed<F, G> {
    outer: F,
    inner: G,
}

impl<T, F, G> UnaryFunction<T> for Composed<F, G>
where
    G: UnaryFunction<T>,
    F: UnaryFunction<G::Output>,
{
    type Output = F::Output;

    #[inline]
    fn call(&self, input: T) -> Self::Output {
        self.outer.call(self.inner.call(input))
    }
}

impl<F, G> Composed<F, G> {
    /// Turn the composition back into a plain closure
    pub fn into_fn<T>(self) -> impl Fn(T) -> <Self as UnaryFunction<T>>::Output
    where
        Self: UnaryFunction<T>,
    {
        move |input| self.call(input)
    }
}

/// Compose two unary functions: `compose(f, g).call(x) == f(g(x))`
#[inline]
#[must_use]
pub fn compose<F, G>(f: F, g: G) -> Composed<F, G> {
    Composed { outer: f, inner: g }
}

/// Compose a whole chain of same-typed functions
///
/// Applied right to left like nested [`compose`] calls; an empty chain is the
/// identity.
pub fn compose_all<T>(functions: Vec<Box<dyn Fn(T) -> T>>) -> impl Fn(T) -> T {
    move |input| functions.iter().rev().fold(input, |acc, f| f(acc))
}

/// Call `function` with `thing` through a second binding
///
/// The rebinding is the point: `f` and `function` are the same value, which
/// is checked in debug builds only.
pub fn caller<T, R, F>(function: &F, thing: T) -> R
where
    F: Fn(T) -> R,
{
    let f = function;
    debug_assert!(std::ptr::eq(f, function));
    f(thing)
}

/// Just a function to pass around
#[inline]
#[must_use]
pub const fn square(n: i64) -> i64 {
    n * n
}

/// Add one
#[inline]
#[must_use]
pub const fn plus_one(n: i64) -> i64 {
    n + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn square_of_plus_one() {
        let h = compose(square, plus_one);
        assert_eq!(h.call(1), 4);
    }

    #[test]
    fn plus_one_of_square() {
        let h = compose(plus_one, square);
        assert_eq!(h.call(1), 2);
    }

    #[test]
    fn compose_is_lazy() {
        let calls = Cell::new(0);
        let counting = |n: i64| {
            calls.set(calls.get() + 1);
            n
        };
        let h = compose(square, counting);
        assert_eq!(calls.get(), 0);

        assert_eq!(h.call(3), 9);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn compositions_nest() {
        let h = compose(plus_one, compose(square, plus_one));
        assert_eq!(h.call(2), 10);
    }

    #[test]
    fn compose_changes_types() {
        let h = compose(|n: usize| n * 2, |s: &str| s.len());
        assert_eq!(h.call("four"), 8);
    }

    #[test]
    fn into_fn_is_callable() {
        let h = compose(square, plus_one).into_fn::<i64>();
        let mapped: Vec<i64> = (0..3).map(h).collect();
        assert_eq!(mapped, vec![1, 4, 9]);
    }

    #[test]
    fn compose_all_applies_right_to_left() {
        let functions: Vec<Box<dyn Fn(i64) -> i64>> = vec![Box::new(plus_one), Box::new(square)];
        let chain = compose_all(functions);
        assert_eq!(chain(3), 10);
    }

    #[test]
    fn compose_all_empty_is_identity() {
        let chain = compose_all::<i64>(Vec::new());
        assert_eq!(chain(42), 42);
    }

    #[test]
    fn caller_invokes_function() {
        assert_eq!(caller(&square, 5), 25);
        assert_eq!(caller(&|s: &str| s.to_uppercase(), "hi"), "HI");
    }
}
