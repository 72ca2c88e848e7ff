//! Unary operations accepted by [`transform`](crate::transform).

/// A function of one argument mapping an element to its replacement.
///
/// Implemented for every `Fn(T) -> T`, so plain functions, closures and
/// partially applied operators can be passed wherever a `UnaryOp` is
/// expected, alongside named callables such as [`Adder`].
pub trait UnaryOp<T> {
    fn apply(&self, x: T) -> T;
}

impl<T, F> UnaryOp<T> for F
where
    F: Fn(T) -> T,
{
    fn apply(&self, x: T) -> T {
        self(x)
    }
}

/// A named callable that adds a fixed value to its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Adder {
    value: i32,
}

impl Adder {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    /// The value added on every application.
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl UnaryOp<i32> for Adder {
    fn apply(&self, x: i32) -> i32 {
        x + self.value
    }
}

/// Fix the right operand of a binary function.
///
/// `right` is copied into the returned closure, so later changes to the
/// caller's binding do not reach it.
pub fn bind_second<A, B, R, F>(op: F, right: B) -> impl Fn(A) -> R
where
    F: Fn(A, B) -> R,
    B: Copy,
{
    move |left| op(left, right)
}

/// Closure adding `k` to its argument.
pub fn add_fn(k: i32) -> impl Fn(i32) -> i32 {
    move |x| x + k
}
