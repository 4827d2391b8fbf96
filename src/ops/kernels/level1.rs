//! Level-1 vector kernels

use crate::dtype::Element;

/// Dot product of two strided vectors.
pub fn dot<T: Element>(n: usize, x: &[T], incx: usize, y: &[T], incy: usize) -> T {
    let mut acc = T::zero();
    for i in 0..n {
        acc = acc + x[i * incx] * y[i * incy];
    }
    acc
}

/// Sum of squares of a strided vector, `x . x`.
pub fn dot_self<T: Element>(n: usize, x: &[T], incx: usize) -> T {
    let mut acc = T::zero();
    for i in 0..n {
        let v = x[i * incx];
        acc = acc + v * v;
    }
    acc
}

/// Index of the element with the largest magnitude. Ties resolve to
/// the lowest index; returns 0 for an empty vector.
pub fn iamax<T: Element>(n: usize, x: &[T], incx: usize) -> usize {
    let mut best = 0;
    let mut best_abs = T::zero();
    for i in 0..n {
        let a = x[i * incx].abs();
        if i == 0 || a > best_abs {
            best = i;
            best_abs = a;
        }
    }
    best
}

/// `y <- alpha * x + y`, or `y <- alpha * x` when `clear` is set.
///
/// Clearing first keeps stale NaN out of the result when the output is
/// uninitialized (`0 * NaN` would otherwise propagate).
pub fn axpy<T: Element>(
    n: usize,
    alpha: T,
    x: &[T],
    incx: usize,
    y: &mut [T],
    incy: usize,
    clear: bool,
) {
    if clear {
        for i in 0..n {
            y[i * incy] = alpha * x[i * incx];
        }
    } else {
        for i in 0..n {
            y[i * incy] = y[i * incy] + alpha * x[i * incx];
        }
    }
}

/// `x <- alpha * x`.
pub fn scal<T: Element>(n: usize, alpha: T, x: &mut [T], incx: usize) {
    for i in 0..n {
        x[i * incx] = alpha * x[i * incx];
    }
}
