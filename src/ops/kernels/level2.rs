//! Level-2 matrix-vector kernels
//!
//! All matrices are column-major with element `(i, j)` at `i + j * lda`.

#![allow(clippy::too_many_arguments)]

use crate::dtype::Element;
use crate::ops::{Diag, Trans, Uplo};

/// `y <- alpha * op(A) * x + beta * y` with `op` per `trans`.
///
/// `A` is `m x n` as stored. `beta == 0` skips reading `y`.
pub fn gemv<T: Element>(
    trans: Trans,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: usize,
    beta: T,
    y: &mut [T],
    incy: usize,
) {
    let leny = match trans {
        Trans::No => m,
        Trans::Trans => n,
    };
    if beta == T::zero() {
        for i in 0..leny {
            y[i * incy] = T::zero();
        }
    } else if beta != T::one() {
        for i in 0..leny {
            y[i * incy] = beta * y[i * incy];
        }
    }
    match trans {
        Trans::No => {
            for j in 0..n {
                let t = alpha * x[j * incx];
                for i in 0..m {
                    y[i * incy] = y[i * incy] + t * a[i + j * lda];
                }
            }
        }
        Trans::Trans => {
            for j in 0..n {
                let mut acc = T::zero();
                for i in 0..m {
                    acc = acc + a[i + j * lda] * x[i * incx];
                }
                y[j * incy] = y[j * incy] + alpha * acc;
            }
        }
    }
}

/// `y <- alpha * A * x + beta * y` for symmetric `A`, referencing only
/// the `uplo` triangle.
pub fn symv<T: Element>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: usize,
    beta: T,
    y: &mut [T],
    incy: usize,
) {
    if beta == T::zero() {
        for i in 0..n {
            y[i * incy] = T::zero();
        }
    } else if beta != T::one() {
        for i in 0..n {
            y[i * incy] = beta * y[i * incy];
        }
    }
    for j in 0..n {
        for i in 0..n {
            let (r, c) = match uplo {
                Uplo::Upper => {
                    if i <= j {
                        (i, j)
                    } else {
                        (j, i)
                    }
                }
                Uplo::Lower => {
                    if i >= j {
                        (i, j)
                    } else {
                        (j, i)
                    }
                }
            };
            y[i * incy] = y[i * incy] + alpha * a[r + c * lda] * x[j * incx];
        }
    }
}

/// `x <- op(A) * x` for triangular `A`.
pub fn trmv<T: Element>(
    uplo: Uplo,
    trans: Trans,
    diag: Diag,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: usize,
) {
    // Traversal order lets the update run in place.
    match (uplo, trans) {
        (Uplo::Upper, Trans::No) | (Uplo::Lower, Trans::Trans) => {
            for i in 0..n {
                let mut acc = match diag {
                    Diag::NonUnit => tri_at(uplo, trans, i, i, a, lda) * x[i * incx],
                    Diag::Unit => x[i * incx],
                };
                for j in i + 1..n {
                    acc = acc + tri_at(uplo, trans, i, j, a, lda) * x[j * incx];
                }
                x[i * incx] = acc;
            }
        }
        (Uplo::Lower, Trans::No) | (Uplo::Upper, Trans::Trans) => {
            for i in (0..n).rev() {
                let mut acc = match diag {
                    Diag::NonUnit => tri_at(uplo, trans, i, i, a, lda) * x[i * incx],
                    Diag::Unit => x[i * incx],
                };
                for j in 0..i {
                    acc = acc + tri_at(uplo, trans, i, j, a, lda) * x[j * incx];
                }
                x[i * incx] = acc;
            }
        }
    }
}

/// Element `op(A)[i, j]` for a triangular operand.
#[inline]
fn tri_at<T: Element>(uplo: Uplo, trans: Trans, i: usize, j: usize, a: &[T], lda: usize) -> T {
    let (r, c) = match trans {
        Trans::No => (i, j),
        Trans::Trans => (j, i),
    };
    let stored = match uplo {
        Uplo::Upper => r <= c,
        Uplo::Lower => r >= c,
    };
    debug_assert!(stored);
    a[r + c * lda]
}

/// Product with a diagonal matrix held as a vector:
/// `y <- alpha * diag(d) * x + beta * y`.
///
/// `beta == 0` skips reading `y` so stale NaN does not propagate.
pub fn gdmv<T: Element>(
    n: usize,
    alpha: T,
    d: &[T],
    incd: usize,
    x: &[T],
    incx: usize,
    beta: T,
    y: &mut [T],
    incy: usize,
) {
    for i in 0..n {
        let v = alpha * d[i * incd] * x[i * incx];
        let e = &mut y[i * incy];
        *e = if beta == T::zero() { v } else { v + beta * *e };
    }
}

/// Solve `op(A) * x = x` in place for triangular `A`.
///
/// # Panics
///
/// Panics on a zero diagonal element when `diag` is `NonUnit`.
pub fn trsv<T: Element>(
    uplo: Uplo,
    trans: Trans,
    diag: Diag,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: usize,
) {
    let lower = matches!(
        (uplo, trans),
        (Uplo::Lower, Trans::No) | (Uplo::Upper, Trans::Trans)
    );
    if lower {
        // Forward substitution.
        for i in 0..n {
            let mut acc = x[i * incx];
            for j in 0..i {
                acc = acc - tri_at(uplo, trans, i, j, a, lda) * x[j * incx];
            }
            x[i * incx] = match diag {
                Diag::NonUnit => {
                    let d = tri_at(uplo, trans, i, i, a, lda);
                    assert!(d != T::zero(), "singular triangular system");
                    acc / d
                }
                Diag::Unit => acc,
            };
        }
    } else {
        // Back substitution.
        for i in (0..n).rev() {
            let mut acc = x[i * incx];
            for j in i + 1..n {
                acc = acc - tri_at(uplo, trans, i, j, a, lda) * x[j * incx];
            }
            x[i * incx] = match diag {
                Diag::NonUnit => {
                    let d = tri_at(uplo, trans, i, i, a, lda);
                    assert!(d != T::zero(), "singular triangular system");
                    acc / d
                }
                Diag::Unit => acc,
            };
        }
    }
}

/// Rank-1 update `A <- alpha * x * y^T + A`, or `alpha * x * y^T` when
/// `clear` is set.
pub fn ger<T: Element>(
    m: usize,
    n: usize,
    alpha: T,
    x: &[T],
    incx: usize,
    y: &[T],
    incy: usize,
    a: &mut [T],
    lda: usize,
    clear: bool,
) {
    for j in 0..n {
        let t = alpha * y[j * incy];
        for i in 0..m {
            let v = t * x[i * incx];
            let e = &mut a[i + j * lda];
            *e = if clear { v } else { *e + v };
        }
    }
}

/// Symmetric rank-1 update `A <- alpha * x * x^T + A` on the `uplo`
/// triangle, or without the `+ A` term when `clear` is set.
pub fn syr<T: Element>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: usize,
    a: &mut [T],
    lda: usize,
    clear: bool,
) {
    for j in 0..n {
        let t = alpha * x[j * incx];
        let (lo, hi) = match uplo {
            Uplo::Upper => (0, j + 1),
            Uplo::Lower => (j, n),
        };
        for i in lo..hi {
            let v = t * x[i * incx];
            let e = &mut a[i + j * lda];
            *e = if clear { v } else { *e + v };
        }
    }
}

/// Symmetric rank-2 update
/// `A <- alpha * (x * y^T + y * x^T) + A` on the `uplo` triangle, or
/// without the `+ A` term when `clear` is set.
pub fn syr2<T: Element>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    incx: usize,
    y: &[T],
    incy: usize,
    a: &mut [T],
    lda: usize,
    clear: bool,
) {
    for j in 0..n {
        let tx = alpha * x[j * incx];
        let ty = alpha * y[j * incy];
        let (lo, hi) = match uplo {
            Uplo::Upper => (0, j + 1),
            Uplo::Lower => (j, n),
        };
        for i in lo..hi {
            let v = ty * x[i * incx] + tx * y[i * incy];
            let e = &mut a[i + j * lda];
            *e = if clear { v } else { *e + v };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // [[4, 2], [2, 3]] column-major
    const A: [f64; 4] = [4.0, 2.0, 2.0, 3.0];

    #[test]
    fn test_gemv_no_trans() {
        let x = [1.0f64, 1.0];
        let mut y = [f64::NAN, f64::NAN];
        gemv(Trans::No, 2, 2, 1.0, &A, 2, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, [6.0, 5.0]);
    }

    #[test]
    fn test_gemv_trans() {
        // [[1, 3], [2, 4]]^T * [1, 1] = [3, 7]
        let a = [1.0f64, 2.0, 3.0, 4.0];
        let x = [1.0f64, 1.0];
        let mut y = [0.0f64; 2];
        gemv(Trans::Trans, 2, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, [3.0, 7.0]);
    }

    #[test]
    fn test_symv_matches_full_product() {
        // Upper triangle of A only; lower half poisoned.
        let upper = [4.0f64, f64::NAN, 2.0, 3.0];
        let x = [1.0f64, 2.0];
        let mut y = [0.0f64; 2];
        symv(Uplo::Upper, 2, 1.0, &upper, 2, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, [8.0, 8.0]);
    }

    #[test]
    fn test_trmv_upper() {
        // U = [[2, 1], [0, 3]], x = [1, 1] -> [3, 3]
        let u = [2.0f64, 0.0, 1.0, 3.0];
        let mut x = [1.0f64, 1.0];
        trmv(Uplo::Upper, Trans::No, Diag::NonUnit, 2, &u, 2, &mut x, 1);
        assert_eq!(x, [3.0, 3.0]);
    }

    #[test]
    fn test_gdmv_clears_nan() {
        let d = [2.0f64, 3.0];
        let x = [1.0f64, 1.0];
        let mut y = [f64::NAN, f64::NAN];
        gdmv(2, 1.0, &d, 1, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, [2.0, 3.0]);
    }

    #[test]
    fn test_trsv_round_trip() {
        let u = [2.0f64, 0.0, 1.0, 3.0];
        let mut x = [1.0f64, 2.0];
        trmv(Uplo::Upper, Trans::No, Diag::NonUnit, 2, &u, 2, &mut x, 1);
        trsv(Uplo::Upper, Trans::No, Diag::NonUnit, 2, &u, 2, &mut x, 1);
        assert!((x[0] - 1.0).abs() < 1e-14);
        assert!((x[1] - 2.0).abs() < 1e-14);
    }

    #[test]
    fn test_ger_clear() {
        let x = [1.0f64, 2.0];
        let y = [3.0f64, 4.0];
        let mut a = [f64::NAN; 4];
        ger(2, 2, 1.0, &x, 1, &y, 1, &mut a, 2, true);
        assert_eq!(a, [3.0, 6.0, 4.0, 8.0]);
    }

    #[test]
    fn test_syr_lower() {
        let x = [1.0f64, 2.0];
        let mut a = [0.0f64; 4];
        syr(Uplo::Lower, 2, 2.0, &x, 1, &mut a, 2, false);
        // Lower triangle of 2 * x x^T; upper-right untouched.
        assert_eq!(a, [2.0, 4.0, 0.0, 8.0]);
    }

    #[test]
    fn test_syr2_upper() {
        let x = [1.0f64, 0.0];
        let y = [0.0f64, 1.0];
        let mut a = [0.0f64; 4];
        syr2(Uplo::Upper, 2, 1.0, &x, 1, &y, 1, &mut a, 2, true);
        // x y^T + y x^T = [[0, 1], [1, 0]], upper triangle stored.
        assert_eq!(a, [0.0, 0.0, 1.0, 0.0]);
    }
}
